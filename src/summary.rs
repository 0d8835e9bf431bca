//! Pure aggregation over the accepted facility list. Deterministic and
//! re-runnable from the facility list alone.

use std::collections::HashSet;

use crate::model::{FacilitySummary, FacilityType, RuralHealthFacility};
use crate::normalize::county_key;

pub fn calculate(facilities: &[RuralHealthFacility]) -> FacilitySummary {
    let mut rural_hospitals = 0;
    let mut rural_fqhcs = 0;
    let mut rural_health_clinics = 0;
    let mut counties = HashSet::new();

    for facility in facilities {
        match facility.kind {
            FacilityType::Hospital => rural_hospitals += 1,
            FacilityType::Fqhc => rural_fqhcs += 1,
            FacilityType::RuralHealthClinic => rural_health_clinics += 1,
        }
        counties.insert(county_key(&facility.county));
    }

    FacilitySummary {
        total_facilities: facilities.len(),
        rural_hospitals,
        rural_fqhcs,
        rural_health_clinics,
        unique_rural_counties: counties.len(),
    }
}
