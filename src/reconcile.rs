//! The central classification and join step: decides which raw facilities
//! serve a rural county, attaches centroids and the matched rural-area id,
//! and routes the rest to the per-source unmatched lists.

use std::collections::HashSet;

use crate::coords;
use crate::model::{
    FacilityType, RawFacility, RuralArea, RuralHealthFacility, UnmatchedByFile, UnmatchedFacility,
};
use crate::normalize::county_key;

/// Accepted facilities plus the rows that matched no rural county.
#[derive(Debug)]
pub struct ReconcileOutcome {
    pub facilities: Vec<RuralHealthFacility>,
    pub unmatched: UnmatchedByFile,
}

/// Normalized keys of every county flagged rural in the roster.
pub fn rural_county_set(areas: &[RuralArea]) -> HashSet<String> {
    areas
        .iter()
        .filter(|area| area.is_rural)
        .map(|area| county_key(&area.county_name))
        .collect()
}

/// Classifies and joins all raw facilities, in source order: hospitals,
/// then clinics, then FQHCs, preserving each source's row order.
///
/// Matching trusts the facility's free-text county after normalization;
/// the federal county code is never consulted. If duplicate roster rows
/// normalize to the same key, the first rural one in roster order wins
/// the join.
pub fn reconcile(
    areas: &[RuralArea],
    hospitals: Vec<RawFacility>,
    clinics: Vec<RawFacility>,
    fqhcs: Vec<RawFacility>,
) -> ReconcileOutcome {
    let rural_counties = rural_county_set(areas);
    let mut facilities = Vec::new();
    let mut unmatched = UnmatchedByFile::default();

    for facility in hospitals.into_iter().chain(clinics).chain(fqhcs) {
        let key = county_key(&facility.county);
        if !rural_counties.contains(&key) {
            let bucket = match facility.kind {
                FacilityType::Hospital => &mut unmatched.hospitals,
                FacilityType::RuralHealthClinic => &mut unmatched.clinics,
                FacilityType::Fqhc => &mut unmatched.fqhcs,
            };
            bucket.push(UnmatchedFacility {
                name: facility.name,
                county: facility.county,
                city: facility.city,
            });
            continue;
        }

        let rural_area = areas
            .iter()
            .find(|area| area.is_rural && county_key(&area.county_name) == key);
        let centroid = coords::centroid(&key);

        facilities.push(RuralHealthFacility {
            id: facility.id,
            name: facility.name,
            kind: facility.kind,
            address: facility.address,
            city: facility.city,
            county: facility.county,
            zip: facility.zip,
            latitude: centroid.map(|(lat, _)| lat),
            longitude: centroid.map(|(_, lon)| lon),
            rural_area_id: rural_area.map(|area| area.id.clone()),
        });
    }

    ReconcileOutcome { facilities, unmatched }
}
