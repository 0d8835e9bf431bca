//! Persisted artifact I/O plus the read-only accessors the presentation
//! layer consumes.
//!
//! The artifact keeps its three-field shape (`facilities`, `summary`,
//! `ruralAreas`) for file consumers, but the accessors never trust the
//! persisted summary snapshot: summaries and county breakdowns are
//! recomputed from the facility list on every read, so they cannot drift
//! from it.

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::model::{
    AccessFootprint, CountyFacilities, Dataset, FacilitySummary, FacilityType, RuralArea,
    RuralHealthFacility,
};
use crate::normalize::county_key;
use crate::summary;

impl Dataset {
    /// Loads a previously built artifact. Whole-file, read-only.
    pub fn load(path: &Path) -> Result<Dataset> {
        let data = fs::read_to_string(path)
            .with_context(|| format!("read dataset {}", path.display()))?;
        serde_json::from_str(&data).with_context(|| format!("parse dataset {}", path.display()))
    }

    /// Writes the artifact in one shot: serialize fully, write to a
    /// sibling `.tmp` file, then rename into place. A failure leaves no
    /// partial artifact behind at `path`.
    pub fn write(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("create {}", parent.display()))?;
        }
        let json = serde_json::to_string_pretty(self).context("serialize dataset")?;

        let file_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("processed-data.json");
        let tmp_path = path.with_file_name(format!("{file_name}.tmp"));
        fs::write(&tmp_path, json)
            .with_context(|| format!("write dataset {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!("move dataset {} to {}", tmp_path.display(), path.display())
        })?;
        Ok(())
    }

    pub fn facilities(&self) -> &[RuralHealthFacility] {
        &self.facilities
    }

    pub fn rural_areas(&self) -> &[RuralArea] {
        &self.rural_areas
    }

    /// Aggregate counts, recomputed from the facility list.
    pub fn summary(&self) -> FacilitySummary {
        summary::calculate(&self.facilities)
    }

    /// Per-county breakdown by type, keyed by the county string as
    /// reported, sorted case-insensitively by county name.
    pub fn county_facilities(&self) -> Vec<CountyFacilities> {
        let mut breakdowns: Vec<CountyFacilities> = Vec::new();
        for facility in &self.facilities {
            let index = match breakdowns
                .iter()
                .position(|entry| entry.county == facility.county)
            {
                Some(index) => index,
                None => {
                    breakdowns.push(CountyFacilities {
                        county: facility.county.clone(),
                        hospitals: 0,
                        fqhcs: 0,
                        rural_health_clinics: 0,
                        total: 0,
                    });
                    breakdowns.len() - 1
                }
            };
            let entry = &mut breakdowns[index];
            entry.total += 1;
            match facility.kind {
                FacilityType::Hospital => entry.hospitals += 1,
                FacilityType::Fqhc => entry.fqhcs += 1,
                FacilityType::RuralHealthClinic => entry.rural_health_clinics += 1,
            }
        }
        breakdowns.sort_by(|a, b| {
            a.county
                .to_lowercase()
                .cmp(&b.county.to_lowercase())
                .then_with(|| a.county.cmp(&b.county))
        });
        breakdowns
    }

    /// Fraction of rural counties with at least one accepted facility.
    ///
    /// The denominator is filtered to rural-flagged roster entries, and
    /// both sides go through the standard county normalizer, matching the
    /// reconciler's notion of a rural county.
    pub fn access_footprint(&self) -> AccessFootprint {
        let rural_counties: HashSet<String> = self
            .rural_areas
            .iter()
            .filter(|area| area.is_rural)
            .map(|area| county_key(&area.county_name))
            .collect();
        let counties_with_facilities: HashSet<String> = self
            .facilities
            .iter()
            .map(|facility| county_key(&facility.county))
            .collect();

        let actual = rural_counties
            .intersection(&counties_with_facilities)
            .count();
        let target = rural_counties.len();
        let percentage = if target > 0 {
            actual as f64 / target as f64 * 100.0
        } else {
            0.0
        };
        AccessFootprint { target, actual, percentage }
    }
}
