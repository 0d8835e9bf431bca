//! Shared data model: source-facing raw records, the persisted artifact
//! shape, and the read-time derived views.
//!
//! Persisted structs serialize with the artifact's established camelCase
//! field names so existing consumers of the JSON file keep working.

use serde::{Deserialize, Serialize};

/// Exhaustive three-way facility classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum FacilityType {
    Hospital,
    #[serde(rename = "FQHC")]
    Fqhc,
    #[serde(rename = "Rural Health Clinic")]
    RuralHealthClinic,
}

/// One county row from the state rural-eligibility roster.
///
/// Rebuilt wholesale on every run; at most one entry per federal county
/// code in the source.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuralArea {
    pub id: String,
    pub county_name: String,
    pub state: String,
    pub fips_code: String,
    pub is_rural: bool,
    pub eligibility: String,
}

/// Source-specific payload carried on a raw row. The reconciler never
/// reads these; they exist so loaders preserve what their exports say.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FacilityDetail {
    Hospital {
        license_number: String,
        facility_type: String,
        phone: String,
        total_beds: String,
    },
    Clinic {
        medicare_provider_number: String,
        legal_name: String,
        phone: String,
        administrator: String,
        provider_based: String,
    },
    Fqhc,
}

/// Intermediate per-source record, consumed by the reconciler and dropped.
/// The `id` is only unique within one loader's output.
#[derive(Debug, Clone)]
pub struct RawFacility {
    pub id: String,
    pub name: String,
    pub kind: FacilityType,
    pub address: String,
    pub city: String,
    pub county: String,
    pub zip: String,
    pub detail: FacilityDetail,
}

/// The persisted, canonical facility entity. County is stored as reported
/// by the source; normalization is compute-only. Coordinates are absent
/// when the centroid table has no entry for the county.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuralHealthFacility {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: FacilityType,
    pub address: String,
    pub city: String,
    pub county: String,
    pub zip: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub rural_area_id: Option<String>,
}

/// A raw row whose county matched no rural county, kept for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UnmatchedFacility {
    pub name: String,
    pub county: String,
    pub city: String,
}

/// Unmatched rows, grouped by the source file they came from.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnmatchedByFile {
    pub hospitals: Vec<UnmatchedFacility>,
    pub clinics: Vec<UnmatchedFacility>,
    pub fqhcs: Vec<UnmatchedFacility>,
}

impl UnmatchedByFile {
    pub fn total(&self) -> usize {
        self.hospitals.len() + self.clinics.len() + self.fqhcs.len()
    }
}

/// Aggregate counts over the accepted facility list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FacilitySummary {
    pub total_facilities: usize,
    pub rural_hospitals: usize,
    #[serde(rename = "ruralFQHCs")]
    pub rural_fqhcs: usize,
    pub rural_health_clinics: usize,
    pub unique_rural_counties: usize,
}

/// Per-county breakdown of accepted facilities by type. Derived on every
/// read from the facility list, never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountyFacilities {
    pub county: String,
    pub hospitals: usize,
    pub fqhcs: usize,
    pub rural_health_clinics: usize,
    pub total: usize,
}

/// Fraction of rural counties with at least one accepted facility.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AccessFootprint {
    pub target: usize,
    pub actual: usize,
    pub percentage: f64,
}

/// The whole persisted artifact: one file, replaced atomically per build.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dataset {
    pub facilities: Vec<RuralHealthFacility>,
    pub summary: FacilitySummary,
    pub rural_areas: Vec<RuralArea>,
}
