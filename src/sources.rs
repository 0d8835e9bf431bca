//! Loaders for the four source exports, plus the city-to-county inference
//! table used to backfill FQHC rows.
//!
//! Loaders never fail on data-quality problems; missing cells become empty
//! strings. They only return errors for I/O-level failures, and the FQHC
//! loader downgrades even those to warnings while it walks its candidate
//! paths.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::model::{FacilityDetail, FacilityType, RawFacility, RuralArea};
use crate::sheet::Sheet;

/// Eligibility label marking a county as not rural. Any other label counts
/// as rural.
pub const NOT_RURAL_LABEL: &str = "Not Fully FORHP Rural";

/// Leading banner/title rows before the header in the hospital and clinic
/// exports.
const PROVIDER_LIST_BANNER_ROWS: usize = 3;

/// Reads the county rural-eligibility roster, keeping rows for `state`.
pub fn load_rural_areas(path: &Path, state: &str) -> Result<Vec<RuralArea>> {
    let sheet = Sheet::from_path(path, 0)?;
    let areas = sheet
        .rows()
        .iter()
        .filter(|row| sheet.field(row, &["State"]) == state)
        .map(|row| {
            let fips = sheet.field(row, &["FIPS_2023", "FIPS"]);
            let eligibility = sheet.field(row, &["County_Eligibility"]);
            RuralArea {
                id: fips.clone(),
                county_name: sheet.field(row, &["County_Name_2023", "County_Name"]),
                state: sheet.field(row, &["State"]),
                fips_code: fips,
                is_rural: eligibility != NOT_RURAL_LABEL,
                eligibility,
            }
        })
        .collect();
    Ok(areas)
}

/// Reads the hospital provider list export.
pub fn load_hospitals(path: &Path) -> Result<Vec<RawFacility>> {
    let sheet = Sheet::from_path(path, PROVIDER_LIST_BANNER_ROWS)?;
    let hospitals = sheet
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| RawFacility {
            id: format!("hospital-{index}"),
            name: sheet.field(row, &["Doing Business As", "Name"]),
            kind: FacilityType::Hospital,
            address: sheet.field(row, &["Physical Address", "Address"]),
            city: sheet.field(row, &["Physical Address City", "City"]),
            county: sheet.field(row, &["Physical Address County", "County"]),
            zip: sheet.field(
                row,
                &["Physical Address Zip Code", "Physical Address Zipcode", "Zip"],
            ),
            detail: FacilityDetail::Hospital {
                license_number: sheet.field(row, &["License #", "License Number"]),
                facility_type: sheet.field(row, &["Facility Type"]),
                phone: sheet.field(row, &["Phone Number", "Phone No."]),
                total_beds: sheet.field(
                    row,
                    &["Total Licensed Beds (Acute + Recup)", "Total Licensed Beds"],
                ),
            },
        })
        .collect();
    Ok(hospitals)
}

/// Reads the rural health clinic provider list export.
pub fn load_clinics(path: &Path) -> Result<Vec<RawFacility>> {
    let sheet = Sheet::from_path(path, PROVIDER_LIST_BANNER_ROWS)?;
    let clinics = sheet
        .rows()
        .iter()
        .enumerate()
        .map(|(index, row)| RawFacility {
            id: format!("rhc-{index}"),
            name: sheet.field(row, &["Name"]),
            kind: FacilityType::RuralHealthClinic,
            address: sheet.field(row, &["Physical Address", "Address"]),
            city: sheet.field(row, &["Physical Address City", "City"]),
            county: sheet.field(row, &["County", "Physical Address County"]),
            zip: sheet.field(
                row,
                &["Physical Address Zipcode", "Physical Address Zip Code", "Zip"],
            ),
            detail: FacilityDetail::Clinic {
                medicare_provider_number: sheet
                    .field(row, &["Medicare Provider No.", "Medicare Provider Number"]),
                legal_name: sheet.field(row, &["Legal Name"]),
                phone: sheet.field(row, &["Phone No.", "Phone Number"]),
                administrator: sheet.field(row, &["Administrator"]),
                provider_based: sheet.field(row, &["Freestanding or Provider-Based"]),
            },
        })
        .collect();
    Ok(clinics)
}

/// Builds the city-to-county inference table from hospital then clinic
/// rows. Keys are lower-cased trimmed city names; the first facility seen
/// with a city wins, later duplicates are ignored. Best-effort only, used
/// to patch FQHC rows with blank county fields.
pub fn build_city_county_map(
    hospitals: &[RawFacility],
    clinics: &[RawFacility],
) -> HashMap<String, String> {
    let mut map = HashMap::new();
    for facility in hospitals.iter().chain(clinics) {
        if facility.city.is_empty() || facility.county.is_empty() {
            continue;
        }
        map.entry(facility.city.trim().to_lowercase())
            .or_insert_with(|| facility.county.clone());
    }
    map
}

/// Reads the FQHC export, trying `candidates` in order and taking the
/// first path that opens and yields at least one row.
///
/// Rows missing a county are backfilled from `city_to_county`; rows still
/// without a county afterwards are dropped and counted. This is the one
/// loader allowed to drop input rows, and the only one that swallows its
/// own I/O errors (each failed candidate is just a warning).
pub fn load_fqhcs(
    candidates: &[PathBuf],
    city_to_county: &HashMap<String, String>,
) -> Vec<RawFacility> {
    for path in candidates {
        let sheet = match Sheet::from_path(path, 0) {
            Ok(sheet) => sheet,
            Err(err) => {
                tracing::warn!("skipping FQHC candidate {}: {err:#}", path.display());
                continue;
            }
        };
        if sheet.is_empty() {
            continue;
        }

        let total_rows = sheet.rows().len();
        let fqhcs: Vec<RawFacility> = sheet
            .rows()
            .iter()
            .enumerate()
            .map(|(index, row)| {
                let city = sheet.field(row, &["City", "Physical Address City"]);
                let mut county = sheet.field(row, &["County", "Physical Address County"]);
                if county.is_empty() && !city.is_empty() {
                    if let Some(inferred) = city_to_county.get(&city.trim().to_lowercase()) {
                        county = inferred.clone();
                    }
                }
                let zip = sheet.field(
                    row,
                    &["Zip", "Zip Code", "ZIP Code", "Physical Address Zip Code"],
                );
                RawFacility {
                    id: format!("fqhc-{index}"),
                    name: sheet.field(
                        row,
                        &["Name", "Facility Name", "FQHC Name", "Health Center Name"],
                    ),
                    kind: FacilityType::Fqhc,
                    address: sheet.field(row, &["Address", "Street Address", "Physical Address"]),
                    city,
                    county,
                    // Exports sometimes carry zip+4; keep the five-digit part.
                    zip: zip.split('-').next().unwrap_or_default().to_string(),
                    detail: FacilityDetail::Fqhc,
                }
            })
            .filter(|fqhc| !fqhc.county.is_empty())
            .collect();

        let dropped = total_rows - fqhcs.len();
        tracing::info!(
            "loaded {} FQHCs from {} ({} rows dropped with no resolvable county)",
            fqhcs.len(),
            path.display(),
            dropped
        );
        return fqhcs;
    }

    tracing::warn!("FQHC files appear to be empty or invalid; continuing with zero FQHCs");
    Vec::new()
}

/// Loads a facility source whose absence is recoverable: an unreadable
/// file is downgraded to a warning and zero rows.
pub fn load_or_empty(
    label: &str,
    path: &Path,
    loader: fn(&Path) -> Result<Vec<RawFacility>>,
) -> Vec<RawFacility> {
    match loader(path) {
        Ok(rows) => rows,
        Err(err) => {
            tracing::warn!("skipping {label} source {}: {err:#}", path.display());
            Vec::new()
        }
    }
}
