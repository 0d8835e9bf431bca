//! End-to-end build over CSV fixtures: loads, reconciles, writes the
//! artifact, then reloads it through the accessor layer.

use std::fs;
use std::path::{Path, PathBuf};

use rural_health_dataset::args::Args;
use rural_health_dataset::build;
use rural_health_dataset::model::{Dataset, FacilityType};

fn fixture_dir(tag: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!(
        "rural-health-dataset-e2e-{tag}-{}",
        std::process::id()
    ));
    fs::create_dir_all(&dir).unwrap();
    dir
}

fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("county-eligibility.csv"),
        "FIPS_2023,County_Name_2023,State,County_Eligibility\n\
         05005,Baxter County,AR,Fully FORHP Rural\n\
         05021,Clay County,AR,Fully FORHP Rural\n\
         05049,Fulton County,AR,Fully FORHP Rural\n\
         05119,Pulaski County,AR,Not Fully FORHP Rural\n\
         48453,Travis County,TX,Not Fully FORHP Rural\n",
    )
    .unwrap();

    fs::write(
        dir.join("hospital-provider-list.csv"),
        "Hospital Provider List,,,,,,,,\n\
         State Licensing Agency,,,,,,,,\n\
         ,,,,,,,,\n\
         License #,Doing Business As,Facility Type,Physical Address,Physical Address City,Physical Address County,Physical Address Zip Code,Phone Number,Total Licensed Beds (Acute + Recup)\n\
         H-100,Baxter Regional Medical Center,General,624 Hospital Dr,Mountain Home,Baxter,72653,870-508-1000,209\n\
         H-101,CHI St. Vincent,General,2 St Vincent Cir,Little Rock,Pulaski,72205,501-552-3000,615\n",
    )
    .unwrap();

    fs::write(
        dir.join("rural-health-clinics-provider-list.csv"),
        "Rural Health Clinics,,,,,,,,,\n\
         Provider List,,,,,,,,,\n\
         ,,,,,,,,,\n\
         \"Medicare\r\nProvider\r\nNo.\",Name,Legal Name,Physical Address,Physical Address City,County,Physical Address Zipcode,\"Phone \r\nNo.\",Administrator,\"Freestanding\r\nor\r\nProvider-Based\"\n\
         04-1234,Salem Clinic,Salem Clinic LLC,101 Main St,Salem,Fulton,72576,870-895-2100,J Smith,Freestanding\n",
    )
    .unwrap();

    fs::write(
        dir.join("fqhc-health-centers.csv"),
        "Name,Address,City,County,Zip\n\
         1st Choice Healthcare,2care Way,Corning,Clay,72422-9801\n\
         Mountain Home Health Center,720 S Main St,Mountain Home,,72653\n",
    )
    .unwrap();
}

fn build_args(dir: &Path) -> Args {
    Args {
        data_dir: dir.to_path_buf(),
        rural_areas_csv: None,
        hospitals_csv: None,
        clinics_csv: None,
        fqhc_csvs: vec![
            dir.join("no-such-file.csv"),
            dir.join("fqhc-health-centers.csv"),
        ],
        output: None,
        state: "AR".to_string(),
    }
}

#[test]
fn full_build_produces_the_expected_artifact() {
    let dir = fixture_dir("full");
    write_fixtures(&dir);
    let args = build_args(&dir);

    build::run(&args).unwrap();

    let dataset = Dataset::load(&dir.join("processed-data.json")).unwrap();

    // Baxter hospital: accepted, joined to FIPS 05005, with centroid.
    let baxter = &dataset.facilities()[0];
    assert_eq!(baxter.id, "hospital-0");
    assert_eq!(baxter.kind, FacilityType::Hospital);
    assert_eq!(baxter.county, "Baxter");
    assert_eq!(baxter.rural_area_id.as_deref(), Some("05005"));
    assert_eq!(baxter.latitude, Some(36.3156));
    assert_eq!(baxter.longitude, Some(-92.3918));

    // Pulaski hospital is non-rural: excluded from the facility list.
    assert!(
        dataset
            .facilities()
            .iter()
            .all(|facility| facility.county != "Pulaski")
    );

    // FQHC with blank county inferred Baxter from the hospital's city.
    let inferred = dataset
        .facilities()
        .iter()
        .find(|facility| facility.name == "Mountain Home Health Center")
        .unwrap();
    assert_eq!(inferred.county, "Baxter");
    assert_eq!(inferred.kind, FacilityType::Fqhc);
    assert_eq!(inferred.rural_area_id.as_deref(), Some("05005"));

    // FQHC zip+4 trimmed to five digits.
    let corning = dataset
        .facilities()
        .iter()
        .find(|facility| facility.name == "1st Choice Healthcare")
        .unwrap();
    assert_eq!(corning.zip, "72422");

    // Source order then row order: hospitals, clinics, fqhcs.
    let ids: Vec<&str> = dataset
        .facilities()
        .iter()
        .map(|facility| facility.id.as_str())
        .collect();
    assert_eq!(ids, ["hospital-0", "rhc-0", "fqhc-0", "fqhc-1"]);

    // Roster is persisted filtered to the requested state.
    assert_eq!(dataset.rural_areas().len(), 4);
    assert!(dataset.rural_areas().iter().all(|area| area.state == "AR"));

    let summary = dataset.summary();
    assert_eq!(summary.total_facilities, 4);
    assert_eq!(summary.rural_hospitals, 1);
    assert_eq!(summary.rural_health_clinics, 1);
    assert_eq!(summary.rural_fqhcs, 2);
    assert_eq!(summary.unique_rural_counties, 3);

    // 3 of 3 rural counties have at least one facility.
    let footprint = dataset.access_footprint();
    assert_eq!(footprint.target, 3);
    assert_eq!(footprint.actual, 3);
    assert!((footprint.percentage - 100.0).abs() < f64::EPSILON);

    let counties = dataset.county_facilities();
    let names: Vec<&str> = counties.iter().map(|c| c.county.as_str()).collect();
    assert_eq!(names, ["Baxter", "Clay", "Fulton"]);
}

#[test]
fn missing_facility_sources_still_yield_an_artifact() {
    let dir = fixture_dir("degraded");
    fs::write(
        dir.join("county-eligibility.csv"),
        "FIPS_2023,County_Name_2023,State,County_Eligibility\n\
         05005,Baxter County,AR,Fully FORHP Rural\n",
    )
    .unwrap();

    // No hospital, clinic, or FQHC files at all.
    let args = build_args(&dir);
    build::run(&args).unwrap();

    let dataset = Dataset::load(&dir.join("processed-data.json")).unwrap();
    assert!(dataset.facilities().is_empty());
    assert_eq!(dataset.rural_areas().len(), 1);
    assert_eq!(dataset.summary().total_facilities, 0);
    assert_eq!(dataset.access_footprint().actual, 0);
}

#[test]
fn missing_roster_is_fatal() {
    let dir = fixture_dir("no-roster");
    let args = build_args(&dir);
    assert!(build::run(&args).is_err());
}
