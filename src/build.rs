//! Orchestration for the one-shot batch build: load the four sources,
//! reconcile, summarize, report to the operator, and write the artifact.

use anyhow::{Context, Result};

use crate::args::Args;
use crate::model::{Dataset, FacilitySummary, UnmatchedByFile, UnmatchedFacility};
use crate::reconcile::{self, ReconcileOutcome};
use crate::sources;
use crate::summary;

/// Runs the full build. The eligibility roster and the output write are
/// fatal; everything else degrades per source and the build continues.
pub fn run(args: &Args) -> Result<()> {
    let rural_areas_path = args.rural_areas_path();
    let rural_areas = sources::load_rural_areas(&rural_areas_path, &args.state)
        .with_context(|| format!("load rural-eligibility roster {}", rural_areas_path.display()))?;
    tracing::info!(
        "loaded {} {} counties from the eligibility roster",
        rural_areas.len(),
        args.state
    );

    let hospitals = sources::load_or_empty("hospital", &args.hospitals_path(), sources::load_hospitals);
    let clinics = sources::load_or_empty("clinic", &args.clinics_path(), sources::load_clinics);
    tracing::info!("loaded {} hospitals, {} clinics", hospitals.len(), clinics.len());

    let city_to_county = sources::build_city_county_map(&hospitals, &clinics);
    let fqhcs = sources::load_fqhcs(&args.fqhc_paths(), &city_to_county);

    let ReconcileOutcome { facilities, unmatched } =
        reconcile::reconcile(&rural_areas, hospitals, clinics, fqhcs);
    let facility_summary = summary::calculate(&facilities);

    print_report(&facility_summary, &unmatched);

    let dataset = Dataset {
        facilities,
        summary: facility_summary,
        rural_areas,
    };
    let output_path = args.output_path();
    dataset.write(&output_path)?;
    println!("\nData written to: {}", output_path.display());
    Ok(())
}

fn distinct_counties(unmatched: &[UnmatchedFacility]) -> Vec<&str> {
    let mut counties: Vec<&str> = Vec::new();
    for facility in unmatched {
        if !counties.contains(&facility.county.as_str()) {
            counties.push(&facility.county);
        }
    }
    counties
}

/// Operator-facing console report: counts by type, matched rural county
/// count, and the distinct unmatched county names per source.
fn print_report(summary: &FacilitySummary, unmatched: &UnmatchedByFile) {
    println!("\n=== UNIFIED RURAL HEALTH FACILITIES ===");
    println!("\nFacilities by Type:");
    println!("  Hospitals: {}", summary.rural_hospitals);
    println!("  FQHCs: {}", summary.rural_fqhcs);
    println!("  Rural Health Clinics: {}", summary.rural_health_clinics);
    println!("  Total Facilities: {}", summary.total_facilities);

    println!("\nRural Counties Matched: {}", summary.unique_rural_counties);

    println!("\nUnmatched Rows by File:");
    println!(
        "  Hospitals: {} facilities in non-rural counties",
        unmatched.hospitals.len()
    );
    println!(
        "  FQHCs: {} facilities in non-rural counties",
        unmatched.fqhcs.len()
    );
    println!(
        "  Rural Health Clinics: {} facilities in non-rural counties",
        unmatched.clinics.len()
    );

    if !unmatched.hospitals.is_empty() {
        println!(
            "\n  Hospital unmatched counties: {}",
            distinct_counties(&unmatched.hospitals).join(", ")
        );
    }
    if !unmatched.fqhcs.is_empty() {
        println!(
            "  FQHC unmatched counties: {}",
            distinct_counties(&unmatched.fqhcs).join(", ")
        );
    }
    if !unmatched.clinics.is_empty() {
        println!(
            "  Clinic unmatched counties: {}",
            distinct_counties(&unmatched.clinics).join(", ")
        );
    }
}
