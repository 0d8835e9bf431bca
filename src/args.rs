use std::path::PathBuf;

use clap::Parser;

const DEFAULT_DATA_DIR: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/data");

#[derive(Debug, Parser)]
#[command(name = "build_dataset")]
#[command(about = "Build the unified rural health facilities dataset from state source extracts")]
pub struct Args {
    /// Directory holding the source extracts and the output artifact.
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    pub data_dir: PathBuf,

    /// County rural-eligibility roster CSV. Defaults to
    /// data_dir/county-eligibility.csv.
    #[arg(long)]
    pub rural_areas_csv: Option<PathBuf>,

    /// Hospital provider list CSV (carries 3 banner rows before the
    /// header). Defaults to data_dir/hospital-provider-list.csv.
    #[arg(long)]
    pub hospitals_csv: Option<PathBuf>,

    /// Rural health clinic provider list CSV (carries 3 banner rows before
    /// the header). Defaults to data_dir/rural-health-clinics-provider-list.csv.
    #[arg(long)]
    pub clinics_csv: Option<PathBuf>,

    /// Candidate FQHC roster CSVs, tried in order; the first one that
    /// opens and yields at least one row wins. May be repeated.
    #[arg(long = "fqhc-csv")]
    pub fqhc_csvs: Vec<PathBuf>,

    /// Output artifact path. Defaults to data_dir/processed-data.json.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Two-letter state code the eligibility roster is filtered to.
    #[arg(long, default_value = "AR")]
    pub state: String,
}

impl Args {
    pub fn rural_areas_path(&self) -> PathBuf {
        self.rural_areas_csv
            .clone()
            .unwrap_or_else(|| self.data_dir.join("county-eligibility.csv"))
    }

    pub fn hospitals_path(&self) -> PathBuf {
        self.hospitals_csv
            .clone()
            .unwrap_or_else(|| self.data_dir.join("hospital-provider-list.csv"))
    }

    pub fn clinics_path(&self) -> PathBuf {
        self.clinics_csv
            .clone()
            .unwrap_or_else(|| self.data_dir.join("rural-health-clinics-provider-list.csv"))
    }

    pub fn fqhc_paths(&self) -> Vec<PathBuf> {
        if self.fqhc_csvs.is_empty() {
            vec![
                self.data_dir.join("fqhc-health-centers-current.csv"),
                self.data_dir.join("fqhc-health-centers.csv"),
            ]
        } else {
            self.fqhc_csvs.clone()
        }
    }

    pub fn output_path(&self) -> PathBuf {
        self.output
            .clone()
            .unwrap_or_else(|| self.data_dir.join("processed-data.json"))
    }
}
