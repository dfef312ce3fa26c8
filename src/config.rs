// src/config.rs
use std::path::PathBuf;

/// Converted-report output file, written under the datasets directory.
pub const REPORT_DATA_FILE: &str = "sic3pro_data.json";

/// Scratch file used while downloading a report before conversion.
pub const TEMP_DOWNLOAD_FILE: &str = "temp_sic3pro.html";

/// Where generated JSON ends up. Passed explicitly into every save path so
/// nothing depends on the process working directory.
#[derive(Debug, Clone)]
pub struct OutputConfig {
    pub datasets_dir: PathBuf,
}

impl Default for OutputConfig {
    fn default() -> Self {
        OutputConfig {
            datasets_dir: PathBuf::from("data/datasets"),
        }
    }
}

impl OutputConfig {
    pub fn new(datasets_dir: impl Into<PathBuf>) -> Self {
        OutputConfig {
            datasets_dir: datasets_dir.into(),
        }
    }

    /// Full path of the converted-report JSON.
    pub fn report_data_path(&self) -> PathBuf {
        self.datasets_dir.join(REPORT_DATA_FILE)
    }

    /// Full path of a named dataset file, e.g. `termination.json`.
    pub fn dataset_path(&self, file_name: &str) -> PathBuf {
        self.datasets_dir.join(file_name)
    }
}
