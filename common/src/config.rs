use crate::model::source_file::CsvSuffixPolicy;
use serde::{Deserialize, Serialize};

pub const DEFAULT_BASE_URL: &str = "/api";
pub const TEMPLATE_PATH: &str = "/modele";
pub const GENERATION_PATH: &str = "/fichiers-copropriete";

/// Where the generation service lives and how strictly uploads are checked.
///
/// `Default` reproduces the historical behavior: case-sensitive `.csv` check and
/// transport failures kept silent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceConfig {
    pub base_url: String,
    pub template_path: String,
    pub generation_path: String,
    pub csv_policy: CsvSuffixPolicy,
    /// Show a notification when a download could not be produced.
    pub notify_failures: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            template_path: TEMPLATE_PATH.to_string(),
            generation_path: GENERATION_PATH.to_string(),
            csv_policy: CsvSuffixPolicy::default(),
            notify_failures: false,
        }
    }
}

impl ServiceConfig {
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    pub fn template_url(&self) -> String {
        join_url(&self.base_url, &self.template_path)
    }

    pub fn generation_url(&self) -> String {
        join_url(&self.base_url, &self.generation_path)
    }
}

fn join_url(base: &str, path: &str) -> String {
    format!(
        "{}/{}",
        base.trim_end_matches('/'),
        path.trim_start_matches('/')
    )
}
