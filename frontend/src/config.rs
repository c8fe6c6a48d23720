//! Build-time configuration.
//!
//! The bundle is static, so settings are baked in when it is compiled:
//!
//! - `COPRO_API_BASE_URL`: prefix of the generation service routes (default `/api`).
//! - `COPRO_CSV_CASE_INSENSITIVE`: accept `.CSV` and other casings when truthy.
//! - `COPRO_NOTIFY_FAILURES`: show a toast when a download could not be produced.

use common::{CsvSuffixPolicy, ServiceConfig};

pub fn build_config() -> ServiceConfig {
    resolve(
        option_env!("COPRO_API_BASE_URL"),
        option_env!("COPRO_CSV_CASE_INSENSITIVE"),
        option_env!("COPRO_NOTIFY_FAILURES"),
    )
}

fn resolve(
    base_url: Option<&str>,
    case_insensitive: Option<&str>,
    notify_failures: Option<&str>,
) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    if let Some(base_url) = base_url.map(str::trim).filter(|url| !url.is_empty()) {
        config.base_url = base_url.to_string();
    }
    if is_truthy(case_insensitive) {
        config.csv_policy = CsvSuffixPolicy::CaseInsensitive;
    }
    config.notify_failures = is_truthy(notify_failures);
    config
}

fn is_truthy(value: Option<&str>) -> bool {
    matches!(
        value.map(|v| v.trim().to_ascii_lowercase()).as_deref(),
        Some("1" | "true" | "yes" | "on")
    )
}
