// Version information for the Fale proxy

/// Full version string
pub const VERSION: &str = "v0.1.0-fale-proxy-2026-10-19";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2026-10-19";

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Fale Proxy {} ({})", VERSION_NUMBER, BUILD_DATE)
}
