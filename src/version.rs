// Version information for the Fabstir Image Gateway

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-image-gateway-2025-08-30";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-30";

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("Fabstir Image Gateway {} ({})", VERSION_NUMBER, BUILD_DATE)
}
