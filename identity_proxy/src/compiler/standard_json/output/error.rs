//!
//! The `solc --standard-json` output error.
//!

use serde::Deserialize;

///
/// The `solc --standard-json` output error.
///
/// Warnings and informational messages are reported in the same list.
///
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Error {
    /// The error severity.
    pub severity: String,
    /// The error message.
    pub message: String,
    /// The error message formatted with the source location.
    #[serde(default)]
    pub formatted_message: Option<String>,
}

impl Error {
    /// The severity of the diagnostics failing the compilation.
    pub const SEVERITY_ERROR: &'static str = "error";

    ///
    /// Whether the diagnostic fails the compilation.
    ///
    pub fn is_error(&self) -> bool {
        self.severity.as_str() == Self::SEVERITY_ERROR
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.formatted_message.as_deref() {
            Some(formatted_message) => write!(f, "{}", formatted_message.trim_end()),
            None => write!(f, "{}: {}", self.severity, self.message),
        }
    }
}
