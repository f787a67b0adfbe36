//!
//! The `solc --standard-json` expected output selection flag.
//!

use serde::Serialize;

///
/// The `solc --standard-json` expected output selection flag.
///
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Flag {
    /// Every output the compiler can produce.
    #[serde(rename = "*")]
    All,
}
