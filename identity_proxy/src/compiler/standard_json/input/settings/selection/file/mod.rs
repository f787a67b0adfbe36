//!
//! The `solc --standard-json` output file selection.
//!

pub mod flag;

use std::collections::HashSet;

use serde::Serialize;

use self::flag::Flag as SelectionFlag;

///
/// The `solc --standard-json` output file selection.
///
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize)]
pub struct File {
    /// The per-contract output selections.
    #[serde(rename = "*", skip_serializing_if = "Option::is_none")]
    pub per_contract: Option<HashSet<SelectionFlag>>,
}

impl File {
    ///
    /// Creates the selection of every per-contract output.
    ///
    pub fn new_full() -> Self {
        Self {
            per_contract: Some(HashSet::from_iter([SelectionFlag::All])),
        }
    }
}
