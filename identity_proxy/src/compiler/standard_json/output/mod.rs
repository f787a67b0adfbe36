//!
//! The `solc --standard-json` output.
//!

pub mod contract;
pub mod error;

use std::collections::BTreeMap;

use serde::Deserialize;

use self::contract::Contract;
use self::error::Error;

///
/// The `solc --standard-json` output.
///
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Output {
    /// The file-contract hashmap.
    #[serde(default)]
    pub contracts: Option<BTreeMap<String, BTreeMap<String, Contract>>>,
    /// The compilation errors and warnings.
    #[serde(default)]
    pub errors: Option<Vec<Error>>,
}

impl Output {
    ///
    /// Returns the error-severity diagnostics.
    ///
    pub fn error_messages(&self) -> Vec<String> {
        self.errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|error| error.is_error())
            .map(|error| error.to_string())
            .collect()
    }

    ///
    /// Returns the diagnostics that do not fail the compilation.
    ///
    pub fn warnings(&self) -> impl Iterator<Item = &Error> {
        self.errors
            .as_deref()
            .unwrap_or_default()
            .iter()
            .filter(|error| !error.is_error())
    }

    ///
    /// Returns the contract by its source file and name.
    ///
    pub fn get_contract(&self, file: &str, name: &str) -> Option<&Contract> {
        self.contracts.as_ref()?.get(file)?.get(name)
    }

    ///
    /// Returns all contract paths in the `file:name` format.
    ///
    pub fn contract_paths(&self) -> Vec<String> {
        self.contracts
            .iter()
            .flat_map(|files| files.iter())
            .flat_map(|(file, contracts)| {
                contracts.keys().map(move |name| format!("{file}:{name}"))
            })
            .collect()
    }
}
