//!
//! The `solc --standard-json` input settings.
//!

pub mod optimizer;
pub mod selection;

use serde::Serialize;

use self::optimizer::Optimizer;
use self::selection::Selection;

///
/// The `solc --standard-json` input settings.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Settings {
    /// The output selection filters.
    pub output_selection: Selection,
    /// The optimizer settings.
    pub optimizer: Optimizer,
}

impl Settings {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(output_selection: Selection, optimizer: Optimizer) -> Self {
        Self {
            output_selection,
            optimizer,
        }
    }
}
