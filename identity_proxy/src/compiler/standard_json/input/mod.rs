//!
//! The `solc --standard-json` input.
//!

pub mod language;
pub mod settings;
pub mod source;

use std::collections::BTreeMap;

use serde::Serialize;

use self::language::Language;
use self::settings::optimizer::Optimizer as SolcStandardJsonInputSettingsOptimizer;
use self::settings::selection::Selection as SolcStandardJsonInputSettingsSelection;
use self::settings::Settings;
use self::source::Source;

///
/// The `solc --standard-json` input.
///
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Input {
    /// The input language.
    pub language: Language,
    /// The input source code files hashmap.
    pub sources: BTreeMap<String, Source>,
    /// The compiler settings.
    pub settings: Settings,
}

impl Input {
    ///
    /// A shortcut constructor from source code.
    ///
    pub fn from_sources(
        sources: BTreeMap<String, String>,
        output_selection: SolcStandardJsonInputSettingsSelection,
        optimizer: SolcStandardJsonInputSettingsOptimizer,
    ) -> Self {
        let sources = sources
            .into_iter()
            .map(|(path, content)| (path, Source::from(content)))
            .collect();

        Self {
            language: Language::Solidity,
            sources,
            settings: Settings::new(output_selection, optimizer),
        }
    }
}
