//!
//! The `solc --standard-json` output contract EVM bytecode.
//!

use serde::Deserialize;

///
/// The `solc --standard-json` output contract EVM bytecode.
///
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Bytecode {
    /// The bytecode object.
    pub object: String,
}

impl Bytecode {
    /// The unlinked library placeholder delimiter.
    const PLACEHOLDER_DELIMITER: &'static str = "__";

    ///
    /// Decodes the hexadecimal bytecode object.
    ///
    pub fn decode(&self) -> anyhow::Result<Vec<u8>> {
        let object = self.object.strip_prefix("0x").unwrap_or(self.object.as_str());
        if let Some(position) = object.find(Self::PLACEHOLDER_DELIMITER) {
            anyhow::bail!("The bytecode contains an unlinked library placeholder at offset {position}");
        }
        hex::decode(object).map_err(|error| anyhow::anyhow!("The bytecode is invalid: {error}"))
    }
}
