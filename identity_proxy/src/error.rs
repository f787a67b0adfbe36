//!
//! The identity proxy payload generation error.
//!

use std::path::PathBuf;

///
/// The identity proxy payload generation error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A malformed address or integer literal, or an out-of-range storage slot index.
    #[error("Encoding error: {0}")]
    Encoding(String),
    /// The safe-transfer library source cannot be read.
    #[error("Reading library source {path:?}: {error}")]
    IO {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the library source.
        path: PathBuf,
    },
    /// The configuration file cannot be opened or parsed.
    #[error("Reading config {path:?}: {message}")]
    Config {
        /// The error description.
        message: String,
        /// The path to the config file.
        path: PathBuf,
    },
    /// The compiler reported errors or did not produce the requested contract.
    #[error("Compiling `{contract}`: {}", messages.join("\n"))]
    Compile {
        /// The contract path in the `file:name` format.
        contract: String,
        /// The aggregated diagnostic messages.
        messages: Vec<String>,
    },
    /// The compiler produced an empty bytecode without reporting any errors.
    #[error("The bytecode of `{contract}` is empty")]
    EmptyArtifact {
        /// The contract path in the `file:name` format.
        contract: String,
    },
}

impl Error {
    ///
    /// A shortcut constructor for a compile error with a single message.
    ///
    pub fn compile(contract: impl ToString, message: impl ToString) -> Self {
        Self::Compile {
            contract: contract.to_string(),
            messages: vec![message.to_string()],
        }
    }
}

///
/// The crate result alias.
///
pub type Result<T> = std::result::Result<T, Error>;
