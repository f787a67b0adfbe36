//!
//! The compiled contract artifact.
//!

///
/// The compiled contract artifact.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledArtifact {
    /// The contract path in the `file:name` format.
    pub contract: String,
    /// The deploy bytecode.
    pub bytecode: Vec<u8>,
    /// The runtime bytecode, if returned by the compiler.
    pub deployed_bytecode: Option<Vec<u8>>,
}

impl CompiledArtifact {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(contract: String, bytecode: Vec<u8>, deployed_bytecode: Option<Vec<u8>>) -> Self {
        Self {
            contract,
            bytecode,
            deployed_bytecode,
        }
    }
}
