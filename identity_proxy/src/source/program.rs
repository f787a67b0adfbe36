//!
//! The identity proxy program.
//!

use super::instruction::Instruction;

///
/// The identity proxy program.
///
/// The typed form of the contract source, rendered into text by the emitter.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Program {
    /// The contract name.
    pub name: String,
    /// The instructions executed once by the constructor, in order.
    pub constructor: Vec<Instruction>,
    /// The instructions executed by the fallback function.
    pub fallback: Vec<Instruction>,
}

impl Program {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, constructor: Vec<Instruction>, fallback: Vec<Instruction>) -> Self {
        Self {
            name,
            constructor,
            fallback,
        }
    }

    ///
    /// Returns the constructor storage writes in execution order.
    ///
    pub fn storage_writes(&self) -> impl Iterator<Item = &Instruction> {
        self.constructor
            .iter()
            .filter(|instruction| instruction.is_storage_write())
    }
}
