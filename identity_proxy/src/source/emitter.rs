//!
//! The Solidity source code emitter.
//!

use crate::slot::layout;

use super::instruction::Instruction;
use super::instruction::Word;
use super::program::Program;

///
/// The Solidity source code emitter.
///
/// Consecutive storage writes are emitted as a single inline assembly block, so their
/// execution order is the instruction order.
///
#[derive(Debug, Default)]
pub struct Emitter {
    /// The output buffer.
    buffer: String,
    /// The current indentation depth.
    depth: usize,
}

impl Emitter {
    /// The target language version requirement.
    pub const LANGUAGE_VERSION: &'static str = "^0.5.6";

    /// The safe-transfer library source unit name.
    pub const LIBRARY_SOURCE_NAME: &'static str = "SafeERC20.sol";

    /// The safe-transfer library name.
    pub const LIBRARY_NAME: &'static str = "SafeERC20";

    ///
    /// Renders the program into a complete source unit.
    ///
    pub fn emit(program: &Program) -> String {
        let mut emitter = Self::default();

        emitter.line(format!("pragma solidity {};", Self::LANGUAGE_VERSION).as_str());
        emitter.blank();
        emitter.line(format!("import \"{}\";", Self::LIBRARY_SOURCE_NAME).as_str());
        emitter.blank();
        emitter.open(format!("contract {}", program.name).as_str());
        for declaration in layout::DECLARATIONS.iter() {
            emitter.line(declaration);
        }
        emitter.blank();
        emitter.constructor(program.constructor.as_slice());
        if !program.fallback.is_empty() {
            emitter.blank();
            emitter.fallback(program.fallback.as_slice());
        }
        emitter.close();

        emitter.buffer
    }

    ///
    /// Emits the constructor.
    ///
    fn constructor(&mut self, instructions: &[Instruction]) {
        self.line("constructor()");
        self.depth += 1;
        self.line("public");
        self.depth -= 1;
        self.open("");
        self.body(instructions);
        self.close();
    }

    ///
    /// Emits the fallback function.
    ///
    fn fallback(&mut self, instructions: &[Instruction]) {
        self.line("function () external");
        self.open("");
        self.body(instructions);
        self.close();
    }

    ///
    /// Emits a function body, grouping consecutive storage writes into assembly blocks.
    ///
    fn body(&mut self, instructions: &[Instruction]) {
        let mut index = 0;
        while index < instructions.len() {
            let writes = instructions[index..]
                .iter()
                .take_while(|instruction| instruction.is_storage_write())
                .count();
            if writes > 0 {
                self.open("assembly");
                for instruction in instructions[index..index + writes].iter() {
                    self.instruction(instruction);
                }
                self.close();
                index += writes;
            } else {
                self.instruction(&instructions[index]);
                index += 1;
            }
        }
    }

    ///
    /// Emits a single instruction.
    ///
    fn instruction(&mut self, instruction: &Instruction) {
        match instruction {
            Instruction::StorageWrite { slot, value } => {
                self.line(
                    format!(
                        "sstore(0x{}, {})",
                        crate::utils::h256_as_string(slot),
                        Self::word(value)
                    )
                    .as_str(),
                );
            }
            Instruction::TokenTransfer {
                token,
                recipient,
                amount,
            } => {
                self.line(
                    format!(
                        "{}.transfer(address({}), address({}), uint256({}));",
                        Self::LIBRARY_NAME,
                        crate::utils::address_checksummed(token),
                        crate::utils::address_checksummed(recipient),
                        amount,
                    )
                    .as_str(),
                );
            }
            Instruction::DelegateForward {
                target,
                gas_reserve,
            } => {
                self.line(
                    format!(
                        "address to = address({});",
                        crate::utils::address_checksummed(target)
                    )
                    .as_str(),
                );
                self.open("assembly");
                self.line("calldatacopy(0, 0, calldatasize())");
                self.line(
                    format!(
                        "let result := delegatecall(sub(gas(), {gas_reserve}), to, 0, calldatasize(), 0, 0)"
                    )
                    .as_str(),
                );
                self.line("returndatacopy(0, 0, returndatasize())");
                self.line("switch result");
                self.line("case 0 { revert(0, returndatasize()) }");
                self.line("default { return(0, returndatasize()) }");
                self.close();
            }
        }
    }

    ///
    /// Renders a storage word as an assembly literal.
    ///
    fn word(value: &Word) -> String {
        match value {
            Word::Integer(value) => value.to_string(),
            Word::Address(address) => format!("0x{}", crate::utils::address_as_string(address)),
        }
    }

    ///
    /// Opens a block with an optional header.
    ///
    fn open(&mut self, header: &str) {
        if header.is_empty() {
            self.line("{");
        } else {
            self.line(format!("{header} {{").as_str());
        }
        self.depth += 1;
    }

    ///
    /// Closes the innermost block.
    ///
    fn close(&mut self) {
        self.depth -= 1;
        self.line("}");
    }

    ///
    /// Emits an indented line.
    ///
    fn line(&mut self, text: &str) {
        for _ in 0..self.depth {
            self.buffer.push('\t');
        }
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    ///
    /// Emits an empty line.
    ///
    fn blank(&mut self) {
        self.buffer.push('\n');
    }
}
