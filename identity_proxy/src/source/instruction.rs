//!
//! The identity proxy program instruction.
//!

///
/// The storage word value.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Word {
    /// An unsigned integer.
    Integer(web3::types::U256),
    /// An address, stored right-aligned.
    Address(web3::types::Address),
}

///
/// The identity proxy program instruction.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instruction {
    /// Writes `value` directly into the storage `slot`.
    StorageWrite {
        /// The storage slot.
        slot: web3::types::H256,
        /// The value to store.
        value: Word,
    },
    /// Transfers `amount` of `token` from the contract to `recipient` via the safe-transfer library.
    TokenTransfer {
        /// The token contract address.
        token: web3::types::Address,
        /// The transfer recipient.
        recipient: web3::types::Address,
        /// The amount to transfer.
        amount: web3::types::U256,
    },
    /// Forwards the whole call data to `target` with `delegatecall`, and returns or reverts
    /// with the whole return data.
    DelegateForward {
        /// The logic contract address.
        target: web3::types::Address,
        /// The gas withheld from the delegated call.
        gas_reserve: u64,
    },
}

impl Instruction {
    ///
    /// A shortcut constructor for a storage write.
    ///
    pub fn storage_write(slot: web3::types::H256, value: Word) -> Self {
        Self::StorageWrite { slot, value }
    }

    ///
    /// Whether the instruction is a storage write.
    ///
    pub fn is_storage_write(&self) -> bool {
        matches!(self, Self::StorageWrite { .. })
    }
}
