//!
//! The identity proxy storage layout.
//!
//! The emitted contract declares its state variables in `DECLARATIONS` order, so the
//! declaration index is the slot. Reordering the declarations without updating the slots
//! corrupts the deployed storage, and the compiler does not detect it.
//!

/// The base slot of the `privileges` mapping.
pub const PRIVILEGES_SLOT: u64 = 0;

/// The slot of the `registryAddr` pointer.
pub const REGISTRY_SLOT: u64 = 1;

/// The state variable declarations, indexed by slot.
pub const DECLARATIONS: [&str; 2] = [
    "mapping (address => uint) internal privileges;",
    "address internal registryAddr;",
];

///
/// Returns the slot of the registry pointer as a storage word.
///
pub fn registry_slot() -> web3::types::H256 {
    web3::types::H256::from_low_u64_be(REGISTRY_SLOT)
}

///
/// Returns the base slot of the privileges mapping.
///
pub fn privileges_slot() -> web3::types::U256 {
    web3::types::U256::from(PRIVILEGES_SLOT)
}

#[cfg(test)]
mod tests {
    #[test]
    fn declarations_match_slots() {
        assert!(super::DECLARATIONS[super::PRIVILEGES_SLOT as usize].contains(" privileges;"));
        assert!(super::DECLARATIONS[super::REGISTRY_SLOT as usize].contains(" registryAddr;"));
    }
}
