//!
//! The identity privilege entry.
//!

use crate::error::Result;

///
/// The identity privilege entry.
///
/// Entries are not required to be unique by address. The last entry for an address wins.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PrivilegeEntry {
    /// The privileged account address.
    pub address: web3::types::Address,
    /// The privilege level.
    pub level: web3::types::U256,
}

impl PrivilegeEntry {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(address: web3::types::Address, level: web3::types::U256) -> Self {
        Self { address, level }
    }

    ///
    /// Parses the entry from an address literal and a level literal.
    ///
    pub fn try_from_strings(address: &str, level: &str) -> Result<Self> {
        Ok(Self::new(
            crate::utils::parse_address(address)?,
            crate::utils::parse_u256(level)?,
        ))
    }
}

impl From<(web3::types::Address, u64)> for PrivilegeEntry {
    fn from((address, level): (web3::types::Address, u64)) -> Self {
        Self::new(address, web3::types::U256::from(level))
    }
}
