//!
//! The identity proxy deployment request.
//!

pub mod privilege;

use crate::error::Result;

use self::privilege::PrivilegeEntry;

///
/// The identity proxy deployment request.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentRequest {
    /// The logic contract every call is forwarded to.
    pub proxied_address: web3::types::Address,
    /// The token the relayer fee is paid in.
    pub token_address: web3::types::Address,
    /// The relayer receiving the fee.
    pub relayer_address: web3::types::Address,
    /// The relayer fee amount.
    pub fee_amount: web3::types::U256,
    /// The identity registry address.
    pub registry_address: web3::types::Address,
    /// The initial privileges, applied in order.
    pub privileges: Vec<PrivilegeEntry>,
}

impl DeploymentRequest {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        proxied_address: web3::types::Address,
        token_address: web3::types::Address,
        relayer_address: web3::types::Address,
        fee_amount: web3::types::U256,
        registry_address: web3::types::Address,
        privileges: Vec<PrivilegeEntry>,
    ) -> Self {
        Self {
            proxied_address,
            token_address,
            relayer_address,
            fee_amount,
            registry_address,
            privileges,
        }
    }

    ///
    /// Parses the request from address and integer literals, as received from relayers.
    ///
    /// Addresses are hexadecimal with an optional `0x` prefix. Integers are decimal or
    /// `0x`-prefixed hexadecimal.
    ///
    pub fn try_from_strings(
        proxied_address: &str,
        token_address: &str,
        relayer_address: &str,
        fee_amount: &str,
        registry_address: &str,
        privileges: &[(&str, &str)],
    ) -> Result<Self> {
        let privileges = privileges
            .iter()
            .map(|(address, level)| PrivilegeEntry::try_from_strings(address, level))
            .collect::<Result<Vec<PrivilegeEntry>>>()?;

        Ok(Self::new(
            crate::utils::parse_address(proxied_address)?,
            crate::utils::parse_address(token_address)?,
            crate::utils::parse_address(relayer_address)?,
            crate::utils::parse_u256(fee_amount)?,
            crate::utils::parse_address(registry_address)?,
            privileges,
        ))
    }
}
