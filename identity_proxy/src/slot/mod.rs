//!
//! The mapping storage slot derivation.
//!

pub mod hash;
pub mod layout;

use std::sync::Arc;

use crate::error::Error;
use crate::error::Result;

use self::hash::HashFunction;
use self::hash::Keccak256;

///
/// The mapping storage slot deriver.
///
/// The value of `mapping[key]` declared at `base_slot` lives at `hash(pad32(key) . pad32(base_slot))`.
///
#[derive(Clone)]
pub struct StorageSlotDeriver {
    /// The hash function.
    hash_function: Arc<dyn HashFunction>,
}

impl Default for StorageSlotDeriver {
    fn default() -> Self {
        Self::new(Arc::new(Keccak256))
    }
}

impl std::fmt::Debug for StorageSlotDeriver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("StorageSlotDeriver").finish_non_exhaustive()
    }
}

impl StorageSlotDeriver {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(hash_function: Arc<dyn HashFunction>) -> Self {
        Self { hash_function }
    }

    ///
    /// Derives the value slot of an address-keyed mapping entry.
    ///
    pub fn derive(
        &self,
        key: &web3::types::Address,
        base_slot: &web3::types::U256,
    ) -> web3::types::H256 {
        let mut preimage = Vec::with_capacity(crate::utils::BYTE_LENGTH_WORD * 2);
        preimage.extend_from_slice(crate::utils::address_to_h256(key).as_bytes());
        preimage.extend_from_slice(crate::utils::u256_to_h256(base_slot).as_bytes());
        web3::types::H256(self.hash_function.hash(preimage.as_slice()))
    }

    ///
    /// Derives the value slot from the raw key bytes and a big-endian base slot.
    ///
    /// The key must be exactly 20 bytes long, and the base slot must fit into 256 bits.
    ///
    pub fn derive_raw(&self, key: &[u8], base_slot: &[u8]) -> Result<web3::types::H256> {
        if key.len() != crate::utils::BYTE_LENGTH_ETH_ADDRESS {
            return Err(Error::Encoding(format!(
                "The mapping key must be {} bytes long, found {}",
                crate::utils::BYTE_LENGTH_ETH_ADDRESS,
                key.len()
            )));
        }
        let significant = base_slot
            .iter()
            .position(|byte| *byte != 0)
            .map(|position| &base_slot[position..])
            .unwrap_or_default();
        if significant.len() > crate::utils::BYTE_LENGTH_WORD {
            return Err(Error::Encoding(format!(
                "The base slot `0x{}` does not fit into 256 bits",
                hex::encode(base_slot)
            )));
        }

        let key = web3::types::Address::from_slice(key);
        let base_slot = web3::types::U256::from_big_endian(significant);
        Ok(self.derive(&key, &base_slot))
    }

    ///
    /// Derives the value slot from a base slot literal, decimal or `0x`-prefixed hexadecimal.
    ///
    pub fn derive_with_literal(
        &self,
        key: &web3::types::Address,
        base_slot: &str,
    ) -> Result<web3::types::H256> {
        let base_slot = crate::utils::parse_u256(base_slot)?;
        Ok(self.derive(key, &base_slot))
    }
}
