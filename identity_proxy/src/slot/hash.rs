//!
//! The storage slot hash function.
//!

///
/// The storage slot hash function.
///
pub trait HashFunction: Send + Sync + 'static {
    ///
    /// Returns the 32-byte digest of `data`.
    ///
    fn hash(&self, data: &[u8]) -> [u8; crate::utils::BYTE_LENGTH_WORD];
}

///
/// The `keccak256` hash function used by the EVM mapping storage layout.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct Keccak256;

impl HashFunction for Keccak256 {
    fn hash(&self, data: &[u8]) -> [u8; crate::utils::BYTE_LENGTH_WORD] {
        crate::utils::keccak256(data)
    }
}

#[cfg(test)]
mod tests {
    use super::HashFunction;
    use super::Keccak256;

    #[test]
    fn empty_input() {
        assert_eq!(
            hex::encode(Keccak256.hash(&[])),
            "c5d2460186f7233c927e7db2dcc703c0e500b653ca82273b7bfad8045d85a470"
        );
    }
}
