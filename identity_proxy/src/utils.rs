//!
//! The identity proxy utils.
//!

use sha3::Digest;

use crate::error::Error;
use crate::error::Result;

/// The EVM word byte length.
pub const BYTE_LENGTH_WORD: usize = 32;

/// The Ethereum address byte length.
pub const BYTE_LENGTH_ETH_ADDRESS: usize = 20;

///
/// Returns the `keccak256` digest of `data`.
///
pub fn keccak256(data: &[u8]) -> [u8; BYTE_LENGTH_WORD] {
    sha3::Keccak256::digest(data).into()
}

///
/// Overrides the default formatting for `Address`, which replaces the middle with an ellipsis.
///
pub fn address_as_string(value: &web3::types::Address) -> String {
    hex::encode(value.as_bytes())
}

///
/// Overrides the default formatting for `H256`, which replaces the middle with an ellipsis.
///
pub fn h256_as_string(value: &web3::types::H256) -> String {
    hex::encode(value.as_bytes())
}

///
/// Returns the mixed-case checksum encoding of `address` with the `0x` prefix.
///
pub fn address_checksummed(address: &web3::types::Address) -> String {
    let lowercase = self::address_as_string(address);
    let hash = self::keccak256(lowercase.as_bytes());

    let mut result = String::with_capacity(2 + lowercase.len());
    result.push_str("0x");
    for (index, character) in lowercase.chars().enumerate() {
        let byte = hash[index / 2];
        let nibble = if index % 2 == 0 { byte >> 4 } else { byte & 0x0f };
        if character.is_ascii_alphabetic() && nibble >= 8 {
            result.push(character.to_ascii_uppercase());
        } else {
            result.push(character);
        }
    }
    result
}

///
/// Converts `Address` into `H256`, padding it with zeros on the left.
///
pub fn address_to_h256(address: &web3::types::Address) -> web3::types::H256 {
    let mut buffer = [0u8; BYTE_LENGTH_WORD];
    buffer[BYTE_LENGTH_WORD - BYTE_LENGTH_ETH_ADDRESS..].copy_from_slice(address.as_bytes());
    web3::types::H256(buffer)
}

///
/// Converts `U256` into `H256`.
///
pub fn u256_to_h256(value: &web3::types::U256) -> web3::types::H256 {
    let mut bytes = [0u8; BYTE_LENGTH_WORD];
    value.to_big_endian(&mut bytes);
    web3::types::H256(bytes)
}

///
/// Parses a hexadecimal address literal, with or without the `0x` prefix.
///
/// The literal must encode exactly 20 bytes.
///
pub fn parse_address(literal: &str) -> Result<web3::types::Address> {
    let digits = literal.strip_prefix("0x").unwrap_or(literal);
    let bytes = hex::decode(digits)
        .map_err(|error| Error::Encoding(format!("Invalid address `{literal}`: {error}")))?;
    if bytes.len() != BYTE_LENGTH_ETH_ADDRESS {
        return Err(Error::Encoding(format!(
            "Invalid address `{literal}`: expected {BYTE_LENGTH_ETH_ADDRESS} bytes, found {}",
            bytes.len()
        )));
    }
    Ok(web3::types::Address::from_slice(bytes.as_slice()))
}

///
/// Parses an unsigned 256-bit integer literal, either decimal or `0x`-prefixed hexadecimal.
///
pub fn parse_u256(literal: &str) -> Result<web3::types::U256> {
    let literal = literal.trim();
    let result = match literal.strip_prefix("0x") {
        Some(digits) if !digits.is_empty() => web3::types::U256::from_str_radix(digits, 16)
            .map_err(|error| format!("{error:?}")),
        Some(_) => Err("no digits".to_owned()),
        None if literal.starts_with('-') => Err("negative values are not allowed".to_owned()),
        None => web3::types::U256::from_dec_str(literal).map_err(|error| format!("{error:?}")),
    };
    result.map_err(|error| {
        Error::Encoding(format!(
            "Invalid unsigned 256-bit integer `{literal}`: {error}"
        ))
    })
}

#[cfg(test)]
mod tests {
    #[test]
    fn checksummed_reference_vectors() {
        for expected in [
            "0x5aAeb6053F3E94C9b9A09f33669435E7Ef1BeAed",
            "0xfB6916095ca1df60bB79Ce92cE3Ea74c37c5d359",
            "0xdbF03B407c01E7cD3CBea99509d93f8DDDC8C6FB",
            "0xD1220A0cf47c7B9Be7A2E6BA89F429762e7b9aDb",
        ] {
            let address = super::parse_address(expected).expect("Always valid");
            assert_eq!(super::address_checksummed(&address), expected);
        }
    }

    #[test]
    fn address_to_h256_pads_left() {
        let address = web3::types::Address::from_low_u64_be(0xe5);
        let word = super::address_to_h256(&address);
        assert_eq!(
            super::h256_as_string(&word),
            format!("{}e5", "0".repeat(62))
        );
    }

    #[test]
    fn parse_address_without_prefix() {
        let address = super::parse_address("00000000000000000000000000000000000000d4")
            .expect("Always valid");
        assert_eq!(address, web3::types::Address::from_low_u64_be(0xd4));
    }

    #[test]
    fn error_parse_address_short() {
        assert!(matches!(
            super::parse_address("0xd4"),
            Err(crate::Error::Encoding(_))
        ));
    }

    #[test]
    fn error_parse_address_not_hex() {
        assert!(matches!(
            super::parse_address("0x00000000000000000000000000000000000000zz"),
            Err(crate::Error::Encoding(_))
        ));
    }

    #[test]
    fn parse_u256_decimal_and_hex() {
        assert_eq!(
            super::parse_u256("1000").expect("Always valid"),
            web3::types::U256::from(1000)
        );
        assert_eq!(
            super::parse_u256("0x3e8").expect("Always valid"),
            web3::types::U256::from(1000)
        );
        assert_eq!(
            super::parse_u256(&web3::types::U256::MAX.to_string()).expect("Always valid"),
            web3::types::U256::MAX
        );
    }

    #[test]
    fn error_parse_u256_negative() {
        assert!(matches!(
            super::parse_u256("-1"),
            Err(crate::Error::Encoding(_))
        ));
    }

    #[test]
    fn error_parse_u256_overflow() {
        let too_big = format!("{}0", web3::types::U256::MAX);
        assert!(matches!(
            super::parse_u256(too_big.as_str()),
            Err(crate::Error::Encoding(_))
        ));
    }
}
