//! # Validator Key Derivation
//!
//! Derives the validator address from a secp256k1 private key: keccak-256 of
//! the uncompressed public key, last 20 bytes, rendered EIP-55 checksummed.

use alloy_primitives::Address;
use k256::ecdsa::SigningKey;

use super::decode_key_material;
use crate::error::KeyDerivationError;

/// Derive the EIP-55 checksummed validator address from stored key material.
pub fn validator_address(raw: &[u8]) -> Result<String, KeyDerivationError> {
    let key_bytes = decode_key_material(raw)?;

    let signing_key = SigningKey::from_slice(&key_bytes)
        .map_err(|e| KeyDerivationError::InvalidEcdsaKey(e.to_string()))?;

    let address = Address::from_public_key(signing_key.verifying_key());

    Ok(address.to_checksum(None))
}

#[cfg(test)]
mod tests {
    use super::*;

    // EIP-155 example key: thirty-two 0x46 bytes.
    const EIP155_KEY: &str = "4646464646464646464646464646464646464646464646464646464646464646";
    const EIP155_ADDRESS: &str = "0x9d8A62f656a8d1615C1294fd71e9CFb3E4855A4F";

    #[test]
    fn test_validator_address_golden_eip155_key() {
        let address = validator_address(EIP155_KEY.as_bytes()).unwrap();
        assert_eq!(address, EIP155_ADDRESS);
    }

    #[test]
    fn test_validator_address_golden_key_one() {
        // Private key 0x...01 maps to a well-known address.
        let key = "0000000000000000000000000000000000000000000000000000000000000001";
        let address = validator_address(key.as_bytes()).unwrap();
        assert_eq!(address, "0x7E5F4552091A69125d5DfCb7b8C2659029395Bdf");
    }

    #[test]
    fn test_validator_address_accepts_0x_prefix() {
        let prefixed = format!("0x{EIP155_KEY}");
        let address = validator_address(prefixed.as_bytes()).unwrap();
        assert_eq!(address, EIP155_ADDRESS);
    }

    #[test]
    fn test_validator_address_is_deterministic() {
        let first = validator_address(EIP155_KEY.as_bytes()).unwrap();
        let second = validator_address(EIP155_KEY.as_bytes()).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_validator_address_rejects_non_hex() {
        let err = validator_address(b"zzzz").unwrap_err();
        assert!(matches!(err, KeyDerivationError::InvalidHex(_)));
    }

    #[test]
    fn test_validator_address_rejects_wrong_length() {
        let err = validator_address(b"deadbeef").unwrap_err();
        assert!(matches!(err, KeyDerivationError::InvalidEcdsaKey(_)));
    }

    #[test]
    fn test_validator_address_rejects_zero_scalar() {
        let zero = "0000000000000000000000000000000000000000000000000000000000000000";
        let err = validator_address(zero.as_bytes()).unwrap_err();
        assert!(matches!(err, KeyDerivationError::InvalidEcdsaKey(_)));
    }
}
