//! SEC1 elliptic curve point handling.
//!
//! The `did:key` method stores NIST curve keys in compressed form, but
//! callers may hold either encoding, so uncompressed points are accepted and
//! compressed here. Only the point structure is interpreted; no curve
//! arithmetic is performed.

use crate::error::Error;
use crate::key_type::KeyType;

/// Whether the bytes carry a compressed SEC1 point tag.
pub const fn is_compressed(key: &[u8]) -> bool {
    matches!(key.first(), Some(0x02 | 0x03))
}

/// Whether the bytes carry an uncompressed SEC1 point tag.
pub const fn is_uncompressed(key: &[u8]) -> bool {
    matches!(key.first(), Some(0x04))
}

/// Compress an uncompressed SEC1 point for the given curve.
///
/// # Errors
/// Returns `Error::InvalidPointEncoding` if the bytes are not a structurally
/// valid point for the curve, or if the key type is not an elliptic curve
/// with a compressed representation.
pub fn compress(key_type: KeyType, key: &[u8]) -> crate::Result<Vec<u8>> {
    match key_type {
        KeyType::P256 => {
            let point = p256::EncodedPoint::from_bytes(key)
                .map_err(|_| Error::InvalidPointEncoding(key_type))?;
            Ok(point.compress().as_bytes().to_vec())
        }
        KeyType::P384 => {
            let point = p384::EncodedPoint::from_bytes(key)
                .map_err(|_| Error::InvalidPointEncoding(key_type))?;
            Ok(point.compress().as_bytes().to_vec())
        }
        KeyType::P521 => {
            let point = p521::EncodedPoint::from_bytes(key)
                .map_err(|_| Error::InvalidPointEncoding(key_type))?;
            Ok(point.compress().as_bytes().to_vec())
        }
        KeyType::Ed25519 | KeyType::Rsa | KeyType::Secp256k1 => {
            Err(Error::InvalidPointEncoding(key_type))
        }
    }
}
