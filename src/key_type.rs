//! Key algorithms supported by the `did:key` method, their multicodec codes,
//! and the structural rules for their raw public key bytes.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::ec;
use crate::error::Error;

/// Key algorithms supported by the `did:key` method.
///
/// Each variant's discriminant is its registered multicodec code, so the
/// type-to-code mapping is a single table with injectivity guaranteed by the
/// compiler (duplicate discriminants do not compile).
///
/// See <https://github.com/multiformats/multicodec/blob/master/table.csv>.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u64)]
pub enum KeyType {
    /// Ed25519 public key.
    Ed25519 = 0xed,

    /// RSA public key, DER-encoded `RSAPublicKey` (PKCS#1).
    #[serde(rename = "RSA")]
    Rsa = 0x1205,

    /// NIST P-256 (secp256r1) public key.
    #[serde(rename = "P-256")]
    P256 = 0x1200,

    /// NIST P-384 (secp384r1) public key.
    #[serde(rename = "P-384")]
    P384 = 0x1201,

    /// NIST P-521 (secp521r1) public key.
    #[serde(rename = "P-521")]
    P521 = 0x1202,

    /// secp256k1 public key.
    #[serde(rename = "secp256k1")]
    Secp256k1 = 0xe7,
}

impl KeyType {
    const ALL: [Self; 6] =
        [Self::Ed25519, Self::Rsa, Self::P256, Self::P384, Self::P521, Self::Secp256k1];

    /// The multicodec code registered for this key type.
    #[must_use]
    pub const fn code(self) -> u64 {
        self as u64
    }

    /// Map a multicodec code back to its key type.
    ///
    /// # Errors
    /// Returns `Error::UnsupportedEncoding` if the code is not registered for
    /// any supported key type.
    pub fn from_code(code: u64) -> crate::Result<Self> {
        Self::ALL.into_iter().find(|kt| kt.code() == code).ok_or(Error::UnsupportedEncoding(code))
    }

    /// Check raw public key bytes against the structural rules for this key
    /// type, normalizing elliptic curve points to their compressed form.
    ///
    /// # Errors
    /// Returns `Error::InvalidKeyLength` if the (normalized) key is not a
    /// legal length for the algorithm, or `Error::InvalidPointEncoding` if an
    /// elliptic curve key is not a recognizable SEC1 point.
    pub fn validate(self, key: &[u8]) -> crate::Result<Vec<u8>> {
        match self {
            Self::Ed25519 => exact(self, key, 32),
            Self::Secp256k1 => exact(self, key, 33),
            Self::P256 => normalized(self, key, 33),
            Self::P384 => normalized(self, key, 49),
            Self::P521 => normalized(self, key, 67),
            Self::Rsa => {
                if key.len() == 270 || key.len() == 526 {
                    Ok(key.to_vec())
                } else {
                    Err(Error::InvalidKeyLength {
                        key_type: self,
                        expected: "270 (2048-bit) or 526 (4096-bit)".to_string(),
                        len: key.len(),
                    })
                }
            }
        }
    }
}

/// The key must have exactly the expected length. No normalization applies.
fn exact(key_type: KeyType, key: &[u8], len: usize) -> crate::Result<Vec<u8>> {
    if key.len() == len {
        Ok(key.to_vec())
    } else {
        Err(Error::InvalidKeyLength { key_type, expected: len.to_string(), len: key.len() })
    }
}

/// Normalize an elliptic curve point to compressed form, then check the
/// length.
///
/// Compression is a pure pre-step: it canonicalizes the point representation
/// but never repairs a wrong length. A key that carries neither a compressed
/// nor an uncompressed SEC1 tag is rejected outright.
fn normalized(key_type: KeyType, key: &[u8], len: usize) -> crate::Result<Vec<u8>> {
    let key = if ec::is_uncompressed(key) {
        ec::compress(key_type, key)?
    } else if ec::is_compressed(key) {
        key.to_vec()
    } else {
        return Err(Error::InvalidPointEncoding(key_type));
    };

    if key.len() == len {
        Ok(key)
    } else {
        Err(Error::InvalidKeyLength { key_type, expected: len.to_string(), len: key.len() })
    }
}

impl Display for KeyType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Ed25519 => write!(f, "Ed25519"),
            Self::Rsa => write!(f, "RSA"),
            Self::P256 => write!(f, "P-256"),
            Self::P384 => write!(f, "P-384"),
            Self::P521 => write!(f, "P-521"),
            Self::Secp256k1 => write!(f, "secp256k1"),
        }
    }
}

impl FromStr for KeyType {
    type Err = Error;

    /// Parse a canonical algorithm name into a [`KeyType`].
    ///
    /// # Errors
    /// Returns `Error::UnsupportedKeyType` if the name is not one of the
    /// supported algorithms.
    fn from_str(s: &str) -> crate::Result<Self> {
        match s {
            "Ed25519" => Ok(Self::Ed25519),
            "RSA" => Ok(Self::Rsa),
            "P-256" => Ok(Self::P256),
            "P-384" => Ok(Self::P384),
            "P-521" => Ok(Self::P521),
            "secp256k1" => Ok(Self::Secp256k1),
            _ => Err(Error::UnsupportedKeyType(s.to_string())),
        }
    }
}
