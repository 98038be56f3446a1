//! # DID Key
//!
//! The `did:key` method is a DID method for static cryptographic keys. The
//! method-specific id is the public key itself: multicodec-tagged, then
//! multibase-encoded as base58btc. Encoding and decoding are exact inverses
//! of one another, so a [`DidKey`] can always be rebuilt from its identifier
//! string alone.
//!
//! See:
//!
//! - <https://w3c-ccg.github.io/did-method-key>

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;

use multibase::Base;

use crate::error::Error;
use crate::key_type::KeyType;
use crate::url::Url;

/// A public key and the `did:key` identifier derived from it.
///
/// The method-specific id and the (code, key bytes) pair are two
/// representations of the same information: each can be rederived from the
/// other. A `DidKey` is only constructed through [`DidKey::from_public_key`]
/// or [`FromStr`] and is immutable thereafter.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DidKey {
    url: Url,
    key_type: KeyType,
    public_key: Vec<u8>,
}

impl DidKey {
    /// Build a `did:key` from raw public key bytes.
    ///
    /// Elliptic curve keys may be supplied in compressed or uncompressed
    /// SEC1 form; they are stored compressed.
    ///
    /// # Errors
    /// Returns an error if the key bytes fail the structural rules for
    /// `key_type` (see [`KeyType::validate`]).
    pub fn from_public_key(key_type: KeyType, key: &[u8]) -> crate::Result<Self> {
        let public_key = key_type.validate(key)?;

        let mut buf = unsigned_varint::encode::u64_buffer();
        let code = unsigned_varint::encode::u64(key_type.code(), &mut buf);
        let mut tagged = Vec::with_capacity(code.len() + public_key.len());
        tagged.extend_from_slice(code);
        tagged.extend_from_slice(&public_key);
        let id = multibase::encode(Base::Base58Btc, tagged);

        tracing::debug!("encoded {key_type} public key as did:key:{id}");

        let url = Url { method: "key".to_string(), id, ..Url::default() };
        Ok(Self { url, key_type, public_key })
    }

    /// The full DID string, `did:key:z...`.
    #[must_use]
    pub fn did(&self) -> String {
        self.url.did()
    }

    /// The destructured DID URL.
    #[must_use]
    pub const fn url(&self) -> &Url {
        &self.url
    }

    /// The key algorithm.
    #[must_use]
    pub const fn key_type(&self) -> KeyType {
        self.key_type
    }

    /// The multicodec code embedded in the identifier.
    ///
    /// Always derived from the key type, never carried separately.
    #[must_use]
    pub const fn code(&self) -> u64 {
        self.key_type.code()
    }

    /// The validated public key bytes, in compressed form for elliptic curve
    /// key types.
    #[must_use]
    pub fn public_key(&self) -> &[u8] {
        &self.public_key
    }
}

impl FromStr for DidKey {
    type Err = Error;

    /// Parse a DID URL and recover the typed public key embedded in it.
    ///
    /// # Errors
    /// Returns `Error::InvalidDid` if the string is not a well-formed DID
    /// URL or uses a multibase encoding other than base58btc,
    /// `Error::WrongMethod` if the method is not `key`,
    /// `Error::UnsupportedEncoding` if the embedded multicodec code is
    /// unknown, and the validation errors of [`KeyType::validate`] if the
    /// key bytes are malformed.
    fn from_str(s: &str) -> crate::Result<Self> {
        let url = Url::from_str(s)?;
        if url.method != "key" {
            return Err(Error::WrongMethod(s.to_string()));
        }

        let (base, tagged) = multibase::decode(&url.id)?;
        if base != Base::Base58Btc {
            return Err(Error::InvalidDid(format!("unsupported multibase encoding: {base:?}")));
        }

        let (code, key) = unsigned_varint::decode::u64(&tagged)?;
        let key_type = KeyType::from_code(code)?;
        let public_key = key_type.validate(key)?;

        tracing::debug!("decoded {key_type} public key from did:key:{}", url.id);

        Ok(Self { url, key_type, public_key })
    }
}

impl Display for DidKey {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.url.fmt(f)
    }
}
