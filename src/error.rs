//! # DID Key Errors
//!
//! Typed errors for the `did:key` codec. Every failure is surfaced to the
//! caller at the point of detection; there are no partial results and no
//! retries.

use thiserror::Error;

use crate::key_type::KeyType;

/// Errors returned by the `did:key` codec.
#[derive(Error, Debug)]
pub enum Error {
    /// Requested key algorithm name is not in the registry.
    #[error("unsupported key type \"{0}\"")]
    UnsupportedKeyType(String),

    /// Decoded multicodec code is not in the registry.
    #[error("unsupported DID encoding, unknown multicodec 0x{0:x}")]
    UnsupportedEncoding(u64),

    /// Key bytes do not match a legal length for the resolved algorithm.
    #[error("{key_type} public keys must be {expected} bytes, got {len}")]
    InvalidKeyLength {
        /// Algorithm the key was validated against.
        key_type: KeyType,

        /// Legal length(s) for the algorithm.
        expected: String,

        /// Length of the rejected key.
        len: usize,
    },

    /// Elliptic curve key bytes are neither a compressed nor an uncompressed
    /// SEC1 point.
    #[error("{0} public key is not a valid SEC1 point encoding")]
    InvalidPointEncoding(KeyType),

    /// String is not a well-formed DID URL.
    #[error("invalid DID: {0}")]
    InvalidDid(String),

    /// DID method is not `key`.
    #[error("invalid DID \"{0}\", method must be 'key'")]
    WrongMethod(String),

    /// The method-specific id could not be multibase-decoded.
    #[error("multibase decoding error: {0}")]
    Multibase(#[from] multibase::Error),

    /// The multicodec prefix could not be varint-decoded.
    #[error("varint decoding error: {0}")]
    Varint(#[from] unsigned_varint::decode::Error),
}
