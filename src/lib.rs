//! # DID Key
//!
//! The `did:key` method is a DID method for static cryptographic keys. At its
//! core, it is based on expanding a cryptographic public key into a DID and,
//! in the reverse direction, recovering the typed key from the identifier
//! alone. No resolution against an external registry is required.
//!
//! See:
//!
//! - <https://w3c-ccg.github.io/did-method-key>
//! - <https://www.w3.org/TR/did-core>

mod ec;
pub mod error;
mod key;
mod key_type;
mod url;

pub use self::error::Error;
pub use self::key::DidKey;
pub use self::key_type::KeyType;
pub use self::url::Url;

/// Result type for DID Key operations.
pub type Result<T, E = Error> = core::result::Result<T, E>;
