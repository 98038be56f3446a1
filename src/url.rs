//! Destructure DID URLs into strongly typed components.
//!
//! A DID URL is of the form
//!
//! `did:<method>:<method-specific-id>[/<path>][?<query>][#<fragment>]`.

use std::fmt::{self, Display, Formatter};
use std::str::FromStr;
use std::sync::OnceLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::error::Error;

// The method-specific id is matched case-sensitively: base58 payloads are
// corrupted by any case folding.
fn did_url_regex() -> &'static Regex {
    static DID_URL: OnceLock<Regex> = OnceLock::new();
    DID_URL.get_or_init(|| {
        Regex::new(
            r"(?x)
            ^did:
            (?<method>[a-z0-9]+):
            (?<id>[A-Za-z0-9.%_:-]+)
            (?<path>/[^?\#]*)?
            (?<query>\?[^\#]*)?
            (?<fragment>\#.*)?
            $",
        )
        .expect("DID URL regex is valid")
    })
}

/// Structure of a DID URL.
#[derive(Clone, Debug, Default, Deserialize, Serialize, PartialEq, Eq)]
pub struct Url {
    /// DID method.
    ///
    /// Kept as a string rather than a closed enum so that a well-formed DID
    /// for an unsupported method still parses and can be reported as such,
    /// distinct from a string that is not a DID at all.
    pub method: String,

    /// Method-specific ID.
    ///
    /// This may include any information that is needed by a DID method to
    /// address a specific DID document.
    pub id: String,

    /// Path, without the leading `/`.
    ///
    /// If present, a DID path is identical to a generic URI path. It is up to
    /// the method to define how to interpret the path.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<String>,

    /// Query, without the leading `?`.
    ///
    /// If present, the query parameters refine the resolution of a specific
    /// instance of a DID document or an associated resource.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub query: Option<String>,

    /// Fragment, without the leading `#`.
    ///
    /// If present, the fragment identifies a specific resource within a DID
    /// document, typically a service or a verification method.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub fragment: Option<String>,
}

impl Url {
    /// Get the DID part of the URL.
    ///
    /// This is in the form of `did:<method>:<method-specific-id>`, with any
    /// path, query, or fragment dropped.
    #[must_use]
    pub fn did(&self) -> String {
        format!("did:{}:{}", self.method, self.id)
    }
}

impl Display for Url {
    /// Format the URL as a specification-compliant string.
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "did:{}:{}", self.method, self.id)?;
        if let Some(path) = &self.path {
            write!(f, "/{path}")?;
        }
        if let Some(query) = &self.query {
            write!(f, "?{query}")?;
        }
        if let Some(fragment) = &self.fragment {
            write!(f, "#{fragment}")?;
        }
        Ok(())
    }
}

impl FromStr for Url {
    type Err = Error;

    /// Parse a string if possible into a strongly typed DID URL struct.
    ///
    /// Expecting a format:
    /// `did:<method>:<method-specific-id>[/<path>][?<query>][#<fragment>]`.
    ///
    /// # Errors
    /// Returns `Error::InvalidDid` if the string does not match the DID URL
    /// syntax.
    fn from_str(s: &str) -> crate::Result<Self> {
        let caps = did_url_regex().captures(s).ok_or_else(|| Error::InvalidDid(s.to_string()))?;

        Ok(Self {
            method: caps["method"].to_string(),
            id: caps["id"].to_string(),
            path: caps.name("path").map(|m| m.as_str().trim_start_matches('/').to_string()),
            query: caps.name("query").map(|m| m.as_str().trim_start_matches('?').to_string()),
            fragment: caps.name("fragment").map(|m| m.as_str().trim_start_matches('#').to_string()),
        })
    }
}
