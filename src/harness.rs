//! Comparison of computed digests against a known reference value.

#![allow(clippy::unreadable_literal)]

use fsoc_hashes::{digest, HashError, Sha1Hash};
use log::{debug, info};

/// The message hashed by the demo.
pub const DEMO_MESSAGE: &str = "FSOC23/24 is fun!";

/// Digest of `DEMO_MESSAGE`.
pub const DEMO_REFERENCE: Sha1Hash =
    Sha1Hash::from_words([0xa617f4b3, 0xa108b6dd, 0x82bb8c4a, 0x16ab0b35, 0x2a32a0b9]);

/// An expected digest that computed digests are checked against.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Reference {
    expected: Sha1Hash,
}

impl Reference {
    pub fn new(expected: Sha1Hash) -> Self {
        Reference { expected }
    }

    pub fn expected(&self) -> &Sha1Hash {
        &self.expected
    }

    pub fn matches(&self, digest: &Sha1Hash) -> bool {
        self.expected == *digest
    }

    /// Compare ``digest`` with the reference and run ``on_match`` if both are equal. Returns
    /// whether they matched.
    pub fn check<F>(&self, digest: &Sha1Hash, on_match: F) -> bool
    where
        F: FnOnce(&Sha1Hash),
    {
        let matched = self.matches(digest);
        if matched {
            info!("digest {} matches the reference", digest);
            on_match(digest);
        } else {
            info!("digest {} differs from reference {}", digest, self.expected);
        }
        matched
    }
}

impl Default for Reference {
    fn default() -> Self {
        Reference::new(DEMO_REFERENCE)
    }
}

/// Outcome of hashing one message and comparing it to a reference.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub struct Report {
    pub digest: Sha1Hash,
    pub matched: bool,
}

/// Digest ``message`` and compare the result against ``reference``.
pub fn run<F>(message: &[u8], reference: &Reference, on_match: F) -> Result<Report, HashError>
where
    F: FnOnce(&Sha1Hash),
{
    debug!("hashing {} byte message", message.len());
    let digest = digest(message)?;
    let matched = reference.check(&digest, on_match);

    Ok(Report { digest, matched })
}
