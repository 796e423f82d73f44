use std::error::Error;
use std::fmt;

/// Failures of the hash implementations. Hashing itself is total, so the only errors stem from
/// input that cannot be represented faithfully.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HashError {
    /// The message is too long for its length in bits to fit the 64-bit length field.
    MessageTooLong { length: usize },

    /// A textual digest could not be parsed.
    InvalidDigest(String),
}

impl fmt::Display for HashError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HashError::MessageTooLong { length } => write!(
                f,
                "message of {} bytes is too long: its bit length does not fit into 64 bits",
                length
            ),
            HashError::InvalidDigest(reason) => write!(f, "invalid digest: {}", reason),
        }
    }
}

impl Error for HashError {}
