//! Demo harness around the `fsoc_hashes` SHA1 core: obtains a message, prints its digest and
//! signals whether it matches a reference value.

pub mod config;
pub mod harness;

pub use fsoc_hashes;
