//! Software implementation of SHA1 with a two-stage message schedule. The hash is exposed through
//! granular APIs: padding, schedule expansion and compression can be driven by hand, so
//! intermediate states can be inspected.

use log::{debug, error, trace};

pub mod error;
pub mod padding;
pub mod sha1;

pub use crate::error::HashError;
pub use crate::padding::Block;
pub use crate::sha1::{digest, Sha1Hash};

/// Output of a `HashFunction`.
pub trait HashValue {
    /// Obtain the hash as a raw byte array.
    fn raw(&self) -> Vec<u8>;
}

/// Any hash function that can digest arbitrarily sized input.
pub trait HashFunction: Sized {
    /// The digestion block size of this hash function
    const BLOCK_SIZE: usize;

    /// The size of the output hash state
    const OUTPUT_SIZE: usize;

    /// Digest a full message of arbitrary size.
    /// #Parameters
    /// - `input` a slice containing a (possibly large) chunk of byte data that is to be digested.
    ///
    /// #Output
    /// Returns the final hash state, or an error if the message length cannot be encoded.
    fn digest_message(input: &[u8]) -> Result<Self, HashError>;
}

/// A hash generated from a merkle damgård construction over 512-bit blocks. Implementors only
/// provide the compression of a single block; padding and chaining are implemented here.
pub trait MerkleDamgardHash: Copy {
    const INITIAL: Self;

    /// Compress one padded block into this state.
    fn compress_block(&mut self, block: &Block);

    /// Pad ``input`` and compress all blocks in order, starting from `Self::INITIAL`.
    fn chain_blocks(input: &[u8]) -> Result<Self, HashError> {
        let blocks = padding::pad(input).map_err(|err| {
            error!("{}", err);
            err
        })?;
        debug!("digesting {} bytes in {} blocks", input.len(), blocks.len());

        let mut hash_state = Self::INITIAL;
        for (index, block) in blocks.enumerate() {
            trace!("compressing block {}", index);
            hash_state.compress_block(&block);
        }

        Ok(hash_state)
    }
}
