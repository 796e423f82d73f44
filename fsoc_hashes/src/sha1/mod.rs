#![allow(clippy::unreadable_literal)]

use std::fmt;
use std::mem;
use std::str::FromStr;

use crate::padding::{Block, BLOCK_LENGTH_BYTES};
use crate::{HashError, HashFunction, HashValue, MerkleDamgardHash};

pub mod compress;
pub mod schedule;

pub use self::compress::compress;
pub use self::schedule::{expand, Schedule};

/// The initial state for any SHA1 hash. From here, all blocks are applied.
pub const INITIAL: Sha1Hash = Sha1Hash {
    a: 0x67452301,
    b: 0xEFCDAB89,
    c: 0x98BADCFE,
    d: 0x10325476,
    e: 0xC3D2E1F0,
};

/// A SHA1 hash state. It consists of 5 double-words named `a`, `b`, `c`, `d` and `e`. After the
/// last block of a message has been compressed, the state is the digest.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Sha1Hash {
    pub a: u32,
    pub b: u32,
    pub c: u32,
    pub d: u32,
    pub e: u32,
}

/// Digest a complete message.
pub fn digest(message: &[u8]) -> Result<Sha1Hash, HashError> {
    Sha1Hash::digest_message(message)
}

impl Sha1Hash {
    pub const fn from_words(words: [u32; 5]) -> Sha1Hash {
        Sha1Hash {
            a: words[0],
            b: words[1],
            c: words[2],
            d: words[3],
            e: words[4],
        }
    }

    pub fn words(&self) -> [u32; 5] {
        [self.a, self.b, self.c, self.d, self.e]
    }

    /// Lowercase hexadecimal representation of the big endian digest bytes.
    pub fn to_hex(&self) -> String {
        hex::encode(self.raw())
    }

    /// Parse a digest from 40 hexadecimal digits.
    pub fn from_hex(digest: &str) -> Result<Sha1Hash, HashError> {
        let bytes = hex::decode(digest.trim())
            .map_err(|err| HashError::InvalidDigest(format!("{:?}: {}", digest, err)))?;

        if bytes.len() != mem::size_of::<Sha1Hash>() {
            return Err(HashError::InvalidDigest(format!(
                "{:?} has {} bytes, expected {}",
                digest,
                bytes.len(),
                mem::size_of::<Sha1Hash>()
            )));
        }

        let mut words = [0u32; 5];
        fsoc_util::pack_u32a_be(&mut words, &bytes);
        Ok(Sha1Hash::from_words(words))
    }
}

impl MerkleDamgardHash for Sha1Hash {
    const INITIAL: Self = INITIAL;

    fn compress_block(&mut self, block: &Block) {
        *self = compress(&expand(block), *self);
    }
}

impl HashFunction for Sha1Hash {
    const BLOCK_SIZE: usize = BLOCK_LENGTH_BYTES;

    const OUTPUT_SIZE: usize = mem::size_of::<Sha1Hash>();

    fn digest_message(input: &[u8]) -> Result<Self, HashError> {
        Self::chain_blocks(input)
    }
}

impl HashValue for Sha1Hash {
    /// Generates the 20 byte big endian digest from the current hash state.
    fn raw(&self) -> Vec<u8> {
        fsoc_util::unpack_u32a_be(&self.words())
    }
}

impl fmt::Display for Sha1Hash {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl FromStr for Sha1Hash {
    type Err = HashError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Sha1Hash::from_hex(s)
    }
}
