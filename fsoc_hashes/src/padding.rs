//! Merkle-Damgård strengthening for hashes with 512-bit blocks: a single 1-bit, zero fill and the
//! 64-bit big endian message length in bits.

use std::convert::TryFrom;
use std::iter::FusedIterator;
use std::mem::size_of;
use std::slice::ChunksExact;

use crate::HashError;

/// the hash block length in bytes
pub const BLOCK_LENGTH_BYTES: usize = 64;

/// the hash block length in 32 bit integers
pub const BLOCK_LENGTH_DOUBLE_WORDS: usize = BLOCK_LENGTH_BYTES / 4;

/// Messages must be strictly shorter than this many bytes, otherwise their length in bits
/// overflows the length field.
pub const MAX_MESSAGE_LENGTH_BYTES: u64 = 1 << 61;

const LENGTH_FIELD_BYTES: usize = size_of::<u64>();

/// A single 1-bit followed by seven 0-bits
const PADDING_MARKER: u8 = 0x80;

/// One block of padded message, packed as big endian double words.
pub type Block = [u32; BLOCK_LENGTH_DOUBLE_WORDS];

/// Length of a message of ``length`` bytes in bits, as written into the length field of the last
/// block.
pub fn message_bit_length(length: usize) -> Result<u64, HashError> {
    u64::try_from(length)
        .ok()
        .filter(|&bytes| bytes < MAX_MESSAGE_LENGTH_BYTES)
        .map(|bytes| bytes * 8)
        .ok_or(HashError::MessageTooLong { length })
}

/// Number of blocks a message of ``length`` bytes occupies once padded.
pub fn padded_block_count(length: usize) -> usize {
    let tail = length % BLOCK_LENGTH_BYTES;

    if tail + 1 + LENGTH_FIELD_BYTES > BLOCK_LENGTH_BYTES {
        length / BLOCK_LENGTH_BYTES + 2
    } else {
        length / BLOCK_LENGTH_BYTES + 1
    }
}

/// Pad ``message`` and split it into blocks. Full blocks are read directly from ``message``, only
/// the incomplete tail is copied.
pub fn pad(message: &[u8]) -> Result<PaddedBlocks<'_>, HashError> {
    let message_length_bits = message_bit_length(message.len())?;

    let full_blocks = message.chunks_exact(BLOCK_LENGTH_BYTES);
    let relevant_data = full_blocks.remainder();

    let mut tail = [0u8; 2 * BLOCK_LENGTH_BYTES];
    tail[..relevant_data.len()].copy_from_slice(relevant_data);
    tail[relevant_data.len()] = PADDING_MARKER;

    // if there is not enough space for the message length to be appended, the padding overflows
    // into a second block
    let tail_blocks = if relevant_data.len() + 1 + LENGTH_FIELD_BYTES > BLOCK_LENGTH_BYTES {
        2
    } else {
        1
    };

    let tail_end = tail_blocks * BLOCK_LENGTH_BYTES;
    tail[tail_end - LENGTH_FIELD_BYTES..tail_end].copy_from_slice(&message_length_bits.to_be_bytes());

    Ok(PaddedBlocks {
        full_blocks,
        tail,
        tail_blocks,
        emitted_tail_blocks: 0,
    })
}

/// Iterator over the blocks of a padded message, in message order.
#[derive(Debug, Clone)]
pub struct PaddedBlocks<'a> {
    full_blocks: ChunksExact<'a, u8>,
    tail: [u8; 2 * BLOCK_LENGTH_BYTES],
    tail_blocks: usize,
    emitted_tail_blocks: usize,
}

fn pack_block(bytes: &[u8]) -> Block {
    let mut block = [0u32; BLOCK_LENGTH_DOUBLE_WORDS];
    fsoc_util::pack_u32a_be(&mut block, bytes);
    block
}

impl<'a> Iterator for PaddedBlocks<'a> {
    type Item = Block;

    fn next(&mut self) -> Option<Block> {
        if let Some(chunk) = self.full_blocks.next() {
            return Some(pack_block(chunk));
        }

        if self.emitted_tail_blocks < self.tail_blocks {
            let offset = self.emitted_tail_blocks * BLOCK_LENGTH_BYTES;
            self.emitted_tail_blocks += 1;
            Some(pack_block(&self.tail[offset..offset + BLOCK_LENGTH_BYTES]))
        } else {
            None
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.full_blocks.len() + self.tail_blocks - self.emitted_tail_blocks;
        (remaining, Some(remaining))
    }
}

impl<'a> ExactSizeIterator for PaddedBlocks<'a> {}

impl<'a> FusedIterator for PaddedBlocks<'a> {}
