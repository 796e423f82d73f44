use fsoc_util::circular_left_shift;

use crate::padding::{Block, BLOCK_LENGTH_DOUBLE_WORDS};

/// number of rounds, and thus of scheduled words, per block
pub const SCHEDULE_LENGTH: usize = 80;

/// The expanded message words consumed by one compression.
pub type Schedule = [u32; SCHEDULE_LENGTH];

/// Expand one block into the 80 words consumed by the rounds. Words 16 to 31 follow the
/// FIPS 180-1 recurrence, all later words are derived from words further back with a rotation by
/// two bits.
pub fn expand(block: &Block) -> Schedule {
    let mut extended_block = [0u32; SCHEDULE_LENGTH];
    extended_block[..BLOCK_LENGTH_DOUBLE_WORDS].copy_from_slice(block);

    for i in BLOCK_LENGTH_DOUBLE_WORDS..32 {
        extended_block[i] = circular_left_shift(
            extended_block[i - 3]
                ^ extended_block[i - 8]
                ^ extended_block[i - 14]
                ^ extended_block[i - 16],
            1,
        );
    }

    for i in 32..SCHEDULE_LENGTH {
        extended_block[i] = circular_left_shift(
            extended_block[i - 6]
                ^ extended_block[i - 16]
                ^ extended_block[i - 28]
                ^ extended_block[i - 32],
            2,
        );
    }

    extended_block
}
