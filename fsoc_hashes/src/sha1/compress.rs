#![allow(clippy::unreadable_literal)]

use fsoc_util::{circular_left_shift, wrapping_sum};

use super::schedule::Schedule;
use super::Sha1Hash;

/// Boolean function and additive constant of the given round.
fn round_function(round: usize, round_state: &Sha1Hash) -> (u32, u32) {
    match round {
        0..=19 => (
            (round_state.b & round_state.c) | ((!round_state.b) & round_state.d),
            0x5A827999,
        ),
        20..=39 => (round_state.b ^ round_state.c ^ round_state.d, 0x6ED9EBA1),
        40..=59 => (
            (round_state.b & round_state.c)
                | (round_state.b & round_state.d)
                | (round_state.c & round_state.d),
            0x8F1BBCDC,
        ),
        60..=79 => (round_state.b ^ round_state.c ^ round_state.d, 0xCA62C1D6),
        _ => unreachable!(),
    }
}

/// Fold one expanded block into ``state``. The result is the input state plus the state after all
/// 80 rounds, added word by word.
pub fn compress(schedule: &Schedule, state: Sha1Hash) -> Sha1Hash {
    let mut round_state = state;

    for (round, data_word) in schedule.iter().enumerate() {
        let (scrambled_data, magic_constant) = round_function(round, &round_state);

        let temp = wrapping_sum(&[
            scrambled_data,
            round_state.e,
            circular_left_shift(round_state.a, 5),
            *data_word,
            magic_constant,
        ]);
        round_state.e = round_state.d;
        round_state.d = round_state.c;
        round_state.c = circular_left_shift(round_state.b, 30);
        round_state.b = round_state.a;
        round_state.a = temp;
    }

    Sha1Hash {
        a: state.a.wrapping_add(round_state.a),
        b: state.b.wrapping_add(round_state.b),
        c: state.c.wrapping_add(round_state.c),
        d: state.d.wrapping_add(round_state.d),
        e: state.e.wrapping_add(round_state.e),
    }
}

#[cfg(test)]
mod tests {
    use super::super::schedule::expand;
    use super::super::INITIAL;
    use super::*;
    use crate::padding::pad;

    #[test]
    fn test_round_functions() {
        let state = Sha1Hash { a: 0, b: 0xFF00_FF00, c: 0xF0F0_F0F0, d: 0xCCCC_CCCC, e: 0 };

        assert_eq!(round_function(0, &state), (0xF0CC_F0CC, 0x5A827999));
        assert_eq!(round_function(19, &state), (0xF0CC_F0CC, 0x5A827999));
        assert_eq!(round_function(20, &state), (0xC33C_C33C, 0x6ED9EBA1));
        assert_eq!(round_function(40, &state), (0xFCC0_FCC0, 0x8F1BBCDC));
        assert_eq!(round_function(79, &state), (0xC33C_C33C, 0xCA62C1D6));
    }

    #[test]
    #[should_panic]
    fn test_round_function_out_of_range() {
        round_function(80, &INITIAL);
    }

    #[test]
    fn test_compress_single_block() {
        let block = pad(b"abc").unwrap().next().unwrap();
        let hash = compress(&expand(&block), INITIAL);

        assert_eq!(hash.words(), [0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d]);
    }

    #[test]
    fn test_compress_zero_block() {
        let schedule = expand(&[0u32; 16]);

        assert_eq!(
            compress(&schedule, Sha1Hash::from_words([0; 5])).words(),
            [0x9e1547ed, 0x57ec91c2, 0x30fa8bc8, 0xc7785a54, 0xa7efa5e3]
        );
        assert_eq!(
            compress(&schedule, INITIAL).words(),
            [0x92b404e5, 0x56588ced, 0x6c1acd4e, 0xbf053f68, 0x09f73a93]
        );
    }

    #[test]
    fn test_compress_is_pure() {
        let schedule = expand(&pad(b"FSOC23/24 is fun!").unwrap().next().unwrap());
        assert_eq!(compress(&schedule, INITIAL), compress(&schedule, INITIAL));
        assert_ne!(compress(&schedule, INITIAL), INITIAL);
    }
}
