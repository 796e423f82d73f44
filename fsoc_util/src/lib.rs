//! Word-level helpers shared by the hash implementations: endianness-aware packing of byte
//! buffers into double-word arrays and fixed-width modular arithmetic.

use std::mem::size_of;

use num::traits::WrappingAdd;
use num::PrimInt;

/// Copies the ``source`` array to the ``dest`` array, treating every four bytes of ``source`` as one
/// big endian integer. ``source`` must contain exactly four bytes per double word in ``dest``.
pub fn pack_u32a_be(dest: &mut [u32], source: &[u8]) {
    assert_eq!(source.len(), dest.len() * size_of::<u32>());

    for (word, bytes) in dest.iter_mut().zip(source.chunks_exact(size_of::<u32>())) {
        *word = u32::from_be_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]);
    }
}

/// Serializes the ``source`` double words into a byte vector, most significant byte first.
pub fn unpack_u32a_be(source: &[u32]) -> Vec<u8> {
    source.iter().flat_map(|word| word.to_be_bytes().to_vec()).collect()
}

/// Circular left shift of ``value`` by ``shift`` bits. The shift must lie strictly between zero
/// and the bit width of ``N``.
pub fn circular_left_shift<N: PrimInt>(value: N, shift: u32) -> N {
    let width = (size_of::<N>() * 8) as u32;
    assert!(shift > 0 && shift < width, "rotation by {} bits is undefined for {}-bit words", shift, width);

    value.rotate_left(shift)
}

/// Sum of all ``values`` modulo the word size of ``N``.
pub fn wrapping_sum<N: WrappingAdd + PrimInt>(values: &[N]) -> N {
    values.iter().fold(N::zero(), |acc, value| acc.wrapping_add(value))
}
