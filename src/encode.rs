//! Algorithm 3 (`BitsToBytes`) / 4 (`BytesToBits`), Algorithm 5
//! (`ByteEncode_d`) / 6 (`ByteDecode_d`), and the scalar `Compress`/
//! `Decompress` primitives of FIPS 203.
//!
//! Every buffer here is a plain slice the caller already owns — there is no
//! allocation on this path, matching the crate's no-heap resource
//! discipline (see the crate-level docs).

use crate::params::{BARRETT_V, N, Q, Q32};

/// Largest bit width the codec supports.
pub const MAX_D: usize = 12;

/// Algorithm 3. Packs a bit array (one bit per byte, values in `{0, 1}`)
/// into a byte array, eight bits to a byte, LSB first.
///
/// `bits.len()` must equal `8 * bytes.len()`.
pub fn bits_to_bytes(bits: &[u8], bytes: &mut [u8]) {
    debug_assert_eq!(bits.len(), 8 * bytes.len());

    for byte in bytes.iter_mut() {
        *byte = 0;
    }
    for (i, byte) in bytes.iter_mut().enumerate() {
        for j in 0..8 {
            *byte |= bits[8 * i + j] << j;
        }
    }
}

/// Algorithm 4. Inverse of [`bits_to_bytes`].
pub fn bytes_to_bits(bytes: &[u8], bits: &mut [u8]) {
    debug_assert_eq!(bits.len(), 8 * bytes.len());

    for (i, &byte) in bytes.iter().enumerate() {
        for j in 0..8 {
            bits[8 * i + j] = (byte >> j) & 1;
        }
    }
}

/// Algorithm 5. Serializes 256 integers, each masked to `d` bits, into
/// `32 * d` bytes, LSB-first across the bit stream.
///
/// `d` must be in `1..=12`; `out.len()` must equal `32 * d`.
pub fn byte_encode(vals: &[i16; N], d: usize, out: &mut [u8]) {
    debug_assert!((1..=MAX_D).contains(&d));
    debug_assert_eq!(out.len(), 32 * d);

    let mask: i16 = (1i16 << d) - 1;
    let mut bits = [0u8; N * MAX_D];
    let bits = &mut bits[..N * d];

    for (i, &v) in vals.iter().enumerate() {
        let mut a = v & mask;
        for j in 0..d {
            bits[i * d + j] = (a & 1) as u8;
            a >>= 1;
        }
    }

    bits_to_bytes(bits, out);
}

/// Algorithm 6. Inverse of [`byte_encode`]; produces 256 integers in
/// `[0, 2^d)`. For `d == 12` the result is additionally reduced mod `Q`
/// (the reference algorithm's `ByteDecode_12` special case).
pub fn byte_decode(bytes: &[u8], d: usize, vals: &mut [i16; N]) {
    debug_assert!((1..=MAX_D).contains(&d));
    debug_assert_eq!(bytes.len(), 32 * d);

    let mask: i16 = (1i16 << d) - 1;
    let mut bits = [0u8; N * MAX_D];
    let bits = &mut bits[..N * d];
    bytes_to_bits(bytes, bits);

    for (i, v) in vals.iter_mut().enumerate() {
        let mut temp: i16 = 0;
        for j in 0..d {
            temp |= (bits[i * d + j] as i16) << j;
        }
        temp &= mask;
        *v = if d == MAX_D { temp % Q } else { temp };
    }
}

/// `Compress_d(x) = round(x * 2^d / Q) mod 2^d`.
///
/// Implemented with the same 32/64-bit wraparound trick as the reference
/// implementation: the left shift and `+ Q/2` are computed in `i32`, then
/// reinterpreted as `u32` before the Barrett-style multiply-shift, so a
/// canonical negative `x` and its `x + Q` representative compress to the
/// same low `d` bits without an explicit `+Q` normalization step. Reuses
/// [`crate::params::BARRETT_V`] — the same `round(2^26 / Q)` multiplier
/// [`crate::reduce::barrett_reduce`] uses — rather than a second copy of
/// the constant.
#[must_use]
pub fn compress(x: i16, d: u32) -> i16 {
    let shifted = ((i32::from(x)) << d).wrapping_add(Q32 / 2);
    let t = shifted as u32;
    let t = ((i64::from(t) * i64::from(BARRETT_V)) >> 26) as i32;
    (t & ((1i32 << d) - 1)) as i16
}

/// `Decompress_d(x) = round(x * Q / 2^d)`.
///
/// `x` must be in `[0, 2^d)`.
#[must_use]
pub fn decompress(x: i16, d: u32) -> i16 {
    let t = (i32::from(x) * Q32).wrapping_add(1i32 << (d - 1));
    (t >> d) as i16
}
