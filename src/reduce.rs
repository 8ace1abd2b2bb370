//! Barrett and Montgomery modular reduction primitives.
//!
//! All three functions below are branch-free and operate purely on the
//! value passed in; none of them index an array or take a data-dependent
//! path, which is the extent of the constant-time contract the arithmetic
//! core makes (see the crate-level docs for what is explicitly *not*
//! covered).

use crate::params::{BARRETT_V, Q32, QINV};

/// Barrett reduction.
///
/// Input: any `i16`. Output: the representative of `a mod Q` in
/// `[-(Q-1)/2, (Q-1)/2]`.
#[inline]
#[must_use]
pub fn barrett_reduce(a: i16) -> i16 {
    let t = (((BARRETT_V * i32::from(a)) + (1 << 25)) >> 26) * Q32;
    a - t as i16
}

/// Montgomery reduction.
///
/// Input: an `i32` with `|a| <= Q * 2^15`. Output: a 16-bit value
/// congruent to `a * R^{-1} mod Q`, canonicalized through Barrett.
#[inline]
#[must_use]
pub fn montgomery_reduce(a: i32) -> i16 {
    let t = (a.wrapping_mul(QINV)) as i16;
    let t = (a - i32::from(t) * Q32) >> 16;
    barrett_reduce(t as i16)
}

/// Multiplication of two Montgomery-domain field elements.
///
/// If `a` represents `x * R` and `b` represents `y * R`, `fqmul(a, b)`
/// returns a value representing `x * y * R`.
#[inline]
#[must_use]
pub fn fqmul(a: i16, b: i16) -> i16 {
    montgomery_reduce(i32::from(a) * i32::from(b))
}
