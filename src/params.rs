//! Fixed algebraic parameters for ML-KEM-512.
//!
//! `K` is pinned at 2 rather than exposed as a type parameter: this crate is
//! the arithmetic core for the 512 parameter set only, so `PolyVec`/`Matrix`
//! are plain fixed-size arrays and every loop bound below is a `const`.

/// Prime modulus of the coefficient field.
pub const Q: i16 = 3329;

/// Prime modulus widened for 32-bit intermediate arithmetic.
pub const Q32: i32 = Q as i32;

/// Degree of the quotient ring `R_q = Z_q[X]/(X^n + 1)`.
pub const N: usize = 256;

/// Module rank for ML-KEM-512.
pub const K: usize = 2;

/// Primitive 256th root of unity mod `Q`.
pub const ZETA: i16 = 17;

/// Montgomery radix `R = 2^16 mod Q`.
pub const MONT_R: i16 = 2285;

/// `R^2 mod Q`, used to lift a standard-domain coefficient into Montgomery form.
pub const MONT_R2: i16 = 1353;

/// `Q^{-1} mod 2^16`, the Montgomery reduction multiplier.
pub const QINV: i32 = 62209;

/// `round(2^26 / Q)`, the Barrett reduction multiplier.
pub const BARRETT_V: i32 = 20159;

/// `128^{-1} * R mod Q`, the final normalizer applied after the inverse NTT.
pub const INV_NTT_NORMALIZER: i16 = 512;
