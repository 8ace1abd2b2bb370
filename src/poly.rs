//! `Poly`: an element of `R_q = Z_q[X]/(X^n + 1)`, represented as its 256
//! coefficients.
//!
//! A `Poly`'s domain — standard, Montgomery, or NTT-evaluation — is a
//! caller contract, not something the type tracks at runtime or compile
//! time (see the crate-level docs, §4.6). Doc comments on each method say
//! which domain it expects and which it produces.

use core::ops::{Add, Sub};

use subtle::{Choice, ConstantTimeEq, ConstantTimeLess};
use zeroize::Zeroize;

use crate::encode;
use crate::ntt;
use crate::params::{MONT_R2, N, Q, Q32};
use crate::reduce::{barrett_reduce, fqmul, montgomery_reduce};

/// An element of `R_q`: 256 coefficients, each a canonical representative
/// in `[-(Q-1)/2, (Q-1)/2]` except where a method's docs say otherwise
/// (Montgomery lift, raw NTT output, or a `compress`ed buffer, which holds
/// unsigned `d`-bit integers rather than field elements).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Zeroize)]
pub struct Poly(pub [i16; N]);

impl Default for Poly {
    fn default() -> Self {
        Poly::ZERO
    }
}

impl Poly {
    /// The additive identity.
    pub const ZERO: Poly = Poly([0; N]);

    /// Sets every coefficient to 0 through a write the compiler cannot
    /// elide (delegates to [`zeroize::Zeroize`]); used when wiping
    /// secret-dependent state rather than merely resetting a value that
    /// will go on being used.
    pub fn zero(&mut self) {
        self.zeroize();
    }

    /// `true` iff every coefficient lies in the canonical range
    /// `[-(Q-1)/2, (Q-1)/2]`. Aggregates bitwise over all 256 positions —
    /// never returns early on the first out-of-range coefficient — so the
    /// control flow does not depend on *which* coefficient, if any, is
    /// invalid.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        const HALF: i32 = (Q as i32) >> 1;
        let mut ok = Choice::from(1u8);
        for &c in &self.0 {
            let shifted = (i32::from(c) + HALF) as u32;
            ok &= shifted.ct_lt(&(Q32 as u32));
        }
        ok.into()
    }

    /// Applies Barrett reduction to every coefficient, bringing the poly
    /// into the canonical range regardless of its prior domain.
    pub fn reduce(&mut self) {
        for c in self.0.iter_mut() {
            *c = barrett_reduce(*c);
        }
    }

    /// Constant-time equality. Both operands are assumed canonical; the
    /// componentwise Barrett-reduced difference is accumulated with
    /// `subtle`'s `Choice` rather than a short-circuiting `==`.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        let mut eq = Choice::from(1u8);
        for i in 0..N {
            let diff = barrett_reduce(self.0[i] - other.0[i]) as u16;
            eq &= diff.ct_eq(&0u16);
        }
        eq.into()
    }

    /// Value copy from `source` into `self`.
    pub fn copy_from(&mut self, source: &Self) {
        *self = *source;
    }

    /// Zeroizes `self` and consumes it, so the caller cannot keep using
    /// the (now-zero) handle by accident.
    pub fn secure_free(mut self) {
        self.zero();
    }

    /// Lifts standard-domain coefficients into the Montgomery domain:
    /// `c -> c * R mod Q`, computed as `fqmul(c, R^2 mod Q)`.
    pub fn to_montgomery(&mut self) {
        for c in self.0.iter_mut() {
            *c = fqmul(*c, MONT_R2);
        }
    }

    /// Lowers one factor of `R` from every Montgomery-domain coefficient.
    pub fn from_montgomery(&mut self) {
        for c in self.0.iter_mut() {
            *c = montgomery_reduce(i32::from(*c));
        }
    }

    /// Pointwise addition, Barrett-reduced.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = Poly::ZERO;
        for i in 0..N {
            out.0[i] = barrett_reduce(self.0[i] + other.0[i]);
        }
        out
    }

    /// Pointwise subtraction, Barrett-reduced.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut out = Poly::ZERO;
        for i in 0..N {
            out.0[i] = barrett_reduce(self.0[i] - other.0[i]);
        }
        out
    }

    /// In-place forward NTT. `self` must already be in the Montgomery
    /// domain (see [`Self::to_montgomery`]); on return `self` holds the
    /// 128 bit-reversed evaluations, still Montgomery-scaled.
    pub fn ntt(&mut self) {
        ntt::ntt(&mut self.0);
    }

    /// In-place inverse NTT, mirroring [`Self::ntt`].
    pub fn ntt_inverse(&mut self) {
        ntt::ntt_inverse(&mut self.0);
    }

    /// Pointwise product of two NTT-domain polys (Algorithm 11).
    #[must_use]
    pub fn ntt_mul(&self, other: &Self) -> Self {
        let mut out = Poly::ZERO;
        ntt::multiply_ntts(&mut out.0, &self.0, &other.0);
        out
    }

    /// Full ring multiplication `self * other mod (X^256 + 1, Q)`.
    ///
    /// Runs both inputs through the Montgomery-lift / NTT / pointwise-
    /// multiply / inverse-NTT pipeline on stack-resident copies (512
    /// bytes apiece — no heap involved), zeroizing the copies once the
    /// NTT-domain product has been taken since they may carry secret
    /// material.
    #[must_use]
    pub fn mul(&self, other: &Self) -> Self {
        let mut a = *self;
        let mut b = *other;
        a.to_montgomery();
        b.to_montgomery();
        a.ntt();
        b.ntt();

        let mut r = a.ntt_mul(&b);

        a.secure_free();
        b.secure_free();

        r.ntt_inverse();
        r.from_montgomery();
        r.reduce();
        r
    }

    /// Replaces every coefficient `c` (viewed as an element of `[0, Q)`,
    /// per §4.6) with `compress(c, d)`. The result is no longer a field
    /// element — it holds unsigned `d`-bit integers.
    pub fn compress(&mut self, d: u32) {
        for c in self.0.iter_mut() {
            *c = encode::compress(*c, d);
        }
    }

    /// Inverse of [`Self::compress`]: lifts `d`-bit compressed integers
    /// back into `Z_q`.
    pub fn decompress(&mut self, d: u32) {
        for c in self.0.iter_mut() {
            *c = encode::decompress(*c, d);
        }
    }

    /// Serializes `self` at bit width `d` into `out` (`out.len()` must be
    /// `32 * d`).
    pub fn byte_encode(&self, d: usize, out: &mut [u8]) {
        encode::byte_encode(&self.0, d, out);
    }

    /// Deserializes a `32 * d`-byte buffer into a `Poly`.
    #[must_use]
    pub fn byte_decode(bytes: &[u8], d: usize) -> Self {
        let mut out = Poly::ZERO;
        encode::byte_decode(bytes, d, &mut out.0);
        out
    }
}

impl Add<&Poly> for &Poly {
    type Output = Poly;

    fn add(self, rhs: &Poly) -> Poly {
        Poly::add(self, rhs)
    }
}

impl Sub<&Poly> for &Poly {
    type Output = Poly;

    fn sub(self, rhs: &Poly) -> Poly {
        Poly::sub(self, rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ramp(scale: i16, offset: i16) -> Poly {
        let mut p = Poly::ZERO;
        for (i, c) in p.0.iter_mut().enumerate() {
            *c = barrett_reduce(scale.wrapping_mul(i as i16).wrapping_add(offset));
        }
        p
    }

    #[test]
    fn reduce_is_always_canonical() {
        let mut p = Poly([0; N]);
        for (i, c) in p.0.iter_mut().enumerate() {
            *c = (i as i16) * 37 - 5000;
        }
        p.reduce();
        assert!(p.is_valid());
    }

    #[test]
    fn equal_is_reflexive_and_sensitive() {
        let a = ramp(3, 1);
        let b = ramp(3, 1);
        assert!(a.equal(&b));

        let mut c = b;
        c.0[10] = barrett_reduce(c.0[10] + 1);
        assert!(!a.equal(&c));
    }

    #[test]
    fn add_sub_are_inverse() {
        let a = ramp(5, 2);
        let b = ramp(-3, 7);
        let sum = &a + &b;
        let back = &sum - &b;
        assert!(back.equal(&a));
    }

    #[test]
    fn ntt_round_trip_with_montgomery_lift() {
        let f = ramp(13, -40);
        let mut g = f;
        g.to_montgomery();
        g.ntt();
        g.ntt_inverse();
        g.from_montgomery();
        g.reduce();
        assert!(g.equal(&f));
    }

    #[test]
    fn mul_by_zero_is_zero() {
        let a = ramp(9, -2);
        let zero = Poly::ZERO;
        assert!(a.mul(&zero).equal(&Poly::ZERO));
        assert!(zero.mul(&a).equal(&Poly::ZERO));
    }

    /// Schoolbook negacyclic product, used as an independent oracle for
    /// `Poly::mul`.
    fn schoolbook_mul(a: &Poly, b: &Poly) -> Poly {
        let mut t = [0i32; 2 * N];
        for i in 0..N {
            for j in 0..N {
                t[i + j] += i32::from(a.0[i]) * i32::from(b.0[j]);
            }
        }
        let mut out = Poly::ZERO;
        for i in 0..N {
            let wrapped = t[i] - t[N + i];
            out.0[i] = barrett_reduce((wrapped.rem_euclid(Q32)) as i16);
        }
        out
    }

    #[test]
    fn mul_matches_schoolbook_convolution() {
        let a = ramp(7, -3);
        let b = ramp(-5, 11);
        let fast = a.mul(&b);
        let slow = schoolbook_mul(&a, &b);
        assert!(fast.equal(&slow), "fast={:?}\nslow={:?}", fast.0, slow.0);
    }

    #[test]
    fn mul_x255_times_x_is_minus_one() {
        // a = X^255, b = X; a*b = X^256 = -1 (mod X^256 + 1).
        let mut a = Poly::ZERO;
        a.0[255] = 1;
        let mut b = Poly::ZERO;
        b.0[1] = 1;

        let r = a.mul(&b);
        let mut expected = Poly::ZERO;
        expected.0[0] = -1;
        assert!(r.equal(&expected), "r={:?}", r.0);
    }

    #[test]
    fn compress_decompress_round_trip_preserves_lattice() {
        let mut p = ramp(17, 100);
        p.reduce();
        // Lift to [0, Q) the way callers are required to before compressing.
        for c in p.0.iter_mut() {
            if *c < 0 {
                *c += Q;
            }
        }
        let d = 10u32;
        let mut compressed = p;
        compressed.compress(d);
        let mut restored = compressed;
        restored.decompress(d);
        let mut recompressed = restored;
        recompressed.compress(d);
        assert_eq!(compressed.0, recompressed.0);
    }

    #[test]
    fn byte_codec_round_trips_through_poly() {
        let mut p = ramp(19, 42);
        p.reduce();
        for c in p.0.iter_mut() {
            if *c < 0 {
                *c += Q;
            }
        }
        let mut bytes = [0u8; 32 * 12];
        p.byte_encode(12, &mut bytes);
        let decoded = Poly::byte_decode(&bytes, 12);
        assert_eq!(decoded.0, p.0);
    }
}
