//! `PolyVec`: a length-`K` vector of [`Poly`], and `Matrix`: a `K x K`
//! array of them — the module-lattice extension of the ring arithmetic in
//! [`crate::poly`].
//!
//! Every operation here is componentwise over [`Poly`]'s own operation of
//! the same name; the interesting work already happened in `poly.rs` and
//! `ntt.rs`.

use zeroize::Zeroize;

use crate::params::K;
use crate::poly::Poly;

/// A vector of `K` ring elements.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default, Zeroize)]
pub struct PolyVec(pub [Poly; K]);

/// A `K x K` matrix of ring elements, row-major: `rows[i][j]` is the entry
/// at row `i`, column `j`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Matrix(pub [PolyVec; K]);

impl PolyVec {
    /// The zero vector.
    pub const ZERO: PolyVec = PolyVec([Poly::ZERO; K]);

    /// Zeroizes every entry.
    pub fn zero(&mut self) {
        self.zeroize();
    }

    /// `true` iff every entry's coefficients are canonical.
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.0.iter().all(Poly::is_valid)
    }

    /// Barrett-reduces every entry.
    pub fn reduce(&mut self) {
        for p in self.0.iter_mut() {
            p.reduce();
        }
    }

    /// Constant-time equality, componentwise.
    ///
    /// Unlike a naive port of the reference C (whose `polyvec_equal` walks
    /// `KYBER_N` positions instead of `KYBER_K` entries — comparing only
    /// the first `min(K, N)` entries' first coefficient and reading out of
    /// bounds once `K` ring elements are laid out contiguously), this
    /// walks exactly the `K` entries of the vector.
    #[must_use]
    pub fn equal(&self, other: &Self) -> bool {
        self.0
            .iter()
            .zip(other.0.iter())
            .all(|(a, b)| a.equal(b))
    }

    /// Value copy from `source` into `self`.
    pub fn copy_from(&mut self, source: &Self) {
        *self = *source;
    }

    /// Zeroizes `self` and consumes it.
    pub fn secure_free(mut self) {
        self.zero();
    }

    /// Forward NTT, applied entrywise. Every entry must already be in the
    /// Montgomery domain.
    pub fn ntt(&mut self) {
        for p in self.0.iter_mut() {
            p.ntt();
        }
    }

    /// Inverse NTT, applied entrywise.
    pub fn ntt_inverse(&mut self) {
        for p in self.0.iter_mut() {
            p.ntt_inverse();
        }
    }

    /// Entrywise addition.
    #[must_use]
    pub fn add(&self, other: &Self) -> Self {
        let mut out = PolyVec::ZERO;
        for i in 0..K {
            out.0[i] = self.0[i].add(&other.0[i]);
        }
        out
    }

    /// Entrywise subtraction.
    #[must_use]
    pub fn sub(&self, other: &Self) -> Self {
        let mut out = PolyVec::ZERO;
        for i in 0..K {
            out.0[i] = self.0[i].sub(&other.0[i]);
        }
        out
    }

    /// NTT-domain scalar (inner) product: `sum_i a[i] * b[i]`, via
    /// pointwise multiplication (Algorithm 11) rather than full ring
    /// multiplication, since both vectors are assumed already transformed.
    ///
    /// The running per-entry product is zeroized after being folded into
    /// the accumulator, since it may carry secret material borrowed from
    /// `a`/`b`.
    #[must_use]
    pub fn ntt_scalar_product(&self, other: &Self) -> Poly {
        let mut acc = Poly::ZERO;
        for i in 0..K {
            let term = self.0[i].ntt_mul(&other.0[i]);
            acc = acc.add(&term);
            term.secure_free();
        }
        acc
    }

    /// Compresses every entry at bit width `d`.
    pub fn compress(&mut self, d: u32) {
        for p in self.0.iter_mut() {
            p.compress(d);
        }
    }

    /// Decompresses every entry at bit width `d`.
    pub fn decompress(&mut self, d: u32) {
        for p in self.0.iter_mut() {
            p.decompress(d);
        }
    }

    /// Serializes `self` at bit width `d` into `out`
    /// (`out.len()` must be `32 * d * K`), concatenating each entry's own
    /// encoding in order.
    pub fn byte_encode(&self, d: usize, out: &mut [u8]) {
        debug_assert_eq!(out.len(), 32 * d * K);
        for (i, p) in self.0.iter().enumerate() {
            p.byte_encode(d, &mut out[32 * d * i..32 * d * (i + 1)]);
        }
    }

    /// Deserializes a `32 * d * K`-byte buffer into a `PolyVec`.
    #[must_use]
    pub fn byte_decode(bytes: &[u8], d: usize) -> Self {
        debug_assert_eq!(bytes.len(), 32 * d * K);
        let mut out = PolyVec::ZERO;
        for (i, p) in out.0.iter_mut().enumerate() {
            *p = Poly::byte_decode(&bytes[32 * d * i..32 * d * (i + 1)], d);
        }
        out
    }
}

impl Matrix {
    /// The all-zero matrix.
    pub const ZERO: Matrix = Matrix([PolyVec::ZERO; K]);

    /// `r[i] = sum_j self[i][j] * v[j]`, the NTT-domain matrix/vector
    /// product: one scalar product per output row.
    #[must_use]
    pub fn ntt_product(&self, v: &PolyVec) -> PolyVec {
        let mut r = PolyVec::ZERO;
        for i in 0..K {
            r.0[i] = self.0[i].ntt_scalar_product(v);
        }
        r
    }

    /// Transposes `self` in place, swapping `self[i][j]` with `self[j][i]`
    /// for `i < j`.
    pub fn transpose(&mut self) {
        for i in 0..K {
            for j in (i + 1)..K {
                let tmp = self.0[i].0[j];
                self.0[i].0[j] = self.0[j].0[i];
                self.0[j].0[i] = tmp;
            }
        }
    }
}
