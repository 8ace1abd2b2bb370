//! Arithmetic core of ML-KEM-512 (formerly Kyber): the ring
//! `R_q = Z_q[X]/(X^256 + 1)` with `q = 3329`, its Number-Theoretic
//! Transform, and the FIPS 203 byte/bit codec.
//!
//! This crate is the algebra layer only. It has no notion of a key, a
//! ciphertext, a shared secret, or a hash function — those live one level
//! up, in a full KEM built on top of [`Poly`] and [`PolyVec`]. What's here
//! is everything those higher layers need from the ring: reduction,
//! transform, multiplication, compression, and serialization.
//!
//! # Layout
//!
//! - [`params`] — the fixed constants of the 512 parameter set (`Q`, `N`,
//!   `K = 2`, and the precomputed Montgomery/Barrett multipliers).
//! - [`reduce`] — Barrett and Montgomery reduction (`barrett_reduce`,
//!   `montgomery_reduce`, `fqmul`).
//! - [`ntt`] — the forward/inverse Number-Theoretic Transform and the
//!   base-case multiplication it bottoms out in.
//! - [`encode`] — bit packing, `ByteEncode`/`ByteDecode`, and scalar
//!   `Compress`/`Decompress`.
//! - [`poly`] — [`Poly`], a single ring element, with the combined
//!   multiplication pipeline built from `reduce`/`ntt`/`encode`.
//! - [`polyvec`] — [`PolyVec`] and [`Matrix`], the module-rank-`K`
//!   extension used for key generation, encapsulation, and decapsulation.
//!
//! # Domain tags
//!
//! Every [`Poly`] and [`PolyVec`] is physically just coefficients — there
//! is no type-level or runtime marker recording whether they're in the
//! standard domain, the Montgomery domain, or NTT-evaluation form. Which
//! domain a value is in, and which domain an operation expects, is a
//! caller contract documented on each method; mixing domains (e.g. adding
//! an NTT-domain poly to a standard-domain one) produces a value that is
//! silently wrong rather than a compile or runtime error. Higher layers
//! that want that safety net are expected to build their own wrapper
//! types around these.
//!
//! # What this crate does not do
//!
//! There is no hiding of timing variation in memory-access patterns (no
//! operation here branches or indexes on secret data in the first place,
//! so this is moot) beyond what [`subtle`] and the absence of
//! data-dependent branches already provide; there is no side-channel
//! hardening against power or EM analysis; and there is no validation
//! that inputs came from a legitimate higher-level protocol run. All of
//! that is the encapsulating KEM's responsibility.
#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs, rust_2018_idioms)]

pub mod encode;
pub mod ntt;
pub mod params;
pub mod poly;
pub mod polyvec;
pub mod reduce;

pub use poly::Poly;
pub use polyvec::{Matrix, PolyVec};
