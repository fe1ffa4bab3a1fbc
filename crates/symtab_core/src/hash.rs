//! Hash strategies for bucket placement.
//!
//! A strategy maps `(name, modulus)` to a bucket index in `[0, modulus)`.
//! Strategies are pure and depend only on the byte content of the name, so
//! swapping one for another never changes which logical operations succeed —
//! only where bindings land, and therefore the collision metric.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A bucket-placement strategy. The value is captured once when a scope
/// stack is constructed and copied into every frame it creates, so
/// independent stacks can use different strategies concurrently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HashKind {
    /// SDBM polynomial rolling hash, the default.
    Sdbm,
    /// FNV-1a.
    Fnv1a,
    /// Jenkins one-at-a-time.
    Jenkins,
    /// MurmurHash2, 32-bit.
    Murmur,
}

impl HashKind {
    /// Every available strategy, in report order.
    pub const ALL: [HashKind; 4] = [
        HashKind::Sdbm,
        HashKind::Fnv1a,
        HashKind::Jenkins,
        HashKind::Murmur,
    ];

    /// The strategy's display name.
    pub fn name(self) -> &'static str {
        match self {
            HashKind::Sdbm => "SDBM",
            HashKind::Fnv1a => "FNV-1a",
            HashKind::Jenkins => "Jenkins",
            HashKind::Murmur => "Murmur",
        }
    }

    /// Map `name` to a bucket index in `[0, modulus)`.
    ///
    /// `modulus > 0` is the caller's responsibility; scope tables validate
    /// their bucket count at construction.
    #[inline]
    pub fn bucket(self, name: &str, modulus: usize) -> usize {
        debug_assert!(modulus > 0, "bucket modulus must be positive");
        match self {
            HashKind::Sdbm => sdbm(name.as_bytes(), modulus),
            HashKind::Fnv1a => fnv1a(name.as_bytes(), modulus),
            HashKind::Jenkins => jenkins(name.as_bytes(), modulus),
            HashKind::Murmur => murmur2(name.as_bytes(), modulus),
        }
    }
}

impl fmt::Display for HashKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Error returned when a strategy name is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown hash strategy '{0}'")]
pub struct ParseHashKindError(pub String);

impl FromStr for HashKind {
    type Err = ParseHashKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "sdbm" => Ok(HashKind::Sdbm),
            "fnv1a" | "fnv-1a" => Ok(HashKind::Fnv1a),
            "jenkins" => Ok(HashKind::Jenkins),
            "murmur" | "murmur2" => Ok(HashKind::Murmur),
            _ => Err(ParseHashKindError(s.to_string())),
        }
    }
}

// source: https://www.programmingalgorithms.com/algorithm/sdbm-hash/cpp/
//
// Note the reduction happens inside the loop, once per byte. That is how the
// reference formulates it, and distinct moduli therefore produce genuinely
// different mixing, not just a different final fold.
fn sdbm(bytes: &[u8], modulus: usize) -> usize {
    let m = modulus as u64;
    let mut hash: u64 = 0;
    for &b in bytes {
        hash = (b as u64)
            .wrapping_add(hash << 6)
            .wrapping_add(hash << 16)
            .wrapping_sub(hash);
        hash %= m;
    }
    hash as usize
}

// source: http://www.isthe.com/chongo/tech/comp/fnv/
fn fnv1a(bytes: &[u8], modulus: usize) -> usize {
    let mut hash: u64 = 2_166_136_261;
    for &b in bytes {
        hash ^= b as u64;
        hash = hash.wrapping_mul(16_777_619);
    }
    (hash % modulus as u64) as usize
}

// source: https://www.partow.net/programming/hashfunctions/
fn jenkins(bytes: &[u8], modulus: usize) -> usize {
    let mut hash: u64 = 0;
    for &b in bytes {
        hash = hash.wrapping_add(b as u64);
        hash = hash.wrapping_add(hash << 10);
        hash ^= hash >> 6;
    }
    hash = hash.wrapping_add(hash << 3);
    hash ^= hash >> 11;
    hash = hash.wrapping_add(hash << 15);
    (hash % modulus as u64) as usize
}

// source: https://github.com/aappleby/smhasher
fn murmur2(bytes: &[u8], modulus: usize) -> usize {
    const M: u32 = 0x5bd1_e995;
    const R: u32 = 24;
    const SEED: u32 = 0;

    let mut h: u32 = SEED ^ bytes.len() as u32;

    let mut chunks = bytes.chunks_exact(4);
    for chunk in &mut chunks {
        let mut k = u32::from_le_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        k = k.wrapping_mul(M);
        k ^= k >> R;
        k = k.wrapping_mul(M);

        h = h.wrapping_mul(M);
        h ^= k;
    }

    // Tail: the reference switch falls through from 3 to 2 to 1.
    let tail = chunks.remainder();
    if tail.len() >= 3 {
        h ^= (tail[2] as u32) << 16;
    }
    if tail.len() >= 2 {
        h ^= (tail[1] as u32) << 8;
    }
    if !tail.is_empty() {
        h ^= tail[0] as u32;
        h = h.wrapping_mul(M);
    }

    h ^= h >> 13;
    h = h.wrapping_mul(M);
    h ^= h >> 15;

    (h % modulus as u32) as usize
}
