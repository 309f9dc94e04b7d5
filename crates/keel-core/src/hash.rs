//! FNV-1a hashing glue.
//!
//! Small, deterministic and allocation-free. Not collision resistant:
//! these hashes key in-process containers, nothing more.

use std::hash::{BuildHasher, Hash, Hasher};

/// FNV-1a offset basis for 64-bit.
const FNV_OFFSET: u64 = 0xcbf29ce484222325;
/// FNV-1a prime for 64-bit.
const FNV_PRIME: u64 = 0x00000100000001B3;

/// Feed a single byte into an FNV-1a hash state.
#[inline]
fn fnv1a_byte(hash: u64, byte: u8) -> u64 {
    (hash ^ byte as u64).wrapping_mul(FNV_PRIME)
}

/// Streaming FNV-1a hasher.
#[derive(Clone, Copy, Debug)]
pub struct FnvHasher {
    state: u64,
}

impl FnvHasher {
    /// A hasher at the FNV offset basis.
    pub const fn new() -> Self {
        Self { state: FNV_OFFSET }
    }

    /// A hasher continuing from an existing hash value.
    pub const fn with_seed(seed: u64) -> Self {
        Self { state: seed }
    }
}

impl Default for FnvHasher {
    fn default() -> Self {
        Self::new()
    }
}

impl Hasher for FnvHasher {
    fn finish(&self) -> u64 {
        self.state
    }

    fn write(&mut self, bytes: &[u8]) {
        for &b in bytes {
            self.state = fnv1a_byte(self.state, b);
        }
    }

    // Fixed-width little-endian encodings for single integers. Integer
    // slices reach `write` through `hash_slice` as native-endian bytes,
    // so their hashes still depend on the host's endianness.
    fn write_usize(&mut self, i: usize) {
        self.write(&(i as u64).to_le_bytes());
    }

    fn write_u32(&mut self, i: u32) {
        self.write(&i.to_le_bytes());
    }

    fn write_u64(&mut self, i: u64) {
        self.write(&i.to_le_bytes());
    }
}

/// [`BuildHasher`] producing [`FnvHasher`]s, for `HashMap` and friends.
#[derive(Clone, Copy, Debug, Default)]
pub struct FnvBuildHasher;

impl BuildHasher for FnvBuildHasher {
    type Hasher = FnvHasher;

    fn build_hasher(&self) -> FnvHasher {
        FnvHasher::new()
    }
}

/// Hash a single value.
pub fn make_hash<T: Hash + ?Sized>(value: &T) -> u64 {
    let mut hasher = FnvHasher::new();
    value.hash(&mut hasher);
    hasher.finish()
}

/// Fold `value` into an existing hash.
///
/// `hash_combine(make_hash(&a), &b)` is order-sensitive: swapping `a`
/// and `b` generally yields a different result.
pub fn hash_combine<T: Hash + ?Sized>(seed: u64, value: &T) -> u64 {
    let mut hasher = FnvHasher::with_seed(seed);
    value.hash(&mut hasher);
    hasher.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_input_is_offset_basis() {
        assert_eq!(FnvHasher::new().finish(), FNV_OFFSET);
    }

    #[test]
    fn known_vector() {
        // FNV-1a 64 of "a".
        let mut h = FnvHasher::new();
        h.write(b"a");
        assert_eq!(h.finish(), 0xaf63dc4c8601ec8c);
    }

    #[test]
    fn same_value_same_hash() {
        assert_eq!(make_hash(&42u32), make_hash(&42u32));
        assert_ne!(make_hash(&42u32), make_hash(&43u32));
    }

    #[test]
    fn single_integers_hash_little_endian() {
        let mut bytes = FnvHasher::new();
        bytes.write(&0x0102_0304u32.to_le_bytes());
        assert_eq!(make_hash(&0x0102_0304u32), bytes.finish());
    }

    #[test]
    fn usize_hashes_like_u64() {
        assert_eq!(make_hash(&7usize), make_hash(&7u64));
    }

    #[test]
    fn combine_is_order_sensitive() {
        let ab = hash_combine(make_hash(&1u32), &2u32);
        let ba = hash_combine(make_hash(&2u32), &1u32);
        assert_ne!(ab, ba);
    }

    #[test]
    fn build_hasher_keys_a_map() {
        let mut map = std::collections::HashMap::with_hasher(FnvBuildHasher);
        map.insert("heat", 1);
        map.insert("velocity", 2);
        assert_eq!(map.get("heat"), Some(&1));
        assert_eq!(map.len(), 2);
    }
}
