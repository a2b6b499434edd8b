//! Public word identifiers
//!
//! Shareable links carry an opaque identifier instead of the catalog index.
//! The identifier is a keyed 32-bit permutation of the index written in
//! fixed-width base 36, so neighbouring indices produce unrelated-looking
//! identifiers. This is obfuscation, not secrecy: the key ships in the binary.
//!
//! # Permutation
//!
//! ```text
//! forward:  x ^= key;  x *= M1;  x ^= x >> 16;  x *= M2;  x ^= x >> 16
//! inverse:  x ^= x >> 16;  x *= M2⁻¹;  x ^= x >> 16;  x *= M1⁻¹;  x ^= key
//! ```
//!
//! All arithmetic is modulo 2³². `M1` and `M2` are odd, so they have
//! multiplicative inverses, and `x ^= x >> 16` is its own inverse on 32 bits.

/// Default permutation key
pub const DEFAULT_KEY: u32 = 0x5EED_CA75;

/// Number of base-36 characters in an identifier (36⁷ > 2³²)
pub const ID_WIDTH: usize = 7;

const M1: u32 = 0x2C1B_3C6D;
const M2: u32 = 0x297A_2D39;
const M1_INV: u32 = mod_inverse(M1);
const M2_INV: u32 = mod_inverse(M2);
const RADIX: u32 = 36;

/// Multiplicative inverse of an odd number modulo 2³² (Newton iteration)
///
/// Every odd `a` satisfies `a * a ≡ 1 (mod 8)`, so `a` is its own inverse to
/// 3 bits; each step doubles the number of correct bits.
const fn mod_inverse(a: u32) -> u32 {
    let mut inv = a;
    let mut i = 0;
    while i < 5 {
        inv = inv.wrapping_mul(2u32.wrapping_sub(a.wrapping_mul(inv)));
        i += 1;
    }
    inv
}

/// Reversible mapping between catalog indices and public identifiers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WordIdCodec {
    key: u32,
}

impl Default for WordIdCodec {
    fn default() -> Self {
        Self::new(DEFAULT_KEY)
    }
}

impl WordIdCodec {
    #[must_use]
    pub const fn new(key: u32) -> Self {
        Self { key }
    }

    #[must_use]
    pub const fn permute(self, value: u32) -> u32 {
        let mut x = value ^ self.key;
        x = x.wrapping_mul(M1);
        x ^= x >> 16;
        x = x.wrapping_mul(M2);
        x ^ (x >> 16)
    }

    #[must_use]
    pub const fn unpermute(self, value: u32) -> u32 {
        let mut x = value ^ (value >> 16);
        x = x.wrapping_mul(M2_INV);
        x ^= x >> 16;
        x = x.wrapping_mul(M1_INV);
        x ^ self.key
    }

    /// Encode a catalog index as a public identifier
    ///
    /// # Panics
    /// Panics if `index` does not fit in 32 bits. Catalogs larger than that
    /// are rejected when they are built, so valid indices always fit.
    ///
    /// # Examples
    /// ```
    /// use purrdle::selection::WordIdCodec;
    ///
    /// let codec = WordIdCodec::default();
    /// let id = codec.encode(42);
    /// assert_eq!(id.len(), 7);
    /// assert_eq!(codec.decode(&id, 100), Some(42));
    /// ```
    #[must_use]
    pub fn encode(self, index: usize) -> String {
        let index = u32::try_from(index).expect("catalog indices fit in 32 bits");
        to_base36(self.permute(index))
    }

    /// Decode a public identifier back into a catalog index
    ///
    /// Returns `None` for anything that is not 1 to 7 ASCII alphanumerics, does
    /// not fit in 32 bits, or maps outside `0..catalog_len`. Case-insensitive.
    #[must_use]
    pub fn decode(self, id: &str, catalog_len: usize) -> Option<usize> {
        let id = id.trim();
        if id.is_empty() || id.len() > ID_WIDTH || !id.bytes().all(|b| b.is_ascii_alphanumeric())
        {
            return None;
        }

        let value = u64::from_str_radix(id, RADIX).ok()?;
        let value = u32::try_from(value).ok()?;
        let index = self.unpermute(value) as usize;

        (index < catalog_len).then_some(index)
    }
}

fn to_base36(mut value: u32) -> String {
    let mut digits = [b'0'; ID_WIDTH];
    for slot in digits.iter_mut().rev() {
        let digit = (value % RADIX) as u8;
        *slot = if digit < 10 {
            b'0' + digit
        } else {
            b'a' + digit - 10
        };
        value /= RADIX;
    }
    digits.iter().map(|&b| b as char).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn multiplier_inverses_are_correct() {
        assert_eq!(M1.wrapping_mul(M1_INV), 1);
        assert_eq!(M2.wrapping_mul(M2_INV), 1);
    }

    #[test]
    fn permutation_round_trips_on_edges_and_random_values() {
        let codec = WordIdCodec::default();
        for value in [0, 1, 2, u32::MAX, u32::MAX - 1, 1 << 16, 0xFFFF] {
            assert_eq!(codec.unpermute(codec.permute(value)), value);
        }

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let value: u32 = rng.random();
            assert_eq!(codec.unpermute(codec.permute(value)), value);
        }
    }

    #[test]
    fn round_trip_every_index_in_catalog_range() {
        let codec = WordIdCodec::default();
        let catalog_len = 5_000;
        let mut seen = std::collections::HashSet::new();

        for index in 0..catalog_len {
            let id = codec.encode(index);
            assert_eq!(id.len(), ID_WIDTH);
            assert!(id.bytes().all(|b| b.is_ascii_digit() || b.is_ascii_lowercase()));
            assert!(seen.insert(id.clone()), "duplicate id {id}");
            assert_eq!(codec.decode(&id, catalog_len), Some(index));
        }
    }

    #[test]
    fn neighbouring_indices_do_not_look_sequential() {
        let codec = WordIdCodec::default();
        let a = codec.permute(10);
        let b = codec.permute(11);
        assert_ne!(a.wrapping_add(1), b);
        assert_ne!(codec.encode(0), "0000000");
        assert_ne!(codec.encode(1), "0000001");
    }

    #[test]
    fn decode_is_case_insensitive_and_trims() {
        let codec = WordIdCodec::default();
        let id = codec.encode(3);
        assert_eq!(codec.decode(&id.to_uppercase(), 10), Some(3));
        assert_eq!(codec.decode(&format!("  {id} "), 10), Some(3));
    }

    #[test]
    fn decode_rejects_malformed_input() {
        let codec = WordIdCodec::default();
        for bad in ["", "   ", "abc-def", "+abc", "ab cd", "12345678", "zzzzzzzz", "é"] {
            assert_eq!(codec.decode(bad, usize::MAX), None, "accepted {bad:?}");
        }
    }

    #[test]
    fn decode_rejects_values_beyond_32_bits() {
        // "zzzzzzz" is 36^7 - 1, larger than u32::MAX
        assert_eq!(WordIdCodec::default().decode("zzzzzzz", usize::MAX), None);
    }

    #[test]
    fn decode_rejects_out_of_range_index() {
        let codec = WordIdCodec::default();
        let id = codec.encode(50);
        assert_eq!(codec.decode(&id, 50), None);
        assert_eq!(codec.decode(&id, 51), Some(50));
    }

    #[test]
    fn arbitrary_strings_never_panic() {
        let codec = WordIdCodec::default();
        let mut rng = StdRng::seed_from_u64(99);
        for _ in 0..2_000 {
            let len = rng.random_range(0..10);
            let s: String = (0..len)
                .map(|_| char::from(rng.random_range(0x20u8..0x7f)))
                .collect();
            if let Some(index) = codec.decode(&s, 100) {
                assert!(index < 100);
            }
        }
    }

    #[test]
    fn different_keys_give_different_ids() {
        let a = WordIdCodec::new(1);
        let b = WordIdCodec::new(2);
        assert_ne!(a.encode(5), b.encode(5));
        assert_eq!(b.decode(&b.encode(5), 10), Some(5));
    }
}
