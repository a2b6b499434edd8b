//! Random word selection

use rand::Rng;

/// Uniformly random catalog index in `0..catalog_len`
///
/// # Panics
/// Panics if `catalog_len` is zero.
pub fn random_index<R: Rng + ?Sized>(rng: &mut R, catalog_len: usize) -> usize {
    assert!(catalog_len > 0, "random index requires a non-empty catalog");
    rng.random_range(0..catalog_len)
}

/// Random index different from `exclude` whenever the catalog allows it
///
/// With a single-word catalog the only index is returned.
///
/// # Panics
/// Panics if `catalog_len` is zero.
pub fn random_index_excluding<R: Rng + ?Sized>(
    rng: &mut R,
    catalog_len: usize,
    exclude: usize,
) -> usize {
    assert!(catalog_len > 0, "random index requires a non-empty catalog");
    if catalog_len == 1 || exclude >= catalog_len {
        return random_index(rng, catalog_len);
    }
    // Draw from the other N-1 slots and step over the excluded one
    let pick = rng.random_range(0..catalog_len - 1);
    if pick >= exclude { pick + 1 } else { pick }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn random_index_in_range() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..1_000 {
            assert!(random_index(&mut rng, 17) < 17);
        }
    }

    #[test]
    fn random_index_covers_catalog() {
        let mut rng = StdRng::seed_from_u64(2);
        let mut seen = [false; 8];
        for _ in 0..1_000 {
            seen[random_index(&mut rng, 8)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }

    #[test]
    fn excluding_never_returns_excluded() {
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..1_000 {
            let index = random_index_excluding(&mut rng, 5, 2);
            assert!(index < 5);
            assert_ne!(index, 2);
        }
    }

    #[test]
    fn excluding_single_word_catalog() {
        let mut rng = StdRng::seed_from_u64(4);
        assert_eq!(random_index_excluding(&mut rng, 1, 0), 0);
    }

    #[test]
    #[should_panic(expected = "non-empty catalog")]
    fn empty_catalog_panics() {
        let mut rng = StdRng::seed_from_u64(5);
        let _ = random_index(&mut rng, 0);
    }
}
