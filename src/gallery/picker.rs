//! Uniform random selection from the gallery index.

use rand::Rng;

use super::models::IndexEntry;

/// Map a roll in `[0, 1)` onto an entry position: `floor(roll * len)`.
///
/// Returns `None` for an empty index. The result is always `< len`; the
/// clamp covers float rounding at the top of the roll range.
pub fn index_for_roll(roll: f64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let position = (roll * len as f64).floor() as usize;
    Some(position.min(len - 1))
}

/// Select one entry uniformly at random, or `None` if the index is empty.
pub fn pick_entry<'a, R: Rng>(entries: &'a [IndexEntry], rng: &mut R) -> Option<&'a IndexEntry> {
    index_for_roll(rng.gen::<f64>(), entries.len()).map(|i| &entries[i])
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    fn two_entry_index() -> Vec<IndexEntry> {
        vec![
            IndexEntry {
                url: "a.png".to_string(),
            },
            IndexEntry {
                url: "b.png".to_string(),
            },
        ]
    }

    #[test]
    fn test_high_roll_selects_last_entry() {
        // floor(0.99 * 2) = 1
        assert_eq!(index_for_roll(0.99, 2), Some(1));
        let entries = two_entry_index();
        let i = index_for_roll(0.99, entries.len()).unwrap();
        assert_eq!(entries[i].url, "b.png");
    }

    #[test]
    fn test_zero_roll_selects_first_entry() {
        assert_eq!(index_for_roll(0.0, 2), Some(0));
    }

    #[test]
    fn test_empty_index_has_no_position() {
        assert_eq!(index_for_roll(0.5, 0), None);
        let mut rng = ChaCha8Rng::seed_from_u64(7);
        assert!(pick_entry(&[], &mut rng).is_none());
    }

    #[test]
    fn test_pick_stays_in_range() {
        let entries = two_entry_index();
        let mut rng = ChaCha8Rng::seed_from_u64(42);
        for _ in 0..1000 {
            let entry = pick_entry(&entries, &mut rng).unwrap();
            assert!(entry.url == "a.png" || entry.url == "b.png");
        }
    }

    proptest! {
        #[test]
        fn prop_position_below_len(roll in 0.0f64..1.0, len in 1usize..=512) {
            let position = index_for_roll(roll, len).unwrap();
            prop_assert!(position < len);
        }

        #[test]
        fn prop_roll_near_one_is_clamped(len in 1usize..=512) {
            // The largest representable roll below 1.0 must still land inside.
            let roll = 1.0f64 - f64::EPSILON;
            let position = index_for_roll(roll, len).unwrap();
            prop_assert!(position < len);
        }
    }
}
