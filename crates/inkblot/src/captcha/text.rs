//! Random answer text.

use inkblot_common::Alphabet;
use rand::Rng;
use rand::seq::IndexedRandom;

/// `length` characters drawn uniformly, with replacement, from `alphabet`
pub fn random_text<R: Rng>(rng: &mut R, length: usize, alphabet: Alphabet) -> String {
    let chars = alphabet.chars().as_bytes();
    (0..length)
        .filter_map(|_| chars.choose(rng).map(|&b| char::from(b)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    #[test]
    fn test_length_and_membership() {
        let mut rng = StdRng::seed_from_u64(11);
        for alphabet in [Alphabet::All, Alphabet::Numeric, Alphabet::Lower, Alphabet::Upper] {
            for length in [1, 4, 16] {
                let text = random_text(&mut rng, length, alphabet);
                assert_eq!(text.chars().count(), length);
                assert!(text.chars().all(|c| alphabet.contains(c)));
            }
        }
    }

    #[test]
    fn test_alphabet_specific_classes() {
        let mut rng = StdRng::seed_from_u64(12);
        let mut draw = |alphabet| random_text(&mut rng, 64, alphabet);

        assert!(draw(Alphabet::Numeric).chars().all(|c| c.is_ascii_digit()));
        assert!(draw(Alphabet::Lower).chars().all(|c| c.is_ascii_lowercase()));
        assert!(draw(Alphabet::Upper).chars().all(|c| c.is_ascii_uppercase()));
        assert!(draw(Alphabet::All).chars().all(|c| c.is_ascii_alphanumeric()));
    }

    #[test]
    fn test_empty_length() {
        let mut rng = StdRng::seed_from_u64(13);
        assert!(random_text(&mut rng, 0, Alphabet::All).is_empty());
    }
}
