//! Filler text generator.

use fake::faker::lorem::en::Words;
use fake::Fake;
use rand::Rng;

/// Generate between `min` and `max` (inclusive) space-separated random words.
pub fn generate_words_between<R: Rng + ?Sized>(rng: &mut R, min: usize, max: usize) -> String {
    let words: Vec<String> = Words(min..max.max(min) + 1).fake_with_rng(rng);
    words.join(" ")
}
