//! Randomized selection without replacement over finite domains.
//!
//! Every function here borrows its input and returns a fresh `Vec`, so the
//! shared vocabularies and ID pools are never reordered or shrunk.

use crate::error::GeneratorError;
use rand::seq::SliceRandom;
use rand::Rng;

/// Return a shuffled copy of `items`. Every element appears exactly once.
pub fn shuffle<T: Clone, R: Rng + ?Sized>(rng: &mut R, items: &[T]) -> Vec<T> {
    let mut shuffled = items.to_vec();
    shuffled.shuffle(rng);
    shuffled
}

/// Shuffle `items` and keep a prefix whose length is uniform over `1..=len`.
///
/// Used for "some but not all" selections such as supported platforms or
/// Eclipse versions. Fails on an empty domain.
pub fn sample_non_empty_prefix<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
) -> Result<Vec<T>, GeneratorError> {
    if items.is_empty() {
        return Err(GeneratorError::InvalidArgument(
            "cannot take a non-empty sample from an empty domain".to_string(),
        ));
    }

    let length = rng.gen_range(1..=items.len());
    let mut sample = shuffle(rng, items);
    sample.truncate(length);
    Ok(sample)
}

/// Shuffle `items` and keep a prefix whose length is uniform over
/// `0..=min(max_count, len)`.
pub fn sample_bounded_subset<T: Clone, R: Rng + ?Sized>(
    rng: &mut R,
    items: &[T],
    max_count: usize,
) -> Vec<T> {
    let upper = max_count.min(items.len());
    if upper == 0 {
        return Vec::new();
    }

    let length = rng.gen_range(0..=upper);
    let mut sample = shuffle(rng, items);
    sample.truncate(length);
    sample
}

/// Pick a single element uniformly. Fails on an empty domain.
pub fn pick_one<'a, T, R: Rng + ?Sized>(
    rng: &mut R,
    items: &'a [T],
) -> Result<&'a T, GeneratorError> {
    items.choose(rng).ok_or_else(|| {
        GeneratorError::InvalidArgument("cannot pick from an empty domain".to_string())
    })
}
