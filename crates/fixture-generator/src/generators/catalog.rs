//! Category and market generators.

use super::text::generate_words_between;
use super::CATALOG_URL;
use crate::entities::{Category, Market};
use rand::Rng;

/// Generate a category payload for a pool ID.
pub fn generate_category<R: Rng + ?Sized>(rng: &mut R, id: String) -> Category {
    Category {
        id,
        title: generate_words_between(rng, 1, 4),
        url: CATALOG_URL.to_string(),
    }
}

/// Generate a market payload for a pool ID. The listing set starts empty.
pub fn generate_market<R: Rng + ?Sized>(rng: &mut R, id: String) -> Market {
    Market {
        id,
        title: generate_words_between(rng, 1, 4),
        url: CATALOG_URL.to_string(),
        listing_ids: Vec::new(),
    }
}
