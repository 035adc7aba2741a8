//! Listing generator.

use super::text::generate_words_between;
use super::timestamp::format_catalog_timestamp;
use crate::context::RunContext;
use crate::entities::{Author, Listing, Organization, Tag};
use crate::error::GeneratorError;
use crate::sampler::{pick_one, sample_bounded_subset};
use chrono::{DateTime, Utc};
use rand::Rng;

/// Upper bound on category references per listing.
pub const MAX_CATEGORY_REFS: usize = 6;

/// Upper bound on market references per listing.
pub const MAX_MARKET_REFS: usize = 2;

/// Generate a listing payload.
///
/// Category and market references are drawn without replacement from the
/// context's pools. Registering the market references is left to the caller
/// so that generation stays free of side effects.
pub fn generate_listing<R: Rng + ?Sized>(
    rng: &mut R,
    context: &RunContext,
    id: String,
    now: DateTime<Utc>,
) -> Result<Listing, GeneratorError> {
    let vocabulary = context.vocabulary();
    let timestamp = format_catalog_timestamp(now);

    Ok(Listing {
        id,
        title: "Sample".to_string(),
        url: "https://jakarta.ee".to_string(),
        foundation_member: false,
        teaser: generate_words_between(rng, 0, 100),
        body: generate_words_between(rng, 0, 300),
        status: "draft".to_string(),
        support_url: "https://jakarta.ee/about/faq".to_string(),
        license_type: pick_one(rng, &vocabulary.license_types)?.clone(),
        created: timestamp.clone(),
        changed: timestamp,
        authors: vec![Author {
            full_name: "Martin Lowe".to_string(),
            username: "autumnfound".to_string(),
        }],
        organization: Organization {
            name: "Eclipse Foundation".to_string(),
            id: 1,
        },
        tags: vec![Tag {
            name: "Build tools".to_string(),
            id: "1".to_string(),
            url: String::new(),
        }],
        market_ids: sample_bounded_subset(rng, context.market_ids(), MAX_MARKET_REFS),
        category_ids: sample_bounded_subset(rng, context.category_ids(), MAX_CATEGORY_REFS),
        screenshots: vec!["http://www.example.com/img/sample.png".to_string()],
    })
}
