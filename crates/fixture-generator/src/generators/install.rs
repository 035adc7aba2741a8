//! Install generator.

use super::timestamp::generate_backdated;
use crate::entities::{Install, ListingVersion};
use crate::error::GeneratorError;
use crate::sampler::pick_one;
use crate::vocabulary::Vocabulary;
use chrono::{DateTime, SecondsFormat, Utc};
use rand::Rng;

/// Generate an install against one of a listing's created versions.
///
/// Returns `Ok(None)` when the listing has no versions; callers skip install
/// generation for such listings. The Java version is drawn from the
/// vocabulary entries at or above the version's minimum, the Eclipse version
/// and platform from the version's own supported sets.
pub fn generate_install<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &Vocabulary,
    listing_id: &str,
    versions: &[ListingVersion],
    now: DateTime<Utc>,
) -> Result<Option<Install>, GeneratorError> {
    let Ok(version) = pick_one(rng, versions) else {
        return Ok(None);
    };

    if version.listing_id != listing_id {
        return Err(GeneratorError::UnknownReference {
            kind: "listing version",
            value: format!("{}@{}", version.listing_id, version.version),
        });
    }

    let java_versions = vocabulary.java_versions_from(&version.min_java_version)?;
    let eclipse_version = pick_one(rng, &version.eclipse_versions)?;
    // Reject versions declaring Eclipse releases outside the vocabulary
    vocabulary.eclipse_rank(eclipse_version)?;

    Ok(Some(Install {
        listing_id: listing_id.to_string(),
        version: version.version.clone(),
        java_version: pick_one(rng, java_versions)?.clone(),
        eclipse_version: eclipse_version.clone(),
        os: pick_one(rng, &version.platforms)?.clone(),
        locale: pick_one(rng, &vocabulary.locales)?.clone(),
        install_date: generate_backdated(rng, now).to_rfc3339_opts(SecondsFormat::Secs, true),
    }))
}
