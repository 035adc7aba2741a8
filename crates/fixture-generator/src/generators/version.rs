//! Listing version generator.

use crate::entities::ListingVersion;
use crate::error::GeneratorError;
use crate::sampler::{pick_one, sample_non_empty_prefix};
use crate::vocabulary::Vocabulary;
use rand::Rng;

/// Generate a version payload for an existing listing.
///
/// Supported Eclipse versions and platforms are non-empty samples of the
/// vocabulary; the minimum Java version is one vocabulary entry.
pub fn generate_version<R: Rng + ?Sized>(
    rng: &mut R,
    vocabulary: &Vocabulary,
    listing_id: &str,
    label: &str,
) -> Result<ListingVersion, GeneratorError> {
    Ok(ListingVersion {
        version: label.to_string(),
        listing_id: listing_id.to_string(),
        eclipse_versions: sample_non_empty_prefix(rng, &vocabulary.eclipse_versions)?,
        min_java_version: pick_one(rng, &vocabulary.java_versions)?.clone(),
        platforms: sample_non_empty_prefix(rng, &vocabulary.platforms)?,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_generate_version_subsets() {
        let mut rng = StdRng::seed_from_u64(42);
        let vocabulary = Vocabulary::default();

        for i in 0..50 {
            let version = generate_version(&mut rng, &vocabulary, "l1", &i.to_string()).unwrap();

            assert_eq!(version.listing_id, "l1");
            assert_eq!(version.version, i.to_string());
            assert!(!version.eclipse_versions.is_empty());
            assert!(!version.platforms.is_empty());
            assert!(version
                .eclipse_versions
                .iter()
                .all(|v| vocabulary.eclipse_versions.contains(v)));
            assert!(version
                .platforms
                .iter()
                .all(|p| vocabulary.platforms.contains(p)));
            assert!(vocabulary.java_versions.contains(&version.min_java_version));
        }
    }

    #[test]
    fn test_generate_version_empty_platforms() {
        let mut rng = StdRng::seed_from_u64(42);
        let vocabulary = Vocabulary {
            platforms: vec![],
            ..Vocabulary::default()
        };

        let result = generate_version(&mut rng, &vocabulary, "l1", "0");
        assert!(matches!(result, Err(GeneratorError::InvalidArgument(_))));
    }
}
