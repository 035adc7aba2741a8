//! Run-scoped generation context.

use crate::entities::{Category, Market};
use crate::error::GeneratorError;
use crate::generators::{generate_category, generate_market, generate_uuid_v4};
use crate::registry::MarketRegistry;
use crate::vocabulary::Vocabulary;
use rand::Rng;

/// Everything a run's generators share: the vocabulary, the category and
/// market pools allocated at start-up, and the market reference registry.
///
/// The pools are fixed for the lifetime of the run; listings draw references
/// from them without replacement.
pub struct RunContext {
    vocabulary: Vocabulary,
    categories: Vec<Category>,
    category_ids: Vec<String>,
    market_ids: Vec<String>,
    markets: MarketRegistry,
}

impl RunContext {
    /// Allocate the category and market pools.
    ///
    /// Pool sizes are independent of how many listings will be generated.
    pub fn allocate<R: Rng + ?Sized>(
        vocabulary: Vocabulary,
        category_count: usize,
        market_count: usize,
        rng: &mut R,
    ) -> Result<Self, GeneratorError> {
        vocabulary.validate()?;

        let categories: Vec<Category> = (0..category_count)
            .map(|_| {
                let id = generate_uuid_v4(rng);
                generate_category(rng, id)
            })
            .collect();
        let markets: Vec<Market> = (0..market_count)
            .map(|_| {
                let id = generate_uuid_v4(rng);
                generate_market(rng, id)
            })
            .collect();

        let category_ids = categories.iter().map(|c| c.id.clone()).collect();
        let market_ids = markets.iter().map(|m| m.id.clone()).collect();

        Ok(Self {
            vocabulary,
            categories,
            category_ids,
            market_ids,
            markets: MarketRegistry::new(markets),
        })
    }

    pub fn vocabulary(&self) -> &Vocabulary {
        &self.vocabulary
    }

    /// Category payloads, in pool order.
    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn category_ids(&self) -> &[String] {
        &self.category_ids
    }

    pub fn market_ids(&self) -> &[String] {
        &self.market_ids
    }

    pub fn markets(&self) -> &MarketRegistry {
        &self.markets
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;
    use std::collections::HashSet;

    #[test]
    fn test_allocate_pools() {
        let mut rng = StdRng::seed_from_u64(42);
        let context = RunContext::allocate(Vocabulary::default(), 200, 5, &mut rng).unwrap();

        assert_eq!(context.categories().len(), 200);
        assert_eq!(context.category_ids().len(), 200);
        assert_eq!(context.market_ids().len(), 5);

        let unique: HashSet<_> = context.category_ids().iter().collect();
        assert_eq!(unique.len(), 200);
        assert!(!context.markets().is_sealed());
    }

    #[test]
    fn test_allocate_is_deterministic() {
        let mut rng1 = StdRng::seed_from_u64(9);
        let mut rng2 = StdRng::seed_from_u64(9);

        let c1 = RunContext::allocate(Vocabulary::default(), 3, 2, &mut rng1).unwrap();
        let c2 = RunContext::allocate(Vocabulary::default(), 3, 2, &mut rng2).unwrap();

        assert_eq!(c1.category_ids(), c2.category_ids());
        assert_eq!(c1.market_ids(), c2.market_ids());
    }

    #[test]
    fn test_allocate_rejects_invalid_vocabulary() {
        let mut rng = StdRng::seed_from_u64(42);
        let vocabulary = Vocabulary {
            java_versions: vec![],
            ..Vocabulary::default()
        };

        assert!(RunContext::allocate(vocabulary, 1, 1, &mut rng).is_err());
    }
}
