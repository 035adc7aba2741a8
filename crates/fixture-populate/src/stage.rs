//! Stages of a seeding run.

use serde::{Deserialize, Serialize};

/// Where a seeding run (or one listing's pipeline) currently is.
///
/// The run itself moves through `Init → Categories → MarketsRegistered →
/// Listings → MarketsPersisted → Done`. `Versions` and `Installs` are
/// listing-scoped: every listing pipeline passes through them while the run
/// is in `Listings`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    Init,
    Categories,
    MarketsRegistered,
    Listings,
    Versions,
    Installs,
    MarketsPersisted,
    Done,
}

impl Stage {
    /// The run-level stage that follows this one.
    pub fn next(self) -> Option<Stage> {
        match self {
            Stage::Init => Some(Stage::Categories),
            Stage::Categories => Some(Stage::MarketsRegistered),
            Stage::MarketsRegistered => Some(Stage::Listings),
            Stage::Listings | Stage::Versions | Stage::Installs => Some(Stage::MarketsPersisted),
            Stage::MarketsPersisted => Some(Stage::Done),
            Stage::Done => None,
        }
    }

    /// Stages that belong to a single listing's pipeline.
    pub fn is_listing_scoped(self) -> bool {
        matches!(self, Stage::Versions | Stage::Installs)
    }

    pub fn is_terminal(self) -> bool {
        self == Stage::Done
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Stage::Init => "INIT",
            Stage::Categories => "CATEGORIES",
            Stage::MarketsRegistered => "MARKETS_REGISTERED",
            Stage::Listings => "LISTINGS",
            Stage::Versions => "VERSIONS",
            Stage::Installs => "INSTALLS",
            Stage::MarketsPersisted => "MARKETS_PERSISTED",
            Stage::Done => "DONE",
        };
        write!(f, "{name}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_sequence() {
        let mut stage = Stage::Init;
        let mut visited = vec![stage];
        while let Some(next) = stage.next() {
            stage = next;
            visited.push(stage);
        }

        assert_eq!(
            visited,
            vec![
                Stage::Init,
                Stage::Categories,
                Stage::MarketsRegistered,
                Stage::Listings,
                Stage::MarketsPersisted,
                Stage::Done,
            ]
        );
        assert!(stage.is_terminal());
    }

    #[test]
    fn test_listing_scoped() {
        assert!(Stage::Versions.is_listing_scoped());
        assert!(Stage::Installs.is_listing_scoped());
        assert!(!Stage::Listings.is_listing_scoped());
    }

    #[test]
    fn test_display() {
        assert_eq!(Stage::MarketsRegistered.to_string(), "MARKETS_REGISTERED");
    }
}
