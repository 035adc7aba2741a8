//! Dependency scheduler for a seeding run.

use crate::config::SeedConfig;
use crate::error::PopulateError;
use crate::report::{CreationFailure, EntityKind, SeedReport, Tally};
use crate::stage::Stage;
use chrono::{DateTime, Utc};
use fixture_generator::generators::{
    generate_install, generate_listing, generate_uuid_v4, generate_version,
};
use fixture_generator::{ListingVersion, RunContext};
use futures::future::join_all;
use marketplace_client::{Transport, WriteMethod};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use serde_json::Value;
use std::time::Instant;
use tracing::{debug, info, warn};

pub const CATEGORIES_PATH: &str = "/categories/";
pub const MARKETS_PATH: &str = "/markets/";
pub const LISTINGS_PATH: &str = "/listings/";
pub const VERSIONS_PATH: &str = "/listing_versions";

/// Seed of the RNG driving one listing's pipeline.
///
/// Deriving it from the run seed and the listing index keeps output
/// reproducible no matter in which order a batch's listings complete.
fn listing_seed(run_seed: u64, index: u64) -> u64 {
    run_seed.wrapping_add(index.wrapping_add(1).wrapping_mul(0x9E3779B97F4A7C15))
}

/// Drives entity creation in dependency order against a [`Transport`].
///
/// Failed creations are logged, recorded in the report and otherwise
/// ignored: dependent entities are still generated and submitted. Only
/// generator contract violations abort the run.
pub struct FixtureScheduler<T: Transport> {
    transport: T,
    config: SeedConfig,
    stage: Stage,
}

impl<T: Transport> FixtureScheduler<T> {
    pub fn new(transport: T, config: SeedConfig) -> Self {
        Self {
            transport,
            config,
            stage: Stage::Init,
        }
    }

    pub fn stage(&self) -> Stage {
        self.stage
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    pub fn config(&self) -> &SeedConfig {
        &self.config
    }

    fn transition(&mut self, to: Stage) {
        debug_assert_eq!(self.stage.next(), Some(to), "out-of-order stage transition");
        info!("Stage {} -> {}", self.stage, to);
        self.stage = to;
    }

    /// Run every stage to completion and return the summary.
    pub async fn run(&mut self) -> Result<SeedReport, PopulateError> {
        self.config.validate()?;
        let start = Instant::now();

        let run_seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(run_seed);
        let mut report = SeedReport::new(run_seed);
        info!(
            "Seeding {} listings (batch size {}, max installs {}, seed {})",
            self.config.listing_count, self.config.batch_size, self.config.max_installs, run_seed
        );

        let context = RunContext::allocate(
            self.config.vocabulary.clone(),
            self.config.category_count,
            self.config.market_count,
            &mut rng,
        )?;
        info!(
            "Allocated {} category IDs and {} market IDs",
            context.category_ids().len(),
            context.market_ids().len()
        );

        self.transition(Stage::Categories);
        for category in context.categories() {
            let result = self
                .create_entity(
                    EntityKind::Category,
                    &category.id,
                    Stage::Categories,
                    WriteMethod::Put,
                    CATEGORIES_PATH,
                    category,
                )
                .await;
            record(&mut report.tally, EntityKind::Category, result);
        }

        // Markets stay pending until every listing has registered against them
        self.transition(Stage::MarketsRegistered);
        debug!("{} markets pending", context.market_ids().len());

        self.transition(Stage::Listings);
        let now = Utc::now();
        self.run_listings(&context, run_seed, now, &mut report.tally)
            .await?;

        self.transition(Stage::MarketsPersisted);
        for market in context.markets().seal() {
            let result = self
                .create_entity(
                    EntityKind::Market,
                    &market.id,
                    Stage::MarketsPersisted,
                    WriteMethod::Put,
                    MARKETS_PATH,
                    &market,
                )
                .await;
            record(&mut report.tally, EntityKind::Market, result);
        }

        self.transition(Stage::Done);
        report.duration_ms = start.elapsed().as_millis() as u64;
        info!(
            "Seeding complete in {:.2}s with {} failed creations",
            start.elapsed().as_secs_f64(),
            report.total_failures()
        );
        Ok(report)
    }

    /// Process listings in batches; each batch settles before the next starts.
    async fn run_listings(
        &self,
        context: &RunContext,
        run_seed: u64,
        now: DateTime<Utc>,
        tally: &mut Tally,
    ) -> Result<(), PopulateError> {
        let total = self.config.listing_count;
        let batch_size = self.config.batch_size as u64;
        let mut batch_start = 0;

        while batch_start < total {
            let batch_end = (batch_start + batch_size).min(total);
            info!(
                "Generating listings {}..{} of {}",
                batch_start + 1,
                batch_end,
                total
            );

            let outcomes = join_all(
                (batch_start..batch_end)
                    .map(|index| self.run_listing(context, listing_seed(run_seed, index), now)),
            )
            .await;

            // Merge every settled pipeline before surfacing the first error
            let mut first_error = None;
            for outcome in outcomes {
                match outcome {
                    Ok(listing_tally) => tally.merge(listing_tally),
                    Err(e) => {
                        first_error.get_or_insert(e);
                    }
                }
            }
            if let Some(e) = first_error {
                return Err(e);
            }

            batch_start = batch_end;
        }
        Ok(())
    }

    /// One listing's pipeline: listing, then its versions in order, then installs.
    async fn run_listing(
        &self,
        context: &RunContext,
        seed: u64,
        now: DateTime<Utc>,
    ) -> Result<Tally, PopulateError> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut tally = Tally::default();
        let vocabulary = context.vocabulary();

        let local_id = generate_uuid_v4(&mut rng);
        let listing = generate_listing(&mut rng, context, local_id, now)?;

        let listing_id = match self
            .create_entity(
                EntityKind::Listing,
                &listing.id,
                Stage::Listings,
                WriteMethod::Put,
                LISTINGS_PATH,
                &listing,
            )
            .await
        {
            Ok(confirmed) => {
                tally.record_created(EntityKind::Listing);
                confirmed_id(&confirmed).unwrap_or_else(|| listing.id.clone())
            }
            Err(failure) => {
                // Best effort: versions and installs are still attempted
                tally.record_failure(failure);
                listing.id.clone()
            }
        };
        context
            .markets()
            .register(&listing_id, &listing.market_ids)?;

        let version_count = rng.gen_range(1..=self.config.max_versions);
        let mut versions: Vec<ListingVersion> = Vec::with_capacity(version_count as usize);
        for n in 0..version_count {
            let version = generate_version(&mut rng, vocabulary, &listing_id, &n.to_string())?;
            let version_key = format!("{listing_id}@{}", version.version);

            match self
                .create_entity(
                    EntityKind::Version,
                    &version_key,
                    Stage::Versions,
                    WriteMethod::Put,
                    VERSIONS_PATH,
                    &version,
                )
                .await
            {
                Ok(confirmed) => {
                    tally.record_created(EntityKind::Version);
                    versions.push(confirmed_version(version, &confirmed));
                }
                Err(failure) => tally.record_failure(failure),
            }
        }

        if versions.is_empty() {
            tally.listings_without_versions += 1;
        }

        let install_count = rng.gen_range(0..=self.config.max_installs);
        let mut installs = Vec::with_capacity(install_count as usize);
        for _ in 0..install_count {
            match generate_install(&mut rng, vocabulary, &listing_id, &versions, now)? {
                Some(install) => installs.push(install),
                None => {
                    debug!("Listing '{listing_id}' has no created versions; skipping installs");
                    break;
                }
            }
        }

        debug!(
            "Generating {} install records for listing '{}'",
            installs.len(),
            listing_id
        );
        let results = join_all(installs.iter().map(|install| {
            let path = install.endpoint_path();
            let key = format!("{}@{}", install.listing_id, install.version);
            async move {
                self.create_entity(
                    EntityKind::Install,
                    &key,
                    Stage::Installs,
                    WriteMethod::Post,
                    &path,
                    install,
                )
                .await
            }
        }))
        .await;
        for result in results {
            record(&mut tally, EntityKind::Install, result);
        }

        Ok(tally)
    }

    /// Submit one payload, turning a transport error into a recorded failure.
    async fn create_entity<P: Serialize>(
        &self,
        kind: EntityKind,
        id: &str,
        stage: Stage,
        method: WriteMethod,
        path: &str,
        payload: &P,
    ) -> Result<Value, CreationFailure> {
        let failure = |message: String| {
            warn!("Failed to create {kind} '{id}' during {stage}: {message}");
            CreationFailure {
                kind,
                id: id.to_string(),
                stage,
                message,
            }
        };

        let body = serde_json::to_value(payload).map_err(|e| failure(e.to_string()))?;
        debug!("Creating {kind} '{id}'");
        self.transport
            .create(method, path, &body)
            .await
            .map_err(|e| failure(e.to_string()))
    }
}

fn record(tally: &mut Tally, kind: EntityKind, result: Result<Value, CreationFailure>) {
    match result {
        Ok(_) => tally.record_created(kind),
        Err(failure) => tally.record_failure(failure),
    }
}

/// Server-assigned identity from a confirmation body, if it carries one.
fn confirmed_id(confirmed: &Value) -> Option<String> {
    confirmed
        .get("id")
        .and_then(Value::as_str)
        .filter(|id| !id.is_empty())
        .map(str::to_string)
}

/// Adopt the server-confirmed version label.
///
/// Only the identity is taken from the confirmation; the supported Java,
/// Eclipse and platform sets stay as generated, since installs are sampled
/// from them.
fn confirmed_version(mut local: ListingVersion, confirmed: &Value) -> ListingVersion {
    let same_listing = confirmed
        .get("listing_id")
        .and_then(Value::as_str)
        .map_or(true, |id| id == local.listing_id);
    let label = confirmed
        .get("version")
        .and_then(Value::as_str)
        .filter(|label| !label.is_empty());

    if let (true, Some(label)) = (same_listing, label) {
        local.version = label.to_string();
    }
    local
}
