//! Seeding outcome accounting and summary output.

use crate::stage::Stage;
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::Serialize;
use std::collections::BTreeMap;

/// Entity kinds created by a seeding run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Category,
    Market,
    Listing,
    Version,
    Install,
}

impl EntityKind {
    pub const ALL: [EntityKind; 5] = [
        EntityKind::Category,
        EntityKind::Market,
        EntityKind::Listing,
        EntityKind::Version,
        EntityKind::Install,
    ];
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EntityKind::Category => write!(f, "category"),
            EntityKind::Market => write!(f, "market"),
            EntityKind::Listing => write!(f, "listing"),
            EntityKind::Version => write!(f, "version"),
            EntityKind::Install => write!(f, "install"),
        }
    }
}

/// Per-kind creation counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct KindCounts {
    pub created: u64,
    pub failed: u64,
}

impl KindCounts {
    pub fn attempted(&self) -> u64 {
        self.created + self.failed
    }
}

/// One entity the server refused or never answered for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CreationFailure {
    pub kind: EntityKind,
    /// Local identity of the entity (`listing@version` for versions and installs)
    pub id: String,
    pub stage: Stage,
    pub message: String,
}

/// Counts and failures accumulated by one unit of work.
///
/// Listing pipelines each build their own tally; the scheduler merges them
/// once their batch settles.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Tally {
    pub counts: BTreeMap<EntityKind, KindCounts>,
    pub failures: Vec<CreationFailure>,
    /// Listings whose install stage was skipped because no version was created
    pub listings_without_versions: u64,
}

impl Tally {
    pub fn record_created(&mut self, kind: EntityKind) {
        self.counts.entry(kind).or_default().created += 1;
    }

    pub fn record_failure(&mut self, failure: CreationFailure) {
        self.counts.entry(failure.kind).or_default().failed += 1;
        self.failures.push(failure);
    }

    pub fn merge(&mut self, other: Tally) {
        for (kind, counts) in other.counts {
            let entry = self.counts.entry(kind).or_default();
            entry.created += counts.created;
            entry.failed += counts.failed;
        }
        self.failures.extend(other.failures);
        self.listings_without_versions += other.listings_without_versions;
    }

    pub fn counts(&self, kind: EntityKind) -> KindCounts {
        self.counts.get(&kind).copied().unwrap_or_default()
    }
}

/// Summary of a completed seeding run.
#[derive(Debug, Clone, Serialize)]
pub struct SeedReport {
    /// Seed the run's RNG was initialised with; rerun with it to reproduce
    pub seed: u64,
    #[serde(flatten)]
    pub tally: Tally,
    pub duration_ms: u64,
}

impl SeedReport {
    pub fn new(seed: u64) -> Self {
        Self {
            seed,
            tally: Tally::default(),
            duration_ms: 0,
        }
    }

    pub fn counts(&self, kind: EntityKind) -> KindCounts {
        self.tally.counts(kind)
    }

    pub fn total_failures(&self) -> usize {
        self.tally.failures.len()
    }

    pub fn failures(&self) -> &[CreationFailure] {
        &self.tally.failures
    }
}

/// Format a seed report as a table.
pub fn format_table(report: &SeedReport) -> String {
    let mut output = String::new();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec!["Entity", "Attempted", "Created", "Failed"]);

    for kind in EntityKind::ALL {
        let counts = report.counts(kind);
        let failed_cell = if counts.failed > 0 {
            Cell::new(format_number(counts.failed)).fg(Color::Red)
        } else {
            Cell::new(format_number(counts.failed))
        };
        table.add_row(vec![
            Cell::new(kind),
            Cell::new(format_number(counts.attempted())),
            Cell::new(format_number(counts.created)),
            failed_cell,
        ]);
    }

    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\nSeed: {}  Duration: {:.1}s\n",
        report.seed,
        report.duration_ms as f64 / 1000.0
    ));

    if report.tally.listings_without_versions > 0 {
        output.push_str(&format!(
            "Listings without versions (installs skipped): {}\n",
            format_number(report.tally.listings_without_versions)
        ));
    }

    output
}

/// Format number with thousands separators.
fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();
    let chars: Vec<char> = s.chars().collect();

    for (i, c) in chars.iter().enumerate() {
        if i > 0 && (chars.len() - i) % 3 == 0 {
            result.push(',');
        }
        result.push(*c);
    }

    result
}
