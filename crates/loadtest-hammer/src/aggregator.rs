//! Response aggregation and reporting.

use chrono::{DateTime, Utc};
use comfy_table::{presets::UTF8_FULL, Cell, Color, Table};
use serde::Serialize;
use serde_json::Value;
use std::collections::HashSet;

/// Running set of entity IDs seen across responses.
#[derive(Debug, Default)]
pub struct IdAggregator {
    seen: HashSet<String>,
    duplicates: u64,
    without_id: u64,
}

impl IdAggregator {
    /// Fold one response's entities into the running totals.
    pub fn observe(&mut self, entities: &[Value]) {
        for entity in entities {
            match entity_id(entity) {
                Some(id) => {
                    if !self.seen.insert(id) {
                        self.duplicates += 1;
                    }
                }
                None => self.without_id += 1,
            }
        }
    }

    pub fn unique(&self) -> u64 {
        self.seen.len() as u64
    }

    pub fn duplicates(&self) -> u64 {
        self.duplicates
    }

    pub fn without_id(&self) -> u64 {
        self.without_id
    }
}

/// Entity ID as a string; numeric IDs are accepted too.
fn entity_id(entity: &Value) -> Option<String> {
    match entity.get("id")? {
        Value::String(id) => Some(id.clone()),
        Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

/// Outcome of a hammer run.
#[derive(Debug, Clone, Serialize)]
pub struct HammerReport {
    pub path: String,
    pub requested: u64,
    pub settled: u64,
    pub succeeded: u64,
    pub failed: u64,
    pub unique: u64,
    pub duplicates: u64,
    /// Entities whose response carried no usable `id` field
    pub without_id: u64,
    pub started_at: DateTime<Utc>,
    pub completed_at: DateTime<Utc>,
    pub duration_ms: u64,
}

impl HammerReport {
    pub fn requests_per_second(&self) -> f64 {
        if self.duration_ms > 0 {
            self.settled as f64 / (self.duration_ms as f64 / 1000.0)
        } else {
            0.0
        }
    }
}

/// Format a hammer report as a table.
pub fn format_table(report: &HammerReport) -> String {
    let mut output = String::new();

    let mut table = Table::new();
    table.load_preset(UTF8_FULL);
    table.set_header(vec![
        "Endpoint",
        "Requests",
        "Succeeded",
        "Failed",
        "Unique",
        "Duplicates",
        "Duration",
        "Req/sec",
    ]);

    let failed_cell = if report.failed > 0 {
        Cell::new(report.failed).fg(Color::Red)
    } else {
        Cell::new(report.failed).fg(Color::Green)
    };

    table.add_row(vec![
        Cell::new(&report.path),
        Cell::new(format!("{}/{}", report.settled, report.requested)),
        Cell::new(report.succeeded),
        failed_cell,
        Cell::new(report.unique),
        Cell::new(report.duplicates),
        Cell::new(format_duration(report.duration_ms as f64 / 1000.0)),
        Cell::new(format!("{:.1}", report.requests_per_second())),
    ]);

    output.push_str(&table.to_string());
    output.push_str(&format!(
        "\nStart: {}, end: {}\n",
        report.started_at.format("%Y-%m-%d %H:%M:%S%.3f UTC"),
        report.completed_at.format("%Y-%m-%d %H:%M:%S%.3f UTC")
    ));
    if report.without_id > 0 {
        output.push_str(&format!(
            "Entities without an id: {}\n",
            report.without_id
        ));
    }

    output
}

/// Format duration in human-readable format.
fn format_duration(secs: f64) -> String {
    if secs < 60.0 {
        format!("{secs:.2}s")
    } else {
        let mins = (secs / 60.0).floor();
        let remaining_secs = secs - (mins * 60.0);
        format!("{}m {:02.0}s", mins as u64, remaining_secs)
    }
}
