//! Concurrent read load harness.
//!
//! Fires a fixed number of read requests at one endpoint all at once (no
//! admission control), waits for every one of them to settle, and reports how
//! many distinct entity IDs came back and how many were seen more than once.

pub mod aggregator;
pub mod args;
pub mod harness;

pub use aggregator::{format_table, HammerReport, IdAggregator};
pub use args::HammerArgs;
pub use harness::{run_hammer, HammerConfig};
