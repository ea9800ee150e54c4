//! Times the collections against each other, for an API made up of [`Operation`]s.
//!
//! Each [`Structure`] is loaded with the same synthetic data and every operation of the API is run
//! against it in turn, recording how long each one takes. The resulting [`Timing`]s can then be
//! compared with [`best`] and [`rank`].
//!
//! Separately, [`candidates`] narrows the structures down from a set of [`Requirements`], and
//! [`prefer`] reorders them according to [`Hint`]s.
//!
//! # Logging
//! Progress is reported through [`tracing`]: a `debug` event for every timed operation, an `info`
//! event once a structure has finished and a `warn` event if a workload fails.

mod config;
mod error;
mod operation;
mod select;
mod structure;
mod tests;
mod timing;
mod workload;

use std::time::Instant;

use tracing::{debug, info, warn};

pub use config::*;
pub use error::*;
pub use operation::*;
pub use select::*;
pub use structure::*;
pub use timing::*;
pub use workload::*;

use crate::collections::binary_tree::BinaryTreeSet;
use crate::collections::contiguous::{Queue, Stack, Vector};
use crate::collections::hash::HashTable;
use crate::collections::linked::LinkedList;

/// Runs every operation of `api`, in order, against a new instance of `structure` and records the
/// time taken by each.
///
/// # Errors
/// Returns the first [`WorkloadError`] encountered, which can happen if the hash table's capacity
/// is zero or if an operation such as `delete()` runs before the structure holds enough data.
pub fn measure(
    structure: Structure,
    api: &[Operation],
    data: &[Datum],
    config: &Config,
) -> Result<Timing, WorkloadError> {
    let result = match structure {
        Structure::Array => time(structure, Vector::new(), api, data),
        Structure::Stack => time(structure, Stack::new(), api, data),
        Structure::Queue => time(structure, Queue::new(), api, data),
        Structure::LinkedList => time(structure, LinkedList::new(), api, data),
        Structure::HashTable => HashTable::try_with_cap(config.hash_capacity)
            .map_err(WorkloadError::from)
            .and_then(|table| time(structure, table, api, data)),
        Structure::Tree => time(structure, BinaryTreeSet::new(), api, data),
    };

    match &result {
        Ok(timing) => info!(
            %structure,
            total = ?timing.total(),
            average = ?timing.average(),
            "finished timing"
        ),
        Err(error) => warn!(%structure, %error, "workload failed"),
    }

    result
}

fn time<W: Workload>(
    structure: Structure,
    mut workload: W,
    api: &[Operation],
    data: &[Datum],
) -> Result<Timing, WorkloadError> {
    let mut timing = Timing::new(structure);

    for &op in api {
        let start = Instant::now();
        workload.run(op, data)?;
        let elapsed = start.elapsed();

        debug!(%structure, %op, ?elapsed, "timed operation");
        timing.durations.push((op, elapsed));
    }

    Ok(timing)
}

/// The outcome of timing every structure named by a [`Config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Comparison {
    pub timings: Vector<Timing>,
    pub failures: Vector<(Structure, WorkloadError)>,
    /// The structures suited to the configured requirements, favoured ones first.
    pub candidates: Vector<Structure>,
}

impl Comparison {
    /// Returns the fastest structure on average, see [`best`].
    pub fn best(&self) -> Option<&Timing> {
        best(&self.timings)
    }

    /// Returns the structures from fastest to slowest, see [`rank`].
    pub fn rank(&self) -> Vector<&Timing> {
        rank(&self.timings)
    }
}

/// Generates synthetic data as described by `config` and measures each of its structures. A
/// structure whose workload fails is recorded in [`Comparison::failures`] and the rest are still
/// measured.
pub fn compare(config: &Config) -> Comparison {
    let data = synthetic_data(config.size, config.seed);
    info!(size = config.size, seed = config.seed, "generated synthetic data");

    let mut comparison = Comparison {
        timings: Vector::new(),
        failures: Vector::new(),
        candidates: prefer(&candidates(config.requirements), &config.hints),
    };

    for &structure in config.structures.iter() {
        match measure(structure, &config.api, &data, config) {
            Ok(timing) => comparison.timings.push(timing),
            Err(error) => comparison.failures.push((structure, error)),
        }
    }

    comparison
}
