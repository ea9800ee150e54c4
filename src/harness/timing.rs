use std::fmt::{self, Display, Formatter};
use std::time::Duration;

use super::{Operation, Structure};
use crate::collections::contiguous::Vector;

/// The wall-clock time taken by each operation run against one structure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timing {
    pub structure: Structure,
    pub durations: Vector<(Operation, Duration)>,
}

impl Timing {
    /// Creates a Timing for `structure` with no recorded operations.
    pub fn new(structure: Structure) -> Timing {
        Timing {
            structure,
            durations: Vector::new(),
        }
    }

    /// Returns the combined time taken by every operation.
    pub fn total(&self) -> Duration {
        self.durations.iter().map(|(_, duration)| *duration).sum()
    }

    /// Returns the mean time taken per operation, or zero if nothing was timed.
    pub fn average(&self) -> Duration {
        match self.durations.len() {
            0 => Duration::ZERO,
            count => {
                let nanos = self.total().as_nanos() / count as u128;
                Duration::from_nanos(u64::try_from(nanos).unwrap_or(u64::MAX))
            },
        }
    }

    /// Returns the time taken by `op`, if it was run. If it was run more than once, the first
    /// duration is returned.
    pub fn get(&self, op: Operation) -> Option<Duration> {
        self.durations
            .iter()
            .find(|(timed, _)| *timed == op)
            .map(|(_, duration)| *duration)
    }
}

impl Display for Timing {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}: ", self.structure)?;
        f.debug_map()
            .entries(self.durations.iter().map(|(op, duration)| (op.name(), duration)))
            .finish()?;
        write!(f, " (average {:?})", self.average())
    }
}

/// Returns the timing with the lowest average. When averages are equal, the later timing wins.
///
/// # Examples
/// ```
/// # use std::time::Duration;
/// # use structure_bench::harness::{self, Operation, Structure, Timing};
/// let mut array = Timing::new(Structure::Array);
/// array.durations.push((Operation::Insert, Duration::from_micros(5)));
/// let mut tree = Timing::new(Structure::Tree);
/// tree.durations.push((Operation::Insert, Duration::from_micros(5)));
///
/// let timings = [array, tree];
/// assert_eq!(harness::best(&timings).map(|t| t.structure), Some(Structure::Tree));
/// ```
pub fn best(timings: &[Timing]) -> Option<&Timing> {
    timings.iter().fold(None, |best, timing| match best {
        Some(best) if best.average() < timing.average() => Some(best),
        _ => Some(timing),
    })
}

/// Returns the timings ordered from the lowest average to the highest. Timings with equal averages
/// keep their relative order.
pub fn rank(timings: &[Timing]) -> Vector<&Timing> {
    let mut ranked: Vector<&Timing> = timings.iter().collect();
    ranked.sort_by_key(|timing| timing.average());
    ranked
}
