/// What the BMS should make of the latest estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EstimatorHealth {
    Healthy,
    /// The last cycles failed; the published estimate is from the last success.
    Holding { consecutive_failures: u32 },
    /// Too many failures in a row to keep trusting the held estimate.
    Faulted { consecutive_failures: u32 },
}

/// Counts failed cycles and escalates once `threshold` fail in a row.
/// A single successful cycle clears the streak.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FaultMonitor {
    threshold: u32,
    consecutive_failures: u32,
    total_failures: u64,
}

impl FaultMonitor {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold: threshold.max(1),
            consecutive_failures: 0,
            total_failures: 0,
        }
    }

    pub fn record<T, E>(&mut self, result: &Result<T, E>) -> EstimatorHealth {
        match result {
            Ok(_) => self.consecutive_failures = 0,
            Err(_) => {
                self.consecutive_failures = self.consecutive_failures.saturating_add(1);
                self.total_failures += 1;
            }
        }
        self.health()
    }

    pub fn health(&self) -> EstimatorHealth {
        match self.consecutive_failures {
            0 => EstimatorHealth::Healthy,
            n if n < self.threshold => EstimatorHealth::Holding {
                consecutive_failures: n,
            },
            n => EstimatorHealth::Faulted {
                consecutive_failures: n,
            },
        }
    }

    pub fn total_failures(&self) -> u64 {
        self.total_failures
    }

    /// Clears the failure streak. `total_failures` keeps counting across resets.
    pub fn reset(&mut self) {
        self.consecutive_failures = 0;
    }
}
