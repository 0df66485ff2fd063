//! Ties the [`Checker`]'s frontier search to the [`Coordinator`]'s per-configuration execution
//! until the reachable state space reaches a fixpoint.

use std::collections::HashSet;

use tracing::info;

use crate::checker::Checker;
use crate::coordinator::Coordinator;
use crate::error::RuntimeError;
use crate::memory::Configuration;

/// Drives the model checker end to end: explore every configuration reachable from `c0` by
/// running each of the coordinator's cores against it, until no core publishes anything new.
pub struct Simulator {
    checker: Checker,
    coordinator: Coordinator,
}

impl Simulator {
    pub fn new(coordinator: Coordinator) -> Self {
        Self {
            checker: Checker::new(),
            coordinator,
        }
    }

    /// Runs the search to a fixpoint, returning the total cycles charged across every
    /// configuration processed and the full set of reachable configurations (`c0` included).
    pub fn launch_checking(mut self, c0: Configuration) -> Result<(u64, HashSet<Configuration>), RuntimeError> {
        let mut total_cycles = 0u64;

        self.checker.check_config(c0);
        while let Some(config) = self.checker.next_config() {
            let (cycles, successors) = self.coordinator.process_config(&config)?;
            total_cycles += cycles;
            for successor in successors {
                self.checker.check_config(successor);
            }
        }

        info!(known = self.checker.known_count(), cycles = total_cycles, "reached a fixpoint");
        Ok((total_cycles, self.checker.into_known()))
    }
}
