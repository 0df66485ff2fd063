//! Runs a fixed bank of [`Core`]s against one shared starting [`Configuration`], merging
//! whatever successor configurations each core's program publishes.

use tracing::debug;

use crate::core::Core;
use crate::error::RuntimeError;
use crate::memory::Configuration;

/// Owns the bank of cores explored at each configuration the [`crate::checker::Checker`] visits.
pub struct Coordinator {
    cores: Vec<Core>,
}

impl Coordinator {
    /// Builds a coordinator with one core per program in `programs`, indexed in order.
    pub fn new(programs: Vec<Vec<u32>>) -> Self {
        let cores = programs.into_iter().enumerate().map(|(i, program)| Core::new(i, program)).collect();
        Self { cores }
    }

    pub fn core_count(&self) -> usize {
        self.cores.len()
    }

    /// Runs every core to completion from `config`, returning the worst-case (maximum) cycles
    /// charged across all cores (they start simultaneously on the same input, so wall-clock is
    /// bounded by the slowest one) and the deduplication-free union of every successor
    /// configuration published.
    pub fn process_config(&mut self, config: &Configuration) -> Result<(u64, Vec<Configuration>), RuntimeError> {
        let mut max_cycles = 0u64;
        let mut successors = Vec::new();

        for core in &mut self.cores {
            core.setup_cfg_memory(config);
            let published = core.process_instructions()?;
            max_cycles = max_cycles.max(core.executed_cycles());
            successors.extend(published);
        }

        debug!(cores = self.cores.len(), cycles = max_cycles, successors = successors.len(), "processed configuration");
        Ok((max_cycles, successors))
    }
}
