use pyprov::prelude::*;
use std::cell::Cell;
use std::rc::Rc;

/// Mock DistributionMetadataSource for testing
///
/// Counts how many times `distributions()` is consulted so tests can
/// assert graph-build memoization.
pub struct MockMetadataSource {
    pub distributions: Vec<DistributionMetadata>,
    pub should_fail: bool,
    calls: Rc<Cell<usize>>,
}

impl MockMetadataSource {
    pub fn new(distributions: Vec<DistributionMetadata>) -> Self {
        Self {
            distributions,
            should_fail: false,
            calls: Rc::new(Cell::new(0)),
        }
    }

    pub fn with_failure() -> Self {
        Self {
            distributions: Vec::new(),
            should_fail: true,
            calls: Rc::new(Cell::new(0)),
        }
    }

    /// Handle onto the call counter, usable after the source is moved
    /// into a graph builder.
    pub fn call_counter(&self) -> Rc<Cell<usize>> {
        Rc::clone(&self.calls)
    }
}

impl DistributionMetadataSource for MockMetadataSource {
    fn distributions(&self) -> Result<Vec<DistributionMetadata>> {
        self.calls.set(self.calls.get() + 1);
        if self.should_fail {
            anyhow::bail!("Mock metadata store failure");
        }
        Ok(self.distributions.clone())
    }
}
