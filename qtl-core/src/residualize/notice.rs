//! Side-channel notices raised while building a covariate basis.
//!
//! Notices are informational only: a sink can log, collect, or ignore
//! them, but it never influences the result of the operation.

use std::sync::Mutex;

use tracing::info;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Colinear covariate columns were removed from the basis.
    ColinearCovariatesDropped { dropped: usize, retained: usize },
}

/// Receiver for notices emitted during basis construction.
pub trait NoticeSink {
    fn emit(&self, notice: &Notice);
}

/// Forwards notices to `tracing` at info level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl NoticeSink for TracingSink {
    fn emit(&self, notice: &Notice) {
        match notice {
            Notice::ColinearCovariatesDropped { dropped, retained } => {
                info!(dropped, retained, "dropped colinear covariates: {}", dropped);
            }
        }
    }
}

/// Discards every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentSink;

impl NoticeSink for SilentSink {
    fn emit(&self, _notice: &Notice) {}
}

/// Keeps every notice in memory.
#[derive(Debug, Default)]
pub struct CollectingSink {
    notices: Mutex<Vec<Notice>>,
}

impl CollectingSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Notices received so far, oldest first.
    pub fn notices(&self) -> Vec<Notice> {
        match self.notices.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }
}

impl NoticeSink for CollectingSink {
    fn emit(&self, notice: &Notice) {
        let mut guard = match self.notices.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        guard.push(notice.clone());
    }
}
