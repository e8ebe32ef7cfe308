//! Cooperative progress reporting and cancellation.
//!
//! Generation runs on one logical thread; the only suspension point is the
//! periodic [`ProgressSink::update`] call, made every [`YIELD_INTERVAL`]
//! elements when the sink signals an update is due. A sink aborts the build
//! by returning [`GenerationAborted`], which unwinds out of the generator
//! without a partial result.

use crate::error::GenerationAborted;

/// Elements processed between progress checkpoints.
pub const YIELD_INTERVAL: usize = 10_000;

/// A progress snapshot handed to the sink at each checkpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProgressInfo<'a> {
    /// Human-readable description of the running operation.
    pub message: &'a str,
    /// 0-based index of the element just processed.
    pub current: usize,
    /// Total element count of the traversal.
    pub max: usize,
}

/// Host-side progress/cancellation hook.
pub trait ProgressSink {
    /// Whether an update is due. Checked before [`ProgressSink::update`];
    /// when false the checkpoint is skipped entirely.
    fn should_yield(&self) -> bool;

    /// Report progress; return `Err` to abort the build.
    ///
    /// # Errors
    ///
    /// [`GenerationAborted`] when the host requests cancellation.
    fn update(
        &mut self,
        info: &ProgressInfo<'_>,
    ) -> Result<(), GenerationAborted>;
}

/// A sink that never yields; the default for hosts without a runtime.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl ProgressSink for NoProgress {
    fn should_yield(&self) -> bool {
        false
    }

    fn update(
        &mut self,
        _info: &ProgressInfo<'_>,
    ) -> Result<(), GenerationAborted> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_progress_never_yields() {
        let mut sink = NoProgress;
        assert!(!sink.should_yield());
        assert!(sink
            .update(&ProgressInfo {
                message: "noop",
                current: 0,
                max: 10,
            })
            .is_ok());
    }
}
