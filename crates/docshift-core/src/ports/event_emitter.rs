//! Event emitter trait for per-entry progress notifications.
//!
//! Implementations handle presentation (console lines, JSON, nothing at all).

use crate::events::TransformEvent;

/// Trait for emitting transform events while a run is in progress.
///
/// # Implementations
///
/// - `NoopEmitter` - For tests and callers that only want the final report
/// - Adapter-specific implementations (the CLI console emitter)
pub trait TransformEventEmitter: Send + Sync {
    /// Emit a transform event.
    ///
    /// This method must not fail the run; implementations swallow their own
    /// output errors.
    fn emit(&self, event: TransformEvent);
}

/// A no-op event emitter.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopEmitter;

impl NoopEmitter {
    /// Create a new no-op emitter.
    pub const fn new() -> Self {
        Self
    }
}

impl TransformEventEmitter for NoopEmitter {
    fn emit(&self, _event: TransformEvent) {
        // Intentionally do nothing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use std::sync::Arc;

    #[test]
    fn test_noop_emitter() {
        let emitter = NoopEmitter::new();
        emitter.emit(TransformEvent::FileUpdated {
            path: PathBuf::from("notes.md"),
        });
    }

    #[test]
    fn test_arc_emitter() {
        let emitter: Arc<dyn TransformEventEmitter> = Arc::new(NoopEmitter::new());
        emitter.emit(TransformEvent::DirectoryCreated {
            path: PathBuf::from("out/sub"),
        });
    }
}
