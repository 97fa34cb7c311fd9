//
//  github-product
//  diagnostics.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! Debug logging seam for the product resolver.
//!
//! The resolver reports each decision it makes through a [`DebugLogger`].
//! Pass [`NoopLogger`] to silence it or [`TracingLogger`] to forward the
//! messages to `tracing` at debug level. Logging never affects the result.

/// A sink for debug-level diagnostic messages.
pub trait DebugLogger: Send + Sync {
    /// Records a debug message.
    fn debug(&self, message: &str);
}

/// Discards every message.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopLogger;

impl DebugLogger for NoopLogger {
    fn debug(&self, _message: &str) {}
}

/// Forwards messages to [`tracing::debug!`].
///
/// Enable with `GHP_DEBUG=debug` when running the `ghp` binary.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingLogger;

impl DebugLogger for TracingLogger {
    fn debug(&self, message: &str) {
        tracing::debug!(target: "github_product", "{}", message);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct Recorder(Mutex<Vec<String>>);

    impl DebugLogger for Recorder {
        fn debug(&self, message: &str) {
            self.0.lock().unwrap().push(message.to_string());
        }
    }

    #[test]
    fn test_loggers_are_object_safe() {
        let recorder = Recorder::default();
        let loggers: [&dyn DebugLogger; 3] = [&NoopLogger, &TracingLogger, &recorder];
        for logger in loggers {
            logger.debug("hello");
        }
        assert_eq!(*recorder.0.lock().unwrap(), vec!["hello".to_string()]);
    }
}
