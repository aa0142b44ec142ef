//! Optional JSON trace of the matcher passes, written to a file so it never
//! mixes with command output.

use std::path::Path;

use crate::api::MlphoneError;

/// File created under the trace directory.
#[cfg(feature = "trace")]
pub const TRACE_FILE: &str = "mlphone-trace.jsonl";

/// Filter used when `RUST_LOG` is unset.
#[cfg(feature = "trace")]
pub const DEFAULT_FILTER: &str = "mlphone=debug,ml_core=debug";

#[cfg(feature = "trace")]
static INIT: std::sync::Once = std::sync::Once::new();

/// Create `log_dir` if needed and install a JSON-lines subscriber writing to
/// [`TRACE_FILE`] inside it. Only the first call installs a subscriber.
#[cfg(feature = "trace")]
pub fn init_tracing(log_dir: &Path) -> Result<(), MlphoneError> {
    std::fs::create_dir_all(log_dir).map_err(|e| MlphoneError::Io {
        msg: format!("{}: {e}", log_dir.display()),
    })?;
    INIT.call_once(|| {
        let appender = tracing_appender::rolling::never(log_dir, TRACE_FILE);
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // Keep the worker alive so buffered events flush at exit.
        std::mem::forget(guard);

        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(DEFAULT_FILTER));
        // A subscriber installed by the embedding program takes precedence.
        let _ = tracing_subscriber::fmt()
            .json()
            .with_writer(writer)
            .with_target(true)
            .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
            .with_env_filter(filter)
            .try_init();
    });
    Ok(())
}

#[cfg(not(feature = "trace"))]
pub fn init_tracing(log_dir: &Path) -> Result<(), MlphoneError> {
    Err(MlphoneError::Unsupported {
        msg: format!(
            "cannot trace to {}: built without the `trace` feature",
            log_dir.display()
        ),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(not(feature = "trace"))]
    #[test]
    fn test_tracing_needs_feature() {
        let dir = tempfile::tempdir().unwrap();
        let err = init_tracing(dir.path()).unwrap_err();
        assert!(matches!(err, MlphoneError::Unsupported { .. }));
        assert!(err.to_string().contains("trace"));
    }

    #[cfg(feature = "trace")]
    #[test]
    fn test_tracing_creates_dir() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("logs").join("mlphone");
        init_tracing(&nested).unwrap();
        assert!(nested.is_dir());
        // Second call is a no-op install but still succeeds.
        init_tracing(&nested).unwrap();
    }
}
