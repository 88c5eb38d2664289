use tracing_subscriber::EnvFilter;

/// Viewer notices, rejected inputs and scroll-lock transitions are logged
/// under this target at debug/trace.
const CRATE_TARGET: &str = "tower_viewer";

fn default_directives(debug: bool) -> String {
    if debug {
        format!("warn,{CRATE_TARGET}=trace")
    } else {
        format!("warn,{CRATE_TARGET}=info")
    }
}

/// Set up the tower-viewer subscriber. `--debug` traces the viewer state
/// machine; otherwise `RUST_LOG` wins, falling back to collection-level info.
/// Settings and telemetry report through `log`, which is forwarded here.
/// Repeated calls keep the first subscriber.
pub fn init_tracing(debug: bool) {
    let _ = tracing_log::LogTracer::init();

    let filter = if debug {
        EnvFilter::new(default_directives(true))
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(false)))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(debug)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_debug_traces_crate_only() {
        assert_eq!(default_directives(true), "warn,tower_viewer=trace");
        assert_eq!(default_directives(false), "warn,tower_viewer=info");
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing(true);
        init_tracing(false);
        tracing::debug!(target: "tower_viewer", "viewer notice after re-init");
    }
}
