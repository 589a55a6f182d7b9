use tracing_subscriber::{fmt, EnvFilter};

/// Installs the global fmt subscriber. `RUST_LOG` takes precedence over `default_filter`;
/// an unparsable filter falls back to `info`.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .unwrap_or_else(|_| EnvFilter::new("info"));

    // Another subscriber may already be installed by the embedding application.
    let _ = fmt().with_env_filter(filter).try_init();
}

#[cfg(test)]
mod tests {
    use tracing_subscriber::EnvFilter;
    use tracker_config::Config;

    #[test]
    fn default_filter_covers_library_crates() {
        let directive = Config::default_log_filter();
        assert!(EnvFilter::try_new(&directive).is_ok());
        for target in ["budget_tracker=", "tracker_core=", "tracker_storage_json="] {
            assert!(directive.contains(target), "missing {target} in {directive}");
        }
    }
}
