use crate::logging::DEFAULT_FILTER;

/// Process-wide configuration for Tessera applications.
#[derive(Debug, Clone)]
pub struct Config {
    pub profiling: ProfilingMode,
    /// Fallback `tracing` filter directive (used when `RUST_LOG` is unset).
    pub log_filter: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            profiling: ProfilingMode::Off,
            log_filter: DEFAULT_FILTER.to_string(),
        }
    }
}

impl Config {
    pub fn with_profiling(mut self, profiling: ProfilingMode) -> Self {
        self.profiling = profiling;
        self
    }

    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = filter.into();
        self
    }

    /// Install logging and, if requested, profiling according to this config.
    pub fn apply(&self) {
        crate::logging::init_with_filter(&self.log_filter);

        match self.profiling {
            ProfilingMode::Off => {}
            #[cfg(feature = "profiling")]
            ProfilingMode::On => puffin::set_scopes_on(true),
            #[cfg(feature = "profiling")]
            ProfilingMode::WithWebserver => {
                crate::profiling::init_profiling(crate::profiling::ProfilingBackend::PuffinHttp)
            }
            #[cfg(not(feature = "profiling"))]
            _ => tracing::warn!("Profiling requested but the `profiling` feature is disabled"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProfilingMode {
    /// Profiling scopes are compiled in but not recorded
    Off,
    /// Scopes are recorded in-process
    On,
    /// Scopes are recorded and served to external tools such as 'puffin_viewer'
    WithWebserver,
}
