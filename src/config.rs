use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Data file used when neither the build nor the environment names one.
pub const DEFAULT_DATA_FILE: &str = match option_env!("CLOUD_SIM_DATA_FILE") {
    Some(path) => path,
    None => "cloud_server_data.json",
};

#[derive(Debug, Clone)]
pub struct Config {
    pub data_file: PathBuf,

    // Simulation
    pub crash_probability: f64,

    // Aggregation
    pub overload_threshold: f64,

    // Presentation
    pub message_pause_ms: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            data_file: PathBuf::from(DEFAULT_DATA_FILE),
            crash_probability: 0.01,
            overload_threshold: 80.0,
            message_pause_ms: 1000,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds a config from any key lookup; unparsable values fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        Self {
            data_file: lookup("DATA_FILE")
                .filter(|v| !v.trim().is_empty())
                .map(PathBuf::from)
                .unwrap_or(defaults.data_file),

            crash_probability: lookup("CRASH_PROBABILITY")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|p| p.is_finite())
                .map(|p| p.clamp(0.0, 1.0))
                .unwrap_or(defaults.crash_probability),

            overload_threshold: lookup("OVERLOAD_THRESHOLD")
                .and_then(|v| v.parse::<f64>().ok())
                .filter(|t| t.is_finite())
                .unwrap_or(defaults.overload_threshold),

            message_pause_ms: lookup("MESSAGE_PAUSE_MS")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.message_pause_ms),
        }
    }

    pub fn message_pause(&self) -> Duration {
        Duration::from_millis(self.message_pause_ms)
    }

    /// The unknown-command notice only lingers for half the usual pause.
    pub fn short_pause(&self) -> Duration {
        Duration::from_millis(self.message_pause_ms / 2)
    }
}
