use std::{env, path::PathBuf, str::FromStr, time::Duration};

use minext_infrastructure::MiniZincRunner;
use minext_infrastructure::minizinc::{DEFAULT_PROGRAM, DEFAULT_SOLVER, DEFAULT_TIMEOUT};
use tracing_subscriber::EnvFilter;

pub const DEFAULT_MODEL_PATH: &str = "Proyecto.mzn";
pub const DEFAULT_OUTPUT_DIR: &str = ".";
const DEFAULT_LOG_FILTER: &str = "warn";

/// Settings for the external solver and generated files.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub minizinc_bin: String,
    pub minizinc_solver: String,
    pub model_path: PathBuf,
    pub timeout: Duration,
    pub output_dir: PathBuf,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            minizinc_bin: DEFAULT_PROGRAM.to_string(),
            minizinc_solver: DEFAULT_SOLVER.to_string(),
            model_path: PathBuf::from(DEFAULT_MODEL_PATH),
            timeout: DEFAULT_TIMEOUT,
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
        }
    }
}

impl AppConfig {
    /// Reads `MINEXT_*` variables; call [`load_env_file`] first.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let timeout = parse_or_default(&lookup, "MINEXT_TIMEOUT_SECS", defaults.timeout.as_secs());

        Self {
            minizinc_bin: lookup("MINEXT_MINIZINC_BIN").unwrap_or(defaults.minizinc_bin),
            minizinc_solver: lookup("MINEXT_MINIZINC_SOLVER").unwrap_or(defaults.minizinc_solver),
            model_path: lookup("MINEXT_MODEL_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.model_path),
            timeout: Duration::from_secs(timeout),
            output_dir: lookup("MINEXT_OUTPUT_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.output_dir),
        }
    }

    pub fn minizinc_runner(&self) -> MiniZincRunner {
        MiniZincRunner::new(&self.minizinc_bin, &self.minizinc_solver, self.timeout)
    }
}

fn parse_or_default<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    let Some(raw) = lookup(key) else {
        return default;
    };
    match raw.trim().parse() {
        Ok(value) => value,
        Err(_) => {
            tracing::warn!(key, value = %raw, "ignoring invalid setting");
            default
        }
    }
}

/// Loads `.env` into the process environment. Must run before
/// [`init_logging`] so a `RUST_LOG` set there takes effect.
pub fn load_env_file() {
    let _ = dotenvy::dotenv();
}

fn log_directive(lookup: impl Fn(&str) -> Option<String>) -> String {
    lookup(EnvFilter::DEFAULT_ENV)
        .filter(|directive| !directive.trim().is_empty())
        .unwrap_or_else(|| DEFAULT_LOG_FILTER.to_string())
}

/// Logs go to stderr so reports on stdout stay clean. `RUST_LOG` overrides
/// the default filter.
pub fn init_logging() {
    let directive = log_directive(|key| env::var(key).ok());
    let filter = EnvFilter::try_new(&directive).unwrap_or_else(|err| {
        eprintln!("Ignoring invalid log filter '{directive}': {err}");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    });
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}
