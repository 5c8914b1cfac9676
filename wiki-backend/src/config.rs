use std::env;
use std::path::PathBuf;

/// Environment variable names - single source of truth
pub mod env_vars {
    pub const PORT: &str = "PORT";
    pub const BIND_HOST: &str = "BIND_HOST";
    /// Directory holding one `<title>.md` file per entry.
    pub const ENTRIES_DIR: &str = "ENTRIES_DIR";
    pub const STATIC_DIR: &str = "STATIC_DIR";
}

/// Default values
pub mod defaults {
    pub const PORT: u16 = 8080;
    pub const BIND_HOST: &str = "0.0.0.0";
    pub const ENTRIES_DIR: &str = "entries";
    pub const STATIC_DIR: &str = "static";
}

/// Returns the absolute path to the wiki-backend directory.
/// Uses CARGO_MANIFEST_DIR at compile time, so it always resolves
/// to wiki-backend/ regardless of the working directory at runtime.
pub fn backend_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

/// Get the entries directory (ENTRIES_DIR overrides the bundled one)
pub fn entries_dir() -> PathBuf {
    env::var(env_vars::ENTRIES_DIR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| backend_dir().join(defaults::ENTRIES_DIR))
}

/// Get the stylesheet directory served under /static
pub fn static_dir() -> PathBuf {
    env::var(env_vars::STATIC_DIR)
        .ok()
        .filter(|s| !s.trim().is_empty())
        .map(PathBuf::from)
        .unwrap_or_else(|| backend_dir().join(defaults::STATIC_DIR))
}

#[derive(Clone, Debug)]
pub struct Config {
    pub port: u16,
    pub bind_host: String,
    pub entries_dir: PathBuf,
    pub static_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Self {
        let port = match env::var(env_vars::PORT) {
            Ok(raw) => raw.parse().unwrap_or_else(|_| {
                log::warn!("Invalid {} value '{}', using {}", env_vars::PORT, raw, defaults::PORT);
                defaults::PORT
            }),
            Err(_) => defaults::PORT,
        };

        Self {
            port,
            bind_host: env::var(env_vars::BIND_HOST)
                .unwrap_or_else(|_| defaults::BIND_HOST.to_string()),
            entries_dir: entries_dir(),
            static_dir: static_dir(),
        }
    }
}
