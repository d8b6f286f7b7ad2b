use config::{Config, ConfigError, Environment, File};
use once_cell::sync::OnceCell;
use std::env;
use std::path::{Path, PathBuf};
use tracing::debug;

pub mod models;
pub use models::*;

/// Directory searched for `default.*` and `{RUN_ENV}.*` when `CONFIG_DIR` is unset.
pub const DEFAULT_CONFIG_DIR: &str = "config";
/// Prefix for environment overrides, e.g. `LITTLELEMON__SERVER__PORT=9000`.
pub const DEFAULT_PREFIX: &str = "LITTLELEMON";

/// Loads the application configuration from files and the environment.
///
/// Sources, later ones winning:
/// 1. `$CONFIG_DIR/default.{toml,yaml,json}`
/// 2. `$CONFIG_DIR/$RUN_ENV.{toml,yaml,json}` (`RUN_ENV` defaults to `debug`)
/// 3. `$PREFIX__SECTION__KEY` environment variables (`PREFIX` defaults to `LITTLELEMON`)
pub fn load_config() -> Result<AppConfig, ConfigError> {
    ensure_dotenv_loaded();

    let config_dir = env::var("CONFIG_DIR").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let run_env = env::var("RUN_ENV").unwrap_or_else(|_| "debug".to_string());
    let prefix = env::var("PREFIX").unwrap_or_else(|_| DEFAULT_PREFIX.to_string());

    load_config_from(Path::new(&config_dir), &run_env, &prefix)
}

/// Same as [`load_config`] with every location given explicitly.
pub fn load_config_from(
    config_dir: &Path,
    run_env: &str,
    prefix: &str,
) -> Result<AppConfig, ConfigError> {
    let default_path: PathBuf = config_dir.join("default");
    let env_path: PathBuf = config_dir.join(run_env);

    debug!(
        "Loading config from {} and {} (env prefix {})",
        default_path.display(),
        env_path.display(),
        prefix
    );

    let builder = Config::builder()
        .add_source(File::with_name(&default_path.to_string_lossy()).required(false))
        .add_source(File::with_name(&env_path.to_string_lossy()).required(false))
        .add_source(
            Environment::with_prefix(prefix)
                .separator("__")
                .try_parsing(true),
        );

    builder.build()?.try_deserialize()
}

static INIT_DOTENV: OnceCell<()> = OnceCell::new();

/// Loads the dotenv file into the process environment, at most once.
///
/// The file is `DOTENV_OVERRIDE` when set, otherwise the first CLI argument if
/// it starts with `.env`, otherwise `.env`. A missing file is not an error.
/// Returns the path that was used.
pub fn ensure_dotenv_loaded() -> String {
    let dotenv_path_override = env::var("DOTENV_OVERRIDE").ok();
    let dotenv_path_arg = env::args().nth(1).filter(|s| s.starts_with(".env"));

    let dotenv_path = dotenv_path_override
        .or(dotenv_path_arg)
        .unwrap_or_else(|| ".env".to_string());

    INIT_DOTENV.get_or_init(|| {
        dotenv::from_filename(&dotenv_path).ok();
    });

    dotenv_path
}
