use anyhow::{anyhow, Result};
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "activitydb.toml";

const ENV_NAME_DB_URL: &str = "DATABASE_URL";

#[derive(Debug)]
pub struct Config {
    pub db: Db,
    pub webserver: WebServer,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let mut cfg = Self::try_load_from_file_or_default_without_env(file_path)?;
        if let Ok(db_url) = env::var(ENV_NAME_DB_URL) {
            cfg.db.conn_sqlite = db_url;
        }
        Ok(cfg)
    }

    fn try_load_from_file_or_default_without_env<P: AsRef<Path>>(
        file_path: Option<P>,
    ) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(AsRef::as_ref).unwrap_or_else(|| {
            log::info!("No configuration file specified, load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });
        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)?,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                log::info!(
                    "{} not found => load default configuration",
                    file_path.display()
                );
                raw::Config::default()
            }
            Err(err) => return Err(err.into()),
        };
        Self::try_from(raw_config)
    }
}

#[derive(Debug)]
pub struct Db {
    /// SQLite connection
    pub conn_sqlite: String,
    pub conn_pool_size: u32,
}

#[derive(Debug)]
pub struct WebServer {
    pub enable_cors: bool,
    /// Directory with the compiled frontend
    pub frontend_dir: Option<PathBuf>,
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { db, webserver } = from;

        let raw::Db {
            connection_sqlite,
            connection_pool_size,
        } = db.unwrap_or_default();

        if connection_pool_size == 0 {
            return Err(anyhow!("The connection pool size must not be 0"));
        }
        let db = Db {
            conn_sqlite: connection_sqlite,
            conn_pool_size: connection_pool_size,
        };

        let raw::WebServer { cors, frontend_dir } = webserver.unwrap_or_default();
        let webserver = WebServer {
            enable_cors: cors,
            frontend_dir,
        };

        Ok(Self { db, webserver })
    }
}
