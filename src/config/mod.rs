use anyhow::{anyhow, Context as _, Result};
use gtdb_entities::geo::Distance;
use std::{
    env, fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

mod raw;

const DEFAULT_CONFIG_FILE_NAME: &str = "geotagdb.toml";

const ENV_NAME_DEFAULT_RADIUS_KM: &str = "GEOTAGDB_DEFAULT_RADIUS_KM";

pub struct Config {
    pub discovery: Discovery,
    pub import: Import,
}

impl Config {
    pub fn try_load_from_file_or_default<P: AsRef<Path>>(file_path: Option<P>) -> Result<Self> {
        let file_path: &Path = file_path.as_ref().map(|p| p.as_ref()).unwrap_or_else(|| {
            log::info!("No configuration file specified. load {DEFAULT_CONFIG_FILE_NAME}");
            Path::new(DEFAULT_CONFIG_FILE_NAME)
        });

        let raw_config = match fs::read_to_string(file_path) {
            Ok(cfg_string) => toml::from_str(&cfg_string)
                .with_context(|| format!("Invalid configuration file {}", file_path.display()))?,
            Err(err) => match err.kind() {
                ErrorKind::NotFound => {
                    log::info!(
                        "{} not found => load default configuration.",
                        file_path.display()
                    );
                    Ok(raw::Config::default())
                }
                _ => Err(err),
            }?,
        };
        let mut cfg = Self::try_from(raw_config)?;
        if let Ok(radius) = env::var(ENV_NAME_DEFAULT_RADIUS_KM) {
            let radius_km = radius
                .parse::<f64>()
                .with_context(|| format!("Invalid {ENV_NAME_DEFAULT_RADIUS_KM}"))?;
            cfg.discovery.default_radius = try_radius_from_km(radius_km)?;
        }
        Ok(cfg)
    }
}

#[derive(Debug, Clone, Copy)]
pub struct Discovery {
    pub default_radius: Distance,
    pub default_page_size: u64,
}

#[derive(Debug, Clone, Default)]
pub struct Import {
    /// JSON file with geo tags that are loaded on start-up.
    pub file: Option<PathBuf>,
}

fn try_radius_from_km(radius_km: f64) -> Result<Distance> {
    if !radius_km.is_finite() || radius_km < 0.0 {
        return Err(anyhow!("Invalid default radius: {radius_km}"));
    }
    Ok(Distance::from_km(radius_km))
}

impl TryFrom<raw::Config> for Config {
    type Error = anyhow::Error;
    fn try_from(from: raw::Config) -> Result<Self> {
        let raw::Config { discovery, import } = from;

        let raw::Discovery {
            default_radius_km,
            default_page_size,
        } = discovery.unwrap_or_default();
        if default_page_size == 0 {
            return Err(anyhow!("The default page size must be positive"));
        }
        let discovery = Discovery {
            default_radius: try_radius_from_km(default_radius_km)?,
            default_page_size,
        };

        let raw::Import { file } = import.unwrap_or_default();
        let import = Import { file };

        Ok(Self { discovery, import })
    }
}
