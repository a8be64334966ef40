use serde::Deserialize;
use std::path::PathBuf;

const DEFAULT_CONFIG_FILE: &str = include_str!("geotagdb.default.toml");

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Config {
    pub discovery: Option<Discovery>,
    pub import: Option<Import>,
}

impl Default for Config {
    fn default() -> Self {
        let cfg: Self = toml::from_str(DEFAULT_CONFIG_FILE).expect("Default configuration");
        cfg
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct Discovery {
    pub default_radius_km: f64,
    pub default_page_size: u64,
}

impl Default for Discovery {
    fn default() -> Self {
        Config::default()
            .discovery
            .expect("Discovery configuration")
    }
}

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct Import {
    pub file: Option<PathBuf>,
}
