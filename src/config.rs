use directories::ProjectDirs;
use figment::{
    providers::{Env, Format, Toml},
    Figment,
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub volume: VolumeConfig,
    #[serde(default)]
    pub date: DateConfig,
    #[serde(default)]
    pub memory: MemoryConfig,
    #[serde(default)]
    pub cpu: CpuConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct VolumeConfig {
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_card")]
    pub card: i32,
    #[serde(default = "default_retry_interval")]
    pub retry_interval_ms: u64,
}

impl Default for VolumeConfig {
    fn default() -> Self {
        Self {
            icon: String::new(),
            card: default_card(),
            retry_interval_ms: default_retry_interval(),
        }
    }
}

fn default_card() -> i32 {
    -1
}

fn default_retry_interval() -> u64 {
    5000
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct DateConfig {
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_date_format")]
    pub format: String,
}

impl Default for DateConfig {
    fn default() -> Self {
        Self {
            icon: String::new(),
            format: default_date_format(),
        }
    }
}

fn default_date_format() -> String {
    "%a %-d %b, %H:%M".to_string()
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct MemoryConfig {
    #[serde(default)]
    pub icon: String,
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            icon: String::new(),
            interval_secs: default_interval(),
        }
    }
}

fn default_interval() -> u64 {
    5
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
pub enum TemperatureScale {
    #[default]
    C,
    F,
}

impl std::str::FromStr for TemperatureScale {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "C" | "c" => Ok(TemperatureScale::C),
            "F" | "f" => Ok(TemperatureScale::F),
            other => Err(format!("unknown temperature scale '{}'", other)),
        }
    }
}

impl std::fmt::Display for TemperatureScale {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TemperatureScale::C => f.write_str("C"),
            TemperatureScale::F => f.write_str("F"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct CpuConfig {
    #[serde(default)]
    pub icon_cpu: String,
    #[serde(default)]
    pub icon_temp: String,
    #[serde(default)]
    pub scale: TemperatureScale,
    #[serde(default = "default_interval")]
    pub interval_secs: u64,
}

impl Default for CpuConfig {
    fn default() -> Self {
        Self {
            icon_cpu: String::new(),
            icon_temp: String::new(),
            scale: TemperatureScale::default(),
            interval_secs: default_interval(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self, figment::Error> {
        let figment = match Self::default_path() {
            Some(path) => Figment::new().merge(Toml::file(path)),
            None => Figment::new(),
        };

        figment.merge(Self::env()).extract()
    }

    pub fn load_from_path(path: PathBuf) -> Result<Self, figment::Error> {
        Figment::new()
            .merge(Toml::file(path))
            .merge(Self::env())
            .extract()
    }

    pub fn default_path() -> Option<PathBuf> {
        ProjectDirs::from("com", "mixwatch", "mixwatch").map(|dirs| dirs.config_dir().join("config.toml"))
    }

    fn env() -> Env {
        Env::prefixed("MIXWATCH_").split("__")
    }
}

/// Expands a leading `~` in a user supplied path.
pub fn expand_path(path: &str) -> PathBuf {
    PathBuf::from(shellexpand::tilde(path).into_owned())
}
