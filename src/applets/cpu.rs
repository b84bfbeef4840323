use std::path::PathBuf;
use std::time::Duration;

use async_trait::async_trait;

use crate::config::{CpuConfig, TemperatureScale};
use crate::statusbar::{with_icon, Applet, Message, Options, StatusbarError};

const STAT_PATH: &str = "/proc/stat";
const THERMAL_PATH: &str = "/sys/class/thermal/thermal_zone0/temp";

/// Aggregate CPU time counters from the `cpu` line of `/proc/stat`, in jiffies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CpuTimes {
    pub idle: u64,
    pub total: u64,
}

impl CpuTimes {
    /// Reads the aggregate `cpu` line. Idle time is `idle + iowait`; the
    /// total adds `user nice system irq softirq steal`.
    pub fn parse(text: &str) -> Option<Self> {
        let line = text.lines().find(|line| line.split_whitespace().next() == Some("cpu"))?;
        let fields: Vec<u64> = line
            .split_whitespace()
            .skip(1)
            .map(str::parse)
            .collect::<Result<_, _>>()
            .ok()?;

        if fields.len() < 8 {
            return None;
        }

        let idle = fields[3] + fields[4];
        let active = fields[0] + fields[1] + fields[2] + fields[5] + fields[6] + fields[7];
        Some(Self { idle, total: idle + active })
    }

    /// Busy share between two samples. No elapsed time reads as idle.
    pub fn usage_since(&self, prev: &CpuTimes) -> u8 {
        let total = self.total.saturating_sub(prev.total);
        if total == 0 {
            return 0;
        }
        let idle = self.idle.saturating_sub(prev.idle).min(total);
        ((total - idle) as u128 * 100 / total as u128) as u8
    }
}

/// Whole degrees Celsius from a sysfs millidegree reading.
pub fn parse_temperature(text: &str) -> Option<i64> {
    text.trim().parse::<i64>().ok().map(|milli| milli / 1000)
}

pub fn convert_temperature(celsius: i64, scale: TemperatureScale) -> i64 {
    match scale {
        TemperatureScale::C => celsius,
        TemperatureScale::F => celsius * 9 / 5 + 32,
    }
}

#[derive(Debug)]
pub struct CpuApplet {
    icon_cpu: String,
    icon_temp: String,
    scale: TemperatureScale,
    interval: Duration,
    stat_path: PathBuf,
    thermal_path: PathBuf,
    prev: CpuTimes,
}

impl CpuApplet {
    pub fn new(config: &CpuConfig) -> Self {
        Self {
            icon_cpu: config.icon_cpu.clone(),
            icon_temp: config.icon_temp.clone(),
            scale: config.scale,
            interval: Duration::from_secs(config.interval_secs),
            stat_path: PathBuf::from(STAT_PATH),
            thermal_path: PathBuf::from(THERMAL_PATH),
            prev: CpuTimes::default(),
        }
    }

    pub fn with_options(config: &CpuConfig, options: &Options) -> Result<Self, StatusbarError> {
        let invalid = |key: &String, value: &String| StatusbarError::InvalidOption {
            applet: "cpu".to_string(),
            key: key.clone(),
            value: value.clone(),
        };

        let mut config = config.clone();
        for (key, value) in options {
            match key.as_str() {
                "icon_cpu" => config.icon_cpu = value.clone(),
                "icon_temp" => config.icon_temp = value.clone(),
                "scale" => config.scale = value.parse().map_err(|_| invalid(key, value))?,
                "interval" => config.interval_secs = value.parse().map_err(|_| invalid(key, value))?,
                _ => {
                    return Err(StatusbarError::UnknownOption {
                        applet: "cpu".to_string(),
                        key: key.clone(),
                    })
                }
            }
        }
        Ok(Self::new(&config))
    }

    fn render(&self, usage: u8, celsius: Option<i64>) -> Message {
        let mut text = with_icon(&self.icon_cpu, &format!("{}%", usage));
        if let Some(celsius) = celsius {
            let degrees = convert_temperature(celsius, self.scale);
            text.push(' ');
            text.push_str(&with_icon(&self.icon_temp, &format!("{}°{}", degrees, self.scale)));
        }
        Message::new(text)
    }

    async fn read_times(&self) -> Result<CpuTimes, String> {
        let text = tokio::fs::read_to_string(&self.stat_path)
            .await
            .map_err(|e| format!("cannot read {}: {}", self.stat_path.display(), e))?;
        CpuTimes::parse(&text).ok_or_else(|| format!("no cpu line in {}", self.stat_path.display()))
    }

    async fn read_temperature(&self) -> Option<i64> {
        match tokio::fs::read_to_string(&self.thermal_path).await {
            Ok(text) => parse_temperature(&text),
            Err(e) => {
                tracing::debug!("No temperature from {}: {}", self.thermal_path.display(), e);
                None
            }
        }
    }
}

#[async_trait]
impl Applet for CpuApplet {
    fn name(&self) -> &'static str {
        "cpu"
    }

    async fn init(&mut self) -> Result<(), StatusbarError> {
        self.prev = self.read_times().await.map_err(|reason| StatusbarError::Init {
            applet: "cpu".to_string(),
            reason,
        })?;
        Ok(())
    }

    async fn run(&mut self) -> Option<Message> {
        let now = match self.read_times().await {
            Ok(now) => now,
            Err(e) => {
                tracing::warn!("Failed to sample CPU usage: {}", e);
                return None;
            }
        };
        let usage = now.usage_since(&self.prev);
        self.prev = now;

        let celsius = self.read_temperature().await;
        Some(self.render(usage, celsius))
    }

    async fn wait(&mut self) {
        tokio::time::sleep(self.interval).await;
    }
}
