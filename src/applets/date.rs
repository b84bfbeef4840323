use std::time::Duration;

use async_trait::async_trait;
use jiff::Zoned;

use crate::config::DateConfig;
use crate::statusbar::{with_icon, Applet, Message, Options, StatusbarError};

#[derive(Debug)]
pub struct DateApplet {
    icon: String,
    format: String,
}

impl DateApplet {
    pub fn new(config: &DateConfig) -> Self {
        Self {
            icon: config.icon.clone(),
            format: config.format.clone(),
        }
    }

    pub fn with_options(config: &DateConfig, options: &Options) -> Result<Self, StatusbarError> {
        let mut config = config.clone();
        for (key, value) in options {
            match key.as_str() {
                "icon" => config.icon = value.clone(),
                "format" => config.format = value.clone(),
                _ => {
                    return Err(StatusbarError::UnknownOption {
                        applet: "date".to_string(),
                        key: key.clone(),
                    })
                }
            }
        }
        Ok(Self::new(&config))
    }

    fn render(&self, now: &Zoned) -> Result<Message, jiff::Error> {
        let text = jiff::fmt::strtime::format(&self.format, now)?;
        Ok(Message::new(with_icon(&self.icon, &text)))
    }
}

/// Time left until the wall clock reaches the next whole minute.
fn until_next_minute(now: &Zoned) -> Duration {
    let into_minute = Duration::new(now.second() as u64, now.subsec_nanosecond() as u32);
    Duration::from_secs(60).saturating_sub(into_minute)
}

#[async_trait]
impl Applet for DateApplet {
    fn name(&self) -> &'static str {
        "date"
    }

    async fn init(&mut self) -> Result<(), StatusbarError> {
        self.render(&Zoned::now()).map(|_| ()).map_err(|e| StatusbarError::Init {
            applet: "date".to_string(),
            reason: format!("bad format '{}': {}", self.format, e),
        })
    }

    async fn run(&mut self) -> Option<Message> {
        match self.render(&Zoned::now()) {
            Ok(message) => Some(message),
            Err(e) => {
                tracing::warn!("Failed to format date: {}", e);
                None
            }
        }
    }

    async fn wait(&mut self) {
        tokio::time::sleep(until_next_minute(&Zoned::now())).await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use jiff::civil::date;
    use jiff::tz::TimeZone;

    fn at(hour: i8, minute: i8, second: i8, nanos: i32) -> Zoned {
        date(2024, 3, 5).at(hour, minute, second, nanos).to_zoned(TimeZone::UTC).unwrap()
    }

    #[test]
    fn test_render_default_format() {
        let applet = DateApplet::new(&DateConfig::default());
        let message = applet.render(&at(14, 7, 0, 0)).unwrap();

        assert_eq!(message.full_text, "Tue 5 Mar, 14:07");
    }

    #[test]
    fn test_render_two_digit_day_unchanged() {
        let applet = DateApplet::new(&DateConfig::default());
        let when = date(2024, 3, 15).at(8, 0, 0, 0).to_zoned(TimeZone::UTC).unwrap();

        assert_eq!(applet.render(&when).unwrap().full_text, "Fri 15 Mar, 08:00");
    }

    #[test]
    fn test_render_with_icon() {
        let config = DateConfig { icon: "D".to_string(), format: "%H:%M".to_string() };
        let message = DateApplet::new(&config).render(&at(9, 30, 0, 0)).unwrap();

        assert_eq!(message.full_text, "D 09:30");
    }

    #[test]
    fn test_until_next_minute() {
        assert_eq!(until_next_minute(&at(10, 0, 0, 0)), Duration::from_secs(60));
        assert_eq!(until_next_minute(&at(10, 0, 45, 0)), Duration::from_secs(15));
        assert_eq!(until_next_minute(&at(10, 0, 59, 500_000_000)), Duration::from_millis(500));
    }

    #[test]
    fn test_with_options() {
        let options: Options = [("format".to_string(), "%H".to_string())].into_iter().collect();
        let applet = DateApplet::with_options(&DateConfig::default(), &options).unwrap();
        assert_eq!(applet.format, "%H");

        let options: Options = [("size".to_string(), "2".to_string())].into_iter().collect();
        let result = DateApplet::with_options(&DateConfig::default(), &options);
        assert!(matches!(result, Err(StatusbarError::UnknownOption { .. })));
    }

    #[tokio::test]
    async fn test_init_accepts_default_format() {
        let mut applet = DateApplet::new(&DateConfig::default());
        assert!(applet.init().await.is_ok());
        assert!(applet.run().await.is_some());
    }
}
