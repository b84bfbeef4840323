use std::collections::BTreeMap;
use std::str::FromStr;

use super::error::StatusbarError;

pub type Options = BTreeMap<String, String>;

/// A command-line applet request such as `volume` or `volume:icon=V,card=1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppletDescriptor {
    pub name: String,
    pub options: Options,
}

impl FromStr for AppletDescriptor {
    type Err = StatusbarError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || StatusbarError::InvalidDescriptor(s.to_string());

        let (name, rest) = match s.split_once(':') {
            Some((name, rest)) => (name, Some(rest)),
            None => (s, None),
        };

        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphabetic()) {
            return Err(invalid());
        }

        let mut options = Options::new();
        for pair in rest.into_iter().flat_map(|r| r.split(',')).filter(|p| !p.is_empty()) {
            let (key, value) = pair.split_once('=').ok_or_else(invalid)?;
            let key_ok = !key.is_empty() && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_');
            if !key_ok || value.is_empty() {
                return Err(invalid());
            }
            options.insert(key.to_string(), value.to_string());
        }

        Ok(Self { name: name.to_string(), options })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_name_only() {
        let desc: AppletDescriptor = "volume".parse().unwrap();
        assert_eq!(desc.name, "volume");
        assert!(desc.options.is_empty());
    }

    #[test]
    fn test_parse_options() {
        let desc: AppletDescriptor = "volume:icon=♪,card=1".parse().unwrap();
        assert_eq!(desc.name, "volume");
        assert_eq!(desc.options.get("icon").map(String::as_str), Some("♪"));
        assert_eq!(desc.options.get("card").map(String::as_str), Some("1"));
    }

    #[test]
    fn test_parse_value_may_contain_colons_and_equals() {
        let desc: AppletDescriptor = "date:format=%H:%M".parse().unwrap();
        assert_eq!(desc.options.get("format").map(String::as_str), Some("%H:%M"));

        let desc: AppletDescriptor = "date:icon=a=b".parse().unwrap();
        assert_eq!(desc.options.get("icon").map(String::as_str), Some("a=b"));
    }

    #[test]
    fn test_parse_trailing_separators() {
        let desc: AppletDescriptor = "date:".parse().unwrap();
        assert!(desc.options.is_empty());

        let desc: AppletDescriptor = "date:icon=x,".parse().unwrap();
        assert_eq!(desc.options.len(), 1);
    }

    #[test]
    fn test_parse_later_option_wins() {
        let desc: AppletDescriptor = "volume:card=1,card=2".parse().unwrap();
        assert_eq!(desc.options.get("card").map(String::as_str), Some("2"));
    }

    #[test]
    fn test_parse_invalid() {
        for input in ["", ":icon=x", "vol1me", "volume:icon", "volume:=x", "volume:icon=", "volume:ic-on=x"] {
            let result = input.parse::<AppletDescriptor>();
            assert!(
                matches!(result, Err(StatusbarError::InvalidDescriptor(_))),
                "{:?} should be rejected",
                input
            );
        }
    }
}
