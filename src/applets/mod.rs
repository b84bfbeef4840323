pub mod cpu;
pub mod date;
pub mod memory;
pub mod volume;

pub use cpu::CpuApplet;
pub use date::DateApplet;
pub use memory::MemoryApplet;
pub use volume::VolumeApplet;

use crate::config::Config;
use crate::statusbar::{Applet, AppletRegistry, Options, StatusbarError};

/// Registry of the applets this crate ships.
///
/// The volume applet is only available when the crate is built with ALSA
/// support.
pub fn builtin_registry() -> AppletRegistry {
    let mut registry = AppletRegistry::new();

    registry.register("date", |config: &Config, options: &Options| -> Result<Box<dyn Applet>, StatusbarError> {
        Ok(Box::new(DateApplet::with_options(&config.date, options)?))
    });

    registry.register("memory", |config: &Config, options: &Options| -> Result<Box<dyn Applet>, StatusbarError> {
        Ok(Box::new(MemoryApplet::with_options(&config.memory, options)?))
    });

    registry.register("cpu", |config: &Config, options: &Options| -> Result<Box<dyn Applet>, StatusbarError> {
        Ok(Box::new(CpuApplet::with_options(&config.cpu, options)?))
    });

    #[cfg(feature = "alsa")]
    registry.register("volume", |config: &Config, options: &Options| -> Result<Box<dyn Applet>, StatusbarError> {
        let backend = crate::sound::AlsaBackend;
        Ok(Box::new(VolumeApplet::with_options(backend, &config.volume, options)?))
    });

    registry
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::statusbar::AppletDescriptor;

    #[test]
    fn test_builtin_registry_has_date() {
        let registry = builtin_registry();
        assert!(registry.contains("date"));
    }

    #[cfg(feature = "alsa")]
    #[test]
    fn test_builtin_registry_has_volume() {
        let registry = builtin_registry();
        assert_eq!(registry.names(), vec!["cpu", "date", "memory", "volume"]);
    }

    #[test]
    fn test_builtin_registry_builds_system_applets() {
        let registry = builtin_registry();
        for text in ["memory:interval=10", "cpu:scale=F,icon_cpu=C"] {
            let desc: AppletDescriptor = text.parse().unwrap();
            let applet = registry.build(&desc, &Config::default()).unwrap();
            assert_eq!(applet.name(), desc.name);
        }
    }

    #[test]
    fn test_builtin_registry_rejects_unknown_option() {
        let registry = builtin_registry();
        let desc: AppletDescriptor = "date:colour=red".parse().unwrap();

        let result = registry.build(&desc, &Config::default());
        assert!(matches!(result, Err(StatusbarError::UnknownOption { .. })));
    }

    #[test]
    fn test_builtin_registry_builds_date() {
        let registry = builtin_registry();
        let desc: AppletDescriptor = "date:icon=D".parse().unwrap();

        let applet = registry.build(&desc, &Config::default()).unwrap();
        assert_eq!(applet.name(), "date");
    }
}
