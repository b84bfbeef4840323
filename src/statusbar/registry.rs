use std::collections::HashMap;

use super::applet::Applet;
use super::descriptor::{AppletDescriptor, Options};
use super::error::StatusbarError as Error;
use crate::config::Config;

pub type AppletFactory = Box<dyn Fn(&Config, &Options) -> Result<Box<dyn Applet>, Error> + Send + Sync>;

pub struct AppletRegistry {
    factories: HashMap<String, AppletFactory>,
}

impl AppletRegistry {
    pub fn new() -> Self {
        Self { factories: HashMap::new() }
    }

    pub fn register<F>(&mut self, name: &str, factory: F)
    where
        F: Fn(&Config, &Options) -> Result<Box<dyn Applet>, Error> + Send + Sync + 'static,
    {
        if self.factories.contains_key(name) {
            tracing::warn!("Applet '{}' already registered, replacing", name);
        }
        self.factories.insert(name.to_string(), Box::new(factory));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.factories.contains_key(name)
    }

    pub fn build(&self, descriptor: &AppletDescriptor, config: &Config) -> Result<Box<dyn Applet>, Error> {
        match self.factories.get(&descriptor.name) {
            Some(factory) => factory(config, &descriptor.options),
            None => Err(Error::UnknownApplet(descriptor.name.clone())),
        }
    }

    /// Builds every requested applet, failing on the first unknown name or bad option.
    pub fn build_all(&self, descriptors: &[AppletDescriptor], config: &Config) -> Result<Vec<Box<dyn Applet>>, Error> {
        if let Some(unknown) = descriptors.iter().find(|d| !self.contains(&d.name)) {
            return Err(Error::UnknownApplet(unknown.name.clone()));
        }
        descriptors.iter().map(|d| self.build(d, config)).collect()
    }

    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.factories.keys().map(|s| s.as_str()).collect();
        names.sort_unstable();
        names
    }

    pub fn is_empty(&self) -> bool {
        self.factories.is_empty()
    }

    pub fn count(&self) -> usize {
        self.factories.len()
    }
}

impl Default for AppletRegistry {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for AppletRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AppletRegistry").field("applets", &self.names()).finish()
    }
}
