use serde::{Deserialize, Serialize};

use self::dictionary::DictionaryConfig;
use self::render::RenderConfig;
use self::service::ServiceConfig;

pub mod dictionary;
pub mod render;
pub mod service;

#[derive(Serialize, Deserialize, Clone, Debug, Default)]
#[serde(default)]
pub struct Config {
    pub service: ServiceConfig,
    pub dictionary: DictionaryConfig,
    pub render: RenderConfig,
}

impl Config {
    /// Defaults with environment overrides applied
    pub fn new() -> Self {
        Config {
            service: ServiceConfig::new(),
            dictionary: DictionaryConfig::new(),
            render: RenderConfig::default(),
        }
    }
}
