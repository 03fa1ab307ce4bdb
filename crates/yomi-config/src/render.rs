use serde::{Deserialize, Serialize};
use yomi_core::RubyStyle;

fn default_callout() -> String {
    "note".to_string()
}

fn default_folded() -> bool {
    true
}

/// Shape of the generated markdown block
#[derive(Serialize, Deserialize, Clone, Debug)]
#[serde(default)]
pub struct RenderConfig {
    /// Callout type written into the header, `> [!note]-`
    #[serde(default = "default_callout")]
    pub callout: String,
    /// Start the callout collapsed
    #[serde(default = "default_folded")]
    pub folded: bool,
    #[serde(default)]
    pub ruby_style: RubyStyle,
    /// Add the service's romanization under the header
    #[serde(default)]
    pub show_romanization: bool,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            callout: default_callout(),
            folded: default_folded(),
            ruby_style: RubyStyle::default(),
            show_romanization: false,
        }
    }
}
