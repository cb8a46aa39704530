//! Plugin activation schema definitions

use serde::{Deserialize, Serialize};

/// Default asset entry points handed to the ColdBox bridge
pub const DEFAULT_INPUT: [&str; 2] = ["resources/assets/css/app.css", "resources/assets/js/app.js"];

/// Default static output directory override
pub const DEFAULT_PUBLIC_DIRECTORY: &str = "public/includes";

/// A single plugin activation.
///
/// Serialized adjacently tagged, so a `bundle.toml` entry reads
/// `name = "coldbox"` followed by an `options` table. Variants without
/// options reject an `options` table at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "name", content = "options", rename_all = "lowercase")]
pub enum PluginActivation {
    /// Vue single-file component integration
    Vue,

    /// Tailwind CSS integration
    Tailwindcss,

    /// ColdBox asset-pipeline bridge
    Coldbox(ColdboxOptions),
}

impl PluginActivation {
    /// Plugin name as written in `bundle.toml`
    pub fn name(&self) -> &'static str {
        match self {
            PluginActivation::Vue => "vue",
            PluginActivation::Tailwindcss => "tailwindcss",
            PluginActivation::Coldbox(_) => "coldbox",
        }
    }
}

/// Options for the ColdBox bridge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields, rename_all = "camelCase")]
pub struct ColdboxOptions {
    /// Asset entry points, in declaration order
    pub input: Vec<String>,

    /// Reload connected browsers when watched sources change
    pub refresh: bool,

    /// Directory the bridge publishes built assets into
    pub public_directory: String,
}

impl Default for ColdboxOptions {
    fn default() -> Self {
        Self {
            input: DEFAULT_INPUT.iter().map(|s| s.to_string()).collect(),
            refresh: true,
            public_directory: DEFAULT_PUBLIC_DIRECTORY.to_string(),
        }
    }
}
