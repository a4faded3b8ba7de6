use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Deserialize, Serialize)]
#[serde(default)]
pub struct CreativeConfig {
    /// Whether the creative menu starts out with the bundled item list.
    pub load_defaults: bool,
    /// JSON file the default items are read from, relative to the working directory.
    pub items_file: PathBuf,
}

impl Default for CreativeConfig {
    fn default() -> Self {
        Self {
            load_defaults: true,
            items_file: PathBuf::from("assets/creative_items.json"),
        }
    }
}

impl CreativeConfig {
    pub fn validate(&self) -> Result<(), String> {
        if self.load_defaults && self.items_file.as_os_str().is_empty() {
            return Err(
                "creative.items_file must be set when creative.load_defaults is enabled"
                    .to_string(),
            );
        }
        Ok(())
    }
}
