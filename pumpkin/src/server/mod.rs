use std::path::Path;
use std::sync::Arc;

use parking_lot::Mutex;
use pumpkin_config::{AdvancedConfiguration, BasicConfiguration};
use pumpkin_inventory::{CreativeInventory, JsonItemLoader};
use pumpkin_protocol::{
    ItemCodec, NetworkItemCodec,
    client::play::{CCreativeContent, CreativeContentEntry},
};
use pumpkin_util::GameMode;

use crate::{entity::player::Player, error::ServerError};

/// Represents a Minecraft server instance.
pub struct Server {
    /// The items of the creative menu. Every read and write goes through this one lock, so the
    /// contents are only ever built once per change.
    pub creative_inventory: Mutex<CreativeInventory>,
    /// The default gamemode when a player joins the server.
    pub default_gamemode: GameMode,
}

impl Server {
    /// `exec_dir` is the directory relative paths in the configuration are resolved against.
    pub fn new(
        exec_dir: &Path,
        basic_config: &BasicConfiguration,
        advanced_config: &AdvancedConfiguration,
    ) -> Result<Self, ServerError> {
        Self::with_codec(
            exec_dir,
            basic_config,
            advanced_config,
            Arc::new(NetworkItemCodec),
        )
    }

    pub fn with_codec(
        exec_dir: &Path,
        basic_config: &BasicConfiguration,
        advanced_config: &AdvancedConfiguration,
        codec: Arc<dyn ItemCodec>,
    ) -> Result<Self, ServerError> {
        let creative = &advanced_config.creative;
        let creative_inventory = if creative.load_defaults {
            let loader = JsonItemLoader::new(exec_dir.join(&creative.items_file));
            CreativeInventory::from_loader(&loader, codec)?
        } else {
            log::info!("Default creative items are disabled; the creative menu starts empty");
            CreativeInventory::new(codec)
        };

        Ok(Self {
            creative_inventory: Mutex::new(creative_inventory),
            default_gamemode: basic_config.default_gamemode,
        })
    }

    /// Creates a player joining with the server's default gamemode.
    #[must_use]
    pub fn add_player(&self, name: &str) -> Player {
        Player::new(name, self.default_gamemode)
    }

    /// The creative menu as `player` is allowed to see it.
    #[must_use]
    pub fn creative_contents_for(&self, player: &Player) -> Arc<[CreativeContentEntry]> {
        self.creative_inventory
            .lock()
            .get_creative_contents(player.is_spectator())
    }

    /// Encodes the creative content packet for `player`; the caller writes it out.
    pub fn creative_inventory_packet(
        &self,
        player: &Player,
    ) -> Result<Vec<u8>, serde_json::Error> {
        let entries = self.creative_contents_for(player);
        let payload = serde_json::to_vec(&CCreativeContent::new(&entries))?;
        log::debug!(
            "Encoded {} creative entries ({} bytes) for {}",
            entries.len(),
            payload.len(),
            player.name
        );
        Ok(payload)
    }
}
