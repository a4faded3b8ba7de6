use pumpkin_config::ConfigError;
use pumpkin_inventory::InventoryError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ServerError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("Failed to load the creative inventory: {0}")]
    CreativeInventory(#[from] InventoryError),
}
