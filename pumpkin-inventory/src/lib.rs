pub mod creative;
mod error;

pub use creative::{CreativeInventory, ItemLoader, JsonItemLoader};
pub use error::InventoryError;
