use std::{io, path::PathBuf};

use pumpkin_world::item::ItemRecordError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
    #[error("Couldn't read creative items from {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Malformed creative item data: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Invalid creative item record #{index}: {source}")]
    InvalidRecord {
        index: usize,
        #[source]
        source: ItemRecordError,
    },
}
