use std::{fs, path::PathBuf};

use pumpkin_world::item::RawItemRecord;

use crate::InventoryError;

/// A source of the items the creative menu starts out with.
pub trait ItemLoader {
    fn load_bootstrap_items(&self) -> Result<Vec<RawItemRecord>, InventoryError>;
}

/// Reads a JSON array of [`RawItemRecord`]s, e.g. `assets/creative_items.json`.
pub struct JsonItemLoader {
    path: PathBuf,
}

impl JsonItemLoader {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ItemLoader for JsonItemLoader {
    fn load_bootstrap_items(&self) -> Result<Vec<RawItemRecord>, InventoryError> {
        let content = fs::read_to_string(&self.path).map_err(|source| InventoryError::Io {
            path: self.path.clone(),
            source,
        })?;
        let records: Vec<RawItemRecord> = serde_json::from_str(&content)?;
        log::debug!(
            "Read {} creative item records from {:?}",
            records.len(),
            self.path
        );
        Ok(records)
    }
}

impl ItemLoader for [RawItemRecord] {
    fn load_bootstrap_items(&self) -> Result<Vec<RawItemRecord>, InventoryError> {
        Ok(self.to_vec())
    }
}

impl ItemLoader for Vec<RawItemRecord> {
    fn load_bootstrap_items(&self) -> Result<Vec<RawItemRecord>, InventoryError> {
        self.as_slice().load_bootstrap_items()
    }
}

#[cfg(test)]
mod test {
    use std::fs;

    use pumpkin_world::item::RawItemRecord;
    use tempfile::tempdir;

    use super::{ItemLoader, JsonItemLoader};
    use crate::InventoryError;

    #[test]
    fn missing_file_is_an_io_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("creative_items.json");

        let err = JsonItemLoader::new(&path).load_bootstrap_items().unwrap_err();
        assert!(matches!(err, InventoryError::Io { path: p, .. } if p == path));
    }

    #[test]
    fn malformed_file_is_a_json_error() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("creative_items.json");
        fs::write(&path, r#"[{ "id": "minecraft:stone" }"#).unwrap();

        let err = JsonItemLoader::new(&path).load_bootstrap_items().unwrap_err();
        assert!(matches!(err, InventoryError::Json(_)));
    }

    #[test]
    fn reads_records_in_order() {
        let temp_dir = tempdir().unwrap();
        let path = temp_dir.path().join("creative_items.json");
        fs::write(
            &path,
            r#"[
                { "id": "minecraft:stone" },
                { "id": "minecraft:iron_sword", "damage": 20 },
                { "id": "minecraft:apple", "count": 3 }
            ]"#,
        )
        .unwrap();

        let records = JsonItemLoader::new(&path).load_bootstrap_items().unwrap();
        let ids: Vec<_> = records.iter().map(|record| record.id.as_str()).collect();
        assert_eq!(
            ids,
            ["minecraft:stone", "minecraft:iron_sword", "minecraft:apple"]
        );
        assert_eq!(records[1].damage, 20);
        assert_eq!(records[2].count, 3);
    }

    #[test]
    fn slices_load_themselves() {
        let records = vec![RawItemRecord::new("minecraft:glass")];
        assert_eq!(records.as_slice().load_bootstrap_items().unwrap(), records);
    }

    #[test]
    fn vecs_load_themselves() {
        let records = vec![
            RawItemRecord::new("minecraft:glass"),
            RawItemRecord::new("minecraft:stone"),
        ];
        assert_eq!(records.load_bootstrap_items().unwrap(), records);
    }
}
