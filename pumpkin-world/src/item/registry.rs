use std::collections::HashMap;
use std::sync::LazyLock;

use serde::Deserialize;

use super::Item;

#[derive(Deserialize)]
struct ItemAsset {
    id: u16,
    components: ItemAssetComponents,
}

#[derive(Deserialize)]
struct ItemAssetComponents {
    #[serde(rename = "minecraft:item_name")]
    item_name: String,
    #[serde(rename = "minecraft:max_stack_size")]
    max_stack_size: u8,
    #[serde(rename = "minecraft:max_damage")]
    max_damage: Option<u16>,
}

/// Every known item, keyed by its registry key without namespace.
pub static ITEMS: LazyLock<HashMap<String, Item>> = LazyLock::new(|| {
    let assets: HashMap<String, ItemAsset> =
        serde_json::from_str(include_str!("../../../assets/items.json"))
            .expect("Could not parse items.json registry.");

    assets
        .into_iter()
        .map(|(name, asset)| {
            let item = Item {
                id: asset.id,
                registry_key: format!("minecraft:{name}"),
                name: asset.components.item_name,
                max_stack_size: asset.components.max_stack_size,
                max_damage: asset.components.max_damage,
            };
            (name, item)
        })
        .collect()
});

/// Accepts both `minecraft:stone` and `stone`.
pub fn get_item(registry_key: &str) -> Option<&'static Item> {
    let key = registry_key
        .strip_prefix("minecraft:")
        .unwrap_or(registry_key);
    ITEMS.get(key)
}
