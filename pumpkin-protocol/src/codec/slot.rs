use pumpkin_world::item::ItemStack;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum Slot {
    NoItem,
    Item {
        item_count: u32,
        item_id: u16,
        damage: u16,
        #[serde(skip_serializing_if = "Option::is_none")]
        components: Option<Map<String, Value>>,
    },
}

/// Items the registry could not resolve have no id the client understands.
impl From<&ItemStack> for Slot {
    fn from(stack: &ItemStack) -> Self {
        if stack.item.is_unknown() {
            return Self::NoItem;
        }
        Self::Item {
            item_count: u32::from(stack.item_count),
            item_id: stack.item.id,
            damage: stack.damage,
            components: stack.components.clone(),
        }
    }
}
