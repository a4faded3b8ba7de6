use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub mod registry;

/// Display name carried by every item the registry could not resolve.
pub const UNKNOWN_ITEM_NAME: &str = "Unknown";
/// Numeric id reserved for unresolved items. Never sent to a client.
pub const UNKNOWN_ITEM_ID: u16 = u16::MAX;

/// An entry of the item registry, shared by every stack of that kind.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Item {
    pub id: u16,
    /// Namespaced registry key, e.g. `minecraft:stone`.
    pub registry_key: String,
    pub name: String,
    pub max_stack_size: u8,
    /// Items with a max damage wear down on use.
    pub max_damage: Option<u16>,
}

impl Item {
    /// Placeholder for a registry key this server does not know about.
    pub fn unknown(registry_key: &str) -> Self {
        Self {
            id: UNKNOWN_ITEM_ID,
            registry_key: registry_key.to_string(),
            name: UNKNOWN_ITEM_NAME.to_string(),
            max_stack_size: 64,
            max_damage: None,
        }
    }

    pub fn is_unknown(&self) -> bool {
        self.name == UNKNOWN_ITEM_NAME
    }

    pub fn is_durable(&self) -> bool {
        self.max_damage.is_some()
    }
}

#[derive(Clone, Debug)]
pub struct ItemStack {
    pub item_count: u8,
    pub item: Item,
    /// Wear on durable items, a variant value on everything else.
    pub damage: u16,
    /// Extra component data (enchantments, custom names...), compared on every equality check.
    pub components: Option<Map<String, Value>>,
}

/// Strict equality. The stack size never takes part in it.
impl PartialEq for ItemStack {
    fn eq(&self, other: &Self) -> bool {
        self.equals(other, true)
    }
}

impl ItemStack {
    pub fn new(item_count: u8, item: Item) -> Self {
        Self {
            item_count,
            item,
            damage: 0,
            components: None,
        }
    }

    #[must_use]
    pub fn with_damage(mut self, damage: u16) -> Self {
        self.damage = damage;
        self
    }

    #[must_use]
    pub fn with_components(mut self, components: Map<String, Value>) -> Self {
        self.components = Some(components);
        self
    }

    pub fn is_durable(&self) -> bool {
        self.item.is_durable()
    }

    /// Compares two stacks by kind and components. `check_damage` decides whether the wear
    /// state has to match as well; the stack count is ignored either way.
    pub fn equals(&self, other: &Self, check_damage: bool) -> bool {
        self.item.id == other.item.id
            && self.item.registry_key == other.item.registry_key
            && (!check_damage || self.damage == other.damage)
            && self.components == other.components
    }
}

const fn default_count() -> u8 {
    1
}

/// A single item as written in a data file, before it is resolved against the registry.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct RawItemRecord {
    pub id: String,
    #[serde(default = "default_count")]
    pub count: u8,
    #[serde(default)]
    pub damage: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub components: Option<Map<String, Value>>,
}

impl RawItemRecord {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            count: default_count(),
            damage: 0,
            components: None,
        }
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum ItemRecordError {
    #[error("{item}: count {count} is outside of 1..={max}")]
    InvalidCount { item: String, count: u8, max: u8 },
    #[error("{item}: damage {damage} exceeds the max damage of {max}")]
    InvalidDamage { item: String, damage: u16, max: u16 },
}

impl TryFrom<&RawItemRecord> for ItemStack {
    type Error = ItemRecordError;

    /// Unknown ids are not an error; they resolve to [`Item::unknown`] and skip validation.
    fn try_from(record: &RawItemRecord) -> Result<Self, Self::Error> {
        let Some(item) = registry::get_item(&record.id) else {
            return Ok(Self {
                item_count: record.count,
                item: Item::unknown(&record.id),
                damage: record.damage,
                components: record.components.clone(),
            });
        };

        if record.count == 0 || record.count > item.max_stack_size {
            return Err(ItemRecordError::InvalidCount {
                item: item.registry_key.clone(),
                count: record.count,
                max: item.max_stack_size,
            });
        }

        if let Some(max) = item.max_damage {
            if record.damage > max {
                return Err(ItemRecordError::InvalidDamage {
                    item: item.registry_key.clone(),
                    damage: record.damage,
                    max,
                });
            }
        }

        Ok(Self {
            item_count: record.count,
            item: item.clone(),
            damage: record.damage,
            components: record.components.clone(),
        })
    }
}
