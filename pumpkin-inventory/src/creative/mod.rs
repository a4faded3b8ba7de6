use std::sync::Arc;

use pumpkin_protocol::{ItemCodec, client::play::CreativeContentEntry};
use pumpkin_world::item::ItemStack;

use crate::InventoryError;

mod loader;

pub use loader::{ItemLoader, JsonItemLoader};

/// The items listed in the creative menu, in display order.
///
/// Changes are not pushed to players who already received the menu; they see them the next time
/// the contents are sent.
pub struct CreativeInventory {
    creative: Vec<ItemStack>,
    /// Built on demand, dropped on every change.
    creative_contents: Option<Arc<[CreativeContentEntry]>>,
    codec: Arc<dyn ItemCodec>,
}

impl CreativeInventory {
    pub fn new(codec: Arc<dyn ItemCodec>) -> Self {
        Self {
            creative: Vec::new(),
            creative_contents: None,
            codec,
        }
    }

    pub fn from_loader<L: ItemLoader + ?Sized>(
        loader: &L,
        codec: Arc<dyn ItemCodec>,
    ) -> Result<Self, InventoryError> {
        let mut inventory = Self::new(codec);
        inventory.initialize(loader)?;
        Ok(inventory)
    }

    /// Appends the loader's items in source order, leaving out everything that resolves to an
    /// unknown item. Nothing is added if any record fails to load.
    pub fn initialize<L: ItemLoader + ?Sized>(
        &mut self,
        loader: &L,
    ) -> Result<(), InventoryError> {
        let records = loader.load_bootstrap_items()?;

        let mut items = Vec::with_capacity(records.len());
        for (index, record) in records.iter().enumerate() {
            let stack = ItemStack::try_from(record)
                .map_err(|source| InventoryError::InvalidRecord { index, source })?;
            if stack.item.is_unknown() {
                log::debug!("Skipping unknown creative item {}", record.id);
                continue;
            }
            items.push(stack);
        }

        log::info!(
            "Loaded {} creative items ({} unknown skipped)",
            items.len(),
            records.len() - items.len()
        );

        self.creative_contents = None;
        self.creative.extend(items);
        Ok(())
    }

    pub fn clear(&mut self) {
        self.creative_contents = None;
        self.creative.clear();
    }

    #[must_use]
    pub fn get_all(&self) -> &[ItemStack] {
        &self.creative
    }

    #[must_use]
    pub fn get_item(&self, index: usize) -> Option<&ItemStack> {
        self.creative.get(index)
    }

    /// Durable items must match their damage exactly; everything else matches regardless of it.
    #[must_use]
    pub fn get_item_index(&self, item: &ItemStack) -> Option<usize> {
        let check_damage = item.is_durable();
        self.creative
            .iter()
            .position(|stack| item.equals(stack, check_damage))
    }

    #[must_use]
    pub fn contains(&self, item: &ItemStack) -> bool {
        self.get_item_index(item).is_some()
    }

    /// Spectators always get an empty menu.
    pub fn get_creative_contents(&mut self, is_spectator: bool) -> Arc<[CreativeContentEntry]> {
        if is_spectator {
            return Arc::from(Vec::<CreativeContentEntry>::new());
        }

        self.creative_contents
            .get_or_insert_with(|| {
                (1..)
                    .zip(&self.creative)
                    .map(|(entry_id, stack)| {
                        CreativeContentEntry::new(entry_id, self.codec.encode(stack))
                    })
                    .collect()
            })
            .clone()
    }

    pub fn add(&mut self, item: &ItemStack) {
        self.creative_contents = None;
        self.creative.push(item.clone());
    }

    /// Removes the first matching item. Items behind it move up by one.
    pub fn remove(&mut self, item: &ItemStack) -> bool {
        let Some(index) = self.get_item_index(item) else {
            return false;
        };
        self.creative_contents = None;
        self.creative.remove(index);
        true
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.creative.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.creative.is_empty()
    }
}
