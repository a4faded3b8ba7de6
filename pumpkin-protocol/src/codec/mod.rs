use pumpkin_world::item::ItemStack;

pub mod slot;

use slot::Slot;

/// Turns an [`ItemStack`] into the structure the network layer puts on the wire.
pub trait ItemCodec: Send + Sync {
    fn encode(&self, stack: &ItemStack) -> Slot;
}

/// The codec used for connected clients.
#[derive(Clone, Copy, Debug, Default)]
pub struct NetworkItemCodec;

impl ItemCodec for NetworkItemCodec {
    fn encode(&self, stack: &ItemStack) -> Slot {
        Slot::from(stack)
    }
}
