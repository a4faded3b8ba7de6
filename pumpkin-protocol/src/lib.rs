#[cfg(feature = "clientbound")]
pub mod client;
pub mod codec;

pub use codec::{ItemCodec, NetworkItemCodec, slot::Slot};
