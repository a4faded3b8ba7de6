use serde::Serialize;

use crate::codec::slot::Slot;

/// One entry of the creative menu. Ids start at 1 and follow the menu order.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct CreativeContentEntry {
    pub entry_id: u32,
    pub item: Slot,
}

impl CreativeContentEntry {
    pub fn new(entry_id: u32, item: Slot) -> Self {
        Self { entry_id, item }
    }
}

#[derive(Serialize)]
pub struct CCreativeContent<'a> {
    entries: &'a [CreativeContentEntry],
}

impl<'a> CCreativeContent<'a> {
    pub fn new(entries: &'a [CreativeContentEntry]) -> Self {
        Self { entries }
    }
}
