//! Item entity - things the player can buy, receive and give away

use serde::{Deserialize, Serialize};

use crate::domain::value_objects::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    /// Shop price; zero for items that can only be received
    #[serde(default)]
    pub price: u32,
}

impl Item {
    pub fn new(id: ItemId, name: impl Into<String>, price: u32) -> Self {
        Self {
            id,
            name: name.into(),
            description: String::new(),
            price,
        }
    }

    pub fn is_for_sale(&self) -> bool {
        self.price > 0
    }
}
