//! # Cart Snapshot
//!
//! Owned, serializable view of the store for the rendering layer.
//!
//! A snapshot is taken at one instant and stays stable while the store
//! mutates underneath, so a re-render never sees a half-applied operation.
//! Serialized camelCase to match the frontend's field naming:
//!
//! ```json
//! {
//!   "items": [{ "id": 5, "quantity": 2 }],
//!   "cartQuantity": 2,
//!   "isOpen": false
//! }
//! ```

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use wicker_core::CartItem;

use crate::store::CartStore;

/// Everything the cart panel and the trigger button need to render.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct CartSnapshot {
    /// Cart lines in insertion order.
    pub items: Vec<CartItem>,

    /// Total units across all lines. Always equals the sum of the item
    /// quantities in this snapshot.
    pub cart_quantity: u32,

    /// Whether the cart panel is shown.
    pub is_open: bool,
}

impl From<&CartStore> for CartSnapshot {
    fn from(store: &CartStore) -> Self {
        CartSnapshot {
            items: store.items(),
            cart_quantity: store.cart_quantity(),
            is_open: store.is_open(),
        }
    }
}
