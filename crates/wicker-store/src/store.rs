//! # Cart Store
//!
//! Per-session cart state and the operations the UI calls on it.
//!
//! ## Operation Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Store Operations                                │
//! │                                                                         │
//! │  Frontend Action          Store Call              State Change          │
//! │  ───────────────          ──────────              ────────────          │
//! │                                                                         │
//! │  Click "+" on product ──► increase(id) ─────────► qty + 1 (or insert)  │
//! │                                                                         │
//! │  Click "-" on product ──► decrease(id) ─────────► qty - 1 (or remove)  │
//! │                                                                         │
//! │  Click "Remove" ────────► remove(id) ───────────► entry removed        │
//! │                                                                         │
//! │  Click cart button ─────► open_cart() ──────────► panel shown          │
//! │                                                                         │
//! │  Click "×" on panel ────► close_cart() ─────────► panel hidden         │
//! │                                                                         │
//! │  Re-render ─────────────► snapshot() ───────────► (read only)          │
//! │                                                                         │
//! │  NOTE: The store runs single-threaded under the UI event loop; each    │
//! │        operation runs to completion before the next event arrives.     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use tracing::debug;

use wicker_core::{Cart, CartItem, ProductId, Visibility};

use crate::snapshot::CartSnapshot;

/// The per-session cart state store.
///
/// Holds the cart collection and the panel visibility, created empty and
/// closed by [`CartStore::new`]. The host creates one per UI session and
/// passes it explicitly to the components that need it.
///
/// ## Contract
/// Every operation is total. Product ids are opaque: the store never checks
/// them against a catalog, and unknown ids take the no-op / zero-return
/// paths documented per method.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CartStore {
    cart: Cart,
    visibility: Visibility,
}

impl CartStore {
    /// Creates a new store: no items, panel closed.
    pub fn new() -> Self {
        CartStore {
            cart: Cart::new(),
            visibility: Visibility::Closed,
        }
    }

    // =========================================================================
    // Reads
    // =========================================================================

    /// Returns the quantity of `id` in the cart, or 0 if it is not there.
    pub fn item_quantity(&self, id: ProductId) -> u32 {
        self.cart.quantity_of(id)
    }

    /// Returns the total number of units across all items.
    ///
    /// Derived from the items on every call; after any sequence of
    /// operations it equals the sum of the per-item quantities.
    pub fn cart_quantity(&self) -> u32 {
        self.cart.total_quantity()
    }

    /// Checks if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.cart.is_empty()
    }

    /// Checks if the cart panel is currently shown.
    pub fn is_open(&self) -> bool {
        self.visibility.is_open()
    }

    /// Returns the cart lines in insertion order, as an owned list the
    /// panel can render from.
    pub fn items(&self) -> Vec<CartItem> {
        self.cart.items().collect()
    }

    /// Takes an owned snapshot of the whole store for rendering.
    pub fn snapshot(&self) -> CartSnapshot {
        CartSnapshot::from(self)
    }

    // =========================================================================
    // Cart Mutations
    // =========================================================================

    /// Adds one unit of `id`.
    ///
    /// ## Behavior
    /// - Product not in cart: inserted with quantity 1
    /// - Product in cart: quantity incremented by 1
    pub fn increase(&mut self, id: ProductId) {
        debug!(product = %id, "increase quantity");
        self.cart.increase(id);
    }

    /// Removes one unit of `id`.
    ///
    /// ## Behavior
    /// - Quantity 1: the item is removed entirely
    /// - Quantity > 1: decremented by 1
    /// - Product not in cart: no-op, traced at debug level so the case is
    ///   diagnosable
    pub fn decrease(&mut self, id: ProductId) {
        debug!(product = %id, "decrease quantity");
        if !self.cart.contains(id) {
            debug!(product = %id, "product not in cart, decrease ignored");
            return;
        }
        self.cart.decrease(id);
    }

    /// Removes `id` entirely, whatever its quantity. No-op if absent.
    pub fn remove(&mut self, id: ProductId) {
        debug!(product = %id, "remove from cart");
        if !self.cart.contains(id) {
            debug!(product = %id, "product not in cart, remove ignored");
            return;
        }
        self.cart.remove(id);
    }

    /// Sets the quantity of `id` outright; 0 removes the item.
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        debug!(product = %id, quantity = %quantity, "set quantity");
        self.cart.set_quantity(id, quantity);
    }

    /// Empties the cart. The panel visibility is untouched.
    pub fn clear(&mut self) {
        debug!("clear cart");
        self.cart.clear();
    }

    // =========================================================================
    // Panel Visibility
    // =========================================================================

    /// Shows the cart panel. Idempotent.
    pub fn open_cart(&mut self) {
        debug!("open cart panel");
        self.visibility.open();
    }

    /// Hides the cart panel. Idempotent.
    pub fn close_cart(&mut self) {
        debug!("close cart panel");
        self.visibility.close();
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn id(raw: u64) -> ProductId {
        ProductId::new(raw)
    }

    #[test]
    fn test_new_store_is_empty_and_closed() {
        let store = CartStore::new();

        assert!(store.is_empty());
        assert!(!store.is_open());
        assert_eq!(store.cart_quantity(), 0);
        assert_eq!(store, CartStore::default());
    }

    #[test]
    fn test_first_increase_inserts_single_unit() {
        let mut store = CartStore::new();

        store.increase(id(5));

        assert_eq!(store.items(), vec![CartItem { id: id(5), quantity: 1 }]);
        assert_eq!(store.cart_quantity(), 1);
    }

    #[test]
    fn test_increase_existing_item() {
        let mut store = CartStore::new();

        store.increase(id(5));
        store.increase(id(5));

        assert_eq!(store.items(), vec![CartItem { id: id(5), quantity: 2 }]);
        assert_eq!(store.cart_quantity(), 2);
    }

    #[test]
    fn test_decrease_above_one_decrements() {
        let mut store = CartStore::new();
        store.set_quantity(id(5), 2);

        store.decrease(id(5));

        assert_eq!(store.items(), vec![CartItem { id: id(5), quantity: 1 }]);
    }

    #[test]
    fn test_decrease_last_unit_removes_item() {
        let mut store = CartStore::new();
        store.increase(id(5));

        store.decrease(id(5));

        assert!(store.items().is_empty());
        assert_eq!(store.item_quantity(id(5)), 0);
        assert_eq!(store.cart_quantity(), 0);
    }

    #[test]
    fn test_decrease_unknown_id_is_noop() {
        let mut store = CartStore::new();
        store.increase(id(1));
        let before = store.clone();

        store.decrease(id(42));

        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_unknown_id_is_noop() {
        let mut store = CartStore::new();
        store.increase(id(1));
        let before = store.clone();

        store.remove(id(42));

        assert_eq!(store, before);
    }

    #[test]
    fn test_remove_deletes_item() {
        let mut store = CartStore::new();
        store.set_quantity(id(5), 3);

        store.remove(id(5));

        assert!(store.is_empty());
    }

    #[test]
    fn test_clear_leaves_panel_alone() {
        let mut store = CartStore::new();
        store.increase(id(1));
        store.open_cart();

        store.clear();

        assert!(store.is_empty());
        assert!(store.is_open());
    }

    #[test]
    fn test_open_close_cycle() {
        let mut store = CartStore::new();
        assert!(!store.is_open());

        store.open_cart();
        assert!(store.is_open());

        store.close_cart();
        assert!(!store.is_open());
    }

    #[test]
    fn test_open_close_are_idempotent() {
        let mut store = CartStore::new();

        store.open_cart();
        store.open_cart();
        assert!(store.is_open());

        store.close_cart();
        store.close_cart();
        assert!(!store.is_open());
    }

    #[test]
    fn test_visibility_independent_of_contents() {
        let mut store = CartStore::new();

        store.open_cart();
        store.increase(id(1));
        store.remove(id(1));

        // mutating items never closes the panel
        assert!(store.is_open());
        assert!(store.is_empty());
    }

    #[test]
    fn test_cart_quantity_tracks_sum_through_a_session() {
        let mut store = CartStore::new();
        store.increase(id(1));
        store.increase(id(2));
        store.increase(id(2));
        store.set_quantity(id(3), 4);
        store.decrease(id(1));

        let sum: u32 = store.items().iter().map(|item| item.quantity).sum();
        assert_eq!(store.cart_quantity(), sum);
        assert_eq!(store.cart_quantity(), 6);
    }

    proptest! {
        // cartQuantity == sum of item quantities for all operation
        // sequences driven through the store surface
        #[test]
        fn cart_quantity_equals_item_sum(
            ops in prop::collection::vec((0u8..6, 0u64..8, 0u32..5), 0..64)
        ) {
            let mut store = CartStore::new();

            for (op, raw, qty) in ops {
                match op {
                    0 => store.increase(id(raw)),
                    1 => store.decrease(id(raw)),
                    2 => store.remove(id(raw)),
                    3 => store.set_quantity(id(raw), qty),
                    4 => store.open_cart(),
                    _ => store.close_cart(),
                }

                let sum: u32 = store.items().iter().map(|item| item.quantity).sum();
                prop_assert_eq!(store.cart_quantity(), sum);
            }
        }
    }
}
