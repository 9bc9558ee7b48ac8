//! # Cart Module
//!
//! Product identifiers, cart items, and the cart collection itself.
//!
//! ## Why a Keyed Map?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE INSERT-OR-UPDATE PROBLEM                                           │
//! │                                                                         │
//! │  With a positional list:                                                │
//! │    increase(id) = scan for id → found? bump : push  (O(n), and the     │
//! │    "one entry per id" rule lives in every call site)                   │
//! │                                                                         │
//! │  With an id → quantity map:                                             │
//! │    increase(id) = entry(id) += 1                                        │
//! │    One entry per id is guaranteed by the representation itself.        │
//! │                                                                         │
//! │  IndexMap keeps insertion order, so the panel still renders items      │
//! │  in the order the shopper added them.                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Operation Contracts
//! Every operation is total: there is no input for which it fails. Absent
//! ids read as quantity 0 and mutate as no-ops.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Operation        Present (qty = n)         Absent                     │
//! │  ─────────        ─────────────────         ──────                     │
//! │  quantity_of      n                         0                          │
//! │  increase         qty = n + 1               insert with qty 1          │
//! │  decrease         n == 1 ? remove : n - 1   no-op                      │
//! │  remove           remove entry              no-op                      │
//! │  set_quantity(q)  q == 0 ? remove : qty=q   q == 0 ? no-op : insert    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::fmt;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

// =============================================================================
// Product Identifier
// =============================================================================

/// Identifier of a product, as assigned by the external catalog.
///
/// ## Opaque by Contract
/// The cart never validates or resolves product ids - it stores whatever
/// the catalog collaborator hands it. The newtype keeps product ids from
/// being mixed up with quantities or other integers in the API.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS,
)]
#[ts(export)]
pub struct ProductId(u64);

impl ProductId {
    /// Creates a product id from its raw catalog value.
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ProductId(raw)
    }

    /// Returns the raw catalog value.
    #[inline]
    pub const fn get(&self) -> u64 {
        self.0
    }
}

impl From<u64> for ProductId {
    fn from(raw: u64) -> Self {
        ProductId(raw)
    }
}

/// Displays as the bare integer, matching what the catalog and the
/// frontend use.
impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// =============================================================================
// Cart Item
// =============================================================================

/// One line of the cart: a product id and how many units of it are held.
///
/// ## Invariant
/// `quantity >= 1`. A quantity of 0 never appears here - the entry is
/// removed from the collection instead.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct CartItem {
    /// Product this line refers to.
    pub id: ProductId,

    /// Units of the product in the cart. Always at least 1.
    pub quantity: u32,
}

// =============================================================================
// Cart
// =============================================================================

/// The cart collection: an insertion-ordered mapping from product id to
/// quantity.
///
/// ## Invariants
/// - At most one entry per [`ProductId`] (structural: it is a map key)
/// - Every stored quantity is >= 1 (a decrement to 0 removes the entry)
///
/// ## Totality
/// No method returns `Result`. Reads on absent ids yield 0, mutations on
/// absent ids are no-ops.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    /// Entries keyed by product id, iteration order = insertion order.
    entries: IndexMap<ProductId, u32>,
}

impl Cart {
    /// Creates a new empty cart.
    pub fn new() -> Self {
        Cart {
            entries: IndexMap::new(),
        }
    }

    /// Returns the quantity held for `id`, or 0 if the product is not in
    /// the cart. No side effects.
    ///
    /// ## Example
    /// ```rust
    /// use wicker_core::{Cart, ProductId};
    ///
    /// let cart = Cart::new();
    /// assert_eq!(cart.quantity_of(ProductId::new(5)), 0);
    /// ```
    pub fn quantity_of(&self, id: ProductId) -> u32 {
        self.entries.get(&id).copied().unwrap_or(0)
    }

    /// Adds one unit of `id` to the cart.
    ///
    /// ## Behavior
    /// - Product not in cart: inserted with quantity 1, at the end of the
    ///   insertion order
    /// - Product in cart: quantity incremented by 1
    ///
    /// The increment saturates at `u32::MAX` so the operation stays total;
    /// no realistic cart gets anywhere near that.
    pub fn increase(&mut self, id: ProductId) {
        let qty = self.entries.entry(id).or_insert(0);
        *qty = qty.saturating_add(1);
    }

    /// Removes one unit of `id` from the cart.
    ///
    /// ## Behavior
    /// - Quantity is exactly 1: the entry is removed entirely
    /// - Quantity is greater than 1: decremented by 1
    /// - Product not in cart: no-op (never creates a phantom or
    ///   zero-quantity entry)
    pub fn decrease(&mut self, id: ProductId) {
        match self.entries.get(&id).copied() {
            Some(qty) if qty > 1 => {
                self.entries.insert(id, qty - 1);
            }
            Some(_) => {
                // shift_remove keeps the insertion order of the rest
                self.entries.shift_remove(&id);
            }
            None => {}
        }
    }

    /// Removes `id` from the cart entirely, whatever its quantity.
    /// No-op if the product is not in the cart.
    pub fn remove(&mut self, id: ProductId) {
        self.entries.shift_remove(&id);
    }

    /// Sets the quantity of `id` outright.
    ///
    /// ## Behavior
    /// - `quantity == 0`: the entry is removed (no-op if absent)
    /// - `quantity > 0`: inserted or overwritten with the given value
    pub fn set_quantity(&mut self, id: ProductId, quantity: u32) {
        if quantity == 0 {
            self.entries.shift_remove(&id);
        } else {
            self.entries.insert(id, quantity);
        }
    }

    /// Removes every entry from the cart.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Returns the total number of units across all entries.
    ///
    /// Derived on every call from the current entries - it is never stored
    /// or updated independently, so it cannot drift from the items.
    pub fn total_quantity(&self) -> u32 {
        // Saturating fold for the same totality reason as `increase`
        self.entries
            .values()
            .fold(0u32, |acc, &qty| acc.saturating_add(qty))
    }

    /// Returns the number of distinct products in the cart.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Checks if the cart holds no items.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Checks if `id` is in the cart.
    pub fn contains(&self, id: ProductId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Iterates the cart lines in insertion order.
    pub fn items(&self) -> impl Iterator<Item = CartItem> + '_ {
        self.entries
            .iter()
            .map(|(&id, &quantity)| CartItem { id, quantity })
    }
}
