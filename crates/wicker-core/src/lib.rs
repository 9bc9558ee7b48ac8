//! # wicker-core: Pure Cart Logic for Wicker
//!
//! This crate is the **heart** of Wicker. It contains the cart state logic
//! as pure functions with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                        Wicker Architecture                              │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Web Frontend                                 │   │
//! │  │    Product List ──► Cart Panel ──► Cart Toggle Button          │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    wicker-store                                 │   │
//! │  │    CartStore: session state + operation surface + snapshots    │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │               ★ wicker-core (THIS CRATE) ★                      │   │
//! │  │                                                                 │   │
//! │  │   ┌──────────────────────┐      ┌──────────────────────┐       │   │
//! │  │   │        cart          │      │      visibility      │       │   │
//! │  │   │  ProductId, CartItem │      │   Visibility enum    │       │   │
//! │  │   │  Cart (id → qty map) │      │   open / close       │       │   │
//! │  │   └──────────────────────┘      └──────────────────────┘       │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO STORAGE • NO NETWORK • PURE FUNCTIONS            │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`cart`] - Product identifiers, cart items, and the cart collection
//! - [`visibility`] - Open/closed state of the cart panel
//!
//! ## Design Principles
//!
//! 1. **Pure Functions**: Every operation is deterministic - same input = same output
//! 2. **No I/O**: Storage, network, file system access is FORBIDDEN here
//! 3. **Total Operations**: Every operation is defined for every input - there
//!    is no error type in this crate; absent ids take no-op or zero paths
//! 4. **Structural Invariants**: Uniqueness of ids is guaranteed by the map
//!    representation, not by scanning
//!
//! ## Example Usage
//!
//! ```rust
//! use wicker_core::{Cart, ProductId};
//!
//! let mut cart = Cart::new();
//! let id = ProductId::new(5);
//!
//! cart.increase(id);
//! cart.increase(id);
//!
//! assert_eq!(cart.quantity_of(id), 2);
//! assert_eq!(cart.total_quantity(), 2);
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod visibility;

// =============================================================================
// Re-exports for Convenience
// =============================================================================
// These allow users to do `use wicker_core::Cart` instead of
// `use wicker_core::cart::Cart`

pub use cart::{Cart, CartItem, ProductId};
pub use visibility::Visibility;
