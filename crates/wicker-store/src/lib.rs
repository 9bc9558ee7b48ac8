//! # Wicker Store
//!
//! The session-level shopping-cart store a web UI instantiates and renders
//! from.
//!
//! ## Module Organization
//! ```text
//! wicker_store/
//! ├── lib.rs          ◄─── You are here (exports)
//! ├── store.rs        ◄─── CartStore: state + operation surface
//! └── snapshot.rs     ◄─── CartSnapshot: serializable view for rendering
//! ```
//!
//! ## Ownership Model (Explicit Dependency Passing)
//! One `CartStore` is created per UI session and handed to every component
//! that needs it. There is no global, no singleton, no ambient lookup:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Who Talks to the Store                               │
//! │                                                                         │
//! │  Host (per session)                                                     │
//! │  ──────────────────                                                     │
//! │  let mut store = CartStore::new();   // empty, panel closed             │
//! │                                                                         │
//! │  Product List ─────► store.increase(id) / store.decrease(id)           │
//! │  Cart Panel ───────► store.snapshot() / store.remove(id)               │
//! │  Toggle Button ────► store.open_cart() / store.close_cart()            │
//! │                                                                         │
//! │  Mutation goes through &mut self: the borrow checker rules out a       │
//! │  render observing a half-applied operation. Renders hold owned         │
//! │  CartSnapshot values, which stay stable across later mutations.        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! No operation here fails: absent product ids read as quantity 0 and
//! mutate as no-ops, so the public surface has no `Result` and no error
//! type.

pub mod snapshot;
pub mod store;

pub use snapshot::CartSnapshot;
pub use store::CartStore;

// Re-export the core types consumers need to talk to the store
pub use wicker_core::{CartItem, ProductId, Visibility};
