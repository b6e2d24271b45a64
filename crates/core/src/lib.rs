//! # Lucy Blu Core
//!
//! Domain library for the Lucy Blu digital menu and takeaway ordering
//! system: the menu catalog, modifier registry, derived topping lists,
//! price parsing, item configuration, and the cart.
//!
//! ## Architecture
//!
//! - `menu/` - catalog types, store, and the built-in seed menu
//! - `modifiers` - named option groups and the two virtual group names
//! - `toppings` - catalog-derived pizza/burger topping projections
//! - `pricing` - display-string price parsing and formatting
//! - `configure` - per-session configuration drafts and defaulting
//! - `cart` - ordered cart lines and quantity/total maintenance
//! - `auth` - the shared admin credential
//!
//! Everything here is synchronous and in-memory; the server crate owns the
//! shared state and decides locking.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use lucyblu_core::configure::{ConfigurationDraft, Selections};
//! use lucyblu_core::menu::{Catalog, ItemPath};
//! use lucyblu_core::modifiers::ModifierRegistry;
//!
//! let catalog = Catalog::seed();
//! let registry = ModifierRegistry::seed();
//! let path = ItemPath { section: 0, sub: 0, item: 0 };
//! let item = catalog.item(path).unwrap();
//! let draft = ConfigurationDraft::open(path, item, &registry, &catalog);
//! let line = draft.build_line(&Selections::default());
//! ```

pub mod auth;
pub mod cart;
pub mod configure;
pub mod menu;
pub mod modifiers;
pub mod pricing;
pub mod toppings;
