//! # Keystash Architecture
//!
//! Keystash stores credentials (passwords, internet passwords, certificates)
//! as attribute-keyed items in a credential vault. Items are plain attribute
//! bags; the vault decides how records are matched and kept.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Items (item/, attributes/)                                 │
//! │  - SecureItem: attributes + search attributes               │
//! │  - Typed wrappers routed through a per-class registry       │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - ItemStore: thin facade over commands                     │
//! │  - Carries the StoreConfig (access group, class policy)     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Builds the vault query and replacement sets              │
//! │  - Maps vault status codes to ErrorKind                     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Vault Layer (vault/)                                       │
//! │  - Abstract Vault trait (add / delete / update / find)      │
//! │  - MemoryVault (embedding and testing)                      │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Example
//!
//! ```
//! use keystash::{ErrorKind, InternetPassword, ItemStore, MemoryVault};
//!
//! let store = ItemStore::new(MemoryVault::new());
//!
//! let mut secret = InternetPassword::new();
//! secret.set_server("www.example.test");
//! secret.set_account("a@example.test");
//! secret.set_data("secret");
//! store.add(&secret).unwrap();
//!
//! assert_eq!(store.add(&secret), Err(ErrorKind::ItemAlreadyExists));
//! assert!(store.search(&secret).unwrap().is_some());
//! ```
//!
//! ## Testing Strategy
//!
//! 1. **Commands** (`commands/*.rs`): behavior against [`vault::memory::MemoryVault`].
//! 2. **API** (`api.rs`): dispatch only.
//! 3. **Integration** (`tests/`): end-to-end scenarios and concurrent access.
//!
//! Enable the `test_utils` feature to use `vault::memory::fixtures` from
//! outside the crate.
//!
//! ## Logging
//!
//! The crate logs through `tracing` and never installs a subscriber.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per store operation
//! - [`vault`]: Vault abstraction and the in-memory vault
//! - [`item`]: `SecureItem` and the typed item classes
//! - [`attributes`]: Attribute keys, values, and class registries
//! - [`config`]: Store configuration
//! - [`error`]: Error kinds and status code classification

pub mod api;
pub mod attributes;
pub mod commands;
pub mod config;
pub mod error;
pub mod item;
pub mod vault;

pub use api::ItemStore;
pub use attributes::{AttrValue, Attributes, ItemClass};
pub use config::{ClassChangePolicy, StoreConfig};
pub use error::{classify, ErrorKind, Result, StatusCode};
pub use item::{Certificate, GenericPassword, InternetPassword, SecureItem};
pub use vault::memory::MemoryVault;
pub use vault::{Vault, VaultData};
