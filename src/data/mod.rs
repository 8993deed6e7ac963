//! Data layer: the catalog, the built-in records, and the filter.
//!
//! ```text
//!   builtin (authored records)
//!        │
//!        ▼
//!   ┌─────────┐
//!   │ Catalog │  validated once, immutable afterwards
//!   └─────────┘
//!        │
//!        ▼
//!   ┌─────────┐
//!   │ filter  │  Selection → picker options / visible index positions
//!   └─────────┘
//! ```
//!
//! Everything in here is pure and synchronous; the UI layers above never
//! get a mutable handle to the catalog.

pub mod builtin;
pub mod filter;
pub mod model;
