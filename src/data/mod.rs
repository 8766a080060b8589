//! Data layer: typed schema, loading, filtering, and per-protein statistics.
//!
//! Architecture:
//! ```text
//!   AthLeasDB.json
//!        │
//!        ▼
//!   ┌──────────┐
//!   │  loader   │  parse + validate records → ProteinDataset
//!   └──────────┘
//!        │
//!        ▼
//!   ┌───────────────┐
//!   │ ProteinDataset │  records map, flattened table, class index
//!   └───────────────┘
//!        │                │
//!        ▼                ▼
//!   ┌──────────┐    ┌──────────┐
//!   │  filter   │    │  stats    │  residue counts, predictor series
//!   └──────────┘    └──────────┘
//! ```
//!
//! Everything in here is a pure function over the immutable dataset; the UI
//! recomputes derived views on every interaction instead of patching them.

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
