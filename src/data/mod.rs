/// Data layer: core types and loading.
///
/// Architecture:
/// ```text
///    uploaded .csv
///         │
///         ▼
///    ┌──────────┐
///    │  loader   │  parse file → DataFrame, per-cell type inference
///    └──────────┘
///         │
///         ▼
///    ┌───────────┐
///    │ DataFrame  │  Vec<Column> in header order, dtype by promotion
///    └───────────┘
/// ```
pub mod loader;
pub mod model;
