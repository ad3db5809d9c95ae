//! csv-eda: exploratory data analysis for CSV datasets.
//!
//! One request in, up to five artifacts out:
//! ```text
//!   EdaRequest (csv + 5 options)
//!        │
//!        ▼
//!   ┌──────────┐     ┌─────────────────────────────────────────┐
//!   │ handler   │ ──▶ │ info text · pair plot · chart ·         │
//!   └──────────┘     │ full report · R report                   │
//!        │           └─────────────────────────────────────────┘
//!        ▼
//!   data (load) → report / plot / bridge (produce) → EdaResponse
//! ```
//!
//! Everything runs synchronously inside [`EdaHandler::handle`]; artifacts are
//! uniquely named temp files handed to the caller.

pub mod bridge;
pub mod color;
pub mod data;
pub mod error;
pub mod handler;
pub mod plot;
pub mod report;
pub mod stats;

pub use bridge::{RScriptSummarizer, Summarizer};
pub use data::model::{CellValue, Column, ColumnType, DataFrame};
pub use error::EdaError;
pub use handler::{EdaHandler, EdaOptions, EdaRequest, EdaResponse};
pub use plot::charts::ChartKind;
pub use stats::Describe;
