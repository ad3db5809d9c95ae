use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::bridge::{RScriptSummarizer, Summarizer};
use crate::data::loader;
use crate::error::EdaError;
use crate::plot::{self, charts::ChartKind};
use crate::report;

// ---------------------------------------------------------------------------
// Request / response types
// ---------------------------------------------------------------------------

/// One EDA request: a CSV file (optional, see the guard below) plus the five
/// independent options.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EdaRequest {
    pub csv_path: Option<PathBuf>,
    #[serde(default)]
    pub options: EdaOptions,
}

/// The five request options. Each one controls exactly one response slot.
/// `chart` is `None` when the submitted chart name was unrecognized, which
/// renders a blank figure instead of failing.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct EdaOptions {
    #[serde(default)]
    pub show_info: bool,
    #[serde(default)]
    pub show_plot: bool,
    #[serde(default)]
    pub chart: Option<ChartKind>,
    #[serde(default)]
    pub full_report: bool,
    #[serde(default)]
    pub r_report: bool,
}

/// The five response slots, each mapping 1:1 to one producer. Artifact files
/// are uniquely named per request and are the caller's to serve and remove.
#[derive(Debug, Default, Serialize)]
pub struct EdaResponse {
    pub info_text: String,
    pub pair_plot: Option<PathBuf>,
    pub chart: Option<PathBuf>,
    pub report: Option<PathBuf>,
    pub r_report: Option<PathBuf>,
}

// ---------------------------------------------------------------------------
// Handler
// ---------------------------------------------------------------------------

/// The EDA request handler. Holds the foreign-runtime summarizer behind its
/// trait so callers (and tests) can substitute one.
pub struct EdaHandler {
    summarizer: Box<dyn Summarizer>,
}

impl Default for EdaHandler {
    fn default() -> Self {
        EdaHandler::new(Box::new(RScriptSummarizer::default()))
    }
}

impl EdaHandler {
    pub fn new(summarizer: Box<dyn Summarizer>) -> Self {
        EdaHandler { summarizer }
    }

    /// Process one request synchronously and assemble the response.
    ///
    /// The missing-file guard runs first, before any option flag is
    /// inspected, and is the only handled error path: it yields an `Ok`
    /// response carrying just the guard message. Everything downstream is
    /// fail-fast; a failing producer fails the whole request and no partial
    /// artifact set is returned.
    pub fn handle(&self, request: &EdaRequest) -> Result<EdaResponse, EdaError> {
        let Some(csv_path) = &request.csv_path else {
            return Ok(EdaResponse {
                info_text: EdaError::InputMissing.to_string(),
                ..EdaResponse::default()
            });
        };

        let df = loader::load_csv(csv_path)?;
        log::info!(
            "handling EDA request: {} rows x {} columns, options {:?}",
            df.n_rows(),
            df.n_cols(),
            request.options
        );

        let mut response = EdaResponse::default();

        if request.options.show_info {
            response.info_text = report::info::render(&df)?;
            let path = artifact_path("pairplot", ".png")?;
            plot::pairgrid::render(&df, &path)?;
            response.pair_plot = Some(path);
        }

        if request.options.show_plot {
            let path = artifact_path("chart", ".png")?;
            plot::charts::render(&df, request.options.chart, &path)?;
            response.chart = Some(path);
        }

        if request.options.full_report {
            let path = artifact_path("report", ".txt")?;
            fs::write(&path, report::full::render(&df))?;
            response.report = Some(path);
        }

        if request.options.r_report {
            let text = self.summarizer.summarize(&df)?;
            let path = artifact_path("r-report", ".txt")?;
            fs::write(&path, text)?;
            response.r_report = Some(path);
        }

        Ok(response)
    }
}

/// A uniquely named artifact file in the system temp directory. The file is
/// persisted (not deleted on drop): the response hands it to the caller.
/// Unique names keep concurrent requests from colliding; nothing else
/// serializes them.
fn artifact_path(tag: &str, suffix: &str) -> Result<PathBuf, EdaError> {
    let (_file, path) = tempfile::Builder::new()
        .prefix(&format!("eda-{tag}-"))
        .suffix(suffix)
        .tempfile()?
        .keep()
        .map_err(|e| EdaError::Io(e.error))?;
    Ok(path)
}
