use thiserror::Error;

/// Closed error taxonomy for the request pipeline.
///
/// Apart from [`EdaError::InputMissing`], which the handler converts into the
/// guard message of an otherwise-empty response, every variant fails the whole
/// request. There is no partial-artifact recovery.
#[derive(Error, Debug)]
pub enum EdaError {
    #[error("Please upload a CSV file")]
    InputMissing,

    #[error("failed to parse dataset: {0}")]
    Parse(#[from] csv::Error),

    #[error("plot precondition unmet: {0}")]
    PlotPrecondition(String),

    #[error("summary bridge failed: {0}")]
    Bridge(String),

    #[error("chart rendering failed: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
