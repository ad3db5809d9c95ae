use std::io::Write;
use std::process::{Command, Stdio};

use crate::data::model::DataFrame;
use crate::error::EdaError;

// ---------------------------------------------------------------------------
// Foreign-runtime summary bridge
// ---------------------------------------------------------------------------

/// A second, independent statistics ecosystem that can summarize a whole
/// dataset in one synchronous call. The handler writes the returned text
/// verbatim into the report file.
pub trait Summarizer {
    fn summarize(&self, df: &DataFrame) -> Result<String, EdaError>;
}

/// Bridges to the R ecosystem by invoking the `Rscript` CLI as a subprocess:
/// the frame is handed over through a temporary CSV file and the printed
/// output of R's standard `summary()` routine is captured from stdout.
///
/// Any failure — missing executable, non-zero exit, undecodable output —
/// surfaces as [`EdaError::Bridge`] and fails the whole request.
pub struct RScriptSummarizer {
    command: String,
}

impl Default for RScriptSummarizer {
    fn default() -> Self {
        RScriptSummarizer {
            command: "Rscript".to_string(),
        }
    }
}

impl RScriptSummarizer {
    /// Use a different executable name or path instead of `Rscript`.
    pub fn new(command: impl Into<String>) -> Self {
        RScriptSummarizer {
            command: command.into(),
        }
    }

    fn script(csv_path: &std::path::Path) -> String {
        // Debug-quote the path so quotes and backslashes survive into R.
        format!(
            "print(summary(read.csv({:?}, check.names = FALSE)))",
            csv_path.to_string_lossy()
        )
    }
}

impl Summarizer for RScriptSummarizer {
    fn summarize(&self, df: &DataFrame) -> Result<String, EdaError> {
        let mut csv_file = tempfile::Builder::new()
            .prefix("eda-bridge-")
            .suffix(".csv")
            .tempfile()?;
        df.write_csv(&mut csv_file)?;
        csv_file.flush()?;

        let script = Self::script(csv_file.path());
        log::debug!("invoking {} for the dataset summary", self.command);

        let output = Command::new(&self.command)
            .arg("--vanilla")
            .arg("-e")
            .arg(&script)
            .stdin(Stdio::null())
            .output()
            .map_err(|e| EdaError::Bridge(format!("failed to launch {}: {e}", self.command)))?;

        if !output.status.success() {
            return Err(EdaError::Bridge(format!(
                "{} exited with {}: {}",
                self.command,
                output.status,
                String::from_utf8_lossy(&output.stderr).trim()
            )));
        }

        String::from_utf8(output.stdout)
            .map_err(|_| EdaError::Bridge("summary output is not valid UTF-8".to_string()))
    }
}
