//! Integration tests for the request/response contract: the missing-file
//! guard, option independence, and report production. Chart-rendering and
//! Rscript-dependent paths are exercised behind `#[ignore]` since headless
//! environments often lack fonts or an R installation.

use std::fs;
use std::io::Write;
use std::path::PathBuf;

use csv_eda::{
    ChartKind, DataFrame, Describe, EdaHandler, EdaOptions, EdaRequest, EdaError, Summarizer,
};

/// Summarizer stand-in that returns a fixed text.
struct CannedSummarizer(&'static str);

impl Summarizer for CannedSummarizer {
    fn summarize(&self, _df: &DataFrame) -> Result<String, EdaError> {
        Ok(self.0.to_string())
    }
}

fn sample_csv() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(
        b"species,bill_length_mm,island,body_mass_g\n\
          Adelie,39.1,Torgersen,3750\n\
          Adelie,39.5,Torgersen,3800\n\
          Gentoo,46.1,Biscoe,4500\n\
          Gentoo,48.7,Biscoe,4700\n\
          Chinstrap,,Dream,3700\n",
    )
    .unwrap();
    file.flush().unwrap();
    file
}

fn handler_with_canned_bridge() -> EdaHandler {
    EdaHandler::new(Box::new(CannedSummarizer("canned summary\n")))
}

fn cleanup(paths: &[&Option<PathBuf>]) {
    for path in paths.iter().filter_map(|p| p.as_ref()) {
        let _ = fs::remove_file(path);
    }
}

#[test]
fn missing_file_short_circuits_before_any_option() {
    let request = EdaRequest {
        csv_path: None,
        options: EdaOptions {
            show_info: true,
            show_plot: true,
            chart: Some(ChartKind::Histogram),
            full_report: true,
            r_report: true,
        },
    };
    let response = handler_with_canned_bridge().handle(&request).unwrap();

    assert_eq!(response.info_text, "Please upload a CSV file");
    assert!(response.pair_plot.is_none());
    assert!(response.chart.is_none());
    assert!(response.report.is_none());
    assert!(response.r_report.is_none());
}

#[test]
fn all_options_off_produces_an_empty_response() {
    let csv = sample_csv();
    let request = EdaRequest {
        csv_path: Some(csv.path().to_path_buf()),
        options: EdaOptions::default(),
    };
    let response = handler_with_canned_bridge().handle(&request).unwrap();

    assert!(response.info_text.is_empty());
    assert!(response.pair_plot.is_none());
    assert!(response.chart.is_none());
    assert!(response.report.is_none());
    assert!(response.r_report.is_none());
}

#[test]
fn report_flags_control_only_their_own_slots() {
    let csv = sample_csv();
    let request = EdaRequest {
        csv_path: Some(csv.path().to_path_buf()),
        options: EdaOptions {
            full_report: true,
            r_report: true,
            ..EdaOptions::default()
        },
    };
    let response = handler_with_canned_bridge().handle(&request).unwrap();

    assert!(response.info_text.is_empty());
    assert!(response.pair_plot.is_none());
    assert!(response.chart.is_none());

    let report = fs::read_to_string(response.report.as_ref().unwrap()).unwrap();
    assert!(report.starts_with("EDA report (Rust)\n"));
    assert!(report.contains("bill_length_mm"));
    assert!(report.contains("species"));

    let r_report = fs::read_to_string(response.r_report.as_ref().unwrap()).unwrap();
    assert_eq!(r_report, "canned summary\n");

    cleanup(&[&response.report, &response.r_report]);
}

#[test]
fn r_report_alone_leaves_the_native_report_absent() {
    let csv = sample_csv();
    let request = EdaRequest {
        csv_path: Some(csv.path().to_path_buf()),
        options: EdaOptions {
            r_report: true,
            ..EdaOptions::default()
        },
    };
    let response = handler_with_canned_bridge().handle(&request).unwrap();

    assert!(response.report.is_none());
    assert!(response.r_report.is_some());
    cleanup(&[&response.r_report]);
}

#[test]
fn malformed_csv_fails_the_whole_request() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(b"a,b\n1,2\n3\n").unwrap();
    file.flush().unwrap();

    let request = EdaRequest {
        csv_path: Some(file.path().to_path_buf()),
        options: EdaOptions {
            full_report: true,
            ..EdaOptions::default()
        },
    };
    let err = handler_with_canned_bridge().handle(&request).unwrap_err();
    assert!(matches!(err, EdaError::Parse(_)));
}

#[test]
fn failing_bridge_fails_the_whole_request() {
    struct FailingSummarizer;
    impl Summarizer for FailingSummarizer {
        fn summarize(&self, _df: &DataFrame) -> Result<String, EdaError> {
            Err(EdaError::Bridge("runtime unavailable".into()))
        }
    }

    let csv = sample_csv();
    let request = EdaRequest {
        csv_path: Some(csv.path().to_path_buf()),
        options: EdaOptions {
            r_report: true,
            ..EdaOptions::default()
        },
    };
    let err = EdaHandler::new(Box::new(FailingSummarizer))
        .handle(&request)
        .unwrap_err();
    assert!(matches!(err, EdaError::Bridge(_)));
}

#[test]
#[ignore = "font rendering not available in headless test environments"]
fn show_info_produces_text_and_pair_plot() {
    use image::GenericImageView;

    let csv = sample_csv();
    let request = EdaRequest {
        csv_path: Some(csv.path().to_path_buf()),
        options: EdaOptions {
            show_info: true,
            ..EdaOptions::default()
        },
    };
    let response = handler_with_canned_bridge().handle(&request).unwrap();

    assert!(response.info_text.contains("### DataFrame Info"));
    assert!(response
        .info_text
        .contains("### DataFrame Describe (Transposed)"));
    // one describe row per numeric column
    let table_rows = response
        .info_text
        .lines()
        .filter(|l| l.contains("bill_length_mm") || l.contains("body_mass_g"))
        .count();
    assert!(table_rows >= 2);

    let img = image::open(response.pair_plot.as_ref().unwrap()).unwrap();
    assert_eq!(img.dimensions(), (900, 900));

    assert!(response.chart.is_none());
    assert!(response.report.is_none());
    assert!(response.r_report.is_none());
    cleanup(&[&response.pair_plot]);
}

#[test]
#[ignore = "font rendering not available in headless test environments"]
fn show_plot_histogram_produces_only_the_chart_slot() {
    let csv = sample_csv();
    let request = EdaRequest {
        csv_path: Some(csv.path().to_path_buf()),
        options: EdaOptions {
            show_plot: true,
            chart: Some(ChartKind::Histogram),
            ..EdaOptions::default()
        },
    };
    let response = handler_with_canned_bridge().handle(&request).unwrap();

    assert!(response.info_text.is_empty());
    assert!(response.pair_plot.is_none());
    assert!(response.chart.is_some());
    assert!(response.report.is_none());
    assert!(response.r_report.is_none());
    cleanup(&[&response.chart]);
}

#[test]
fn scatter_with_one_numeric_column_still_produces_an_image() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(b"name,score\nada,1\ngrace,2\n").unwrap();
    file.flush().unwrap();

    let request = EdaRequest {
        csv_path: Some(file.path().to_path_buf()),
        options: EdaOptions {
            show_plot: true,
            chart: Some(ChartKind::Scatter),
            ..EdaOptions::default()
        },
    };
    let response = handler_with_canned_bridge().handle(&request).unwrap();

    let chart = response.chart.as_ref().unwrap();
    assert!(chart.metadata().unwrap().len() > 0);
    cleanup(&[&response.chart]);
}

#[test]
#[ignore = "requires a local R installation with Rscript on PATH"]
fn native_and_r_reports_agree_on_the_mean() {
    let mut file = tempfile::Builder::new().suffix(".csv").tempfile().unwrap();
    file.write_all(b"x,y\n1,10\n2,20\n3,30\n4,40\n").unwrap();
    file.flush().unwrap();

    let request = EdaRequest {
        csv_path: Some(file.path().to_path_buf()),
        options: EdaOptions {
            r_report: true,
            ..EdaOptions::default()
        },
    };
    let response = EdaHandler::default().handle(&request).unwrap();
    let r_text = fs::read_to_string(response.r_report.as_ref().unwrap()).unwrap();

    // R's summary() prints one "Mean : v" cell per column
    let mut r_means: Vec<f64> = r_text
        .lines()
        .flat_map(|l| l.split("Mean").skip(1))
        .filter_map(|chunk| {
            let tail = chunk.trim_start().strip_prefix(':')?;
            tail.trim()
                .split_whitespace()
                .next()?
                .parse::<f64>()
                .ok()
        })
        .collect();
    r_means.sort_by(f64::total_cmp);

    let mut native_means = vec![
        Describe::from_values(&[1.0, 2.0, 3.0, 4.0]).mean,
        Describe::from_values(&[10.0, 20.0, 30.0, 40.0]).mean,
    ];
    native_means.sort_by(f64::total_cmp);

    assert_eq!(r_means.len(), native_means.len());
    for (r, native) in r_means.iter().zip(&native_means) {
        assert!((r - native).abs() <= 1e-6 * native.abs().max(1.0));
    }
    cleanup(&[&response.r_report]);
}
