use std::path::PathBuf;

use anyhow::Context;
use csv_eda::{EdaHandler, EdaOptions, EdaRequest};

fn print_usage() {
    eprintln!(
        "Usage: csv-eda [FILE.csv] [--info] [--plot <histogram|bar|pie|scatter>] \
         [--report] [--r-report] [--json]"
    );
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let mut csv_path: Option<PathBuf> = None;
    let mut options = EdaOptions::default();
    let mut json_output = false;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--info" => options.show_info = true,
            "--plot" => {
                options.show_plot = true;
                // an unrecognized chart name falls through to a blank figure
                options.chart = args.next().as_deref().and_then(|s| s.parse().ok());
            }
            "--report" => options.full_report = true,
            "--r-report" => options.r_report = true,
            "--json" => json_output = true,
            "--help" | "-h" => {
                print_usage();
                return Ok(());
            }
            other if csv_path.is_none() && !other.starts_with('-') => {
                csv_path = Some(PathBuf::from(other));
            }
            other => anyhow::bail!("unrecognized argument: {other}"),
        }
    }

    let request = EdaRequest { csv_path, options };
    let response = EdaHandler::default()
        .handle(&request)
        .context("EDA request failed")?;

    if json_output {
        println!("{}", serde_json::to_string_pretty(&response)?);
        return Ok(());
    }

    if !response.info_text.is_empty() {
        println!("{}", response.info_text);
    }
    for (label, artifact) in [
        ("pair plot", &response.pair_plot),
        ("chart", &response.chart),
        ("report", &response.report),
        ("R report", &response.r_report),
    ] {
        if let Some(path) = artifact {
            println!("{label}: {}", path.display());
        }
    }

    Ok(())
}
