//! triage: turns incident transcripts into insight tables and next steps.

use std::io::Read;
use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use triage_core::TriageConfig;
use triage_runtime::{IncidentReport, Pipeline};

mod args;

use args::{Args, Input};

fn load_config(args: &Args) -> triage_core::Result<TriageConfig> {
    match &args.config {
        Some(path) => TriageConfig::load(path),
        None => TriageConfig::from_env(),
    }
}

async fn read_input(input: &Input) -> std::io::Result<String> {
    match input {
        Input::File(path) => tokio::fs::read_to_string(path).await,
        Input::Stdin => {
            tokio::task::spawn_blocking(|| {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf).map(|_| buf)
            })
            .await
            .map_err(std::io::Error::other)?
        }
    }
}

fn analyze(pipeline: &Pipeline, text: &str, category: Option<&str>) -> anyhow::Result<IncidentReport> {
    match category {
        Some(label) => Ok(pipeline.analyze(text, label)),
        None => Ok(pipeline.classify_and_analyze(text)?),
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so --json output stays clean
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = match args::parse(std::env::args().skip(1)) {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{}", msg);
            std::process::exit(1);
        }
    };
    if args.help {
        println!("{}", args::USAGE);
        return Ok(());
    }

    let config = load_config(&args)?;
    let pipeline = Arc::new(Pipeline::heuristic(config)?);

    // One blocking task per transcript; results are printed in argument order.
    let mut tasks = Vec::with_capacity(args.inputs.len());
    for input in &args.inputs {
        let name = input.display_name();
        let text = match read_input(input).await {
            Ok(text) => text,
            Err(e) => {
                error!("Failed to read {}: {}", name, e);
                tasks.push((name, None));
                continue;
            }
        };
        let pipeline = pipeline.clone();
        let category = args.category.clone();
        let handle = tokio::task::spawn_blocking(move || {
            analyze(&pipeline, &text, category.as_deref())
        });
        tasks.push((name, Some(handle)));
    }

    let mut failed = 0usize;
    let mut reports = Vec::new();
    for (name, handle) in tasks {
        let Some(handle) = handle else {
            failed += 1;
            continue;
        };
        match handle.await? {
            Ok(report) => reports.push((name, report)),
            Err(e) => {
                error!("Failed to analyze {}: {}", name, e);
                failed += 1;
            }
        }
    }

    if args.json {
        let out: Vec<serde_json::Value> = reports
            .iter()
            .map(|(name, report)| serde_json::json!({ "source": name, "report": report }))
            .collect();
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else {
        for (name, report) in &reports {
            println!("# {}", name);
            println!();
            print!("{}", report.render());
            println!();
        }
    }

    info!("Processed {} transcripts ({} failed)", reports.len() + failed, failed);
    if failed > 0 {
        std::process::exit(1);
    }
    Ok(())
}
