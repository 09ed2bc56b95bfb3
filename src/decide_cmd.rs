//! Decide command: classify one application's score against the bands.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use peerscope_decision::Decision;
use peerscope_io::read_applicants;

use crate::cli::DecideArgs;
use crate::config::PeerscopeConfig;
use crate::convert;

/// JSON report for a single decision.
#[derive(Debug, Serialize)]
struct DecideReport {
    target_id: u64,
    score: f64,
    decision: Decision,
    threshold: f64,
    review_upper: f64,
}

/// Run the decide pipeline.
pub fn run(args: DecideArgs) -> Result<()> {
    let _cmd = info_span!("decide").entered();

    let config = PeerscopeConfig::load_or_default(&args.config)?;
    let input = convert::resolve_input(args.input, &config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let policy = convert::build_decision_policy(&config.decision)?;

    info!(path = %input.display(), "reading applicant table");
    let table = read_applicants(&input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;

    let score = table
        .score(args.id)
        .with_context(|| format!("id {} not found in {}", args.id, input.display()))?;
    let decision = policy
        .classify(score)
        .with_context(|| format!("failed to classify id {}", args.id))?;
    info!(id = args.id, score, ?decision, "classified");

    let report = DecideReport {
        target_id: args.id,
        score,
        decision,
        threshold: policy.threshold(),
        review_upper: policy.review_upper(),
    };
    let json = serde_json::to_string_pretty(&report).context("failed to serialize report")?;

    match args.output {
        Some(path) => {
            std::fs::write(&path, &json)
                .with_context(|| format!("failed to write report: {}", path.display()))?;
            info!(path = %path.display(), "report written");
        }
        None => println!("{json}"),
    }

    Ok(())
}
