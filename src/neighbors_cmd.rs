//! Neighbors command: select and report the peer window for an application.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{info, info_span};

use peerscope_decision::Decision;
use peerscope_io::read_applicants;
use peerscope_neighbors::{
    NeighborWindow, ScoredCollection, ScoredEntity, WindowMode, select_neighbors,
};

use crate::cli::NeighborsArgs;
use crate::config::PeerscopeConfig;
use crate::convert;

/// JSON report for a peer window query.
#[derive(Debug, Serialize)]
struct NeighborsReport {
    target_id: u64,
    target_score: f64,
    target_rank: usize,
    requested_window: usize,
    mode: &'static str,
    entries: Vec<EntryReport>,
}

/// One window entry, annotated with its global rank and decision class.
#[derive(Debug, Serialize)]
struct EntryReport {
    id: u64,
    rank: usize,
    score: f64,
    decision: Decision,
    is_target: bool,
}

pub(crate) fn mode_str(mode: WindowMode) -> &'static str {
    match mode {
        WindowMode::Windowed => "windowed",
        WindowMode::DegradedFullSort => "degraded_full_sort",
    }
}

/// Builds the scored collection from a table's id and score columns.
pub(crate) fn scored_collection(
    ids: &[u64],
    scores: &[f64],
) -> Result<ScoredCollection, peerscope_neighbors::SelectError> {
    let entities = ids
        .iter()
        .zip(scores.iter())
        .map(|(&id, &score)| ScoredEntity::new(id, score))
        .collect();
    ScoredCollection::new(entities)
}

fn build_report(
    window: &NeighborWindow,
    target_id: u64,
    requested_window: usize,
    policy: &peerscope_decision::DecisionPolicy,
) -> Result<NeighborsReport> {
    let entries = window
        .entries()
        .iter()
        .enumerate()
        .map(|(offset, e)| {
            Ok(EntryReport {
                id: e.id(),
                rank: window.first_rank() + offset,
                score: e.score(),
                decision: policy.classify(e.score())?,
                is_target: e.id() == target_id,
            })
        })
        .collect::<Result<Vec<_>, peerscope_decision::DecisionError>>()?;

    let target_score = window
        .entries()
        .iter()
        .find(|e| e.id() == target_id)
        .map(|e| e.score())
        .context("window must contain the target")?;

    Ok(NeighborsReport {
        target_id,
        target_score,
        target_rank: window.target_rank(),
        requested_window,
        mode: mode_str(window.mode()),
        entries,
    })
}

/// Run the neighbors pipeline.
pub fn run(args: NeighborsArgs) -> Result<()> {
    let _cmd = info_span!("neighbors").entered();

    let config = PeerscopeConfig::load_or_default(&args.config)?;
    let input = convert::resolve_input(args.input, &config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let window_cfg = convert::build_window_config(&config.window, args.window);
    let policy = convert::build_decision_policy(&config.decision)?;

    info!(path = %input.display(), "reading applicant table");
    let table = read_applicants(&input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;

    let collection = scored_collection(table.ids(), table.scores())
        .context("applicant table is not a valid scored collection")?;

    let window = select_neighbors(&collection, args.id, &window_cfg)
        .with_context(|| format!("failed to select neighbors for id {}", args.id))?;
    info!(
        n_entries = window.len(),
        target_rank = window.target_rank(),
        mode = mode_str(window.mode()),
        "peer window selected"
    );

    let report = build_report(&window, args.id, window_cfg.window_size(), &policy)?;
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
