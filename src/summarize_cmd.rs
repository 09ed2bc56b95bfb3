//! Summarize command: compare an application's features against its peer
//! window and the full population.

use anyhow::{Context, Result, bail};
use serde::Serialize;
use tracing::{info, info_span};

use peerscope_decision::DecisionBreakdown;
use peerscope_io::{ApplicantTable, read_applicants};
use peerscope_neighbors::select_neighbors;
use peerscope_stats::{FeatureSummary, Histogram};

use crate::cli::SummarizeArgs;
use crate::config::PeerscopeConfig;
use crate::convert;
use crate::neighbors_cmd::{mode_str, scored_collection};

/// JSON report comparing the target, its peers, and the population.
#[derive(Debug, Serialize)]
struct SummarizeReport {
    target_id: u64,
    target_score: f64,
    target_rank: usize,
    window_mode: &'static str,
    peer_ids: Vec<u64>,
    population_decisions: DecisionBreakdown,
    peer_decisions: DecisionBreakdown,
    features: Vec<FeatureReport>,
}

/// One feature's comparison: summaries plus the histograms the dashboard
/// renders, each with the bin holding the target's value.
#[derive(Debug, Serialize)]
struct FeatureReport {
    name: String,
    target_value: f64,
    population: FeatureSummary,
    peers: FeatureSummary,
    population_histogram: HistogramReport,
    peer_histogram: HistogramReport,
}

#[derive(Debug, Serialize)]
struct HistogramReport {
    edges: Vec<f64>,
    counts: Vec<usize>,
    target_bin: usize,
}

fn histogram_report(data: &[f64], bins: usize, target_value: f64) -> Result<HistogramReport> {
    let h = Histogram::new(data, bins)?;
    Ok(HistogramReport {
        target_bin: h.locate(target_value),
        edges: h.edges().to_vec(),
        counts: h.counts().to_vec(),
    })
}

/// Resolves which features to report: the CLI list, else the config list,
/// else every feature column.
fn resolve_features(
    cli: Option<Vec<String>>,
    config: &Option<Vec<String>>,
    table: &ApplicantTable,
) -> Result<Vec<String>> {
    let selected = cli
        .or_else(|| config.clone())
        .unwrap_or_else(|| table.feature_names().to_vec());
    for name in &selected {
        if !table.feature_names().contains(name) {
            bail!("feature '{name}' not found in table");
        }
    }
    Ok(selected)
}

/// Run the summarize pipeline.
pub fn run(args: SummarizeArgs) -> Result<()> {
    let _cmd = info_span!("summarize").entered();

    let config = PeerscopeConfig::load_or_default(&args.config)?;
    let input = convert::resolve_input(args.input, &config.io)?;
    let reader_cfg = convert::build_reader_config(&config.io)?;
    let window_cfg = convert::build_window_config(&config.window, args.window);
    let policy = convert::build_decision_policy(&config.decision)?;
    let bins = args.bins.unwrap_or(config.summary.bins);

    info!(path = %input.display(), "reading applicant table");
    let table = read_applicants(&input, &reader_cfg)
        .with_context(|| format!("failed to read CSV: {}", input.display()))?;

    let collection = scored_collection(table.ids(), table.scores())
        .context("applicant table is not a valid scored collection")?;
    let window = select_neighbors(&collection, args.id, &window_cfg)
        .with_context(|| format!("failed to select neighbors for id {}", args.id))?;

    let peer_ids: Vec<u64> = window.entries().iter().map(|e| e.id()).collect();
    let peer_scores: Vec<f64> = window.entries().iter().map(|e| e.score()).collect();
    let target_score = table
        .score(args.id)
        .context("target id validated by selection")?;

    let features = resolve_features(args.features, &config.summary.features, &table)?;
    info!(
        n_peers = peer_ids.len(),
        n_features = features.len(),
        "building feature comparison"
    );

    let mut feature_reports = Vec::with_capacity(features.len());
    for name in features {
        let population = table
            .feature_column(&name)
            .context("feature names validated above")?;
        let peers = table
            .feature_column_for(&name, &peer_ids)
            .context("feature names validated above")?;
        let target_value = table
            .row(args.id)
            .and_then(|row| {
                table
                    .feature_names()
                    .iter()
                    .position(|n| *n == name)
                    .map(|j| row[j])
            })
            .context("target id validated by selection")?;

        feature_reports.push(FeatureReport {
            population: FeatureSummary::from_slice(&population)
                .with_context(|| format!("failed to summarize population '{name}'"))?,
            peers: FeatureSummary::from_slice(&peers)
                .with_context(|| format!("failed to summarize peers '{name}'"))?,
            population_histogram: histogram_report(&population, bins, target_value)?,
            peer_histogram: histogram_report(&peers, bins, target_value)?,
            name,
            target_value,
        });
    }

    let report = SummarizeReport {
        target_id: args.id,
        target_score,
        target_rank: window.target_rank(),
        window_mode: mode_str(window.mode()),
        peer_ids,
        population_decisions: DecisionBreakdown::tally(table.scores(), &policy)?,
        peer_decisions: DecisionBreakdown::tally(&peer_scores, &policy)?,
        features: feature_reports,
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
