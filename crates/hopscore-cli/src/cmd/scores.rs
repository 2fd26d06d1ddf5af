//! `hopscore scores` — closeness centrality for a sample graph.
//!
//! Policy resolution, highest wins:
//! 1. `--unreachable` / `--zero-distance`
//! 2. `[closeness]` section of `--config <file>`
//! 3. Library defaults (`cap`, `zero`)

use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use serde::Serialize;

use hopscore::config::{ClosenessConfig, UnreachablePolicy, ZeroDistancePolicy, load_config};
use hopscore::graph::Sample;
use hopscore::metrics::closeness::{ClosenessResult, closeness_centrality, node_closeness};

use crate::output::{OutputMode, render};

/// Arguments for `hopscore scores`.
#[derive(Args, Debug)]
pub struct ScoresArgs {
    /// Sample graph to score.
    #[arg(long, default_value = "follows")]
    pub sample: Sample,

    /// TOML file with a `[closeness]` section.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// How unreachable nodes count: cap, exclude, zero.
    #[arg(long)]
    pub unreachable: Option<UnreachablePolicy>,

    /// What a zero distance sum scores: zero, omit.
    #[arg(long)]
    pub zero_distance: Option<ZeroDistancePolicy>,

    /// Decimal places in text output.
    #[arg(long, default_value_t = 6)]
    pub precision: usize,

    /// Most central first instead of graph order.
    #[arg(long)]
    pub sort: bool,

    /// Score only this node.
    #[arg(long)]
    pub node: Option<String>,
}

/// One scored line.
#[derive(Debug, Clone, Serialize)]
pub struct ScoreRow {
    pub node: String,
    pub score: Option<f64>,
    pub degenerate: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScoresReport {
    pub sample: String,
    pub unreachable: String,
    pub zero_distance: String,
    pub unreachable_pairs: usize,
    pub rows: Vec<ScoreRow>,
}

pub fn resolve_config(args: &ScoresArgs) -> anyhow::Result<ClosenessConfig> {
    let mut cfg = match &args.config {
        Some(path) => load_config(path)?.closeness,
        None => ClosenessConfig::default(),
    };
    if let Some(policy) = args.unreachable {
        cfg.unreachable = policy;
    }
    if let Some(policy) = args.zero_distance {
        cfg.zero_distance = policy;
    }
    Ok(cfg)
}

pub fn build_report(
    sample: Sample,
    result: &ClosenessResult<String>,
    sort: bool,
) -> ScoresReport {
    let rows = if sort {
        let mut rows: Vec<ScoreRow> = result
            .ranked()
            .into_iter()
            .map(|(node, score)| ScoreRow {
                node: node.clone(),
                score: Some(score),
                degenerate: result.is_degenerate(node),
            })
            .collect();
        // Omitted nodes have no rank; list them last.
        rows.extend(
            result
                .nodes
                .iter()
                .filter(|node| result.score(node).is_none())
                .map(|node| ScoreRow {
                    node: node.clone(),
                    score: None,
                    degenerate: result.is_degenerate(node),
                }),
        );
        rows
    } else {
        result
            .nodes
            .iter()
            .map(|node| ScoreRow {
                node: node.clone(),
                score: result.score(node),
                degenerate: result.is_degenerate(node),
            })
            .collect()
    };

    ScoresReport {
        sample: sample.to_string(),
        unreachable: result.config.unreachable.to_string(),
        zero_distance: result.config.zero_distance.to_string(),
        unreachable_pairs: result.unreachable_pairs,
        rows,
    }
}

pub fn write_text(report: &ScoresReport, precision: usize, w: &mut dyn Write) -> io::Result<()> {
    for row in &report.rows {
        match row.score {
            Some(score) if row.degenerate => {
                writeln!(w, "{}: {score:.precision$} (degenerate)", row.node)?;
            }
            Some(score) => writeln!(w, "{}: {score:.precision$}", row.node)?,
            None => writeln!(w, "{}: undefined", row.node)?,
        }
    }
    Ok(())
}

pub fn run_scores(args: &ScoresArgs, output: OutputMode) -> anyhow::Result<()> {
    let cfg = resolve_config(args)?;
    let graph = args.sample.build();

    if let Some(node) = &args.node {
        let single = node_closeness(&graph, node, &cfg)
            .with_context(|| format!("cannot score node in sample '{}'", args.sample))?;
        let report = ScoresReport {
            sample: args.sample.to_string(),
            unreachable: cfg.unreachable.to_string(),
            zero_distance: cfg.zero_distance.to_string(),
            unreachable_pairs: single.unreachable,
            rows: vec![ScoreRow {
                node: node.clone(),
                score: single.score,
                degenerate: single.is_degenerate(),
            }],
        };
        return render(output, &report, |r, w| write_text(r, args.precision, w));
    }

    let result = closeness_centrality(&graph, &cfg);
    let report = build_report(args.sample, &result, args.sort);
    render(output, &report, |r, w| write_text(r, args.precision, w))
}
