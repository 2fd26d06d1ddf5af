//! `hopscore path` — one shortest path between two nodes.

use std::io::{self, Write};

use clap::Args;
use serde::Serialize;

use hopscore::Error;
use hopscore::graph::{GraphStore, Sample};
use hopscore::path::route;

use crate::output::{OutputMode, render};

/// Arguments for `hopscore path`.
#[derive(Args, Debug)]
pub struct PathArgs {
    /// Sample graph to search.
    #[arg(long, default_value = "kingdom")]
    pub sample: Sample,

    /// Source node.
    pub from: String,

    /// Destination node.
    pub to: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct PathReport {
    pub from: String,
    pub to: String,
    /// Forward path, both endpoints included; `None` when unreachable.
    pub path: Option<Vec<String>>,
    pub hops: Option<usize>,
}

pub fn find_path(graph: &GraphStore<String>, from: &str, to: &str) -> Result<PathReport, Error> {
    for node in [from, to] {
        if !graph.contains(&node.to_string()) {
            return Err(Error::UnknownNode(node.to_string()));
        }
    }

    let path = route(graph, &from.to_string(), &to.to_string());
    Ok(PathReport {
        from: from.to_string(),
        to: to.to_string(),
        hops: path.as_ref().map(|p| p.len() - 1),
        path,
    })
}

fn write_text(report: &PathReport, w: &mut dyn Write) -> io::Result<()> {
    match &report.path {
        Some(path) => writeln!(w, "{} ({} hops)", path.join(" -> "), path.len() - 1),
        None => writeln!(w, "{} -> {}: unreachable", report.from, report.to),
    }
}

pub fn run_path(args: &PathArgs, output: OutputMode) -> anyhow::Result<()> {
    let graph = args.sample.build();
    let report = find_path(&graph, &args.from, &args.to)?;
    render(output, &report, write_text)
}
