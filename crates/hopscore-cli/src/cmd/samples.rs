//! `hopscore samples` — list the built-in graphs.

use std::io::Write;

use serde::Serialize;

use hopscore::graph::Sample;

use crate::output::{OutputMode, render};

#[derive(Debug, Clone, Serialize)]
pub struct SampleInfo {
    pub name: &'static str,
    pub nodes: usize,
    pub edges: usize,
}

pub fn sample_infos() -> Vec<SampleInfo> {
    Sample::ALL
        .into_iter()
        .map(|sample| {
            let g = sample.build();
            SampleInfo {
                name: sample.name(),
                nodes: g.key_count(),
                edges: g.edge_count(),
            }
        })
        .collect()
}

pub fn run_samples(output: OutputMode) -> anyhow::Result<()> {
    render(output, &sample_infos(), |infos, w| {
        for info in infos {
            writeln!(w, "{:<8} nodes={} edges={}", info.name, info.nodes, info.edges)?;
        }
        Ok(())
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_every_sample() {
        let infos = sample_infos();
        let names: Vec<_> = infos.iter().map(|i| i.name).collect();
        assert_eq!(names, vec!["follows", "kingdom", "line"]);
        assert_eq!(infos[1].nodes, 12);
    }
}
