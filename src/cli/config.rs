//! Shared configuration types for CLI commands

use std::path::Path;

use anyhow::{Context, Result};

use crate::pagerank::PageRankConfig;

/// Command-line overrides for a PageRank run
#[derive(Debug, Clone, Default)]
pub struct PageRankOverrides {
    pub damping: Option<f64>,
    pub samples: Option<usize>,
    pub seed: Option<u64>,
}

/// Build the effective PageRank configuration.
///
/// Values come from the JSON file when one is given, then command-line flags
/// take precedence. The result is validated before it is returned.
pub fn resolve_pagerank_config(
    file: Option<&Path>,
    overrides: &PageRankOverrides,
) -> Result<PageRankConfig> {
    let mut config = match file {
        Some(path) => PageRankConfig::from_json_file(path)
            .with_context(|| format!("loading PageRank config from {}", path.display()))?,
        None => PageRankConfig::default(),
    };

    if let Some(damping) = overrides.damping {
        config.damping = damping;
    }
    if let Some(samples) = overrides.samples {
        config.samples = samples;
    }
    if let Some(seed) = overrides.seed {
        config.seed = Some(seed);
    }

    config.validate()?;
    Ok(config)
}
