//! PageRank command - Rank the pages of an HTML corpus

use std::{
    fs::File,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use clap::Parser;
use rand::{SeedableRng, rngs::StdRng};
use serde::Serialize;

use crate::{
    cli::{
        config::{PageRankOverrides, resolve_pagerank_config},
        output::{print_kv, print_ranks},
    },
    pagerank::{HtmlLinkExtractor, RankDistribution, crawl, iterate_pagerank_with, sample_pagerank},
};

#[derive(Parser, Debug)]
#[command(about = "Rank the pages of an HTML corpus")]
pub struct PageRankArgs {
    /// Directory holding the corpus `.html` pages
    pub corpus: PathBuf,

    /// Damping factor (probability of following a link)
    #[arg(long, short = 'd')]
    pub damping: Option<f64>,

    /// Number of random surfer samples
    #[arg(long, short = 'n')]
    pub samples: Option<usize>,

    /// Random seed for reproducible sampling
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with PageRank parameters (flags take precedence)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Export both rankings to a `.json` or `.csv` file
    #[arg(long)]
    pub export: Option<PathBuf>,
}

/// One exported row: both estimates for a page
#[derive(Debug, Serialize, PartialEq)]
pub struct RankRecord {
    pub page: String,
    pub sampled: f64,
    pub iterated: f64,
}

pub fn execute(args: PageRankArgs) -> Result<()> {
    let overrides = PageRankOverrides {
        damping: args.damping,
        samples: args.samples,
        seed: args.seed,
    };
    let config = resolve_pagerank_config(args.config.as_deref(), &overrides)?;

    let corpus = crawl(&args.corpus, &HtmlLinkExtractor)
        .with_context(|| format!("crawling corpus {}", args.corpus.display()))?;

    let mut rng = match config.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random::<u64>()),
    };

    let sampled = sample_pagerank(&corpus, config.damping, config.samples, &mut rng);
    print_ranks(
        &format!("PageRank Results from Sampling (n = {})", config.samples),
        &sampled,
    );

    let report = iterate_pagerank_with(&corpus, config.damping, config.threshold);
    print_ranks("PageRank Results from Iteration", &report.ranks);
    tracing::info!(
        sweeps = report.sweeps,
        converged = report.converged,
        "iteration finished"
    );

    if let Some(path) = args.export {
        let records = merge_rankings(&sampled, &report.ranks);
        export_rankings(&records, &path)?;
        println!();
        print_kv("Exported", &path.display().to_string());
    }

    Ok(())
}

/// Pair the two estimates page by page
pub fn merge_rankings(sampled: &RankDistribution, iterated: &RankDistribution) -> Vec<RankRecord> {
    iterated
        .iter()
        .map(|(page, &iterated)| RankRecord {
            page: page.clone(),
            sampled: sampled.get(page).copied().unwrap_or(0.0),
            iterated,
        })
        .collect()
}

/// Write rank records as CSV when the path ends in `.csv`, JSON otherwise
pub fn export_rankings(records: &[RankRecord], path: &Path) -> Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;

    let is_csv = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));
    if is_csv {
        let mut writer = csv::Writer::from_writer(file);
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
    } else {
        serde_json::to_writer_pretty(file, records)?;
    }
    Ok(())
}
