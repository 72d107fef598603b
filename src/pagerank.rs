//! PageRank over a corpus of hyperlinked pages
//!
//! Two estimators are provided over the same [`Corpus`]:
//! - [`sample_pagerank`] walks a random surfer through the corpus and counts visits
//! - [`iterate_pagerank`] repeatedly applies the PageRank formula until it converges

pub mod config;
pub mod corpus;
pub mod crawl;
pub mod iteration;
pub mod sampling;
pub mod transition;

use std::collections::BTreeMap;

pub use config::{DAMPING, PageRankConfig, SAMPLES};
pub use corpus::{Corpus, build_corpus};
pub use crawl::{HtmlLinkExtractor, LinkExtractor, crawl};
pub use iteration::{
    CONVERGENCE_THRESHOLD, IterationReport, MAX_SWEEPS, iterate_pagerank, iterate_pagerank_with,
};
pub use sampling::sample_pagerank;
pub use transition::{TransitionModel, transition_model};

/// Estimated PageRank per page, keyed by page name
pub type RankDistribution = BTreeMap<String, f64>;
