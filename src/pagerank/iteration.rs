//! Fixed-point iteration estimator

use std::collections::BTreeMap;

use super::{Corpus, RankDistribution};
use crate::utils::normalize_distribution;

/// Iteration stops once no page moves by this much or more in a sweep.
pub const CONVERGENCE_THRESHOLD: f64 = 0.001;

/// Upper bound on sweeps; a periodic corpus with no teleport never settles.
pub const MAX_SWEEPS: usize = 1_000;

/// Final ranks along with how the iteration went
#[derive(Debug, Clone, PartialEq)]
pub struct IterationReport {
    pub ranks: RankDistribution,
    /// Number of full sweeps performed
    pub sweeps: usize,
    /// Largest per-page change in the final sweep
    pub final_delta: f64,
    /// Whether the final change fell below the threshold
    pub converged: bool,
}

/// Compute PageRank by iterating the PageRank formula until it converges.
///
/// Convergence uses [`CONVERGENCE_THRESHOLD`]; see [`iterate_pagerank_with`].
pub fn iterate_pagerank(corpus: &Corpus, damping_factor: f64) -> RankDistribution {
    iterate_pagerank_with(corpus, damping_factor, CONVERGENCE_THRESHOLD).ranks
}

/// Iterate `PR(p) = (1 - d) / N + d * Σ PR(i) / NumLinks(i)` over every page.
///
/// Each sweep reads only the ranks of the previous sweep. A dangling page
/// counts as linking to every page (itself included), so its rank is
/// redistributed instead of lost. Iteration stops when the largest change
/// of any page is below `threshold`, then the ranks are rescaled to sum to
/// exactly 1.
///
/// `threshold` must be positive and `damping_factor` below 1. With a
/// damping factor of 1 a periodic corpus oscillates, so iteration gives up
/// after [`MAX_SWEEPS`] and reports `converged: false`. An empty corpus
/// yields empty ranks.
pub fn iterate_pagerank_with(
    corpus: &Corpus,
    damping_factor: f64,
    threshold: f64,
) -> IterationReport {
    if corpus.is_empty() {
        return IterationReport {
            ranks: RankDistribution::new(),
            sweeps: 0,
            final_delta: 0.0,
            converged: true,
        };
    }

    let num_pages = corpus.len() as f64;
    let parents = incoming_links(corpus);
    let dangling: Vec<&str> = corpus.pages().filter(|page| corpus.is_dangling(page)).collect();
    let teleport = (1.0 - damping_factor) / num_pages;

    let mut ranks: BTreeMap<&str, f64> =
        corpus.pages().map(|page| (page, 1.0 / num_pages)).collect();
    let mut sweeps = 0;
    let mut delta = f64::INFINITY;

    while delta >= threshold && sweeps < MAX_SWEEPS {
        let previous = ranks.clone();
        let dangling_share: f64 =
            dangling.iter().map(|page| previous[page]).sum::<f64>() / num_pages;

        delta = 0.0;
        for (page, rank) in ranks.iter_mut() {
            let linked: f64 = parents
                .get(page)
                .into_iter()
                .flatten()
                .map(|&(parent, out_degree)| previous[parent] / out_degree as f64)
                .sum();
            *rank = teleport + damping_factor * (linked + dangling_share);
            delta = delta.max((*rank - previous[page]).abs());
        }
        sweeps += 1;
    }

    let mut ranks: RankDistribution = ranks
        .into_iter()
        .map(|(page, rank)| (page.to_string(), rank))
        .collect();
    normalize_distribution(&mut ranks);

    let converged = delta < threshold;
    if converged {
        tracing::debug!(sweeps, final_delta = delta, "iterated PageRank converged");
    } else {
        tracing::warn!(
            sweeps,
            final_delta = delta,
            damping_factor,
            "iterated PageRank did not converge"
        );
    }

    IterationReport {
        ranks,
        sweeps,
        final_delta: delta,
        converged,
    }
}

/// Map each page to the pages linking to it, paired with each parent's out-degree.
fn incoming_links(corpus: &Corpus) -> BTreeMap<&str, Vec<(&str, usize)>> {
    let mut parents: BTreeMap<&str, Vec<(&str, usize)>> = BTreeMap::new();
    for (page, links) in corpus.iter() {
        for link in links {
            parents
                .entry(link.as_str())
                .or_default()
                .push((page, links.len()));
        }
    }
    parents
}
