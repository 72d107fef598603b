//! Random surfer sampling estimator

use std::collections::BTreeMap;

use rand::{Rng, prelude::IndexedRandom};

use super::{Corpus, RankDistribution, transition_model};
use crate::utils::{distribution_sum, sums_to_one, weighted_sample};

/// Estimate PageRank by sampling `n` pages from a random surfer.
///
/// The first page is drawn uniformly from the corpus; every following page
/// is drawn from the [`transition_model`] of the page before it. The
/// estimate is the fraction of samples that landed on each page.
///
/// Results depend on `rng`; a seeded generator makes a run reproducible.
/// An empty corpus yields an empty distribution and `n == 0` yields all
/// zeros.
pub fn sample_pagerank<R: Rng>(
    corpus: &Corpus,
    damping_factor: f64,
    n: usize,
    rng: &mut R,
) -> RankDistribution {
    let pages: Vec<&str> = corpus.pages().collect();
    let mut visits: BTreeMap<&str, usize> = pages.iter().map(|&page| (page, 0)).collect();

    // One model per page, built once.
    let models: BTreeMap<&str, Vec<(String, f64)>> = pages
        .iter()
        .map(|&page| {
            let model = transition_model(corpus, page, damping_factor);
            (page, model.into_iter().collect())
        })
        .collect();

    let mut current: Option<String> = None;
    for _ in 0..n {
        let next = match current.as_deref() {
            None => pages.choose(rng).map(|page| page.to_string()),
            Some(page) => models
                .get(page)
                .and_then(|model| weighted_sample(rng, model)),
        };
        let Some(page) = next else {
            break;
        };
        if let Some(count) = visits.get_mut(page.as_str()) {
            *count += 1;
        }
        current = Some(page);
    }

    let total = n.max(1) as f64;
    let ranks: RankDistribution = visits
        .into_iter()
        .map(|(page, count)| (page.to_string(), count as f64 / total))
        .collect();

    if n > 0 && !ranks.is_empty() && !sums_to_one(&ranks) {
        tracing::error!(
            sum = distribution_sum(&ranks),
            "sampled PageRank does not sum to 1"
        );
    }
    tracing::debug!(samples = n, pages = ranks.len(), "sampled PageRank");

    ranks
}
