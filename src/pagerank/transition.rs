//! Random surfer transition model

use std::collections::BTreeMap;

use super::Corpus;
use crate::utils::{distribution_sum, sums_to_one};

/// Probability of moving to each page next, keyed by page name
pub type TransitionModel = BTreeMap<String, f64>;

/// Distribution over the next page to visit from `page`.
///
/// With probability `damping_factor` the surfer follows one of the page's
/// links chosen uniformly; otherwise it jumps to any page of the corpus.
/// A dangling page spreads its probability uniformly over every page,
/// itself included.
///
/// `page` must belong to a non-empty corpus. An unknown page is treated as
/// dangling.
pub fn transition_model(corpus: &Corpus, page: &str, damping_factor: f64) -> TransitionModel {
    let num_pages = corpus.len() as f64;
    let model: TransitionModel = match corpus.links(page) {
        Some(links) if !links.is_empty() => {
            let teleport = (1.0 - damping_factor) / num_pages;
            let follow = damping_factor / links.len() as f64;
            corpus
                .pages()
                .map(|candidate| {
                    let p = if links.contains(candidate) {
                        follow + teleport
                    } else {
                        teleport
                    };
                    (candidate.to_string(), p)
                })
                .collect()
        }
        _ => corpus
            .pages()
            .map(|candidate| (candidate.to_string(), 1.0 / num_pages))
            .collect(),
    };

    let valid = sums_to_one(&model);
    if !valid {
        tracing::error!(
            page,
            sum = distribution_sum(&model),
            "transition model probabilities do not sum to 1"
        );
    }
    debug_assert!(valid, "transition model for '{page}' does not sum to 1");

    model
}
