//! Shared fixtures for the rankmax integration tests.

#![allow(dead_code)]

use rankmax::pagerank::{Corpus, build_corpus};

/// Four pages where 2.html is linked from every other page.
pub fn hub_corpus() -> Corpus {
    build_corpus([
        ("1.html", vec!["2.html"]),
        ("2.html", vec!["1.html", "3.html"]),
        ("3.html", vec!["2.html", "4.html"]),
        ("4.html", vec!["2.html"]),
    ])
}

/// Corpus with a dangling page (`recursion.html` links nowhere).
pub fn dangling_corpus() -> Corpus {
    build_corpus([
        ("ai.html", vec!["algorithms.html", "inference.html"]),
        ("algorithms.html", vec!["programming.html", "recursion.html"]),
        ("c.html", vec!["programming.html"]),
        ("inference.html", vec!["ai.html"]),
        ("logic.html", vec!["inference.html"]),
        ("programming.html", vec!["c.html", "python.html"]),
        ("python.html", vec!["ai.html", "programming.html"]),
        ("recursion.html", vec![]),
    ])
}

/// Largest absolute per-page difference between two rank maps.
pub fn max_difference(a: &rankmax::RankDistribution, b: &rankmax::RankDistribution) -> f64 {
    a.iter()
        .map(|(page, value)| (value - b.get(page).copied().unwrap_or(0.0)).abs())
        .fold(0.0, f64::max)
}
