//! Properties of the PageRank estimators over small corpora

mod common;

use common::{dangling_corpus, hub_corpus, max_difference};
use rand::{SeedableRng, rngs::StdRng};
use rankmax::{
    pagerank::{
        CONVERGENCE_THRESHOLD, DAMPING, MAX_SWEEPS, build_corpus, iterate_pagerank,
        iterate_pagerank_with, sample_pagerank, transition_model,
    },
    utils::{distribution_sum, sums_to_one},
};

mod transition {
    use super::*;

    #[test]
    fn every_page_model_sums_to_one() {
        for corpus in [hub_corpus(), dangling_corpus()] {
            for page in corpus.pages() {
                let model = transition_model(&corpus, page, DAMPING);
                assert_eq!(model.len(), corpus.len());
                assert!(
                    sums_to_one(&model),
                    "model for {page} sums to {}",
                    distribution_sum(&model)
                );
            }
        }
    }

    #[test]
    fn dangling_page_teleports_uniformly() {
        let corpus = dangling_corpus();
        let model = transition_model(&corpus, "recursion.html", DAMPING);
        let uniform = 1.0 / corpus.len() as f64;
        assert!(model.values().all(|p| (p - uniform).abs() < 1e-12));
    }
}

mod iteration {
    use super::*;

    #[test]
    fn two_page_cycle_converges_to_half() {
        let corpus = build_corpus([("A", vec!["B"]), ("B", vec!["A"])]);
        let ranks = iterate_pagerank(&corpus, DAMPING);
        assert!((ranks["A"] - 0.5).abs() < 1e-9);
        assert!((ranks["B"] - 0.5).abs() < 1e-9);
    }

    #[test]
    fn hub_corpus_golden_values() {
        let ranks = iterate_pagerank(&hub_corpus(), DAMPING);
        let expected = [
            ("1.html", 0.21977732727568303),
            ("2.html", 0.429357664651155),
            ("3.html", 0.21977732727568303),
            ("4.html", 0.13108768079747898),
        ];
        for (page, value) in expected {
            assert!(
                (ranks[page] - value).abs() < 1e-9,
                "{page}: got {}, expected {value}",
                ranks[page]
            );
        }
    }

    #[test]
    fn output_sums_to_one_and_is_deterministic() {
        for damping in [0.5, DAMPING, 0.95] {
            let first = iterate_pagerank(&dangling_corpus(), damping);
            let second = iterate_pagerank(&dangling_corpus(), damping);
            assert!((distribution_sum(&first) - 1.0).abs() < 1e-12);
            assert_eq!(first, second);
        }
    }

    #[test]
    fn dangling_rank_is_not_lost() {
        let corpus = dangling_corpus();
        let report = iterate_pagerank_with(&corpus, DAMPING, CONVERGENCE_THRESHOLD);

        // logic.html has no parents: its rank is only what teleporting and the
        // dangling page hand out
        assert!(report.ranks["logic.html"] > (1.0 - DAMPING) / corpus.len() as f64);
        assert!(report.converged);
        assert_eq!(report.sweeps, 21);

        let expected = [
            ("ai.html", 0.188900258072697),
            ("algorithms.html", 0.10643497959132335),
            ("c.html", 0.12381142497842634),
            ("inference.html", 0.12885080337601362),
            ("logic.html", 0.026355442946846643),
            ("programming.html", 0.230132209963325),
            ("python.html", 0.12381142497842634),
            ("recursion.html", 0.07170345609294171),
        ];
        for (page, value) in expected {
            assert!(
                (report.ranks[page] - value).abs() < 1e-9,
                "{page}: got {}, expected {value}",
                report.ranks[page]
            );
        }
    }

    #[test]
    fn sink_pages_share_their_rank() {
        let corpus = build_corpus([("a", vec!["c"]), ("b", vec!["c"]), ("c", vec![])]);
        let report = iterate_pagerank_with(&corpus, DAMPING, CONVERGENCE_THRESHOLD);

        assert_eq!(report.sweeps, 12);
        assert!((report.ranks["a"] - 0.2128981362479848).abs() < 1e-9);
        assert!((report.ranks["b"] - 0.2128981362479848).abs() < 1e-9);
        assert!((report.ranks["c"] - 0.5742037275040304).abs() < 1e-9);
    }

    #[test]
    fn undamped_cycle_terminates() {
        let corpus = build_corpus([("a", vec!["b"]), ("b", vec!["a"]), ("c", vec!["a"])]);
        let report = iterate_pagerank_with(&corpus, 1.0, CONVERGENCE_THRESHOLD);

        assert_eq!(report.sweeps, MAX_SWEEPS);
        assert!(!report.converged);
        assert!(sums_to_one(&report.ranks));
    }
}

mod sampling {
    use super::*;

    #[test]
    fn sampled_ranks_are_a_distribution() {
        let corpus = dangling_corpus();
        let ranks = sample_pagerank(&corpus, DAMPING, 10_000, &mut StdRng::seed_from_u64(42));
        assert_eq!(ranks.len(), corpus.len());
        assert!(sums_to_one(&ranks));
        assert!(ranks.values().all(|&r| r >= 0.0));
    }

    #[test]
    fn large_sample_approximates_iteration() {
        for corpus in [hub_corpus(), dangling_corpus()] {
            let sampled =
                sample_pagerank(&corpus, DAMPING, 100_000, &mut StdRng::seed_from_u64(2024));
            let iterated = iterate_pagerank(&corpus, DAMPING);
            let diff = max_difference(&sampled, &iterated);
            assert!(diff < 0.02, "sampled {sampled:?} vs iterated {iterated:?}");
        }
    }

    #[test]
    fn same_seed_same_ranks() {
        let corpus = hub_corpus();
        let a = sample_pagerank(&corpus, DAMPING, 1_000, &mut StdRng::seed_from_u64(5));
        let b = sample_pagerank(&corpus, DAMPING, 1_000, &mut StdRng::seed_from_u64(5));
        assert_eq!(a, b);
    }
}
