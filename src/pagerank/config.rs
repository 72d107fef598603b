//! Configuration for PageRank runs

use std::{fs, path::Path};

use serde::{Deserialize, Serialize};

use super::iteration::CONVERGENCE_THRESHOLD;

/// Probability of following a link instead of teleporting
pub const DAMPING: f64 = 0.85;

/// Default number of random surfer samples
pub const SAMPLES: usize = 10_000;

/// Parameters for a PageRank run.
///
/// # Examples
///
/// ```
/// use rankmax::pagerank::PageRankConfig;
///
/// let config = PageRankConfig::default().with_damping(0.9).with_seed(7);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.samples, 10_000);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageRankConfig {
    /// Damping factor in `[0, 1)`
    pub damping: f64,
    /// Number of samples for the sampling estimator
    pub samples: usize,
    /// Convergence threshold for the iterative estimator
    pub threshold: f64,
    /// Random seed for reproducible sampling
    pub seed: Option<u64>,
}

impl Default for PageRankConfig {
    fn default() -> Self {
        Self {
            damping: DAMPING,
            samples: SAMPLES,
            threshold: CONVERGENCE_THRESHOLD,
            seed: None,
        }
    }
}

impl PageRankConfig {
    /// Load a configuration from a JSON file. Missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns error if the file cannot be read or is not valid JSON.
    pub fn from_json_file(path: &Path) -> crate::Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| crate::Error::io(format!("read config '{}'", path.display()), e))?;
        Ok(serde_json::from_str(&contents)?)
    }

    pub fn with_damping(mut self, damping: f64) -> Self {
        self.damping = damping;
        self
    }

    pub fn with_samples(mut self, samples: usize) -> Self {
        self.samples = samples;
        self
    }

    /// Set the random seed for deterministic sampling.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Check that every parameter is in range.
    ///
    /// # Errors
    ///
    /// Returns [`crate::Error::InvalidConfiguration`] if the damping factor is
    /// outside `[0, 1)`, no samples are requested, or the threshold is not
    /// positive. A damping factor of 1 leaves no teleport, and iteration over
    /// a periodic corpus would never settle.
    pub fn validate(&self) -> crate::Result<()> {
        let invalid = |message: String| Err(crate::Error::InvalidConfiguration { message });

        if !(0.0..1.0).contains(&self.damping) {
            return invalid(format!("damping factor {} must be within [0, 1)", self.damping));
        }
        if self.samples == 0 {
            return invalid("sample count must be at least 1".to_string());
        }
        if !(self.threshold.is_finite() && self.threshold > 0.0) {
            return invalid(format!(
                "convergence threshold {} must be positive and finite",
                self.threshold
            ));
        }
        Ok(())
    }
}
