//! Daily health tips.
//!
//! Tips are drawn from a list through a `StdRng` so tests (and users who set
//! `tips.seed` in the config) get a reproducible sequence.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Built-in tips used when the config doesn't provide any
pub fn default_tips() -> Vec<String> {
    vec![
        "Stay hydrated! Drink at least 8 cups of water daily.".into(),
        "Aim for 7-8 hours of sleep each night for optimal health.".into(),
        "Take a short walk after meals to aid digestion.".into(),
        "Incorporate fruits and vegetables into your diet.".into(),
        "Limit screen time before bed for better sleep.".into(),
    ]
}

/// Picks tips at random from a fixed list
#[derive(Clone, Debug)]
pub struct TipPicker {
    tips: Vec<String>,
    rng: StdRng,
}

impl TipPicker {
    /// Create a picker; `None` seeds from OS entropy
    pub fn new(tips: Vec<String>, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { tips, rng }
    }

    pub fn tips(&self) -> &[String] {
        &self.tips
    }

    /// Next random tip, or `None` if the list is empty
    pub fn next_tip(&mut self) -> Option<&str> {
        self.tips.choose(&mut self.rng).map(String::as_str)
    }
}

impl Default for TipPicker {
    fn default() -> Self {
        Self::new(default_tips(), None)
    }
}
