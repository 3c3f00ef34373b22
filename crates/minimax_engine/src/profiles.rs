//! Named playing styles: each profile maps to a weight vector over the nine
//! evaluation heuristics.

use rand::Rng;

/// The profile name that routes a player to the Monte-Carlo searcher instead
/// of minimax. It carries no weight vector.
pub const MONTE_CARLO: &str = "MonteCarlo";

/// The eight minimax profiles, in menu order.
pub const PROFILES: [&str; 8] = [
    "Losing",
    "Intermediate",
    "Expert",
    "Aggressive",
    "Defensive",
    "RandomWeights",
    "RandomPlay",
    "Balanced",
];

pub fn is_monte_carlo(name: &str) -> bool {
    name == MONTE_CARLO
}

/// Weights applied to the nine evaluation heuristics.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Weights {
    pub material: f64,
    pub central: f64,
    pub structure: f64,
    pub mobility: f64,
    pub king_activity: f64,
    pub promotion: f64,
    pub safety: f64,
    pub tempo: f64,
    pub locks: f64,
}

impl Weights {
    /// Look up a profile by name. `RandomWeights` draws each weight once,
    /// here, not per evaluation. Unknown names fall back to `Expert`.
    pub fn for_profile(name: &str, rng: &mut impl Rng) -> Weights {
        match name {
            // Miscalibrated priorities: oversells safety and passive
            // structure, undervalues material and initiative
            "Losing" => Weights {
                material: 1.0,
                central: 1.0,
                structure: 5.0,
                mobility: 7.0,
                king_activity: 1.0,
                promotion: 1.0,
                safety: 10.0,
                tempo: 1.0,
                locks: 2.0,
            },
            "Intermediate" => Weights {
                material: 15.0,
                central: 15.0,
                structure: 15.0,
                mobility: 15.0,
                king_activity: 20.0,
                promotion: 20.0,
                safety: 10.0,
                tempo: 20.0,
                locks: 15.0,
            },
            "Expert" => Weights {
                material: 60.0,
                central: 25.0,
                structure: 30.0,
                mobility: 20.0,
                king_activity: 45.0,
                promotion: 45.0,
                safety: 10.0,
                tempo: 40.0,
                locks: 35.0,
            },
            // Trades safety for attack: pushes men, activates kings early
            "Aggressive" => Weights {
                material: 100.0,
                central: 25.0,
                structure: 8.0,
                mobility: 35.0,
                king_activity: 95.0,
                promotion: 50.0,
                safety: 12.0,
                tempo: 20.0,
                locks: 15.0,
            },
            "Defensive" => Weights {
                material: 50.0,
                central: 12.0,
                structure: 45.0,
                mobility: 20.0,
                king_activity: 30.0,
                promotion: 10.0,
                safety: 50.0,
                tempo: 1.0,
                locks: 25.0,
            },
            "RandomWeights" => Weights {
                material: rng.gen_range(0..=50) as f64,
                central: rng.gen_range(0..=50) as f64,
                structure: rng.gen_range(0..=50) as f64,
                mobility: rng.gen_range(0..=50) as f64,
                king_activity: rng.gen_range(0..=50) as f64,
                promotion: rng.gen_range(0..=50) as f64,
                safety: rng.gen_range(0..=50) as f64,
                tempo: rng.gen_range(0..=50) as f64,
                locks: rng.gen_range(0..=50) as f64,
            },
            // Every leaf scores the same, so the search picks uniformly
            // among legal moves
            "RandomPlay" => Weights::uniform(0.0),
            "Balanced" => Weights::uniform(10.0),
            _ => Weights::for_profile("Expert", rng),
        }
    }

    fn uniform(w: f64) -> Weights {
        Weights {
            material: w,
            central: w,
            structure: w,
            mobility: w,
            king_activity: w,
            promotion: w,
            safety: w,
            tempo: w,
            locks: w,
        }
    }
}

#[cfg(test)]
#[path = "profiles_tests.rs"]
mod profiles_tests;
