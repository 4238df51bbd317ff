//! Matchbox: a weighted pool of candidate moves for one board state

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::utils::weighted_sample;

/// A matchbox holding move weights for a specific board state.
///
/// The weight of a move is its selection frequency: drawing proportionally
/// to weight reproduces the behavior of a multiset where each move appears
/// `weight` times. Reinforcement only ever adds or removes units of weight;
/// the set of candidate positions is fixed at creation. A move whose weight
/// reaches zero can no longer be drawn, and a fully depleted box stays
/// depleted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Matchbox {
    /// Weight for each candidate position (position -> units)
    weights: HashMap<usize, u32>,
}

impl Matchbox {
    /// Seed a matchbox for a state whose empty cells are `candidates`.
    ///
    /// Every candidate starts at `(candidates.len() + 2) / 2` units, so
    /// states earlier in the game carry heavier uniform priors.
    pub fn seeded(candidates: &[usize]) -> Self {
        let prior = (candidates.len() as u32 + 2) / 2;
        let mut weights = HashMap::new();
        for &pos in candidates {
            weights.insert(pos, prior);
        }
        Matchbox { weights }
    }

    /// Get the weight for a specific position (zero if not a candidate)
    pub fn weight(&self, position: usize) -> u32 {
        self.weights.get(&position).copied().unwrap_or(0)
    }

    /// Get total weight across all candidates
    pub fn total_weight(&self) -> u32 {
        self.weights.values().sum()
    }

    /// Get all position-weight pairs, sorted by position
    pub fn weights(&self) -> Vec<(usize, u32)> {
        let mut items: Vec<(usize, u32)> = self
            .weights
            .iter()
            .map(|(&pos, &count)| (pos, count))
            .collect();
        items.sort_by(|a, b| a.0.cmp(&b.0));
        items
    }

    /// Sample a move with probability proportional to weight.
    ///
    /// Returns `None` when the box is depleted (total weight zero), which
    /// callers treat as resignation. Candidates are visited in position
    /// order so a fixed RNG seed gives a reproducible draw.
    pub fn sample(&self, rng: &mut impl rand::Rng) -> Option<usize> {
        let items: Vec<(usize, u32)> = self
            .weights()
            .into_iter()
            .filter(|&(_, count)| count > 0)
            .collect();
        weighted_sample(rng, &items)
    }

    /// Adjust a position's weight by `delta` units.
    ///
    /// Positive deltas add weight; negative deltas subtract, flooring at
    /// zero. Adjusting a position that is not a candidate, or subtracting
    /// from an already-zero weight, is a silent no-op.
    pub fn reinforce(&mut self, position: usize, delta: i16) {
        if let Some(count) = self.weights.get_mut(&position) {
            if delta > 0 {
                *count = count.saturating_add(delta as u32);
            } else {
                *count = count.saturating_sub((-delta) as u32);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use rand::{SeedableRng, rngs::StdRng};

    use super::*;

    #[test]
    fn seeded_uses_remaining_cell_prior() {
        // 9 empty cells: prior is (9 + 2) / 2 = 5 units per move.
        let matchbox = Matchbox::seeded(&[0, 1, 2, 3, 4, 5, 6, 7, 8]);
        for pos in 0..9 {
            assert_eq!(matchbox.weight(pos), 5);
        }
        assert_eq!(matchbox.total_weight(), 45);

        // 3 empty cells: prior is (3 + 2) / 2 = 2 (integer division).
        let matchbox = Matchbox::seeded(&[2, 5, 7]);
        assert_eq!(matchbox.weight(2), 2);
        assert_eq!(matchbox.weight(5), 2);
        assert_eq!(matchbox.weight(7), 2);

        // 1 empty cell: prior is (1 + 2) / 2 = 1.
        let matchbox = Matchbox::seeded(&[8]);
        assert_eq!(matchbox.weight(8), 1);
    }

    #[test]
    fn reinforce_adds_and_removes_units() {
        let mut matchbox = Matchbox::seeded(&[0, 4]);
        let base = matchbox.weight(4);

        matchbox.reinforce(4, 3);
        assert_eq!(matchbox.weight(4), base + 3);

        matchbox.reinforce(4, 1);
        assert_eq!(matchbox.weight(4), base + 4);

        matchbox.reinforce(4, -1);
        assert_eq!(matchbox.weight(4), base + 3);
    }

    #[test]
    fn reinforce_floors_at_zero() {
        let mut matchbox = Matchbox::seeded(&[8]);
        assert_eq!(matchbox.weight(8), 1);

        matchbox.reinforce(8, -1);
        assert_eq!(matchbox.weight(8), 0);

        // Subtracting from a zero weight is a no-op, not an error.
        matchbox.reinforce(8, -1);
        assert_eq!(matchbox.weight(8), 0);
    }

    #[test]
    fn reinforce_unknown_position_is_noop() {
        let mut matchbox = Matchbox::seeded(&[0, 1]);
        matchbox.reinforce(7, 3);
        assert_eq!(matchbox.weight(7), 0);
        // Prior for 2 candidates is (2 + 2) / 2 = 2 units each.
        assert_eq!(matchbox.total_weight(), 4);
    }

    #[test]
    fn depleted_box_stays_depleted() {
        let mut matchbox = Matchbox::seeded(&[8]);
        matchbox.reinforce(8, -1);
        assert_eq!(matchbox.total_weight(), 0);

        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(matchbox.sample(&mut rng), None);
    }

    #[test]
    fn sample_never_draws_zero_weight_move() {
        let mut matchbox = Matchbox::seeded(&[3, 6]);
        // Drive one move's weight to zero.
        matchbox.reinforce(3, -1);
        matchbox.reinforce(3, -1);
        matchbox.reinforce(3, -1);
        assert_eq!(matchbox.weight(3), 0);

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert_eq!(matchbox.sample(&mut rng), Some(6));
        }
    }

    #[test]
    fn sample_is_deterministic_under_fixed_seed() {
        let matchbox = Matchbox::seeded(&[0, 2, 4, 6, 8]);

        let mut rng1 = StdRng::seed_from_u64(99);
        let mut rng2 = StdRng::seed_from_u64(99);
        for _ in 0..20 {
            assert_eq!(matchbox.sample(&mut rng1), matchbox.sample(&mut rng2));
        }
    }
}
