//! Positional ranking over anything scoreable.

use crate::models::leaderboard::{IndividualStanding, OverallStanding};
use crate::models::team::{TeamOverallScore, TeamScore};

/// An entry that can be placed on a board.
pub trait Rankable {
    fn ranking_score(&self) -> f64;
    fn set_rank(&mut self, rank: u32);
}

/// Sorts descending by score and assigns 1-based positions. Equal scores get
/// distinct consecutive positions, ties are never collapsed; the sort is
/// stable, so equals keep their input order.
pub fn assign_ranks<T: Rankable>(entries: &mut [T]) {
    entries.sort_by(|a, b| b.ranking_score().total_cmp(&a.ranking_score()));
    for (index, entry) in entries.iter_mut().enumerate() {
        entry.set_rank(index as u32 + 1);
    }
}

impl Rankable for IndividualStanding {
    fn ranking_score(&self) -> f64 {
        self.score
    }

    fn set_rank(&mut self, rank: u32) {
        self.rank = Some(rank);
    }
}

impl Rankable for OverallStanding {
    fn ranking_score(&self) -> f64 {
        self.total_score
    }

    fn set_rank(&mut self, rank: u32) {
        self.rank = Some(rank);
    }
}

impl Rankable for TeamScore {
    fn ranking_score(&self) -> f64 {
        self.total_score
    }

    fn set_rank(&mut self, rank: u32) {
        self.rank = Some(rank);
    }
}

impl Rankable for TeamOverallScore {
    fn ranking_score(&self) -> f64 {
        self.total_score
    }

    fn set_rank(&mut self, rank: u32) {
        self.rank = Some(rank);
    }
}
