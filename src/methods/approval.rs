use std::num::NonZeroUsize;

use rand::Rng;

use crate::{
    electorate::Electorate,
    ranking::Ranking,
    tally::{Score, Tally},
    Result,
};

use super::RandomVotingMethod;

/// Every voter approves of their nearest candidates, by default the nearest
/// three, and every approval counts as a vote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Approval {
    ranking: Ranking,
}

impl Approval {
    pub const DEFAULT_LIMIT: NonZeroUsize = match NonZeroUsize::new(3) {
        Some(limit) => limit,
        None => panic!("Default limit must be positive"),
    };

    /// Voters approve of their `limit` nearest candidates
    pub fn new(limit: usize) -> Result<Self> {
        Ok(Approval { ranking: Ranking::limited(limit)? })
    }

    /// Voters approve of a random number of their nearest candidates, from
    /// one up to the limit
    pub fn randomized(self, randomized: bool) -> Self {
        Approval { ranking: self.ranking.randomized(randomized) }
    }

    pub fn ranking(&self) -> Ranking {
        self.ranking
    }
}

impl Default for Approval {
    fn default() -> Self {
        Approval { ranking: Ranking::complete().with_nonzero_limit(Self::DEFAULT_LIMIT) }
    }
}

impl From<Ranking> for Approval {
    fn from(ranking: Ranking) -> Self {
        Approval { ranking }
    }
}

impl RandomVotingMethod for Approval {
    type Output = Tally;

    fn count<R: Rng>(&self, electorate: &Electorate, rng: &mut R) -> Result<Tally> {
        let mut score = Score::new(electorate.candidates().len());
        for ballot in self.ranking.ballots(electorate, rng) {
            for &c in ballot.preferences() {
                score.add(c)?;
            }
        }
        Ok(score.tally(electorate))
    }
}
