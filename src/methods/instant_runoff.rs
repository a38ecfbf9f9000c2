use log::{debug, trace};
use rand::Rng;

use crate::{
    electorate::Electorate,
    ranking::{Ranking, Standing},
    tally::{Score, Tally},
    Result,
};

use super::{RandomVotingMethod, TieBreak};

/// Instant-runoff, also called the alternative vote. Every round the standing
/// candidate with the fewest first preferences is eliminated, and their
/// ballots move on to the next standing preference, until one candidate is
/// left.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InstantRunoff {
    pub ranking: Ranking,
    pub tie_break: TieBreak,
}

/// One round of elimination
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct Round {
    /// First preferences among the candidates standing this round
    pub tally: Tally,

    /// Candidate eliminated at the end of the round
    pub eliminated: String,

    /// Ballots with no standing preference left
    pub exhausted: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct InstantRunoffResult {
    pub rounds: Vec<Round>,
    pub winner: String,
}

impl InstantRunoffResult {
    /// The tally of every round, in order
    pub fn tallies(&self) -> Vec<&Tally> {
        self.rounds.iter().map(|r| &r.tally).collect()
    }

    pub fn into_tallies(self) -> Vec<Tally> {
        self.rounds.into_iter().map(|r| r.tally).collect()
    }

    /// Candidates in the order they were eliminated
    pub fn eliminated(&self) -> Vec<&str> {
        self.rounds.iter().map(|r| r.eliminated.as_str()).collect()
    }
}

impl InstantRunoff {
    pub fn new(ranking: Ranking, tie_break: TieBreak) -> Self {
        InstantRunoff { ranking, tie_break }
    }
}

impl RandomVotingMethod for InstantRunoff {
    type Output = InstantRunoffResult;

    fn count<R: Rng>(&self, electorate: &Electorate, rng: &mut R) -> Result<InstantRunoffResult> {
        let c = electorate.candidates().len();
        let ballots = self.ranking.ballots(electorate, rng);
        let mut standing = Standing::all(c);
        let mut rounds = Vec::with_capacity(c.saturating_sub(1));

        while standing.len() > 1 {
            let mut score = Score::new(c);
            let mut exhausted = 0;
            for ballot in &ballots {
                match ballot.first_remaining(&standing) {
                    Some(p) => score.add(p)?,
                    None => exhausted += 1,
                }
            }

            let min = standing.iter().map(|i| score.get(i)).min().unwrap_or(0);
            let lowest: Vec<usize> = standing.iter().filter(|&i| score.get(i) == min).collect();
            let eliminated = self.tie_break.least_favoured(electorate, &lowest)?;
            let tally = score.tally_standing(electorate, &standing);
            debug!(
                "Round {}: {:?}, {} exhausted, eliminating {}",
                rounds.len() + 1,
                tally,
                exhausted,
                electorate.name(eliminated)
            );
            if lowest.len() > 1 {
                trace!("{} candidates tied with {} votes", lowest.len(), min);
            }

            standing.remove(eliminated);
            rounds.push(Round {
                tally,
                eliminated: electorate.name(eliminated).to_string(),
                exhausted,
            });
        }

        let winner = standing.iter().next().map_or_else(String::new, |w| electorate.name(w).to_string());
        Ok(InstantRunoffResult { rounds, winner })
    }
}
