mod approval;
pub use approval::Approval;
mod instant_runoff;
pub use instant_runoff::{InstantRunoff, InstantRunoffResult, Round};
mod plurality;
pub use plurality::Plurality;
mod two_round;
pub use two_round::{TwoRound, TwoRoundResult};

use rand::Rng;

use crate::{electorate::Electorate, Error, Result};

/// Trait shared by every voting method that counts the same way every time.
pub trait VotingMethod {
    type Output;

    /// Ranks every voter's candidates and counts the resulting ballots.
    fn count(&self, electorate: &Electorate) -> Result<Self::Output>;
}

/// A version of `VotingMethod` where voters may randomly cut their ballots
/// short. All randomness is drawn from `rng`, so a seeded generator gives the
/// same result every time.
pub trait RandomVotingMethod {
    type Output;

    fn count<R: Rng>(&self, electorate: &Electorate, rng: &mut R) -> Result<Self::Output>;
}

/// Decides between candidates with equal counts, when a method has to pick.
///
/// A tie-break orders the tied candidates from most to least favoured. When
/// someone has to be eliminated it is the least favoured; when only some may
/// qualify, the most favoured qualify first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum TieBreak {
    /// The candidate whose name sorts first is favoured
    #[default]
    Lexicographic,

    /// The candidate listed first in the electorate is favoured
    InsertionOrder,

    /// Refuse to pick, and fail with [`Error::Tie`]
    Reject,
}

impl TieBreak {
    /// Sorts `tied` from most to least favoured
    fn sort(&self, electorate: &Electorate, tied: &mut [usize]) -> Result<()> {
        match self {
            TieBreak::Lexicographic => {
                tied.sort_by(|&a, &b| electorate.name(a).cmp(electorate.name(b)))
            }
            TieBreak::InsertionOrder => tied.sort_unstable(),
            TieBreak::Reject if tied.len() > 1 => {
                let mut candidates: Vec<String> =
                    tied.iter().map(|&c| electorate.name(c).to_string()).collect();
                candidates.sort();
                return Err(Error::Tie { candidates });
            }
            TieBreak::Reject => {}
        }
        Ok(())
    }

    /// The candidate to eliminate among the tied ones
    pub(crate) fn least_favoured(&self, electorate: &Electorate, tied: &[usize]) -> Result<usize> {
        debug_assert!(!tied.is_empty());
        let mut tied = tied.to_vec();
        self.sort(electorate, &mut tied)?;
        tied.last().copied().ok_or(Error::NoCandidates)
    }

    /// The `n` candidates to keep among the tied ones
    pub(crate) fn most_favoured(
        &self,
        electorate: &Electorate,
        tied: &[usize],
        n: usize,
    ) -> Result<Vec<usize>> {
        if n >= tied.len() {
            return Ok(tied.to_vec());
        }
        let mut tied = tied.to_vec();
        self.sort(electorate, &mut tied)?;
        tied.truncate(n);
        Ok(tied)
    }
}
