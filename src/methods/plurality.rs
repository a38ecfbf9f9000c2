use crate::{
    electorate::Electorate,
    ranking::complete_ballots,
    tally::{Score, Tally},
    Result,
};

use super::VotingMethod;

/// First past the post: only every voter's nearest candidate gets a vote.
///
/// Ties for the most votes are left in the tally, see
/// [`Tally::winner`](crate::Tally::winner).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Plurality;

impl VotingMethod for Plurality {
    type Output = Tally;

    fn count(&self, electorate: &Electorate) -> Result<Tally> {
        let mut score = Score::new(electorate.candidates().len());
        for ballot in complete_ballots(electorate) {
            if let Some(c) = ballot.first() {
                score.add(c)?;
            }
        }
        Ok(score.tally(electorate))
    }
}
