use log::debug;

use crate::{
    electorate::Electorate,
    ranking::{complete_ballots, Standing},
    tally::{Score, Tally},
    Result,
};

use super::{TieBreak, VotingMethod};

/// A runoff simulated from a single ballot. Every voter lists their two nearest
/// candidates; the two candidates with the most first preferences go on to a
/// second round, where each voter's highest listed finalist gets the vote.
///
/// When several candidates share the second place count they all go through,
/// unless `keep_boundary_ties` is off, in which case `tie_break` picks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TwoRound {
    pub keep_boundary_ties: bool,
    pub tie_break: TieBreak,
}

impl Default for TwoRound {
    fn default() -> Self {
        TwoRound { keep_boundary_ties: true, tie_break: TieBreak::default() }
    }
}

/// Both rounds of a two-round count.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct TwoRoundResult {
    /// First preferences of every candidate
    pub first_round: Tally,

    /// Candidates in the second round, sorted by name
    pub qualified: Vec<String>,

    /// Votes for the qualified candidates
    pub second_round: Tally,

    /// Ballots listing neither finalist
    pub exhausted: usize,
}

const FINALISTS: usize = 2;

impl TwoRound {
    fn qualify(&self, electorate: &Electorate, first: &Score) -> Result<Vec<usize>> {
        let c = electorate.candidates().len();
        let mut counts: Vec<usize> = (0..c).map(|i| first.get(i)).collect();
        if c <= FINALISTS {
            return Ok((0..c).collect());
        }
        counts.sort_unstable_by(|a, b| b.cmp(a));
        let cut = counts[FINALISTS - 1];
        let above: Vec<usize> = (0..c).filter(|&i| first.get(i) > cut).collect();
        let at_cut: Vec<usize> = (0..c).filter(|&i| first.get(i) == cut).collect();
        let mut qualified = above;
        if self.keep_boundary_ties {
            qualified.extend(at_cut);
        } else {
            let seats = FINALISTS - qualified.len();
            qualified.extend(self.tie_break.most_favoured(electorate, &at_cut, seats)?);
        }
        qualified.sort_unstable();
        Ok(qualified)
    }
}

impl VotingMethod for TwoRound {
    type Output = TwoRoundResult;

    fn count(&self, electorate: &Electorate) -> Result<TwoRoundResult> {
        let c = electorate.candidates().len();
        let ballots = complete_ballots(electorate);

        let mut first = Score::new(c);
        for ballot in &ballots {
            if let Some(p) = ballot.first() {
                first.add(p)?;
            }
        }
        let qualified = self.qualify(electorate, &first)?;
        let standing = Standing::only(c, &qualified);
        debug!(
            "Two-round qualified: {:?}",
            qualified.iter().map(|&i| electorate.name(i)).collect::<Vec<_>>()
        );

        // Only the two highest preferences are on the ballot
        let mut second = Score::new(c);
        let mut exhausted = 0;
        for ballot in &ballots {
            match ballot.preferences().iter().take(FINALISTS).find(|&&p| standing.contains(p)) {
                Some(&p) => second.add(p)?,
                None => exhausted += 1,
            }
        }

        let second_round = second.tally_standing(electorate, &standing);
        Ok(TwoRoundResult {
            first_round: first.tally(electorate),
            qualified: second_round.names().map(str::to_string).collect(),
            second_round,
            exhausted,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{tests::scenario, Error};

    // A, B and C each have two supporters, D has one
    fn three_way_tie() -> Electorate {
        Electorate::from_pairs(
            &[(0.0, 0.0), (0.0, 0.1), (10.0, 0.0), (10.0, 0.1), (0.0, 10.0), (0.1, 10.0), (6.0, 6.0)],
            &[("C", (0.0, 0.0)), ("B", (10.0, 0.0)), ("A", (0.0, 10.0)), ("D", (6.0, 6.0))],
        )
        .unwrap()
    }

    #[test]
    fn scenario_two_candidates() {
        let res = TwoRound::default().count(&scenario()).unwrap();
        assert_eq!(res.qualified, ["A", "B"]);
        assert_eq!(res.second_round.iter().collect::<Vec<_>>(), [("A", 2), ("B", 1)]);
        assert_eq!(res.exhausted, 0);
    }

    #[test]
    fn second_preferences_transfer() {
        // The only voter preferring C has A second
        let e = Electorate::from_pairs(
            &[(0.0, 0.0), (0.0, 0.0), (2.0, 0.0), (2.0, 0.0), (2.0, 0.0), (1.2, 0.0), (-3.0, 0.0)],
            &[("A", (0.0, 0.0)), ("B", (2.0, 0.0)), ("C", (-1.0, 0.0))],
        )
        .unwrap();
        let res = TwoRound::default().count(&e).unwrap();
        assert_eq!(res.first_round.iter().collect::<Vec<_>>(), [("A", 2), ("B", 4), ("C", 1)]);
        assert_eq!(res.qualified, ["A", "B"]);
        assert_eq!(res.second_round.iter().collect::<Vec<_>>(), [("A", 3), ("B", 4)]);
    }

    #[test]
    fn ballots_without_finalists_are_exhausted() {
        // The voter at (20, 0) lists E then D, neither of which qualify
        let e = Electorate::from_pairs(
            &[(0.0, 0.0), (0.0, 0.0), (0.0, 0.0), (5.0, 0.0), (5.0, 0.0), (20.0, 0.0)],
            &[("A", (0.0, 0.0)), ("B", (5.0, 0.0)), ("D", (15.0, 0.0)), ("E", (21.0, 0.0))],
        )
        .unwrap();
        let res = TwoRound::default().count(&e).unwrap();
        assert_eq!(res.qualified, ["A", "B"]);
        assert_eq!(res.exhausted, 1);
        assert_eq!(res.second_round.total(), 5);
    }

    #[test]
    fn three_way_tie_keeps_everyone() {
        let res = TwoRound::default().count(&three_way_tie()).unwrap();
        assert_eq!(res.qualified, ["A", "B", "C"]);
        assert_eq!(res.second_round.len(), 3);
        assert_eq!(res.first_round.get("D"), Some(1));
    }

    #[test]
    fn three_way_tie_broken() {
        let lex = TwoRound { keep_boundary_ties: false, tie_break: TieBreak::Lexicographic };
        assert_eq!(lex.count(&three_way_tie()).unwrap().qualified, ["A", "B"]);
        let ins = TwoRound { keep_boundary_ties: false, tie_break: TieBreak::InsertionOrder };
        assert_eq!(ins.count(&three_way_tie()).unwrap().qualified, ["B", "C"]);
        let rej = TwoRound { keep_boundary_ties: false, tie_break: TieBreak::Reject };
        assert!(matches!(rej.count(&three_way_tie()), Err(Error::Tie { .. })));
    }

    #[test]
    fn one_candidate() {
        let e = Electorate::from_pairs(&[(0.0, 0.0), (1.0, 1.0)], &[("A", (3.0, 3.0))]).unwrap();
        let res = TwoRound::default().count(&e).unwrap();
        assert_eq!(res.second_round.iter().collect::<Vec<_>>(), [("A", 2)]);
    }

    #[quickcheck]
    fn two_finalists_unless_tied(e: Electorate) -> bool {
        let res = TwoRound::default().count(&e).unwrap();
        let c = e.candidates().len();
        let mut counts: Vec<usize> = res.first_round.iter().map(|(_, n)| n).collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        let tied_at_cut = c > 2 && counts[1] == counts[2];
        let expected = c.min(2);
        (res.qualified.len() == expected || (tied_at_cut && res.qualified.len() > expected))
            && res.second_round.total() + res.exhausted == e.voters().len()
    }
}
