//! Vote counts for one round of counting.
use std::collections::BTreeMap;

use crate::{electorate::Electorate, ranking::Standing, Error, Result};

/// The result of one round: how many votes each candidate got, in ascending
/// order of candidate name.
///
/// Every candidate that took part in the round is present, also those that
/// got no votes.
#[derive(Debug, Clone, PartialEq, Eq, Default, serde::Serialize)]
#[serde(transparent)]
pub struct Tally {
    counts: BTreeMap<String, usize>,
}

/// Who won a round. Ties are reported, not resolved.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub enum Winner {
    Solo(String),
    Ties(Vec<String>),
}

impl Tally {
    pub fn get(&self, candidate: &str) -> Option<usize> {
        self.counts.get(candidate).copied()
    }

    pub fn contains(&self, candidate: &str) -> bool {
        self.counts.contains_key(candidate)
    }

    /// Candidates and their counts, sorted by name
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> + '_ {
        self.counts.iter().map(|(name, &count)| (name.as_str(), count))
    }

    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.counts.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Sum of all counts. For approval this may exceed the number of voters.
    pub fn total(&self) -> usize {
        self.counts.values().sum()
    }

    /// Dense rank of every candidate in name order, where 0 is the most votes
    /// and candidates with equal counts share a rank.
    pub fn order(&self) -> Vec<usize> {
        let counts: Vec<usize> = self.counts.values().copied().collect();
        get_order(&counts, true)
    }

    /// The candidates with the most votes, `None` if the tally is empty.
    pub fn winner(&self) -> Option<Winner> {
        let mut winners: Vec<String> = self
            .counts
            .keys()
            .zip(self.order())
            .filter(|(_, rank)| *rank == 0)
            .map(|(name, _)| name.clone())
            .collect();
        match winners.len() {
            0 => None,
            1 => winners.pop().map(Winner::Solo),
            _ => Some(Winner::Ties(winners)),
        }
    }

    pub fn into_map(self) -> BTreeMap<String, usize> {
        self.counts
    }
}

/// Running count indexed by candidate, started at zero for every candidate.
#[derive(Debug, Clone)]
pub(crate) struct Score {
    score: Vec<usize>,
}

impl Score {
    pub(crate) fn new(candidates: usize) -> Self {
        Score { score: vec![0; candidates] }
    }

    pub(crate) fn add(&mut self, candidate: usize) -> Result<()> {
        debug_assert!(candidate < self.score.len());
        self.score[candidate] = self.score[candidate].checked_add(1).ok_or(Error::Overflow)?;
        Ok(())
    }

    pub(crate) fn get(&self, candidate: usize) -> usize {
        self.score[candidate]
    }

    /// The tally of every candidate in `electorate`
    pub(crate) fn tally(&self, electorate: &Electorate) -> Tally {
        self.tally_standing(electorate, &Standing::all(self.score.len()))
    }

    /// The tally restricted to the candidates still standing
    pub(crate) fn tally_standing(&self, electorate: &Electorate, standing: &Standing) -> Tally {
        debug_assert!(electorate.candidates().len() == self.score.len());
        let counts = standing.iter().map(|c| (electorate.name(c).to_string(), self.score[c])).collect();
        Tally { counts }
    }
}

/// Converts a list of values to the dense rank of every value. With `reverse`
/// the largest value gets rank 0, otherwise the smallest does. Equal values
/// share a rank and the next distinct value gets the next rank.
pub fn get_order<T: Ord>(v: &[T], reverse: bool) -> Vec<usize> {
    let mut distinct: Vec<&T> = v.iter().collect();
    distinct.sort_unstable();
    distinct.dedup();
    if reverse {
        distinct.reverse();
    }
    v.iter()
        .map(|x| {
            if reverse {
                distinct.partition_point(|d| *d > x)
            } else {
                distinct.partition_point(|d| *d < x)
            }
        })
        .collect()
}
