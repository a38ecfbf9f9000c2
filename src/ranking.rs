//! The spatial ranking engine: every voter ranks the candidates from nearest
//! to furthest, and possibly only lists some of them.
use std::num::NonZeroUsize;

use rand::Rng;
use rayon::prelude::*;

use crate::{electorate::Electorate, vector::Vector, Error, Result};

/// One voter's ranked candidates, nearest first. Candidates are identified by
/// their index in the electorate.
///
/// Ballots are never changed after they are cast. Counting methods that
/// eliminate candidates look at a ballot through a [`Standing`] set instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ballot {
    preferences: Vec<usize>,
}

impl Ballot {
    pub(crate) fn new(preferences: Vec<usize>) -> Self {
        Ballot { preferences }
    }

    pub fn preferences(&self) -> &[usize] {
        &self.preferences
    }

    pub fn len(&self) -> usize {
        self.preferences.len()
    }

    pub fn is_empty(&self) -> bool {
        self.preferences.is_empty()
    }

    pub fn first(&self) -> Option<usize> {
        self.preferences.first().copied()
    }

    /// The most preferred candidate still standing, if any
    pub fn first_remaining(&self, standing: &Standing) -> Option<usize> {
        self.remaining(standing).next()
    }

    /// Preferences skipping every candidate no longer standing
    pub fn remaining<'a>(&'a self, standing: &'a Standing) -> impl Iterator<Item = usize> + 'a {
        self.preferences.iter().copied().filter(move |&c| standing.contains(c))
    }

    /// A ballot is exhausted when none of its preferences are standing
    pub fn is_exhausted(&self, standing: &Standing) -> bool {
        self.first_remaining(standing).is_none()
    }

    fn truncate(&mut self, len: usize) {
        self.preferences.truncate(len);
    }
}

/// The set of candidates still in the count.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    standing: Vec<bool>,
    count: usize,
}

impl Standing {
    pub fn all(candidates: usize) -> Self {
        Standing { standing: vec![true; candidates], count: candidates }
    }

    /// Only the candidates in `subset` are standing
    pub(crate) fn only(candidates: usize, subset: &[usize]) -> Self {
        let mut standing = vec![false; candidates];
        for &c in subset {
            standing[c] = true;
        }
        let count = standing.iter().filter(|&&s| s).count();
        Standing { standing, count }
    }

    pub fn contains(&self, candidate: usize) -> bool {
        self.standing.get(candidate).copied().unwrap_or(false)
    }

    pub fn remove(&mut self, candidate: usize) {
        if self.contains(candidate) {
            self.standing[candidate] = false;
            self.count -= 1;
        }
    }

    /// Number of candidates still standing
    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.standing.iter().enumerate().filter(|(_, &s)| s).map(|(i, _)| i)
    }
}

/// How long the ballots should be.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use spatial_vote::{Electorate, Ranking};
///
/// let electorate = Electorate::from_pairs(
///     &[(0.0, 0.0), (2.0, 2.0)],
///     &[("A", (0.0, 0.0)), ("B", (3.0, 3.0)), ("C", (1.0, 0.0))],
/// )
/// .unwrap();
/// let mut rng = ChaCha8Rng::seed_from_u64(0);
/// let ballots = Ranking::limited(2).unwrap().ballots(&electorate, &mut rng);
/// assert_eq!(ballots[0].preferences(), &[0, 2]);
/// assert_eq!(ballots[1].preferences(), &[1, 2]);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Ranking {
    limit: Option<NonZeroUsize>,
    randomized: bool,
}

impl Ranking {
    /// Every voter ranks every candidate
    pub fn complete() -> Self {
        Ranking { limit: None, randomized: false }
    }

    /// Every voter ranks their `limit` nearest candidates
    pub fn limited(limit: usize) -> Result<Self> {
        Ranking::complete().with_limit(Some(limit))
    }

    pub fn with_limit(self, limit: Option<usize>) -> Result<Self> {
        let limit = match limit {
            Some(l) => Some(NonZeroUsize::new(l).ok_or(Error::InvalidLimit(l))?),
            None => None,
        };
        Ok(Ranking { limit, ..self })
    }

    pub fn with_nonzero_limit(self, limit: NonZeroUsize) -> Self {
        Ranking { limit: Some(limit), ..self }
    }

    /// Every voter ranks a uniformly random number of their nearest
    /// candidates, between one and the limit.
    pub fn randomized(self, randomized: bool) -> Self {
        Ranking { randomized, ..self }
    }

    pub fn limit(&self) -> Option<usize> {
        self.limit.map(NonZeroUsize::get)
    }

    pub fn is_randomized(&self) -> bool {
        self.randomized
    }

    /// The longest ballot this ranking produces for `candidates` candidates
    pub fn max_len(&self, candidates: usize) -> usize {
        self.limit().map_or(candidates, |l| l.min(candidates))
    }

    /// Casts one ballot per voter, in voter order. `rng` is only used when
    /// the ranking is randomized, and then exactly once per voter.
    pub fn ballots<R: Rng>(&self, electorate: &Electorate, rng: &mut R) -> Vec<Ballot> {
        let mut ballots = complete_ballots(electorate);
        let max_len = self.max_len(electorate.candidates().len());
        for ballot in &mut ballots {
            let len = if self.randomized { rng.gen_range(1..=max_len) } else { max_len };
            ballot.truncate(len);
        }
        ballots
    }
}

/// Every voter's complete ranking, nearest candidate first. Voters at the same
/// distance from several candidates rank them in electorate order.
pub fn complete_ballots(electorate: &Electorate) -> Vec<Ballot> {
    let candidates: Vec<Vector> = electorate.candidates().iter().map(|c| c.position).collect();
    electorate.voters().par_iter().map(|voter| rank_voter(voter, &candidates)).collect()
}

fn rank_voter(voter: &Vector, candidates: &[Vector]) -> Ballot {
    let mut list: Vec<(usize, f64)> =
        candidates.iter().map(|c| voter.dist(c)).enumerate().collect();
    // `sort_by` is stable, so equal distances keep the electorate order
    list.sort_by(|(_, a), (_, b)| a.total_cmp(b));
    Ballot::new(list.into_iter().map(|(i, _)| i).collect())
}

#[cfg(test)]
mod tests {
    use quickcheck::Gen;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;
    use crate::tests::{scenario, std_rng};

    #[test]
    fn scenario_rankings() {
        let ballots = complete_ballots(&scenario());
        let prefs: Vec<Vec<usize>> = ballots.iter().map(|b| b.preferences().to_vec()).collect();
        assert_eq!(prefs, vec![vec![0, 1], vec![0, 1], vec![1, 0]]);
    }

    #[test]
    fn equal_distance_keeps_electorate_order() {
        let e = Electorate::from_pairs(
            &[(0.0, 0.0)],
            &[("Z", (1.0, 0.0)), ("far", (5.0, 5.0)), ("A", (0.0, 1.0)), ("M", (-1.0, 0.0))],
        )
        .unwrap();
        assert_eq!(complete_ballots(&e)[0].preferences(), &[0, 2, 3, 1]);
    }

    #[test]
    fn huge_coordinates_keep_distance_order() {
        let e = Electorate::from_pairs(
            &[(0.0, 0.0), (1e200, 1e200)],
            &[("A", (1e200, 0.0)), ("B", (1e160, 0.0)), ("C", (1e180, 1e180))],
        )
        .unwrap();
        let prefs: Vec<Vec<usize>> =
            complete_ballots(&e).iter().map(|b| b.preferences().to_vec()).collect();
        assert_eq!(prefs, vec![vec![1, 2, 0], vec![0, 2, 1]]);
    }

    #[test]
    fn zero_limit_is_invalid() {
        assert_eq!(Ranking::limited(0), Err(Error::InvalidLimit(0)));
        assert!(Ranking::complete().with_limit(Some(0)).is_err());
    }

    #[test]
    fn limit_above_candidates_is_complete() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        let e = scenario();
        let limited = Ranking::limited(10).unwrap().ballots(&e, &mut rng);
        assert_eq!(limited, complete_ballots(&e));
    }

    #[test]
    fn standing_view() {
        let ballot = Ballot::new(vec![2, 0, 1]);
        let mut standing = Standing::all(3);
        assert_eq!(ballot.first_remaining(&standing), Some(2));
        standing.remove(2);
        standing.remove(2);
        assert_eq!(standing.len(), 2);
        assert_eq!(ballot.first_remaining(&standing), Some(0));
        assert_eq!(ballot.remaining(&standing).collect::<Vec<_>>(), [0, 1]);
        standing.remove(0);
        standing.remove(1);
        assert!(standing.is_empty());
        assert!(ballot.is_exhausted(&standing));
        // The ballot itself is untouched
        assert_eq!(ballot.preferences(), &[2, 0, 1]);
    }

    #[test]
    fn same_seed_same_ballots() {
        let e = Electorate::from_pairs(
            &[(0.0, 0.0), (1.0, 0.5), (-2.0, 1.0), (0.3, 0.3), (4.0, -1.0)],
            &[("A", (0.0, 0.0)), ("B", (1.0, 1.0)), ("C", (-1.0, 0.0)), ("D", (3.0, -1.0))],
        )
        .unwrap();
        let ranking = Ranking::limited(3).unwrap().randomized(true);
        let a = ranking.ballots(&e, &mut ChaCha8Rng::seed_from_u64(7));
        let b = ranking.ballots(&e, &mut ChaCha8Rng::seed_from_u64(7));
        assert_eq!(a, b);
    }

    #[quickcheck]
    fn ballots_are_short_and_distinct(e: Electorate, limit: u8, randomized: bool, seed: u64) -> bool {
        let limit = Some(usize::from(limit % 10)).filter(|&l| l > 0);
        let ranking = Ranking::complete().with_limit(limit).unwrap().randomized(randomized);
        let c = e.candidates().len();
        let max_len = limit.unwrap_or(c).min(c);
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let ballots = ranking.ballots(&e, &mut rng);
        ballots.len() == e.voters().len()
            && ballots.iter().all(|b| {
                let mut seen = vec![false; c];
                !b.is_empty()
                    && b.len() <= max_len
                    && (randomized || b.len() == max_len)
                    && b.preferences().iter().all(|&i| i < c && !std::mem::replace(&mut seen[i], true))
            })
    }

    #[quickcheck]
    fn ballots_follow_distance(e: Electorate) -> bool {
        let ballots = complete_ballots(&e);
        e.voters().iter().zip(&ballots).all(|(v, b)| {
            b.len() == e.candidates().len()
                && b.preferences().windows(2).all(|w| {
                    let d0 = v.dist(&e.candidates()[w[0]].position);
                    let d1 = v.dist(&e.candidates()[w[1]].position);
                    d0 < d1 || (d0 == d1 && w[0] < w[1])
                })
        })
    }

    #[test]
    fn randomized_uses_whole_range() {
        let mut rng = std_rng(&mut Gen::new(10));
        let e = Electorate::from_pairs(
            &[(0.0, 0.0); 200],
            &[("A", (0.0, 0.0)), ("B", (1.0, 1.0)), ("C", (2.0, 2.0))],
        )
        .unwrap();
        let ballots = Ranking::complete().randomized(true).ballots(&e, &mut rng);
        assert!((1..=3).all(|len| ballots.iter().any(|b| b.len() == len)));
    }
}
