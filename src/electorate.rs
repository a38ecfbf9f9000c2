//! Voters and candidates placed in the ideological plane.
//!
//! An [`Electorate`] is validated once when it is built, so the counting code
//! can assume it is non-empty, every coordinate is finite and every candidate
//! name is unique.
use std::collections::HashSet;

use crate::{vector::Vector, Error, Result};

#[derive(Debug, Clone, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Candidate {
    pub name: String,
    pub position: Vector,
}

impl Candidate {
    pub fn new(name: impl Into<String>, position: Vector) -> Self {
        Candidate { name: name.into(), position }
    }
}

/// An ordered list of voters and an ordered list of candidates.
///
/// The order of `candidates` matters: when a voter is at exactly the same
/// distance from two candidates, the one listed first is ranked first.
#[derive(Debug, Clone, PartialEq, serde::Deserialize)]
#[serde(try_from = "UncheckedElectorate")]
pub struct Electorate {
    voters: Vec<Vector>,
    candidates: Vec<Candidate>,
}

#[derive(serde::Deserialize)]
struct UncheckedElectorate {
    voters: Vec<Vec<f64>>,
    candidates: Vec<(String, Vec<f64>)>,
}

impl TryFrom<UncheckedElectorate> for Electorate {
    type Error = Error;

    fn try_from(value: UncheckedElectorate) -> Result<Self> {
        let voters =
            value.voters.iter().map(|v| Vector::from_slice(v)).collect::<Result<Vec<_>>>()?;
        let candidates = value
            .candidates
            .into_iter()
            .map(|(name, p)| Ok(Candidate::new(name, Vector::from_slice(&p)?)))
            .collect::<Result<Vec<_>>>()?;
        Electorate::new(voters, candidates)
    }
}

impl Electorate {
    pub fn new(voters: Vec<Vector>, candidates: Vec<Candidate>) -> Result<Self> {
        if voters.is_empty() {
            return Err(Error::NoVoters);
        }
        if candidates.is_empty() {
            return Err(Error::NoCandidates);
        }
        // `Vector` can be built directly through its public fields
        for p in voters.iter().chain(candidates.iter().map(|c| &c.position)) {
            Vector::new(p.x, p.y)?;
        }
        let mut seen = HashSet::with_capacity(candidates.len());
        for c in &candidates {
            if c.name.is_empty() {
                return Err(Error::EmptyCandidateName);
            }
            if !seen.insert(c.name.as_str()) {
                return Err(Error::DuplicateCandidate(c.name.clone()));
            }
        }
        Ok(Electorate { voters, candidates })
    }

    /// Builds an electorate from plain coordinate pairs.
    ///
    /// ```
    /// use spatial_vote::Electorate;
    ///
    /// let electorate = Electorate::from_pairs(
    ///     &[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)],
    ///     &[("A", (0.0, 0.0)), ("B", (3.0, 3.0))],
    /// )
    /// .unwrap();
    /// assert_eq!(electorate.voters().len(), 3);
    /// assert_eq!(electorate.candidate_names(), ["A", "B"]);
    /// ```
    pub fn from_pairs(voters: &[(f64, f64)], candidates: &[(&str, (f64, f64))]) -> Result<Self> {
        let voters = voters.iter().map(|&p| Vector::try_from(p)).collect::<Result<Vec<_>>>()?;
        let candidates = candidates
            .iter()
            .map(|&(name, p)| Ok(Candidate::new(name, Vector::try_from(p)?)))
            .collect::<Result<Vec<_>>>()?;
        Electorate::new(voters, candidates)
    }

    pub fn voters(&self) -> &[Vector] {
        &self.voters
    }

    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    pub fn candidate_names(&self) -> Vec<&str> {
        self.candidates.iter().map(|c| c.name.as_str()).collect()
    }

    pub(crate) fn name(&self, candidate: usize) -> &str {
        &self.candidates[candidate].name
    }
}
