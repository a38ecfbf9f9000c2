//! Describes a whole election run, so it can be read from a configuration
//! file and reproduced later from the same seed.
use log::debug;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use crate::{
    electorate::Electorate,
    methods::{
        Approval, InstantRunoff, InstantRunoffResult, Plurality, RandomVotingMethod, TieBreak,
        TwoRound, TwoRoundResult, VotingMethod,
    },
    ranking::Ranking,
    tally::{Tally, Winner},
    Result,
};

fn default_approval_limit() -> Option<usize> {
    Some(Approval::DEFAULT_LIMIT.get())
}

fn default_keep_boundary_ties() -> bool {
    true
}

/// The electoral rule to count with, and its options
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
#[serde(rename_all = "snake_case", tag = "method")]
pub enum Method {
    Plurality,

    Approval {
        /// How many of their nearest candidates every voter approves of
        #[serde(default = "default_approval_limit")]
        limit: Option<usize>,

        /// Each voter approves of a random number of candidates up to `limit`
        #[serde(default)]
        randomized: bool,
    },

    TwoRound {
        /// Let every candidate tied at the second place qualify
        #[serde(default = "default_keep_boundary_ties")]
        keep_boundary_ties: bool,
    },

    InstantRunoff {
        /// How many candidates every voter ranks, all of them if unset
        #[serde(default)]
        limit: Option<usize>,

        #[serde(default)]
        randomized: bool,
    },
}

/// All parameters of one election run
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize, serde::Serialize)]
pub struct ElectionConfig {
    #[serde(flatten)]
    pub method: Method,

    #[serde(default)]
    pub tie_break: TieBreak,

    /// Seed for randomized ballot lengths. Without one every run draws a
    /// fresh seed.
    #[serde(default)]
    pub seed: Option<u64>,
}

impl Default for ElectionConfig {
    fn default() -> Self {
        ElectionConfig { method: Method::Plurality, tie_break: TieBreak::default(), seed: None }
    }
}

/// What a run produced, depending on the method
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Outcome {
    Single(Tally),
    TwoRound(TwoRoundResult),
    InstantRunoff(InstantRunoffResult),
}

impl Outcome {
    /// The tally that decides the election
    pub fn final_tally(&self) -> Option<&Tally> {
        match self {
            Outcome::Single(tally) => Some(tally),
            Outcome::TwoRound(res) => Some(&res.second_round),
            Outcome::InstantRunoff(res) => res.rounds.last().map(|r| &r.tally),
        }
    }

    pub fn winner(&self) -> Option<Winner> {
        match self {
            Outcome::InstantRunoff(res) => Some(Winner::Solo(res.winner.clone())),
            _ => self.final_tally().and_then(Tally::winner),
        }
    }
}

impl ElectionConfig {
    pub fn new(method: Method) -> Self {
        ElectionConfig { method, ..Default::default() }
    }

    pub fn with_seed(self, seed: u64) -> Self {
        ElectionConfig { seed: Some(seed), ..self }
    }

    pub fn with_tie_break(self, tie_break: TieBreak) -> Self {
        ElectionConfig { tie_break, ..self }
    }

    fn rng(&self) -> ChaCha8Rng {
        match self.seed {
            Some(seed) => ChaCha8Rng::seed_from_u64(seed),
            None => {
                let rng = ChaCha8Rng::from_entropy();
                debug!("No seed configured, using {:?}", rng.get_seed());
                rng
            }
        }
    }

    /// Counts `electorate` with the configured method
    pub fn run(&self, electorate: &Electorate) -> Result<Outcome> {
        debug!(
            "Counting {} voters and {} candidates with {:?}",
            electorate.voters().len(),
            electorate.candidates().len(),
            self.method
        );
        let outcome = match self.method {
            Method::Plurality => Outcome::Single(Plurality.count(electorate)?),
            Method::Approval { limit, randomized } => {
                let ranking = Ranking::complete().with_limit(limit)?.randomized(randomized);
                Outcome::Single(Approval::from(ranking).count(electorate, &mut self.rng())?)
            }
            Method::TwoRound { keep_boundary_ties } => {
                let two_round = TwoRound { keep_boundary_ties, tie_break: self.tie_break };
                Outcome::TwoRound(two_round.count(electorate)?)
            }
            Method::InstantRunoff { limit, randomized } => {
                let ranking = Ranking::complete().with_limit(limit)?.randomized(randomized);
                let irv = InstantRunoff::new(ranking, self.tie_break);
                Outcome::InstantRunoff(irv.count(electorate, &mut self.rng())?)
            }
        };
        Ok(outcome)
    }
}
