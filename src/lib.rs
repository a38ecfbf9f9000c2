//! Simulates elections in a spatial model of voting: voters and candidates are
//! points in a two-dimensional ideological space, and every voter prefers the
//! candidates nearest to them.
//!
//! Ballots are counted with plurality, approval, a two-round runoff or
//! instant-runoff.
//!
//! Example usage:
//! ```
//! use spatial_vote::prelude::*;
//! use spatial_vote::methods::Plurality;
//! use spatial_vote::Electorate;
//!
//! let electorate = Electorate::from_pairs(
//!     &[(0.0, 0.0), (1.0, 1.0), (2.0, 2.0)],
//!     &[("A", (0.0, 0.0)), ("B", (3.0, 3.0))],
//! )
//! .unwrap();
//!
//! let tally = Plurality.count(&electorate).unwrap();
//! assert_eq!(tally.get("A"), Some(2));
//! assert_eq!(tally.get("B"), Some(1));
//! ```
#[cfg(test)]
extern crate quickcheck;
#[cfg(test)]
#[macro_use(quickcheck)]
extern crate quickcheck_macros;

pub mod config;
pub mod electorate;
mod error;
pub mod generators;
pub mod methods;
pub mod ranking;
pub mod tally;
pub mod vector;

pub use config::{ElectionConfig, Method, Outcome};
pub use electorate::{Candidate, Electorate};
pub use error::{Error, Result};
pub use ranking::{Ballot, Ranking};
pub use tally::{Tally, Winner};
pub use vector::Vector;

/// Commonly used traits
pub mod prelude {
    pub use super::methods::{RandomVotingMethod, VotingMethod};
}
