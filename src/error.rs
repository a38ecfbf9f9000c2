/// Everything that can go wrong when building an electorate or counting it.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    #[error("Electorate has no voters")]
    NoVoters,
    #[error("Electorate has no candidates")]
    NoCandidates,
    #[error("Ballot limit must be positive, got {0}")]
    InvalidLimit(usize),
    #[error("Coordinate pair must have 2 elements, got {len}")]
    MalformedCoordinate { len: usize },
    #[error("Coordinates must be finite, got ({x}, {y})")]
    NonFiniteCoordinate { x: f64, y: f64 },
    #[error("Candidate name is used more than once: {0}")]
    DuplicateCandidate(String),
    #[error("Candidate name is empty")]
    EmptyCandidateName,
    #[error("Unresolved tie between candidates: {}", .candidates.join(", "))]
    Tie { candidates: Vec<String> },
    #[error("Integer overflow: Too many votes for same candidate")]
    Overflow,
    #[error("Invalid distribution: {0}")]
    Distribution(String),
}

pub type Result<T> = std::result::Result<T, Error>;
