//! Random electorates where voters and candidates are normally distributed
//! around a common centre.
use rand_distr::{Distribution, Normal};

use crate::{
    electorate::{Candidate, Electorate},
    vector::Vector,
    Error, Result,
};

/// An independent normal distribution along each axis.
///
/// ```
/// use rand::SeedableRng;
/// use rand_chacha::ChaCha8Rng;
/// use spatial_vote::generators::gaussian::Gaussian;
///
/// let mut rng = ChaCha8Rng::seed_from_u64(42);
/// let electorate = Gaussian::standard().electorate(&mut rng, 100, 5).unwrap();
/// assert_eq!(electorate.voters().len(), 100);
/// assert_eq!(electorate.candidate_names(), ["A", "B", "C", "D", "E"]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Gaussian {
    axes: [Normal<f64>; 2],
}

// Generated coordinates are rounded to this many decimals
const DECIMALS: i32 = 3;

impl Gaussian {
    pub fn new(mean: [f64; 2], std_dev: [f64; 2]) -> Result<Self> {
        let axis = |i: usize| {
            if !mean[i].is_finite() {
                return Err(Error::Distribution(format!("Mean must be finite, got {}", mean[i])));
            }
            if !(std_dev[i] > 0.0 && std_dev[i].is_finite()) {
                return Err(Error::Distribution(format!(
                    "Standard deviation must be positive and finite, got {}",
                    std_dev[i]
                )));
            }
            Normal::new(mean[i], std_dev[i]).map_err(|e| Error::Distribution(e.to_string()))
        };
        Ok(Gaussian { axes: [axis(0)?, axis(1)?] })
    }

    /// Mean 0 and standard deviation 1 along both axes
    pub fn standard() -> Self {
        let axis = Normal::new(0.0, 1.0).unwrap_or_else(|_| unreachable!());
        Gaussian { axes: [axis, axis] }
    }

    pub fn point<R: rand::Rng>(&self, rng: &mut R) -> Vector {
        let scale = 10f64.powi(DECIMALS);
        let [x, y] = self.axes.map(|axis| (axis.sample(rng) * scale).round() / scale);
        Vector { x, y }
    }

    pub fn voters<R: rand::Rng>(&self, rng: &mut R, n: usize) -> Vec<Vector> {
        (0..n).map(|_| self.point(rng)).collect()
    }

    /// `n` candidates named `A`, `B`, `C` and so on
    pub fn candidates<R: rand::Rng>(&self, rng: &mut R, n: usize) -> Vec<Candidate> {
        (0..n).map(|i| Candidate::new(candidate_name(i), self.point(rng))).collect()
    }

    /// Draws the voters first, then the candidates
    pub fn electorate<R: rand::Rng>(
        &self,
        rng: &mut R,
        voters: usize,
        candidates: usize,
    ) -> Result<Electorate> {
        let voters = self.voters(rng, voters);
        let candidates = self.candidates(rng, candidates);
        Electorate::new(voters, candidates)
    }
}

/// Spreadsheet style names: `A` to `Z`, then `AA`, `AB` and so on.
pub fn candidate_name(mut i: usize) -> String {
    let mut name = Vec::new();
    loop {
        name.push(b'A' + (i % 26) as u8);
        if i < 26 {
            break;
        }
        i = i / 26 - 1;
    }
    name.reverse();
    String::from_utf8(name).unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    use super::*;

    #[test]
    fn names() {
        assert_eq!(candidate_name(0), "A");
        assert_eq!(candidate_name(25), "Z");
        assert_eq!(candidate_name(26), "AA");
        assert_eq!(candidate_name(27), "AB");
        assert_eq!(candidate_name(26 * 27), "AAA");
    }

    #[test]
    fn invalid_parameters() {
        assert!(matches!(Gaussian::new([0.0, 0.0], [-1.0, 1.0]), Err(Error::Distribution(_))));
        assert!(matches!(Gaussian::new([f64::NAN, 0.0], [1.0, 1.0]), Err(Error::Distribution(_))));
        assert!(matches!(Gaussian::new([0.0, 0.0], [1.0, 0.0]), Err(Error::Distribution(_))));
        assert!(matches!(Gaussian::new([0.0, 0.0], [f64::NAN, 1.0]), Err(Error::Distribution(_))));
        let inf = Gaussian::new([0.0, 0.0], [1.0, f64::INFINITY]);
        assert!(matches!(inf, Err(Error::Distribution(_))));
        assert!(Gaussian::new([1.0, -1.0], [0.5, 2.0]).is_ok());
    }

    #[test]
    fn seeded_is_reproducible() {
        let g = Gaussian::standard();
        let a = g.electorate(&mut ChaCha8Rng::seed_from_u64(3), 50, 4).unwrap();
        let b = g.electorate(&mut ChaCha8Rng::seed_from_u64(3), 50, 4).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn rounded_to_three_decimals() {
        let g = Gaussian::new([2.0, -2.0], [0.1, 0.1]).unwrap();
        let mut rng = ChaCha8Rng::seed_from_u64(9);
        for p in g.voters(&mut rng, 100) {
            for v in p.as_array() {
                assert!(((v * 1000.0).round() - v * 1000.0).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn no_candidates_is_an_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert_eq!(Gaussian::standard().electorate(&mut rng, 10, 0), Err(Error::NoCandidates));
    }

    #[quickcheck]
    fn unique_names(n: u16) -> bool {
        let n = usize::from(n % 2000);
        let mut names: Vec<String> = (0..n).map(candidate_name).collect();
        names.sort();
        names.dedup();
        names.len() == n
    }
}
