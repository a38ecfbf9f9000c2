use crate::{Error, Result};

/// A point in the two-dimensional ideological space
#[derive(Debug, Clone, Copy, PartialEq, serde::Deserialize, serde::Serialize)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

impl Vector {
    pub fn new(x: f64, y: f64) -> Result<Self> {
        if !(x.is_finite() && y.is_finite()) {
            return Err(Error::NonFiniteCoordinate { x, y });
        }
        Ok(Vector { x, y })
    }

    pub fn from_array(xy: [f64; 2]) -> Result<Self> {
        Vector::new(xy[0], xy[1])
    }

    /// Reads a coordinate pair from a slice, which must have exactly two
    /// elements.
    pub fn from_slice(xy: &[f64]) -> Result<Self> {
        match xy {
            [x, y] => Vector::new(*x, *y),
            _ => Err(Error::MalformedCoordinate { len: xy.len() }),
        }
    }

    pub fn as_array(&self) -> [f64; 2] {
        [self.x, self.y]
    }

    pub fn sub(&self, b: &Vector) -> Vector {
        Vector { x: self.x - b.x, y: self.y - b.y }
    }

    pub fn norm(&self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Euclidean distance between `self` and `b`
    pub fn dist(&self, b: &Vector) -> f64 {
        self.sub(b).norm()
    }
}

impl TryFrom<(f64, f64)> for Vector {
    type Error = Error;

    fn try_from((x, y): (f64, f64)) -> Result<Self> {
        Vector::new(x, y)
    }
}

impl TryFrom<[f64; 2]> for Vector {
    type Error = Error;

    fn try_from(xy: [f64; 2]) -> Result<Self> {
        Vector::from_array(xy)
    }
}
