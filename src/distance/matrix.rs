//! Dense cost matrix.

use serde::{Deserialize, Serialize};

use crate::error::{Result, RoutingError};
use crate::models::Point;

/// Mean Earth radius in meters.
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Default average urban travel speed in meters per second (~28 km/h).
pub const DEFAULT_SPEED_MPS: f64 = 7.78;

/// A dense n×n matrix of directed travel costs stored in row-major order.
///
/// `get(i, j)` need not equal `get(j, i)`. `f64::INFINITY` marks a pair with
/// no known route; it is a valid (maximally undesirable) cost, not an error.
/// Negative and NaN entries are rejected by the checked constructors.
///
/// # Examples
///
/// ```
/// use tour_routing::distance::CostMatrix;
///
/// let cm = CostMatrix::from_rows(&[
///     vec![0.0, 10.0, 15.0],
///     vec![10.0, 0.0, f64::INFINITY],
///     vec![15.0, 35.0, 0.0],
/// ])
/// .unwrap();
/// assert_eq!(cm.size(), 3);
/// assert_eq!(cm.get(0, 2), 15.0);
/// assert!(cm.get(1, 2).is_infinite());
/// ```
///
/// Serializes as nested rows; deserialization goes through
/// [`from_rows`](Self::from_rows) validation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")]
pub struct CostMatrix {
    data: Vec<f64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a cost matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0.0; size * size],
            size,
        }
    }

    /// Creates a cost matrix from nested rows.
    ///
    /// Fails if any row length differs from the number of rows, or if an
    /// entry is negative or NaN.
    pub fn from_rows<R: AsRef<[f64]>>(rows: &[R]) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (row, values) in rows.iter().enumerate() {
            let values = values.as_ref();
            if values.len() != size {
                return Err(RoutingError::NotSquare {
                    row,
                    len: values.len(),
                    expected: size,
                });
            }
            data.extend_from_slice(values);
        }
        Self::from_data(size, data)
    }

    /// Creates a cost matrix from a flat row-major grid.
    pub fn from_data(size: usize, data: Vec<f64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(RoutingError::DataLength {
                expected: size * size,
                actual: data.len(),
            });
        }
        for (idx, &value) in data.iter().enumerate() {
            let (from, to) = (idx / size, idx % size);
            if value.is_nan() {
                return Err(RoutingError::NanCost { from, to });
            }
            if value < 0.0 {
                return Err(RoutingError::NegativeCost { from, to, value });
            }
        }
        Ok(Self { data, size })
    }

    /// Builds a travel-time matrix (seconds) from great-circle distances.
    ///
    /// Each off-diagonal entry is the haversine distance in meters divided
    /// by `speed_mps`. The result is symmetric with a zero diagonal.
    ///
    /// # Errors
    ///
    /// Returns [`RoutingError::InvalidConfig`] if `speed_mps` is not a
    /// finite positive number.
    ///
    /// # Examples
    ///
    /// ```
    /// use tour_routing::distance::{CostMatrix, DEFAULT_SPEED_MPS};
    /// use tour_routing::models::Point;
    ///
    /// let points = vec![Point::new(-34.6037, -58.3816), Point::new(-34.6158, -58.4333)];
    /// let cm = CostMatrix::from_points_haversine(&points, DEFAULT_SPEED_MPS).unwrap();
    /// assert_eq!(cm.get(0, 0), 0.0);
    /// assert!(cm.get(0, 1) > 0.0);
    /// assert_eq!(cm.get(0, 1), cm.get(1, 0));
    ///
    /// assert!(CostMatrix::from_points_haversine(&points, 0.0).is_err());
    /// ```
    pub fn from_points_haversine(points: &[Point], speed_mps: f64) -> Result<Self> {
        if !speed_mps.is_finite() || speed_mps <= 0.0 {
            return Err(RoutingError::InvalidConfig(format!(
                "speed must be finite and positive, got {speed_mps}"
            )));
        }
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let t = haversine_m(&points[i], &points[j]) / speed_mps;
                data[i * n + j] = t;
                data[j * n + i] = t;
            }
        }
        Self::from_data(n, data)
    }

    /// Returns the cost from location `from` to location `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, from: usize, to: usize) -> f64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from location `from` to location `to`.
    ///
    /// Unchecked builder method: `cost` must be non-negative and not NaN
    /// (`f64::INFINITY` is allowed). Debug builds assert this.
    pub fn set(&mut self, from: usize, to: usize, cost: f64) {
        debug_assert!(
            !cost.is_nan() && cost >= 0.0,
            "invalid cost {cost} at ({from}, {to})"
        );
        self.data[from * self.size + to] = cost;
    }

    /// Number of locations in this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix has no locations.
    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// Returns row `from` as a slice.
    pub fn row(&self, from: usize) -> &[f64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    ///
    /// Two infinite entries compare equal.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                let (a, b) = (self.get(i, j), self.get(j, i));
                if a != b && (a - b).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Returns `true` if any entry is infinite.
    pub fn has_unreachable(&self) -> bool {
        self.data.iter().any(|c| c.is_infinite())
    }

    /// Extracts the square submatrix over `indices`, in the given order.
    ///
    /// Local index `k` of the result corresponds to `indices[k]` here.
    ///
    /// # Panics
    ///
    /// Panics if any index is out of bounds.
    pub fn submatrix(&self, indices: &[usize]) -> Self {
        let m = indices.len();
        let mut data = Vec::with_capacity(m * m);
        for &i in indices {
            for &j in indices {
                data.push(self.get(i, j));
            }
        }
        Self { data, size: m }
    }

    /// Submatrix without location 0, as used when index 0 is a depot.
    pub fn without_first(&self) -> Self {
        let indices: Vec<usize> = (1..self.size).collect();
        self.submatrix(&indices)
    }

    /// Returns the cheapest target from `from` among the given candidates.
    ///
    /// Ties go to the earliest candidate. Returns `None` if `candidates` is
    /// empty.
    pub fn nearest_neighbor(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        let mut best: Option<(usize, f64)> = None;
        for &c in candidates {
            let d = self.get(from, c);
            match best {
                Some((_, bd)) if d >= bd => {}
                _ => best = Some((c, d)),
            }
        }
        best.map(|(c, _)| c)
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = RoutingError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self> {
        Self::from_rows(&rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(cm: CostMatrix) -> Self {
        (0..cm.size).map(|i| cm.row(i).to_vec()).collect()
    }
}

/// Great-circle distance in meters.
fn haversine_m(a: &Point, b: &Point) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let s1 = (d_lat / 2.0).sin();
    let s2 = (d_lng / 2.0).sin();
    let h = s1 * s1 + a.lat.to_radians().cos() * b.lat.to_radians().cos() * s2 * s2;
    2.0 * EARTH_RADIUS_M * h.sqrt().asin()
}
