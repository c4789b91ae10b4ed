//! Square pairwise-cost matrix.

use crate::error::SearchError;

/// Immutable N×N matrix of non-negative costs.
///
/// `cost(i, j)` is the cost of moving from item `i` to item `j`. The matrix
/// need not be symmetric and the diagonal is not inspected.
///
/// # Invariants
///
/// - `N >= 2`
/// - every row has exactly `N` entries
/// - every entry is finite and `>= 0`
///
/// # Examples
///
/// ```
/// use tour_metaheur::CostMatrix;
///
/// let m = CostMatrix::from_rows(&[[0, 2, 2], [2, 0, 3], [2, 3, 0]]).unwrap();
/// assert_eq!(m.size(), 3);
/// assert_eq!(m.cost(1, 2), 3.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "Vec<Vec<f64>>", into = "Vec<Vec<f64>>")
)]
pub struct CostMatrix {
    n: usize,
    data: Vec<f64>,
}

impl CostMatrix {
    /// Builds a matrix from owned rows.
    ///
    /// # Errors
    ///
    /// [`SearchError::InvalidMatrix`] if the rows do not form a square
    /// matrix of size at least 2, or an entry is negative or not finite.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self, SearchError> {
        Self::from_rows(&rows)
    }

    /// Builds a matrix from any rows of numeric entries (integer or float).
    pub fn from_rows<T, Row>(rows: &[Row]) -> Result<Self, SearchError>
    where
        T: Copy + Into<f64>,
        Row: AsRef<[T]>,
    {
        let n = rows.len();
        if n < 2 {
            return Err(SearchError::invalid_matrix(format!(
                "need at least 2 rows, got {n}"
            )));
        }

        let mut data = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != n {
                return Err(SearchError::invalid_matrix(format!(
                    "row {i} has length {}, expected {n}",
                    row.len()
                )));
            }
            for (j, &value) in row.iter().enumerate() {
                let value: f64 = value.into();
                if !value.is_finite() || value < 0.0 {
                    return Err(SearchError::invalid_matrix(format!(
                        "entry ({i}, {j}) = {value} is not a finite non-negative cost"
                    )));
                }
                data.push(value);
            }
        }

        Ok(Self { n, data })
    }

    /// Number of items (rows and columns).
    #[inline]
    pub fn size(&self) -> usize {
        self.n
    }

    /// Cost of moving from `from` to `to`.
    ///
    /// # Panics
    /// Panics if either index is `>= size()`.
    #[inline]
    pub fn cost(&self, from: usize, to: usize) -> f64 {
        assert!(
            from < self.n && to < self.n,
            "index ({from}, {to}) out of bounds for {0}x{0} matrix",
            self.n
        );
        self.data[from * self.n + to]
    }

    /// Row `i` as a slice.
    pub fn row(&self, i: usize) -> &[f64] {
        &self.data[i * self.n..(i + 1) * self.n]
    }

    /// Iterates over the rows.
    pub fn rows(&self) -> impl Iterator<Item = &[f64]> {
        self.data.chunks_exact(self.n)
    }
}

impl TryFrom<Vec<Vec<f64>>> for CostMatrix {
    type Error = SearchError;

    fn try_from(rows: Vec<Vec<f64>>) -> Result<Self, Self::Error> {
        Self::new(rows)
    }
}

impl From<CostMatrix> for Vec<Vec<f64>> {
    fn from(matrix: CostMatrix) -> Self {
        matrix.rows().map(<[f64]>::to_vec).collect()
    }
}
