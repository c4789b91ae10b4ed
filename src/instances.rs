//! Small bundled instances for demos, tests and benchmarks.

use crate::matrix::CostMatrix;

const CITIES10: [[u32; 10]; 10] = [
    [0, 2, 2, 7, 15, 2, 5, 7, 6, 5],
    [2, 0, 10, 4, 7, 3, 7, 15, 8, 2],
    [2, 10, 0, 1, 4, 3, 3, 4, 2, 3],
    [7, 4, 1, 0, 2, 15, 7, 7, 5, 4],
    [15, 7, 4, 2, 0, 7, 3, 2, 2, 7],
    [2, 3, 3, 15, 7, 0, 2, 10, 1, 7],
    [5, 7, 3, 7, 3, 2, 0, 2, 1, 3],
    [7, 15, 4, 7, 2, 10, 2, 0, 1, 10],
    [6, 8, 2, 5, 2, 1, 1, 1, 0, 15],
    [5, 2, 3, 4, 7, 7, 3, 10, 15, 0],
];

const TASKS6: [[u32; 6]; 6] = [
    [0, 3, 5, 2, 8, 6],
    [4, 0, 2, 7, 3, 4],
    [6, 2, 0, 4, 6, 5],
    [5, 4, 7, 0, 3, 9],
    [6, 6, 4, 3, 0, 2],
    [7, 5, 8, 6, 2, 0],
];

/// Symmetric 10-city TSP instance. The optimal closed tour costs 18.
pub fn cities10() -> CostMatrix {
    CostMatrix::from_rows(&CITIES10).expect("bundled matrix is square and non-negative")
}

/// Asymmetric changeover times between 6 tasks. The optimal open sequence
/// costs 13.
pub fn tasks6() -> CostMatrix {
    CostMatrix::from_rows(&TASKS6).expect("bundled matrix is square and non-negative")
}
