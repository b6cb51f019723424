//! Mathematical function groups: angles, number predicates, combinatorics,
//! descriptive statistics, frequency analysis, means and real roots.

pub mod angle;
pub mod averages;
pub mod combinatorics;
pub mod frequency;
pub mod numbers;
pub mod roots;
pub mod statistics;
