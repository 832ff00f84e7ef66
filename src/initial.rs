/*
 * Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
 *
 * This program is free software: you can redistribute it and/or
 * modify it under the terms of the GNU General Public License as
 * published by the Free Software Foundation, either version 3 of the
 * License, or (at your option) any later version.
 *
 * This program is distributed in the hope that it will be useful, but
 * WITHOUT ANY WARRANTY; without even the implied warranty of
 * MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
 * General Public License for more details.
 *
 * You should have received a copy of the GNU General Public License
 * along with this program.  If not, see  <http://www.gnu.org/licenses/>
 */

//! Initial basic solutions.
//!
//! Both methods repeatedly select a cell `(i,j)` whose row and column
//! are still *open*, ship as much as possible over it and close
//! exactly one of the two lines afterwards. If the row and the column
//! are exhausted at the same time, the row is closed and the column
//! stays open. It will later receive a basic cell with zero flow, so
//! the basis stays a spanning tree with exactly `m + n - 1` cells.

use crate::balance::BalancedInstance;
use crate::basis::Basis;
use log::trace;
use num_traits::NumAssign;
use std::fmt::Debug;

/// The method used to construct the initial basic solution.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum InitialMethod {
    /// Select the open cell with the smallest cost.
    LeastCost,
    /// Select the upper left open cell.
    NorthwestCorner,
}

impl Default for InitialMethod {
    fn default() -> Self {
        InitialMethod::LeastCost
    }
}

/// Construct an initial basis with the given method.
pub fn initial_basis<F>(instance: &BalancedInstance<F>, method: InitialMethod, zero: F) -> Basis<F>
where
    F: NumAssign + PartialOrd + Copy + Debug,
{
    match method {
        InitialMethod::LeastCost => least_cost(instance, zero),
        InitialMethod::NorthwestCorner => northwest_corner(instance, zero),
    }
}

/// Construct an initial basis with the least cost method.
///
/// Ties are broken by the lowest row and then the lowest column index.
pub fn least_cost<F>(instance: &BalancedInstance<F>, zero: F) -> Basis<F>
where
    F: NumAssign + PartialOrd + Copy + Debug,
{
    build(instance, zero, |open_rows, open_cols| {
        let mut min_cell = None;
        let mut min_cost = None;
        for i in (0..open_rows.len()).filter(|&i| open_rows[i]) {
            for j in (0..open_cols.len()).filter(|&j| open_cols[j]) {
                let c = instance.cost(i, j);
                if min_cost.map(|m| c < m).unwrap_or(true) {
                    min_cost = Some(c);
                    min_cell = Some((i, j));
                }
            }
        }
        min_cell
    })
}

/// Construct an initial basis with the northwest corner rule.
pub fn northwest_corner<F>(instance: &BalancedInstance<F>, zero: F) -> Basis<F>
where
    F: NumAssign + PartialOrd + Copy + Debug,
{
    build(instance, zero, |open_rows, open_cols| {
        let i = open_rows.iter().position(|&open| open)?;
        let j = open_cols.iter().position(|&open| open)?;
        Some((i, j))
    })
}

fn build<F, S>(instance: &BalancedInstance<F>, zero: F, mut select: S) -> Basis<F>
where
    F: NumAssign + PartialOrd + Copy + Debug,
    S: FnMut(&[bool], &[bool]) -> Option<(usize, usize)>,
{
    let m = instance.num_rows();
    let n = instance.num_cols();
    let mut basis = Basis::new(m, n);
    if m == 0 || n == 0 {
        return basis;
    }

    let mut supplies = instance.supplies().to_vec();
    let mut demands = instance.demands().to_vec();
    let mut open_rows = vec![true; m];
    let mut open_cols = vec![true; n];
    let mut nrows = m;
    let mut ncols = n;

    while basis.len() + 1 < m + n {
        let (i, j) = match select(&open_rows, &open_cols) {
            Some(cell) => cell,
            None => break,
        };

        let flow = if supplies[i] < demands[j] {
            supplies[i]
        } else {
            demands[j]
        };
        let flow = if flow > zero { flow } else { F::zero() };
        trace!("Initial cell ({},{}) with flow {:?}", i, j, flow);
        basis.push(i, j, flow);
        supplies[i] -= flow;
        demands[j] -= flow;
        // remainders within the tolerance are exhausted
        if supplies[i] <= zero {
            supplies[i] = F::zero();
        }
        if demands[j] <= zero {
            demands[j] = F::zero();
        }

        // The last open row is only closed together with the last
        // column, i.e. when the loop terminates.
        let close_row = if nrows == 1 {
            false
        } else if ncols == 1 {
            true
        } else {
            supplies[i].is_zero()
        };

        if close_row {
            open_rows[i] = false;
            nrows -= 1;
        } else {
            open_cols[j] = false;
            ncols -= 1;
        }
    }

    basis
}

#[cfg(test)]
mod tests {
    use super::{least_cost, northwest_corner};
    use crate::{BalancedInstance, Instance};

    fn row_sums(q: &[Vec<i32>]) -> Vec<i32> {
        q.iter().map(|row| row.iter().sum()).collect()
    }

    fn col_sums(q: &[Vec<i32>]) -> Vec<i32> {
        (0..q[0].len()).map(|j| q.iter().map(|row| row[j]).sum()).collect()
    }

    #[test]
    fn test_least_cost() {
        let instance = Instance::new(
            vec![vec![10, 15, 20], vec![12, 10, 18], vec![15, 13, 10]],
            vec![100, 150, 80],
            vec![70, 120, 140],
        )
        .unwrap();
        let b = BalancedInstance::new(&instance);
        let basis = least_cost(&b, 0);

        assert_eq!(basis.len(), 5);
        let q = basis.quantities();
        assert_eq!(q, vec![vec![70, 0, 30], vec![0, 120, 30], vec![0, 0, 80]]);
        assert_eq!(row_sums(&q), b.supplies());
        assert_eq!(col_sums(&q), b.demands());
    }

    #[test]
    fn test_least_cost_degenerate() {
        // (1,0) exhausts row 1 and column 0 at the same time
        let instance = Instance::new(vec![vec![10, 20], vec![5, 15]], vec![70, 70], vec![70, 70]).unwrap();
        let b = BalancedInstance::new(&instance);
        let basis = least_cost(&b, 0);

        assert_eq!(basis.cells(), &[(1, 0), (0, 0), (0, 1)]);
        assert_eq!(basis.flows(), &[70, 0, 70]);
    }

    #[test]
    fn test_least_cost_dummy() {
        let instance = Instance::new(vec![vec![10, 20], vec![5, 15]], vec![100, 100], vec![50, 50]).unwrap();
        let b = BalancedInstance::new(&instance);
        let basis = least_cost(&b, 0);

        // the zero cost dummy column is served first, row 0 first on ties
        assert_eq!(basis.cells(), &[(0, 2), (1, 2), (1, 0), (1, 1)]);
        assert_eq!(basis.flows(), &[100, 0, 50, 50]);
    }

    #[test]
    fn test_northwest_corner() {
        let instance = Instance::new(vec![vec![10, 20], vec![5, 15]], vec![100, 100], vec![50, 50]).unwrap();
        let b = BalancedInstance::new(&instance);
        let basis = northwest_corner(&b, 0);

        assert_eq!(basis.cells(), &[(0, 0), (0, 1), (1, 1), (1, 2)]);
        assert_eq!(basis.flows(), &[50, 50, 0, 100]);
        let q = basis.quantities();
        assert_eq!(row_sums(&q), b.supplies());
        assert_eq!(col_sums(&q), b.demands());
    }

    #[test]
    fn test_float_remainders() {
        // the supplies sum up to slightly less than the demands
        let instance = Instance::new(vec![vec![1.0, 1.0]], vec![0.3], vec![0.1, 0.2]).unwrap();
        let b = BalancedInstance::new(&instance);
        assert!(b.supply(1) > 0.0 && b.supply(1) < 1e-9);

        let basis = least_cost(&b, 1e-9);
        assert_eq!(basis.len(), 3);
        assert_eq!(basis.cell(0), (1, 0));
        assert_eq!(basis.flow(0), 0.0);
        assert!(basis.flows().iter().all(|&f| f >= 0.0));
    }

    #[test]
    fn test_zero_supply() {
        let instance = Instance::new(vec![vec![1, 2, 3], vec![4, 5, 6]], vec![0, 0], vec![0, 0, 0]).unwrap();
        let b = BalancedInstance::new(&instance);
        for basis in [least_cost(&b, 0), northwest_corner(&b, 0)] {
            assert_eq!(basis.len(), 4);
            assert!(basis.flows().iter().all(|&f| f == 0));
        }
    }
}
