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

//! A transportation simplex implementation.
//!
//! The algorithm is the MODI (modified distribution) method: starting
//! from an initial basic solution the potentials of the spanning tree
//! are computed, the non-basic cell with the most negative reduced
//! cost enters the basis and flow is shifted around the cycle closed
//! by this cell (stepping stone). The cell on the cycle whose flow
//! drops to zero first leaves the basis.
//!
//! Ties are always broken towards the lowest row and then the lowest
//! column index, for the entering as well as for the leaving cell.
//! This makes the algorithm deterministic and prevents cycling on the
//! degenerate instances that occur in practice.
//!
//! # Example
//!
//! ```
//! use rs_transport::{Instance, TransportSimplex, SolutionState};
//!
//! let instance = Instance::new(vec![vec![10.0, 20.0], vec![5.0, 15.0]], vec![100.0, 100.0], vec![50.0, 50.0]).unwrap();
//! let mut spx = TransportSimplex::new(&instance).unwrap();
//! let sol = spx.solve();
//! assert_eq!(sol.state, SolutionState::Optimal);
//! assert_eq!(sol.value, 1000.0);
//! assert_eq!(sol.quantities, vec![vec![0.0, 0.0], vec![50.0, 50.0]]);
//! ```

use crate::balance::BalancedInstance;
use crate::basis::{Basis, SpanningTree};
use crate::initial::{initial_basis, InitialMethod};
use crate::instance::{Instance, Result};
use crate::solution::{Solution, SolutionState};
use log::{debug, info};
use num_traits::{NumAssign, Signed};
use std::fmt::Debug;

/// A transportation simplex algorithm.
pub struct TransportSimplex<'a, F> {
    instance: &'a Instance<F>,

    /// The method for computing the initial basis.
    pub initial: InitialMethod,
    /// The maximal number of pivots. Defaults to `None` (no limit).
    pub max_iterations: Option<usize>,
    /// The value to be considered zero. Defaults to `F::zero()`.
    ///
    /// Reduced costs must be below `-zero` for a cell to enter the
    /// basis. For floating-point types a small positive value should be
    /// used.
    pub zero: F,

    niter: usize,
    solution_state: SolutionState,
}

impl<'a, F> TransportSimplex<'a, F>
where
    F: NumAssign + Signed + PartialOrd + Copy + Debug,
{
    /// Create a solver for the given instance.
    ///
    /// Returns an error if the instance is invalid.
    pub fn new(instance: &'a Instance<F>) -> Result<Self> {
        instance.validate()?;
        Ok(TransportSimplex {
            instance,
            initial: InitialMethod::default(),
            max_iterations: None,
            zero: F::zero(),
            niter: 0,
            solution_state: SolutionState::Unknown,
        })
    }

    pub fn instance(&self) -> &'a Instance<F> {
        self.instance
    }

    /// Return the number of pivots of the latest computation.
    pub fn num_iterations(&self) -> usize {
        self.niter
    }

    /// Return the solution state of the latest computation.
    pub fn solution_state(&self) -> SolutionState {
        self.solution_state
    }

    /// Solve the transportation problem.
    pub fn solve(&mut self) -> Solution<F> {
        self.niter = 0;
        self.solution_state = SolutionState::Unknown;

        let balanced = BalancedInstance::new(self.instance);
        let m = balanced.num_rows();
        let n = balanced.num_cols();

        let mut basis = initial_basis(&balanced, self.initial, self.zero);
        let mut tree = SpanningTree::new(m, n);

        // check trivial cases
        if m == 0 || n == 0 {
            // nothing can be shipped, all supplies and demands are zero
            self.solution_state = SolutionState::Optimal;
            return Solution::new(self.instance, &balanced, &basis, &tree, self.solution_state, 0);
        }

        debug!(
            "Solve transportation problem with {} rows and {} columns (dummy: {:?})",
            m,
            n,
            balanced.dummy()
        );

        let mut cycle = Vec::with_capacity(m + n);
        self.solution_state = loop {
            if basis.len() + 1 != m + n || !tree.rebuild(&basis, &balanced) {
                break SolutionState::Infeasible;
            }

            let (i, j) = match self.find_entering_cell(&balanced, &basis, &tree) {
                Some(cell) => cell,
                None => break SolutionState::Optimal,
            };

            if self.max_iterations.map(|max| self.niter >= max).unwrap_or(false) {
                break SolutionState::IterationLimit;
            }
            self.niter += 1;

            if !self.pivot(&mut basis, &tree, &mut cycle, i, j) {
                break SolutionState::Unbounded;
            }
        };

        if self.solution_state == SolutionState::Optimal && !self.check_feasibility(&basis) {
            self.solution_state = SolutionState::Infeasible;
        }

        info!(
            "Transportation simplex finished with state {:?} after {} iterations",
            self.solution_state, self.niter
        );

        Solution::new(self.instance, &balanced, &basis, &tree, self.solution_state, self.niter)
    }

    /// Return the non-basic cell with the most negative reduced cost.
    fn find_entering_cell(
        &self,
        balanced: &BalancedInstance<F>,
        basis: &Basis<F>,
        tree: &SpanningTree<F>,
    ) -> Option<(usize, usize)> {
        let mut min_cost = -self.zero;
        let mut min_cell = None;
        for i in 0..balanced.num_rows() {
            for j in 0..balanced.num_cols() {
                if basis.is_basic(i, j) {
                    continue;
                }
                let c = tree.reduced_cost(balanced, i, j);
                if c < min_cost {
                    min_cost = c;
                    min_cell = Some((i, j));
                }
            }
        }
        min_cell
    }

    /// Let cell `(i,j)` enter the basis.
    ///
    /// Returns `false` if the flow on the cycle can be increased
    /// arbitrarily.
    fn pivot(
        &self,
        basis: &mut Basis<F>,
        tree: &SpanningTree<F>,
        cycle: &mut Vec<(usize, bool)>,
        i: usize,
        j: usize,
    ) -> bool {
        tree.find_cycle(i, j, cycle);

        // The flow change is the minimal flow among all decreasing
        // cells, the leaving cell is the lowest one within the tolerance.
        let mut theta: Option<F> = None;
        for &(k, minus) in cycle.iter() {
            if minus && theta.map(|t| basis.flow(k) < t).unwrap_or(true) {
                theta = Some(basis.flow(k));
            }
        }
        let theta = match theta {
            Some(theta) => theta,
            None => return false,
        };

        let mut k_out: Option<usize> = None;
        for &(k, minus) in cycle.iter() {
            if minus
                && basis.flow(k) <= theta + self.zero
                && k_out.map(|l| basis.cell(k) < basis.cell(l)).unwrap_or(true)
            {
                k_out = Some(k);
            }
        }
        let k_out = match k_out {
            Some(k) => k,
            None => return false,
        };

        debug!(
            "Pivot {}: entering ({},{}), leaving {:?}, flow change {:?}",
            self.niter,
            i,
            j,
            basis.cell(k_out),
            theta
        );

        for &(k, minus) in cycle.iter() {
            basis.add_flow(k, if minus { -theta } else { theta });
            if basis.flow(k).abs() <= self.zero {
                basis.set_flow(k, F::zero());
            }
        }
        basis.replace(k_out, i, j, theta);

        true
    }

    fn check_feasibility(&self, basis: &Basis<F>) -> bool {
        basis.flows().iter().all(|&x| x >= -self.zero)
    }
}

/// Solve a transportation problem with a transportation simplex algorithm.
///
/// The function returns an error if the instance is invalid and the
/// solution otherwise.
pub fn transport_simplex<F>(costs: Vec<Vec<F>>, supplies: Vec<F>, demands: Vec<F>) -> Result<Solution<F>>
where
    F: NumAssign + Signed + PartialOrd + Copy + Debug,
{
    let instance = Instance::new(costs, supplies, demands)?;
    let mut spx = TransportSimplex::new(&instance)?;
    Ok(spx.solve())
}
