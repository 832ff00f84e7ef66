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

//! Solutions of transportation problems.

use crate::balance::{BalancedInstance, Dummy};
use crate::basis::{Basis, SpanningTree};
use crate::instance::Instance;
use num_traits::NumAssign;
#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum SolutionState {
    /// Unknown state, the problem has not been solved, yet
    Unknown,
    /// The problem has been solved to optimality
    Optimal,
    /// The problem is infeasible
    Infeasible,
    /// The problem is unbounded
    Unbounded,
    /// The iteration limit has been reached before optimality
    IterationLimit,
}

/// The result of solving a transportation problem.
///
/// All vectors and matrices have the dimensions of the original
/// instance, flows on cells of a dummy row or column are reported in
/// `unmet_demand` resp. `unused_supply`. The allocation should only be
/// used if `state` is [`SolutionState::Optimal`].
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Solution<F> {
    pub state: SolutionState,
    /// The total cost of the allocation.
    pub value: F,
    /// `quantities[i][j]` is the amount shipped from supplier `i` to customer `j`.
    pub quantities: Vec<Vec<F>>,
    pub supplier_names: Vec<String>,
    pub customer_names: Vec<String>,
    /// The dummy node added to balance the instance.
    pub dummy: Option<Dummy>,
    /// The capacity of each supplier that is not used.
    pub unused_supply: Vec<F>,
    /// The demand of each customer that cannot be satisfied.
    pub unmet_demand: Vec<F>,
    /// The dual values `u[i]` of the suppliers.
    pub supplier_potentials: Vec<F>,
    /// The dual values `v[j]` of the customers.
    pub customer_potentials: Vec<F>,
    /// The number of pivots.
    pub num_iterations: usize,
}

impl<F> Solution<F>
where
    F: NumAssign + PartialOrd + Copy,
{
    pub(crate) fn new(
        instance: &Instance<F>,
        balanced: &BalancedInstance<F>,
        basis: &Basis<F>,
        tree: &SpanningTree<F>,
        state: SolutionState,
        num_iterations: usize,
    ) -> Self {
        let m = instance.num_suppliers();
        let n = instance.num_customers();

        let mut value = F::zero();
        let mut quantities = vec![vec![F::zero(); n]; m];
        let mut unused_supply = vec![F::zero(); m];
        let mut unmet_demand = vec![F::zero(); n];
        for (&(i, j), &flow) in basis.cells().iter().zip(basis.flows()) {
            if balanced.is_original(i, j) {
                quantities[i][j] = flow;
                value += flow * balanced.cost(i, j);
            } else if i < m {
                unused_supply[i] += flow;
            } else if j < n {
                unmet_demand[j] += flow;
            }
        }

        let (supplier_potentials, customer_potentials) = if basis.is_empty() {
            (vec![F::zero(); m], vec![F::zero(); n])
        } else {
            (
                (0..m).map(|i| tree.row_potential(i)).collect(),
                (0..n).map(|j| tree.col_potential(j)).collect(),
            )
        };

        Solution {
            state,
            value,
            quantities,
            supplier_names: instance.supplier_names().to_vec(),
            customer_names: instance.customer_names().to_vec(),
            dummy: balanced.dummy(),
            unused_supply,
            unmet_demand,
            supplier_potentials,
            customer_potentials,
            num_iterations,
        }
    }

    /// Return `true` if the allocation is optimal.
    pub fn is_optimal(&self) -> bool {
        self.state == SolutionState::Optimal
    }

    /// Return the amount shipped from supplier `i` to customer `j`.
    pub fn quantity(&self, i: usize, j: usize) -> F {
        self.quantities[i][j]
    }

    /// Return the total amount shipped by supplier `i`.
    pub fn shipped(&self, i: usize) -> F {
        self.quantities[i].iter().fold(F::zero(), |s, &x| s + x)
    }

    /// Return the total amount received by customer `j`.
    pub fn received(&self, j: usize) -> F {
        self.quantities.iter().fold(F::zero(), |s, row| s + row[j])
    }

    /// Iterate over all shipments with positive quantity.
    ///
    /// The iterator returns triples `(supplier, customer, quantity)` row
    /// by row.
    pub fn shipments(&self) -> impl Iterator<Item = (&str, &str, F)> + '_ {
        self.quantities.iter().enumerate().flat_map(move |(i, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &q)| q > F::zero())
                .map(move |(j, &q)| (self.supplier_names[i].as_str(), self.customer_names[j].as_str(), q))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::SolutionState;
    use crate::transport_simplex;

    #[test]
    fn test_shipments() {
        let sol = transport_simplex(
            vec![vec![10, 15, 20], vec![12, 10, 18], vec![15, 13, 10]],
            vec![100, 150, 80],
            vec![70, 120, 140],
        )
        .unwrap();
        assert_eq!(sol.state, SolutionState::Optimal);
        assert!(sol.is_optimal());
        assert_eq!(sol.value, 3840);

        let shipments = sol.shipments().collect::<Vec<_>>();
        assert_eq!(
            shipments,
            vec![
                ("Supplier_1", "Customer_1", 70),
                ("Supplier_1", "Customer_3", 30),
                ("Supplier_2", "Customer_2", 120),
                ("Supplier_2", "Customer_3", 30),
                ("Supplier_3", "Customer_3", 80),
            ]
        );
        assert_eq!(sol.shipped(1), 150);
        assert_eq!(sol.received(2), 140);
        assert_eq!(sol.quantity(2, 2), 80);
        assert_eq!(sol.dummy, None);
    }

    #[test]
    fn test_unused_supply() {
        let sol = transport_simplex(vec![vec![10, 20], vec![5, 15]], vec![100, 100], vec![30, 30]).unwrap();
        assert_eq!(sol.unused_supply, vec![100, 40]);
        assert_eq!(sol.unmet_demand, vec![0, 0]);
    }

    #[test]
    fn test_unmet_demand() {
        let sol = transport_simplex(vec![vec![10, 20], vec![5, 15]], vec![100, 100], vec![260, 40]).unwrap();
        assert_eq!(sol.unused_supply, vec![0, 0]);
        assert_eq!(sol.unmet_demand, vec![60, 40]);
    }
}
