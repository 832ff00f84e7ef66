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

//! Balancing of transportation instances.
//!
//! The transportation simplex requires the total supply to equal the
//! total demand. An unbalanced instance is turned into a balanced one
//! by appending a *dummy* supplier (if demand exceeds supply) or a
//! *dummy* customer (if supply exceeds demand) whose capacity resp.
//! requirement is the difference. All cells of the dummy row or
//! column have zero cost.

use crate::instance::Instance;
use num_traits::Num;
#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};

/// The kind of dummy node added to balance an instance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Dummy {
    /// A dummy supplier (last row) covering the unmet demand.
    Supplier,
    /// A dummy customer (last column) absorbing the unused supply.
    Customer,
}

/// A balanced transportation instance.
///
/// The costs are stored row by row in a single vector.
pub struct BalancedInstance<F> {
    costs: Vec<F>,
    supplies: Vec<F>,
    demands: Vec<F>,
    num_suppliers: usize,
    num_customers: usize,
    dummy: Option<Dummy>,
}

impl<F> BalancedInstance<F>
where
    F: Num + PartialOrd + Copy,
{
    /// Balance the given instance.
    pub fn new(instance: &Instance<F>) -> Self {
        let m = instance.num_suppliers();
        let n = instance.num_customers();
        let total_supply = instance.total_supply();
        let total_demand = instance.total_demand();

        let mut supplies = instance.supplies().to_vec();
        let mut demands = instance.demands().to_vec();

        let dummy = if total_supply > total_demand {
            demands.push(total_supply - total_demand);
            Some(Dummy::Customer)
        } else if total_supply < total_demand {
            supplies.push(total_demand - total_supply);
            Some(Dummy::Supplier)
        } else {
            None
        };

        let ncols = demands.len();
        let mut costs = Vec::with_capacity(supplies.len() * ncols);
        for row in instance.costs() {
            costs.extend_from_slice(row);
            if dummy == Some(Dummy::Customer) {
                costs.push(F::zero());
            }
        }
        if dummy == Some(Dummy::Supplier) {
            costs.extend((0..ncols).map(|_| F::zero()));
        }

        BalancedInstance {
            costs,
            supplies,
            demands,
            num_suppliers: m,
            num_customers: n,
            dummy,
        }
    }

    /// The number of rows including a possible dummy supplier.
    pub fn num_rows(&self) -> usize {
        self.supplies.len()
    }

    /// The number of columns including a possible dummy customer.
    pub fn num_cols(&self) -> usize {
        self.demands.len()
    }

    /// The number of suppliers of the original instance.
    pub fn num_suppliers(&self) -> usize {
        self.num_suppliers
    }

    /// The number of customers of the original instance.
    pub fn num_customers(&self) -> usize {
        self.num_customers
    }

    pub fn dummy(&self) -> Option<Dummy> {
        self.dummy
    }

    pub fn cost(&self, i: usize, j: usize) -> F {
        self.costs[i * self.demands.len() + j]
    }

    pub fn supply(&self, i: usize) -> F {
        self.supplies[i]
    }

    pub fn demand(&self, j: usize) -> F {
        self.demands[j]
    }

    pub fn supplies(&self) -> &[F] {
        &self.supplies
    }

    pub fn demands(&self) -> &[F] {
        &self.demands
    }

    /// Return `true` if cell `(i,j)` belongs to the original instance.
    pub fn is_original(&self, i: usize, j: usize) -> bool {
        i < self.num_suppliers && j < self.num_customers
    }
}

#[cfg(test)]
mod tests {
    use super::{BalancedInstance, Dummy};
    use crate::Instance;

    fn sum(xs: &[i32]) -> i32 {
        xs.iter().sum()
    }

    #[test]
    fn test_balanced_pass_through() {
        let instance = Instance::new(vec![vec![10, 20], vec![5, 15]], vec![70, 70], vec![70, 70]).unwrap();
        let b = BalancedInstance::new(&instance);
        assert_eq!(b.dummy(), None);
        assert_eq!(b.num_rows(), 2);
        assert_eq!(b.num_cols(), 2);
        assert_eq!(b.cost(1, 1), 15);
        assert_eq!(sum(b.supplies()), sum(b.demands()));
    }

    #[test]
    fn test_dummy_customer() {
        let instance = Instance::new(vec![vec![10, 20], vec![5, 15]], vec![100, 100], vec![30, 30]).unwrap();
        let b = BalancedInstance::new(&instance);
        assert_eq!(b.dummy(), Some(Dummy::Customer));
        assert_eq!(b.num_rows(), 2);
        assert_eq!(b.num_cols(), 3);
        assert_eq!(b.demands(), &[30, 30, 140]);
        assert_eq!(b.cost(0, 2), 0);
        assert_eq!(b.cost(1, 2), 0);
        assert_eq!(b.cost(1, 0), 5);
        assert!(b.is_original(1, 1));
        assert!(!b.is_original(1, 2));
        assert_eq!(sum(b.supplies()), sum(b.demands()));
        // the original instance is untouched
        assert_eq!(instance.demands(), &[30, 30]);
    }

    #[test]
    fn test_dummy_supplier() {
        let instance = Instance::new(vec![vec![10, 20], vec![5, 15]], vec![100, 100], vec![260, 40]).unwrap();
        let b = BalancedInstance::new(&instance);
        assert_eq!(b.dummy(), Some(Dummy::Supplier));
        assert_eq!(b.num_rows(), 3);
        assert_eq!(b.num_cols(), 2);
        assert_eq!(b.supplies(), &[100, 100, 100]);
        assert_eq!(b.cost(2, 0), 0);
        assert_eq!(b.cost(2, 1), 0);
        assert_eq!(b.num_suppliers(), 2);
        assert_eq!(sum(b.supplies()), sum(b.demands()));
    }

    #[test]
    fn test_empty() {
        let instance = Instance::<f64>::new(vec![], vec![], vec![]).unwrap();
        let b = BalancedInstance::new(&instance);
        assert_eq!(b.dummy(), None);
        assert_eq!(b.num_rows(), 0);
        assert_eq!(b.num_cols(), 0);
    }
}
