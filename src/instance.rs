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

//! Transportation problem instances.
//!
//! An instance consists of a cost matrix with one row per supplier
//! and one column per customer, the supply (capacity) of each
//! supplier and the demand (requirement) of each customer. All values
//! must be non-negative. Suppliers and customers may carry names,
//! which are only used for reporting.

use num_traits::Zero;
#[cfg(feature = "serialize")]
use serde_derive::{Deserialize, Serialize};
use thiserror::Error;

/// Error for malformed transportation instances.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("cost matrix has {rows} rows, but {supplies} supplies are given")]
    SupplyMismatch { rows: usize, supplies: usize },
    #[error("row {row} of the cost matrix has {cols} entries, but {demands} demands are given")]
    DemandMismatch { row: usize, cols: usize, demands: usize },
    #[error("cost of cell ({row}, {col}) is negative or not a number")]
    NegativeCost { row: usize, col: usize },
    #[error("supply of supplier {0} is negative or not a number")]
    NegativeSupply(usize),
    #[error("demand of customer {0} is negative or not a number")]
    NegativeDemand(usize),
    #[error("{names} {kind} names given for {expected} {kind}s")]
    NameMismatch {
        kind: &'static str,
        names: usize,
        expected: usize,
    },
}

pub type Result<T> = std::result::Result<T, Error>;

/// A transportation problem.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Instance<F> {
    costs: Vec<Vec<F>>,
    supplies: Vec<F>,
    demands: Vec<F>,
    supplier_names: Vec<String>,
    customer_names: Vec<String>,
}

impl<F> Instance<F>
where
    F: Zero + PartialOrd + Copy,
{
    /// Create a new instance.
    ///
    /// `costs[i][j]` is the cost of shipping one unit from supplier `i`
    /// to customer `j`. The suppliers are named `Supplier_1`, ... and
    /// the customers `Customer_1`, ...
    ///
    /// Returns an error if the dimensions do not match or some value is
    /// negative.
    pub fn new(costs: Vec<Vec<F>>, supplies: Vec<F>, demands: Vec<F>) -> Result<Self> {
        let supplier_names = (1..=supplies.len()).map(|i| format!("Supplier_{}", i)).collect();
        let customer_names = (1..=demands.len()).map(|j| format!("Customer_{}", j)).collect();
        let instance = Instance {
            costs,
            supplies,
            demands,
            supplier_names,
            customer_names,
        };
        instance.validate()?;
        Ok(instance)
    }

    /// Replace the supplier and customer names.
    pub fn with_names<S, T>(mut self, supplier_names: Vec<S>, customer_names: Vec<T>) -> Result<Self>
    where
        S: Into<String>,
        T: Into<String>,
    {
        self.supplier_names = supplier_names.into_iter().map(Into::into).collect();
        self.customer_names = customer_names.into_iter().map(Into::into).collect();
        self.validate()?;
        Ok(self)
    }

    /// Check the dimensions and signs of all values.
    ///
    /// Instances created by [`Instance::new`] are always valid, but
    /// deserialized ones might not be.
    pub fn validate(&self) -> Result<()> {
        if self.costs.len() != self.supplies.len() {
            return Err(Error::SupplyMismatch {
                rows: self.costs.len(),
                supplies: self.supplies.len(),
            });
        }

        for (i, row) in self.costs.iter().enumerate() {
            if row.len() != self.demands.len() {
                return Err(Error::DemandMismatch {
                    row: i,
                    cols: row.len(),
                    demands: self.demands.len(),
                });
            }
        }

        if self.supplier_names.len() != self.supplies.len() {
            return Err(Error::NameMismatch {
                kind: "supplier",
                names: self.supplier_names.len(),
                expected: self.supplies.len(),
            });
        }

        if self.customer_names.len() != self.demands.len() {
            return Err(Error::NameMismatch {
                kind: "customer",
                names: self.customer_names.len(),
                expected: self.demands.len(),
            });
        }

        // `!(x >= 0)` also catches NaN for floating point types.
        if let Some(i) = self.supplies.iter().position(|&s| !(s >= F::zero())) {
            return Err(Error::NegativeSupply(i));
        }
        if let Some(j) = self.demands.iter().position(|&d| !(d >= F::zero())) {
            return Err(Error::NegativeDemand(j));
        }
        for (i, row) in self.costs.iter().enumerate() {
            if let Some(j) = row.iter().position(|&c| !(c >= F::zero())) {
                return Err(Error::NegativeCost { row: i, col: j });
            }
        }

        Ok(())
    }

    pub fn num_suppliers(&self) -> usize {
        self.supplies.len()
    }

    pub fn num_customers(&self) -> usize {
        self.demands.len()
    }

    /// The cost of shipping one unit from supplier `i` to customer `j`.
    pub fn cost(&self, i: usize, j: usize) -> F {
        self.costs[i][j]
    }

    pub fn costs(&self) -> &[Vec<F>] {
        &self.costs
    }

    pub fn supply(&self, i: usize) -> F {
        self.supplies[i]
    }

    pub fn supplies(&self) -> &[F] {
        &self.supplies
    }

    pub fn demand(&self, j: usize) -> F {
        self.demands[j]
    }

    pub fn demands(&self) -> &[F] {
        &self.demands
    }

    pub fn supplier_names(&self) -> &[String] {
        &self.supplier_names
    }

    pub fn customer_names(&self) -> &[String] {
        &self.customer_names
    }

    /// Return the sum of all supplies.
    pub fn total_supply(&self) -> F {
        self.supplies.iter().fold(F::zero(), |s, &x| s + x)
    }

    /// Return the sum of all demands.
    pub fn total_demand(&self) -> F {
        self.demands.iter().fold(F::zero(), |s, &x| s + x)
    }
}

#[cfg(test)]
mod tests {
    use super::{Error, Instance};

    #[test]
    fn test_valid() {
        let instance = Instance::new(vec![vec![10, 20], vec![5, 15]], vec![100, 100], vec![50, 50]).unwrap();
        assert_eq!(instance.num_suppliers(), 2);
        assert_eq!(instance.num_customers(), 2);
        assert_eq!(instance.cost(1, 0), 5);
        assert_eq!(instance.total_supply(), 200);
        assert_eq!(instance.total_demand(), 100);
        assert_eq!(instance.supplier_names(), &["Supplier_1", "Supplier_2"]);
        assert_eq!(instance.customer_names(), &["Customer_1", "Customer_2"]);
    }

    #[test]
    fn test_dimension_mismatch() {
        let costs = vec![vec![1.0, 2.0, 3.0], vec![4.0, 5.0, 6.0]];
        assert_eq!(
            Instance::new(costs.clone(), vec![1.0, 1.0, 1.0], vec![1.0, 1.0, 1.0]),
            Err(Error::SupplyMismatch { rows: 2, supplies: 3 })
        );
        assert_eq!(
            Instance::new(costs, vec![1.0, 1.0], vec![1.0, 1.0]),
            Err(Error::DemandMismatch {
                row: 0,
                cols: 3,
                demands: 2
            })
        );
    }

    #[test]
    fn test_negative_values() {
        assert_eq!(
            Instance::new(vec![vec![1, 2]], vec![-1], vec![1, 1]),
            Err(Error::NegativeSupply(0))
        );
        assert_eq!(
            Instance::new(vec![vec![1, 2]], vec![1], vec![1, -1]),
            Err(Error::NegativeDemand(1))
        );
        assert_eq!(
            Instance::new(vec![vec![1, 2], vec![3, -4]], vec![1, 1], vec![1, 1]),
            Err(Error::NegativeCost { row: 1, col: 1 })
        );
        assert_eq!(
            Instance::new(vec![vec![f64::NAN]], vec![1.0], vec![1.0]),
            Err(Error::NegativeCost { row: 0, col: 0 })
        );
    }

    #[test]
    fn test_names() {
        let instance = Instance::new(vec![vec![1, 2]], vec![3], vec![1, 2])
            .unwrap()
            .with_names(vec!["Porto"], vec!["Lisboa", "Braga"])
            .unwrap();
        assert_eq!(instance.supplier_names(), &["Porto"]);
        assert_eq!(instance.customer_names(), &["Lisboa", "Braga"]);

        let err = Instance::new(vec![vec![1, 2]], vec![3], vec![1, 2])
            .unwrap()
            .with_names(vec!["Porto"], vec!["Lisboa"]);
        assert_eq!(
            err,
            Err(Error::NameMismatch {
                kind: "customer",
                names: 1,
                expected: 2
            })
        );
    }

    #[cfg(feature = "serialize")]
    mod serialize {
        use super::super::{Error, Instance};
        use serde_json;

        #[test]
        fn test_serde() {
            let instance = Instance::new(vec![vec![10, 20], vec![5, 15]], vec![100, 100], vec![30, 30])
                .unwrap()
                .with_names(vec!["Porto", "Faro"], vec!["Lisboa", "Braga"])
                .unwrap();

            let serialized = serde_json::to_string(&instance).unwrap();
            let other: Instance<i32> = serde_json::from_str(&serialized).unwrap();
            assert_eq!(instance, other);
            assert_eq!(other.validate(), Ok(()));
        }

        #[test]
        fn test_deserialize_invalid() {
            let json = r#"{"costs":[[1,2]],"supplies":[1,1],"demands":[1,1],"supplier_names":["a","b"],"customer_names":["x","y"]}"#;
            let instance: Instance<i32> = serde_json::from_str(json).unwrap();
            assert_eq!(instance.validate(), Err(Error::SupplyMismatch { rows: 1, supplies: 2 }));
        }
    }
}
