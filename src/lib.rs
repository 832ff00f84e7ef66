// Copyright (c) 2022 Frank Fischer <frank-fischer@shadow-soft.de>
//
// This program is free software: you can redistribute it and/or
// modify it under the terms of the GNU General Public License as
// published by the Free Software Foundation, either version 3 of the
// License, or (at your option) any later version.
//
// This program is distributed in the hope that it will be useful, but
// WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the GNU
// General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see  <http://www.gnu.org/licenses/>
//

#![forbid(unsafe_code)]

//! A library for solving transportation problems.
//!
//! A transportation problem asks for the cheapest way to ship goods
//! from a set of suppliers with limited capacities to a set of
//! customers with given demands. This crate solves it with the
//! transportation simplex method: the instance is balanced by a dummy
//! supplier or customer, an initial basic solution is computed by the
//! least cost method (or the northwest corner rule), and the basis is
//! improved by MODI pivots until it is optimal.
//!
//! ```
//! use rs_transport::{transport_simplex, SolutionState};
//!
//! let sol = transport_simplex(vec![vec![10, 20], vec![5, 15]], vec![100, 100], vec![30, 30]).unwrap();
//! assert_eq!(sol.state, SolutionState::Optimal);
//! assert_eq!(sol.value, 600);
//! for (supplier, customer, q) in sol.shipments() {
//!     println!("{} -> {}: {}", supplier, customer, q);
//! }
//! ```

// # Data structures

pub mod instance;
pub use self::instance::{Error, Instance};

pub mod balance;
pub use self::balance::{BalancedInstance, Dummy};

pub mod basis;

pub mod solution;
pub use self::solution::{Solution, SolutionState};

// # Algorithms

pub mod initial;
pub use self::initial::InitialMethod;

pub mod simplex;
pub use self::simplex::{transport_simplex, TransportSimplex};

// # File formats

#[cfg(feature = "dimacs")]
pub mod dimacs;
