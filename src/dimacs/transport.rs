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

//! This module implements read and write functions for transportation
//! problems in a DIMACS like format. A file must look as follows.
//!
//! 1. empty lines are allowed and ignored
//! 2. a line starting with `c` is a comment line and is ignored
//! 3. the first non-comment line must have the form `p trn <m> <n>`,
//!    where `<m>` is the number of suppliers and `<n>` the number of
//!    customers.
//! 4. supplier lines `s <i> <supply> [<name>]` give the supply of
//!    supplier `<i>` (between `1..m`) and optionally its name.
//!    Suppliers without a line have supply 0.
//! 5. customer lines `t <j> <demand> [<name>]` give the demand of
//!    customer `<j>` (between `1..n`) and optionally its name.
//!    Customers without a line have demand 0.
//! 6. cost lines `a <i> <j> <c>` give the cost `<c>` of shipping one
//!    unit from supplier `<i>` to customer `<j>`. There must be exactly
//!    one cost line for each of the `m * n` cells.
//!
//! Names must be non-empty and must not contain whitespace, [`write`]
//! refuses instances with other names.
//!
//! A solution file consists of a line `s <value>` with the total cost
//! followed by lines `f <i> <j> <q>` for all cells with positive
//! quantity.

use super::{DimacsReader, Error, Result};
use crate::instance::Instance;
use crate::solution::Solution;
use num_traits::Zero;
use std::fmt::Display;
use std::io::{self, Read, Write};
use std::str::FromStr;

/// Read a transportation instance.
pub fn read<R, T>(r: R) -> Result<Instance<T>>
where
    R: Read,
    T: FromStr + Zero + PartialOrd + Copy,
    T::Err: Display,
{
    let mut reader = DimacsReader::new(r);

    // Read the problem line.
    let mut pline = reader.expect_line('p')?;
    pline.expect("trn")?;
    let nrows: usize = pline.number()?;
    let ncols: usize = pline.number()?;
    pline.end()?;

    let mut supplies = vec![T::zero(); nrows];
    let mut demands = vec![T::zero(); ncols];
    let mut supplier_names: Vec<Option<String>> = vec![None; nrows];
    let mut customer_names: Vec<Option<String>> = vec![None; ncols];
    let mut costs: Vec<Vec<Option<T>>> = vec![vec![None; ncols]; nrows];

    while let Some((d, mut toks)) = reader.read_one_line_of(&["s", "t", "a"])? {
        match d {
            "s" => {
                let i = toks.index("supplier", nrows)?;
                supplies[i] = toks.number()?;
                supplier_names[i] = toks.next().map(String::from);
            }
            "t" => {
                let j = toks.index("customer", ncols)?;
                demands[j] = toks.number()?;
                customer_names[j] = toks.next().map(String::from);
            }
            _ => {
                let i = toks.index("supplier", nrows)?;
                let j = toks.index("customer", ncols)?;
                let c = toks.number()?;
                if costs[i][j].is_some() {
                    return Err(Error::Data {
                        line: toks.line,
                        msg: format!("duplicate cost for cell ({},{})", i + 1, j + 1),
                    });
                }
                costs[i][j] = Some(c);
            }
        }

        toks.end()?;
    }

    let line = reader.line_number();
    let costs = costs
        .into_iter()
        .enumerate()
        .map(|(i, row)| {
            row.into_iter()
                .enumerate()
                .map(|(j, c)| {
                    c.ok_or_else(|| Error::Data {
                        line,
                        msg: format!("missing cost for cell ({},{})", i + 1, j + 1),
                    })
                })
                .collect::<Result<Vec<_>>>()
        })
        .collect::<Result<Vec<_>>>()?;

    let supplier_names = supplier_names
        .into_iter()
        .enumerate()
        .map(|(i, name)| name.unwrap_or_else(|| format!("Supplier_{}", i + 1)))
        .collect::<Vec<_>>();
    let customer_names = customer_names
        .into_iter()
        .enumerate()
        .map(|(j, name)| name.unwrap_or_else(|| format!("Customer_{}", j + 1)))
        .collect::<Vec<_>>();

    Ok(Instance::new(costs, supplies, demands)?.with_names(supplier_names, customer_names)?)
}

pub fn read_from_file<T>(filename: &str) -> Result<Instance<T>>
where
    T: FromStr + Zero + PartialOrd + Copy,
    T::Err: Display,
{
    read(std::fs::File::open(filename)?)
}

/// Write a transportation instance.
///
/// Returns an error of kind `InvalidInput` if a name is empty or
/// contains whitespace, because it could not be read back.
pub fn write<W, T>(mut w: W, instance: &Instance<T>) -> io::Result<()>
where
    W: Write,
    T: Zero + PartialOrd + Copy + Display,
{
    let m = instance.num_suppliers();
    let n = instance.num_customers();

    let mut names = instance.supplier_names().iter().chain(instance.customer_names());
    if let Some(name) = names.find(|name| name.is_empty() || name.contains(char::is_whitespace)) {
        return Err(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("name {:?} must be non-empty without whitespace", name),
        ));
    }

    writeln!(w, "p trn {} {}", m, n)?;
    for i in 0..m {
        writeln!(w, "s {} {} {}", i + 1, instance.supply(i), instance.supplier_names()[i])?;
    }
    for j in 0..n {
        writeln!(w, "t {} {} {}", j + 1, instance.demand(j), instance.customer_names()[j])?;
    }
    for i in 0..m {
        for j in 0..n {
            writeln!(w, "a {} {} {}", i + 1, j + 1, instance.cost(i, j))?;
        }
    }

    Ok(())
}

/// Write a transportation instance to a named file.
pub fn write_to_file<T>(filename: &str, instance: &Instance<T>) -> std::io::Result<()>
where
    T: Zero + PartialOrd + Copy + Display,
{
    write(&mut std::fs::File::create(filename)?, instance)
}

/// Write a solution of a transportation problem.
pub fn write_solution<W, T>(mut w: W, solution: &Solution<T>) -> std::io::Result<()>
where
    W: Write,
    T: Zero + Display,
{
    writeln!(w, "s {}", solution.value)?;
    for (i, row) in solution.quantities.iter().enumerate() {
        for (j, q) in row.iter().enumerate() {
            if !q.is_zero() {
                writeln!(w, "f {} {} {}", i + 1, j + 1, q)?;
            }
        }
    }

    Ok(())
}

/// Write a solution of a transportation problem to a named file.
pub fn write_solution_to_file<T>(filename: &str, solution: &Solution<T>) -> std::io::Result<()>
where
    T: Zero + Display,
{
    write_solution(&mut std::fs::File::create(filename)?, solution)
}

/// Read a solution of a transportation problem.
///
/// Returns the total cost and the list of `(i, j, q)` shipments with
/// 0-based indices.
pub fn read_solution<R, T>(r: R) -> Result<(T, Vec<(usize, usize, T)>)>
where
    R: Read,
    T: FromStr,
    T::Err: Display,
{
    let mut reader = DimacsReader::new(r);
    let mut flows = vec![];
    let mut sol = None;

    while let Some((d, mut toks)) = reader.read_one_line_of(&["f", "s"])? {
        if d == "f" {
            let i = toks.index("supplier", usize::MAX)?;
            let j = toks.index("customer", usize::MAX)?;
            flows.push((i, j, toks.number()?));
        } else {
            if sol.is_some() {
                return Err(Error::Format {
                    line: toks.line,
                    msg: "The solution value must be specified exactly once".to_string(),
                });
            }
            sol = Some(toks.number()?);
        }
        toks.end()?;
    }

    Ok((
        sol.ok_or_else(|| Error::Format {
            line: 0,
            msg: "Missing solution value".to_string(),
        })?,
        flows,
    ))
}

/// Read a solution of a transportation problem from a named file.
pub fn read_solution_from_file<T>(filename: &str) -> Result<(T, Vec<(usize, usize, T)>)>
where
    T: FromStr,
    T::Err: Display,
{
    read_solution(std::fs::File::open(filename)?)
}
