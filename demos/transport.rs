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

use num_traits::{NumAssign, Signed, ToPrimitive, Zero};
use rs_transport::dimacs;
use rs_transport::{InitialMethod, TransportSimplex};
use std::error::Error;
use std::fmt::{Debug, Display};
use std::io::Write;
use std::path::PathBuf;
use std::result::Result;
use std::str::FromStr;

use rustop::opts;
use time::OffsetDateTime;

trait ZeroValue {
    fn zero() -> Self;
}

impl ZeroValue for isize {
    fn zero() -> isize {
        0
    }
}

impl ZeroValue for f64 {
    fn zero() -> f64 {
        1e-9
    }
}

fn run<F>(filename: &str, initial: InitialMethod, max_iterations: Option<usize>) -> Result<(), Box<dyn Error>>
where
    F: NumAssign + Signed + PartialOrd + Copy + Debug + ToPrimitive + FromStr + Display + ZeroValue,
    F::Err: Display,
{
    let tstart = OffsetDateTime::now_utc();
    let instance = dimacs::transport::read_from_file::<F>(filename)?;
    let tend = OffsetDateTime::now_utc();

    println!("Instance            : {}", filename);
    println!("Read Time (seconds) : {}", (tend - tstart).as_seconds_f64());
    println!("Value type          : {}", std::any::type_name::<F>());
    println!("Number of suppliers : {}", instance.num_suppliers());
    println!("Number of customers : {}", instance.num_customers());
    println!("Total supply        : {}", instance.total_supply());
    println!("Total demand        : {}", instance.total_demand());

    let mut spx = TransportSimplex::new(&instance)?;
    spx.initial = initial;
    spx.max_iterations = max_iterations;
    spx.zero = ZeroValue::zero();

    let tstart = OffsetDateTime::now_utc();
    let sol = spx.solve();
    let tend = OffsetDateTime::now_utc();
    let soltime = (tend - tstart).as_seconds_f64();

    println!();
    println!("Solution state      : {:?}", sol.state);
    println!("Value               : {:.2}", sol.value.to_f64().unwrap_or(f64::NAN));
    println!("Time (seconds)      : {:.2}", soltime);
    println!("Iterations (total)  : {}", sol.num_iterations);

    if !sol.is_optimal() {
        return Ok(());
    }

    println!();
    println!("Shipments:");
    for (supplier, customer, q) in sol.shipments() {
        println!("  {} -> {}: {}", supplier, customer, q);
    }
    for (i, q) in sol.unused_supply.iter().enumerate().filter(|(_, q)| !q.is_zero()) {
        println!("  {} keeps {}", sol.supplier_names[i], q);
    }
    for (j, q) in sol.unmet_demand.iter().enumerate().filter(|(_, q)| !q.is_zero()) {
        println!("  {} misses {}", sol.customer_names[j], q);
    }

    println!();
    println!("Write solution to   : {}.sol", filename);

    let solfile = PathBuf::from(format!("{}.sol", filename));
    let f = &mut std::fs::File::create(&solfile)?;
    let fname = solfile
        .file_name()
        .map(|s| s.to_string_lossy())
        .unwrap_or_else(|| "".into());
    writeln!(f, "c Solved with a transportation simplex")?;
    writeln!(f, "c instance            : {}", fname)?;
    writeln!(f, "c solution time       : {:.2} seconds", soltime)?;
    writeln!(f, "c number of iterations: {}", sol.num_iterations)?;
    dimacs::transport::write_solution(f, &sol)?;

    Ok(())
}

fn main() -> Result<(), Box<dyn Error>> {
    let (args, _) = opts! {
        synopsis "Solve a transportation problem with a transportation simplex algorithm.";
        param file:String, desc:"Instance file name";
        opt northwest:bool, desc:"Northwest corner rule for the initial basis";
        opt max_iterations:Option<usize>, desc:"Maximal number of pivots";
        opt floating_point:bool, desc:"Use floating point values";
    }
    .parse_or_exit();

    let initial = if args.northwest {
        InitialMethod::NorthwestCorner
    } else {
        InitialMethod::LeastCost
    };

    if args.floating_point {
        run::<f64>(&args.file, initial, args.max_iterations)
    } else {
        run::<isize>(&args.file, initial, args.max_iterations)
    }
}
