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

//! Basic solutions of transportation problems.
//!
//! A basic solution of an `m x n` (balanced) transportation problem
//! consists of exactly `m + n - 1` basic cells. Each cell `(i,j)` is an
//! edge between the row node `i` and the column node `m + j` of the
//! bipartite transportation graph, and the basic cells form a spanning
//! tree of this graph.
//!
//! The tree itself is stored in a [`SpanningTree`], an arena indexed by
//! node ids with parent links and linked adjacency lists. Half-edge
//! `2k` leaves the row node of basic cell `k`, half-edge `2k+1` leaves
//! its column node.

use crate::balance::BalancedInstance;
use num_traits::{Num, NumAssign};
use std::collections::VecDeque;

type ID = u32;

/// The basic cells of a basic solution and their flows.
#[derive(Clone, Debug)]
pub struct Basis<F> {
    num_rows: usize,
    num_cols: usize,
    cells: Vec<(usize, usize)>,
    flows: Vec<F>,
    /// Row-major flags for all cells.
    is_basic: Vec<bool>,
}

impl<F> Basis<F>
where
    F: Copy,
{
    /// Create an empty basis for a problem with the given dimensions.
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        Basis {
            num_rows,
            num_cols,
            cells: Vec::with_capacity((num_rows + num_cols).saturating_sub(1)),
            flows: Vec::with_capacity((num_rows + num_cols).saturating_sub(1)),
            is_basic: vec![false; num_rows * num_cols],
        }
    }

    pub fn num_rows(&self) -> usize {
        self.num_rows
    }

    pub fn num_cols(&self) -> usize {
        self.num_cols
    }

    /// The number of basic cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Add the cell `(i,j)` with the given flow to the basis.
    pub fn push(&mut self, i: usize, j: usize, flow: F) {
        debug_assert!(!self.is_basic(i, j));
        self.is_basic[i * self.num_cols + j] = true;
        self.cells.push((i, j));
        self.flows.push(flow);
    }

    /// Replace the `k`-th basic cell by cell `(i,j)` with the given flow.
    pub fn replace(&mut self, k: usize, i: usize, j: usize, flow: F) {
        let (r, c) = self.cells[k];
        self.is_basic[r * self.num_cols + c] = false;
        self.is_basic[i * self.num_cols + j] = true;
        self.cells[k] = (i, j);
        self.flows[k] = flow;
    }

    pub fn is_basic(&self, i: usize, j: usize) -> bool {
        self.is_basic[i * self.num_cols + j]
    }

    /// The `k`-th basic cell.
    pub fn cell(&self, k: usize) -> (usize, usize) {
        self.cells[k]
    }

    pub fn cells(&self) -> &[(usize, usize)] {
        &self.cells
    }

    /// The flow on the `k`-th basic cell.
    pub fn flow(&self, k: usize) -> F {
        self.flows[k]
    }

    /// Set the flow on the `k`-th basic cell.
    pub fn set_flow(&mut self, k: usize, flow: F) {
        self.flows[k] = flow;
    }

    pub fn flows(&self) -> &[F] {
        &self.flows
    }
}

impl<F> Basis<F>
where
    F: NumAssign + Copy,
{
    /// Change the flow on the `k`-th basic cell by `delta`.
    pub fn add_flow(&mut self, k: usize, delta: F) {
        self.flows[k] += delta;
    }

    /// Return the flows of all basic cells as a dense matrix.
    pub fn quantities(&self) -> Vec<Vec<F>> {
        let mut quantities = vec![vec![F::zero(); self.num_cols]; self.num_rows];
        for (&(i, j), &flow) in self.cells.iter().zip(self.flows.iter()) {
            quantities[i][j] = flow;
        }
        quantities
    }
}

/// The spanning tree of a basis together with its node potentials.
///
/// Row node `i` has id `i`, column node `j` has id `num_rows + j`. The
/// tree is rooted at row node 0.
pub struct SpanningTree<F> {
    num_rows: usize,

    /// First half-edge incident to each node.
    first_out: Vec<ID>,
    /// Next half-edge in the adjacency list of the same node.
    next_out: Vec<ID>,

    parent_nodes: Vec<ID>,
    /// The basic cell connecting a node to its parent.
    parent_cells: Vec<ID>,
    depths: Vec<ID>,
    potentials: Vec<F>,

    queue: VecDeque<usize>,
}

impl<F> SpanningTree<F>
where
    F: Num + PartialOrd + Copy,
{
    pub fn new(num_rows: usize, num_cols: usize) -> Self {
        let n = num_rows + num_cols;
        SpanningTree {
            num_rows,
            first_out: vec![ID::max_value(); n],
            next_out: vec![ID::max_value(); 2 * n.saturating_sub(1)],
            parent_nodes: vec![ID::max_value(); n],
            parent_cells: vec![ID::max_value(); n],
            depths: vec![ID::max_value(); n],
            potentials: vec![F::zero(); n],
            queue: VecDeque::with_capacity(n),
        }
    }

    /// Rebuild the tree and the potentials for the given basis.
    ///
    /// The potentials satisfy `u[i] + v[j] == cost(i,j)` for all basic
    /// cells with `u[0] == 0`.
    ///
    /// Returns `false` if the basic cells do not connect all nodes.
    pub fn rebuild(&mut self, basis: &Basis<F>, instance: &BalancedInstance<F>) -> bool {
        let n = self.first_out.len();
        if n == 0 {
            return true;
        }

        // Rebuild the adjacency lists.
        for h in self.first_out.iter_mut() {
            *h = ID::max_value();
        }
        for (k, &(i, j)) in basis.cells().iter().enumerate() {
            let uid = i;
            let vid = self.num_rows + j;
            self.next_out[2 * k] = self.first_out[uid];
            self.first_out[uid] = (2 * k) as ID;
            self.next_out[2 * k + 1] = self.first_out[vid];
            self.first_out[vid] = (2 * k + 1) as ID;
        }

        for d in self.depths.iter_mut() {
            *d = ID::max_value();
        }

        // breadth first search from the root
        let root = 0;
        self.depths[root] = 0;
        self.parent_nodes[root] = ID::max_value();
        self.parent_cells[root] = ID::max_value();
        self.potentials[root] = F::zero();
        self.queue.clear();
        self.queue.push_back(root);
        let mut nvisited = 1;

        while let Some(uid) = self.queue.pop_front() {
            let mut h = self.first_out[uid];
            while h != ID::max_value() {
                let k = h as usize / 2;
                let (i, j) = basis.cell(k);
                let vid = if h & 1 == 0 { self.num_rows + j } else { i };
                if self.depths[vid] == ID::max_value() {
                    self.depths[vid] = self.depths[uid] + 1;
                    self.parent_nodes[vid] = uid as ID;
                    self.parent_cells[vid] = k as ID;
                    self.potentials[vid] = instance.cost(i, j) - self.potentials[uid];
                    self.queue.push_back(vid);
                    nvisited += 1;
                }
                h = self.next_out[h as usize];
            }
        }

        nvisited == n
    }

    /// The potential `u[i]` of row `i`.
    pub fn row_potential(&self, i: usize) -> F {
        self.potentials[i]
    }

    /// The potential `v[j]` of column `j`.
    pub fn col_potential(&self, j: usize) -> F {
        self.potentials[self.num_rows + j]
    }

    /// The reduced cost `cost(i,j) - u[i] - v[j]` of cell `(i,j)`.
    pub fn reduced_cost(&self, instance: &BalancedInstance<F>, i: usize, j: usize) -> F {
        instance.cost(i, j) - self.row_potential(i) - self.col_potential(j)
    }

    /// Compute the cycle closed by adding the non-basic cell `(i,j)`.
    ///
    /// The cycle is stored in `cycle` as pairs `(k, minus)` where `k` is
    /// the index of a basic cell on the cycle and `minus` is `true` if
    /// the flow on this cell decreases when flow is sent through the
    /// entering cell `(i,j)`. The entering cell itself is not contained.
    pub fn find_cycle(&self, i: usize, j: usize, cycle: &mut Vec<(usize, bool)>) {
        cycle.clear();

        // Walk up from both end nodes until the common ancestor is
        // reached. Going around the cycle the entering cell is traversed
        // from row i to column j, hence a tree cell is traversed from a
        // column node to a row node iff its flow decreases.
        let mut uid = i;
        let mut vid = self.num_rows + j;
        while uid != vid {
            if self.depths[uid] >= self.depths[vid] {
                let k = self.parent_cells[uid] as usize;
                cycle.push((k, uid < self.num_rows));
                uid = self.parent_nodes[uid] as usize;
            } else {
                let k = self.parent_cells[vid] as usize;
                cycle.push((k, vid >= self.num_rows));
                vid = self.parent_nodes[vid] as usize;
            }
        }
    }
}
