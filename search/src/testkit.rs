//! Small synthetic domains shared by the engine's unit tests.

use std::cell::Cell;
use std::rc::Rc;

use crate::contract::{Cost, SearchNode};

/// A walker on the integer segment `0..=len`, one unit per step.
#[derive(Debug, Clone)]
pub struct Line {
    pub pos: u64,
    pub len: u64,
    pub step_cost: Cost,
}

impl Line {
    pub fn new(pos: u64, len: u64) -> Self {
        Self {
            pos,
            len,
            step_cost: 1,
        }
    }
}

impl SearchNode for Line {
    type State = u64;

    fn state(&self) -> &u64 {
        &self.pos
    }

    fn successors(&self) -> Vec<Self> {
        let mut out = Vec::new();
        if self.pos > 0 {
            out.push(Self::new(self.pos - 1, self.len));
        }
        if self.pos < self.len {
            out.push(Self::new(self.pos + 1, self.len));
        }
        out
    }

    fn dist_from_parent(&self) -> Cost {
        self.step_cost
    }
}

/// Explicit weighted digraph. Counts `successors` calls so tests can observe
/// how many expansions an engine performed.
#[derive(Debug)]
pub struct Graph {
    edges: Vec<Vec<(usize, Cost)>>,
    expansions: Cell<u64>,
}

impl Graph {
    pub fn new(vertex_count: usize, edges: &[(usize, usize, Cost)]) -> Rc<Self> {
        let mut adjacency = vec![Vec::new(); vertex_count];
        for &(from, to, cost) in edges {
            adjacency[from].push((to, cost));
        }
        Rc::new(Self {
            edges: adjacency,
            expansions: Cell::new(0),
        })
    }

    /// Same as [`Graph::new`] with every edge mirrored.
    pub fn undirected(vertex_count: usize, edges: &[(usize, usize, Cost)]) -> Rc<Self> {
        let mirrored: Vec<_> = edges
            .iter()
            .flat_map(|&(a, b, c)| [(a, b, c), (b, a, c)])
            .collect();
        Self::new(vertex_count, &mirrored)
    }

    pub fn expansions(&self) -> u64 {
        self.expansions.get()
    }
}

#[derive(Debug, Clone)]
pub struct Vertex {
    pub id: usize,
    pub edge_cost: Cost,
    graph: Rc<Graph>,
}

impl Vertex {
    pub fn root(graph: &Rc<Graph>, id: usize) -> Self {
        Self {
            id,
            edge_cost: 0,
            graph: Rc::clone(graph),
        }
    }
}

impl SearchNode for Vertex {
    type State = usize;

    fn state(&self) -> &usize {
        &self.id
    }

    fn successors(&self) -> Vec<Self> {
        self.graph.expansions.set(self.graph.expansions.get() + 1);
        self.graph.edges[self.id]
            .iter()
            .map(|&(to, cost)| Self {
                id: to,
                edge_cost: cost,
                graph: Rc::clone(&self.graph),
            })
            .collect()
    }

    fn dist_from_parent(&self) -> Cost {
        self.edge_cost
    }
}

/// Heuristic table lookup for [`Vertex`] nodes.
pub fn table(values: &[Cost]) -> impl Fn(&Vertex, &Vertex) -> Cost + '_ {
    move |node: &Vertex, _goal: &Vertex| values[node.id]
}
