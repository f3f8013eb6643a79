use crate::error::{ConfigurationError, Result};
use num_traits::{CheckedAdd, NumAssign};
use std::collections::{HashMap, VecDeque};

/// One declaration. `upper` is the capacity of this declaration alone while
/// `flow` is the flow of the whole ordered pair, so with parallel declarations
/// `flow` is bounded by the aggregated `Graph::capacity`, not by `upper`.
#[derive(PartialEq, Debug, Clone)]
pub struct Edge<Flow> {
    pub from: usize,
    pub to: usize,
    pub flow: Flow,
    pub upper: Flow,
}

/// Residual network over string-labelled vertices.
///
/// Capacities are kept per declared ordered pair and summed when a pair is
/// declared more than once. Flow is a single signed value per unordered pair,
/// so `flow(v, u) == -flow(u, v)` can never drift.
///
/// The sum of all declared capacities must fit in `Flow`. It bounds every
/// residual capacity and the total flow, so stepping never overflows.
#[derive(Clone, Debug)]
pub struct Graph<Flow> {
    labels: Vec<String>,
    ids: HashMap<String, usize>,
    adjacency: Vec<Vec<usize>>,
    declarations: Vec<(usize, usize, Flow)>,
    capacities: HashMap<(usize, usize), Flow>,
    flows: HashMap<(usize, usize), Flow>,
    total_capacity: Flow,
}

impl<Flow> Graph<Flow>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy,
{
    pub fn build<V, E>(vertices: &[V], edges: &[(E, E, Flow)]) -> Result<Self>
    where
        V: AsRef<str>,
        E: AsRef<str>,
    {
        let mut graph = Graph {
            labels: Vec::new(),
            ids: HashMap::new(),
            adjacency: Vec::new(),
            declarations: Vec::new(),
            capacities: HashMap::new(),
            flows: HashMap::new(),
            total_capacity: Flow::zero(),
        };
        for label in vertices {
            graph.add_vertex(label.as_ref());
        }
        for (from, to, upper) in edges {
            graph.define_edge(from.as_ref(), to.as_ref(), *upper)?;
        }
        Ok(graph)
    }

    #[inline]
    pub fn num_nodes(&self) -> usize {
        self.labels.len()
    }

    #[inline]
    pub fn num_edges(&self) -> usize {
        self.declarations.len()
    }

    pub fn add_vertex(&mut self, label: &str) -> usize {
        if let Some(&id) = self.ids.get(label) {
            return id;
        }
        self.labels.push(label.to_owned());
        self.adjacency.push(Vec::new());
        self.ids.insert(label.to_owned(), self.labels.len() - 1);
        self.labels.len() - 1
    }

    // return declaration index
    pub fn define_edge(&mut self, from: &str, to: &str, upper: Flow) -> Result<usize> {
        if upper < Flow::zero() {
            return Err(ConfigurationError::NegativeCapacity { from: from.to_owned(), to: to.to_owned() });
        }
        let total_capacity = self
            .total_capacity
            .checked_add(&upper)
            .ok_or_else(|| ConfigurationError::CapacityOverflow { from: from.to_owned(), to: to.to_owned() })?;

        let (u, v) = (self.add_vertex(from), self.add_vertex(to));
        // no pair exceeds the checked total
        *self.capacities.entry((u, v)).or_insert_with(Flow::zero) += upper;
        self.total_capacity = total_capacity;
        if !self.adjacency[u].contains(&v) {
            self.adjacency[u].push(v);
        }
        if !self.adjacency[v].contains(&u) {
            self.adjacency[v].push(u);
        }

        self.declarations.push((u, v, upper));
        Ok(self.declarations.len() - 1)
    }

    #[inline]
    pub fn vertex_id(&self, label: &str) -> Option<usize> {
        self.ids.get(label).copied()
    }

    pub(crate) fn require(&self, label: &str) -> Result<usize> {
        self.vertex_id(label).ok_or_else(|| ConfigurationError::UnknownVertex(label.to_owned()))
    }

    #[inline]
    pub fn label(&self, u: usize) -> &str {
        &self.labels[u]
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    #[inline]
    pub fn neighbors(&self, u: usize) -> &[usize] {
        &self.adjacency[u]
    }

    /// The declaration at `edge_id` together with the current flow of its pair.
    pub fn get_edge(&self, edge_id: usize) -> Option<Edge<Flow>> {
        let &(from, to, upper) = self.declarations.get(edge_id)?;
        Some(Edge { from, to, flow: self.flow(from, to), upper })
    }

    pub fn edges(&self) -> impl Iterator<Item = Edge<Flow>> + '_ {
        (0..self.num_edges()).filter_map(|edge_id| self.get_edge(edge_id))
    }

    // sum of every declared capacity
    #[inline]
    pub fn total_capacity(&self) -> Flow {
        self.total_capacity
    }

    #[inline]
    pub fn capacity(&self, u: usize, v: usize) -> Flow {
        self.capacities.get(&(u, v)).copied().unwrap_or_else(Flow::zero)
    }

    #[inline]
    pub fn flow(&self, u: usize, v: usize) -> Flow {
        let flow = self.flows.get(&(u.min(v), u.max(v))).copied().unwrap_or_else(Flow::zero);
        if u <= v {
            flow
        } else {
            Flow::zero() - flow
        }
    }

    #[inline]
    pub fn residual_capacity(&self, u: usize, v: usize) -> Flow {
        self.capacity(u, v) - self.flow(u, v)
    }

    pub fn push_flow(&mut self, u: usize, v: usize, flow: Flow) {
        debug_assert!(u != v);
        debug_assert!(flow <= self.residual_capacity(u, v));

        let stored = self.flows.entry((u.min(v), u.max(v))).or_insert_with(Flow::zero);
        if u < v {
            *stored += flow;
        } else {
            *stored -= flow;
        }
    }

    pub fn reset_flow(&mut self) {
        self.flows.clear();
    }

    // net flow into u
    pub fn excess(&self, u: usize) -> Flow {
        self.adjacency[u].iter().fold(Flow::zero(), |mut excess, &v| {
            excess += self.flow(v, u);
            excess
        })
    }

    pub fn flow_out_of(&self, u: usize) -> Flow {
        Flow::zero() - self.excess(u)
    }

    // vertices reachable from source in the residual network
    pub fn minimum_cut(&self, source: usize) -> Vec<usize> {
        let mut cut = Vec::new();
        let mut visited = vec![false; self.num_nodes()];
        let mut que = VecDeque::from([source]);
        visited[source] = true;

        while let Some(u) = que.pop_front() {
            cut.push(u);
            for &v in self.adjacency[u].iter() {
                if !visited[v] && self.residual_capacity(u, v) > Flow::zero() {
                    visited[v] = true;
                    que.push_back(v);
                }
            }
        }

        cut
    }
}
