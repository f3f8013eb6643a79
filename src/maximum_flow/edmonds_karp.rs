use crate::error::{ConfigurationError, Result};
use crate::maximum_flow::graph::Graph;
use crate::maximum_flow::status::{EdgeState, PathRecord, State, StepStatus, Summary};
use log::{debug, info, trace};
use num_traits::{Bounded, CheckedAdd, NumAssign};
use std::collections::VecDeque;
use std::fmt::Display;

/// Edmonds-Karp driven one augmenting path per call.
///
/// Each `step` augments along the first source-sink path found in breadth-first
/// order, i.e. a shortest path by hop count in the residual network.
#[derive(Clone, Debug)]
pub struct EdmondsKarp<Flow> {
    graph: Graph<Flow>,
    total_flow: Flow,
    path_log: Vec<PathRecord<Flow>>,
    state: State,
}

impl<Flow> EdmondsKarp<Flow>
where
    Flow: NumAssign + CheckedAdd + Bounded + Ord + Copy + Display,
{
    pub fn new(graph: Graph<Flow>) -> Self {
        Self { graph, total_flow: Flow::zero(), path_log: Vec::new(), state: State::Running }
    }

    pub fn build<V, E>(vertices: &[V], edges: &[(E, E, Flow)]) -> Result<Self>
    where
        V: AsRef<str>,
        E: AsRef<str>,
    {
        Ok(Self::new(Graph::build(vertices, edges)?))
    }

    #[inline]
    pub fn graph(&self) -> &Graph<Flow> {
        &self.graph
    }

    #[inline]
    pub fn total_flow(&self) -> Flow {
        self.total_flow
    }

    #[inline]
    pub fn path_log(&self) -> &[PathRecord<Flow>] {
        &self.path_log
    }

    #[inline]
    pub fn is_finished(&self) -> bool {
        self.state == State::Finished
    }

    pub fn summary(&self) -> Option<Summary<Flow>> {
        if !self.is_finished() {
            return None;
        }
        Some(Summary { paths: self.path_log.clone(), total_flow: self.total_flow })
    }

    pub fn step(&mut self, source: &str, sink: &str) -> Result<StepStatus<Flow>> {
        let (source, sink) = self.terminals(source, sink)?;
        if self.is_finished() {
            return Ok(StepStatus::NoPathFound { total_flow: self.total_flow });
        }

        let Some((prev, delta)) = self.bfs(source, sink) else {
            self.state = State::Finished;
            info!("no augmenting path left, maximum flow {} after {} paths", self.total_flow, self.path_log.len());
            return Ok(StepStatus::NoPathFound { total_flow: self.total_flow });
        };

        let mut path = vec![sink];
        let mut v = sink;
        while let Some(u) = prev[v] {
            path.push(u);
            v = u;
        }
        path.reverse();

        // update flow
        for pair in path.windows(2) {
            self.graph.push_flow(pair[0], pair[1], delta);
        }
        self.total_flow += delta;

        let record = PathRecord {
            vertices: path.iter().map(|&u| self.graph.label(u).to_owned()).collect(),
            amount: delta,
        };
        debug!("{record}, total flow {}", self.total_flow);
        self.path_log.push(record.clone());

        Ok(StepStatus::Augmented { path: record, total_flow: self.total_flow })
    }

    /// Steps until no augmenting path remains.
    pub fn run(&mut self, source: &str, sink: &str) -> Result<Summary<Flow>> {
        while !self.step(source, sink)?.is_finished() {}
        Ok(Summary { paths: self.path_log.clone(), total_flow: self.total_flow })
    }

    pub fn reset(&mut self) {
        self.graph.reset_flow();
        self.total_flow = Flow::zero();
        self.path_log.clear();
        self.state = State::Running;
        debug!("flow reset on {} vertices, {} edges", self.graph.num_nodes(), self.graph.num_edges());
    }

    pub fn edge_state(&self, from: &str, to: &str) -> Result<EdgeState<Flow>> {
        let (u, v) = (self.graph.require(from)?, self.graph.require(to)?);
        Ok(EdgeState { flow: self.graph.flow(u, v), capacity: self.graph.capacity(u, v) })
    }

    /// Source side of the cut left by the current flow. Once finished this is a minimum cut.
    pub fn minimum_cut(&self, source: &str) -> Result<Vec<String>> {
        let source = self.graph.require(source)?;
        Ok(self.graph.minimum_cut(source).into_iter().map(|u| self.graph.label(u).to_owned()).collect())
    }

    fn terminals(&self, source: &str, sink: &str) -> Result<(usize, usize)> {
        let (s, t) = (self.graph.require(source)?, self.graph.require(sink)?);
        if s == t {
            return Err(ConfigurationError::SourceIsSink(source.to_owned()));
        }
        Ok((s, t))
    }

    // parents of the first path found and its bottleneck
    fn bfs(&self, source: usize, sink: usize) -> Option<(Vec<Option<usize>>, Flow)> {
        let mut prev = vec![None; self.graph.num_nodes()];
        let mut visited = vec![false; self.graph.num_nodes()];
        visited[source] = true;

        let mut queue = VecDeque::from([(source, Flow::max_value())]);
        while let Some((u, bottleneck)) = queue.pop_front() {
            for &v in self.graph.neighbors(u) {
                let residual_capacity = self.graph.residual_capacity(u, v);
                if visited[v] || residual_capacity <= Flow::zero() {
                    continue;
                }

                visited[v] = true;
                prev[v] = Some(u);
                let bottleneck = bottleneck.min(residual_capacity);
                trace!("discovered {} from {} (bottleneck {bottleneck})", self.graph.label(v), self.graph.label(u));
                if v == sink {
                    return Some((prev, bottleneck));
                }
                queue.push_back((v, bottleneck));
            }
        }

        None
    }
}
