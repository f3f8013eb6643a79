use crate::maximum_flow::graph::Graph;
use num_traits::{Bounded, CheckedAdd, NumAssign};

/// Depth-first augmenting paths over the same residual model.
///
/// Path choice is unrelated to breadth-first order, which makes it a useful
/// independent check of the value the stepper converges to.
#[derive(Default)]
pub struct FordFulkerson {
    visited: Vec<bool>,
}

impl FordFulkerson {
    // solves from zero flow and leaves the resulting flow in graph
    pub fn solve<Flow>(&mut self, source: usize, sink: usize, graph: &mut Graph<Flow>) -> Flow
    where
        Flow: NumAssign + CheckedAdd + Bounded + Ord + Copy,
    {
        graph.reset_flow();
        if source == sink {
            return Flow::zero();
        }

        self.visited.resize(graph.num_nodes(), false);
        let mut flow = Flow::zero();
        loop {
            self.visited.fill(false);
            match self.dfs(source, sink, Flow::max_value(), graph) {
                Some(delta) => flow += delta,
                None => break,
            }
        }
        flow
    }

    fn dfs<Flow>(&mut self, u: usize, sink: usize, flow: Flow, graph: &mut Graph<Flow>) -> Option<Flow>
    where
        Flow: NumAssign + CheckedAdd + Bounded + Ord + Copy,
    {
        if u == sink {
            return Some(flow);
        }
        self.visited[u] = true;

        for i in 0..graph.neighbors(u).len() {
            let v = graph.neighbors(u)[i];
            let residual_capacity = graph.residual_capacity(u, v);
            if self.visited[v] || residual_capacity <= Flow::zero() {
                continue;
            }

            if let Some(d) = self.dfs(v, sink, flow.min(residual_capacity), graph) {
                graph.push_flow(u, v, d);
                return Some(d);
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clrs_network() {
        let mut graph = Graph::build(
            &["s", "v1", "v2", "v3", "v4", "t"],
            &[
                ("s", "v1", 16i64),
                ("s", "v2", 13),
                ("v2", "v1", 4),
                ("v1", "v3", 12),
                ("v3", "v2", 9),
                ("v2", "v4", 14),
                ("v4", "v3", 7),
                ("v3", "t", 20),
                ("v4", "t", 4),
            ],
        )
        .unwrap();

        assert_eq!(FordFulkerson::default().solve(0, 5, &mut graph), 23);
        assert_eq!(graph.flow_out_of(0), 23);
        assert_eq!(graph.excess(5), 23);
    }

    #[test]
    fn unreachable_sink() {
        let mut graph = Graph::build(&["s", "t"], &[("t", "s", 3i64)]).unwrap();
        assert_eq!(FordFulkerson::default().solve(0, 1, &mut graph), 0);
    }
}
