//! Plain text form of a network.
//!
//! The first non-blank line lists the vertices separated by whitespace; every
//! following non-blank line declares one edge as `from to capacity`.
//!
//! ```text
//! S A B T
//! S A 3
//! A T 2
//! ```

use crate::error::{ConfigurationError, Result};
use crate::maximum_flow::graph::Graph;
use log::debug;
use num_traits::{CheckedAdd, NumAssign};
use std::fmt::{Display, Write};
use std::str::FromStr;

#[derive(PartialEq, Debug, Clone)]
pub struct Network<Flow> {
    pub vertices: Vec<String>,
    pub edges: Vec<(String, String, Flow)>,
}

pub fn parse_network<Flow>(text: &str) -> Result<Network<Flow>>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + FromStr,
{
    let mut lines = text.lines().enumerate().map(|(i, line)| (i + 1, line.trim())).filter(|(_, line)| !line.is_empty());

    let (_, header) = lines.next().ok_or(ConfigurationError::MissingVertexList)?;
    let vertices = header.split_whitespace().map(str::to_owned).collect();

    let mut edges = Vec::new();
    for (line, content) in lines {
        let tokens: Vec<&str> = content.split_whitespace().collect();
        let &[from, to, capacity] = tokens.as_slice() else {
            return Err(ConfigurationError::WrongTokenCount { line, found: tokens.len() });
        };

        let capacity: Flow = capacity.parse().map_err(|_| ConfigurationError::InvalidCapacity { line, token: capacity.to_owned() })?;
        if capacity < Flow::zero() {
            return Err(ConfigurationError::NegativeCapacity { from: from.to_owned(), to: to.to_owned() });
        }
        edges.push((from.to_owned(), to.to_owned(), capacity));
    }

    let network = Network { vertices, edges };
    debug!("parsed {} vertices and {} edge lines", network.vertices.len(), network.edges.len());
    Ok(network)
}

pub fn read_network<Flow>(text: &str) -> Result<Graph<Flow>>
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + FromStr,
{
    let network = parse_network(text)?;
    Graph::build(&network.vertices, &network.edges)
}

pub fn write_network<Flow>(graph: &Graph<Flow>) -> String
where
    Flow: NumAssign + CheckedAdd + Ord + Copy + Display,
{
    let mut out = graph.labels().join(" ");
    out.push('\n');
    for edge in graph.edges() {
        // writing into a String cannot fail
        let _ = writeln!(out, "{} {} {}", graph.label(edge.from), graph.label(edge.to), edge.upper);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parses_vertices_and_edges() {
        let network: Network<i64> = parse_network("S A T\nS A 3\n\n  A T 2  \nS A 1\n").unwrap();

        assert_eq!(network.vertices, vec!["S", "A", "T"]);
        assert_eq!(
            network.edges,
            vec![("S".into(), "A".into(), 3), ("A".into(), "T".into(), 2), ("S".into(), "A".into(), 1)]
        );
    }

    #[rstest]
    #[case("", ConfigurationError::MissingVertexList)]
    #[case("  \n\n", ConfigurationError::MissingVertexList)]
    #[case("S T\nS T", ConfigurationError::WrongTokenCount { line: 2, found: 2 })]
    #[case("S T\nS T 1 2", ConfigurationError::WrongTokenCount { line: 2, found: 4 })]
    #[case("S T\n\nS T x", ConfigurationError::InvalidCapacity { line: 3, token: "x".into() })]
    #[case("S T\nS T 2.5", ConfigurationError::InvalidCapacity { line: 2, token: "2.5".into() })]
    #[case("S T\nS T -1", ConfigurationError::NegativeCapacity { from: "S".into(), to: "T".into() })]
    fn rejects_malformed_text(#[case] text: &str, #[case] expected: ConfigurationError) {
        assert_eq!(parse_network::<i64>(text), Err(expected));
    }

    #[test]
    fn written_network_reads_back_with_same_capacities() {
        let graph: Graph<i64> = read_network("S A T\nS A 3\nA T 2\nS A 3\nT S 0\n").unwrap();
        let text = write_network(&graph);
        assert_eq!(text, "S A T\nS A 3\nA T 2\nS A 3\nT S 0\n");

        let again: Graph<i64> = read_network(&text).unwrap();
        assert_eq!(again.capacity(0, 1), 6);
        assert_eq!(again.edges().collect::<Vec<_>>(), graph.edges().collect::<Vec<_>>());
    }

    #[test]
    fn edge_endpoints_missing_from_header_are_added() {
        let graph: Graph<i64> = read_network("S\nS X 1\nX T 1").unwrap();
        assert_eq!(graph.labels(), &["S", "X", "T"]);
    }
}
