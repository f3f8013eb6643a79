pub mod edmonds_karp;
pub mod ford_fulkerson;
pub mod graph;
pub mod status;
