use std::fmt::{self, Display};

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum State {
    Running,
    Finished,
}

/// One applied augmenting path, in source to sink order.
#[derive(PartialEq, Eq, Debug, Clone)]
pub struct PathRecord<Flow> {
    pub vertices: Vec<String>,
    pub amount: Flow,
}

impl<Flow: Display> Display for PathRecord<Flow> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "path: {} (flow {})", self.vertices.join(" -> "), self.amount)
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub enum StepStatus<Flow> {
    Augmented { path: PathRecord<Flow>, total_flow: Flow },
    NoPathFound { total_flow: Flow },
}

impl<Flow: Copy> StepStatus<Flow> {
    pub fn total_flow(&self) -> Flow {
        match self {
            StepStatus::Augmented { total_flow, .. } | StepStatus::NoPathFound { total_flow } => *total_flow,
        }
    }

    pub fn is_finished(&self) -> bool {
        matches!(self, StepStatus::NoPathFound { .. })
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub struct EdgeState<Flow> {
    pub flow: Flow,
    pub capacity: Flow,
}

impl<Flow: Display> Display for EdgeState<Flow> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.flow, self.capacity)
    }
}

#[derive(PartialEq, Eq, Debug, Clone)]
pub struct Summary<Flow> {
    pub paths: Vec<PathRecord<Flow>>,
    pub total_flow: Flow,
}

impl<Flow: Display> Display for Summary<Flow> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for path in self.paths.iter() {
            writeln!(f, "{path}")?;
        }
        write!(f, "maximum flow = {}", self.total_flow)
    }
}
