use flow_stepper::auto_run::{AutoRun, RunOutcome};
use flow_stepper::maximum_flow::edmonds_karp::EdmondsKarp;
use flow_stepper::maximum_flow::status::StepStatus;
use flow_stepper::text_format::read_network;
use std::fs::read_to_string;
use std::sync::Mutex;
use std::time::Duration;

// cargo run --example edmonds_karp -- demos/network.txt S T [interval_ms]
fn main() {
    env_logger::init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 4 {
        eprintln!("usage: {} <network file> <source> <sink> [interval ms]", args[0]);
        std::process::exit(2);
    }
    let (path, source, sink) = (&args[1], &args[2], &args[3]);
    let interval = args.get(4).and_then(|ms| ms.parse().ok()).map(Duration::from_millis).unwrap_or(Duration::from_millis(500));

    let text = match read_to_string(path) {
        Ok(text) => text,
        Err(err) => {
            eprintln!("cannot read {path}: {err}");
            std::process::exit(1);
        }
    };
    let graph = match read_network::<i64>(&text) {
        Ok(graph) => graph,
        Err(err) => {
            eprintln!("{path}: {err}");
            std::process::exit(1);
        }
    };

    let stepper = Mutex::new(EdmondsKarp::new(graph));
    let outcome = AutoRun::new(interval).run(&stepper, source, sink, |status| match status {
        StepStatus::Augmented { path, total_flow } => println!("{path}  total flow: {total_flow}"),
        StepStatus::NoPathFound { .. } => println!("no augmenting path left"),
    });

    match outcome {
        Ok(RunOutcome::Finished { .. }) => {
            let stepper = stepper.lock().unwrap();
            if let Some(summary) = stepper.summary() {
                println!("\n{summary}");
            }
            for edge in stepper.graph().edges() {
                let (from, to) = (stepper.graph().label(edge.from), stepper.graph().label(edge.to));
                println!("{from} -> {to}: {}", stepper.edge_state(from, to).unwrap());
            }
            println!("minimum cut source side: {:?}", stepper.minimum_cut(source).unwrap());
        }
        Ok(RunOutcome::Cancelled { total_flow }) => println!("cancelled at total flow {total_flow}"),
        Err(err) => {
            eprintln!("{err}");
            std::process::exit(1);
        }
    }
}
