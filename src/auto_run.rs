//! Timed stepping on top of the synchronous stepper.
//!
//! The stepper itself knows nothing about threads. `AutoRun` takes the lock for
//! exactly one `step` at a time, so a driver may `reset` or inspect the stepper
//! between steps, and stops when the sink becomes unreachable or when its
//! [`CancelHandle`] fires.

use crate::error::Result;
use crate::maximum_flow::edmonds_karp::EdmondsKarp;
use crate::maximum_flow::status::StepStatus;
use log::{debug, info};
use num_traits::{Bounded, CheckedAdd, NumAssign};
use std::fmt::Display;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex, PoisonError};
use std::thread;
use std::time::Duration;

#[derive(Clone, Debug, Default)]
pub struct CancelHandle {
    cancelled: Arc<AtomicBool>,
}

impl CancelHandle {
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

#[derive(PartialEq, Eq, Debug, Clone, Copy)]
pub enum RunOutcome<Flow> {
    Finished { total_flow: Flow },
    Cancelled { total_flow: Flow },
}

#[derive(Debug)]
pub struct AutoRun {
    interval: Duration,
    cancel: CancelHandle,
}

impl AutoRun {
    pub fn new(interval: Duration) -> Self {
        Self { interval, cancel: CancelHandle::default() }
    }

    pub fn cancel_handle(&self) -> CancelHandle {
        self.cancel.clone()
    }

    pub fn run<Flow, F>(&self, stepper: &Mutex<EdmondsKarp<Flow>>, source: &str, sink: &str, mut on_step: F) -> Result<RunOutcome<Flow>>
    where
        Flow: NumAssign + CheckedAdd + Bounded + Ord + Copy + Display,
        F: FnMut(&StepStatus<Flow>),
    {
        loop {
            if self.cancel.is_cancelled() {
                let total_flow = stepper.lock().unwrap_or_else(PoisonError::into_inner).total_flow();
                info!("auto run cancelled at total flow {total_flow}");
                return Ok(RunOutcome::Cancelled { total_flow });
            }

            // a step is applied whole or not at all, so a poisoned lock still guards a consistent stepper
            let status = stepper.lock().unwrap_or_else(PoisonError::into_inner).step(source, sink)?;
            on_step(&status);

            if let StepStatus::NoPathFound { total_flow } = status {
                return Ok(RunOutcome::Finished { total_flow });
            }

            debug!("next step in {:?}", self.interval);
            thread::sleep(self.interval);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ConfigurationError;

    fn chain() -> Mutex<EdmondsKarp<i64>> {
        Mutex::new(EdmondsKarp::build(&["S", "A", "T"], &[("S", "A", 2), ("A", "T", 1), ("S", "T", 1)]).unwrap())
    }

    #[test]
    fn runs_until_finished() {
        let stepper = chain();
        let mut seen = Vec::new();
        let outcome = AutoRun::new(Duration::ZERO).run(&stepper, "S", "T", |status| seen.push(status.total_flow())).unwrap();

        assert_eq!(outcome, RunOutcome::Finished { total_flow: 2 });
        assert_eq!(seen, vec![1, 2, 2]);
        assert!(stepper.lock().unwrap().is_finished());
    }

    #[test]
    fn cancel_stops_before_next_step() {
        let stepper = chain();
        let auto_run = AutoRun::new(Duration::ZERO);
        let cancel = auto_run.cancel_handle();

        let outcome = auto_run
            .run(&stepper, "S", "T", |_| {
                cancel.cancel();
            })
            .unwrap();

        assert_eq!(outcome, RunOutcome::Cancelled { total_flow: 1 });
        assert_eq!(stepper.lock().unwrap().path_log().len(), 1);
        assert!(!stepper.lock().unwrap().is_finished());
    }

    #[test]
    fn cancelled_before_start_does_nothing() {
        let stepper = chain();
        let auto_run = AutoRun::new(Duration::from_secs(60));
        auto_run.cancel_handle().cancel();

        assert_eq!(auto_run.run(&stepper, "S", "T", |_| unreachable!()).unwrap(), RunOutcome::Cancelled { total_flow: 0 });
    }

    #[test]
    fn configuration_error_aborts() {
        let stepper = chain();
        let result = AutoRun::new(Duration::ZERO).run(&stepper, "S", "Q", |_| {});
        assert_eq!(result, Err(ConfigurationError::UnknownVertex("Q".into())));
    }

    #[test]
    fn recovers_poisoned_lock() {
        let stepper = Arc::new(chain());
        let poisoner = {
            let stepper = Arc::clone(&stepper);
            thread::spawn(move || {
                let mut guard = stepper.lock().unwrap();
                guard.step("S", "T").unwrap();
                panic!("driver crashed while holding the stepper");
            })
        };
        assert!(poisoner.join().is_err());
        assert!(stepper.is_poisoned());

        let outcome = AutoRun::new(Duration::ZERO).run(&stepper, "S", "T", |_| {}).unwrap();
        assert_eq!(outcome, RunOutcome::Finished { total_flow: 2 });

        let stepper = stepper.lock().unwrap_or_else(PoisonError::into_inner);
        assert_eq!(stepper.path_log().len(), 2);
        assert!(stepper.is_finished());
    }

    #[test]
    fn driven_from_another_thread() {
        let stepper = Arc::new(chain());
        let auto_run = AutoRun::new(Duration::from_millis(1));

        let worker = {
            let stepper = Arc::clone(&stepper);
            thread::spawn(move || auto_run.run(&stepper, "S", "T", |_| {}))
        };

        assert_eq!(worker.join().unwrap().unwrap(), RunOutcome::Finished { total_flow: 2 });
        assert_eq!(stepper.lock().unwrap().total_flow(), 2);
    }
}
