use gloo_timers::callback::Timeout;

/// One-shot deferred work. Tasks are fire-and-forget: nothing cancels or
/// awaits them once scheduled.
pub trait Scheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>);
}

/// Browser timer backed scheduler.
#[derive(Clone, Copy, Default, PartialEq)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        Timeout::new(delay_ms, task).forget();
    }
}

#[cfg(test)]
pub mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Collects deferred tasks so tests decide when time passes.
    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        pending: Rc<RefCell<Vec<(u32, Box<dyn FnOnce()>)>>>,
    }

    impl ManualScheduler {
        pub fn delays(&self) -> Vec<u32> {
            self.pending.borrow().iter().map(|(delay, _)| *delay).collect()
        }

        pub fn pending(&self) -> usize {
            self.pending.borrow().len()
        }

        /// Runs every task queued so far, oldest first.
        pub fn run_all(&self) {
            let tasks: Vec<_> = self.pending.borrow_mut().drain(..).collect();
            for (_, task) in tasks {
                task();
            }
        }
    }

    impl Scheduler for ManualScheduler {
        fn defer(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
            self.pending.borrow_mut().push((delay_ms, task));
        }
    }
}
