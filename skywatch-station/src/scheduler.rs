//! Named Recurring Tasks
//!
//! The station is driven by a handful of independent periodic timers. Each
//! one is a named task owned by the [`Scheduler`], individually cancellable
//! and restartable, so retargeting the device can tear down exactly the
//! tasks that belong to the old connection and nothing else.
//!
//! A task's closure is invoked once per period, back to back with the
//! previous invocation: the loop awaits each tick body before sleeping
//! again, so a slow poll cannot overlap with the next one and samples are
//! accepted in order.

use std::collections::HashMap;
use std::future::Future;
use std::time::Duration;

use log::debug;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

/// The recurring drivers of a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TaskId {
    /// Fetch a reading and fan it out (2 s)
    Poll,
    /// Staleness judgment (5 s), not scheduled for synthetic sources
    LivenessCheck,
    /// Clock display refresh (1 s)
    ClockTick,
    /// Ambient fact swap (30 s)
    FactRotate,
}

impl TaskId {
    pub const fn name(&self) -> &'static str {
        match self {
            TaskId::Poll => "poll",
            TaskId::LivenessCheck => "liveness-check",
            TaskId::ClockTick => "clock-tick",
            TaskId::FactRotate => "fact-rotate",
        }
    }
}

/// Owner of the named recurring tasks.
///
/// Dropping the scheduler aborts everything it still owns.
#[derive(Default)]
pub struct Scheduler {
    tasks: HashMap<TaskId, JoinHandle<()>>,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a named task firing every `period`. The first
    /// tick fires immediately. An existing task under the same name is
    /// cancelled first.
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn_recurring<F, Fut>(&mut self, id: TaskId, period: Duration, mut tick: F)
    where
        F: FnMut() -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        self.cancel(id);
        debug!("scheduling task {:?} every {:?}", id.name(), period);

        let handle = tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                interval.tick().await;
                tick().await;
            }
        });
        self.tasks.insert(id, handle);
    }

    /// Stop a named task. Returns whether one was running.
    pub fn cancel(&mut self, id: TaskId) -> bool {
        match self.tasks.remove(&id) {
            Some(handle) => {
                handle.abort();
                debug!("cancelled task {:?}", id.name());
                true
            }
            None => false,
        }
    }

    /// Stop everything.
    pub fn cancel_all(&mut self) {
        for (id, handle) in self.tasks.drain() {
            handle.abort();
            debug!("cancelled task {:?}", id.name());
        }
    }

    pub fn is_scheduled(&self, id: TaskId) -> bool {
        self.tasks.contains_key(&id)
    }
}

impl Drop for Scheduler {
    fn drop(&mut self) {
        self.cancel_all();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[tokio::test(start_paused = true)]
    async fn task_fires_on_its_period() {
        let count = Arc::new(AtomicUsize::new(0));
        let seen = count.clone();

        let mut scheduler = Scheduler::new();
        scheduler.spawn_recurring(TaskId::Poll, Duration::from_millis(100), move || {
            let seen = seen.clone();
            async move {
                seen.fetch_add(1, Ordering::SeqCst);
            }
        });

        // First tick is immediate, then one per period
        tokio::time::sleep(Duration::from_millis(350)).await;
        assert_eq!(count.load(Ordering::SeqCst), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn cancel_stops_only_the_named_task() {
        let polls = Arc::new(AtomicUsize::new(0));
        let checks = Arc::new(AtomicUsize::new(0));

        let mut scheduler = Scheduler::new();
        {
            let polls = polls.clone();
            scheduler.spawn_recurring(TaskId::Poll, Duration::from_millis(100), move || {
                let polls = polls.clone();
                async move {
                    polls.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
        {
            let checks = checks.clone();
            scheduler.spawn_recurring(TaskId::LivenessCheck, Duration::from_millis(100), move || {
                let checks = checks.clone();
                async move {
                    checks.fetch_add(1, Ordering::SeqCst);
                }
            });
        }

        tokio::time::sleep(Duration::from_millis(150)).await;
        assert!(scheduler.cancel(TaskId::LivenessCheck));
        assert!(!scheduler.is_scheduled(TaskId::LivenessCheck));
        assert!(scheduler.is_scheduled(TaskId::Poll));

        let frozen = checks.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(checks.load(Ordering::SeqCst), frozen);
        assert!(polls.load(Ordering::SeqCst) > frozen);
    }

    #[tokio::test(start_paused = true)]
    async fn respawning_replaces_the_old_task() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));

        let mut scheduler = Scheduler::new();
        {
            let first = first.clone();
            scheduler.spawn_recurring(TaskId::ClockTick, Duration::from_millis(100), move || {
                let first = first.clone();
                async move {
                    first.fetch_add(1, Ordering::SeqCst);
                }
            });
        }
        tokio::time::sleep(Duration::from_millis(50)).await;

        {
            let second = second.clone();
            scheduler.spawn_recurring(TaskId::ClockTick, Duration::from_millis(100), move || {
                let second = second.clone();
                async move {
                    second.fetch_add(1, Ordering::SeqCst);
                }
            });
        }

        let frozen = first.load(Ordering::SeqCst);
        tokio::time::sleep(Duration::from_millis(300)).await;

        assert_eq!(first.load(Ordering::SeqCst), frozen);
        assert!(second.load(Ordering::SeqCst) >= 3);
    }
}
