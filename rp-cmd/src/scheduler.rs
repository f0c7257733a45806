//! Tokio-backed polling timer. Must run inside a `LocalSet`.

use rp_client::{PollHandle, Scheduler, TaskFactory};
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::{interval_at, Instant, MissedTickBehavior};

/// Fires the task every `period`, first after one full period. Each tick is
/// spawned as its own local task, so a slow refresh never delays the next.
#[derive(Debug, Clone, Copy, Default)]
pub struct TokioScheduler;

struct TokioPollHandle(JoinHandle<()>);

impl PollHandle for TokioPollHandle {
    fn cancel(&mut self) {
        self.0.abort();
    }
}

impl Drop for TokioPollHandle {
    fn drop(&mut self) {
        self.0.abort();
    }
}

impl Scheduler for TokioScheduler {
    fn every(&self, period: Duration, mut task: TaskFactory) -> Box<dyn PollHandle> {
        let timer = tokio::task::spawn_local(async move {
            let mut ticker = interval_at(Instant::now() + period, period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);
            loop {
                ticker.tick().await;
                tokio::task::spawn_local(task());
            }
        });
        Box::new(TokioPollHandle(timer))
    }
}
