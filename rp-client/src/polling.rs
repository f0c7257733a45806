//! Periodic point refresh.

use crate::frontend::Frontend;
use crate::schedule::{LocalTask, Scheduler};
use crate::MapClient;
use log::{debug, info};
use rp_core::RoadApi;
use std::rc::Rc;

impl<A: RoadApi + 'static, F: Frontend + 'static> MapClient<A, F> {
    /// Refresh points every `config.poll_interval()` until stopped.
    ///
    /// No backoff and no jitter. The timer holds only a weak reference, so
    /// dropping the last `Rc` also ends the refreshes.
    pub fn start_polling<S: Scheduler>(self: &Rc<Self>, scheduler: &S) {
        if self.poller.borrow().is_some() {
            debug!("Polling already running");
            return;
        }

        let period = self.config.poll_interval();
        let client = Rc::downgrade(self);
        let handle = scheduler.every(
            period,
            Box::new(move || -> LocalTask {
                let client = client.clone();
                Box::pin(async move {
                    if let Some(client) = client.upgrade() {
                        let _ = client.refresh_points().await;
                    }
                })
            }),
        );
        *self.poller.borrow_mut() = Some(handle);
        info!("Polling road points every {}s", period.as_secs());
    }
}

impl<A: RoadApi, F: Frontend> MapClient<A, F> {
    /// Cancel the polling timer. Returns whether one was running.
    pub fn stop_polling(&self) -> bool {
        let handle = self.poller.borrow_mut().take();
        match handle {
            Some(mut handle) => {
                handle.cancel();
                info!("Polling stopped");
                true
            }
            None => false,
        }
    }

    pub fn is_polling(&self) -> bool {
        self.poller.borrow().is_some()
    }
}
