//! Repeating timers, abstracted over the browser and tokio.

use std::future::Future;
use std::pin::Pin;
use std::time::Duration;

/// A unit of work run on the client's thread.
pub type LocalTask = Pin<Box<dyn Future<Output = ()>>>;

/// Produces one task per tick.
pub type TaskFactory = Box<dyn FnMut() -> LocalTask>;

/// Starts repeating work.
pub trait Scheduler {
    /// Run `task()` every `period`. The first run happens one period from
    /// now. The work keeps running until the returned handle is cancelled.
    fn every(&self, period: Duration, task: TaskFactory) -> Box<dyn PollHandle>;
}

/// Cancels a schedule started with [`Scheduler::every`].
pub trait PollHandle {
    fn cancel(&mut self);
}
