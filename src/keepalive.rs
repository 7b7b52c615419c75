//! Periodic no-op maintenance task.
//!
//! Some hosting platforms idle a service that receives no traffic for a
//! while. This task wakes up on a fixed interval and logs a heartbeat; it
//! holds no state and touches nothing else.

use ntex::time::{Millis, sleep};

/// Spawns the keep-alive loop on the current runtime.
pub fn start(interval_secs: u64) {
    let period = Millis(interval_secs.max(1) * 1_000);

    ntex::rt::spawn(async move {
        loop {
            sleep(period).await;
            log::debug!("keep-alive tick, nothing to do");
        }
    });
}
