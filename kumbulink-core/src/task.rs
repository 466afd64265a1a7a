//! Background work tied to the lifetime of the page that started it.

use std::future::Future;
use std::sync::{Arc, Mutex};

use futures::future::{abortable, AbortHandle};

use crate::runtime::{self, MaybeSend};

/// A spawned future whose output is parked in a slot until the owner polls it.
///
/// Dropping the handle, or calling [`MountedTask::cancel`], aborts the future
/// and discards any result that has not been taken yet.
pub struct MountedTask<T> {
    slot: Arc<Mutex<Option<T>>>,
    abort: AbortHandle,
    finished: bool,
}

impl<T> MountedTask<T>
where
    T: MaybeSend + 'static,
{
    pub fn spawn<F>(future: F) -> Self
    where
        F: Future<Output = T> + MaybeSend + 'static,
    {
        let slot = Arc::new(Mutex::new(None));
        let (future, abort) = abortable(future);

        let target = Arc::clone(&slot);
        runtime::spawn_async(async move {
            match future.await {
                Ok(output) => {
                    if let Ok(mut state) = target.lock() {
                        *state = Some(output);
                    } else {
                        log::error!("❌ [TASK] Failed to acquire result lock");
                    }
                }
                Err(_) => log::debug!("[TASK] Aborted before completion"),
            }
        });

        Self {
            slot,
            abort,
            finished: false,
        }
    }
}

impl<T> MountedTask<T> {
    /// Takes the output if the future has completed. Returns `Some` at most
    /// once.
    pub fn try_take(&mut self) -> Option<T> {
        if self.finished {
            return None;
        }

        let output = self.slot.lock().ok().and_then(|mut state| state.take());
        if output.is_some() {
            self.finished = true;
        }
        output
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn cancel(&mut self) {
        self.abort.abort();
        self.finished = true;
        if let Ok(mut state) = self.slot.lock() {
            state.take();
        }
    }
}

impl<T> Drop for MountedTask<T> {
    fn drop(&mut self) {
        self.abort.abort();
    }
}
