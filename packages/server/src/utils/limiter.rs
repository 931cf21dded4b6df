use std::{
    num::NonZeroUsize,
    sync::Arc,
};

use tokio::sync::{
    OwnedSemaphorePermit,
    Semaphore,
};

/// Caps the number of connections a listener serves at once, and the
/// number of rejection notices it is still delivering.
#[derive(Debug, Clone)]
pub struct ConnectionLimiter {
    semaphore: Option<Arc<Semaphore>>,
    notices: Option<Arc<Semaphore>>,
}

/// Held by a connection handler for its whole lifetime.
#[derive(Debug)]
pub struct ConnectionPermit {
    _permit: Option<OwnedSemaphorePermit>,
}

impl ConnectionLimiter {
    pub fn new(max: Option<NonZeroUsize>) -> Self {
        let semaphore = || max.map(|max| Arc::new(Semaphore::new(max.get())));
        Self {
            semaphore: semaphore(),
            notices: semaphore(),
        }
    }

    pub const fn unbounded() -> Self {
        Self {
            semaphore: None,
            notices: None,
        }
    }

    /// Never waits: `None` means the limit is reached and the
    /// connection should be rejected.
    pub fn try_admit(&self) -> Option<ConnectionPermit> {
        acquire(self.semaphore.as_ref())
    }

    /// Admits one rejection notice in flight. `None` means the
    /// connection should be dropped without one.
    pub fn try_notify(&self) -> Option<ConnectionPermit> {
        acquire(self.notices.as_ref())
    }

    pub fn available(&self) -> Option<usize> {
        self.semaphore
            .as_ref()
            .map(|semaphore| semaphore.available_permits())
    }
}

fn acquire(semaphore: Option<&Arc<Semaphore>>) -> Option<ConnectionPermit> {
    let Some(semaphore) = semaphore else {
        return Some(ConnectionPermit { _permit: None });
    };

    Arc::clone(semaphore)
        .try_acquire_owned()
        .ok()
        .map(|permit| ConnectionPermit {
            _permit: Some(permit),
        })
}
