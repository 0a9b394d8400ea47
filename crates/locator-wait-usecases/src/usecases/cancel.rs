//! Cooperative cancellation for polling loops.

use std::sync::Arc;
use std::sync::Condvar;
use std::sync::Mutex;
use std::sync::PoisonError;
use std::sync::Weak;
use std::time::Duration;

#[derive(Debug)]
struct Signal {
    cancelled: Mutex<bool>,
    wake: Condvar,
    children: Mutex<Vec<Weak<Signal>>>,
}

impl Signal {
    fn new(cancelled: bool) -> Self {
        Self {
            cancelled: Mutex::new(cancelled),
            wake: Condvar::new(),
            children: Mutex::new(Vec::new()),
        }
    }

    fn is_cancelled(&self) -> bool {
        *self.cancelled.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn cancel(&self) {
        {
            let mut cancelled = self.cancelled.lock().unwrap_or_else(PoisonError::into_inner);
            if *cancelled {
                return;
            }
            *cancelled = true;
        }
        self.wake.notify_all();

        // The flag is set before the children are taken; `child` reads it
        // under the children lock, so no child is missed.
        let children =
            std::mem::take(&mut *self.children.lock().unwrap_or_else(PoisonError::into_inner));
        for child in children.iter().filter_map(Weak::upgrade) {
            child.cancel();
        }
    }
}

/// Shared flag checked by a poll before every probe and waited on between
/// probes.
///
/// A child token is cancelled along with its parent, but cancelling the child
/// leaves the parent untouched, so a race can stop its own workers without
/// affecting a caller-supplied token.
#[derive(Debug, Clone)]
pub struct CancelToken {
    signal: Arc<Signal>,
}

impl Default for CancelToken {
    fn default() -> Self {
        Self::new()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        Self {
            signal: Arc::new(Signal::new(false)),
        }
    }

    pub fn child(&self) -> Self {
        let mut children = self
            .signal
            .children
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        children.retain(|child| child.strong_count() > 0);

        let signal = Arc::new(Signal::new(self.signal.is_cancelled()));
        children.push(Arc::downgrade(&signal));
        Self { signal }
    }

    pub fn cancel(&self) {
        self.signal.cancel();
    }

    pub fn is_cancelled(&self) -> bool {
        self.signal.is_cancelled()
    }

    /// Blocks for up to `timeout`, returning early once the token is
    /// cancelled. Returns whether it is cancelled.
    pub fn wait_timeout(&self, timeout: Duration) -> bool {
        let cancelled = self
            .signal
            .cancelled
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let (cancelled, _) = self
            .signal
            .wake
            .wait_timeout_while(cancelled, timeout, |cancelled| !*cancelled)
            .unwrap_or_else(PoisonError::into_inner);
        *cancelled
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test]
    fn test_clones_share_state() {
        let token = CancelToken::new();
        let clone = token.clone();
        clone.cancel();
        assert!(token.is_cancelled());
    }

    #[test]
    fn test_child_observes_parent() {
        let parent = CancelToken::new();
        let child = parent.child();
        let grandchild = child.child();
        assert!(!child.is_cancelled());
        parent.cancel();
        assert!(child.is_cancelled());
        assert!(grandchild.is_cancelled());
    }

    #[test]
    fn test_child_of_cancelled_parent_starts_cancelled() {
        let parent = CancelToken::new();
        parent.cancel();
        assert!(parent.child().is_cancelled());
    }

    #[test]
    fn test_cancelling_child_leaves_parent() {
        let parent = CancelToken::new();
        let child = parent.child();
        child.cancel();
        assert!(child.is_cancelled());
        assert!(!parent.is_cancelled());
    }

    #[test]
    fn test_wait_timeout_expires_uncancelled() {
        let token = CancelToken::new();
        assert!(!token.wait_timeout(Duration::from_millis(5)));
    }

    #[test]
    fn test_cancel_wakes_a_waiting_thread() {
        let token = CancelToken::new();
        let waiter = token.clone();
        let handle = thread::spawn(move || waiter.wait_timeout(Duration::from_secs(30)));

        thread::sleep(Duration::from_millis(20));
        token.cancel();

        assert!(handle.join().unwrap());
    }

    #[test]
    fn test_parent_cancel_wakes_a_child_waiter() {
        let parent = CancelToken::new();
        let child = parent.child();
        let handle = thread::spawn(move || child.wait_timeout(Duration::from_secs(30)));

        thread::sleep(Duration::from_millis(20));
        parent.cancel();

        assert!(handle.join().unwrap());
    }
}
