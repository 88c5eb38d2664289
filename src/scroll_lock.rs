//! Page-level scroll lock shared by overlays.
//!
//! Each overlay holds a [`ScrollLockGuard`] while it is open. The page stays
//! locked while any guard is alive; when the last one drops, the lock state
//! that was in effect before the first acquisition is restored. Guards may be
//! dropped in any order without releasing another overlay's hold.

use std::cell::RefCell;
use std::rc::Rc;

#[derive(Debug, Default)]
struct LockState {
    locked: bool,
    /// Lock state captured when the first holder acquired.
    prior: bool,
    holders: Vec<u64>,
    next_token: u64,
}

/// Handle to the page scroll flag. Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct PageScroll {
    state: Rc<RefCell<LockState>>,
}

impl PageScroll {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_locked(&self) -> bool {
        self.state.borrow().locked
    }

    /// Number of overlays currently holding the lock.
    pub fn holders(&self) -> usize {
        self.state.borrow().holders.len()
    }

    /// Set the flag directly, as an outer page would. Ignored while guards
    /// are held; the value becomes the state restored afterwards.
    pub fn set_locked(&self, locked: bool) {
        let mut state = self.state.borrow_mut();
        if state.holders.is_empty() {
            state.locked = locked;
        } else {
            state.prior = locked;
        }
    }

    pub fn acquire(&self) -> ScrollLockGuard {
        let mut state = self.state.borrow_mut();
        if state.holders.is_empty() {
            state.prior = state.locked;
        }
        let token = state.next_token;
        state.next_token += 1;
        state.holders.push(token);
        state.locked = true;
        tracing::trace!(token, depth = state.holders.len(), "scroll lock acquired");

        ScrollLockGuard {
            state: Rc::clone(&self.state),
            token,
        }
    }
}

/// Scoped hold on the page scroll lock, released on drop.
#[derive(Debug)]
pub struct ScrollLockGuard {
    state: Rc<RefCell<LockState>>,
    token: u64,
}

impl Drop for ScrollLockGuard {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.holders.retain(|&t| t != self.token);
        if state.holders.is_empty() {
            state.locked = state.prior;
        }
        tracing::trace!(token = self.token, depth = state.holders.len(), "scroll lock released");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_and_release() {
        let page = PageScroll::new();
        assert!(!page.is_locked());

        let guard = page.acquire();
        assert!(page.is_locked());
        drop(guard);
        assert!(!page.is_locked());
    }

    #[test]
    fn test_restores_outer_lock() {
        let page = PageScroll::new();
        page.set_locked(true);

        let guard = page.acquire();
        drop(guard);
        assert!(page.is_locked(), "outer lock must survive the overlay");
    }

    #[test]
    fn test_out_of_order_release_keeps_lock() {
        let page = PageScroll::new();
        let first = page.acquire();
        let second = page.acquire();
        assert_eq!(page.holders(), 2);

        drop(first);
        assert!(page.is_locked());
        assert_eq!(page.holders(), 1);

        drop(second);
        assert!(!page.is_locked());
    }

    #[test]
    fn test_outer_change_while_held_applies_after_release() {
        let page = PageScroll::new();
        let guard = page.acquire();
        page.set_locked(true);
        assert!(page.is_locked());
        drop(guard);
        assert!(page.is_locked());
    }
}
