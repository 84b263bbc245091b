use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

/// Shared value cell with change tracking.
///
/// Cheap to clone; clones observe the same value. Handlers registered on
/// elements capture a clone and write through it, the owner reads it on the
/// next render.
#[derive(Debug)]
pub struct State<T> {
    inner: Arc<RwLock<T>>,
    changed: Arc<AtomicBool>,
}

impl<T> State<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Arc::new(RwLock::new(value)),
            changed: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Get a clone of the current value
    pub fn get(&self) -> T
    where
        T: Clone,
    {
        self.inner
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Replace the value. Returns `true` if it differed from the old one.
    pub fn set(&self, value: T) -> bool
    where
        T: PartialEq,
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        if *guard == value {
            return false;
        }
        *guard = value;
        self.changed.store(true, Ordering::SeqCst);
        true
    }

    /// Replace the value without comparing.
    pub fn replace(&self, value: T) -> T {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        self.changed.store(true, Ordering::SeqCst);
        std::mem::replace(&mut *guard, value)
    }

    pub fn update<F>(&self, f: F)
    where
        F: FnOnce(&mut T),
    {
        let mut guard = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        f(&mut guard);
        self.changed.store(true, Ordering::SeqCst);
    }

    /// Check and clear the change flag.
    pub fn take_changed(&self) -> bool {
        self.changed.swap(false, Ordering::SeqCst)
    }
}

impl<T> Clone for State<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Arc::clone(&self.inner),
            changed: Arc::clone(&self.changed),
        }
    }
}

impl<T: Default> Default for State<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}
