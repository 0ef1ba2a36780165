//! Process-wide serialization of native calls.
//!
//! Swiss Ephemeris keeps its open files, caches and configuration in C
//! globals. Every wrapper in this crate runs its native call under one
//! reentrant lock; [`exclusive`] lets a caller extend that lock over a
//! sequence of calls (for example a configuration change and the
//! calculations that depend on it).

use parking_lot::{const_reentrant_mutex, ReentrantMutex, ReentrantMutexGuard};

static NATIVE: ReentrantMutex<()> = const_reentrant_mutex(());

/// Guard holding exclusive access to the native library
///
/// While alive, no other thread can enter the library. Wrappers called from
/// the owning thread still work since the lock is reentrant.
pub struct ExclusiveAccess {
    _guard: ReentrantMutexGuard<'static, ()>,
}

/// Acquire exclusive access to the native library for the current thread
///
/// # Example
///
/// ```rust,ignore
/// let _access = swisseph::exclusive();
/// swisseph::set_sid_mode(swisseph::sidm::LAHIRI, 0.0, 0.0);
/// let pos = swisseph::calc_ut(jd, swisseph::planet::SUN, swisseph::flag::SIDEREAL)?;
/// ```
pub fn exclusive() -> ExclusiveAccess {
    ExclusiveAccess {
        _guard: NATIVE.lock(),
    }
}

/// Run `f` while holding the native lock
pub(crate) fn with_native<T>(f: impl FnOnce() -> T) -> T {
    let _guard = NATIVE.lock();
    f()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use std::thread;

    #[test]
    fn test_reentrant_from_same_thread() {
        let _outer = exclusive();
        let value = with_native(|| with_native(|| 42));
        assert_eq!(value, 42);
    }

    #[test]
    fn test_exclusive_blocks_other_threads() {
        let counter = Arc::new(AtomicUsize::new(0));
        let access = exclusive();

        let c = Arc::clone(&counter);
        let handle = thread::spawn(move || {
            with_native(|| c.fetch_add(1, Ordering::SeqCst));
        });

        thread::sleep(std::time::Duration::from_millis(50));
        assert_eq!(counter.load(Ordering::SeqCst), 0);

        drop(access);
        handle.join().unwrap();
        assert_eq!(counter.load(Ordering::SeqCst), 1);
    }
}
