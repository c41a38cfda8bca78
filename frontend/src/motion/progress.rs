//! Page-wide scroll progress bar.
//!
//! Only one progress listener may be live at a time, however often the app
//! shell re-renders. Ownership is tracked by a thread-local flag held by
//! `ProgressGuard`.

use std::cell::Cell;

thread_local! {
    static PROGRESS_ACTIVE: Cell<bool> = const { Cell::new(false) };
}

/// Proof of owning the single progress listener. Releases it on drop.
#[derive(Debug)]
pub struct ProgressGuard {
    _private: (),
}

impl ProgressGuard {
    /// `None` when another owner is already live.
    pub fn acquire() -> Option<ProgressGuard> {
        PROGRESS_ACTIVE.with(|active| {
            if active.get() {
                None
            } else {
                active.set(true);
                Some(ProgressGuard { _private: () })
            }
        })
    }
}

impl Drop for ProgressGuard {
    fn drop(&mut self) {
        PROGRESS_ACTIVE.with(|active| active.set(false));
    }
}

/// Fraction of the scrollable distance already scrolled, in `[0, 1]`.
pub fn scroll_fraction(scroll_y: f64, document_height: f64, viewport_height: f64) -> f64 {
    let scrollable = document_height - viewport_height;
    if scrollable <= 0.0 {
        return 0.0;
    }
    (scroll_y / scrollable).clamp(0.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn only_one_guard_at_a_time() {
        let first = ProgressGuard::acquire();
        assert!(first.is_some());
        assert!(ProgressGuard::acquire().is_none());
        drop(first);
        assert!(ProgressGuard::acquire().is_some());
    }

    #[test]
    fn fraction_is_clamped() {
        assert_eq!(scroll_fraction(500.0, 2000.0, 1000.0), 0.5);
        assert_eq!(scroll_fraction(-40.0, 2000.0, 1000.0), 0.0);
        assert_eq!(scroll_fraction(1500.0, 2000.0, 1000.0), 1.0);
        assert_eq!(scroll_fraction(10.0, 800.0, 1000.0), 0.0);
    }
}
