//! Current page and transition lock.
//!
//! All pages share one moving surface. Showing page `n` means moving that
//! surface to `-n * page_height`; pages are never transformed one by one.

use std::time::Duration;

use tracing::{debug, warn};
use web_time::Instant;

use crate::gesture::Decision;

/// Whether a page change is in flight.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum PagerState {
    /// Ready to accept a page change.
    #[default]
    Idle,
    /// A page change was committed and its animation has not finished.
    Transitioning,
}

/// A committed page change.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    /// Page being moved to.
    pub page: usize,
    /// Surface offset that shows `page`.
    pub offset: f32,
}

/// State machine driving page changes.
#[derive(Clone, Debug)]
pub struct PagingStateMachine {
    current_page: usize,
    page_count: usize,
    page_height: f32,
    state: PagerState,
    locked_at: Option<Instant>,
    /// Finished notifications still owed by transitions the watchdog released.
    orphaned_notifications: usize,
}

impl PagingStateMachine {
    /// Creates an idle machine showing the first of `page_count` pages.
    pub fn new(page_count: usize, page_height: f32) -> Self {
        Self {
            current_page: 0,
            page_count,
            page_height,
            state: PagerState::Idle,
            locked_at: None,
            orphaned_notifications: 0,
        }
    }

    /// Index of the page shown, or being moved to.
    pub fn current_page(&self) -> usize {
        self.current_page
    }

    /// Number of pages.
    pub fn page_count(&self) -> usize {
        self.page_count
    }

    /// Current state.
    pub fn state(&self) -> PagerState {
        self.state
    }

    /// Whether the transition lock is held.
    pub fn is_transitioning(&self) -> bool {
        self.state == PagerState::Transitioning
    }

    /// Surface offset for the current page.
    pub fn offset(&self) -> f32 {
        self.offset_for_page(self.current_page)
    }

    /// Surface offset that shows `page`.
    pub fn offset_for_page(&self, page: usize) -> f32 {
        -(page as f32) * self.page_height
    }

    /// Feeds a gesture decision into the machine.
    ///
    /// Returns the committed transition, if any. `Ignore`, and anything while
    /// a transition is in flight, leaves the state untouched.
    pub fn apply(&mut self, decision: Decision, now: Instant) -> Option<Transition> {
        if self.is_transitioning() {
            if decision.is_commit() {
                debug!(?decision, "decision dropped while transitioning");
            }
            return None;
        }
        let target = match decision {
            Decision::Ignore => return None,
            Decision::SlideUp => self.current_page.checked_add(1)?,
            Decision::SlideDown => self.current_page.checked_sub(1)?,
        };
        Some(self.move_to(target, now))
    }

    /// Takes the lock and jumps to `index`.
    ///
    /// The index is not clamped; range checks belong to the caller.
    pub fn move_to(&mut self, index: usize, now: Instant) -> Transition {
        self.state = PagerState::Transitioning;
        self.locked_at = Some(now);
        self.current_page = index;
        Transition {
            page: index,
            offset: self.offset_for_page(index),
        }
    }

    /// Handles the transition-finished notification.
    ///
    /// A notification owed by a transition the watchdog already released is
    /// absorbed, so it cannot unlock a later transition. Returns whether a
    /// lock was released.
    pub fn finish_transition(&mut self) -> bool {
        if self.orphaned_notifications > 0 {
            self.orphaned_notifications -= 1;
            debug!(
                page = self.current_page,
                "late notification from a released transition absorbed"
            );
            return false;
        }
        self.release()
    }

    fn release(&mut self) -> bool {
        self.locked_at = None;
        match self.state {
            PagerState::Transitioning => {
                self.state = PagerState::Idle;
                true
            }
            PagerState::Idle => false,
        }
    }

    /// How long the lock has been held.
    pub fn lock_age(&self, now: Instant) -> Option<Duration> {
        self.locked_at
            .map(|locked_at| now.saturating_duration_since(locked_at))
    }

    /// Releases a lock held longer than `timeout`.
    ///
    /// Returns whether the lock was released.
    pub fn release_stale_lock(&mut self, now: Instant, timeout: Duration) -> bool {
        match self.lock_age(now) {
            Some(age) if age > timeout => {
                warn!(
                    page = self.current_page,
                    age_ms = age.as_millis() as u64,
                    "transition finished notification missing, releasing lock"
                );
                self.orphaned_notifications += 1;
                self.release()
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_idle_on_first_page() {
        let machine = PagingStateMachine::new(3, 600.0);
        assert_eq!(machine.current_page(), 0);
        assert_eq!(machine.state(), PagerState::Idle);
        assert_eq!(machine.offset(), 0.0);
    }

    #[test]
    fn slide_up_locks_and_moves_forward() {
        let mut machine = PagingStateMachine::new(3, 600.0);
        let transition = machine.apply(Decision::SlideUp, Instant::now());

        assert_eq!(
            transition,
            Some(Transition {
                page: 1,
                offset: -600.0
            })
        );
        assert!(machine.is_transitioning());
    }

    #[test]
    fn ignore_never_changes_state() {
        let mut machine = PagingStateMachine::new(3, 600.0);
        for _ in 0..5 {
            assert_eq!(machine.apply(Decision::Ignore, Instant::now()), None);
        }
        assert_eq!(machine.current_page(), 0);
        assert_eq!(machine.state(), PagerState::Idle);
    }

    #[test]
    fn decisions_during_transition_are_dropped() {
        let mut machine = PagingStateMachine::new(3, 600.0);
        let now = Instant::now();
        machine.apply(Decision::SlideUp, now);

        assert_eq!(machine.apply(Decision::SlideUp, now), None);
        assert_eq!(machine.apply(Decision::SlideDown, now), None);
        assert_eq!(machine.current_page(), 1);

        assert!(machine.finish_transition());
        assert!(!machine.finish_transition());
        assert_eq!(
            machine.apply(Decision::SlideDown, now).map(|t| t.page),
            Some(0)
        );
    }

    #[test]
    fn slide_down_from_first_page_is_refused() {
        let mut machine = PagingStateMachine::new(3, 600.0);
        assert_eq!(machine.apply(Decision::SlideDown, Instant::now()), None);
        assert!(!machine.is_transitioning());
    }

    #[test]
    fn move_to_does_not_clamp() {
        let mut machine = PagingStateMachine::new(3, 600.0);
        let transition = machine.move_to(7, Instant::now());
        assert_eq!(transition.offset, -4200.0);
        assert_eq!(machine.current_page(), 7);
    }

    #[test]
    fn lock_without_notification_persists() {
        let mut machine = PagingStateMachine::new(3, 600.0);
        let start = Instant::now();
        machine.move_to(1, start);

        let much_later = start + Duration::from_secs(3600);
        assert_eq!(machine.lock_age(much_later), Some(Duration::from_secs(3600)));
        assert!(machine.is_transitioning());
        assert_eq!(machine.apply(Decision::SlideUp, much_later), None);
    }

    #[test]
    fn stale_lock_is_released_after_timeout() {
        let mut machine = PagingStateMachine::new(3, 600.0);
        let start = Instant::now();
        let timeout = Duration::from_millis(800);
        machine.move_to(1, start);

        assert!(!machine.release_stale_lock(start + Duration::from_millis(800), timeout));
        assert!(machine.is_transitioning());
        assert!(machine.release_stale_lock(start + Duration::from_millis(801), timeout));
        assert!(!machine.is_transitioning());
        assert_eq!(machine.lock_age(start), None);
    }

    #[test]
    fn late_notification_cannot_unlock_the_next_transition() {
        let mut machine = PagingStateMachine::new(3, 600.0);
        let start = Instant::now();
        let timeout = Duration::from_millis(800);
        machine.apply(Decision::SlideUp, start);

        let later = start + Duration::from_secs(1);
        assert!(machine.release_stale_lock(later, timeout));
        assert!(machine.apply(Decision::SlideUp, later).is_some());

        // Owed by the first transition.
        assert!(!machine.finish_transition());
        assert!(machine.is_transitioning());

        assert!(machine.finish_transition());
        assert!(!machine.is_transitioning());
        assert_eq!(machine.current_page(), 2);
    }
}
