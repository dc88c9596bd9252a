//! Hero rotation timer.
//!
//! The hero slideshow advances on a fixed period while it is in the Viewing
//! state. Rather than an ambient interval side effect, rotation is an
//! explicit handle with schedule / cancel-and-reschedule / cancel
//! operations: manual navigation calls [`RotationTimer::reset`] so the full
//! period elapses before the next automatic advance, and dropping the handle
//! (or calling [`RotationTimer::cancel`]) stops rotation outright.
//!
//! Ticks go through [`HeroSection::tick`], which ignores them while a draft
//! is open, so the timer does not need to know about editing state.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::sections::HeroSection;

/// Default rotation period.
pub const DEFAULT_PERIOD: Duration = Duration::from_secs(5);

/// Cancellable periodic driver for [`HeroSection::tick`].
pub struct RotationTimer {
    period: Duration,
    task: Option<JoinHandle<()>>,
}

impl RotationTimer {
    /// Create an idle timer with the given period. Nothing is scheduled
    /// until [`start`](Self::start) is called.
    #[must_use]
    pub const fn new(period: Duration) -> Self {
        Self { period, task: None }
    }

    /// The configured period.
    #[must_use]
    pub const fn period(&self) -> Duration {
        self.period
    }

    /// Whether a rotation task is currently scheduled.
    #[must_use]
    pub const fn is_running(&self) -> bool {
        self.task.is_some()
    }

    /// Schedule rotation: every period, advance `hero` by one tick. Any
    /// previously scheduled task is cancelled first.
    pub fn start(&mut self, hero: Arc<Mutex<HeroSection>>) {
        self.cancel();
        let period = self.period;
        self.task = Some(tokio::spawn(async move {
            let mut interval = tokio::time::interval(period);
            // the first tick of a fresh interval fires immediately
            interval.tick().await;
            loop {
                interval.tick().await;
                let mut section = hero
                    .lock()
                    .unwrap_or_else(std::sync::PoisonError::into_inner);
                section.tick();
            }
        }));
    }

    /// Cancel-and-reschedule: restart the full period, e.g. after manual
    /// navigation, so the slide the user chose stays up for a whole period.
    pub fn reset(&mut self, hero: Arc<Mutex<HeroSection>>) {
        self.start(hero);
    }

    /// Cancel the scheduled task, if any.
    pub fn cancel(&mut self) {
        if let Some(task) = self.task.take() {
            task.abort();
        }
    }
}

impl Drop for RotationTimer {
    fn drop(&mut self) {
        self.cancel();
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;
    use crate::store::MemoryStore;

    fn shared_hero() -> Arc<Mutex<HeroSection>> {
        let store = MemoryStore::new();
        Arc::new(Mutex::new(HeroSection::load(
            &store,
            &FixtureSet::shipped().hero,
        )))
    }

    fn current_index(hero: &Arc<Mutex<HeroSection>>) -> usize {
        hero.lock().unwrap().current_index()
    }

    async fn advance(duration: Duration) {
        // paused-clock advance; sleeping moves virtual time and runs due timers
        tokio::time::sleep(duration).await;
        tokio::task::yield_now().await;
    }

    #[tokio::test(start_paused = true)]
    async fn test_three_periods_wrap_back_to_start() {
        let hero = shared_hero();
        let mut timer = RotationTimer::new(DEFAULT_PERIOD);
        timer.start(hero.clone());

        advance(Duration::from_secs(5)).await;
        assert_eq!(current_index(&hero), 1);
        advance(Duration::from_secs(5)).await;
        assert_eq!(current_index(&hero), 2);
        advance(Duration::from_secs(5)).await;
        assert_eq!(current_index(&hero), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_reset_restarts_the_full_period() {
        let hero = shared_hero();
        let mut timer = RotationTimer::new(DEFAULT_PERIOD);
        timer.start(hero.clone());

        advance(Duration::from_secs(3)).await;
        assert_eq!(current_index(&hero), 0);

        // manual navigation: select + reschedule
        hero.lock().unwrap().select(2);
        timer.reset(hero.clone());

        // 3s into the new period nothing fires (the old timer would have)
        advance(Duration::from_secs(3)).await;
        assert_eq!(current_index(&hero), 2);

        advance(Duration::from_secs(2)).await;
        assert_eq!(current_index(&hero), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_cancel_stops_rotation() {
        let hero = shared_hero();
        let mut timer = RotationTimer::new(DEFAULT_PERIOD);
        timer.start(hero.clone());
        assert!(timer.is_running());

        timer.cancel();
        assert!(!timer.is_running());

        advance(Duration::from_secs(30)).await;
        assert_eq!(current_index(&hero), 0);
    }

    #[tokio::test(start_paused = true)]
    async fn test_editing_suspends_rotation() {
        let hero = shared_hero();
        let mut timer = RotationTimer::new(DEFAULT_PERIOD);
        timer.start(hero.clone());

        hero.lock().unwrap().begin_edit();
        advance(Duration::from_secs(20)).await;
        assert_eq!(current_index(&hero), 0);

        hero.lock().unwrap().cancel();
        advance(Duration::from_secs(5)).await;
        assert_eq!(current_index(&hero), 1);
    }
}
