//! Hero rotation timing over a real session.

#![allow(clippy::unwrap_used)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use marigold_integration_tests::TestContext;
use marigold_storefront::rotation::{DEFAULT_PERIOD, RotationTimer};
use marigold_storefront::sections::HeroSection;

fn index_of(hero: &Arc<Mutex<HeroSection>>) -> usize {
    hero.lock().unwrap().current_index()
}

async fn advance(duration: Duration) {
    tokio::time::sleep(duration).await;
    tokio::task::yield_now().await;
}

#[tokio::test(start_paused = true)]
async fn rotation_cycles_the_fixture_slides_and_wraps() {
    let ctx = TestContext::new();
    let hero = Arc::new(Mutex::new(ctx.state.hero()));
    assert_eq!(hero.lock().unwrap().slides().len(), 3);

    let mut timer = RotationTimer::new(ctx.state.config().rotation_period);
    assert_eq!(timer.period(), DEFAULT_PERIOD);
    timer.start(hero.clone());

    for expected in [1, 2, 0, 1] {
        advance(DEFAULT_PERIOD).await;
        assert_eq!(index_of(&hero), expected);
    }
}

#[tokio::test(start_paused = true)]
async fn manual_navigation_reschedules_the_timer() {
    let ctx = TestContext::new();
    let hero = Arc::new(Mutex::new(ctx.state.hero()));
    let mut timer = RotationTimer::new(DEFAULT_PERIOD);
    timer.start(hero.clone());

    // 4s in, the shopper picks slide 2; the timer restarts from zero
    advance(Duration::from_secs(4)).await;
    hero.lock().unwrap().select(2);
    timer.reset(hero.clone());

    // the old schedule would have fired at 5s; the new one fires at 9s
    advance(Duration::from_secs(2)).await;
    assert_eq!(index_of(&hero), 2);
    advance(Duration::from_secs(3)).await;
    assert_eq!(index_of(&hero), 0);
}
