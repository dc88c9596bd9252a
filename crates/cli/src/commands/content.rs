//! Hero and stories content commands.
//!
//! Editing commands run one full draft cycle per invocation: authorize,
//! snapshot, mutate, save. Anything that fails mid-cycle leaves the live
//! content untouched because only the draft was mutated.

#![allow(clippy::print_stdout)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use marigold_storefront::error::AppError;
use marigold_storefront::models::{Slide, TextColor};
use marigold_storefront::rotation::RotationTimer;
use marigold_storefront::sections::{HeroSection, StoriesSection};
use marigold_storefront::state::AppState;
use marigold_storefront::store::keys;

/// `marigold hero show` - print the slideshow content.
pub fn hero_show(state: &AppState) {
    let hero = state.hero();
    println!("Hero slideshow ({} slides):", hero.slides().len());
    for (index, slide) in hero.slides().iter().enumerate() {
        print_slide(index, slide);
    }
}

fn print_slide(index: usize, slide: &Slide) {
    let color = match slide.text_color {
        TextColor::White => "white",
        TextColor::Purple => "purple",
    };
    println!("  [{index}] {:<20} \"{}\" ({color})", slide.image, slide.tagline);
}

/// `marigold hero preview` - run the rotating slideshow for a few periods.
pub async fn hero_preview(state: &AppState, periods: u32) {
    let period = state.config().rotation_period;
    let hero = Arc::new(Mutex::new(state.hero()));
    let mut timer = RotationTimer::new(period);
    timer.start(hero.clone());

    println!(
        "Previewing hero rotation ({} slides, {}s period, {periods} ticks)",
        lock(&hero).slides().len(),
        period.as_secs()
    );
    print_current(&hero);

    for _ in 0..periods {
        // wake just after each rotation tick
        tokio::time::sleep(period + Duration::from_millis(50)).await;
        print_current(&hero);
    }

    timer.cancel();
}

fn lock(hero: &Arc<Mutex<HeroSection>>) -> std::sync::MutexGuard<'_, HeroSection> {
    hero.lock()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
}

fn print_current(hero: &Arc<Mutex<HeroSection>>) {
    let section = lock(hero);
    if let Some(slide) = section.current_slide() {
        print_slide(section.current_index(), slide);
    }
}

/// `marigold hero add-slide` - append a slide and save.
///
/// # Errors
///
/// Returns `NotAuthorized` without the seller identity, `EmptyField` on
/// blank inputs, or the store error if saving fails.
pub fn hero_add_slide(
    state: &AppState,
    image: &str,
    tagline: &str,
    color: TextColor,
) -> Result<(), AppError> {
    let mut hero = authorized_hero(state)?;
    hero.add_slide(image, tagline, color)?;
    hero.save(state.store().as_ref())?;
    println!("Added slide \"{tagline}\" ({} slides now)", hero.slides().len());
    Ok(())
}

/// `marigold hero retag` - replace a slide's tagline and save.
///
/// # Errors
///
/// Returns `NotAuthorized`, `IndexOutOfRange`, or the store error.
pub fn hero_retag(state: &AppState, index: usize, tagline: &str) -> Result<(), AppError> {
    let mut hero = authorized_hero(state)?;
    hero.set_tagline(index, tagline)?;
    hero.save(state.store().as_ref())?;
    println!("Slide {index} retagged to \"{tagline}\"");
    Ok(())
}

/// `marigold hero recolor` - change a slide's tagline color and save.
///
/// # Errors
///
/// Returns `NotAuthorized`, `IndexOutOfRange`, or the store error.
pub fn hero_recolor(state: &AppState, index: usize, color: TextColor) -> Result<(), AppError> {
    let mut hero = authorized_hero(state)?;
    hero.set_text_color(index, color)?;
    hero.save(state.store().as_ref())?;
    println!("Slide {index} recolored");
    Ok(())
}

/// `marigold stories show` - print the stories content.
pub fn stories_show(state: &AppState) {
    let stories = state.stories();
    let visibility = if stories.is_visible() { "visible" } else { "hidden" };
    println!("{} ({visibility}):", stories.title());
    for story in stories.display_stories() {
        println!("  {:<20} {} - {}", story.image, story.title, story.description);
    }
    if stories.has_more() {
        println!(
            "  ... and {} more",
            stories.all_stories().len() - StoriesSection::VIEW_LIMIT
        );
    }
}

/// `marigold stories add` - append a story card and save.
///
/// # Errors
///
/// Returns `NotAuthorized`, `EmptyField`, or the store error.
pub fn stories_add(
    state: &AppState,
    image: &str,
    title: &str,
    description: &str,
) -> Result<(), AppError> {
    let mut stories = authorized_stories(state)?;
    stories.add_story(image, title, description)?;
    stories.save(state.store().as_ref())?;
    println!(
        "Added story \"{title}\" ({} cards now)",
        stories.all_stories().len()
    );
    Ok(())
}

/// `marigold stories set-title` - replace the section heading and save.
///
/// # Errors
///
/// Returns `NotAuthorized` or the store error.
pub fn stories_set_title(state: &AppState, title: &str) -> Result<(), AppError> {
    let mut stories = authorized_stories(state)?;
    stories.set_title(title)?;
    stories.save(state.store().as_ref())?;
    println!("Stories section retitled to \"{title}\"");
    Ok(())
}

/// `marigold stories toggle` - flip the section's visibility and save.
///
/// # Errors
///
/// Returns `NotAuthorized` or the store error.
pub fn stories_toggle(state: &AppState) -> Result<(), AppError> {
    let mut stories = authorized_stories(state)?;
    stories.toggle_visibility()?;
    stories.save(state.store().as_ref())?;
    let visibility = if stories.is_visible() { "visible" } else { "hidden" };
    println!("Stories section is now {visibility}");
    Ok(())
}

/// `marigold reset` - drop every persisted entity, returning the shop to
/// its shipped fixture state.
///
/// # Errors
///
/// Returns the store error if a removal fails.
pub fn reset(state: &AppState) -> Result<(), AppError> {
    let store = state.store();
    for key in [keys::CART, keys::HERO, keys::STORIES, keys::USER] {
        store.remove(key)?;
    }
    println!("All persisted state cleared; the shop is back to its defaults");
    Ok(())
}

// =============================================================================
// Authorization guards
// =============================================================================

/// Load the hero section with an open draft, or refuse.
fn authorized_hero(state: &AppState) -> Result<HeroSection, AppError> {
    ensure_editor(state)?;
    let mut hero = state.hero();
    hero.begin_edit();
    Ok(hero)
}

/// Load the stories section with an open draft, or refuse.
fn authorized_stories(state: &AppState) -> Result<StoriesSection, AppError> {
    ensure_editor(state)?;
    let mut stories = state.stories();
    stories.begin_edit();
    Ok(stories)
}

/// Editing is gated on the policy check, not on the sections themselves.
fn ensure_editor(state: &AppState) -> Result<(), AppError> {
    if state.is_editor()? {
        Ok(())
    } else {
        Err(AppError::NotAuthorized)
    }
}
