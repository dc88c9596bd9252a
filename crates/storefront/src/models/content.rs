//! Editable marketing content: hero slides and the stories section.
//!
//! These shapes are persisted wholesale on every save - there is no partial
//! update across sessions, so adding fields needs a serde default to keep
//! older persisted blobs loadable.

use chrono::Utc;
use serde::{Deserialize, Serialize};

use marigold_core::{SlideId, StoryId};

/// Display color for a hero slide's tagline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum TextColor {
    #[default]
    White,
    Purple,
}

/// One hero slideshow slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Slide {
    /// Unique id, derived from the creation timestamp.
    pub id: SlideId,
    /// Image reference (asset name or embedded data).
    pub image: String,
    /// Headline shown over the image.
    pub tagline: String,
    /// Tagline display color.
    #[serde(default)]
    pub text_color: TextColor,
}

impl Slide {
    /// Generate a fresh slide id from the current wall clock.
    #[must_use]
    pub fn generate_id() -> SlideId {
        SlideId::new(format!("slide_{}", Utc::now().timestamp_millis()))
    }
}

/// The hero slideshow content as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct HeroContent {
    /// Ordered slides.
    pub slides: Vec<Slide>,
}

/// One story card.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Story {
    /// Unique id, derived from the creation timestamp.
    pub id: StoryId,
    /// Image reference.
    pub image: String,
    /// Card title.
    pub title: String,
    /// Card body text.
    pub description: String,
}

impl Story {
    /// Generate a fresh story id from the current wall clock.
    #[must_use]
    pub fn generate_id() -> StoryId {
        StoryId::new(format!("story_{}", Utc::now().timestamp_millis()))
    }
}

/// The stories section content as persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoriesContent {
    /// Whether the section is shown to shoppers at all.
    pub visible: bool,
    /// Section heading.
    pub title: String,
    /// Ordered story cards.
    pub stories: Vec<Story>,
}

impl Default for StoriesContent {
    fn default() -> Self {
        Self {
            visible: true,
            title: "Our Story".to_owned(),
            stories: Vec::new(),
        }
    }
}
