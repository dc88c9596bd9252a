//! Hero slideshow section.
//!
//! Shows one slide at a time, rotating on a timer while in the Viewing
//! state (the timer itself lives in [`crate::rotation`] and calls
//! [`HeroSection::tick`]). Editing suspends rotation: ticks are inert while
//! a draft exists.

use crate::error::{AppError, Result};
use crate::models::{HeroContent, Slide, TextColor};
use crate::store::{self, KvStore};

/// The hero slideshow state machine.
#[derive(Debug)]
pub struct HeroSection {
    content: HeroContent,
    draft: Option<HeroContent>,
    current: usize,
}

impl HeroSection {
    /// Load hero content from the store, falling back wholesale to the
    /// fixture default when nothing (or something malformed) is persisted.
    #[must_use]
    pub fn load(store: &dyn KvStore, fixture_default: &HeroContent) -> Self {
        let content = store::read_or_else(store, store::keys::HERO, || fixture_default.clone());
        Self {
            content,
            draft: None,
            current: 0,
        }
    }

    /// Whether a draft is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    /// The slides currently shown: the draft's while editing, the live
    /// content's otherwise.
    #[must_use]
    pub fn slides(&self) -> &[Slide] {
        &self.draft.as_ref().unwrap_or(&self.content).slides
    }

    /// Index of the slide currently displayed.
    #[must_use]
    pub const fn current_index(&self) -> usize {
        self.current
    }

    /// The slide currently displayed, if there are any slides.
    #[must_use]
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides().get(self.current)
    }

    // =========================================================================
    // Navigation
    // =========================================================================

    /// Advance to the next slide, wrapping at the end.
    pub fn next(&mut self) {
        let len = self.slides().len();
        if len > 0 {
            self.current = (self.current + 1) % len;
        }
    }

    /// Step back to the previous slide, wrapping at the start.
    pub fn prev(&mut self) {
        let len = self.slides().len();
        if len > 0 {
            self.current = (self.current + len - 1) % len;
        }
    }

    /// Jump directly to `index` (ignored when out of range).
    pub fn select(&mut self, index: usize) {
        if index < self.slides().len() {
            self.current = index;
        }
    }

    /// Timer tick: advance one slide, but only while Viewing. Editing leaves
    /// the displayed slide where the seller put it.
    pub fn tick(&mut self) {
        if self.is_editing() {
            return;
        }
        self.next();
    }

    // =========================================================================
    // Editing
    // =========================================================================

    /// Enter the Editing state, snapshotting live content into a draft.
    /// Re-entering while already editing keeps the existing draft.
    pub fn begin_edit(&mut self) {
        if self.draft.is_none() {
            self.draft = Some(self.content.clone());
        }
    }

    /// Replace the tagline of the draft slide at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state, `IndexOutOfRange` for
    /// a bad index.
    pub fn set_tagline(&mut self, index: usize, tagline: impl Into<String>) -> Result<()> {
        self.draft_slide(index)?.tagline = tagline.into();
        Ok(())
    }

    /// Replace the image of the draft slide at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state, `IndexOutOfRange` for
    /// a bad index.
    pub fn set_image(&mut self, index: usize, image: impl Into<String>) -> Result<()> {
        self.draft_slide(index)?.image = image.into();
        Ok(())
    }

    /// Set the tagline display color of the draft slide at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state, `IndexOutOfRange` for
    /// a bad index.
    pub fn set_text_color(&mut self, index: usize, color: TextColor) -> Result<()> {
        self.draft_slide(index)?.text_color = color;
        Ok(())
    }

    /// Append a new slide to the draft. Image and tagline must be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state, `EmptyField` when a
    /// required field is blank.
    pub fn add_slide(
        &mut self,
        image: impl Into<String>,
        tagline: impl Into<String>,
        text_color: TextColor,
    ) -> Result<()> {
        let image = image.into();
        let tagline = tagline.into();
        if image.trim().is_empty() {
            return Err(AppError::EmptyField("image"));
        }
        if tagline.trim().is_empty() {
            return Err(AppError::EmptyField("tagline"));
        }

        let draft = self.draft.as_mut().ok_or(AppError::NotEditing)?;
        draft.slides.push(Slide {
            id: Slide::generate_id(),
            image,
            tagline,
            text_color,
        });
        Ok(())
    }

    /// Commit the draft: persist it as one write and make it live.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state, or the store error if
    /// the write fails (the draft stays open in that case).
    pub fn save(&mut self, store: &dyn KvStore) -> Result<()> {
        let draft = self.draft.as_ref().ok_or(AppError::NotEditing)?;
        store::write(store, store::keys::HERO, draft)?;

        // The write is durable; swap the draft in.
        self.content = self.draft.take().unwrap_or_default();
        self.clamp_current();
        tracing::info!(slides = self.content.slides.len(), "hero content saved");
        Ok(())
    }

    /// Discard the draft and return to Viewing.
    pub fn cancel(&mut self) {
        self.draft = None;
        self.clamp_current();
    }

    fn draft_slide(&mut self, index: usize) -> Result<&mut Slide> {
        self.draft
            .as_mut()
            .ok_or(AppError::NotEditing)?
            .slides
            .get_mut(index)
            .ok_or(AppError::IndexOutOfRange(index))
    }

    fn clamp_current(&mut self) {
        let len = self.slides().len();
        if len == 0 {
            self.current = 0;
        } else if self.current >= len {
            self.current = len - 1;
        }
    }
}
