//! Stories carousel section.
//!
//! A titled strip of story cards with a visibility flag. Shoppers see at
//! most [`StoriesSection::VIEW_LIMIT`] cards; editing surfaces all of them.

use crate::error::{AppError, Result};
use crate::models::{StoriesContent, Story};
use crate::store::{self, KvStore};

/// The stories section state machine.
#[derive(Debug)]
pub struct StoriesSection {
    content: StoriesContent,
    draft: Option<StoriesContent>,
}

impl StoriesSection {
    /// Maximum number of cards surfaced while Viewing.
    pub const VIEW_LIMIT: usize = 4;

    /// Load stories content from the store, falling back wholesale to the
    /// fixture default when nothing (or something malformed) is persisted.
    #[must_use]
    pub fn load(store: &dyn KvStore, fixture_default: &StoriesContent) -> Self {
        let content = store::read_or_else(store, store::keys::STORIES, || fixture_default.clone());
        Self {
            content,
            draft: None,
        }
    }

    /// Whether a draft is open.
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        self.draft.is_some()
    }

    fn displayed(&self) -> &StoriesContent {
        self.draft.as_ref().unwrap_or(&self.content)
    }

    /// Section heading (draft's while editing).
    #[must_use]
    pub fn title(&self) -> &str {
        &self.displayed().title
    }

    /// Whether shoppers see the section at all. While editing the section
    /// stays on screen regardless, so the seller can toggle it back.
    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.displayed().visible || self.is_editing()
    }

    /// The cards currently surfaced: all of them while editing, at most
    /// [`Self::VIEW_LIMIT`] otherwise.
    #[must_use]
    pub fn display_stories(&self) -> &[Story] {
        let stories = &self.displayed().stories;
        if self.is_editing() {
            stories
        } else {
            &stories[..stories.len().min(Self::VIEW_LIMIT)]
        }
    }

    /// Whether more cards exist than the viewing strip shows.
    #[must_use]
    pub fn has_more(&self) -> bool {
        self.displayed().stories.len() > Self::VIEW_LIMIT
    }

    /// Every card, regardless of state.
    #[must_use]
    pub fn all_stories(&self) -> &[Story] {
        &self.displayed().stories
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

    /// Replace the section heading in the draft.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.draft_mut()?.title = title.into();
        Ok(())
    }

    /// Flip the visibility flag in the draft.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state.
    pub fn toggle_visibility(&mut self) -> Result<()> {
        let draft = self.draft_mut()?;
        draft.visible = !draft.visible;
        Ok(())
    }

    /// Replace the title of the draft story at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state, `IndexOutOfRange` for
    /// a bad index.
    pub fn set_story_title(&mut self, index: usize, title: impl Into<String>) -> Result<()> {
        self.draft_story(index)?.title = title.into();
        Ok(())
    }

    /// Replace the description of the draft story at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state, `IndexOutOfRange` for
    /// a bad index.
    pub fn set_story_description(
        &mut self,
        index: usize,
        description: impl Into<String>,
    ) -> Result<()> {
        self.draft_story(index)?.description = description.into();
        Ok(())
    }

    /// Replace the image of the draft story at `index`.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state, `IndexOutOfRange` for
    /// a bad index.
    pub fn set_story_image(&mut self, index: usize, image: impl Into<String>) -> Result<()> {
        self.draft_story(index)?.image = image.into();
        Ok(())
    }

    /// Append a new story to the draft. Image, title and description must
    /// all be non-empty.
    ///
    /// # Errors
    ///
    /// Returns `NotEditing` outside the Editing state, `EmptyField` when a
    /// required field is blank.
    pub fn add_story(
        &mut self,
        image: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
    ) -> Result<()> {
        let image = image.into();
        let title = title.into();
        let description = description.into();
        if image.trim().is_empty() {
            return Err(AppError::EmptyField("image"));
        }
        if title.trim().is_empty() {
            return Err(AppError::EmptyField("title"));
        }
        if description.trim().is_empty() {
            return Err(AppError::EmptyField("description"));
        }

        self.draft_mut()?.stories.push(Story {
            id: Story::generate_id(),
            image,
            title,
            description,
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
        store::write(store, store::keys::STORIES, draft)?;

        self.content = self.draft.take().unwrap_or_default();
        tracing::info!(
            stories = self.content.stories.len(),
            visible = self.content.visible,
            "stories content saved"
        );
        Ok(())
    }

    /// Discard the draft and return to Viewing.
    pub fn cancel(&mut self) {
        self.draft = None;
    }

    fn draft_mut(&mut self) -> Result<&mut StoriesContent> {
        self.draft.as_mut().ok_or(AppError::NotEditing)
    }

    fn draft_story(&mut self, index: usize) -> Result<&mut Story> {
        self.draft_mut()?
            .stories
            .get_mut(index)
            .ok_or(AppError::IndexOutOfRange(index))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::fixtures::FixtureSet;
    use crate::store::MemoryStore;

    fn fixture_stories() -> StoriesContent {
        FixtureSet::shipped().stories
    }

    fn section(store: &MemoryStore) -> StoriesSection {
        StoriesSection::load(store, &fixture_stories())
    }

    #[test]
    fn test_loads_fixture_default_when_nothing_persisted() {
        let store = MemoryStore::new();
        let stories = section(&store);
        assert_eq!(stories.title(), "Our Story");
        assert_eq!(stories.all_stories(), fixture_stories().stories.as_slice());
        assert!(stories.is_visible());
    }

    #[test]
    fn test_malformed_persisted_content_yields_fixture_exactly() {
        let store = MemoryStore::new();
        store
            .set(store::keys::STORIES, r#"{"visible": "definitely"}"#)
            .unwrap();

        let stories = section(&store);
        assert_eq!(stories.all_stories(), fixture_stories().stories.as_slice());
        assert_eq!(stories.title(), fixture_stories().title);
    }

    #[test]
    fn test_viewing_caps_displayed_stories_at_limit() {
        let store = MemoryStore::new();
        let mut stories = section(&store);

        stories.begin_edit();
        stories
            .add_story("story-4.jpg", "Fourth", "Fourth card")
            .unwrap();
        stories
            .add_story("story-5.jpg", "Fifth", "Fifth card")
            .unwrap();

        // editing shows everything
        assert_eq!(stories.display_stories().len(), 5);

        stories.save(&store).unwrap();
        assert_eq!(stories.display_stories().len(), StoriesSection::VIEW_LIMIT);
        assert!(stories.has_more());
    }

    #[test]
    fn test_hidden_section_still_shows_while_editing() {
        let store = MemoryStore::new();
        let mut stories = section(&store);

        stories.begin_edit();
        stories.toggle_visibility().unwrap();
        stories.save(&store).unwrap();
        assert!(!stories.is_visible());

        stories.begin_edit();
        assert!(stories.is_visible());
        stories.cancel();
        assert!(!stories.is_visible());
    }

    #[test]
    fn test_save_round_trips_through_store() {
        let store = MemoryStore::new();
        let mut stories = section(&store);

        stories.begin_edit();
        stories.set_title("Behind the loom").unwrap();
        stories.set_story_description(1, "Rewritten").unwrap();
        stories
            .add_story("story-4.jpg", "Fourth", "Fourth card")
            .unwrap();
        let draft_titles: Vec<String> = stories
            .all_stories()
            .iter()
            .map(|s| s.title.clone())
            .collect();
        stories.save(&store).unwrap();

        let reloaded = section(&store);
        assert_eq!(reloaded.title(), "Behind the loom");
        let titles: Vec<String> = reloaded
            .all_stories()
            .iter()
            .map(|s| s.title.clone())
            .collect();
        assert_eq!(titles, draft_titles);
        assert_eq!(reloaded.all_stories()[1].description, "Rewritten");
    }

    #[test]
    fn test_cancel_discards_draft() {
        let store = MemoryStore::new();
        let mut stories = section(&store);

        stories.begin_edit();
        stories.set_title("Scrapped").unwrap();
        stories.cancel();

        assert_eq!(stories.title(), "Our Story");
        assert!(!stories.is_editing());
    }

    #[test]
    fn test_add_story_validates_every_field() {
        let store = MemoryStore::new();
        let mut stories = section(&store);
        stories.begin_edit();

        assert!(matches!(
            stories.add_story("", "T", "D"),
            Err(AppError::EmptyField("image"))
        ));
        assert!(matches!(
            stories.add_story("i.jpg", " ", "D"),
            Err(AppError::EmptyField("title"))
        ));
        assert!(matches!(
            stories.add_story("i.jpg", "T", ""),
            Err(AppError::EmptyField("description"))
        ));
        assert_eq!(stories.all_stories().len(), 3);
    }

    #[test]
    fn test_draft_ops_require_editing_state() {
        let store = MemoryStore::new();
        let mut stories = section(&store);

        assert!(matches!(stories.set_title("x"), Err(AppError::NotEditing)));
        assert!(matches!(
            stories.toggle_visibility(),
            Err(AppError::NotEditing)
        ));
        assert!(matches!(stories.save(&store), Err(AppError::NotEditing)));
    }
}
