//! Media gallery grid and lightbox.
//!
//! The lightbox shows one item at a time. Navigation wraps in both
//! directions: `(index ± 1 + len) % len`.

use std::fmt;
use std::sync::Arc;

use crate::error::{SiteError, SiteResult};
use crate::hooks::PageHooks;
use crate::types::{MediaItem, MediaKind};

/// One tile of the gallery grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GalleryTile<'a> {
    pub index: usize,
    /// Thumbnail for videos, the image itself otherwise
    pub src: &'a str,
    pub title: &'a str,
    /// Draw the play button overlay
    pub play_overlay: bool,
}

/// What the lightbox content area renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LightboxMedia<'a> {
    Image {
        src: &'a str,
        alt: &'a str,
    },
    /// Always with controls, autoplay and loop
    Video {
        src: &'a str,
    },
}

/// The lightbox's current content and caption
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LightboxView<'a> {
    pub index: usize,
    pub media: LightboxMedia<'a>,
    pub title: &'a str,
    /// Empty when the item has no description
    pub description: &'a str,
}

/// Gallery controller
pub struct MediaGallery {
    items: Vec<MediaItem>,
    hooks: Arc<dyn PageHooks>,
    current: usize,
    open: bool,
}

impl fmt::Debug for MediaGallery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MediaGallery")
            .field("items", &self.items.len())
            .field("current", &self.current)
            .field("open", &self.open)
            .finish()
    }
}

impl MediaGallery {
    pub fn new(items: Vec<MediaItem>, hooks: Arc<dyn PageHooks>) -> Self {
        Self {
            items,
            hooks,
            current: 0,
            open: false,
        }
    }

    pub fn items(&self) -> &[MediaItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Grid tiles in catalog order
    pub fn tiles(&self) -> impl Iterator<Item = GalleryTile<'_>> {
        self.items.iter().enumerate().map(|(index, item)| GalleryTile {
            index,
            src: item.tile_src(),
            title: &item.title,
            play_overlay: item.is_video(),
        })
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    /// Show item `index` in the lightbox and lock page scroll.
    pub fn open(&mut self, index: usize) -> SiteResult<()> {
        if self.items.is_empty() {
            return Err(SiteError::EmptyGallery);
        }
        if index >= self.items.len() {
            return Err(SiteError::MediaIndexOutOfRange {
                index,
                len: self.items.len(),
            });
        }

        self.current = index;
        if !self.open {
            self.open = true;
            self.hooks.set_scroll_locked(true);
        }
        tracing::debug!(index, title = %self.items[index].title, "Lightbox opened");
        Ok(())
    }

    /// Stop playback, hide the lightbox and restore scroll.
    pub fn close(&mut self) {
        self.hooks.stop_media();
        self.open = false;
        self.hooks.set_scroll_locked(false);
        tracing::debug!("Lightbox closed");
    }

    /// Step to the following item, wrapping to the first.
    pub fn next(&mut self) {
        if let Some(len) = self.nonzero_len() {
            self.current = (self.current + 1) % len;
        }
    }

    /// Step to the preceding item, wrapping to the last.
    pub fn previous(&mut self) {
        if let Some(len) = self.nonzero_len() {
            self.current = (self.current + len - 1) % len;
        }
    }

    fn nonzero_len(&self) -> Option<usize> {
        (!self.items.is_empty()).then_some(self.items.len())
    }

    pub fn current_item(&self) -> Option<&MediaItem> {
        self.items.get(self.current)
    }

    /// Content for the lightbox, or `None` on an empty gallery.
    pub fn view(&self) -> Option<LightboxView<'_>> {
        let item = self.current_item()?;
        let media = match item.kind {
            MediaKind::Video => LightboxMedia::Video { src: &item.src },
            MediaKind::Image => LightboxMedia::Image {
                src: &item.src,
                alt: &item.title,
            },
        };
        Some(LightboxView {
            index: self.current,
            media,
            title: &item.title,
            description: item.description.as_deref().unwrap_or(""),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::hooks::{NoopPage, PageEvent, RecordingPage};

    fn gallery() -> MediaGallery {
        MediaGallery::new(Catalog::builtin().media, Arc::new(NoopPage))
    }

    #[test]
    fn test_next_wraps_to_first() {
        let mut gallery = gallery();
        let last = gallery.len() - 1;
        gallery.open(last).unwrap();

        gallery.next();
        assert_eq!(gallery.current_index(), 0);
    }

    #[test]
    fn test_previous_wraps_to_last() {
        let mut gallery = gallery();
        gallery.open(0).unwrap();

        gallery.previous();
        assert_eq!(gallery.current_index(), gallery.len() - 1);
    }

    #[test]
    fn test_open_out_of_range() {
        let mut gallery = gallery();
        let err = gallery.open(99).unwrap_err();
        assert!(matches!(
            err,
            SiteError::MediaIndexOutOfRange { index: 99, len: 8 }
        ));
        assert!(!gallery.is_open());
    }

    #[test]
    fn test_empty_gallery() {
        let mut gallery = MediaGallery::new(Vec::new(), Arc::new(NoopPage));
        assert!(matches!(gallery.open(0), Err(SiteError::EmptyGallery)));
        gallery.next();
        gallery.previous();
        assert!(gallery.view().is_none());
    }

    #[test]
    fn test_video_view_and_tiles() {
        let mut gallery = gallery();
        gallery.open(2).unwrap();

        let view = gallery.view().unwrap();
        assert_eq!(
            view.media,
            LightboxMedia::Video {
                src: "videos/student-success-story.mp4"
            }
        );
        assert_eq!(view.title, "Student Success Story");

        let tile = gallery.tiles().nth(2).unwrap();
        assert_eq!(tile.src, "images/testimonial-student-1.jpg");
        assert!(tile.play_overlay);

        let image_tile = gallery.tiles().next().unwrap();
        assert_eq!(image_tile.src, "images/classroom-learning.jpg");
        assert!(!image_tile.play_overlay);
    }

    #[test]
    fn test_missing_description_renders_empty() {
        let mut items = Catalog::builtin().media;
        items[0].description = None;
        let mut gallery = MediaGallery::new(items, Arc::new(NoopPage));
        gallery.open(0).unwrap();
        assert_eq!(gallery.view().unwrap().description, "");
    }

    #[test]
    fn test_close_stops_media_and_unlocks() {
        let page = RecordingPage::new();
        let mut gallery = MediaGallery::new(Catalog::builtin().media, Arc::new(page.clone()));

        gallery.open(4).unwrap();
        assert!(page.scroll_locked());

        gallery.close();
        assert!(!gallery.is_open());
        assert_eq!(
            page.events(),
            vec![
                PageEvent::ScrollLocked,
                PageEvent::MediaStopped,
                PageEvent::ScrollUnlocked
            ]
        );
    }
}
