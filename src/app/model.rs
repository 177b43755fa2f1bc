use std::sync::Arc;

use crate::catalog::{Catalog, Category, TrackId};
use crate::content::Content;

/// The site's pages, in tab order.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Page {
    Home,
    Music,
    Characters,
    Moments,
    Gallery,
}

impl Page {
    pub const ALL: [Page; 5] = [
        Page::Home,
        Page::Music,
        Page::Characters,
        Page::Moments,
        Page::Gallery,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "Home",
            Page::Music => "Music",
            Page::Characters => "Characters",
            Page::Moments => "Moments",
            Page::Gallery => "Gallery",
        }
    }
}

/// The main presentation model.
pub struct App {
    pub catalog: Arc<Catalog>,
    pub content: Content,

    pub page: Page,
    /// Cursor within the music page's filtered view.
    pub music_cursor: usize,
    /// Active category filter on the music page; `None` shows all.
    pub filter: Option<Category>,
    /// Cursor on whichever content list page is active.
    pub list_cursor: usize,
}

impl App {
    pub fn new(catalog: Arc<Catalog>, content: Content) -> Self {
        Self {
            catalog,
            content,
            page: Page::Home,
            music_cursor: 0,
            filter: None,
            list_cursor: 0,
        }
    }

    pub fn next_page(&mut self) {
        let pos = Page::ALL.iter().position(|&p| p == self.page).unwrap_or(0);
        self.set_page(Page::ALL[(pos + 1) % Page::ALL.len()]);
    }

    pub fn prev_page(&mut self) {
        let pos = Page::ALL.iter().position(|&p| p == self.page).unwrap_or(0);
        self.set_page(Page::ALL[(pos + Page::ALL.len() - 1) % Page::ALL.len()]);
    }

    pub fn set_page(&mut self, page: Page) {
        if self.page != page {
            self.page = page;
            self.list_cursor = 0;
        }
    }

    /// Catalog indices visible on the music page, honoring the filter.
    pub fn visible_tracks(&self) -> Vec<usize> {
        self.catalog.with_category(self.filter)
    }

    /// Track id under the music cursor, if the filtered view is
    /// non-empty.
    pub fn cursor_track_id(&self) -> Option<TrackId> {
        let visible = self.visible_tracks();
        visible
            .get(self.music_cursor)
            .and_then(|&i| self.catalog.get(i))
            .map(|t| t.id)
    }

    /// Cycle the category filter: all → openings → endings → OST → all.
    pub fn cycle_filter(&mut self) {
        self.filter = match self.filter {
            None => Some(Category::Opening),
            Some(Category::Opening) => Some(Category::Ending),
            Some(Category::Ending) => Some(Category::Ost),
            Some(Category::Ost) => None,
        };
        self.clamp_music_cursor();
    }

    pub fn music_down(&mut self) {
        let len = self.visible_tracks().len();
        if len > 0 {
            self.music_cursor = (self.music_cursor + 1) % len;
        }
    }

    pub fn music_up(&mut self) {
        let len = self.visible_tracks().len();
        if len > 0 {
            self.music_cursor = (self.music_cursor + len - 1) % len;
        }
    }

    /// Move the music cursor to the row showing `id`, when visible.
    pub fn focus_track(&mut self, id: TrackId) {
        if let Some(index) = self.catalog.index_of(id) {
            if let Some(pos) = self.visible_tracks().iter().position(|&i| i == index) {
                self.music_cursor = pos;
            }
        }
    }

    fn clamp_music_cursor(&mut self) {
        let len = self.visible_tracks().len();
        if self.music_cursor >= len {
            self.music_cursor = 0;
        }
    }

    /// Number of rows on the active content list page.
    pub fn active_list_len(&self) -> usize {
        match self.page {
            Page::Characters => self.content.characters.len(),
            Page::Moments => self.content.moments.len(),
            Page::Gallery => self.content.gallery.len(),
            Page::Home | Page::Music => 0,
        }
    }

    pub fn list_down(&mut self) {
        let len = self.active_list_len();
        if len > 0 {
            self.list_cursor = (self.list_cursor + 1) % len;
        }
    }

    pub fn list_up(&mut self) {
        let len = self.active_list_len();
        if len > 0 {
            self.list_cursor = (self.list_cursor + len - 1) % len;
        }
    }
}
