use chrono::{DateTime, Utc};

use crate::content::{self, BlogPost};
use crate::github::{ActivityOutcome, ActivityRecord};
use crate::store::{Preferences, Theme};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Home,
    Blog,
    Guestbook,
    Archives,
}

impl Page {
    pub const ALL: [Page; 4] = [Page::Home, Page::Blog, Page::Guestbook, Page::Archives];

    pub fn title(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Blog => "blog",
            Page::Guestbook => "guestbook",
            Page::Archives => "archives",
        }
    }

    pub fn index(self) -> usize {
        Page::ALL.iter().position(|p| *p == self).unwrap_or(0)
    }

    pub fn next(self) -> Self {
        Page::ALL[(self.index() + 1) % Page::ALL.len()]
    }

    pub fn prev(self) -> Self {
        Page::ALL[(self.index() + Page::ALL.len() - 1) % Page::ALL.len()]
    }
}

/// Focusable entries on the home page, in cursor order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeItem {
    Link(usize),
    ReadBlog,
    Scrobbled,
    LastCommit,
    LatestPost,
    CountVisit,
}

pub const HOME_ITEMS: [HomeItem; 9] = [
    HomeItem::Link(0),
    HomeItem::Link(1),
    HomeItem::Link(2),
    HomeItem::Link(3),
    HomeItem::ReadBlog,
    HomeItem::Scrobbled,
    HomeItem::LastCommit,
    HomeItem::LatestPost,
    HomeItem::CountVisit,
];

#[derive(Debug)]
pub enum ActivityState {
    Loading,
    Ready(ActivityOutcome),
}

impl ActivityState {
    pub fn record(&self) -> Option<&ActivityRecord> {
        match self {
            ActivityState::Loading => None,
            ActivityState::Ready(outcome) => Some(outcome.record()),
        }
    }
}

#[derive(Debug)]
pub struct AppState {
    // Preferences
    pub visitor_count: u64,
    pub theme: Theme,

    // Activity card
    pub activity: ActivityState,
    pub last_refresh: Option<DateTime<Utc>>,

    // Navigation
    pub page: Page,
    pub home_cursor: usize,

    // Blog
    pub search_active: bool,
    pub search_query: String,
    pub selected_tags: Vec<&'static str>,
    pub tag_cursor: usize,

    // Guestbook
    pub compose_active: bool,
    pub draft: String,

    // UI flags
    pub notice: Option<String>,
    pub should_quit: bool,
}

impl AppState {
    pub fn new(prefs: Preferences) -> Self {
        Self {
            visitor_count: prefs.visitor_count,
            theme: prefs.theme,
            activity: ActivityState::Loading,
            last_refresh: None,
            page: Page::Home,
            home_cursor: 0,
            search_active: false,
            search_query: String::new(),
            selected_tags: Vec::new(),
            tag_cursor: 0,
            compose_active: false,
            draft: String::new(),
            notice: None,
            should_quit: false,
        }
    }

    pub fn home_item(&self) -> HomeItem {
        HOME_ITEMS[self.home_cursor.min(HOME_ITEMS.len() - 1)]
    }

    /// Posts matching the search query and carrying every selected tag.
    pub fn visible_posts(&self) -> Vec<&'static BlogPost> {
        content::BLOG_POSTS
            .iter()
            .filter(|post| post.matches_query(&self.search_query))
            .filter(|post| self.selected_tags.iter().all(|tag| post.has_tag(tag)))
            .collect()
    }

    pub fn is_tag_selected(&self, tag: &str) -> bool {
        self.selected_tags.iter().any(|t| *t == tag)
    }

    /// Link behind the focused home entry, if it has one.
    pub fn selected_url(&self) -> Option<String> {
        if self.page != Page::Home {
            return None;
        }
        match self.home_item() {
            HomeItem::Link(i) => content::SOCIAL_LINKS
                .get(i)
                .and_then(|link| link.url)
                .map(str::to_string),
            HomeItem::Scrobbled => content::SCROBBLED.url.map(str::to_string),
            HomeItem::LastCommit => self.activity.record().map(|r| r.url.clone()),
            HomeItem::LatestPost => content::LATEST_POST.url.map(str::to_string),
            HomeItem::ReadBlog | HomeItem::CountVisit => None,
        }
    }
}
