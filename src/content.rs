//! Static site content. Nothing here is fetched or persisted.

use chrono::{NaiveDate, NaiveDateTime};

pub struct Profile {
    pub site: &'static str,
    pub heading: &'static str,
    pub tagline: &'static str,
}

pub struct SocialLink {
    pub label: &'static str,
    pub url: Option<&'static str>,
}

pub struct InfoCard {
    pub heading: &'static str,
    pub title: &'static str,
    pub subtitle: &'static str,
    pub footer: &'static str,
    pub url: Option<&'static str>,
}

pub struct BlogPost {
    pub title: &'static str,
    pub description: &'static str,
    pub year: i32,
    pub month: u32,
    pub day: u32,
    pub views: u32,
    pub tags: &'static [&'static str],
}

pub struct GuestbookEntry {
    pub name: &'static str,
    /// `MM/DD/YYYY HH:MM`
    pub posted_at: &'static str,
    pub message: &'static str,
}

pub static PROFILE: Profile = Profile {
    site: "heysomting.by",
    heading: "hey, i'm somting",
    tagline: "cybersecurity student && college freshman. passionate about breaking things to understand how they work.",
};

pub static SOCIAL_LINKS: [SocialLink; 4] = [
    SocialLink {
        label: "github",
        url: Some("https://github.com/iamnotsomting"),
    },
    SocialLink {
        label: "email",
        url: Some("mailto:hi@heysomting.by"),
    },
    SocialLink {
        label: "discord",
        url: None,
    },
    SocialLink {
        label: "pgp key",
        url: Some("https://heysomting.by/pgp.txt"),
    },
];

pub static SCROBBLED: InfoCard = InfoCard {
    heading: "scrobbled",
    title: "scary all over",
    subtitle: "by yerbby dj",
    footer: "via last.fm",
    url: Some("https://www.last.fm"),
};

pub static LATEST_POST: InfoCard = InfoCard {
    heading: "latest post",
    title: "Setting Up Cowrie Honeypot w/ Grafana Monitoring",
    subtitle: "Step-by-step guide to setting up Cowrie honeypot and shipping its logs to Grafana dashboards.",
    footer: "2 months ago",
    url: None,
};

pub static BLOG_TAGS: [&str; 5] = ["Security", "Tutorial", "Web Dev", "Beginner", "Advanced"];

pub static BLOG_POSTS: [BlogPost; 2] = [
    BlogPost {
        title: "Getting Started with Cybersecurity",
        description: "A beginner's guide to understanding cybersecurity fundamentals and best practices.",
        year: 2025,
        month: 12,
        day: 1,
        views: 42,
        tags: &["Security", "Tutorial", "Beginner"],
    },
    BlogPost {
        title: "Building Secure Web Applications",
        description: "Learn how to build web applications with security in mind from the ground up.",
        year: 2025,
        month: 11,
        day: 28,
        views: 38,
        tags: &["Web Dev", "Security", "Tutorial"],
    },
];

pub static GUESTBOOK: [GuestbookEntry; 3] = [
    GuestbookEntry {
        name: "John Doe",
        posted_at: "12/05/2025 14:30",
        message: "Amazing portfolio! Love the design.",
    },
    GuestbookEntry {
        name: "Jane Smith",
        posted_at: "12/04/2025 09:15",
        message: "Really cool animations and theme toggle!",
    },
    GuestbookEntry {
        name: "Mike Wilson",
        posted_at: "12/03/2025 18:45",
        message: "The visitor counter is a nice touch!",
    },
];

impl BlogPost {
    pub fn date(&self) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month, self.day)
    }

    /// `Dec 1, 2025`
    pub fn display_date(&self) -> String {
        match self.date() {
            Some(date) => date.format("%b %-d, %Y").to_string(),
            None => format!("{}-{:02}-{:02}", self.year, self.month, self.day),
        }
    }

    pub fn has_tag(&self, tag: &str) -> bool {
        self.tags.iter().any(|t| *t == tag)
    }

    /// Case-insensitive match against title, description and tags.
    pub fn matches_query(&self, query: &str) -> bool {
        if query.is_empty() {
            return true;
        }
        let query = query.to_lowercase();
        self.title.to_lowercase().contains(&query)
            || self.description.to_lowercase().contains(&query)
            || self.tags.iter().any(|t| t.to_lowercase().contains(&query))
    }
}

impl GuestbookEntry {
    pub fn timestamp(&self) -> Option<NaiveDateTime> {
        NaiveDateTime::parse_from_str(self.posted_at, "%m/%d/%Y %H:%M").ok()
    }

    /// `Dec 5, 2025 14:30`, or the raw text if it does not parse.
    pub fn display_time(&self) -> String {
        match self.timestamp() {
            Some(ts) => ts.format("%b %-d, %Y %H:%M").to_string(),
            None => self.posted_at.to_string(),
        }
    }
}

/// Posts published in one calendar month.
pub struct ArchiveMonth<'a> {
    pub year: i32,
    pub month: u32,
    pub posts: Vec<&'a BlogPost>,
}

impl ArchiveMonth<'_> {
    /// `December 2025`
    pub fn label(&self) -> String {
        match NaiveDate::from_ymd_opt(self.year, self.month, 1) {
            Some(date) => date.format("%B %Y").to_string(),
            None => format!("{}-{:02}", self.year, self.month),
        }
    }
}

/// Group posts by month, newest month first and newest post first within a
/// month.
pub fn archive(posts: &[BlogPost]) -> Vec<ArchiveMonth<'_>> {
    let mut sorted: Vec<&BlogPost> = posts.iter().collect();
    sorted.sort_by(|a, b| (b.year, b.month, b.day).cmp(&(a.year, a.month, a.day)));

    sorted
        .chunk_by(|a, b| (a.year, a.month) == (b.year, b.month))
        .map(|chunk| ArchiveMonth {
            year: chunk[0].year,
            month: chunk[0].month,
            posts: chunk.to_vec(),
        })
        .collect()
}

/// Shorten `text` to at most `max` characters, marking the cut with `...`.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }
    let kept: String = text.chars().take(max.saturating_sub(3)).collect();
    format!("{kept}...")
}
