use chrono::NaiveDate;

use termfolio::content::{self, BLOG_POSTS, BLOG_TAGS, BlogPost, archive, truncate};

#[test]
fn test_post_display_date() {
    assert_eq!(BLOG_POSTS[0].display_date(), "Dec 1, 2025");
    assert_eq!(BLOG_POSTS[1].display_date(), "Nov 28, 2025");
}

#[test]
fn test_post_dates_are_valid() {
    assert_eq!(BLOG_POSTS[0].date(), NaiveDate::from_ymd_opt(2025, 12, 1));
    for post in BLOG_POSTS.iter() {
        assert!(post.date().is_some(), "bad date on {}", post.title);
    }
}

#[test]
fn test_guestbook_timestamps_parse() {
    let first = content::GUESTBOOK[0].timestamp().unwrap();
    assert_eq!(
        first,
        NaiveDate::from_ymd_opt(2025, 12, 5)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap()
    );
    assert_eq!(content::GUESTBOOK[0].display_time(), "Dec 5, 2025 14:30");

    for entry in content::GUESTBOOK.iter() {
        assert!(entry.timestamp().is_some(), "bad timestamp for {}", entry.name);
    }
}

#[test]
fn test_post_tags_are_known() {
    for post in BLOG_POSTS.iter() {
        for tag in post.tags {
            assert!(BLOG_TAGS.contains(tag), "unknown tag {tag}");
        }
    }
}

#[test]
fn test_matches_query_is_case_insensitive() {
    let post = &BLOG_POSTS[0];
    assert!(post.matches_query(""));
    assert!(post.matches_query("CYBER"));
    assert!(post.matches_query("fundamentals"));
    assert!(post.matches_query("beginner"));
    assert!(!post.matches_query("grafana"));
}

#[test]
fn test_archive_groups_newest_first() {
    let months = archive(&BLOG_POSTS);
    let labels: Vec<_> = months.iter().map(|m| m.label()).collect();
    assert_eq!(labels, vec!["December 2025", "November 2025"]);
    assert_eq!(months[0].posts[0].title, "Getting Started with Cybersecurity");
}

#[test]
fn test_archive_same_month() {
    static POSTS: [BlogPost; 3] = [
        BlogPost {
            title: "early",
            description: "",
            year: 2024,
            month: 3,
            day: 2,
            views: 0,
            tags: &[],
        },
        BlogPost {
            title: "late",
            description: "",
            year: 2024,
            month: 3,
            day: 30,
            views: 0,
            tags: &[],
        },
        BlogPost {
            title: "older",
            description: "",
            year: 2023,
            month: 12,
            day: 31,
            views: 0,
            tags: &[],
        },
    ];

    let months = archive(&POSTS);
    assert_eq!(months.len(), 2);
    let march: Vec<_> = months[0].posts.iter().map(|p| p.title).collect();
    assert_eq!(march, vec!["late", "early"]);
    assert_eq!(months[1].label(), "December 2023");
}

#[test]
fn test_archive_empty() {
    assert!(archive(&[]).is_empty());
}

#[test]
fn test_truncate() {
    assert_eq!(truncate("short", 10), "short");
    assert_eq!(truncate("exactly ten", 11), "exactly ten");
    assert_eq!(truncate("Step-by-step guide", 10), "Step-by...");
}

#[test]
fn test_social_links() {
    let labels: Vec<_> = content::SOCIAL_LINKS.iter().map(|l| l.label).collect();
    assert_eq!(labels, vec!["github", "email", "discord", "pgp key"]);
    assert!(content::SOCIAL_LINKS[2].url.is_none());
}
