use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Clear, List, ListItem, Paragraph, Tabs, Wrap},
};

use crate::app::state::{ActivityState, AppState, HomeItem, Page};
use crate::content::{self, InfoCard};
use crate::store::Theme;
use crate::ui::theme::Palette;
use crate::util::ordinal::ordinal;
use crate::util::time::relative_time;

pub fn render_header(f: &mut Frame, area: Rect, state: &AppState, pal: &Palette) {
    let theme_label = match state.theme {
        Theme::Dark => " ☀ light (t) ",
        Theme::Light => " ☾ dark (t) ",
    };

    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(pal.border)
        .title(Line::from(Span::styled(
            format!(" {} ", content::PROFILE.site),
            pal.heading,
        )))
        .title(Line::from(Span::styled(theme_label, pal.dim)).right_aligned());

    let titles: Vec<Line> = Page::ALL
        .iter()
        .enumerate()
        .map(|(i, page)| Line::from(format!("{} {}", i + 1, page.title())))
        .collect();

    let tabs = Tabs::new(titles)
        .block(block)
        .select(state.page.index())
        .style(pal.dim)
        .highlight_style(pal.highlight)
        .divider(Span::styled("|", pal.border));

    f.render_widget(tabs, area);
}

pub fn render_page(f: &mut Frame, area: Rect, state: &AppState, pal: &Palette) {
    match state.page {
        Page::Home => render_home(f, area, state, pal),
        Page::Blog => render_blog(f, area, state, pal),
        Page::Guestbook => render_guestbook(f, area, state, pal),
        Page::Archives => render_archives(f, area, pal),
    }
}

fn focus_style(state: &AppState, item: HomeItem, normal: Style, pal: &Palette) -> Style {
    if state.home_item() == item {
        pal.highlight
    } else {
        normal
    }
}

fn render_home(f: &mut Frame, area: Rect, state: &AppState, pal: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(9),
            Constraint::Min(7),
            Constraint::Length(4),
        ])
        .split(area);

    // Hero
    let mut links = Vec::new();
    for (i, link) in content::SOCIAL_LINKS.iter().enumerate() {
        if i > 0 {
            links.push(Span::raw("  "));
        }
        links.push(Span::styled(
            format!("[ {} ]", link.label),
            focus_style(state, HomeItem::Link(i), pal.accent, pal),
        ));
    }

    let hero = vec![
        Line::from(""),
        Line::from(Span::styled(content::PROFILE.heading, pal.heading)),
        Line::from(""),
        Line::from(Span::styled(content::PROFILE.tagline, pal.dim)),
        Line::from(""),
        Line::from(links),
        Line::from(""),
        Line::from(Span::styled(
            "read my blog →",
            focus_style(state, HomeItem::ReadBlog, pal.heading, pal),
        )),
    ];
    let hero = Paragraph::new(hero)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    f.render_widget(hero, rows[0]);

    // Cards
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
            Constraint::Ratio(1, 3),
        ])
        .split(rows[1]);

    render_info_card(
        f,
        cols[0],
        &content::SCROBBLED,
        state.home_item() == HomeItem::Scrobbled,
        pal,
    );
    render_activity_card(f, cols[1], state, pal);
    render_info_card(
        f,
        cols[2],
        &content::LATEST_POST,
        state.home_item() == HomeItem::LatestPost,
        pal,
    );

    // Visitor counter
    let counter = vec![
        Line::from(vec![
            Span::styled("you are currently the ", pal.dim),
            Span::styled(ordinal(state.visitor_count), pal.heading),
            Span::styled(" visitor!", pal.dim),
        ]),
        Line::from(""),
        Line::from(Span::styled(
            "[ I visited! Click to count ]",
            focus_style(state, HomeItem::CountVisit, pal.accent, pal),
        )),
    ];
    let counter = Paragraph::new(counter).alignment(Alignment::Center).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(pal.border),
    );
    f.render_widget(counter, rows[2]);
}

fn card_block<'a>(heading: &'a str, focused: bool, pal: &Palette) -> Block<'a> {
    Block::default()
        .title(format!(" {} ", heading.to_uppercase()))
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(if focused {
            pal.border_focused
        } else {
            pal.border
        })
}

fn render_info_card(f: &mut Frame, area: Rect, card: &InfoCard, focused: bool, pal: &Palette) {
    let lines = vec![
        Line::from(Span::styled(card.title, pal.heading)),
        Line::from(Span::styled(content::truncate(card.subtitle, 53), pal.dim)),
        Line::from(""),
        Line::from(Span::styled(card.footer, pal.dim)),
    ];
    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(card_block(card.heading, focused, pal));
    f.render_widget(para, area);
}

fn render_activity_card(f: &mut Frame, area: Rect, state: &AppState, pal: &Palette) {
    let focused = state.home_item() == HomeItem::LastCommit;
    let lines = match &state.activity {
        ActivityState::Loading => vec![Line::from(Span::styled("loading...", pal.dim))],
        ActivityState::Ready(outcome) => {
            let record = outcome.record();
            let mut lines = vec![
                Line::from(Span::styled(record.message.as_str(), pal.heading)),
                Line::from(Span::styled(
                    format!("{} • main", record.repository_name),
                    pal.dim,
                )),
                Line::from(""),
                Line::from(Span::styled(record.relative_time.as_str(), pal.dim)),
            ];
            if outcome.is_fallback() {
                lines.push(Line::from(Span::styled("(offline)", pal.dim)));
            }
            lines
        }
    };

    let para = Paragraph::new(lines)
        .wrap(Wrap { trim: true })
        .block(card_block("last commit", focused, pal));
    f.render_widget(para, area);
}

fn page_heading<'a>(title: &'a str, subtitle: &'a str, pal: &Palette) -> Vec<Line<'a>> {
    vec![
        Line::from(Span::styled(title, pal.heading)),
        Line::from(Span::styled(subtitle, pal.dim)),
    ]
}

fn render_blog(f: &mut Frame, area: Rect, state: &AppState, pal: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Length(content::BLOG_TAGS.len() as u16 + 2),
            Constraint::Min(3),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(page_heading("blog", "where i post stuff", pal)),
        rows[0],
    );

    let search_text = if state.search_query.is_empty() && !state.search_active {
        Span::styled("search posts (/)", pal.dim)
    } else {
        Span::styled(format!("/{}", state.search_query), pal.heading)
    };
    let search = Paragraph::new(Line::from(search_text)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(if state.search_active {
                pal.border_focused
            } else {
                pal.border
            }),
    );
    f.render_widget(search, rows[1]);

    let tags: Vec<ListItem> = content::BLOG_TAGS
        .iter()
        .enumerate()
        .map(|(i, tag)| {
            let marker = if state.is_tag_selected(tag) { "[x]" } else { "[ ]" };
            let style = if i == state.tag_cursor {
                pal.highlight
            } else if state.is_tag_selected(tag) {
                pal.tag_selected
            } else {
                pal.tag
            };
            ListItem::new(Line::from(Span::styled(format!("{marker} {tag}"), style)))
        })
        .collect();
    let tags = List::new(tags).block(
        Block::default()
            .title(" filter by tags ")
            .borders(Borders::ALL)
            .border_style(pal.border),
    );
    f.render_widget(tags, rows[2]);

    let posts = state.visible_posts();
    let block = Block::default()
        .title(format!(" posts ({}) ", posts.len()))
        .borders(Borders::ALL)
        .border_style(pal.border);

    if posts.is_empty() {
        let para = Paragraph::new("No matching posts").style(pal.dim).block(block);
        f.render_widget(para, rows[3]);
        return;
    }

    let mut lines = Vec::new();
    for post in posts {
        lines.push(Line::from(vec![
            Span::styled(post.title, pal.heading),
            Span::styled(
                format!("  👁 {}  {}", post.views, post.display_date()),
                pal.dim,
            ),
        ]));
        lines.push(Line::from(Span::styled(post.description, pal.dim)));
        lines.push(Line::from(
            post.tags
                .iter()
                .map(|t| Span::styled(format!("#{t} "), pal.accent))
                .collect::<Vec<_>>(),
        ));
        lines.push(Line::from(""));
    }
    let para = Paragraph::new(lines).wrap(Wrap { trim: true }).block(block);
    f.render_widget(para, rows[3]);
}

fn render_guestbook(f: &mut Frame, area: Rect, state: &AppState, pal: &Palette) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(6),
            Constraint::Min(3),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(page_heading("guestbook", "feel free to leave a message!", pal)),
        rows[0],
    );

    let draft = if state.draft.is_empty() && !state.compose_active {
        Line::from(Span::styled("Write your message here...", pal.dim))
    } else {
        Line::from(Span::styled(state.draft.as_str(), pal.heading))
    };
    let compose = Paragraph::new(vec![
        draft,
        Line::from(""),
        Line::from(""),
        Line::from(Span::styled("[ Sign In to Comment ]", pal.accent)),
    ])
    .wrap(Wrap { trim: false })
    .block(
        Block::default()
            .title(" Leave comment ")
            .borders(Borders::ALL)
            .border_style(if state.compose_active {
                pal.border_focused
            } else {
                pal.border
            }),
    );
    f.render_widget(compose, rows[1]);

    let mut lines = Vec::new();
    for entry in content::GUESTBOOK.iter() {
        lines.push(Line::from(vec![
            Span::styled(entry.name, pal.heading),
            Span::styled(format!("  {}", entry.display_time()), pal.dim),
        ]));
        lines.push(Line::from(Span::styled(entry.message, pal.dim)));
        lines.push(Line::from(Span::styled("like · reply", pal.border)));
        lines.push(Line::from(""));
    }
    let comments = Paragraph::new(lines).wrap(Wrap { trim: true }).block(
        Block::default()
            .borders(Borders::TOP)
            .border_style(pal.border),
    );
    f.render_widget(comments, rows[2]);
}

fn render_archives(f: &mut Frame, area: Rect, pal: &Palette) {
    let mut lines = page_heading("archives", "everything, by month", pal);
    lines.push(Line::from(""));

    for month in content::archive(&content::BLOG_POSTS) {
        lines.push(Line::from(Span::styled(month.label(), pal.accent)));
        for post in &month.posts {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:>12}  ", post.display_date()), pal.dim),
                Span::styled(post.title, pal.heading),
            ]));
        }
        lines.push(Line::from(""));
    }

    f.render_widget(Paragraph::new(lines).wrap(Wrap { trim: false }), area);
}

pub fn render_status_bar(f: &mut Frame, area: Rect, state: &AppState, pal: &Palette) {
    let key_hints = if state.search_active {
        "Esc: close search | type to filter"
    } else if state.compose_active {
        "Esc: stop editing | Enter: post"
    } else {
        match state.page {
            Page::Home => "Tab: page | j/k: move | Enter: open | v: count | t: theme | r: refresh | q: quit",
            Page::Blog => "Tab: page | j/k: tag | Enter: toggle tag | /: search | q: quit",
            Page::Guestbook => "Tab: page | i: write | q: quit",
            Page::Archives => "Tab: page | q: quit",
        }
    };

    let activity = match &state.activity {
        ActivityState::Loading => "activity: loading".to_string(),
        ActivityState::Ready(outcome) if outcome.is_fallback() => "activity: offline".to_string(),
        ActivityState::Ready(_) => "activity: live".to_string(),
    };
    let refresh_info = state
        .last_refresh
        .as_ref()
        .map(|t| format!(" | {}", relative_time(t, &chrono::Utc::now())))
        .unwrap_or_default();
    let right_text = format!("{}{}", activity, refresh_info);

    let total_width = area.width as usize;
    let padding = total_width.saturating_sub(key_hints.chars().count() + right_text.len());

    let line = Line::from(vec![
        Span::styled(key_hints, pal.status_bar),
        Span::styled(" ".repeat(padding), pal.status_bar),
        Span::styled(right_text, pal.status_bar),
    ]);

    f.render_widget(Paragraph::new(line).style(pal.status_bar), area);
}

pub fn render_notice_modal(f: &mut Frame, area: Rect, state: &AppState, pal: &Palette) {
    let Some(ref msg) = state.notice else {
        return;
    };

    let modal_width = (area.width / 2).max(40).min(area.width.saturating_sub(4));
    let modal_height = 5u16;
    let x = (area.width.saturating_sub(modal_width)) / 2;
    let y = (area.height.saturating_sub(modal_height)) / 2;

    let modal_area = Rect {
        x,
        y,
        width: modal_width,
        height: modal_height,
    };

    f.render_widget(Clear, modal_area);

    let block = Block::default()
        .title(" Notice ")
        .borders(Borders::ALL)
        .border_style(pal.notice)
        .style(pal.base);

    let text = vec![
        Line::from(Span::styled(msg.as_str(), pal.notice)),
        Line::from(""),
        Line::from(Span::styled("Press Esc to dismiss", pal.dim)),
    ];

    f.render_widget(Paragraph::new(text).block(block), modal_area);
}
