use crate::app::actions::{Action, SideEffect};
use crate::app::state::{ActivityState, AppState, HOME_ITEMS, HomeItem, Page};
use crate::content;
use crate::store::Preference;

pub const SIGN_IN_NOTICE: &str = "sign in to comment (not available)";

pub fn update(state: &mut AppState, action: Action) -> Vec<SideEffect> {
    match action {
        Action::Quit => {
            state.should_quit = true;
            vec![]
        }
        Action::NextPage => {
            go_to(state, state.page.next());
            vec![]
        }
        Action::PrevPage => {
            go_to(state, state.page.prev());
            vec![]
        }
        Action::GoTo(page) => {
            go_to(state, page);
            vec![]
        }
        Action::MoveUp => {
            match state.page {
                Page::Home => state.home_cursor = state.home_cursor.saturating_sub(1),
                Page::Blog => state.tag_cursor = state.tag_cursor.saturating_sub(1),
                Page::Guestbook | Page::Archives => {}
            }
            vec![]
        }
        Action::MoveDown => {
            match state.page {
                Page::Home => {
                    if state.home_cursor + 1 < HOME_ITEMS.len() {
                        state.home_cursor += 1;
                    }
                }
                Page::Blog => {
                    if state.tag_cursor + 1 < content::BLOG_TAGS.len() {
                        state.tag_cursor += 1;
                    }
                }
                Page::Guestbook | Page::Archives => {}
            }
            vec![]
        }
        Action::Select => match state.page {
            Page::Home => select_home_item(state),
            Page::Blog => {
                if let Some(tag) = content::BLOG_TAGS.get(state.tag_cursor) {
                    toggle_tag(state, *tag);
                }
                vec![]
            }
            Page::Guestbook => {
                state.compose_active = true;
                vec![]
            }
            Page::Archives => vec![],
        },
        Action::Back => {
            if state.search_active {
                state.search_active = false;
                state.search_query.clear();
            } else if state.compose_active {
                state.compose_active = false;
            } else if state.notice.is_some() {
                state.notice = None;
            } else if state.page != Page::Home {
                go_to(state, Page::Home);
            }
            vec![]
        }
        Action::ToggleTheme => {
            state.theme = state.theme.toggled();
            vec![SideEffect::Persist(Preference::Theme(state.theme))]
        }
        Action::CountVisit => count_visit(state),
        Action::ToggleSearch => {
            // The query survives closing the input; Back clears it.
            state.search_active = !state.search_active;
            vec![]
        }
        Action::SearchInput(ch) => {
            if state.search_active {
                state.search_query.push(ch);
            }
            vec![]
        }
        Action::SearchBackspace => {
            if state.search_active {
                state.search_query.pop();
            }
            vec![]
        }
        Action::ToggleCompose => {
            state.compose_active = !state.compose_active;
            vec![]
        }
        Action::ComposeInput(ch) => {
            if state.compose_active {
                state.draft.push(ch);
            }
            vec![]
        }
        Action::ComposeBackspace => {
            if state.compose_active {
                state.draft.pop();
            }
            vec![]
        }
        Action::SubmitComment => {
            // Posting requires an account; the draft stays where it is.
            state.compose_active = false;
            state.notice = Some(SIGN_IN_NOTICE.to_string());
            vec![]
        }
        Action::Refresh => {
            state.activity = ActivityState::Loading;
            vec![SideEffect::FetchActivity]
        }
        Action::OpenInBrowser => open_selected(state),
        Action::ActivityLoaded(outcome) => {
            state.activity = ActivityState::Ready(outcome);
            state.last_refresh = Some(chrono::Utc::now());
            vec![]
        }
        Action::DismissNotice => {
            state.notice = None;
            vec![]
        }
        Action::Tick => vec![],
    }
}

fn go_to(state: &mut AppState, page: Page) {
    if state.page == page {
        return;
    }
    state.page = page;
    state.search_active = false;
    state.compose_active = false;
}

fn count_visit(state: &mut AppState) -> Vec<SideEffect> {
    // Saturates at u64::MAX; the stored count is user-editable.
    state.visitor_count = state.visitor_count.saturating_add(1);
    vec![SideEffect::Persist(Preference::VisitorCount(
        state.visitor_count,
    ))]
}

fn toggle_tag(state: &mut AppState, tag: &'static str) {
    if let Some(pos) = state.selected_tags.iter().position(|t| *t == tag) {
        state.selected_tags.remove(pos);
    } else {
        state.selected_tags.push(tag);
    }
}

fn select_home_item(state: &mut AppState) -> Vec<SideEffect> {
    match state.home_item() {
        HomeItem::ReadBlog | HomeItem::LatestPost => {
            go_to(state, Page::Blog);
            vec![]
        }
        HomeItem::CountVisit => count_visit(state),
        HomeItem::Link(_) | HomeItem::Scrobbled | HomeItem::LastCommit => open_selected(state),
    }
}

fn open_selected(state: &mut AppState) -> Vec<SideEffect> {
    if state.page != Page::Home {
        return vec![];
    }
    match state.selected_url() {
        Some(url) => vec![SideEffect::OpenUrl(url)],
        None => {
            if let HomeItem::Link(i) = state.home_item()
                && let Some(link) = content::SOCIAL_LINKS.get(i)
            {
                state.notice = Some(format!("No public link for {}", link.label));
            }
            vec![]
        }
    }
}
