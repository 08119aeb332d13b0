use termfolio::app::actions::{Action, SideEffect};
use termfolio::app::state::{ActivityState, AppState, HOME_ITEMS, HomeItem, Page};
use termfolio::app::update::{SIGN_IN_NOTICE, update};
use termfolio::content;
use termfolio::github::activity::{ActivityOutcome, LookupError, fallback_record};
use termfolio::github::ActivityRecord;
use termfolio::store::{Preference, Preferences, Theme};

fn make_state() -> AppState {
    AppState::new(Preferences {
        visitor_count: 1,
        theme: Theme::Dark,
    })
}

fn live_record() -> ActivityRecord {
    ActivityRecord {
        repository_name: "b".into(),
        message: "fix bug".into(),
        relative_time: "1h ago".into(),
        url: "https://github.com/a/b".into(),
    }
}

fn focus(state: &mut AppState, item: HomeItem) {
    state.home_cursor = HOME_ITEMS.iter().position(|i| *i == item).unwrap();
}

// --- Initial state ---

#[test]
fn test_initial_state_defaults() {
    let state = make_state();
    assert_eq!(state.page, Page::Home);
    assert_eq!(state.home_cursor, 0);
    assert_eq!(state.visitor_count, 1);
    assert_eq!(state.theme, Theme::Dark);
    assert!(matches!(state.activity, ActivityState::Loading));
    assert!(state.activity.record().is_none());
    assert!(state.last_refresh.is_none());
    assert!(!state.should_quit);
    assert!(!state.search_active);
    assert!(state.selected_tags.is_empty());
    assert!(state.notice.is_none());
}

// --- Pages ---

#[test]
fn test_next_page_cycles() {
    let mut state = make_state();
    let mut seen = vec![state.page];
    for _ in 0..4 {
        update(&mut state, Action::NextPage);
        seen.push(state.page);
    }
    assert_eq!(
        seen,
        vec![Page::Home, Page::Blog, Page::Guestbook, Page::Archives, Page::Home]
    );
}

#[test]
fn test_prev_page_wraps() {
    let mut state = make_state();
    update(&mut state, Action::PrevPage);
    assert_eq!(state.page, Page::Archives);
}

#[test]
fn test_go_to_page() {
    let mut state = make_state();
    update(&mut state, Action::GoTo(Page::Guestbook));
    assert_eq!(state.page, Page::Guestbook);
}

#[test]
fn test_back_returns_home() {
    let mut state = make_state();
    update(&mut state, Action::GoTo(Page::Archives));
    update(&mut state, Action::Back);
    assert_eq!(state.page, Page::Home);
}

#[test]
fn test_leaving_page_closes_inputs() {
    let mut state = make_state();
    update(&mut state, Action::GoTo(Page::Blog));
    update(&mut state, Action::ToggleSearch);
    assert!(state.search_active);
    update(&mut state, Action::NextPage);
    assert!(!state.search_active);
}

// --- Home cursor ---

#[test]
fn test_home_cursor_bounds() {
    let mut state = make_state();
    update(&mut state, Action::MoveUp);
    assert_eq!(state.home_cursor, 0);

    for _ in 0..20 {
        update(&mut state, Action::MoveDown);
    }
    assert_eq!(state.home_cursor, HOME_ITEMS.len() - 1);
    assert_eq!(state.home_item(), HomeItem::CountVisit);
}

#[test]
fn test_select_social_link_opens_url() {
    let mut state = make_state();
    focus(&mut state, HomeItem::Link(1));
    let effects = update(&mut state, Action::Select);
    assert_eq!(
        effects,
        vec![SideEffect::OpenUrl("mailto:hi@heysomting.by".into())]
    );
}

#[test]
fn test_link_without_url_shows_notice() {
    let mut state = make_state();
    focus(&mut state, HomeItem::Link(2));
    let effects = update(&mut state, Action::OpenInBrowser);
    assert!(effects.is_empty());
    assert_eq!(state.notice.as_deref(), Some("No public link for discord"));

    update(&mut state, Action::DismissNotice);
    assert!(state.notice.is_none());
}

#[test]
fn test_select_read_blog_navigates() {
    let mut state = make_state();
    focus(&mut state, HomeItem::ReadBlog);
    let effects = update(&mut state, Action::Select);
    assert!(effects.is_empty());
    assert_eq!(state.page, Page::Blog);
}

#[test]
fn test_select_count_visit() {
    let mut state = make_state();
    focus(&mut state, HomeItem::CountVisit);
    let effects = update(&mut state, Action::Select);
    assert_eq!(state.visitor_count, 2);
    assert_eq!(
        effects,
        vec![SideEffect::Persist(Preference::VisitorCount(2))]
    );
}

#[test]
fn test_last_commit_card_opens_activity_url_once_loaded() {
    let mut state = make_state();
    focus(&mut state, HomeItem::LastCommit);
    assert!(update(&mut state, Action::OpenInBrowser).is_empty());

    update(
        &mut state,
        Action::ActivityLoaded(ActivityOutcome::Live(live_record())),
    );
    let effects = update(&mut state, Action::OpenInBrowser);
    assert_eq!(
        effects,
        vec![SideEffect::OpenUrl("https://github.com/a/b".into())]
    );
}

#[test]
fn test_open_does_nothing_off_home() {
    let mut state = make_state();
    update(&mut state, Action::GoTo(Page::Archives));
    assert!(update(&mut state, Action::OpenInBrowser).is_empty());
}

// --- Preferences ---

#[test]
fn test_count_visit_persists() {
    let mut state = make_state();
    let effects = update(&mut state, Action::CountVisit);
    assert_eq!(state.visitor_count, 2);
    assert_eq!(
        effects,
        vec![SideEffect::Persist(Preference::VisitorCount(2))]
    );
}

#[test]
fn test_count_visit_saturates() {
    let mut state = AppState::new(Preferences {
        visitor_count: u64::MAX,
        theme: Theme::Dark,
    });
    focus(&mut state, HomeItem::CountVisit);
    let effects = update(&mut state, Action::Select);
    assert_eq!(state.visitor_count, u64::MAX);
    assert_eq!(
        effects,
        vec![SideEffect::Persist(Preference::VisitorCount(u64::MAX))]
    );
}

#[test]
fn test_toggle_theme_persists() {
    let mut state = make_state();
    let effects = update(&mut state, Action::ToggleTheme);
    assert_eq!(state.theme, Theme::Light);
    assert_eq!(
        effects,
        vec![SideEffect::Persist(Preference::Theme(Theme::Light))]
    );

    update(&mut state, Action::ToggleTheme);
    assert_eq!(state.theme, Theme::Dark);
}

// --- Activity ---

#[test]
fn test_refresh_fetches_activity() {
    let mut state = make_state();
    update(
        &mut state,
        Action::ActivityLoaded(ActivityOutcome::Live(live_record())),
    );
    let effects = update(&mut state, Action::Refresh);
    assert_eq!(effects, vec![SideEffect::FetchActivity]);
    assert!(matches!(state.activity, ActivityState::Loading));
}

#[test]
fn test_activity_loaded_live() {
    let mut state = make_state();
    update(
        &mut state,
        Action::ActivityLoaded(ActivityOutcome::Live(live_record())),
    );
    assert_eq!(state.activity.record(), Some(&live_record()));
    assert!(state.last_refresh.is_some());
}

#[test]
fn test_activity_loaded_fallback() {
    let mut state = make_state();
    update(
        &mut state,
        Action::ActivityLoaded(ActivityOutcome::Fallback {
            record: fallback_record(),
            reason: LookupError::NoPushEvent(0),
        }),
    );
    match &state.activity {
        ActivityState::Ready(outcome) => {
            assert!(outcome.is_fallback());
            assert_eq!(outcome.record().relative_time, "15d ago");
        }
        ActivityState::Loading => panic!("activity should be ready"),
    }
}

// --- Blog ---

#[test]
fn test_all_posts_visible_by_default() {
    let state = make_state();
    assert_eq!(state.visible_posts().len(), content::BLOG_POSTS.len());
}

#[test]
fn test_search_filters_posts() {
    let mut state = make_state();
    update(&mut state, Action::GoTo(Page::Blog));
    update(&mut state, Action::ToggleSearch);
    for ch in "SECURE".chars() {
        update(&mut state, Action::SearchInput(ch));
    }

    let titles: Vec<_> = state.visible_posts().iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["Building Secure Web Applications"]);
}

#[test]
fn test_search_input_ignored_when_inactive() {
    let mut state = make_state();
    update(&mut state, Action::SearchInput('x'));
    assert!(state.search_query.is_empty());
}

#[test]
fn test_search_backspace_and_clear() {
    let mut state = make_state();
    update(&mut state, Action::ToggleSearch);
    update(&mut state, Action::SearchInput('a'));
    update(&mut state, Action::SearchInput('b'));
    update(&mut state, Action::SearchBackspace);
    assert_eq!(state.search_query, "a");

    // Closing the input keeps the filter
    update(&mut state, Action::ToggleSearch);
    assert!(!state.search_active);
    assert_eq!(state.search_query, "a");

    // Back from an open input clears it
    update(&mut state, Action::ToggleSearch);
    update(&mut state, Action::Back);
    assert!(!state.search_active);
    assert!(state.search_query.is_empty());
}

#[test]
fn test_search_without_matches() {
    let mut state = make_state();
    update(&mut state, Action::ToggleSearch);
    for ch in "kubernetes".chars() {
        update(&mut state, Action::SearchInput(ch));
    }
    assert!(state.visible_posts().is_empty());
}

#[test]
fn test_tag_toggle_filters_posts() {
    let mut state = make_state();
    update(&mut state, Action::GoTo(Page::Blog));

    // Cursor to "Beginner"
    let beginner = content::BLOG_TAGS.iter().position(|t| *t == "Beginner").unwrap();
    for _ in 0..beginner {
        update(&mut state, Action::MoveDown);
    }
    update(&mut state, Action::Select);

    assert_eq!(state.selected_tags, vec!["Beginner"]);
    let titles: Vec<_> = state.visible_posts().iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["Getting Started with Cybersecurity"]);

    update(&mut state, Action::Select);
    assert!(state.selected_tags.is_empty());
    assert_eq!(state.visible_posts().len(), 2);
}

#[test]
fn test_tags_combine_with_and() {
    let mut state = make_state();
    state.selected_tags = vec!["Security", "Web Dev"];
    let titles: Vec<_> = state.visible_posts().iter().map(|p| p.title).collect();
    assert_eq!(titles, vec!["Building Secure Web Applications"]);

    state.selected_tags = vec!["Advanced"];
    assert!(state.visible_posts().is_empty());
}

#[test]
fn test_tag_cursor_bounds() {
    let mut state = make_state();
    update(&mut state, Action::GoTo(Page::Blog));
    update(&mut state, Action::MoveUp);
    assert_eq!(state.tag_cursor, 0);
    for _ in 0..20 {
        update(&mut state, Action::MoveDown);
    }
    assert_eq!(state.tag_cursor, content::BLOG_TAGS.len() - 1);
}

// --- Guestbook ---

#[test]
fn test_compose_and_submit_is_inert() {
    let mut state = make_state();
    update(&mut state, Action::GoTo(Page::Guestbook));
    update(&mut state, Action::ToggleCompose);
    for ch in "hi!".chars() {
        update(&mut state, Action::ComposeInput(ch));
    }
    update(&mut state, Action::ComposeBackspace);
    assert_eq!(state.draft, "hi");

    let effects = update(&mut state, Action::SubmitComment);
    assert!(effects.is_empty());
    assert!(!state.compose_active);
    assert_eq!(state.draft, "hi");
    assert_eq!(state.notice.as_deref(), Some(SIGN_IN_NOTICE));
    assert_eq!(SIGN_IN_NOTICE, "sign in to comment (not available)");
    assert_eq!(content::GUESTBOOK.len(), 3);
}

#[test]
fn test_compose_input_ignored_when_inactive() {
    let mut state = make_state();
    update(&mut state, Action::ComposeInput('x'));
    assert!(state.draft.is_empty());
}

#[test]
fn test_back_closes_compose_before_leaving_page() {
    let mut state = make_state();
    update(&mut state, Action::GoTo(Page::Guestbook));
    update(&mut state, Action::Select);
    assert!(state.compose_active);

    update(&mut state, Action::Back);
    assert!(!state.compose_active);
    assert_eq!(state.page, Page::Guestbook);

    update(&mut state, Action::Back);
    assert_eq!(state.page, Page::Home);
}

// --- Misc ---

#[test]
fn test_quit() {
    let mut state = make_state();
    update(&mut state, Action::Quit);
    assert!(state.should_quit);
}

#[test]
fn test_tick_is_noop() {
    let mut state = make_state();
    assert!(update(&mut state, Action::Tick).is_empty());
    assert_eq!(state.page, Page::Home);
}
