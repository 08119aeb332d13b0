use crate::app::state::Page;
use crate::github::ActivityOutcome;
use crate::store::Preference;

#[derive(Debug)]
pub enum Action {
    NextPage,
    PrevPage,
    GoTo(Page),
    MoveUp,
    MoveDown,
    Select,
    Back,
    ToggleTheme,
    CountVisit,
    ToggleSearch,
    SearchInput(char),
    SearchBackspace,
    ToggleCompose,
    ComposeInput(char),
    ComposeBackspace,
    SubmitComment,
    Refresh,
    OpenInBrowser,
    ActivityLoaded(ActivityOutcome),
    DismissNotice,
    Quit,
    Tick,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SideEffect {
    FetchActivity,
    OpenUrl(String),
    Persist(Preference),
}
