use std::io;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyModifiers},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{Terminal, backend::CrosstermBackend};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tracing::{debug, error};

use crate::app::actions::{Action, SideEffect};
use crate::app::state::{AppState, Page};
use crate::app::update::update;
use crate::app::view;
use crate::github::{GithubClient, fetch_latest};
use crate::store::{KvStore, prefs};
use crate::util::config::AppConfig;

pub async fn run(config: AppConfig, client: GithubClient, store: Box<dyn KvStore>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_loop(&mut terminal, config, client, store).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    result
}

/// Everything side effects need, owned by the UI task.
struct Effects {
    client: GithubClient,
    username: String,
    store: Box<dyn KvStore>,
    action_tx: mpsc::UnboundedSender<Action>,
    in_flight: Option<JoinHandle<()>>,
}

impl Effects {
    fn apply(&mut self, effect: SideEffect) {
        match effect {
            SideEffect::FetchActivity => {
                if let Some(previous) = self.in_flight.take() {
                    previous.abort();
                }

                let client = self.client.clone();
                let username = self.username.clone();
                let tx = self.action_tx.clone();

                self.in_flight = Some(tokio::spawn(async move {
                    debug!(user = %username, "Fetching latest activity");
                    let outcome = fetch_latest(&client, &username, chrono::Utc::now()).await;
                    let _ = tx.send(Action::ActivityLoaded(outcome));
                }));
            }
            SideEffect::OpenUrl(url) => {
                tokio::task::spawn_blocking(move || {
                    if let Err(e) = crate::util::browser::open_url(&url) {
                        error!(error = %e, "Failed to open URL");
                    }
                });
            }
            SideEffect::Persist(pref) => {
                if let Err(e) = prefs::save(self.store.as_mut(), pref) {
                    error!(error = %e, ?pref, "Failed to persist preference");
                }
            }
        }
    }

    fn apply_all(&mut self, effects: Vec<SideEffect>) {
        for effect in effects {
            self.apply(effect);
        }
    }

    fn shutdown(&mut self) {
        if let Some(task) = self.in_flight.take() {
            task.abort();
        }
    }
}

async fn run_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    config: AppConfig,
    client: GithubClient,
    mut store: Box<dyn KvStore>,
) -> Result<()> {
    let prefs = prefs::mount(store.as_mut())?;
    let mut state = AppState::new(prefs);

    let (action_tx, mut action_rx) = mpsc::unbounded_channel::<Action>();
    let mut effects = Effects {
        client,
        username: config.github.username.clone(),
        store,
        action_tx,
        in_flight: None,
    };

    // Initial activity fetch
    effects.apply(SideEffect::FetchActivity);

    let mut event_stream = crossterm::event::EventStream::new();

    let mut refresh_timer = tokio::time::interval(tokio::time::Duration::from_secs(
        config.activity.refresh_interval_secs.max(1),
    ));
    // First tick fires immediately (already handled by initial fetch above)
    refresh_timer.tick().await;

    let mut tick_timer = tokio::time::interval(tokio::time::Duration::from_secs(1));

    loop {
        terminal.draw(|f| view::render(f, &state))?;

        if state.should_quit {
            break;
        }

        tokio::select! {
            // Terminal events
            maybe_event = event_stream.next() => {
                if let Some(Ok(event)) = maybe_event
                    && let Some(action) = map_event_to_action(&event, &state) {
                        effects.apply_all(update(&mut state, action));
                    }
            }
            // Actions from background tasks
            Some(action) = action_rx.recv() => {
                effects.apply_all(update(&mut state, action));
            }
            // Periodic activity refresh
            _ = refresh_timer.tick() => {
                effects.apply_all(update(&mut state, Action::Refresh));
            }
            // Keep relative times current
            _ = tick_timer.tick() => {
                effects.apply_all(update(&mut state, Action::Tick));
            }
        }
    }

    effects.shutdown();
    Ok(())
}

fn map_event_to_action(event: &Event, state: &AppState) -> Option<Action> {
    let Event::Key(KeyEvent {
        code,
        modifiers,
        kind: event::KeyEventKind::Press,
        ..
    }) = event
    else {
        return None;
    };

    if modifiers.contains(KeyModifiers::CONTROL) && *code == KeyCode::Char('c') {
        return Some(Action::Quit);
    }

    // Notice modal first
    if state.notice.is_some() {
        return match code {
            KeyCode::Esc | KeyCode::Enter => Some(Action::DismissNotice),
            _ => None,
        };
    }

    if state.search_active {
        return match code {
            KeyCode::Esc => Some(Action::Back),
            KeyCode::Backspace => Some(Action::SearchBackspace),
            KeyCode::Char(c) => Some(Action::SearchInput(*c)),
            KeyCode::Enter => Some(Action::ToggleSearch),
            _ => None,
        };
    }

    if state.compose_active {
        return match code {
            KeyCode::Esc => Some(Action::ToggleCompose),
            KeyCode::Backspace => Some(Action::ComposeBackspace),
            KeyCode::Enter => Some(Action::SubmitComment),
            KeyCode::Char(c) => Some(Action::ComposeInput(*c)),
            _ => None,
        };
    }

    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => Some(Action::NextPage),
        KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => Some(Action::PrevPage),
        KeyCode::Char(c @ '1'..='4') => {
            let idx = (*c as usize) - ('1' as usize);
            Page::ALL.get(idx).copied().map(Action::GoTo)
        }
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Select),
        KeyCode::Esc => Some(Action::Back),
        KeyCode::Char('t') => Some(Action::ToggleTheme),
        KeyCode::Char('v') => Some(Action::CountVisit),
        KeyCode::Char('r') => Some(Action::Refresh),
        KeyCode::Char('o') => Some(Action::OpenInBrowser),
        KeyCode::Char('/') if state.page == Page::Blog => Some(Action::ToggleSearch),
        KeyCode::Char('i') if state.page == Page::Guestbook => Some(Action::ToggleCompose),
        _ => None,
    }
}
