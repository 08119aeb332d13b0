use std::fmt;
use std::str::FromStr;

use anyhow::{Result, bail};
use tracing::debug;

use super::KvStore;

pub const VISITOR_COUNT: &str = "visitorCount";
pub const THEME: &str = "theme";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }

    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Theme {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "dark" => Ok(Theme::Dark),
            "light" => Ok(Theme::Light),
            other => bail!("Unknown theme: {other}"),
        }
    }
}

/// Preferences as read when the app starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preferences {
    pub visitor_count: u64,
    pub theme: Theme,
}

/// A single changed preference to write back.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    VisitorCount(u64),
    Theme(Theme),
}

/// Read preferences. A first visit (no usable count stored) records the
/// visitor as number 1.
pub fn mount(store: &mut dyn KvStore) -> Result<Preferences> {
    let stored = store
        .get(VISITOR_COUNT)
        .and_then(|v| v.trim().parse::<u64>().ok());

    let visitor_count = match stored {
        Some(count) => count,
        None => {
            save(store, Preference::VisitorCount(1))?;
            1
        }
    };

    let theme = store
        .get(THEME)
        .and_then(|v| v.parse().ok())
        .unwrap_or_default();

    debug!(visitor_count, theme = %theme, "Preferences mounted");
    Ok(Preferences {
        visitor_count,
        theme,
    })
}

pub fn save(store: &mut dyn KvStore, pref: Preference) -> Result<()> {
    match pref {
        Preference::VisitorCount(count) => store.set(VISITOR_COUNT, &count.to_string()),
        Preference::Theme(theme) => store.set(THEME, theme.as_str()),
    }
}
