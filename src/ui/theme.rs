use ratatui::style::{Color, Modifier, Style};

use crate::store::Theme;

pub struct Palette {
    pub base: Style,
    pub heading: Style,
    pub accent: Style,
    pub dim: Style,
    pub highlight: Style,
    pub border: Style,
    pub border_focused: Style,
    pub tag: Style,
    pub tag_selected: Style,
    pub status_bar: Style,
    pub notice: Style,
}

pub static DARK: Palette = Palette {
    base: Style::new().fg(Color::White).bg(Color::Black),
    heading: Style::new().fg(Color::White).add_modifier(Modifier::BOLD),
    accent: Style::new().fg(Color::Cyan),
    dim: Style::new().fg(Color::DarkGray),
    highlight: Style::new()
        .fg(Color::Black)
        .bg(Color::Cyan)
        .add_modifier(Modifier::BOLD),
    border: Style::new().fg(Color::DarkGray),
    border_focused: Style::new().fg(Color::Cyan),
    tag: Style::new().fg(Color::Gray),
    tag_selected: Style::new()
        .fg(Color::Black)
        .bg(Color::White)
        .add_modifier(Modifier::BOLD),
    status_bar: Style::new().fg(Color::White).bg(Color::DarkGray),
    notice: Style::new().fg(Color::Yellow).add_modifier(Modifier::BOLD),
};

pub static LIGHT: Palette = Palette {
    base: Style::new().fg(Color::Black).bg(Color::White),
    heading: Style::new().fg(Color::Black).add_modifier(Modifier::BOLD),
    accent: Style::new().fg(Color::Blue),
    dim: Style::new().fg(Color::Gray),
    highlight: Style::new()
        .fg(Color::White)
        .bg(Color::Blue)
        .add_modifier(Modifier::BOLD),
    border: Style::new().fg(Color::Gray),
    border_focused: Style::new().fg(Color::Blue),
    tag: Style::new().fg(Color::DarkGray),
    tag_selected: Style::new()
        .fg(Color::White)
        .bg(Color::Black)
        .add_modifier(Modifier::BOLD),
    status_bar: Style::new().fg(Color::Black).bg(Color::Gray),
    notice: Style::new().fg(Color::Red).add_modifier(Modifier::BOLD),
};

pub fn palette(theme: Theme) -> &'static Palette {
    match theme {
        Theme::Dark => &DARK,
        Theme::Light => &LIGHT,
    }
}
