pub mod app;
pub mod content;
pub mod github;
pub mod store;
pub mod ui;
pub mod util;
