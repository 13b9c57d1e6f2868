use std::{fmt, io, sync::mpsc};

use crate::{
    service::{gameapi::GameApi, pipeline::run_pipeline},
    state::{Action, Effect, QueryState},
};

pub mod async_lookup;
pub mod projection;
pub mod repl;
pub mod views;

pub use async_lookup::LookupRunner;

/// Looks up `name` on the calling thread and returns the rendered result
/// without any styling.
pub fn run_once(api: &dyn GameApi, name: &str) -> String {
    let mut state = QueryState::new();
    state.apply(Action::SetInput(name.to_string()));

    if let Some(Effect::StartLookup { generation, query }) = state.apply(Action::Submit) {
        let (tx, rx) = mpsc::channel();
        run_pipeline(api, generation, &query, &tx);
        drop(tx);

        for message in rx {
            state.apply(Action::Pipeline(message));
        }
    }

    let projection = projection::project(&state);
    views::plain_text(&views::projection_lines(&projection))
}

#[derive(Debug)]
pub enum ReplError {
    Console(io::Error),
    Lookup(io::Error),
}

impl fmt::Display for ReplError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ReplError::Console(err) => write!(f, "Console error: {}", err),
            ReplError::Lookup(err) => write!(f, "Could not start lookup thread: {}", err),
        }
    }
}

impl From<io::Error> for ReplError {
    fn from(error: io::Error) -> Self {
        ReplError::Console(error)
    }
}

#[macro_export]
macro_rules! styled_span {
    // More specific patterns FIRST

    // Expression with color and bold (expr; Bold Color::X)
    ($expr:expr; Bold $color:expr) => {
        ratatui::text::Span::styled(
            format!("{}", $expr),
            ratatui::style::Style::default()
                .fg($color)
                .add_modifier(ratatui::style::Modifier::BOLD)
        )
    };

    // Expression with color (expr; Color::X)
    ($expr:expr; $color:expr) => {
        ratatui::text::Span::styled(
            format!("{}", $expr),
            ratatui::style::Style::default().fg($color)
        )
    };

    // Formatted text with color and bold (text, args...; Bold COLOR)
    ($text:literal, $($arg:expr),+; Bold $color:ident) => {
        ratatui::text::Span::styled(
            format!($text, $($arg),+),
            ratatui::style::Style::default()
                .fg($color)
                .add_modifier(ratatui::style::Modifier::BOLD)
        )
    };

    // Formatted text with color (text, args...; Color::X)
    ($text:literal, $($arg:expr),+; $color:expr) => {
        ratatui::text::Span::styled(
            format!($text, $($arg),+),
            ratatui::style::Style::default().fg($color)
        )
    };

    // Formatted text (text, args...)
    ($text:literal, $($arg:expr),+) => {
        ratatui::text::Span::raw(format!($text, $($arg),+))
    };

    // Plain text literal (LAST - most general)
    ($text:literal) => {
        ratatui::text::Span::raw($text)
    };
}

#[macro_export]
macro_rules! styled_line {
    // Empty line
    () => {
        ratatui::text::Line::raw("")
    };

    ($($args:tt)+) => {
        ratatui::text::Line::from($crate::styled_span!($($args)+))
    };
}
