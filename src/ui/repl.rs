use std::{io::stdout, time::Duration};

use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Padding, Paragraph, Wrap},
    Frame, Terminal,
};
use tracing::info;

use crate::{
    state::{Action, QueryState},
    ui::{
        projection::project,
        views::{projection_lines, GOLD},
        LookupRunner, ReplError,
    },
};

const TICK: Duration = Duration::from_millis(100);

struct App {
    state: QueryState,
    runner: LookupRunner,
    should_quit: bool,
    scroll_offset: u16,
}

impl App {
    fn new(runner: LookupRunner) -> Self {
        Self {
            state: QueryState::new(),
            runner,
            should_quit: false,
            scroll_offset: 0,
        }
    }

    fn dispatch(&mut self, action: Action) -> Result<(), ReplError> {
        if let Some(effect) = self.state.apply(action) {
            self.scroll_offset = 0;
            self.runner.start(effect).map_err(ReplError::Lookup)?;
        }
        Ok(())
    }

    fn poll_lookups(&mut self) {
        for message in self.runner.try_drain() {
            self.state.apply(Action::Pipeline(message));
        }
    }

    fn handle_key(&mut self, key: KeyEvent, view_height: u16) -> Result<(), ReplError> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);
        match key.code {
            KeyCode::Esc => self.should_quit = true,
            KeyCode::Char('c') if ctrl => self.should_quit = true,
            KeyCode::Char('u') if ctrl => self.dispatch(Action::ClearInput)?,
            KeyCode::Char(c) if !ctrl => self.dispatch(Action::InsertChar(c))?,
            KeyCode::Backspace => self.dispatch(Action::DeleteChar)?,
            KeyCode::Enter => self.dispatch(Action::Submit)?,
            KeyCode::Up => self.scroll_offset = self.scroll_offset.saturating_sub(1),
            KeyCode::Down => self.scroll_offset = self.scroll_offset.saturating_add(1),
            KeyCode::PageUp => self.scroll_offset = self.scroll_offset.saturating_sub(view_height / 2),
            KeyCode::PageDown => self.scroll_offset = self.scroll_offset.saturating_add(view_height / 2),
            _ => {}
        }
        Ok(())
    }

    fn draw(&self, f: &mut Frame) -> u16 {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(0),
                Constraint::Length(1),
            ])
            .split(f.size());

        self.draw_input(f, chunks[0]);

        let results = Paragraph::new(projection_lines(&project(&self.state)))
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .padding(Padding::horizontal(1))
                    .title("Results")
                    .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD))
                    .border_style(Style::default().fg(GOLD)),
            )
            .wrap(Wrap { trim: false })
            .scroll((self.scroll_offset, 0));
        f.render_widget(results, chunks[1]);

        let info = Paragraph::new("Type a summoner name, Enter to search, ↑/↓ to scroll, Esc to quit.")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Right);
        f.render_widget(info, chunks[2]);

        chunks[1].height
    }

    fn draw_input(&self, f: &mut Frame, area: Rect) {
        let input = Paragraph::new(format!(" {}", self.state.raw_input())).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(GOLD))
                .title("Summoner Lookup - Player")
                .title_style(Style::default().fg(GOLD).add_modifier(Modifier::BOLD)),
        );
        f.render_widget(input, area);

        f.set_cursor(cursor_column(area, self.state.raw_input()), area.y.saturating_add(1));
    }

    fn run(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<(), ReplError> {
        let mut view_height = 0;
        while !self.should_quit {
            self.poll_lookups();

            terminal.draw(|f| view_height = self.draw(f))?;

            if event::poll(TICK)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    self.handle_key(key, view_height)?;
                }
            }
        }
        Ok(())
    }
}

/// Column just past the typed text, clamped inside the input box border.
fn cursor_column(area: Rect, input: &str) -> u16 {
    let typed = u16::try_from(input.chars().count()).unwrap_or(u16::MAX);
    area.x
        .saturating_add(2)
        .saturating_add(typed)
        .min(area.right().saturating_sub(2))
}

pub fn run(runner: LookupRunner) -> Result<(), ReplError> {
    info!("Starting terminal UI");

    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(runner);
    let result = app.run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_follows_typed_text() {
        let area = Rect::new(0, 0, 40, 3);
        assert_eq!(cursor_column(area, ""), 2);
        assert_eq!(cursor_column(area, "Faker"), 7);
    }

    #[test]
    fn cursor_is_clamped_for_long_input() {
        let area = Rect::new(10, 0, 40, 3);
        assert_eq!(cursor_column(area, &"x".repeat(70_000)), 48);

        let edge = Rect::new(u16::MAX - 5, 0, 5, 3);
        assert_eq!(cursor_column(edge, &"x".repeat(100)), edge.right() - 2);
    }
}
