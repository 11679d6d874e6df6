//! Help screen: scrollable keybinding reference.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::tui::action::Action;
use crate::tui::app::Screen;

static CONTACT_KEYS: &[(&str, &str)] = &[
    ("Tab / Shift-Tab", "next / prev field"),
    ("Enter", "send message"),
    ("Alt+Enter", "new line in message"),
    ("Backspace", "delete last character"),
    ("Esc", "quit"),
    ("F1", "help"),
];

static HELP_KEYS: &[(&str, &str)] = &[("↑/↓", "scroll"), ("q / Esc", "back")];

/// State for the help screen.
#[derive(Debug, Clone, Default)]
pub struct HelpState {
    scroll: u16,
    /// Content rows visible in the last draw; bounds `scroll`.
    viewport: u16,
}

impl HelpState {
    /// Creates a help state scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the current scroll offset.
    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    /// Resets the scroll position to the top.
    pub fn reset(&mut self) {
        self.scroll = 0;
    }

    fn max_scroll(&self) -> u16 {
        content_len().saturating_sub(self.viewport)
    }

    /// Handles a key event, returning an [`Action`] for the app to apply.
    pub fn handle_key(&mut self, key: KeyEvent) -> Action {
        match key.code {
            KeyCode::Up => {
                self.scroll = self.scroll.saturating_sub(1);
                Action::None
            }
            KeyCode::Down => {
                self.scroll = self.scroll.saturating_add(1).min(self.max_scroll());
                Action::None
            }
            KeyCode::Char('q') | KeyCode::Esc => Action::Navigate(Screen::Contact),
            _ => Action::None,
        }
    }
}

fn build_section(title: &'static str, keys: &[(&'static str, &'static str)]) -> Vec<Line<'static>> {
    let header_style = Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD);
    let key_style = Style::default().fg(Color::Yellow);
    let dim_style = Style::default().fg(Color::DarkGray);

    let mut lines = vec![
        Line::from(""),
        Line::from(Span::styled(title, header_style)),
    ];
    for (key, desc) in keys {
        lines.push(Line::from(vec![
            Span::styled(format!("  {key:<20}"), key_style),
            Span::styled(*desc, dim_style),
        ]));
    }
    lines
}

fn help_content() -> Vec<Line<'static>> {
    let mut lines = build_section("Contact", CONTACT_KEYS);
    lines.extend(build_section("Help", HELP_KEYS));
    lines
}

fn content_len() -> u16 {
    help_content().len() as u16
}

/// Renders the help screen, recording the visible height so scrolling stops at the end.
#[mutants::skip]
pub fn draw_help(state: &mut HelpState, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .title(" Help ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [content_area, footer_area] =
        Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(inner);

    state.viewport = content_area.height;
    state.scroll = state.scroll.min(state.max_scroll());

    let paragraph = Paragraph::new(help_content()).scroll((state.scroll, 0));
    frame.render_widget(paragraph, content_area);

    let footer =
        Paragraph::new("↑/↓: scroll  q/Esc: back").style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
