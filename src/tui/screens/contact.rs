//! Contact screen: the form, its submit button, and delivery banners.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{FieldName, FieldSchema, FormState};
use crate::tui::action::Action;
use crate::tui::app::Screen;
use crate::tui::widgets::{
    Banner, FieldFocus, StatusBarContext, draw_form, draw_status_bar, form_height,
};

/// Presenter-side state of the contact screen.
///
/// Field values and errors live in the form; this only tracks focus.
#[derive(Debug, Clone)]
pub struct ContactState {
    schema: FieldSchema,
    focus: FieldFocus,
}

impl Default for ContactState {
    fn default() -> Self {
        Self::new(FieldSchema::contact())
    }
}

impl ContactState {
    /// Creates the screen state with focus on the first field.
    pub fn new(schema: FieldSchema) -> Self {
        Self {
            focus: FieldFocus::new(&schema),
            schema,
        }
    }

    /// Returns the focus cursor.
    pub fn focus(&self) -> &FieldFocus {
        &self.focus
    }

    /// Returns the focused field.
    pub fn focused_field(&self) -> Option<FieldName> {
        self.focus.field(&self.schema)
    }

    /// Moves focus to the first field carrying an error, if any.
    pub fn focus_first_error(&mut self, form: &FormState) {
        if let Some(&name) = form.errors.keys().next() {
            self.focus.focus_on(&self.schema, name);
        }
    }

    /// Handles a key event against the current form state.
    pub fn handle_key(&mut self, key: KeyEvent, form: &FormState) -> Action {
        match key.code {
            KeyCode::Tab => {
                self.focus.focus_next();
                Action::None
            }
            KeyCode::BackTab => {
                self.focus.focus_prev();
                Action::None
            }
            KeyCode::Enter if key.modifiers.contains(KeyModifiers::ALT) => {
                self.append(form, FieldName::Message, '\n')
            }
            KeyCode::Enter => Action::Submit,
            KeyCode::Char(_) if key.modifiers.contains(KeyModifiers::CONTROL) => Action::None,
            KeyCode::Char(ch) => match self.focused_field() {
                Some(field) => self.append(form, field, ch),
                None => Action::None,
            },
            KeyCode::Backspace => {
                let Some(field) = self.focused_field() else {
                    return Action::None;
                };
                let mut value = form.value(field).to_string();
                if value.pop().is_none() {
                    return Action::None;
                }
                Action::Edit(field, value)
            }
            KeyCode::F(1) => Action::Navigate(Screen::Help),
            KeyCode::Esc => Action::Quit,
            _ => Action::None,
        }
    }

    /// Appends `ch` to `field`, only accepting newlines in the message.
    fn append(&self, form: &FormState, field: FieldName, ch: char) -> Action {
        if ch == '\n' && self.focused_field() != Some(FieldName::Message) {
            return Action::None;
        }
        let mut value = form.value(field).to_string();
        value.push(ch);
        Action::Edit(field, value)
    }
}

/// Renders the contact screen.
#[mutants::skip]
pub fn draw_contact(
    state: &ContactState,
    form: &FormState,
    banner: Option<&Banner>,
    frame: &mut Frame,
    area: Rect,
) {
    let block = Block::default()
        .title(" Contact ")
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Cyan));

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [heading_area, form_area, status_area, _spacer, footer_area] = Layout::vertical([
        Constraint::Length(2),
        Constraint::Length(form_height(&state.schema)),
        Constraint::Length(2),
        Constraint::Min(0),
        Constraint::Length(1),
    ])
    .areas(inner);

    let heading = Paragraph::new(Line::from(Span::styled(
        "Get In Touch",
        Style::default()
            .fg(Color::Gray)
            .add_modifier(Modifier::BOLD),
    )));
    frame.render_widget(heading, heading_area);

    draw_form(&state.schema, form, state.focus(), frame, form_area);

    let ctx = StatusBarContext {
        status: form.status,
        banner: banner.cloned(),
    };
    draw_status_bar(&ctx, frame, status_area);

    let footer = Paragraph::new(Line::from(
        "Tab/Shift+Tab: next/prev  Enter: send  Alt+Enter: newline  F1: help  Esc: quit",
    ))
    .style(Style::default().fg(Color::DarkGray));
    frame.render_widget(footer, footer_area);
}
