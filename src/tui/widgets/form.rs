//! Form widget: renders the contact fields and tracks which one has focus.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Paragraph};

use crate::model::{FieldName, FieldSchema, FieldSpec, FormState};

/// Height of a single-line input including borders.
const LINE_ROW_HEIGHT: u16 = 3;
/// Height of the message input including borders.
const MESSAGE_ROW_HEIGHT: u16 = 7;

/// Which field of a schema currently has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldFocus {
    index: usize,
    len: usize,
}

impl FieldFocus {
    /// Creates a focus cursor on the first field of `schema`.
    pub fn new(schema: &FieldSchema) -> Self {
        Self {
            index: 0,
            len: schema.fields().len(),
        }
    }

    /// Returns the index of the focused field.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Returns the focused field's name, if the schema has any fields.
    pub fn field(&self, schema: &FieldSchema) -> Option<FieldName> {
        schema.fields().get(self.index).map(|spec| spec.name)
    }

    /// Moves focus to the next field, wrapping around.
    pub fn focus_next(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + 1) % self.len;
    }

    /// Moves focus to the previous field, wrapping around.
    pub fn focus_prev(&mut self) {
        if self.len == 0 {
            return;
        }
        self.index = (self.index + self.len - 1) % self.len;
    }

    /// Moves focus to `name` if the schema declares it.
    pub fn focus_on(&mut self, schema: &FieldSchema, name: FieldName) {
        if let Some(index) = schema.fields().iter().position(|spec| spec.name == name) {
            self.index = index;
        }
    }
}

/// Returns the total height needed to render every field of `schema`.
pub fn form_height(schema: &FieldSchema) -> u16 {
    schema.fields().iter().map(row_height).sum()
}

fn row_height(spec: &FieldSpec) -> u16 {
    if spec.name == FieldName::Message {
        MESSAGE_ROW_HEIGHT
    } else {
        LINE_ROW_HEIGHT
    }
}

fn value_lines<'a>(spec: &FieldSpec, value: &'a str, is_focused: bool) -> Vec<Line<'a>> {
    if value.is_empty() && !is_focused {
        return match spec.placeholder {
            Some(hint) => vec![Line::from(Span::styled(
                hint,
                Style::default().fg(Color::DarkGray),
            ))],
            None => vec![Line::from("")],
        };
    }

    let mut lines: Vec<Line> = value.split('\n').map(Line::raw).collect();
    if is_focused && let Some(last) = lines.last_mut() {
        last.push_span(Span::styled(
            "\u{2588}",
            Style::default().add_modifier(Modifier::SLOW_BLINK),
        ));
    }
    lines
}

/// Returns the `(rows, columns)` offset that keeps the end of the value and
/// the cursor inside a box of `inner_width` columns.
///
/// The message scrolls down by line; single-line fields scroll sideways by
/// character.
fn scroll_offset(spec: &FieldSpec, lines: &[Line], inner_width: u16) -> (u16, u16) {
    if spec.name == FieldName::Message {
        let visible = row_height(spec).saturating_sub(2);
        return ((lines.len() as u16).saturating_sub(visible), 0);
    }
    let columns: usize = lines
        .first()
        .map(|line| line.spans.iter().map(|span| span.content.chars().count()).sum())
        .unwrap_or(0);
    let columns = u16::try_from(columns).unwrap_or(u16::MAX);
    (0, columns.saturating_sub(inner_width))
}

/// Renders every field of `schema` with its value and inline error.
#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
pub fn draw_form(
    schema: &FieldSchema,
    state: &FormState,
    focus: &FieldFocus,
    frame: &mut Frame,
    area: Rect,
) {
    let constraints: Vec<Constraint> = schema
        .fields()
        .iter()
        .map(|spec| Constraint::Length(row_height(spec)))
        .collect();
    let rows = Layout::vertical(constraints).split(area);

    for (i, spec) in schema.fields().iter().enumerate() {
        let is_focused = i == focus.index();
        let error = state.error(spec.name);

        let border_color = if error.is_some() {
            Color::Red
        } else if is_focused {
            Color::Yellow
        } else {
            Color::DarkGray
        };

        let label = if spec.required {
            format!("{} *", spec.label)
        } else {
            spec.label.to_string()
        };

        let block = Block::default()
            .title(label)
            .borders(Borders::ALL)
            .border_style(Style::default().fg(border_color));

        let lines = value_lines(spec, state.value(spec.name), is_focused);
        let scroll = scroll_offset(spec, &lines, rows[i].width.saturating_sub(2));
        let paragraph = Paragraph::new(lines).block(block).scroll(scroll);
        frame.render_widget(paragraph, rows[i]);

        if let Some(err) = error {
            let error_line = Paragraph::new(Span::styled(err, Style::default().fg(Color::Red)));
            // Drawn over the bottom border of the field
            let err_area = Rect {
                x: rows[i].x + 2,
                y: rows[i].y + row_height(spec).saturating_sub(1),
                width: rows[i].width.saturating_sub(4),
                height: 1,
            };
            frame.render_widget(error_line, err_area);
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;

    use super::*;

    fn buffer_to_string(buf: &ratatui::buffer::Buffer) -> String {
        let mut s = String::new();
        for y in 0..buf.area.height {
            for x in 0..buf.area.width {
                s.push(buf[(x, y)].symbol().chars().next().unwrap_or(' '));
            }
            s.push('\n');
        }
        s
    }

    fn render(state: &FormState, focus: &FieldFocus) -> String {
        let schema = FieldSchema::contact();
        let backend = TestBackend::new(60, form_height(&schema));
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|frame| draw_form(&schema, state, focus, frame, frame.area()))
            .unwrap();
        buffer_to_string(terminal.backend().buffer())
    }

    // --- Focus management ---

    #[test]
    fn focus_starts_at_first_field() {
        let schema = FieldSchema::contact();
        let focus = FieldFocus::new(&schema);
        assert_eq!(focus.index(), 0);
        assert_eq!(focus.field(&schema), Some(FieldName::Name));
    }

    #[test]
    fn focus_next_advances_and_wraps() {
        let schema = FieldSchema::contact();
        let mut focus = FieldFocus::new(&schema);
        focus.focus_next();
        assert_eq!(focus.field(&schema), Some(FieldName::Email));
        focus.focus_next();
        assert_eq!(focus.field(&schema), Some(FieldName::Message));
        focus.focus_next();
        assert_eq!(focus.field(&schema), Some(FieldName::Name));
    }

    #[test]
    fn focus_prev_wraps() {
        let schema = FieldSchema::contact();
        let mut focus = FieldFocus::new(&schema);
        focus.focus_prev();
        assert_eq!(focus.field(&schema), Some(FieldName::Message));
    }

    #[test]
    fn focus_on_jumps_to_field() {
        let schema = FieldSchema::contact();
        let mut focus = FieldFocus::new(&schema);
        focus.focus_on(&schema, FieldName::Email);
        assert_eq!(focus.index(), 1);
    }

    #[test]
    fn empty_focus_is_noop() {
        let mut focus = FieldFocus { index: 0, len: 0 };
        focus.focus_next();
        focus.focus_prev();
        assert_eq!(focus.index(), 0);
    }

    #[test]
    fn form_height_sums_rows() {
        assert_eq!(
            form_height(&FieldSchema::contact()),
            LINE_ROW_HEIGHT * 2 + MESSAGE_ROW_HEIGHT
        );
    }

    // --- Scrolling ---

    fn spec(name: FieldName) -> &'static FieldSpec {
        FieldSchema::contact().field(name).unwrap()
    }

    #[test]
    fn short_single_line_value_does_not_scroll() {
        let lines = value_lines(spec(FieldName::Name), "Ada", true);
        assert_eq!(scroll_offset(spec(FieldName::Name), &lines, 20), (0, 0));
    }

    #[test]
    fn long_single_line_value_scrolls_to_keep_cursor_visible() {
        let value = "a".repeat(30);
        let lines = value_lines(spec(FieldName::Email), &value, true);
        // 30 chars plus the cursor block in a 20 column box
        assert_eq!(scroll_offset(spec(FieldName::Email), &lines, 20), (0, 11));
    }

    #[test]
    fn unfocused_long_value_scrolls_to_its_end() {
        let value = "a".repeat(30);
        let lines = value_lines(spec(FieldName::Name), &value, false);
        assert_eq!(scroll_offset(spec(FieldName::Name), &lines, 20), (0, 10));
    }

    #[test]
    fn message_scrolls_vertically_only() {
        let value = format!("{}\n2\n3\n4\n5\n6\n7", "x".repeat(80));
        let lines = value_lines(spec(FieldName::Message), &value, true);
        assert_eq!(scroll_offset(spec(FieldName::Message), &lines, 20), (2, 0));
    }

    // --- Rendering ---

    #[test]
    fn renders_labels_with_required_marker() {
        let schema = FieldSchema::contact();
        let output = render(&FormState::new(&schema), &FieldFocus::new(&schema));
        assert!(output.contains("Your Name *"));
        assert!(output.contains("Email *"));
        assert!(output.contains("Message *"));
    }

    #[test]
    fn renders_placeholder_for_unfocused_empty_message() {
        let schema = FieldSchema::contact();
        let output = render(&FormState::new(&schema), &FieldFocus::new(&schema));
        assert!(output.contains("What do you want to say?"));
    }

    #[test]
    fn renders_values_and_errors() {
        let schema = FieldSchema::contact();
        let mut state = FormState::new(&schema);
        state.fields.insert(FieldName::Name, "Ada".into());
        state
            .errors
            .insert(FieldName::Email, "Please provide your email".into());
        let output = render(&state, &FieldFocus::new(&schema));
        assert!(output.contains("Ada"));
        assert!(output.contains("Please provide your email"));
    }

    #[test]
    fn renders_tail_of_long_name() {
        let schema = FieldSchema::contact();
        let mut state = FormState::new(&schema);
        let name = format!("{}END", "x".repeat(70));
        state.fields.insert(FieldName::Name, name);
        let output = render(&state, &FieldFocus::new(&schema));
        assert!(output.contains("END\u{2588}"));
    }

    #[test]
    fn renders_multiline_message() {
        let schema = FieldSchema::contact();
        let mut state = FormState::new(&schema);
        state
            .fields
            .insert(FieldName::Message, "first line\nsecond line".into());
        let output = render(&state, &FieldFocus::new(&schema));
        assert!(output.contains("first line"));
        assert!(output.contains("second line"));
    }
}
