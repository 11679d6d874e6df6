//! Status bar widget: submit button state and the last delivery notification.

use ratatui::Frame;
use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::Paragraph;

use crate::model::Status;

/// A one-shot delivery notification shown until the next key press.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Banner {
    Sent,
    Failed(String),
}

impl Banner {
    /// Text shown to the user.
    pub fn text(&self) -> String {
        match self {
            Self::Sent => "I will get back to you as soon as possible.".to_string(),
            Self::Failed(reason) => format!("Email could not be sent. ({reason})"),
        }
    }
}

/// Data passed to the status bar widget.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StatusBarContext {
    pub status: Status,
    pub banner: Option<Banner>,
}

/// Label of the submit button for `status`.
pub fn button_label(status: Status) -> &'static str {
    match status {
        Status::Idle => "[ Send ]",
        Status::Submitting => "[ Sending... ]",
    }
}

/// Renders the submit button on the first line and the banner, if any, on the second.
///
/// The button is dimmed while submitting since Enter is ignored then.
#[mutants::skip]
pub fn draw_status_bar(ctx: &StatusBarContext, frame: &mut Frame, area: Rect) {
    let [button_area, banner_area] =
        Layout::vertical([Constraint::Length(1), Constraint::Length(1)]).areas(area);

    let button_style = match ctx.status {
        Status::Idle => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::BOLD),
        Status::Submitting => Style::default().fg(Color::DarkGray),
    };
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(button_label(ctx.status), button_style))),
        button_area,
    );

    if let Some(banner) = &ctx.banner {
        let color = match banner {
            Banner::Sent => Color::Green,
            Banner::Failed(_) => Color::Red,
        };
        frame.render_widget(
            Paragraph::new(Line::from(Span::styled(
                banner.text(),
                Style::default().fg(color),
            ))),
            banner_area,
        );
    }
}
