#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use std::io::{self, stdout};

use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;

use contact_form::config::Config;
use contact_form::gateway::EmailJsGateway;
use contact_form::logging;
use contact_form::submission::{ContactForm, SuccessPolicy};
use contact_form::tui::{App, AppError};

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn main() -> Result<(), Box<dyn std::error::Error>> {
    logging::init_tracing();

    // Credentials are checked before the terminal is touched so a bad setup
    // prints a plain error instead of a broken screen.
    let config = Config::load()?;
    let gateway = EmailJsGateway::new(config.gateway).map_err(AppError::from)?;
    let form = ContactForm::default()
        .with_policy(SuccessPolicy::from_clear_flag(config.form.clear_on_success));
    tracing::info!(policy = ?form.policy(), "contact form ready");

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()?;

    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    enable_raw_mode()?;
    execute!(stdout(), EnterAlternateScreen)?;
    let mut terminal = Terminal::new(CrosstermBackend::new(stdout()))?;

    let mut app = App::new(form, gateway);
    let result = runtime.block_on(app.run(&mut terminal));

    let restore_result = restore_terminal();
    match result {
        Err(e) => Err(e.into()),
        Ok(()) => restore_result.map_err(Into::into),
    }
}

#[cfg_attr(coverage_nightly, coverage(off))]
#[mutants::skip]
fn restore_terminal() -> Result<(), io::Error> {
    let raw_result = disable_raw_mode();
    let screen_result = execute!(stdout(), LeaveAlternateScreen);
    raw_result.and(screen_result)
}
