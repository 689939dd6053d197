//! Terminal rendering module for rich markdown output
//!
//! This module provides terminal rendering capabilities using termimad
//! for rich markdown display with optional fallback to plain text, plus the
//! progress spinner shown while the model is working.

use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use nutriplanner_core::display::ALERT_HEADING;
use termimad::{crossterm::style::Color, MadSkin};

/// Terminal renderer that can switch between rich and plain text output
pub struct TerminalRenderer {
    rich_enabled: bool,
    skin: MadSkin,
    alert_skin: MadSkin,
}

impl TerminalRenderer {
    /// Create a new terminal renderer
    pub fn new(rich_enabled: bool) -> Self {
        let mut skin = MadSkin::default();
        skin.set_headers_fg(Color::Green);
        skin.bold.set_fg(Color::Yellow);
        skin.italic.set_fg(Color::Magenta);
        skin.code_block.set_bg(Color::AnsiValue(238));
        skin.inline_code.set_bg(Color::AnsiValue(238));

        let mut alert_skin = MadSkin::default();
        alert_skin.paragraph.set_fg(Color::Black);
        alert_skin.paragraph.set_bg(Color::Yellow);
        alert_skin.bold.set_fg(Color::DarkRed);

        Self {
            rich_enabled,
            skin,
            alert_skin,
        }
    }

    /// Render markdown text to terminal
    pub fn render(&self, markdown: &str) -> Result<()> {
        if self.rich_enabled {
            for line in markdown.lines() {
                if line.starts_with('#') {
                    println!("\x1b[32m{line}\x1b[0m");
                } else {
                    self.skin.print_inline(line);
                    println!();
                }
            }
        } else {
            print!("{markdown}");
        }
        Ok(())
    }

    /// Render the alert section as a highlighted block
    pub fn render_alert(&self, alert: &str) -> Result<()> {
        if self.rich_enabled {
            println!();
            self.alert_skin.print_inline(&format!(" **{ALERT_HEADING}** "));
            println!();
            for line in alert.lines() {
                self.alert_skin.print_inline(&format!(" {line} "));
                println!();
            }
            println!();
        } else {
            print!("{}", plain_alert(alert));
        }
        Ok(())
    }

    /// Spinner shown on stderr while a request is outstanding. Plain output
    /// gets a hidden spinner.
    pub fn spinner(&self, message: &str) -> ProgressBar {
        if !self.rich_enabled {
            return ProgressBar::hidden();
        }
        let spinner = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green} {msg}") {
            spinner.set_style(style);
        }
        spinner.set_message(message.to_string());
        spinner.enable_steady_tick(Duration::from_millis(80));
        spinner
    }
}

impl Default for TerminalRenderer {
    fn default() -> Self {
        Self::new(true)
    }
}

fn plain_alert(alert: &str) -> String {
    let mut output = format!("\n---\n{ALERT_HEADING}\n\n");
    for line in alert.lines() {
        output.push_str(&format!("! {line}\n"));
    }
    output.push_str("---\n");
    output
}
