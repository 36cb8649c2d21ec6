// src/utils.rs
//! Stateless terminal formatting: every helper takes a value and returns a styled string.

use crossterm::style::{style, Color, Stylize};

use crate::models::server::ServerRecord;

pub const BAR_WIDTH: usize = 10;
pub const RULE_WIDTH: usize = 105;

const BANNER: &str = r"
   ______ __                     __  __  __
  / ____// /____  __  __ ____   / / / / / /__  __
 / /    / // __ \/ / / // __ \ / / / / / // / / /
/ /___ / // /_/ // /_/ // /_/ // /_/ // // /_/ /
\____//_/ \____/ \__,_//_____/ \____//_/ \__,_/
       -- CLOUD SERVER MANAGEMENT SIMULATOR --
";

pub fn banner() -> String {
    style(BANNER).with(Color::Cyan).bold().to_string()
}

/// Green up to 50%, yellow above, red above 80%.
pub fn load_color(percentage: f64) -> Color {
    if percentage > 80.0 {
        Color::Red
    } else if percentage > 50.0 {
        Color::Yellow
    } else {
        Color::Green
    }
}

/// Plain `[███░░░░░░░]` cells for a percentage.
pub fn bar_cells(percentage: f64, width: usize) -> String {
    let filled = ((width as f64 * percentage) / 100.0).floor().max(0.0) as usize;
    let filled = filled.min(width);
    format!("[{}{}]", "█".repeat(filled), "░".repeat(width - filled))
}

pub fn progress_bar(percentage: f64, width: usize) -> String {
    let text = format!("{} {:>5.1}%", bar_cells(percentage, width), percentage);
    style(text).with(load_color(percentage)).to_string()
}

pub fn status_badge(status: &str) -> String {
    if status == crate::models::server::STATUS_ACTIVE {
        format!("{:<10}", format!("● {status}")).green().to_string()
    } else {
        format!("{:<10}", format!("■ {status}")).red().to_string()
    }
}

pub fn table_header() -> String {
    let header = format!(
        "{:<8} | {:<15} | {:<10} | {:<10} | {:<18} | {:<18} | {}",
        "ID", "SERVER NAME", "LOCATION", "STATUS", "CPU LOAD", "RAM LOAD", "UPTIME"
    );
    format!("{}\n{}", header.magenta(), rule())
}

pub fn table_row(server: &ServerRecord) -> String {
    format!(
        "{:<8} | {:<15} | {:<10} | {} | {} | {} | {}s",
        server.id,
        server.name,
        server.location,
        status_badge(&server.status),
        progress_bar(server.cpu_load, BAR_WIDTH),
        progress_bar(server.memory_load, BAR_WIDTH),
        server.uptime_secs
    )
}

pub fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn heading(text: &str) -> String {
    text.bold().to_string()
}

pub fn success(text: &str) -> String {
    text.green().to_string()
}

pub fn warning(text: &str) -> String {
    text.yellow().to_string()
}

pub fn failure(text: &str) -> String {
    text.red().to_string()
}

pub fn accent(text: &str) -> String {
    text.cyan().to_string()
}

pub fn highlight(text: &str) -> String {
    text.blue().to_string()
}
