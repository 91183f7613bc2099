//! Terminal output for gymkit. Every line goes through [`print`], which hands
//! it to the `gymkit::print` tracing target so the formatter writes it raw.

use std::fmt::Display;

use crate::terminal::colors;
use crate::terminal::format::Detail;
use crate::terminal::logging::PRINT_TARGET;
use colored::*;
use gymkit_common::config::Config;
use tracing::info;

pub const TOTAL_WIDTH: usize = 64;
const LABEL_WIDTH: usize = 12;

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, "{}", msg);
}

pub fn blank() {
    print("");
}

/// Per-item trees and field lines are dropped at `-qq`; summaries always print.
pub fn shows_details(cfg: &Config) -> bool {
    cfg.quiet < 2
}

pub fn banner(cfg: &Config) {
    if cfg.no_banner || cfg.quiet > 0 {
        return;
    }

    let title: String = format!(" GYMKIT v{} ", env!("CARGO_PKG_VERSION"));
    let side: usize = TOTAL_WIDTH.saturating_sub(title.len()) / 2;
    print(&format!(
        "{}{}{}",
        "▀".repeat(side).bright_black(),
        title.bright_green().bold(),
        "▀".repeat(side).bright_black()
    ));
}

/// A section title such as `── MEMBERSHIPS ──`. Hidden from `-q` on.
pub fn section(title: &str, cfg: &Config) {
    if cfg.quiet > 0 {
        return;
    }

    let label: String = format!(" {} ", title.to_uppercase());
    let fill: usize = TOTAL_WIDTH.saturating_sub(label.chars().count());
    print(&format!(
        "{}{}{}",
        "──".repeat(fill / 4).bright_black(),
        label.bright_green(),
        "──".repeat(fill - fill / 2 - fill / 4).bright_black()
    ));
}

/// `Label.......: value`, for single facts like a subscription's details.
pub fn field(label: &str, value: impl Display) {
    let dots: String = ".".repeat(LABEL_WIDTH.saturating_sub(label.chars().count()));
    print(&format!(
        "{} {}{}{} {}",
        ">".color(colors::SEPARATOR),
        label.color(colors::PRIMARY),
        dots.color(colors::SEPARATOR),
        ":".color(colors::SEPARATOR),
        value
    ));
}

pub fn line(msg: impl Display) {
    print(&format!("{} {}", ">".color(colors::SEPARATOR), msg));
}

/// An indexed heading with its details hanging below it as a one-level tree.
pub fn entry(idx: usize, title: &str, details: Vec<Detail>) {
    print(&format!(
        "{}{}{} {}",
        "[".color(colors::SEPARATOR),
        idx.to_string().color(colors::ACCENT),
        "]".color(colors::SEPARATOR),
        title.color(colors::PRIMARY)
    ));

    let key_width: usize = details.iter().map(|(key, _)| key.len()).max().unwrap_or(0);
    for (i, (key, value)) in details.iter().enumerate() {
        let branch: &str = if i + 1 == details.len() { "└─" } else { "├─" };
        print(&format!(
            " {} {}{}{} {}",
            branch.bright_black(),
            key.color(colors::TEXT_DEFAULT),
            ".".repeat(key_width + 1 - key.len()).color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR),
            value
        ));
    }
}

/// Pads `msg` to the middle of the output width. Color codes are kept and not counted.
fn centered(msg: impl Display) -> String {
    let rendered: String = msg.to_string();
    let pad: usize = TOTAL_WIDTH.saturating_sub(console::measure_text_width(&rendered)) / 2;
    format!("{}{}", " ".repeat(pad), rendered)
}

/// A double rule followed by `msg` centered under it.
pub fn summary(msg: impl Display) {
    closing_rule();
    print(&centered(msg));
}

pub fn closing_rule() {
    print(&format!("{}", "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR)));
}
