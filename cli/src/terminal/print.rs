use colored::*;
use skyhaul_common::log::PRINT_TARGET;
use tracing::info;

use crate::terminal::colors;

pub const TOTAL_WIDTH: usize = 64;

#[macro_export]
macro_rules! sprint {
    () => {
        $crate::terminal::print::print("");
    };
    ($msg:expr) => {
        $crate::terminal::print::print($msg);
    };
}

pub fn print(msg: &str) {
    info!(target: PRINT_TARGET, raw_msg = msg);
}

pub fn header(msg: &str, q_level: u8) {
    if q_level > 0 {
        return;
    }

    let formatted: String = format!("⟦ {} ⟧", msg);
    let msg_len: usize = formatted.chars().count();

    let dash_count: usize = TOTAL_WIDTH.saturating_sub(msg_len);
    let left: usize = dash_count / 2;
    let right: usize = dash_count - left;

    let line: ColoredString = format!(
        "{}{}{}",
        "─".repeat(left),
        formatted.to_uppercase().color(colors::PRIMARY),
        "─".repeat(right)
    )
    .color(colors::SEPARATOR);

    print(&format!("{}", line));
}

pub fn fat_separator() {
    let sep: ColoredString = "═".repeat(TOTAL_WIDTH).color(colors::SEPARATOR);
    print(&format!("{}", sep));
}

/// Prints `key.....: value` rows with the colons lined up.
pub fn aligned_lines(rows: &[(&str, ColoredString)]) {
    let key_width: usize = rows.iter().map(|(key, _)| key.len()).max().unwrap_or(0);

    for (key, value) in rows {
        let dots: String = ".".repeat((key_width + 1).saturating_sub(key.len()));
        let colon: String = format!(
            "{}{}",
            dots.color(colors::SEPARATOR),
            ":".color(colors::SEPARATOR)
        );
        let prefix: ColoredString = ">".color(colors::SEPARATOR);
        print(&format!("{} {}{} {}", prefix, key.color(colors::ACCENT), colon, value));
    }
}

pub fn centerln(msg: &str) {
    let space = " ".repeat(TOTAL_WIDTH.saturating_sub(console::measure_text_width(msg)) / 2);
    print(&format!("{}{}{}", space, msg, space));
}
