//! ANSI decoration for console narration.

const CYAN: &str = "\x1b[36m";
const GREEN: &str = "\x1b[32m";
const RED: &str = "\x1b[31m";
const BOLD: &str = "\x1b[1m";
const RESET: &str = "\x1b[0m";

fn paint(code: &str, s: impl std::fmt::Display) -> String {
    format!("{}{}{}", code, s, RESET)
}

pub fn cyan(s: impl std::fmt::Display) -> String {
    paint(CYAN, s)
}

pub fn green(s: impl std::fmt::Display) -> String {
    paint(GREEN, s)
}

pub fn red(s: impl std::fmt::Display) -> String {
    paint(RED, s)
}

pub fn bold(s: impl std::fmt::Display) -> String {
    paint(BOLD, s)
}
