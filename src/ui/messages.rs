use std::fmt;
use std::sync::atomic::{AtomicBool, Ordering};

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

/// Icons
const ICON_INFO: &str = "ℹ️";
const ICON_OK: &str = "✅";
const ICON_FILE: &str = "📁";
const ICON_WARN: &str = "⚠️";
const ICON_ERR: &str = "❌";

/// Set once from `--quiet`, before any command runs.
static QUIET: AtomicBool = AtomicBool::new(false);

pub fn set_quiet(quiet: bool) {
    QUIET.store(quiet, Ordering::Relaxed);
}

pub fn is_quiet() -> bool {
    QUIET.load(Ordering::Relaxed)
}

fn emit(color: &str, icon: &str, msg: impl fmt::Display) {
    if !is_quiet() {
        println!("{color}{BOLD}{icon} {RESET}{msg}");
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(FG_BLUE, ICON_INFO, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(FG_GREEN, ICON_OK, msg);
}

/// Success line pointing at a written file.
pub fn saved<T: fmt::Display>(msg: T) {
    emit(FG_GREEN, ICON_FILE, msg);
}

/// Warnings go to stderr and ignore `--quiet`.
pub fn warning<T: fmt::Display>(msg: T) {
    eprintln!("{FG_YELLOW}{BOLD}{ICON_WARN} {RESET}{msg}");
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{FG_RED}{BOLD}{ICON_ERR} {RESET}{msg}");
}

/// Section title, e.g. "Excel columns found:"
pub fn header<T: fmt::Display>(msg: T) {
    if !is_quiet() {
        println!("\n{BOLD}{msg}{RESET}");
    }
}

/// Undecorated line (list items, tables).
pub fn plain<T: fmt::Display>(msg: T) {
    if !is_quiet() {
        println!("{msg}");
    }
}
