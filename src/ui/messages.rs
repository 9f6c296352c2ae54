//! Console message helpers: one icon + color per severity.

use std::fmt;

/// ANSI colors
const RESET: &str = "\x1b[0m";
const BOLD: &str = "\x1b[1m";

const FG_BLUE: &str = "\x1b[34m";
const FG_GREEN: &str = "\x1b[32m";
const FG_YELLOW: &str = "\x1b[33m";
const FG_RED: &str = "\x1b[31m";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    Info,
    Success,
    Warning,
    Error,
}

impl Level {
    fn color(self) -> &'static str {
        match self {
            Level::Info => FG_BLUE,
            Level::Success => FG_GREEN,
            Level::Warning => FG_YELLOW,
            Level::Error => FG_RED,
        }
    }

    fn icon(self) -> &'static str {
        match self {
            Level::Info => "ℹ️",
            Level::Success => "✅",
            Level::Warning => "⚠️",
            Level::Error => "❌",
        }
    }
}

/// Print `msg` with the decoration of `level`. Warnings and errors go to stderr.
pub fn emit<T: fmt::Display>(level: Level, msg: T) {
    let line = format!("{}{}{} {}{}", level.color(), BOLD, level.icon(), RESET, msg);
    match level {
        Level::Info | Level::Success => println!("{line}"),
        Level::Warning | Level::Error => eprintln!("{line}"),
    }
}

pub fn info<T: fmt::Display>(msg: T) {
    emit(Level::Info, msg);
}

pub fn success<T: fmt::Display>(msg: T) {
    emit(Level::Success, msg);
}

pub fn warning<T: fmt::Display>(msg: T) {
    emit(Level::Warning, msg);
}

pub fn error<T: fmt::Display>(msg: T) {
    emit(Level::Error, msg);
}

/// Section header for listings
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}{}=== {} ==={}", FG_BLUE, BOLD, msg, RESET);
}
