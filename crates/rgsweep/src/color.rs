//! CLI color helpers.
//!
//! All functions respect `NO_COLOR`, `FORCE_COLOR`, and TTY detection via
//! `owo-colors`' `if_supports_color()`.

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

/// Call once from main.rs when `--no-color` is passed.
pub fn set_no_color() {
    // SAFETY: Called once at startup before any threads are spawned.
    unsafe { std::env::set_var("NO_COLOR", "1") };
}

// Sky (resource names): #7CB4C8
const SKY: (u8, u8, u8) = (124, 180, 200);

// Moss (success): #6B8F5E
const MOSS: (u8, u8, u8) = (107, 143, 94);

// Amber (simulated): #C49A5C
const AMBER: (u8, u8, u8) = (196, 154, 92);

// Rust (destructive): #B87060
const RUST: (u8, u8, u8) = (184, 112, 96);

// Muted text: #5C6370
const MUTED: (u8, u8, u8) = (92, 99, 112);

/// Resource group names and keys.
pub fn sky(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(SKY.0, SKY.1, SKY.2))
        .to_string()
}

/// Completed actions.
pub fn moss(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(MOSS.0, MOSS.1, MOSS.2))
        .to_string()
}

/// Simulated actions.
pub fn amber(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(AMBER.0, AMBER.1, AMBER.2))
        .to_string()
}

/// Deletions in progress.
pub fn rust(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(RUST.0, RUST.1, RUST.2))
        .to_string()
}

pub fn muted(text: &str) -> String {
    text.if_supports_color(Stdout, |t| t.truecolor(MUTED.0, MUTED.1, MUTED.2))
        .to_string()
}
