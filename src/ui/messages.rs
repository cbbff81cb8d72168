//! User-facing notices. Every command reports its outcome through here.

use ansi_term::{Colour, Style};
use std::fmt;

fn tagged(colour: Colour, icon: &str, msg: impl fmt::Display) -> String {
    format!("{} {}", Style::new().bold().fg(colour).paint(icon), msg)
}

pub fn info<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Blue, "ℹ️", msg));
}

pub fn success<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Green, "✅", msg));
}

pub fn warning<T: fmt::Display>(msg: T) {
    println!("{}", tagged(Colour::Yellow, "⚠️", msg));
}

pub fn error<T: fmt::Display>(msg: T) {
    eprintln!("{}", tagged(Colour::Red, "❌", msg));
}

/// Section header for listings.
pub fn header<T: fmt::Display>(msg: T) {
    println!("{}", Style::new().bold().fg(Colour::Blue).paint(format!("== {msg}")));
}
