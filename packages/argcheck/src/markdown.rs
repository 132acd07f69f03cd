use std::ops::Deref;

use colored::{Color, ColoredString};

/// Renders terminal-coloured text as an HTML span that Markdown viewers keep.
pub trait Markdown {
    fn markdown(&self) -> String;
}

fn css_color(color: Color) -> Option<&'static str> {
    Some(match color {
        Color::Black | Color::BrightBlack => "black",
        Color::Red | Color::BrightRed => "red",
        Color::Green | Color::BrightGreen => "green",
        Color::Yellow | Color::BrightYellow => "goldenrod",
        Color::Blue | Color::BrightBlue => "blue",
        Color::Magenta | Color::BrightMagenta => "magenta",
        Color::Cyan | Color::BrightCyan => "darkcyan",
        Color::White | Color::BrightWhite => "gray",
        _ => return None,
    })
}

impl Markdown for ColoredString {
    fn markdown(&self) -> String {
        match self.fgcolor.and_then(css_color) {
            Some(color) => format!("<span style=\"color: {color};\">{}</span>", self.deref()),
            None => self.deref().to_owned(),
        }
    }
}
