use inksac::prelude::*;

#[derive(Debug, Clone, Copy)]
pub struct SyntaxHighlighter {
    color_support: ColorSupport,
}

impl Default for SyntaxHighlighter {
    fn default() -> Self {
        Self::new(true)
    }
}

impl SyntaxHighlighter {
    /// `enabled = false` forces plain output even on a color terminal.
    pub fn new(enabled: bool) -> Self {
        let support = if enabled {
            check_color_support().unwrap_or(ColorSupport::NoColor)
        } else {
            ColorSupport::NoColor
        };
        Self {
            color_support: support,
        }
    }

    pub fn plain() -> Self {
        Self::new(false)
    }

    pub fn is_enabled(&self) -> bool {
        !matches!(self.color_support, ColorSupport::NoColor)
    }

    pub fn highlight_command(&self, input: &str) -> String {
        if !self.is_enabled() {
            return input.to_string();
        }

        // Whitespace is copied verbatim so the cursor position still lines up.
        let mut highlighted = String::with_capacity(input.len());
        let mut expect_command = true;
        for piece in split_keep_whitespace(input) {
            if piece.trim().is_empty() {
                highlighted.push_str(piece);
            } else if matches!(piece, ">" | ">>" | "|") {
                highlighted.push_str(&piece.style(operator_style()).to_string());
                expect_command = piece == "|";
            } else if expect_command {
                highlighted.push_str(&piece.style(command_style()).to_string());
                expect_command = false;
            } else if piece.starts_with('-') {
                highlighted.push_str(&piece.style(flag_style()).to_string());
            } else {
                highlighted.push_str(piece);
            }
        }

        highlighted
    }

    pub fn highlight_error(&self, error: &str) -> String {
        if !self.is_enabled() {
            return error.to_string();
        }

        let error_style = Style::builder()
            .foreground(Color::Red)
            .bold()
            .build();

        error.style(error_style).to_string()
    }

    pub fn highlight_success(&self, message: &str) -> String {
        if !self.is_enabled() {
            return message.to_string();
        }

        let success_style = Style::builder()
            .foreground(Color::Green)
            .build();

        message.style(success_style).to_string()
    }

    pub fn highlight_hint(&self, hint: &str) -> String {
        if !self.is_enabled() {
            return hint.to_string();
        }

        let hint_style = Style::builder()
            .foreground(Color::RGB(128, 128, 128))
            .build();

        hint.style(hint_style).to_string()
    }
}

fn command_style() -> Style {
    Style::builder()
        .foreground(Color::Cyan)
        .bold()
        .build()
}

fn flag_style() -> Style {
    Style::builder().foreground(Color::Yellow).build()
}

fn operator_style() -> Style {
    Style::builder().foreground(Color::Magenta).bold().build()
}

/// Split into alternating runs of whitespace and non-whitespace.
fn split_keep_whitespace(input: &str) -> Vec<&str> {
    let mut pieces = Vec::new();
    let mut start = 0;
    let mut in_whitespace = None;

    for (i, c) in input.char_indices() {
        let is_whitespace = c.is_whitespace();
        if in_whitespace.is_some_and(|previous| previous != is_whitespace) {
            pieces.push(&input[start..i]);
            start = i;
        }
        in_whitespace = Some(is_whitespace);
    }
    if start < input.len() {
        pieces.push(&input[start..]);
    }

    pieces
}
