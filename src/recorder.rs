//! Recording console: captures ANSI-styled terminal output and serializes
//! it to an HTML document.
//!
//! The document shape is fixed and consumed downstream by regex: one
//! `<style>` block holding a `.rN` class per distinct style plus a light
//! `body { ... }` rule, and one `<pre>` block with the recorded text. The
//! SGR subset covers what comfy-table and owo-colors emit: reset,
//! bold/dim, 16-color and `38;5;n`/`48;5;n` foreground and background.

use std::fmt::Write as _;

/// Standard 16-color palette as hex, indexes 0-15
const PALETTE_16: [&str; 16] = [
    "#000000", "#800000", "#008000", "#808000", "#000080", "#800080", "#008080", "#c0c0c0",
    "#7f7f7f", "#ff0000", "#00ff00", "#ffff00", "#0000ff", "#ff00ff", "#00ffff", "#ffffff",
];

#[derive(Debug, Clone, PartialEq, Eq, Default)]
struct Style {
    fg: Option<String>,
    bg: Option<String>,
    bold: bool,
    dim: bool,
}

impl Style {
    fn is_plain(&self) -> bool {
        *self == Style::default()
    }

    fn css(&self) -> String {
        let mut rules = Vec::new();
        let fg = match (&self.fg, self.dim) {
            (Some(fg), _) => Some(fg.clone()),
            // Rich renders dim-without-color as mid grey
            (None, true) => Some("#7f7f7f".to_string()),
            (None, false) => None,
        };
        if let Some(fg) = fg {
            rules.push(format!("color: {}; text-decoration-color: {}", fg, fg));
        }
        if let Some(ref bg) = self.bg {
            rules.push(format!("background-color: {}", bg));
        }
        if self.bold {
            rules.push("font-weight: bold".to_string());
        }
        rules.join("; ")
    }
}

/// Map a 256-color index to hex
fn color_256(n: u8) -> String {
    match n {
        0..=15 => PALETTE_16[n as usize].to_string(),
        16..=231 => {
            let n = n - 16;
            let steps = [0u8, 95, 135, 175, 215, 255];
            let r = steps[(n / 36) as usize];
            let g = steps[((n % 36) / 6) as usize];
            let b = steps[(n % 6) as usize];
            format!("#{:02x}{:02x}{:02x}", r, g, b)
        }
        232..=255 => {
            let v = 8 + (n - 232) * 10;
            format!("#{:02x}{:02x}{:02x}", v, v, v)
        }
    }
}

fn apply_sgr(style: &mut Style, params: &[u8]) {
    let mut i = 0;
    while i < params.len() {
        match params[i] {
            0 => *style = Style::default(),
            1 => style.bold = true,
            2 => style.dim = true,
            22 => {
                style.bold = false;
                style.dim = false;
            }
            30..=37 => style.fg = Some(PALETTE_16[(params[i] - 30) as usize].to_string()),
            90..=97 => style.fg = Some(PALETTE_16[(params[i] - 90 + 8) as usize].to_string()),
            39 => style.fg = None,
            40..=47 => style.bg = Some(PALETTE_16[(params[i] - 40) as usize].to_string()),
            100..=107 => style.bg = Some(PALETTE_16[(params[i] - 100 + 8) as usize].to_string()),
            49 => style.bg = None,
            38 | 48 => {
                // 38;5;n / 48;5;n extended color
                if params.get(i + 1) == Some(&5) {
                    if let Some(&n) = params.get(i + 2) {
                        let color = Some(color_256(n));
                        if params[i] == 38 {
                            style.fg = color;
                        } else {
                            style.bg = color;
                        }
                    }
                    i += 2;
                }
            }
            _ => {}
        }
        i += 1;
    }
}

fn escape_html(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

/// Console that records everything printed to it
#[derive(Debug, Default)]
pub struct Recorder {
    buffer: String,
}

impl Recorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a chunk of (possibly ANSI-styled) text followed by a newline
    pub fn print(&mut self, text: &str) {
        self.buffer.push_str(text);
        self.buffer.push('\n');
    }

    /// Serialize the recording to a complete HTML document
    pub fn export_html(&self) -> String {
        let mut classes: Vec<Style> = Vec::new();
        let mut body = String::new();

        let mut style = Style::default();
        let mut run = String::new();
        let mut run_style = Style::default();

        let flush = |body: &mut String, classes: &mut Vec<Style>, run: &str, style: &Style| {
            if run.is_empty() {
                return;
            }
            if style.is_plain() {
                body.push_str(&escape_html(run));
            } else {
                let class = match classes.iter().position(|s| s == style) {
                    Some(idx) => idx + 1,
                    None => {
                        classes.push(style.clone());
                        classes.len()
                    }
                };
                let _ = write!(body, "<span class=\"r{}\">{}</span>", class, escape_html(run));
            }
        };

        let mut chars = self.buffer.chars().peekable();
        while let Some(c) = chars.next() {
            if c != '\u{1b}' {
                if style != run_style {
                    flush(&mut body, &mut classes, &run, &run_style);
                    run.clear();
                    run_style = style.clone();
                }
                run.push(c);
                continue;
            }
            // CSI sequence: ESC [ params final
            if chars.peek() != Some(&'[') {
                continue;
            }
            chars.next();
            let mut params = String::new();
            let mut final_byte = ' ';
            for p in chars.by_ref() {
                if p.is_ascii_digit() || p == ';' {
                    params.push(p);
                } else {
                    final_byte = p;
                    break;
                }
            }
            if final_byte == 'm' {
                let codes: Vec<u8> = if params.is_empty() {
                    vec![0]
                } else {
                    params.split(';').filter_map(|p| p.parse().ok()).collect()
                };
                apply_sgr(&mut style, &codes);
            }
        }
        flush(&mut body, &mut classes, &run, &run_style);

        let mut styles = String::new();
        for (idx, class) in classes.iter().enumerate() {
            let _ = writeln!(styles, ".r{} {{{}}}", idx + 1, class.css());
        }

        format!(
            "<!DOCTYPE html>\n\
             <html>\n\
             <head>\n\
             <meta charset=\"UTF-8\">\n\
             <style>\n\
             {styles}\
             body {{\n    color: #000000;\n    background-color: #ffffff;\n}}\n\
             </style>\n\
             </head>\n\
             <body>\n\
             <pre style=\"font-family:Menlo,'DejaVu Sans Mono',consolas,'Courier New',monospace\"><code>{body}</code></pre>\n\
             </body>\n\
             </html>\n"
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use owo_colors::OwoColorize;

    #[test]
    fn test_plain_text_passthrough() {
        let mut recorder = Recorder::new();
        recorder.print("hello world");
        let html = recorder.export_html();
        assert!(html.contains("hello world"));
        assert!(html.contains("<pre"));
        assert!(html.contains("body {"));
    }

    #[test]
    fn test_html_escaping() {
        let mut recorder = Recorder::new();
        recorder.print("a < b & c > d");
        let html = recorder.export_html();
        assert!(html.contains("a &lt; b &amp; c &gt; d"));
    }

    #[test]
    fn test_styled_text_gets_class() {
        let mut recorder = Recorder::new();
        recorder.print(&format!("{}", "CYAN TITLE".cyan()));
        let html = recorder.export_html();
        assert!(html.contains("<span class=\"r1\">CYAN TITLE</span>"));
        assert!(html.contains(".r1 {color: #008080; text-decoration-color: #008080}"));
    }

    #[test]
    fn test_dim_maps_to_grey() {
        let mut recorder = Recorder::new();
        recorder.print(&format!("{}", "faint".dimmed()));
        let html = recorder.export_html();
        assert!(html.contains("color: #7f7f7f"));
    }

    #[test]
    fn test_same_style_reuses_class() {
        let mut recorder = Recorder::new();
        recorder.print(&format!("{} and {}", "one".green(), "two".green()));
        let html = recorder.export_html();
        assert!(html.contains("<span class=\"r1\">one</span>"));
        assert!(html.contains("<span class=\"r1\">two</span>"));
        assert!(!html.contains(".r2 "));
    }

    #[test]
    fn test_extended_color_sequence() {
        let mut recorder = Recorder::new();
        recorder.print("\u{1b}[38;5;14mbright cyan\u{1b}[0m");
        let html = recorder.export_html();
        assert!(html.contains("color: #00ffff"));
    }

    #[test]
    fn test_background_color() {
        let mut recorder = Recorder::new();
        recorder.print("\u{1b}[44mactive row\u{1b}[0m");
        let html = recorder.export_html();
        assert!(html.contains("background-color: #000080"));
    }

    #[test]
    fn test_color_256_cube_and_greyscale() {
        assert_eq!(color_256(9), "#ff0000");
        assert_eq!(color_256(16), "#000000");
        assert_eq!(color_256(231), "#ffffff");
        assert_eq!(color_256(232), "#080808");
    }
}
