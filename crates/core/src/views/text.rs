//! Approximate text metrics and word wrapping in page units.
//!
//! Renderers rasterize with real fonts; layout only needs stable,
//! deterministic estimates so that section heights and reveal-block
//! rectangles agree across passes and backends.

use unfold_protocol::FontKind;
use unfold_protocol::page::HeadlineRun;

/// Average glyph advance as a fraction of the font size.
fn advance_factor(font: FontKind) -> f64 {
    match font {
        FontKind::Mono => 0.62,
        FontKind::Display => 0.50,
        FontKind::Body => 0.54,
    }
}

pub fn char_width(font: FontKind, size: f64) -> f64 {
    size * advance_factor(font)
}

pub fn text_width(text: &str, font: FontKind, size: f64) -> f64 {
    text.chars().count() as f64 * char_width(font, size)
}

pub fn line_height(size: f64) -> f64 {
    size * 1.5
}

/// Characters that fit in `width`, at least one.
pub fn max_chars(width: f64, font: FontKind, size: f64) -> usize {
    ((width / char_width(font, size)).floor() as usize).max(1)
}

/// Greedy word wrap. Words longer than the limit get their own line
/// rather than being split.
pub fn wrap(text: &str, limit: usize) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.chars().count()
        } else {
            current.chars().count() + 1 + word.chars().count()
        };
        if !current.is_empty() && needed > limit {
            lines.push(std::mem::take(&mut current));
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() {
        lines.push(current);
    }
    lines
}

/// Wrap a mixed plain/accent headline into lines of same-styled runs.
/// Adjacent words sharing an accent flag merge into one run per line.
pub fn wrap_headline(runs: &[HeadlineRun], limit: usize) -> Vec<Vec<(String, bool)>> {
    let words: Vec<(&str, bool)> = runs
        .iter()
        .flat_map(|r| r.text.split_whitespace().map(move |w| (w, r.accent)))
        .collect();

    let mut lines: Vec<Vec<(String, bool)>> = Vec::new();
    let mut line: Vec<(String, bool)> = Vec::new();
    let mut line_chars = 0usize;

    for (word, accent) in words {
        let wlen = word.chars().count();
        let needed = if line_chars == 0 { wlen } else { line_chars + 1 + wlen };
        if line_chars != 0 && needed > limit {
            lines.push(std::mem::take(&mut line));
            line_chars = 0;
        }
        match line.last_mut() {
            Some((run, flag)) if *flag == accent => {
                run.push(' ');
                run.push_str(word);
            }
            _ => line.push((word.to_string(), accent)),
        }
        line_chars = if line_chars == 0 { wlen } else { line_chars + 1 + wlen };
    }
    if !line.is_empty() {
        lines.push(line);
    }
    lines
}

/// Total character count of a wrapped headline line, spaces included.
pub fn headline_line_chars(line: &[(String, bool)]) -> usize {
    let runs: usize = line.iter().map(|(run, _)| run.chars().count()).sum();
    runs + line.len().saturating_sub(1)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wrap_respects_limit() {
        let lines = wrap("turning complex technical constraints into shippable products", 20);
        assert!(lines.len() >= 3);
        for line in &lines {
            assert!(line.chars().count() <= 20, "too long: {line}");
        }
    }

    #[test]
    fn wrap_keeps_long_words_whole() {
        let lines = wrap("ab supercalifragilistic cd", 8);
        assert_eq!(lines[1], "supercalifragilistic");
    }

    #[test]
    fn wrap_empty_is_empty() {
        assert!(wrap("", 10).is_empty());
        assert!(wrap("   ", 10).is_empty());
    }

    #[test]
    fn headline_wraps_and_merges_runs() {
        let runs = vec![
            HeadlineRun::plain("Bridging the Gap Between"),
            HeadlineRun::accent("AI Innovation"),
            HeadlineRun::plain("and Scalable Business Value"),
        ];
        let lines = wrap_headline(&runs, 30);
        assert!(lines.len() >= 2);
        // Every line stays within the limit.
        for line in &lines {
            assert!(headline_line_chars(line) <= 30);
        }
        // Accent text survives with its flag.
        let accented: String = lines
            .iter()
            .flatten()
            .filter(|(_, accent)| *accent)
            .map(|(run, _)| run.clone())
            .collect::<Vec<_>>()
            .join(" ");
        assert_eq!(accented.replace("  ", " "), "AI Innovation");
    }

    #[test]
    fn metrics_are_positive_and_monotonic() {
        assert!(char_width(FontKind::Mono, 11.0) > char_width(FontKind::Display, 11.0) * 0.8);
        assert!(text_width("abc", FontKind::Body, 15.0) > 0.0);
        assert_eq!(max_chars(1.0, FontKind::Body, 15.0), 1);
        assert!(max_chars(500.0, FontKind::Body, 15.0) > 50);
    }
}
