//! Greedy word wrapping.

use crate::metrics::TextMeasure;

/// Wrap `text` into lines no wider than `width`.
///
/// Words are separated by any whitespace and rejoined with single spaces.
/// A word that cannot fit on a line by itself is split at character
/// boundaries; every other word stays whole. Blank input yields no lines.
pub fn wrap(text: &str, width: f64, measure: &dyn TextMeasure) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        if measure.width(word) > width {
            if !current.is_empty() {
                lines.push(std::mem::take(&mut current));
            }
            let mut pieces = split_word(word, width, measure);
            // The tail of a split word can still share its line.
            current = pieces.pop().unwrap_or_default();
            lines.extend(pieces);
            continue;
        }

        if current.is_empty() {
            current.push_str(word);
            continue;
        }

        let candidate_width = measure.width(&current) + measure.width(" ") + measure.width(word);
        if candidate_width <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        }
    }

    if !current.is_empty() {
        lines.push(current);
    }

    lines
}

/// Break a single overlong word into width-fitting pieces. Each piece holds
/// at least one character.
fn split_word(word: &str, width: f64, measure: &dyn TextMeasure) -> Vec<String> {
    let mut pieces = Vec::new();
    let mut piece = String::new();

    for ch in word.chars() {
        piece.push(ch);
        if piece.chars().count() > 1 && measure.width(&piece) > width {
            piece.pop();
            pieces.push(std::mem::take(&mut piece));
            piece.push(ch);
        }
    }

    if !piece.is_empty() {
        pieces.push(piece);
    }

    pieces
}
