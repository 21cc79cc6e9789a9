//! Task text sanitization for terminal display.
//!
//! Draft text may arrive from a bracketed paste, so it can carry escape
//! sequences and control characters. Rows are single-line, so line breaks
//! and tabs become plain spaces.

use std::borrow::Cow;
use std::iter::Peekable;

const ESC: char = '\x1b';
const BEL: char = '\x07';

/// Strip terminal escape sequences and control characters from task text.
///
/// Newlines, carriage returns and tabs are replaced with a single space each.
/// Clean input is returned borrowed.
///
/// ```
/// use ticklist_types::sanitize_task_text;
///
/// assert_eq!(sanitize_task_text("Buy milk"), "Buy milk");
/// assert_eq!(sanitize_task_text("Buy\x1b[31m milk"), "Buy milk");
/// assert_eq!(sanitize_task_text("Buy\nmilk"), "Buy milk");
/// ```
#[must_use]
pub fn sanitize_task_text(input: &str) -> Cow<'_, str> {
    if !input.chars().any(needs_attention) {
        return Cow::Borrowed(input);
    }

    let mut result = String::with_capacity(input.len());
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            ESC => skip_escape_sequence(&mut chars),
            '\n' | '\r' | '\t' => result.push(' '),
            '\u{009b}' => skip_csi_params(&mut chars),
            c if is_control(c) => {}
            c => result.push(c),
        }
    }

    Cow::Owned(result)
}

fn needs_attention(c: char) -> bool {
    c == ESC || is_control(c) || matches!(c, '\n' | '\r' | '\t')
}

fn is_control(c: char) -> bool {
    c <= '\x1f' || c == '\x7f' || ('\u{0080}'..='\u{009f}').contains(&c)
}

fn skip_escape_sequence<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    match chars.peek() {
        Some('[') => {
            chars.next();
            skip_csi_params(chars);
        }
        Some(']') => {
            chars.next();
            skip_string_sequence(chars, true);
        }
        Some('P' | '^' | '_') => {
            chars.next();
            skip_string_sequence(chars, false);
        }
        Some('(' | ')' | '*' | '+' | '#' | ' ') => {
            chars.next();
            chars.next();
        }
        Some('7' | '8' | 'c' | 'D' | 'E' | 'H' | 'M' | 'N' | 'O' | 'Z' | '=' | '>' | '<') => {
            chars.next();
        }
        _ => {}
    }
}

// CSI: parameter/intermediate bytes 0x20-0x3F, then one final byte 0x40-0x7E.
fn skip_csi_params<I: Iterator<Item = char>>(chars: &mut Peekable<I>) {
    while let Some(&c) = chars.peek() {
        if ('\x40'..='\x7e').contains(&c) {
            chars.next();
            return;
        } else if ('\x20'..='\x3f').contains(&c) {
            chars.next();
        } else {
            return;
        }
    }
}

// OSC ends at BEL or ST; DCS/PM/APC only at ST (ESC \).
fn skip_string_sequence<I: Iterator<Item = char>>(chars: &mut Peekable<I>, bel_terminates: bool) {
    while let Some(c) = chars.next() {
        if bel_terminates && c == BEL {
            return;
        }
        if c == ESC && chars.peek() == Some(&'\\') {
            chars.next();
            return;
        }
    }
}
