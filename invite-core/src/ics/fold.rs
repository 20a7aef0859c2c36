//! Content line folding and DESCRIPTION chunking.

/// Maximum content line length in octets (RFC 5545 §3.1).
pub const MAX_LINE_OCTETS: usize = 75;

/// Folds a content line (without its trailing CRLF).
///
/// Lines of at most 75 octets pass through unchanged. Longer lines get
/// CRLF + space after the 75th octet; each continuation line then holds at
/// most 74 content octets so that it stays within 75 including the space.
/// Folds never split a UTF-8 character.
#[must_use]
pub fn fold_line(line: &str) -> String {
    if line.len() <= MAX_LINE_OCTETS {
        return line.to_string();
    }

    let mut result = String::with_capacity(line.len() + line.len() / MAX_LINE_OCTETS * 3);
    let mut current_len = 0;
    let mut first_segment = true;

    for c in line.chars() {
        let char_len = c.len_utf8();

        let effective_max = if first_segment {
            MAX_LINE_OCTETS
        } else {
            MAX_LINE_OCTETS - 1
        };

        if current_len + char_len > effective_max {
            result.push_str("\r\n ");
            current_len = 0;
            first_segment = false;
        }

        result.push(c);
        current_len += char_len;
    }

    result
}

/// Splits text into consecutive chunks of at most `max_octets` octets.
///
/// Used for already-escaped DESCRIPTION values, whose chunks are joined by
/// a bare CRLF with no continuation space. A chunk never ends inside a
/// backslash escape pair such as `\,`; the pair moves to the next chunk.
/// Empty input yields a single empty chunk.
#[must_use]
pub fn chunk_text(text: &str, max_octets: usize) -> Vec<&str> {
    let mut chunks = Vec::new();
    let mut rest = text;

    while rest.len() > max_octets {
        let mut split = max_octets;
        while !rest.is_char_boundary(split) {
            split -= 1;
        }
        let trailing_backslashes = rest.as_bytes()[..split]
            .iter()
            .rev()
            .take_while(|&&b| b == b'\\')
            .count();
        if trailing_backslashes % 2 == 1 {
            split -= 1;
        }
        // A single character (or escape pair) wider than the limit still has
        // to go somewhere.
        if split == 0 {
            split = leading_token_len(rest);
        }
        let (head, tail) = rest.split_at(split);
        chunks.push(head);
        rest = tail;
    }

    if !rest.is_empty() || chunks.is_empty() {
        chunks.push(rest);
    }
    chunks
}

fn leading_token_len(text: &str) -> usize {
    let mut chars = text.chars();
    match chars.next() {
        Some('\\') => 1 + chars.next().map_or(0, char::len_utf8),
        Some(c) => c.len_utf8(),
        None => 0,
    }
}
