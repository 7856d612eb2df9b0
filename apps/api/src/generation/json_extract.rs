//! Locates a JSON object embedded in free-form model output.
//!
//! Models wrap the requested object in commentary or code fences. Instead of a greedy
//! `{ ... }` match (which spans from the first `{` to the last `}` and breaks on a second
//! block), this scans for brace-balanced spans, skipping braces inside string literals,
//! and returns the first span that parses as a JSON object.

use serde_json::{Map, Value};

/// Returns the first balanced `{...}` span in `text` that is a valid JSON object.
pub fn first_json_object(text: &str) -> Option<&str> {
    BraceBlocks::new(text).find(|span| serde_json::from_str::<Map<String, Value>>(span).is_ok())
}

/// Iterator over brace-balanced spans, in order of their opening brace.
struct BraceBlocks<'a> {
    text: &'a str,
    pos: usize,
}

impl<'a> BraceBlocks<'a> {
    fn new(text: &'a str) -> Self {
        Self { text, pos: 0 }
    }
}

impl<'a> Iterator for BraceBlocks<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        while self.pos < self.text.len() {
            let start = self.pos + self.text[self.pos..].find('{')?;
            // Advance by one byte only: a rejected outer span may still contain a valid object.
            self.pos = start + 1;
            if let Some(len) = balanced_len(&self.text.as_bytes()[start..]) {
                return Some(&self.text[start..start + len]);
            }
        }
        None
    }
}

/// Length of the balanced block starting at `bytes[0] == b'{'`, or `None` if it never closes.
///
/// Only ASCII bytes are inspected, so the returned length always lands on a char boundary.
fn balanced_len(bytes: &[u8]) -> Option<usize> {
    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (i, &b) in bytes.iter().enumerate() {
        if in_string {
            if escaped {
                escaped = false;
            } else if b == b'\\' {
                escaped = true;
            } else if b == b'"' {
                in_string = false;
            }
            continue;
        }
        match b {
            b'"' => in_string = true,
            b'{' => depth += 1,
            b'}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + 1);
                }
            }
            _ => {}
        }
    }
    None
}
