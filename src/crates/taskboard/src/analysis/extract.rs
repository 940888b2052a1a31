//! Locating a JSON object embedded in free-form model output.
//!
//! The model is asked for JSON but may wrap it in prose. The scanner
//! walks the text character by character and returns the first
//! brace-balanced object, tracking string literals and escapes so
//! braces inside `reasoning` text cannot truncate or widen the span.

/// Find the first syntactically complete `{...}` object in `text`.
///
/// Returns the exact span, or None when no balanced object exists.
pub fn extract_json_object(text: &str) -> Option<&str> {
    let mut search_from = 0;
    while let Some(rel) = text[search_from..].find('{') {
        let start = search_from + rel;
        if let Some(len) = scan_object(&text[start..]) {
            return Some(&text[start..start + len]);
        }
        search_from = start + 1;
    }
    None
}

/// Length of the balanced object starting at the first byte of `s`,
/// or None when the braces never close.
fn scan_object(s: &str) -> Option<usize> {
    let mut depth: usize = 0;
    let mut in_string = false;
    let mut escaped = false;

    for (i, ch) in s.char_indices() {
        if in_string {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == '"' {
                in_string = false;
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(i + ch.len_utf8());
                }
            }
            _ => {}
        }
    }

    None
}
