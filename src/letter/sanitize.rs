//! Best-effort cleanup of the raw service response.
//!
//! Models sometimes wrap the letter in a conversational preamble or markdown
//! code fences despite the instruction text forbidding both. This strips the
//! wrapping without touching the letter body. It is not a validator: the
//! structural rules of the instruction are not checked here.

/// Conversational openers that mark a preamble line (matched case-insensitively).
const PREAMBLE_PREFIXES: [&str; 3] = ["here is", "sure", "i've generated"];

/// Cleans a raw response: drops one leading preamble line, removes code-fence
/// markers, and trims surrounding whitespace.
pub fn sanitize(raw: &str) -> String {
    let text = strip_preamble(raw);
    let text = strip_code_fences(text);
    text.trim().to_string()
}

/// Drops the first line when it opens with a known conversational prefix.
/// Only a complete line (terminated by a newline) is treated as a preamble.
fn strip_preamble(text: &str) -> &str {
    if let Some((first_line, rest)) = text.split_once('\n') {
        let lowered = first_line.to_lowercase();
        if PREAMBLE_PREFIXES
            .iter()
            .any(|prefix| lowered.starts_with(prefix))
        {
            return rest;
        }
    }
    text
}

/// Removes markdown fence markers. A fence followed by a newline consumes the
/// remainder of its line (the language tag); a trailing fence is removed
/// in place.
fn strip_code_fences(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;

    while let Some(idx) = rest.find("```") {
        out.push_str(&rest[..idx]);
        let after = &rest[idx + 3..];
        rest = after
            .find('\n')
            .map_or(after, |newline| &after[newline + 1..]);
    }

    out.push_str(rest);
    out
}
