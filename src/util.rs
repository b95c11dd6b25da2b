/// Lower-cases a header or method token, skipping the Unicode tables for ASCII input.
pub fn normalize_lower(value: &str) -> String {
    if value.is_ascii() {
        let mut owned = value.to_owned();
        owned.make_ascii_lowercase();
        owned
    } else {
        lowercase_unicode_if_needed(value).unwrap_or_else(|| value.to_owned())
    }
}

pub fn equals_ignore_case(a: &str, b: &str) -> bool {
    if a == b {
        return true;
    }

    if a.is_ascii() && b.is_ascii() {
        return a.eq_ignore_ascii_case(b);
    }

    normalize_lower(a) == normalize_lower(b)
}

/// Splits a comma-separated header value into trimmed, non-empty tokens.
///
/// Malformed input never fails: stray commas and whitespace simply produce
/// no tokens.
pub fn split_header_list(raw: &str) -> impl Iterator<Item = &str> {
    raw.split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
}

pub(crate) fn is_http_token(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| {
            matches!(
                byte,
                b'0'..=b'9'
                    | b'A'..=b'Z'
                    | b'a'..=b'z'
                    | b'!'
                    | b'#'
                    | b'$'
                    | b'%'
                    | b'&'
                    | b'\''
                    | b'*'
                    | b'+'
                    | b'-'
                    | b'.'
                    | b'^'
                    | b'_'
                    | b'`'
                    | b'|'
                    | b'~'
            )
        })
}

fn lowercase_unicode_if_needed(value: &str) -> Option<String> {
    let (idx, _) = value.char_indices().find(|(_, ch)| ch.is_uppercase())?;

    let mut lowered = String::with_capacity(value.len());
    lowered.push_str(&value[..idx]);
    for ch in value[idx..].chars() {
        lowered.extend(ch.to_lowercase());
    }

    Some(lowered)
}

#[cfg(test)]
#[path = "util_test.rs"]
mod util_test;
