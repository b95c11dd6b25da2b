use crate::case_insensitive_set::CaseInsensitiveSet;
use crate::util::split_header_list;

/// Checks that every token of a raw comma-separated request value is allowed.
///
/// An absent or blank request value always passes, while any requested token
/// fails against an empty allow-list.
pub fn is_subset(requested: Option<&str>, allowed: &CaseInsensitiveSet) -> bool {
    let Some(raw) = requested else {
        return true;
    };

    let mut tokens = split_header_list(raw).peekable();
    if tokens.peek().is_none() {
        return true;
    }

    if allowed.is_empty() {
        return false;
    }

    tokens.all(|token| allowed.contains(token))
}

#[cfg(test)]
#[path = "allow_list_test.rs"]
mod allow_list_test;
