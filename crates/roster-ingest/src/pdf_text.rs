//! Name extraction from PDF-derived text.
//!
//! PDF attendance sheets are consumed as already-extracted text (binary PDF
//! parsing stays outside this tool). Extraction output is noisy: page
//! numbers, headers, and layout fragments interleave with the actual names.
//! The heuristic keeps lines that carry a group/cohort token or look like a
//! capitalized first-plus-last name; everything else is dropped.

/// Extract candidate student names from extracted PDF text.
///
/// Lines are trimmed and inner whitespace runs collapsed. A line survives
/// when it is longer than three characters, is not purely numeric, does not
/// mention "page", and either contains a group marker (`-G`, ` G`, `Group`)
/// or two consecutive capitalized words.
#[must_use]
pub fn extract_names_from_text(text: &str) -> Vec<String> {
    text.lines()
        .map(collapse_whitespace)
        .filter(|line| line.len() > 3)
        .filter(|line| !is_numeric_line(line))
        .filter(|line| !line.to_lowercase().contains("page"))
        .filter(|line| looks_like_name(line))
        .collect()
}

fn collapse_whitespace(line: &str) -> String {
    line.split_whitespace().collect::<Vec<_>>().join(" ")
}

fn is_numeric_line(line: &str) -> bool {
    !line.is_empty() && line.chars().all(|ch| ch.is_ascii_digit())
}

fn looks_like_name(line: &str) -> bool {
    line.contains("-G")
        || line.contains(" G")
        || line.contains("Group")
        || has_consecutive_capitalized_words(line)
}

fn is_capitalized_word(token: &str) -> bool {
    let mut chars = token.chars();
    let Some(first) = chars.next() else {
        return false;
    };
    if !first.is_ascii_uppercase() {
        return false;
    }
    let rest: Vec<char> = chars.collect();
    !rest.is_empty() && rest.iter().all(|ch| ch.is_ascii_lowercase())
}

fn has_consecutive_capitalized_words(line: &str) -> bool {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    tokens
        .windows(2)
        .any(|pair| is_capitalized_word(pair[0]) && is_capitalized_word(pair[1]))
}
