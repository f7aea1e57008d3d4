use std::collections::HashSet;

use anyhow::Context;
use regex::RegexSet;

/// Pre-compiled glob patterns for efficient matching.
/// Separates exact-match patterns from glob patterns for optimal performance.
#[derive(Debug)]
pub struct CompiledPatterns {
    /// Patterns without wildcards - use fast exact matching
    exact_matches: HashSet<String>,
    /// Compiled regex set for glob patterns with wildcards
    regex_set: Option<RegexSet>,
}

impl CompiledPatterns {
    /// Compile glob patterns into efficient matchers. Empty patterns are ignored.
    /// Returns an error if any glob pattern produces invalid regex.
    pub fn new<I, S>(patterns: I) -> anyhow::Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut exact_matches = HashSet::new();
        let mut regex_patterns = Vec::new();
        let mut sources = Vec::new();

        for pattern in patterns {
            let p = pattern.as_ref();
            if p.is_empty() {
                continue;
            }

            if is_glob(p) {
                match glob_to_regex(p) {
                    Some(regex) => {
                        regex_patterns.push(regex);
                        sources.push(p.to_owned());
                    }
                    None => log::debug!("pattern {p:?} can never match, ignoring it"),
                }
            } else {
                exact_matches.insert(p.to_owned());
            }
        }

        let regex_set = if regex_patterns.is_empty() {
            None
        } else {
            Some(
                RegexSet::new(&regex_patterns)
                    .with_context(|| format!("Invalid exclusion pattern in {sources:?}"))?,
            )
        };

        Ok(Self {
            exact_matches,
            regex_set,
        })
    }

    pub fn is_empty(&self) -> bool {
        self.exact_matches.is_empty() && self.regex_set.is_none()
    }

    /// Check if a name matches any of the compiled patterns.
    #[inline]
    pub fn matches(&self, name: &str) -> bool {
        if self.exact_matches.contains(name) {
            return true;
        }

        if let Some(ref regex_set) = self.regex_set {
            return regex_set.is_match(name);
        }

        false
    }
}

fn is_glob(pattern: &str) -> bool {
    pattern.contains(['*', '?', '['])
}

/// Convert an fnmatch-style glob into an anchored regex string.
/// `*` matches any sequence (path separators included), `?` one character,
/// `[seq]`/`[!seq]` a character class. An unclosed `[` is taken literally.
/// Returns `None` for a pattern that cannot match anything, such as `[z-a]`.
fn glob_to_regex(pattern: &str) -> Option<String> {
    let chars: Vec<char> = pattern.chars().collect();
    let mut regex_pattern = String::with_capacity(pattern.len() * 2 + 6);
    regex_pattern.push_str("(?s)^");

    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;
        match c {
            '*' => regex_pattern.push_str(".*"),
            '?' => regex_pattern.push('.'),
            '[' => match class_end(&chars, i) {
                Some(end) => {
                    if !push_class(&mut regex_pattern, &chars[i..end]) {
                        return None;
                    }
                    i = end + 1;
                }
                None => regex_pattern.push_str("\\["),
            },
            '.' | '+' | '(' | ')' | ']' | '{' | '}' | '^' | '$' | '\\' | '|' => {
                regex_pattern.push('\\');
                regex_pattern.push(c);
            }
            _ => regex_pattern.push(c),
        }
    }

    regex_pattern.push('$');
    Some(regex_pattern)
}

/// Index of the `]` closing a class whose body starts at `start`.
fn class_end(chars: &[char], start: usize) -> Option<usize> {
    let mut j = start;
    if chars.get(j) == Some(&'!') {
        j += 1;
    }
    // a leading `]` is a member, not the terminator
    if chars.get(j) == Some(&']') {
        j += 1;
    }
    while j < chars.len() && chars[j] != ']' {
        j += 1;
    }
    (j < chars.len()).then_some(j)
}

/// Append the regex for a class body. Reversed ranges like `z-a` are
/// dropped; returns `false` if nothing is left for a non-negated class.
fn push_class(out: &mut String, body: &[char]) -> bool {
    let (negated, body) = match body.split_first() {
        Some((&'!', rest)) => (true, rest),
        _ => (false, body),
    };

    let mut members = String::new();
    let mut k = 0;
    while k < body.len() {
        let c = body[k];
        if k + 2 < body.len() && body[k + 1] == '-' {
            let end = body[k + 2];
            k += 3;
            if c <= end {
                push_member(&mut members, c);
                members.push('-');
                push_member(&mut members, end);
            }
        } else {
            push_member(&mut members, c);
            k += 1;
        }
    }

    if members.is_empty() {
        if negated {
            out.push('.');
        }
        return negated;
    }

    out.push('[');
    if negated {
        out.push('^');
    }
    out.push_str(&members);
    out.push(']');
    true
}

fn push_member(out: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '&' | '~' | '^' | '-') {
        out.push('\\');
    }
    out.push(c);
}
