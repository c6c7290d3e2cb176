// Copyright (c) Microsoft Corporation.
// Licensed under the MIT License.

use regex::Regex;

use crate::PatternError;
use crate::path::SEPARATOR;

const GLOB_SYNTAX: &str = "glob";
const REGEX_SYNTAX: &str = "regex";

/// The pattern languages understood by [`compile_pattern`] and [`PathMatcher`][crate::PathMatcher].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub(crate) enum Syntax {
    Glob,
    Regex,
}

/// Splits `syntax:pattern` into its two halves, at the first colon.
///
/// The syntax name is matched case-insensitively.
pub(crate) fn split_syntax(syntax_and_pattern: &str) -> Result<(Syntax, &str), PatternError> {
    let missing = || PatternError::MissingSyntax {
        pattern: syntax_and_pattern.to_owned(),
    };

    let (syntax, pattern) = syntax_and_pattern.split_once(':').ok_or_else(missing)?;
    if syntax.is_empty() {
        return Err(missing());
    }

    if syntax.eq_ignore_ascii_case(GLOB_SYNTAX) {
        Ok((Syntax::Glob, pattern))
    } else if syntax.eq_ignore_ascii_case(REGEX_SYNTAX) {
        Ok((Syntax::Regex, pattern))
    } else {
        Err(PatternError::UnsupportedSyntax { syntax: syntax.to_owned() })
    }
}

/// Compiles a `syntax:pattern` string into a regular expression.
///
/// With the `regex` syntax the pattern is compiled as-is. With the `glob` syntax it is first
/// translated by [`glob_to_regex`], so the result is anchored at both ends.
///
/// # Errors
///
/// * [`PatternError::MissingSyntax`] if there is no `syntax:` prefix.
/// * [`PatternError::UnsupportedSyntax`] if the prefix is neither `glob` nor `regex`.
/// * [`PatternError::GlobSyntax`] if the glob is malformed.
/// * [`PatternError::Regex`] if the regular expression does not compile.
///
/// # Examples
///
/// ```
/// let regex = slashpath::compile_pattern("glob:*.java")?;
///
/// assert_eq!(regex.as_str(), r"^[^/]*\.java$");
/// assert!(regex.is_match("Main.java"));
/// assert!(!regex.is_match("src/Main.java"));
/// # Ok::<_, slashpath::PatternError>(())
/// ```
pub fn compile_pattern(syntax_and_pattern: &str) -> Result<Regex, PatternError> {
    let (syntax, pattern) = split_syntax(syntax_and_pattern)?;
    let regex = match syntax {
        Syntax::Glob => Regex::new(&glob_to_regex(pattern)?)?,
        Syntax::Regex => Regex::new(pattern)?,
    };

    tracing::debug!(pattern = syntax_and_pattern, regex = regex.as_str(), "compiled path pattern");
    Ok(regex)
}

/// Translates a glob into the source of an equivalent, anchored regular expression.
///
/// | Glob      | Meaning                                                        |
/// |-----------|----------------------------------------------------------------|
/// | `*`       | any run of characters within one name element                  |
/// | `**`      | any run of characters, crossing name-element boundaries        |
/// | `?`       | exactly one character, not a separator                         |
/// | `[abc]`   | one of the listed characters; `a-z` ranges, `[!...]` negates   |
/// | `{a,b}`   | one of the comma-separated alternatives; groups do not nest    |
/// | `\c`      | the character `c`, literally                                   |
///
/// Character classes never match the separator. Every other character matches itself.
///
/// # Errors
///
/// Returns [`PatternError::GlobSyntax`] carrying the glob and the character offset of the
/// fault for a trailing `\`, a separator or an inverted range inside a class, an unterminated
/// class, a nested group or an unterminated group.
pub fn glob_to_regex(glob: &str) -> Result<String, PatternError> {
    let chars: Vec<char> = glob.chars().collect();
    let mut regex = String::with_capacity(glob.len() * 2 + 2);
    regex.push('^');

    let mut in_group = false;
    let mut i = 0;
    while i < chars.len() {
        let c = chars[i];
        i += 1;

        match c {
            '\\' => {
                let Some(&escaped) = chars.get(i) else {
                    return Err(PatternError::glob("No character to escape", glob, i - 1));
                };
                i += 1;
                push_literal(&mut regex, escaped);
            }
            SEPARATOR => regex.push(c),
            '[' => i = translate_class(&chars, i, glob, &mut regex)?,
            '{' => {
                if in_group {
                    return Err(PatternError::glob("Cannot nest groups", glob, i - 1));
                }
                regex.push_str("(?:(?:");
                in_group = true;
            }
            '}' if in_group => {
                regex.push_str("))");
                in_group = false;
            }
            ',' if in_group => regex.push_str(")|(?:"),
            '*' => {
                if chars.get(i) == Some(&'*') {
                    regex.push_str(".*");
                    i += 1;
                } else {
                    regex.push_str("[^/]*");
                }
            }
            '?' => regex.push_str("[^/]"),
            _ => push_literal(&mut regex, c),
        }
    }

    if in_group {
        return Err(PatternError::glob("Missing '}'", glob, i - 1));
    }

    regex.push('$');
    Ok(regex)
}

/// Translates a bracket expression whose `[` ends just before `i`.
///
/// Returns the index of the first character after the closing `]`.
fn translate_class(chars: &[char], mut i: usize, glob: &str, regex: &mut String) -> Result<usize, PatternError> {
    // Intersect with "not a separator" so that no class can match one.
    regex.push_str("[[^/]&&[");

    if matches!(chars.get(i), Some('!' | '^')) {
        regex.push('^');
        i += 1;
    }
    if chars.get(i) == Some(&'-') {
        regex.push_str("\\-");
        i += 1;
    }

    let mut has_range_start = false;
    let mut last = '\0';
    let mut closed = false;
    while i < chars.len() {
        let c = chars[i];
        i += 1;

        if c == ']' {
            closed = true;
            break;
        }

        if c == SEPARATOR {
            return Err(PatternError::glob("Explicit 'name separator' in class", glob, i - 1));
        }

        if c != '-' {
            push_class_char(regex, c);
            has_range_start = true;
            last = c;
            continue;
        }

        if !has_range_start {
            return Err(PatternError::glob("Invalid range", glob, i - 1));
        }

        let end = chars.get(i).copied();
        i += 1;
        match end {
            Some(']') => {
                regex.push_str("\\-");
                closed = true;
                break;
            }
            None => {
                regex.push_str("\\-");
                break;
            }
            Some(end) => {
                if end < last {
                    return Err(PatternError::glob("Invalid range", glob, i - 3));
                }
                regex.push('-');
                push_class_char(regex, end);
                has_range_start = false;
            }
        }
    }

    if !closed {
        return Err(PatternError::glob("Missing ']'", glob, i - 1));
    }

    regex.push_str("]]");
    Ok(i)
}

fn push_literal(regex: &mut String, c: char) {
    regex.push_str(&regex::escape(c.encode_utf8(&mut [0; 4])));
}

fn push_class_char(regex: &mut String, c: char) {
    if matches!(c, '\\' | '[' | ']' | '&' | '~' | '-' | '^') {
        regex.push('\\');
    }
    regex.push(c);
}
