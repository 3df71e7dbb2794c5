//! Case-convention detection and conversion for names.
//!
//! `convert` is total and deterministic: any input yields an output, and an
//! input that already satisfies the convention is returned unchanged.

use crate::standards::Casing;

/// Returns `true` when `name` already follows `casing`.
#[must_use]
pub fn is_compliant(name: &str, casing: Casing) -> bool {
    if name.is_empty() {
        return false;
    }

    match casing {
        Casing::Kebab => is_separated(name, '-', is_lower_or_digit),
        Casing::Snake => is_separated(name, '_', is_lower_or_digit),
        Casing::ScreamingSnake => is_separated(name, '_', is_upper_or_digit),
        Casing::Camel => {
            name.chars().all(char::is_alphanumeric) && name.chars().next().is_some_and(is_lower_or_digit)
        }
        Casing::Pascal => {
            name.chars().all(char::is_alphanumeric) && name.chars().next().is_some_and(is_upper_or_digit)
        }
    }
}

/// Converts `name` to `casing`.
///
/// Words are split on any non-alphanumeric character, on a lower-to-upper
/// transition (`myFile`), on a digit-to-upper transition (`v2Api`) and before
/// the last capital of an uppercase run followed by lowercase (`HTMLParser`).
/// Digits stay attached to the word they follow. A name with no alphanumeric
/// characters is returned as is.
#[must_use]
pub fn convert(name: &str, casing: Casing) -> String {
    if is_compliant(name, casing) {
        return name.to_string();
    }

    let words = split_words(name);
    if words.is_empty() {
        return name.to_string();
    }

    match casing {
        Casing::Kebab => join_lower(&words, "-"),
        Casing::Snake => join_lower(&words, "_"),
        Casing::ScreamingSnake => words
            .iter()
            .map(|w| w.to_uppercase())
            .collect::<Vec<_>>()
            .join("_"),
        Casing::Camel => {
            let mut out = words[0].to_lowercase();
            for word in &words[1..] {
                out.push_str(&capitalize(word));
            }
            out
        }
        Casing::Pascal => words.iter().map(|w| capitalize(w)).collect(),
    }
}

/// Splits a file name into its stem and the dot-separated extension chain.
///
/// `my-component.test.ts` → (`my-component`, `.test.ts`). Dot-prefixed names
/// have no stem and are never case-checked.
#[must_use]
pub fn split_stem(file_name: &str) -> (&str, &str) {
    file_name
        .find('.')
        .map_or((file_name, ""), |idx| file_name.split_at(idx))
}

fn split_words(name: &str) -> Vec<String> {
    let chars: Vec<char> = name.chars().collect();
    let mut words = Vec::new();
    let mut current = String::new();

    for (i, &c) in chars.iter().enumerate() {
        if !c.is_alphanumeric() {
            flush(&mut current, &mut words);
            continue;
        }

        if c.is_uppercase() && !current.is_empty() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            let boundary = prev.is_lowercase()
                || prev.is_numeric()
                || (prev.is_uppercase() && next_is_lower);
            if boundary {
                flush(&mut current, &mut words);
            }
        }

        current.push(c);
    }

    flush(&mut current, &mut words);
    words
}

fn flush(current: &mut String, words: &mut Vec<String>) {
    if !current.is_empty() {
        words.push(std::mem::take(current));
    }
}

fn join_lower(words: &[String], sep: &str) -> String {
    words
        .iter()
        .map(|w| w.to_lowercase())
        .collect::<Vec<_>>()
        .join(sep)
}

fn capitalize(word: &str) -> String {
    let lower = word.to_lowercase();
    let mut chars = lower.chars();
    chars.next().map_or_else(String::new, |first| {
        first.to_uppercase().chain(chars).collect()
    })
}

fn is_separated(name: &str, sep: char, is_word_char: fn(char) -> bool) -> bool {
    name.split(sep)
        .all(|segment| !segment.is_empty() && segment.chars().all(is_word_char))
}

fn is_lower_or_digit(c: char) -> bool {
    c.is_numeric() || (c.is_alphabetic() && !c.is_uppercase())
}

fn is_upper_or_digit(c: char) -> bool {
    c.is_numeric() || (c.is_alphabetic() && !c.is_lowercase())
}

#[cfg(test)]
#[path = "casing_tests.rs"]
mod tests;
