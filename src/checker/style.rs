//! Shallow, line-based style heuristics. Each check reports at most once per file.

use crate::analyzer::{ProjectSnapshot, extension_of};
use crate::standards::{QuoteStyle, StandardsModel, StyleRules};

use super::{Category, Issue, Remedy, Severity};

pub fn check(snapshot: &ProjectSnapshot, standards: &StandardsModel) -> Vec<Issue> {
    let rules = &standards.style_rules;
    let mut issues = Vec::new();

    for file in &snapshot.files {
        let Some(ext) = extension_of(file) else {
            continue;
        };
        if !rules.extensions.contains(&ext) {
            continue;
        }
        let Some(source) = snapshot.sources.get(file) else {
            continue;
        };
        check_source(file, &ext, source, rules, &mut issues);
    }

    issues
}

fn check_source(path: &str, ext: &str, source: &str, rules: &StyleRules, issues: &mut Vec<Issue>) {
    let lines: Vec<&str> = source.lines().collect();
    let reformat = || Remedy::Reformat {
        path: path.to_string(),
    };

    if let Some(line_no) = first_tab_indented(&lines) {
        issues.push(
            Issue::new(
                Category::CodeStyle,
                Severity::Warning,
                format!("`{path}` is indented with tabs (first at line {line_no})"),
            )
            .at(path)
            .with_remedy(reformat()),
        );
    }

    if let Some((line_no, width)) = first_misaligned(&lines, rules.indent_width) {
        issues.push(
            Issue::new(
                Category::CodeStyle,
                Severity::Warning,
                format!(
                    "`{path}` line {line_no} is indented by {width} spaces, not a multiple of {}",
                    rules.indent_width
                ),
            )
            .at(path)
            .with_remedy(reformat()),
        );
    }

    if rules.quote_extensions.contains(ext)
        && let Some(dominant) = dominant_quote(source)
        && dominant != rules.quote_style
    {
        issues.push(
            Issue::new(
                Category::CodeStyle,
                Severity::Info,
                format!(
                    "`{path}` mostly uses {} quotes; the standard is {} quotes",
                    quote_name(dominant),
                    quote_name(rules.quote_style)
                ),
            )
            .at(path)
            .with_remedy(reformat()),
        );
    }

    if rules.require_trailing_comma
        && let Some(line_no) = first_missing_trailing_comma(&lines)
    {
        issues.push(
            Issue::new(
                Category::CodeStyle,
                Severity::Info,
                format!("`{path}` line {line_no} has a multi-line literal without a trailing comma"),
            )
            .at(path)
            .with_remedy(reformat()),
        );
    }
}

/// Lines that continue a `/* ... */` block comment are aligned on ` *` and skipped.
fn is_comment_continuation(line: &str) -> bool {
    line.trim_start().starts_with('*')
}

fn leading_whitespace(line: &str) -> &str {
    let end = line.len() - line.trim_start_matches([' ', '\t']).len();
    &line[..end]
}

fn first_tab_indented(lines: &[&str]) -> Option<usize> {
    lines
        .iter()
        .position(|line| !line.trim().is_empty() && leading_whitespace(line).contains('\t'))
        .map(|idx| idx + 1)
}

fn first_misaligned(lines: &[&str], width: usize) -> Option<(usize, usize)> {
    if width == 0 {
        return None;
    }
    lines.iter().enumerate().find_map(|(idx, line)| {
        if line.trim().is_empty() || is_comment_continuation(line) {
            return None;
        }
        let indent = leading_whitespace(line);
        if indent.contains('\t') || indent.len() % width == 0 {
            return None;
        }
        Some((idx + 1, indent.len()))
    })
}

/// The more frequent of `'` and `"`, ignoring comment lines. Ties and quote-free
/// sources have no dominant style.
fn dominant_quote(source: &str) -> Option<QuoteStyle> {
    let (single, double) = source
        .lines()
        .filter(|line| {
            let t = line.trim_start();
            !t.starts_with("//") && !t.starts_with('*') && !t.starts_with("/*")
        })
        .flat_map(str::chars)
        .fold((0usize, 0usize), |(s, d), c| match c {
            '\'' => (s + 1, d),
            '"' => (s, d + 1),
            _ => (s, d),
        });

    match single.cmp(&double) {
        std::cmp::Ordering::Greater => Some(QuoteStyle::Single),
        std::cmp::Ordering::Less => Some(QuoteStyle::Double),
        std::cmp::Ordering::Equal => None,
    }
}

/// A line holding a value directly followed by a line that closes a multi-line
/// object or array.
fn first_missing_trailing_comma(lines: &[&str]) -> Option<usize> {
    let significant: Vec<(usize, &str)> = lines
        .iter()
        .enumerate()
        .map(|(idx, line)| (idx, line.trim()))
        .filter(|(_, t)| !t.is_empty() && !t.starts_with("//") && !t.starts_with('*'))
        .collect();

    significant.windows(2).find_map(|pair| {
        let (idx, current) = pair[0];
        let (_, next) = pair[1];
        let element = next.starts_with(']') || (next.starts_with('}') && is_property(current));
        let ends_value = !current.ends_with([',', '{', '[', '(', ';', ':']);
        (element && ends_value).then_some(idx + 1)
    })
}

/// `key: value` shaped line, as opposed to a statement at the end of a block.
fn is_property(line: &str) -> bool {
    line.split_once(':').is_some_and(|(key, value)| {
        let key = key.trim().trim_matches(['\'', '"']);
        !key.is_empty()
            && !value.trim().is_empty()
            && key.chars().all(|c| c.is_alphanumeric() || c == '_' || c == '-' || c == '$')
    })
}

const fn quote_name(style: QuoteStyle) -> &'static str {
    match style {
        QuoteStyle::Single => "single",
        QuoteStyle::Double => "double",
    }
}

#[cfg(test)]
#[path = "style_tests.rs"]
mod tests;
