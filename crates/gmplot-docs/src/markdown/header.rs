//! Signature header formatting.

use super::{RewriteError, bookend};

/// Character that makes up a Markdown header level.
const HEADER_CHARACTER: char = '#';

/// Pretty format a Markdown signature header.
///
/// `### class module.function(param1, param2=None)` becomes
/// `_class_ module.**function**(_param1, param2=None_)`.
///
/// Returns `None` if the header isn't shaped like
/// `<#...> [annotation] <scope>.<name>(<params>)`.
///
/// # Examples
///
/// ```
/// use gmplot_docs::markdown::pretty_format_signature_header;
///
/// assert_eq!(
///     pretty_format_signature_header("### class module.function(param1, param2=None)").as_deref(),
///     Some("_class_ module.**function**(_param1, param2=None_)")
/// );
/// assert_eq!(pretty_format_signature_header("# Overview"), None);
/// ```
#[must_use]
pub fn pretty_format_signature_header(header: &str) -> Option<String> {
    let header = header.strip_suffix(')')?;
    let (signature, parameters) = header.split_once('(')?;
    let parameters = bookend(parameters, "_");

    let mut sections = signature.split_whitespace();
    let level = sections.next()?;
    if !level.chars().all(|c| c == HEADER_CHARACTER) {
        return None;
    }

    let rest: Vec<&str> = sections.collect();
    let (annotation, full_name) = match rest.as_slice() {
        [full_name] => (None, *full_name),
        [annotation, full_name] => (Some(*annotation), *full_name),
        _ => return None,
    };

    let (scope, name) = full_name.rsplit_once('.')?;

    let mut formatted = String::new();
    if let Some(annotation) = annotation {
        formatted.push_str(&bookend(annotation, "_"));
        formatted.push(' ');
    }
    formatted.push_str(&format!("{scope}.{}({parameters})", bookend(name, "**")));
    Some(formatted)
}

/// Replace the first line with its pretty formatted signature header.
pub fn format_signature_header(mut lines: Vec<String>) -> Result<Vec<String>, RewriteError> {
    let Some(first) = lines.first_mut() else {
        return Err(RewriteError::EmptyDocument);
    };
    let formatted = pretty_format_signature_header(first)
        .ok_or_else(|| RewriteError::MalformedHeader(first.clone()))?;
    *first = formatted;
    Ok(lines)
}

/// Put a horizontal rule, padded by empty lines, right below the header.
pub fn insert_title_rule(mut lines: Vec<String>) -> Vec<String> {
    let at = lines.len().min(1);
    for (offset, line) in ["", "---", ""].into_iter().enumerate() {
        lines.insert(at + offset, line.to_owned());
    }
    lines
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::markdown::to_lines;

    fn format(header: &str) -> Option<String> {
        pretty_format_signature_header(header)
    }

    #[test]
    fn test_without_annotation() {
        assert_eq!(
            format("## gmplot.GoogleMapPlotter.draw(path)").as_deref(),
            Some("gmplot.GoogleMapPlotter.**draw**(_path_)")
        );
    }

    #[test]
    fn test_empty_parameters() {
        assert_eq!(
            format("# gmplot.GoogleMapPlotter.clear()").as_deref(),
            Some("gmplot.GoogleMapPlotter.**clear**()")
        );
    }

    #[test]
    fn test_parameters_with_nested_parentheses() {
        assert_eq!(
            format("### gmplot.f(origin=(0, 0))").as_deref(),
            Some("gmplot.**f**(_origin=(0, 0)_)")
        );
    }

    #[test]
    fn test_missing_closing_parenthesis() {
        assert_eq!(format("### class gmplot.Map(a"), None);
    }

    #[test]
    fn test_missing_opening_parenthesis() {
        assert_eq!(format("### class gmplot.Map)"), None);
    }

    #[test]
    fn test_invalid_header_level() {
        assert_eq!(format("#x# gmplot.Map()"), None);
        assert_eq!(format("class gmplot.Map()"), None);
        assert_eq!(format("()"), None);
    }

    #[test]
    fn test_wrong_token_count() {
        assert_eq!(format("###()"), None);
        assert_eq!(format("### static class gmplot.Map()"), None);
    }

    #[test]
    fn test_missing_scope_separator() {
        assert_eq!(format("### class Map()"), None);
    }

    #[test]
    fn test_formatted_header_no_longer_parses() {
        let formatted = format("### class gmplot.Map(lat, lng)").unwrap();
        assert_eq!(formatted, "_class_ gmplot.**Map**(_lat, lng_)");
        assert_eq!(format(&formatted), None);
    }

    #[test]
    fn test_format_signature_header_rejects_malformed() {
        let err = format_signature_header(to_lines("Not a header\nbody")).unwrap_err();
        assert_eq!(err, RewriteError::MalformedHeader("Not a header".to_owned()));
    }

    #[test]
    fn test_insert_title_rule() {
        let lines = insert_title_rule(to_lines("header\nbody"));
        assert_eq!(lines, vec!["header", "", "---", "", "body"]);
    }
}
