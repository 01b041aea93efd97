//! Parameter and return value sections.

use std::sync::LazyLock;

use regex::Regex;

use super::{CODE_LITERAL, RewriteError, bookend, is_blank, split_indent, strip_unescaped};

pub const OPTIONAL_MARKER: &str = "Optional:";
pub const PARAMETERS_HEADER: &str = "* **Parameters**";
pub const OPTIONAL_PARAMETERS_HEADER: &str = "* **Optional Parameters**";
pub const RETURNS_HEADER: &str = "* **Returns**";
pub const RETURN_TYPE_HEADER: &str = "* **Return type**";

/// Separates alternatives in a parameter type.
const OR_DELIMITER: &str = " or ";

/// Separates a return type from its description.
const DESCRIPTION_SEPARATOR: &str = " – ";

/// Parameter line: whatever comes before the type (`  * **origin** `), the
/// parenthesized type (`(*(**float**, **float**)*)`) and the description
/// (` – Origin, in latitude/longitude.`).
static PARAMETER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^( *.*? )(\(.*\))( – .*)").unwrap());

/// Fuse every `Optional:` marker with the `* **Parameters**` header below it.
///
/// Only blank lines may separate the two. Anything else stops the fusing with
/// a warning; pairs already fused stay fused.
pub fn fuse_optional_parameters(mut lines: Vec<String>) -> Vec<String> {
    loop {
        let mut optional = None;
        let mut parameters = None;
        for (index, line) in lines.iter().enumerate() {
            if optional.is_some() {
                if line == PARAMETERS_HEADER {
                    parameters = Some(index);
                    break;
                } else if !line.is_empty() {
                    tracing::warn!(line = %line, "Unexpected content after 'Optional' header");
                    break;
                }
            } else if line == OPTIONAL_MARKER {
                optional = Some(index);
            }
        }

        let (Some(optional), Some(parameters)) = (optional, parameters) else {
            break;
        };
        OPTIONAL_PARAMETERS_HEADER.clone_into(&mut lines[optional]);
        lines.drain(optional + 1..=parameters);
    }
    lines
}

/// Format the type of every parameter line as code literals.
///
/// The parentheses around the type are removed and every `or` alternative is
/// wrapped in backticks, so `(*int* or *str*)` becomes `` `int` or `str` ``.
/// Emphasis asterisks are dropped, escaped ones (`\*`) are kept.
pub fn format_parameter_types(mut lines: Vec<String>) -> Vec<String> {
    for line in &mut lines {
        let Some(caps) = PARAMETER_RE.captures(line) else {
            continue;
        };
        let parenthesized = &caps[2];
        let types = strip_unescaped(&parenthesized[1..parenthesized.len() - 1], '*');
        let types = types
            .split(OR_DELIMITER)
            .map(|ty| bookend(ty, CODE_LITERAL))
            .collect::<Vec<_>>()
            .join(OR_DELIMITER);
        let formatted = format!("{}{types}{}", &caps[1], &caps[3]);
        *line = formatted;
    }
    lines
}

/// Fold the `* **Return type**` section into the `* **Returns**` section.
///
/// With a description under `Returns`, the type is prepended to it
/// (`` `int` – A result.``) and the `Return type` section is removed. Without
/// one, the type itself becomes the `Returns` content.
///
/// The last occurrence of each header is used. A `Return type` section without
/// a `Returns` header, or without content, is a fatal error.
pub fn fuse_return_type(mut lines: Vec<String>) -> Result<Vec<String>, RewriteError> {
    let mut returns_header = None;
    let mut return_type_header = None;
    for (index, line) in lines.iter().enumerate() {
        if line == RETURNS_HEADER {
            returns_header = Some(index);
        } else if line == RETURN_TYPE_HEADER {
            return_type_header = Some(index);
        }
    }

    let Some(return_type_header) = return_type_header else {
        return Ok(lines);
    };
    let returns_header = returns_header.ok_or(RewriteError::ReturnTypeWithoutReturns)?;

    // Reaching the `Return type` header means `Returns` has no content.
    let returns_content = lines
        .iter()
        .enumerate()
        .skip(returns_header + 1)
        .take_while(|(_, line)| *line != RETURN_TYPE_HEADER)
        .find(|(_, line)| !is_blank(line))
        .map(|(index, _)| index);

    let return_type_content = lines
        .iter()
        .enumerate()
        .skip(return_type_header + 1)
        .find(|(_, line)| !is_blank(line))
        .map(|(index, _)| index)
        .ok_or(RewriteError::ReturnTypeWithoutContent)?;

    if let Some(mut returns_content) = returns_content {
        let return_type = split_indent(&lines[return_type_content]).1.to_owned();
        lines.drain(return_type_header..=return_type_content);
        if returns_content > return_type_content {
            returns_content -= return_type_content - return_type_header + 1;
        }

        let (indent, description) = split_indent(&lines[returns_content]);
        let fused = format!(
            "{indent}{}{DESCRIPTION_SEPARATOR}{description}",
            bookend(&return_type, CODE_LITERAL)
        );
        lines[returns_content] = fused;
    } else {
        let (indent, return_type) = split_indent(&lines[return_type_content]);
        let formatted = format!("{indent}{}", bookend(return_type, CODE_LITERAL));
        lines[return_type_content] = formatted;

        if returns_header < return_type_header {
            lines.drain(returns_header + 1..=return_type_header);
        }
    }
    Ok(lines)
}
