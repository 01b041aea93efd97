//! GitHub Wiki `_Sidebar` entries.

use std::io::{self, Write};

/// Indentation unit for nested sidebar entries.
const SIDEBAR_INDENT: &str = "    ";

/// Append one link to a wiki sidebar.
///
/// The link reads `[[name]]`, or `[[name|link]]` when `link` differs from
/// `name`. Top-level entries (`depth == 0`) are bold and followed by an empty
/// line; nested entries become list items indented one unit per level below
/// the first.
///
/// # Examples
///
/// ```
/// use gmplot_docs::write_sidebar_entry;
///
/// let mut sidebar = Vec::new();
/// write_sidebar_entry(&mut sidebar, "Map", Some("Map"), 0).unwrap();
/// write_sidebar_entry(&mut sidebar, "draw", Some("Map.draw"), 1).unwrap();
///
/// assert_eq!(
///     String::from_utf8(sidebar).unwrap(),
///     "**[[Map]]**\n\n* [[draw|Map.draw]]\n"
/// );
/// ```
pub fn write_sidebar_entry(
    w: &mut impl Write,
    name: &str,
    link: Option<&str>,
    depth: usize,
) -> io::Result<()> {
    let link_content = match link {
        Some(link) if link != name => format!("{name}|{link}"),
        _ => name.to_owned(),
    };

    if depth == 0 {
        writeln!(w, "**[[{link_content}]]**")?;
    } else {
        write!(w, "{}* [[{link_content}]]", SIDEBAR_INDENT.repeat(depth - 1))?;
    }
    writeln!(w)
}
