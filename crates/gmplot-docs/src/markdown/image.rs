//! Wiki image embeds.

use std::sync::LazyLock;

use regex::Regex;

use super::MarkdownStyle;

static IMAGE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?s)^!\[image\]\((.*)\)").unwrap());

/// Turn `![image](<link>)` lines into full-width wiki embeds.
///
/// Relative links (starting with `\` or `./`) are resolved against the wiki
/// URL; other links are kept as they are.
pub fn normalize_image_links(mut lines: Vec<String>, style: &MarkdownStyle) -> Vec<String> {
    for line in &mut lines {
        let Some(caps) = IMAGE_RE.captures(line) else {
            continue;
        };
        let link = resolve_link(&caps[1], &style.wiki_url);
        let embed = format!("[[{link} | width = {}]]", style.image_width);
        *line = embed;
    }
    lines
}

fn resolve_link(link: &str, wiki_url: &str) -> String {
    match link.strip_prefix('\\').or_else(|| link.strip_prefix("./")) {
        Some(relative) => format!(
            "{}/{}",
            wiki_url.trim_end_matches('/'),
            relative.trim_start_matches('/')
        ),
        None => link.to_owned(),
    }
}
