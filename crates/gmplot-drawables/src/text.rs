//! Text labels drawn as markers with an invisible icon.

use crate::icon::{IconError, MarkerIcons};
use crate::lat_lng::format_lat_lng;
use crate::writer::{Drawable, ScriptWriter};

/// Name of the transparent marker image used behind text labels.
const CLEAR_ICON: &str = "clear";

/// A bold text label at a fixed map position.
///
/// Text and color are written verbatim. Callers must make sure they don't
/// contain a `"` or anything else that would break the emitted script.
#[derive(Clone, Debug)]
pub struct Text {
    position: String,
    text: String,
    color: Option<String>,
    icon: String,
}

impl Text {
    /// Create a label at (`lat`, `lng`), rounded to `precision` digits.
    ///
    /// Reads the clear marker icon from `icons`.
    pub fn new(
        icons: &MarkerIcons,
        lat: f64,
        lng: f64,
        text: impl Into<String>,
        precision: usize,
    ) -> Result<Self, IconError> {
        Ok(Self {
            position: format_lat_lng(lat, lng, precision),
            text: text.into(),
            color: None,
            icon: icons.embeddable(CLEAR_ICON)?,
        })
    }

    /// Set the label's hex color.
    #[must_use]
    pub fn with_color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn color(&self) -> Option<&str> {
        self.color.as_deref()
    }

    /// The formatted `google.maps.LatLng` expression.
    #[must_use]
    pub fn position(&self) -> &str {
        &self.position
    }
}

impl Drawable for Text {
    fn write(&self, w: &mut ScriptWriter) {
        w.write("new google.maps.Marker({");
        w.indent();
        w.write("label: {");
        w.indent();
        w.write(&format!("text: \"{}\",", self.text));
        if let Some(color) = &self.color {
            w.write(&format!("color: \"{color}\","));
        }
        w.write("fontWeight: \"bold\"");
        w.dedent();
        w.write("},");
        w.write(&format!("icon: \"{}\",", self.icon));
        w.write(&format!("position: {},", self.position));
        w.write("map: map");
        w.dedent();
        w.write("});");
        w.blank();
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn icons_with_clear() -> (tempfile::TempDir, MarkerIcons) {
        let temp_dir = tempfile::tempdir().unwrap();
        std::fs::write(temp_dir.path().join("clear.png"), b"png-bytes").unwrap();
        let icons = MarkerIcons::new(temp_dir.path());
        (temp_dir, icons)
    }

    #[test]
    fn test_write_without_color() {
        let (_dir, icons) = icons_with_clear();
        let text = Text::new(&icons, 37.5, -122.25, "Hello", 2).unwrap();

        let mut w = ScriptWriter::new();
        text.write(&mut w);

        let expected = r#"new google.maps.Marker({
    label: {
        text: "Hello",
        fontWeight: "bold"
    },
    icon: "data:image/png;base64,cG5nLWJ5dGVz",
    position: new google.maps.LatLng(37.50, -122.25),
    map: map
});

"#;
        assert_eq!(w.into_string(), expected);
    }

    #[test]
    fn test_accessors() {
        let (_dir, icons) = icons_with_clear();
        let text = Text::new(&icons, 37.5, -122.25, "Hello", 2).unwrap();

        assert_eq!(text.text(), "Hello");
        assert_eq!(text.color(), None);
        assert_eq!(text.position(), "new google.maps.LatLng(37.50, -122.25)");
        assert_eq!(text.with_color("#FF0000").color(), Some("#FF0000"));
    }

    #[test]
    fn test_write_with_color() {
        let (_dir, icons) = icons_with_clear();
        let text = Text::new(&icons, 1.0, 2.0, "Label", 0)
            .unwrap()
            .with_color("#00FF00");

        let mut w = ScriptWriter::new();
        text.write(&mut w);
        let script = w.into_string();

        assert!(script.contains("        text: \"Label\",\n        color: \"#00FF00\",\n"));
        assert!(script.contains("position: new google.maps.LatLng(1, 2),"));
    }

    #[test]
    fn test_text_is_not_escaped() {
        let (_dir, icons) = icons_with_clear();
        let text = Text::new(&icons, 0.0, 0.0, r#"say "hi""#, 1).unwrap();

        let mut w = ScriptWriter::new();
        text.write(&mut w);

        assert!(w.as_str().contains(r#"text: "say "hi"","#));
    }

    #[test]
    fn test_write_respects_outer_indentation() {
        let (_dir, icons) = icons_with_clear();
        let text = Text::new(&icons, 0.0, 0.0, "x", 1).unwrap();

        let mut w = ScriptWriter::new();
        w.indent();
        text.write(&mut w);

        assert!(w.as_str().starts_with("    new google.maps.Marker({\n        label: {\n"));
        assert_eq!(w.depth(), 1);
    }

    #[test]
    fn test_missing_icon_fails_construction() {
        let temp_dir = tempfile::tempdir().unwrap();
        let icons = MarkerIcons::new(temp_dir.path());

        let result = Text::new(&icons, 0.0, 0.0, "x", 1);

        assert!(matches!(result, Err(IconError::NotFound(_))));
    }
}
