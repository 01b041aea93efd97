//! `gmplot text` command implementation.

use std::io::Write;
use std::path::{Path, PathBuf};

use clap::Args;
use gmplot_config::{CliSettings, Config};
use gmplot_drawables::{Drawable, MarkerIcons, ScriptWriter, Text};

use crate::error::CliError;

/// Arguments for the text command.
#[derive(Args)]
pub(crate) struct TextArgs {
    /// Latitude of the label.
    #[arg(long, allow_negative_numbers = true)]
    lat: f64,

    /// Longitude of the label.
    #[arg(long, allow_negative_numbers = true)]
    lng: f64,

    /// Text to display.
    #[arg(long)]
    text: String,

    /// Hex color of the text.
    #[arg(long)]
    color: Option<String>,

    /// Digits after the decimal point for the coordinates (overrides config).
    #[arg(short, long)]
    precision: Option<usize>,

    /// Directory holding the marker icons (overrides config).
    #[arg(long)]
    icon_dir: Option<PathBuf>,
}

impl TextArgs {
    /// Execute the text command, writing the script to stdout.
    pub(crate) fn execute(self, config_path: Option<&Path>) -> Result<(), CliError> {
        let cli_settings = CliSettings {
            precision: self.precision,
            icon_dir: self.icon_dir.clone(),
            ..CliSettings::default()
        };
        let config = Config::load(config_path, Some(&cli_settings))?;

        let icons = config
            .drawables_resolved
            .icon_dir
            .as_ref()
            .map_or_else(MarkerIcons::default, MarkerIcons::new);
        let script = self.render(&icons, config.drawables_resolved.precision)?;

        let mut stdout = std::io::stdout().lock();
        stdout.write_all(script.as_bytes())?;
        stdout.flush()?;
        Ok(())
    }

    fn render(&self, icons: &MarkerIcons, precision: usize) -> Result<String, CliError> {
        let mut text = Text::new(icons, self.lat, self.lng, self.text.as_str(), precision)?;
        if let Some(color) = &self.color {
            text = text.with_color(color.as_str());
        }

        let mut writer = ScriptWriter::new();
        text.write(&mut writer);
        Ok(writer.into_string())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn args(color: Option<&str>) -> TextArgs {
        TextArgs {
            lat: 37.771_269,
            lng: -122.511_015,
            text: "Golden Gate Park".to_owned(),
            color: color.map(str::to_owned),
            precision: None,
            icon_dir: None,
        }
    }

    #[test]
    fn test_render_with_bundled_icon() {
        let script = args(Some("#0000FF"))
            .render(&MarkerIcons::default(), 3)
            .unwrap();

        let expected = format!(
            r##"new google.maps.Marker({{
    label: {{
        text: "Golden Gate Park",
        color: "#0000FF",
        fontWeight: "bold"
    }},
    icon: "{}",
    position: new google.maps.LatLng(37.771, -122.511),
    map: map
}});

"##,
            MarkerIcons::default().embeddable("clear").unwrap()
        );
        assert_eq!(script, expected);
    }

    #[test]
    fn test_render_missing_icon_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let err = args(None)
            .render(&MarkerIcons::new(temp_dir.path()), 3)
            .unwrap_err();

        assert!(matches!(err, CliError::Icon(_)));
    }
}
