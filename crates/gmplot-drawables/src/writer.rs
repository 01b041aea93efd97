//! Indentation-aware script writer shared by all drawables.

/// A single indentation unit in emitted script.
pub const INDENT: &str = "    ";

/// Something that can serialize itself into map script.
pub trait Drawable {
    /// Write this drawable's script to `w`.
    fn write(&self, w: &mut ScriptWriter);
}

/// Line-oriented script buffer that tracks the current indentation depth.
#[derive(Debug, Default)]
pub struct ScriptWriter {
    buf: String,
    depth: usize,
}

impl ScriptWriter {
    /// Create an empty writer at depth 0.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Write one line at the current indentation.
    pub fn write(&mut self, line: &str) {
        for _ in 0..self.depth {
            self.buf.push_str(INDENT);
        }
        self.buf.push_str(line);
        self.buf.push('\n');
    }

    /// Write an empty line.
    pub fn blank(&mut self) {
        self.buf.push('\n');
    }

    /// Increase indentation by one level.
    pub fn indent(&mut self) {
        self.depth += 1;
    }

    /// Decrease indentation by one level. No-op at depth 0.
    pub fn dedent(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Current indentation depth.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Script written so far.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.buf
    }

    /// Consume the writer and return the script.
    #[must_use]
    pub fn into_string(self) -> String {
        self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indent_and_dedent() {
        let mut w = ScriptWriter::new();
        w.write("a({");
        w.indent();
        w.write("b: 1");
        w.dedent();
        w.write("});");
        w.blank();

        assert_eq!(w.into_string(), "a({\n    b: 1\n});\n\n");
    }

    #[test]
    fn test_dedent_at_zero_is_noop() {
        let mut w = ScriptWriter::new();
        w.dedent();
        assert_eq!(w.depth(), 0);
        w.write("x");
        assert_eq!(w.as_str(), "x\n");
    }

    #[test]
    fn test_blank_ignores_indentation() {
        let mut w = ScriptWriter::new();
        w.indent();
        w.blank();
        assert_eq!(w.as_str(), "\n");
    }
}
