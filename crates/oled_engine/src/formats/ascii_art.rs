use crate::{BitGrid, EngineResult};

use super::{ExportFormat, ExportOptions, ExportOutput};

/// Row-major glyph-art preview. The reported count is `width * height`
/// logical pixels, not a packed byte size.
#[derive(Default)]
pub struct AsciiArt {}

impl ExportFormat for AsciiArt {
    fn get_name(&self) -> &str {
        "ASCII Art"
    }

    fn encode(&self, grid: &BitGrid, options: &ExportOptions) -> EngineResult<ExportOutput> {
        let on = if options.char_on.is_empty() { "#" } else { &options.char_on };
        let off = if options.char_off.is_empty() { "." } else { &options.char_off };

        let mut lines = Vec::with_capacity(grid.height() as usize);
        for y in 0..grid.height() {
            let mut line = String::new();
            for x in 0..grid.width() {
                line.push_str(if grid.is_set((x, y)) { on } else { off });
            }
            lines.push(format!("   {line}"));
        }

        let code = format!(
            "/*  Visual Preview ({}x{})\n{}\n*/",
            grid.width(),
            grid.height(),
            lines.join("\n")
        );

        Ok(ExportOutput {
            code,
            byte_count: (grid.width() * grid.height()) as usize,
        })
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn test_render() {
        let mut grid = BitGrid::new((4, 2));
        grid.set((0, 0), true).unwrap();
        grid.set((3, 1), true).unwrap();

        let out = AsciiArt::default().encode(&grid, &ExportOptions::default()).unwrap();
        assert_eq!(out.code, "/*  Visual Preview (4x2)\n   #...\n   ...#\n*/");
        assert_eq!(out.byte_count, 8);
    }

    #[test]
    fn test_custom_glyphs() {
        let mut grid = BitGrid::new((2, 1));
        grid.set((1, 0), true).unwrap();

        let mut options = ExportOptions::default();
        options.char_on = "[]".to_string();
        options.char_off = "  ".to_string();

        let out = AsciiArt::default().encode(&grid, &options).unwrap();
        assert!(out.code.contains("     []"));
        assert_eq!(out.byte_count, 2);
    }

    #[test]
    fn test_empty_glyphs_fall_back_to_defaults() {
        let grid = BitGrid::new((2, 1));
        let mut options = ExportOptions::default();
        options.char_on = String::new();
        options.char_off = String::new();

        let out = AsciiArt::default().encode(&grid, &options).unwrap();
        assert!(out.code.contains("   .."));
    }
}
