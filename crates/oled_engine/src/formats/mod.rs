mod adafruit_gfx;
pub use adafruit_gfx::*;

mod ssd1306;
pub use ssd1306::*;

mod ascii_art;
pub use ascii_art::*;

mod import;
pub use import::*;

use serde::{Deserialize, Serialize};

use crate::{BitGrid, EngineResult, Size};

/// How a packed byte is rendered in generated source code.
#[derive(Default, Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum ByteNotation {
    /// `0xNN`, two uppercase hex digits.
    #[default]
    Hex,
    /// `0b########`, eight binary digits.
    Binary,
}

/// Byte ordering of a packed bitmap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PackingLayout {
    /// One byte per 8 columns of a row, MSB = leftmost column.
    Horizontal,
    /// One byte per 8 rows of a column within a page, LSB = topmost row.
    Vertical,
}

/// Transient packed form of a bitmap, the encode/decode boundary artifact.
#[derive(Clone, Debug, PartialEq)]
pub struct PackedBytes {
    pub data: Vec<u8>,
    pub layout: PackingLayout,
    pub size: Size,
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ExportOptions {
    /// C symbol name for the generated array. Defaults to `icon_WxH`
    /// (the main canvas passes `bitmap_128x32`).
    pub symbol_name: Option<String>,

    pub notation: ByteNotation,

    /// Glyphs for active/inactive pixels in ASCII art output.
    pub char_on: String,
    pub char_off: String,
}

impl Default for ExportOptions {
    fn default() -> Self {
        ExportOptions {
            symbol_name: None,
            notation: ByteNotation::Hex,
            char_on: "#".to_string(),
            char_off: ".".to_string(),
        }
    }
}

impl ExportOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_symbol_name(mut self, name: impl Into<String>) -> Self {
        self.symbol_name = Some(name.into());
        self
    }

    pub fn with_notation(mut self, notation: ByteNotation) -> Self {
        self.notation = notation;
        self
    }
}

/// An export string plus the byte count reported as memory usage.
#[derive(Clone, Debug, PartialEq)]
pub struct ExportOutput {
    pub code: String,
    pub byte_count: usize,
}

pub trait ExportFormat {
    fn get_name(&self) -> &str;

    fn encode(&self, grid: &BitGrid, options: &ExportOptions) -> EngineResult<ExportOutput>;
}

/// All built-in export formats, in UI order.
pub fn export_formats() -> Vec<Box<dyn ExportFormat>> {
    vec![Box::<AdafruitGfx>::default(), Box::<Ssd1306>::default(), Box::<AsciiArt>::default()]
}

pub(crate) fn bytes_per_row(width: i32) -> usize {
    ((width + 7) / 8) as usize
}

pub(crate) fn symbol_name(options: &ExportOptions, size: Size) -> String {
    options
        .symbol_name
        .clone()
        .unwrap_or_else(|| format!("icon_{}x{}", size.width, size.height))
}
