use crate::{BitGrid, EngineResult, PackedBytes, PackingLayout};

use super::{symbol_name, ExportFormat, ExportOptions, ExportOutput};

/// Packs a grid into SSD1306 page order: the height is split into pages
/// of 8 rows, and each byte holds one column of a page with the topmost
/// row in the LSB. This is bit-order-reversed relative to
/// [`pack_horizontal`](super::pack_horizontal) and not interchangeable
/// with it.
pub fn pack_vertical(grid: &BitGrid) -> PackedBytes {
    let pages = (grid.height() + 7) / 8;
    let mut data = Vec::with_capacity((pages * grid.width()) as usize);

    for page in 0..pages {
        for x in 0..grid.width() {
            let mut byte = 0u8;
            for bit in 0..8i32 {
                let y = page * 8 + bit;
                if y < grid.height() && grid.is_set((x, y)) {
                    byte |= 1 << bit;
                }
            }
            data.push(byte);
        }
    }

    PackedBytes {
        data,
        layout: PackingLayout::Vertical,
        size: grid.size(),
    }
}

/// Native SSD1306 framebuffer export (vertical/paged layout).
///
/// Known lossy round-trip: the universal importer always unpacks with the
/// horizontal convention, so re-importing this format's output produces a
/// different pixel pattern than was exported.
#[derive(Default)]
pub struct Ssd1306 {}

impl ExportFormat for Ssd1306 {
    fn get_name(&self) -> &str {
        "SSD1306 Native"
    }

    fn encode(&self, grid: &BitGrid, options: &ExportOptions) -> EngineResult<ExportOutput> {
        let packed = pack_vertical(grid);
        let literals: Vec<String> = packed.data.iter().map(|byte| format!("0x{byte:02X}")).collect();

        let name = symbol_name(options, grid.size());
        let code = format!(
            "// Native SSD1306 Buffer Format (Vertical)\nconst unsigned char {name}[] PROGMEM = {{\n  {}\n}};",
            literals.join(", ")
        );

        Ok(ExportOutput {
            code,
            byte_count: packed.data.len(),
        })
    }
}
