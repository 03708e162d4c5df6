use crate::{BitGrid, EngineResult, PackedBytes, PackingLayout};

use super::{bytes_per_row, symbol_name, ByteNotation, ExportFormat, ExportOptions, ExportOutput};

/// Packs a grid row-major with one byte per 8-column group, MSB first.
///
/// Bit 7 of each byte is the leftmost column of its group. When the width
/// is not a multiple of 8 the trailing bits of the last byte per row stay
/// clear but still occupy bit positions, so every row takes
/// `ceil(width / 8)` bytes.
pub fn pack_horizontal(grid: &BitGrid) -> PackedBytes {
    let bpr = bytes_per_row(grid.width());
    let mut data = Vec::with_capacity(grid.height() as usize * bpr);

    for y in 0..grid.height() {
        for b in 0..bpr as i32 {
            let mut byte = 0u8;
            for bit in 0..8i32 {
                let x = b * 8 + bit;
                if x >= grid.width() {
                    break;
                }
                if grid.is_set((x, y)) {
                    byte |= 0x80 >> bit;
                }
            }
            data.push(byte);
        }
    }

    PackedBytes {
        data,
        layout: PackingLayout::Horizontal,
        size: grid.size(),
    }
}

/// Horizontal MSB-first export as consumed by Adafruit GFX `drawBitmap`.
#[derive(Default)]
pub struct AdafruitGfx {}

impl ExportFormat for AdafruitGfx {
    fn get_name(&self) -> &str {
        "Adafruit GFX"
    }

    fn encode(&self, grid: &BitGrid, options: &ExportOptions) -> EngineResult<ExportOutput> {
        let packed = pack_horizontal(grid);
        let literals: Vec<String> = match options.notation {
            ByteNotation::Hex => packed.data.iter().map(|byte| format!("0x{byte:02X}")).collect(),
            ByteNotation::Binary => packed.data.iter().map(|byte| format!("0b{byte:08b}")).collect(),
        };

        let kind = match options.notation {
            ByteNotation::Hex => "HEX Array",
            ByteNotation::Binary => "Binary Array",
        };
        let name = symbol_name(options, grid.size());
        let code = format!(
            "// {kind} ({}x{}) Horizontal (Adafruit GFX Standard)\nconst unsigned char {name}[] PROGMEM = {{\n  {}\n}};",
            grid.width(),
            grid.height(),
            literals.join(", ")
        );

        Ok(ExportOutput {
            code,
            byte_count: packed.data.len(),
        })
    }
}
