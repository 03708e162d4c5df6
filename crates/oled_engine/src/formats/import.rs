use lazy_static::lazy_static;
use regex::Regex;

use crate::{EngineError, EngineResult, Position, Size, DEFAULT_CANVAS_SIZE};

use super::bytes_per_row;

lazy_static! {
    static ref TOKEN_RE: Regex = Regex::new(r"(0x[0-9A-Fa-f]{2}|0b[01]{8})").unwrap();
    static ref DIMENSION_RE: Regex = Regex::new(r"(\d+)x(\d+)").unwrap();
}

/// Result of a universal import: the resolved dimensions and the active
/// pixel set unpacked from the byte tokens.
#[derive(Clone, Debug, PartialEq)]
pub struct ImportedPattern {
    pub size: Size,
    pub pixels: Vec<Position>,
}

/// Scans free-form text for `0xNN` / `0b########` byte tokens and unpacks
/// them with the horizontal (MSB = leftmost) convention, row-major across
/// `ceil(width / 8)` tokens per row.
///
/// Dimensions come from the first usable `WxH` pattern in the text, or a
/// token-count heuristic otherwise. Once at least one token matched the
/// decode cannot fail; pixels outside the resolved dimensions are dropped.
pub fn decode_tokens(raw: &str) -> EngineResult<ImportedPattern> {
    let tokens: Vec<&str> = TOKEN_RE.find_iter(raw).map(|m| m.as_str()).collect();
    if tokens.is_empty() {
        return Err(EngineError::NoImportTokens);
    }

    let size = resolve_size(raw, tokens.len());
    let bpr = bytes_per_row(size.width);

    let mut pixels = Vec::new();
    let mut clipped = 0usize;
    for (idx, token) in tokens.iter().enumerate() {
        let value = parse_token(token);
        let y = (idx / bpr) as i32;
        let group = (idx % bpr) as i32;
        for bit in 0..8i32 {
            if value & (0x80 >> bit) == 0 {
                continue;
            }
            let pos = Position::new(group * 8 + bit, y);
            if pos.x < size.width && pos.y < size.height {
                pixels.push(pos);
            } else {
                clipped += 1;
            }
        }
    }
    if clipped > 0 {
        log::debug!("import: dropped {clipped} pixels outside {size}");
    }

    Ok(ImportedPattern { size, pixels })
}

fn resolve_size(raw: &str, token_count: usize) -> Size {
    // Hex tokens themselves match the WxH pattern ("0x81" reads as 0x81),
    // so only a hint with two positive dimensions counts.
    for caps in DIMENSION_RE.captures_iter(raw) {
        if let (Ok(width), Ok(height)) = (caps[1].parse::<i32>(), caps[2].parse::<i32>()) {
            if width > 0 && height > 0 {
                return Size::new(width, height);
            }
        }
    }

    // Coarse on purpose; existing exports rely on these exact buckets.
    let size = match token_count {
        0..=8 => Size::new(8, 8),
        9..=32 => Size::new(16, 16),
        33..=128 => Size::new(32, 32),
        _ => DEFAULT_CANVAS_SIZE,
    };
    log::debug!("import: no dimension hint, {token_count} tokens resolve to {size}");
    size
}

fn parse_token(token: &str) -> u8 {
    if let Some(hex) = token.strip_prefix("0x") {
        u8::from_str_radix(hex, 16).unwrap_or(0)
    } else if let Some(binary) = token.strip_prefix("0b") {
        u8::from_str_radix(binary, 2).unwrap_or(0)
    } else {
        0
    }
}
