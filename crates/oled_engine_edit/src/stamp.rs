use oled_engine::{decode_tokens, BitGrid, EngineError, EngineResult, Position, Size};

/// A sparse pixel pattern used as the paste clipboard.
///
/// Extracted stamps are normalized so the bounding box starts at the
/// origin; decoded stamps keep their declared dimensions verbatim.
#[derive(Clone, Debug, PartialEq)]
pub struct Stamp {
    size: Size,
    pixels: Vec<Position>,
}

impl Stamp {
    /// Builds a stamp from explicit parts. Fails with `EmptyPattern` when
    /// no pixel is given and drops pixels outside the declared size.
    pub fn new(size: impl Into<Size>, pixels: Vec<Position>) -> EngineResult<Self> {
        if pixels.is_empty() {
            return Err(EngineError::EmptyPattern);
        }
        let size = size.into();
        let pixels = pixels
            .into_iter()
            .filter(|p| p.x >= 0 && p.x < size.width && p.y >= 0 && p.y < size.height)
            .collect::<Vec<_>>();
        if pixels.is_empty() {
            return Err(EngineError::EmptyPattern);
        }
        Ok(Stamp { size, pixels })
    }

    pub fn size(&self) -> Size {
        self.size
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    pub fn pixels(&self) -> &[Position] {
        &self.pixels
    }

    /// Renders the stamp as `0`/`1` rows, one text line per stamp row.
    /// This is the hand-off format for loading a stamp into a grid.
    pub fn to_matrix_string(&self) -> String {
        let width = self.size.width as usize;
        let mut rows = vec![vec![b'0'; width]; self.size.height as usize];
        for pos in &self.pixels {
            rows[pos.y as usize][pos.x as usize] = b'1';
        }
        rows.into_iter()
            .map(|row| String::from_utf8(row).unwrap_or_default())
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Holds the single active stamp: either no stamp or one armed stamp.
/// Arming a new stamp replaces the previous one.
#[derive(Default, Clone, Debug, PartialEq)]
pub struct StampTool {
    current: Option<Stamp>,
}

impl StampTool {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_armed(&self) -> bool {
        self.current.is_some()
    }

    pub fn current(&self) -> Option<&Stamp> {
        self.current.as_ref()
    }

    /// Arms a stamp from the active pixels of a grid, cropped to their
    /// bounding box and normalized to the origin.
    ///
    /// On an empty grid the tool state is unchanged and `EmptyPattern`
    /// is reported.
    pub fn extract(&mut self, grid: &BitGrid) -> EngineResult<&Stamp> {
        let active: Vec<Position> = grid.active_pixels().collect();
        let Some(&first) = active.first() else {
            return Err(EngineError::EmptyPattern);
        };

        let mut min = first;
        let mut max = first;
        for pos in &active {
            min = min.min(*pos);
            max = max.max(*pos);
        }

        let stamp = Stamp {
            size: Size::new(max.x - min.x + 1, max.y - min.y + 1),
            pixels: active.into_iter().map(|pos| pos - min).collect(),
        };
        Ok(self.current.insert(stamp))
    }

    /// Arms a stamp from raw import text via the universal importer. The
    /// declared or inferred dimensions are kept verbatim, without
    /// bounding-box renormalization. On error the tool is unchanged.
    pub fn decode_from_text(&mut self, raw: &str) -> EngineResult<&Stamp> {
        let pattern = decode_tokens(raw)?;
        Ok(self.current.insert(Stamp {
            size: pattern.size,
            pixels: pattern.pixels,
        }))
    }

    /// OR-composites the armed stamp onto the target with its top-left at
    /// `anchor`. Stamp pixels falling outside the target are clipped
    /// silently; pixels the stamp does not cover are never cleared. The
    /// stamp stays armed for repeated stamping.
    pub fn paste(&self, target: &mut BitGrid, anchor: impl Into<Position>) -> EngineResult<()> {
        let Some(stamp) = &self.current else {
            return Err(EngineError::EmptyPattern);
        };
        let anchor = anchor.into();
        for &pixel in stamp.pixels() {
            let pos = anchor + pixel;
            if target.contains(pos) {
                target.set(pos, true)?;
            }
        }
        Ok(())
    }

    /// Discards the armed stamp, if any.
    pub fn cancel(&mut self) -> Option<Stamp> {
        self.current.take()
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn grid_with(size: (i32, i32), pixels: &[(i32, i32)]) -> BitGrid {
        let mut grid = BitGrid::new(size);
        for &pos in pixels {
            grid.set(pos, true).unwrap();
        }
        grid
    }

    #[test]
    fn test_extract_normalizes_to_origin() {
        let grid = grid_with((16, 16), &[(5, 4), (7, 4), (5, 6)]);
        let mut tool = StampTool::new();
        let stamp = tool.extract(&grid).unwrap();

        assert_eq!(stamp.size(), Size::new(3, 3));
        assert_eq!(
            stamp.pixels(),
            &[Position::new(0, 0), Position::new(2, 0), Position::new(0, 2)]
        );
        assert!(tool.is_armed());
    }

    #[test]
    fn test_extract_empty_grid_keeps_state() {
        let mut tool = StampTool::new();
        tool.extract(&grid_with((8, 8), &[(1, 1)])).unwrap();

        let err = tool.extract(&BitGrid::new((8, 8))).unwrap_err();
        assert!(matches!(err, EngineError::EmptyPattern));
        // previous stamp survives the failed extraction
        assert!(tool.is_armed());
        assert_eq!(tool.current().unwrap().size(), Size::new(1, 1));
    }

    #[test]
    fn test_arming_replaces_previous_stamp() {
        let mut tool = StampTool::new();
        tool.extract(&grid_with((8, 8), &[(0, 0), (3, 3)])).unwrap();
        assert_eq!(tool.current().unwrap().size(), Size::new(4, 4));

        tool.extract(&grid_with((8, 8), &[(2, 2)])).unwrap();
        assert_eq!(tool.current().unwrap().size(), Size::new(1, 1));
    }

    #[test]
    fn test_decode_keeps_declared_dimensions() {
        let mut tool = StampTool::new();
        // only one pixel set, but the declared 8x8 frame is authoritative
        let stamp = tool.decode_from_text("8x8 0x00 0x10").unwrap();
        assert_eq!(stamp.size(), Size::new(8, 8));
        assert_eq!(stamp.pixels(), &[Position::new(3, 1)]);
    }

    #[test]
    fn test_decode_failure_keeps_state() {
        let mut tool = StampTool::new();
        tool.extract(&grid_with((8, 8), &[(1, 1)])).unwrap();

        assert!(tool.decode_from_text("no tokens here").is_err());
        assert!(tool.is_armed());
    }

    #[test]
    fn test_paste_or_composites() {
        let mut tool = StampTool::new();
        tool.extract(&grid_with((8, 8), &[(0, 0), (1, 1)])).unwrap();

        let mut target = grid_with((8, 8), &[(4, 3)]);
        tool.paste(&mut target, (3, 3)).unwrap();

        // existing pixel kept, stamp pixels OR-ed in
        assert!(target.is_set((4, 3)));
        assert!(target.is_set((3, 3)));
        assert!(target.is_set((4, 4)));
        // stamp stays armed for repeated stamping
        tool.paste(&mut target, (0, 0)).unwrap();
        assert!(target.is_set((0, 0)));
    }

    #[test]
    fn test_paste_clips_at_border() {
        let mut tool = StampTool::new();
        tool.extract(&grid_with((4, 4), &[(0, 0), (1, 0), (0, 1), (1, 1)])).unwrap();

        let mut target = BitGrid::new((8, 8));
        tool.paste(&mut target, (7, 7)).unwrap();
        assert_eq!(target.active_pixels().collect::<Vec<_>>(), vec![Position::new(7, 7)]);

        tool.paste(&mut target, (-1, -1)).unwrap();
        assert!(target.is_set((0, 0)));
        assert!(!target.is_set((1, 0)));
    }

    #[test]
    fn test_paste_without_stamp() {
        let tool = StampTool::new();
        let mut target = BitGrid::new((8, 8));
        assert!(matches!(tool.paste(&mut target, (0, 0)), Err(EngineError::EmptyPattern)));
    }

    #[test]
    fn test_cancel() {
        let mut tool = StampTool::new();
        tool.extract(&grid_with((8, 8), &[(0, 0)])).unwrap();
        assert!(tool.cancel().is_some());
        assert!(!tool.is_armed());
        assert!(tool.cancel().is_none());
    }

    #[test]
    fn test_matrix_string() {
        let stamp = Stamp::new((3, 2), vec![Position::new(0, 0), Position::new(2, 1)]).unwrap();
        assert_eq!(stamp.to_matrix_string(), "100\n001");
    }

    #[test]
    fn test_new_rejects_empty_and_clips() {
        assert!(matches!(Stamp::new((3, 3), vec![]), Err(EngineError::EmptyPattern)));
        let stamp = Stamp::new((2, 2), vec![Position::new(0, 0), Position::new(5, 5)]).unwrap();
        assert_eq!(stamp.pixels(), &[Position::new(0, 0)]);
    }
}
