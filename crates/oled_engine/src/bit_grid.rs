use crate::{EngineError, EngineResult, Position, Rectangle, Size};

/// A rectangular monochrome pixel surface.
///
/// Cells are stored row-major (`index = y * width + x`) and the buffer
/// always holds exactly `width * height` entries. One `BitGrid` exists per
/// named grid instance; the engine never assumes a single global grid.
#[derive(Clone, Debug, PartialEq)]
pub struct BitGrid {
    size: Size,
    cells: Vec<bool>,
}

impl BitGrid {
    /// Creates a grid with all pixels off.
    pub fn new(size: impl Into<Size>) -> Self {
        let size = size.into();
        BitGrid {
            size,
            cells: vec![false; (size.width * size.height) as usize],
        }
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

    pub fn contains(&self, pos: impl Into<Position>) -> bool {
        let pos = pos.into();
        pos.x >= 0 && pos.x < self.size.width && pos.y >= 0 && pos.y < self.size.height
    }

    fn index(&self, pos: Position) -> Option<usize> {
        if self.contains(pos) {
            Some((pos.y * self.size.width + pos.x) as usize)
        } else {
            None
        }
    }

    pub fn get(&self, pos: impl Into<Position>) -> EngineResult<bool> {
        let pos = pos.into();
        match self.index(pos) {
            Some(idx) => Ok(self.cells[idx]),
            None => Err(EngineError::OutOfBounds { pos, size: self.size }),
        }
    }

    pub fn set(&mut self, pos: impl Into<Position>, value: bool) -> EngineResult<()> {
        let pos = pos.into();
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = value;
                Ok(())
            }
            None => Err(EngineError::OutOfBounds { pos, size: self.size }),
        }
    }

    /// Flips a single pixel and returns its new value.
    pub fn toggle(&mut self, pos: impl Into<Position>) -> EngineResult<bool> {
        let pos = pos.into();
        match self.index(pos) {
            Some(idx) => {
                self.cells[idx] = !self.cells[idx];
                Ok(self.cells[idx])
            }
            None => Err(EngineError::OutOfBounds { pos, size: self.size }),
        }
    }

    /// Unchecked variant of [`get`](Self::get): out-of-range reads as off.
    pub fn is_set(&self, pos: impl Into<Position>) -> bool {
        self.index(pos.into()).is_some_and(|idx| self.cells[idx])
    }

    /// Turns all pixels off, keeping the dimensions.
    pub fn clear(&mut self) {
        self.cells.fill(false);
    }

    pub fn is_empty(&self) -> bool {
        !self.cells.contains(&true)
    }

    pub fn cells(&self) -> &[bool] {
        &self.cells
    }

    /// Replaces the whole cell buffer with a precomputed next state.
    ///
    /// # Panics
    ///
    /// Panics if the buffer length does not match `width * height`.
    pub fn replace_cells(&mut self, cells: Vec<bool>) {
        assert_eq!(cells.len(), self.cells.len(), "cell buffer does not match grid {}", self.size);
        self.cells = cells;
    }

    /// Active pixels in row-major order. The iterator is lazy and can be
    /// restarted by calling this again.
    pub fn active_pixels(&self) -> ActivePixels<'_> {
        ActivePixels { grid: self, idx: 0 }
    }

    /// Bounding rectangle of all active pixels, empty when no pixel is set.
    pub fn active_rect(&self) -> Rectangle {
        let mut min = Position::new(i32::MAX, i32::MAX);
        let mut max = Position::new(i32::MIN, i32::MIN);
        for pos in self.active_pixels() {
            min = min.min(pos);
            max = max.max(pos);
        }
        if max.x >= min.x && max.y >= min.y {
            Rectangle::from_min_size(min, (max.x - min.x + 1, max.y - min.y + 1))
        } else {
            Rectangle::default()
        }
    }
}

pub struct ActivePixels<'a> {
    grid: &'a BitGrid,
    idx: usize,
}

impl Iterator for ActivePixels<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let width = self.grid.size.width as usize;
        while self.idx < self.grid.cells.len() {
            let idx = self.idx;
            self.idx += 1;
            if self.grid.cells[idx] {
                return Some(Position::new((idx % width) as i32, (idx / width) as i32));
            }
        }
        None
    }
}
