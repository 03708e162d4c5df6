//! Geometric operators on a [`BitGrid`].
//!
//! Every operator computes a full next-state buffer before applying it,
//! so reads never alias in-progress writes.

use oled_engine::{BitGrid, EngineError, EngineResult, GridCatalog, GridEntry};

/// Flips every pixel.
pub fn invert(grid: &mut BitGrid) {
    let next: Vec<bool> = grid.cells().iter().map(|cell| !cell).collect();
    grid.replace_cells(next);
}

/// Moves all pixels by one step. Pixels shifted past the edge are
/// dropped, not wrapped.
pub fn shift(grid: &mut BitGrid, dx: i32, dy: i32) {
    let width = grid.width();
    let height = grid.height();
    let mut next = vec![false; (width * height) as usize];

    for pos in grid.active_pixels() {
        let nx = pos.x + dx;
        let ny = pos.y + dy;
        if nx >= 0 && nx < width && ny >= 0 && ny < height {
            next[(ny * width + nx) as usize] = true;
        }
    }
    grid.replace_cells(next);
}

/// Mirrors left/right.
pub fn mirror_x(grid: &mut BitGrid) {
    let width = grid.width();
    let mut next = vec![false; grid.cells().len()];
    for pos in grid.active_pixels() {
        next[(pos.y * width + (width - 1 - pos.x)) as usize] = true;
    }
    grid.replace_cells(next);
}

/// Mirrors top/bottom.
pub fn mirror_y(grid: &mut BitGrid) {
    let width = grid.width();
    let height = grid.height();
    let mut next = vec![false; grid.cells().len()];
    for pos in grid.active_pixels() {
        next[((height - 1 - pos.y) * width + pos.x) as usize] = true;
    }
    grid.replace_cells(next);
}

/// Rotates a square grid by 90 degrees, `(x, y) -> (y, w - 1 - x)`.
///
/// Non-square grids cannot hold their own rotation, so the call is a
/// no-op for them; callers are expected to only rotate square catalog
/// entries.
pub fn rotate90(grid: &mut BitGrid) {
    let width = grid.width();
    if width != grid.height() {
        log::warn!("rotate90 needs a square grid, got {}", grid.size());
        return;
    }

    let mut next = vec![false; grid.cells().len()];
    for pos in grid.active_pixels() {
        next[((width - 1 - pos.x) * width + pos.y) as usize] = true;
    }
    grid.replace_cells(next);
}

/// Nearest-neighbor 2x upscale: every source pixel fills a 2x2 block in
/// the target. The target is cleared first and must be exactly double
/// the source in both axes.
pub fn upscale2x(source: &BitGrid, target: &mut BitGrid) -> EngineResult<()> {
    if target.width() != source.width() * 2 || target.height() != source.height() * 2 {
        return Err(EngineError::IncompatibleDimensions {
            source: source.size(),
            target: target.size(),
        });
    }

    target.clear();
    for pos in source.active_pixels() {
        for (ox, oy) in [(0, 0), (1, 0), (0, 1), (1, 1)] {
            target.set((pos.x * 2 + ox, pos.y * 2 + oy), true)?;
        }
    }
    Ok(())
}

/// Catalog-driven upscale: resolves the source entry's upscale target and
/// checks the handed-in target grid against it before scaling.
pub fn upscale_into_next(catalog: &GridCatalog, entry: &GridEntry, source: &BitGrid, target: &mut BitGrid) -> EngineResult<()> {
    let next = catalog.upscale_target(entry)?;
    if target.size() != next.size() {
        return Err(EngineError::IncompatibleDimensions {
            source: source.size(),
            target: target.size(),
        });
    }
    upscale2x(source, target)
}
