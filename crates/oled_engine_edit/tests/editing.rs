//! End-to-end scenarios across the engine and edit crates.

use oled_engine::{
    decode_tokens, AdafruitGfx, BitGrid, ByteNotation, ExportFormat, ExportOptions, Position, Size, Ssd1306, DEFAULT_CANVAS_SIZE,
    DEFAULT_CATALOG,
};
use oled_engine_edit::{transform, StampTool};
use pretty_assertions::assert_eq;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn grid_with(size: (i32, i32), pixels: &[(i32, i32)]) -> BitGrid {
    let mut grid = BitGrid::new(size);
    for &pos in pixels {
        grid.set(pos, true).unwrap();
    }
    grid
}

#[test]
fn hex_export_reimports_to_same_pixel_set() {
    init_logging();
    let grid = grid_with((16, 8), &[(0, 0), (9, 3), (15, 7), (4, 2)]);

    // the generated code carries its own 16x8 dimension hint in the header
    let out = AdafruitGfx::default().encode(&grid, &ExportOptions::default()).unwrap();
    let pattern = decode_tokens(&out.code).unwrap();

    assert_eq!(pattern.size, grid.size());
    assert_eq!(pattern.pixels, grid.active_pixels().collect::<Vec<_>>());
}

#[test]
fn binary_export_reimports_to_same_pixel_set() {
    init_logging();
    let grid = grid_with((8, 8), &[(1, 1), (6, 2), (3, 7)]);

    let options = ExportOptions::default().with_notation(ByteNotation::Binary);
    let out = AdafruitGfx::default().encode(&grid, &options).unwrap();
    let pattern = decode_tokens(&out.code).unwrap();

    assert_eq!(pattern.size, grid.size());
    assert_eq!(pattern.pixels, grid.active_pixels().collect::<Vec<_>>());
}

#[test]
fn vertical_export_reimports_to_different_pixels() {
    init_logging();
    // Known lossy round-trip: the importer assumes horizontal bit order,
    // SSD1306 output is vertical. The pattern comes back changed.
    let grid = grid_with((8, 8), &[(1, 0)]);

    let out = Ssd1306::default().encode(&grid, &ExportOptions::default()).unwrap();
    let pattern = decode_tokens(&out.code).unwrap();

    assert_eq!(pattern.size, grid.size());
    assert_ne!(pattern.pixels, grid.active_pixels().collect::<Vec<_>>());
}

#[test]
fn extract_then_paste_reproduces_cropped_pattern() {
    init_logging();
    let source = grid_with((16, 16), &[(5, 5), (6, 7), (8, 5)]);

    let mut tool = StampTool::new();
    let stamp_size = tool.extract(&source).unwrap().size();
    assert_eq!(stamp_size, Size::new(4, 3));

    let mut target = BitGrid::new((4, 3));
    tool.paste(&mut target, (0, 0)).unwrap();

    assert_eq!(
        target.active_pixels().collect::<Vec<_>>(),
        vec![Position::new(0, 0), Position::new(3, 0), Position::new(1, 2)]
    );
}

#[test]
fn workshop_scale_chain_to_main_canvas() {
    init_logging();
    // draw an icon on the 8x8 workshop grid, scale it up the catalog
    // chain, stamp the result onto the main canvas and export it
    let g8 = DEFAULT_CATALOG.get("g8").unwrap();
    let icon = grid_with((8, 8), &[(3, 3), (4, 4)]);

    let mut g16_grid = BitGrid::new((16, 16));
    transform::upscale_into_next(&DEFAULT_CATALOG, g8, &icon, &mut g16_grid).unwrap();
    assert!(g16_grid.is_set((6, 6)));
    assert!(g16_grid.is_set((9, 9)));

    let mut tool = StampTool::new();
    tool.extract(&g16_grid).unwrap();

    let mut canvas = BitGrid::new(DEFAULT_CANVAS_SIZE);
    tool.paste(&mut canvas, (100, 30)).unwrap();
    // the lower 2x2 block of the stamp clips past the 32-pixel canvas height
    assert!(canvas.is_set((100, 30)));
    assert!(canvas.is_set((101, 31)));
    assert_eq!(canvas.active_pixels().count(), 4);

    let out = AdafruitGfx::default()
        .encode(&canvas, &ExportOptions::default().with_symbol_name("bitmap_128x32"))
        .unwrap();
    assert_eq!(out.byte_count, 32 * 16);
    assert!(out.code.contains("bitmap_128x32"));
}

#[test]
fn stamp_from_import_text_pastes_onto_grid() {
    init_logging();
    let mut tool = StampTool::new();
    tool.decode_from_text("/* icon_8x8 */ 0x81, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x81")
        .unwrap();

    let mut grid = BitGrid::new((16, 16));
    tool.paste(&mut grid, (4, 4)).unwrap();

    assert_eq!(
        grid.active_pixels().collect::<Vec<_>>(),
        vec![
            Position::new(4, 4),
            Position::new(11, 4),
            Position::new(4, 11),
            Position::new(11, 11)
        ]
    );
}

#[test]
fn transform_pipeline_preserves_pixel_count() {
    init_logging();
    let mut grid = grid_with((32, 32), &[(1, 2), (30, 5), (16, 16), (0, 31)]);
    let count = grid.active_pixels().count();

    transform::mirror_x(&mut grid);
    transform::rotate90(&mut grid);
    transform::mirror_y(&mut grid);
    transform::rotate90(&mut grid);
    transform::rotate90(&mut grid);

    // mirrors and rotations move pixels, never create or drop them
    assert_eq!(grid.active_pixels().count(), count);
}
