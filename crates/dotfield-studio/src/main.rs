//! Terminal playground for the dotfield engine.
//!
//! Stands in for the two collaborators the engine deliberately excludes: a
//! scripted tilt source (in place of a real accelerometer) and an ANSI
//! truecolor surface (in place of a GPU renderer). Watching the hue band
//! sweep across the rings is the whole point.

use std::time::Duration;

use dotfield_engine::coords::Vec2;
use dotfield_engine::field::Field;
use dotfield_engine::logging;
use dotfield_engine::motion::{Attitude, TiltConfig, TiltTracker};
use dotfield_engine::time::Cadence;

const CARD_SIZE: Vec2 = Vec2::new(360.0, 240.0);
const GRID_COLS: usize = 72;
const GRID_ROWS: usize = 24;
const FRAMES: u64 = 200;

fn main() {
    logging::init_logging(None);

    println!();
    println!("  ╔════════════════════════════════════════╗");
    println!("  ║        DOTFIELD STUDIO v0.1            ║");
    println!("  ║   ring layout  ·  focal gradients      ║");
    println!("  ╠════════════════════════════════════════╣");
    println!("  ║  Scripted tilt source @ 10 Hz.         ║");
    println!("  ║  {FRAMES} frames, then exit.                ║");
    println!("  ╚════════════════════════════════════════╝");
    println!();
    std::thread::sleep(Duration::from_millis(800));

    let mut field = Field::new(CARD_SIZE);
    let mut tracker = TiltTracker::new(TiltConfig::default());
    let mut cadence = Cadence::from_hz(10.0);

    log::info!(
        "field ready: {} markers, origin focal point ({}, {})",
        field.markers().len(),
        field.origin_focal_point().x,
        field.origin_focal_point().y
    );

    // Hide the cursor while animating.
    print!("\x1b[?25l\x1b[2J");

    let origin = field.origin_focal_point();
    let mut last_drawn = 0;

    for _ in 0..FRAMES {
        let tick = cadence.tick();

        // Scripted "device": a slow figure-eight within the tilt range.
        let attitude = Attitude::new(
            0.1 * (tick.elapsed * 0.9).sin(),
            0.2 * (tick.elapsed * 0.5).sin(),
        );

        let focal = origin + tracker.adjustment(attitude);
        field.update_colors(focal);

        // One draw per completed sweep, never mid-update.
        if field.revision() != last_drawn {
            last_drawn = field.revision();
            draw(&field, focal);
        }
    }

    print!("\x1b[?25h");
    let (hits, misses) = field.cache_stats();
    log::info!(
        "done: {} frames, cache {} entries ({} hits / {} misses)",
        FRAMES,
        field.cache_len(),
        hits,
        misses
    );
}

/// Rasterizes the marker set into a character grid and prints it with
/// 24-bit color escapes, using each marker's gradient start color.
fn draw(field: &Field, focal: Vec2) {
    let cell_w = CARD_SIZE.x / GRID_COLS as f32;
    let cell_h = CARD_SIZE.y / GRID_ROWS as f32;

    let mut grid = vec![None::<(f32, [u8; 4])>; GRID_COLS * GRID_ROWS];

    for marker in field.markers() {
        // Survivors can center slightly outside the card; skip those cells.
        if marker.position.x < 0.0 || marker.position.y < 0.0 {
            continue;
        }
        let col = (marker.position.x / cell_w) as usize;
        let row = (marker.position.y / cell_h) as usize;
        if col >= GRID_COLS || row >= GRID_ROWS {
            continue;
        }

        let cell = &mut grid[row * GRID_COLS + col];
        // Bigger dots win a contested cell.
        if cell.is_none_or(|(size, _)| marker.size > size) {
            *cell = Some((marker.size, marker.gradient.start.to_srgb_u8()));
        }
    }

    let mut frame = String::with_capacity(GRID_COLS * GRID_ROWS * 8);
    frame.push_str("\x1b[H");

    for row in 0..GRID_ROWS {
        for col in 0..GRID_COLS {
            match grid[row * GRID_COLS + col] {
                Some((size, [r, g, b, _])) => {
                    let glyph = if size > 10.0 {
                        '●'
                    } else if size > 6.0 {
                        'o'
                    } else {
                        '·'
                    };
                    frame.push_str(&format!("\x1b[38;2;{r};{g};{b}m{glyph}"));
                }
                None => frame.push(' '),
            }
        }
        frame.push_str("\x1b[0m\n");
    }

    frame.push_str(&format!(
        "\x1b[0m  focal ({:6.1}, {:6.1})   markers {}   cache {}\n",
        focal.x,
        focal.y,
        field.markers().len(),
        field.cache_len()
    ));

    print!("{frame}");
}
