//! Beatgrid store inspection tool
//!
//! Dumps every grid in a store file: tempo, first beat, beat count, and
//! whether the stored beats still match a clean regeneration from the grid's
//! own bpm/first-beat (i.e. whether manual corrections were saved).
//!
//! Usage: grid-inspect [store-path]

use anyhow::Result;
use syntax_core::grid::{generate_beats, BeatGrid};
use syntax_core::store::GridStore;

fn main() -> Result<()> {
    env_logger::init();

    let store = match std::env::args().nth(1) {
        Some(path) => GridStore::new(path),
        None => GridStore::open_default(),
    };

    println!("Grid store: {:?}", store.path());

    let ids = store.track_ids()?;
    if ids.is_empty() {
        println!("  (empty)");
        return Ok(());
    }

    for id in ids {
        let Some(grid) = store.load_grid(&id)? else {
            continue;
        };
        print_grid(&grid);
    }

    Ok(())
}

fn print_grid(grid: &BeatGrid) {
    let edited = has_manual_edits(grid);
    let last = grid.beats.last().copied().unwrap_or(0.0);
    println!(
        "  {}: {:.2} BPM, first beat {:.3}s, {} beats to {:.1}s{}",
        grid.track_id,
        grid.bpm,
        grid.first_beat,
        grid.beats.len(),
        last,
        if edited { " (manually edited)" } else { "" }
    );
}

/// Whether the stored beats deviate from a clean regeneration
fn has_manual_edits(grid: &BeatGrid) -> bool {
    let Some(&last) = grid.beats.last() else {
        return false;
    };
    let clean = generate_beats(grid.bpm, grid.first_beat, last);
    if clean.len() != grid.beats.len() {
        return true;
    }
    clean
        .iter()
        .zip(&grid.beats)
        .any(|(a, b)| (a - b).abs() > 1e-6)
}
