//! Syntax Deck - session layer tying the grid editor to playback and storage
//!
//! A [`DeckSession`] owns one track's beatgrid editor, its crossfade
//! settings, a handle to the grid store, and the playhead clock that
//! animates the editor views while the track plays.

pub mod clock;
pub mod session;

pub use clock::{PlayheadClock, Tick};
pub use session::DeckSession;
