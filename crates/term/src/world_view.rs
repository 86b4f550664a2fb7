//! WorldView: maps a `core::World` into a screen buffer.
//!
//! This module is pure (no I/O). It can be unit-tested.

use crate::core::World;
use crate::engine::ScreenBuffer;

/// Screen row the first map row lands on; row 0 holds the status line.
const MAP_TOP: u16 = 1;

/// Lays out one frame: a status line on top, the visible map below it.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct WorldView;

impl WorldView {
    pub fn status_line(fps: u32) -> String {
        format!("Frame rate: {fps}")
    }

    /// Draw the status line and every projected row, clipped to the frame.
    pub fn draw(&self, world: &World, fps: u32, frame: &mut ScreenBuffer) {
        frame.put_str(0, 0, &Self::status_line(fps));

        for (i, row) in world.map().enumerate() {
            let y = MAP_TOP as usize + i;
            if y >= frame.height() as usize {
                break;
            }
            frame.put_chars(0, y as u16, &row);
        }
    }
}
