//! Screen buffer handed to the redraw handler every frame.

use gridwalk_types::BLANK_CELL;

/// Flat `columns x rows` character buffer, row-major.
///
/// A fresh buffer is allocated for every frame, so nothing drawn in one frame
/// can leak into the next.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScreenBuffer {
    width: u16,
    height: u16,
    cells: Vec<char>,
}

impl ScreenBuffer {
    /// Allocate a buffer with every cell reset to [`BLANK_CELL`].
    pub fn new(width: u16, height: u16) -> Self {
        let len = (width as usize) * (height as usize);
        Self {
            width,
            height,
            cells: vec![BLANK_CELL; len],
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    pub fn cells(&self) -> &[char] {
        &self.cells
    }

    #[inline(always)]
    fn idx(&self, x: u16, y: u16) -> Option<usize> {
        if x >= self.width || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn get(&self, x: u16, y: u16) -> Option<char> {
        self.idx(x, y).map(|i| self.cells[i])
    }

    pub fn set(&mut self, x: u16, y: u16, ch: char) {
        if let Some(i) = self.idx(x, y) {
            self.cells[i] = ch;
        }
    }

    /// One screen row.
    pub fn row(&self, y: u16) -> Option<&[char]> {
        let start = self.idx(0, y)?;
        Some(&self.cells[start..start + self.width as usize])
    }

    /// Copy `chars` into row `y` starting at column `x`, clipped to the buffer.
    pub fn put_chars(&mut self, x: u16, y: u16, chars: &[char]) {
        let Some(start) = self.idx(x, y) else {
            return;
        };
        let room = (self.width - x) as usize;
        let n = chars.len().min(room);
        self.cells[start..start + n].copy_from_slice(&chars[..n]);
    }

    pub fn put_str(&mut self, x: u16, y: u16, s: &str) {
        let mut cx = x;
        for ch in s.chars() {
            if cx >= self.width {
                break;
            }
            self.set(cx, y, ch);
            cx += 1;
        }
    }
}
