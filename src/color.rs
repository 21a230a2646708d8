//! Pen colour cycling around the red, green, blue triangle.

/// An RGB point whose channels always add up to the same total.
///
/// Each [`advance`](Self::advance) moves one unit from one channel to the next,
/// sweeping red to green, green to blue, then blue back to red.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ColorCycle {
    rgb: [u8; 3],
}

impl Default for ColorCycle {
    fn default() -> Self {
        Self::new(u8::MAX)
    }
}

impl ColorCycle {
    /// Starts at pure red of intensity `total`.
    pub fn new(total: u8) -> Self {
        Self { rgb: [total, 0, 0] }
    }

    pub fn rgb(&self) -> [u8; 3] {
        self.rgb
    }

    /// Sum of the three channels, constant across [`advance`](Self::advance).
    pub fn total(&self) -> u16 {
        self.rgb.iter().map(|&c| u16::from(c)).sum()
    }

    /// Steps to the next colour and returns it.
    pub fn advance(&mut self) -> [u8; 3] {
        let [r, g, b] = &mut self.rgb;
        if *r > 0 && *b == 0 {
            *r -= 1;
            *g += 1;
        } else if *g > 0 && *r == 0 {
            *g -= 1;
            *b += 1;
        } else if *b > 0 {
            *b -= 1;
            *r += 1;
        }
        self.rgb
    }
}
