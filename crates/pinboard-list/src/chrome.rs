//! Header and footer accounting for the scrollable surface.
//!
//! A variable-height header is measured on screen and reported back after
//! the fact; its height, the caller-supplied footer height, and a fixed
//! margin are added on top of the content height. The addition happens
//! after the layout pass, never inside it.

/// Fixed margin included once a header measurement is known.
pub const HEADER_CHROME_MARGIN: f32 = 60.0;

/// Extra scrollable height around the grid content.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ListChrome {
    measured_header: Option<f32>,
    footer_height: f32,
}

impl ListChrome {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records the header height reported by the measurement hook.
    pub fn set_measured_header(&mut self, height: f32) {
        self.measured_header = Some(height);
    }

    pub fn set_footer_height(&mut self, height: f32) {
        self.footer_height = height;
    }

    /// Height added on top of the layout's content height: header + footer
    /// + margin. Zero until the header has actually been measured, so an
    /// unmeasured list never reserves phantom space.
    pub fn added_height(&self) -> f32 {
        match self.measured_header {
            Some(header) => header + self.footer_height + HEADER_CHROME_MARGIN,
            None => 0.0,
        }
    }
}
