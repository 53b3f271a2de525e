//! Layout data types for booklet sheets

use crate::plan::Half;

/// Axis-aligned rectangle in PDF user space (origin bottom-left, points)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// X position (left edge)
    pub x: f32,
    /// Y position (bottom edge)
    pub y: f32,
    /// Width
    pub width: f32,
    /// Height
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }
}

/// An output sheet handed out by an output document.
///
/// Carries only its position and size; drawing goes through the
/// output document that created it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sheet {
    /// Position of the sheet in its document (0-based)
    pub index: usize,
    pub width: f32,
    pub height: f32,
}

impl Sheet {
    pub fn new(index: usize, width: f32, height: f32) -> Self {
        Self {
            index,
            width,
            height,
        }
    }

    /// `[0, 0, w/2, h]`
    pub fn left_half(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width / 2.0, self.height)
    }

    /// `[w/2, 0, w/2, h]`
    pub fn right_half(&self) -> Rect {
        Rect::new(self.width / 2.0, 0.0, self.width / 2.0, self.height)
    }

    pub fn half(&self, half: Half) -> Rect {
        match half {
            Half::Left => self.left_half(),
            Half::Right => self.right_half(),
        }
    }
}

/// Clockwise display rotation of a source page (`/Rotate`)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageRotation {
    #[default]
    Upright,
    Clockwise90,
    Clockwise180,
    Clockwise270,
}

impl PageRotation {
    /// Map a `/Rotate` value onto a quarter turn; other angles are invalid
    pub fn from_degrees(degrees: i64) -> Option<Self> {
        match degrees.rem_euclid(360) {
            0 => Some(Self::Upright),
            90 => Some(Self::Clockwise90),
            180 => Some(Self::Clockwise180),
            270 => Some(Self::Clockwise270),
            _ => None,
        }
    }

    /// Whether the page is shown with width and height exchanged
    pub fn swaps_axes(self) -> bool {
        matches!(self, Self::Clockwise90 | Self::Clockwise270)
    }
}

/// Where a source page box ends up inside a target region
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PagePlacement {
    /// Transform `[a b c d e f]` from source page space to sheet space
    pub matrix: [f32; 6],
    /// Region the placed page is clipped to
    pub clip: Rect,
}
