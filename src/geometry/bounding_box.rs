use super::Point;

/// The `llx lly urx ury` box of a glyph or of a whole font.
///
/// Glyphs that leave no marks (e.g. `space`) have an all-zero box.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox {
    pub min: Point,
    pub max: Point,
}

impl BoundingBox {
    pub const fn new(min_x: f32, min_y: f32, max_x: f32, max_y: f32) -> Self {
        Self {
            min: Point::new(min_x, min_y),
            max: Point::new(max_x, max_y),
        }
    }

    pub const fn empty() -> Self {
        Self {
            min: Point::origin(),
            max: Point::origin(),
        }
    }

    pub fn from_array([min_x, min_y, max_x, max_y]: [f32; 4]) -> Self {
        Self::new(min_x, min_y, max_x, max_y)
    }

    pub fn to_array(&self) -> [f32; 4] {
        [self.min.x, self.min.y, self.max.x, self.max.y]
    }

    pub fn is_empty(&self) -> bool {
        self.min == Point::origin() && self.max == Point::origin()
    }

    pub fn width(&self) -> f32 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f32 {
        self.max.y - self.min.y
    }
}
