use glam::Vec2;

/// Axis-aligned rectangle with a top-left origin, in screen coordinates
#[derive(Debug, Clone, Copy)]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    pub fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    pub fn from_origin_size(origin: Vec2, size: Vec2) -> Self {
        Self::new(origin, origin + size)
    }

    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Check if a circle overlaps this rectangle: true when the
    /// distance from the circle center to the nearest point of the
    /// rectangle is at most the radius (touching counts).
    pub fn intersects_circle(&self, center: Vec2, radius: f32) -> bool {
        let closest = Vec2::new(
            center.x.clamp(self.min.x, self.max.x),
            center.y.clamp(self.min.y, self.max.y),
        );
        (center - closest).length_squared() <= radius * radius
    }
}
