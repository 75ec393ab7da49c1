use super::Vector2;

impl Vector2 {
    pub const fn right() -> Self {
        Self::new(1.0, 0.0)
    }

    pub const fn left() -> Self {
        Self::new(-1.0, 0.0)
    }

    pub const fn up() -> Self {
        Self::new(0.0, 1.0)
    }

    pub const fn down() -> Self {
        Self::new(0.0, -1.0)
    }

    /// Planar cross product.
    ///
    /// The scalar result is stored in `x` and `y` is always zero.
    pub fn cross(&self, other: &Self) -> Self {
        Self::new(self.x * other.y - other.x * self.y, 0.0)
    }
}
