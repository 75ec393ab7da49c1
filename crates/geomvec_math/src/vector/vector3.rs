use super::{Vector2, Vector3};

impl Vector3 {
    pub const fn right() -> Self {
        Self::new(1.0, 0.0, 0.0)
    }

    pub const fn left() -> Self {
        Self::new(-1.0, 0.0, 0.0)
    }

    pub const fn up() -> Self {
        Self::new(0.0, 1.0, 0.0)
    }

    pub const fn down() -> Self {
        Self::new(0.0, -1.0, 0.0)
    }

    pub const fn forward() -> Self {
        Self::new(0.0, 0.0, 1.0)
    }

    pub const fn back() -> Self {
        Self::new(0.0, 0.0, -1.0)
    }

    pub fn cross(&self, other: &Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }
}

impl From<Vector2> for Vector3 {
    fn from(value: Vector2) -> Self {
        Self::new(value.x, value.y, 0.0)
    }
}

impl From<Vector3> for Vector2 {
    fn from(value: Vector3) -> Self {
        Self::new(value.x, value.y)
    }
}
