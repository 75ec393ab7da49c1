/// Tolerance used when comparing vectors for approximate equality.
pub const EPSILON: f64 = 0.000_01;

/// Squared-magnitude threshold below which a vector is treated as degenerate.
pub const EPSILON_NORMAL_SQRT: f64 = 1e-15;

pub trait ApproxEq {
    fn approx_eq(&self, other: &Self, tolerance: Self) -> bool;
}

impl ApproxEq for f64 {
    fn approx_eq(&self, other: &Self, tolerance: Self) -> bool {
        (self - other).abs() <= tolerance
    }
}

pub trait IsZero {
    fn is_zero(&self) -> bool;
}

impl IsZero for f64 {
    fn is_zero(&self) -> bool {
        self.abs() < EPSILON_NORMAL_SQRT
    }
}
