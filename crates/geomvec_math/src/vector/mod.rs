use std::fmt::{Display, Formatter};
use std::ops::{Add, AddAssign, Div, DivAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use crate::number_traits::{ApproxEq, IsZero, EPSILON};

/// Operations shared by every fixed-dimension vector type.
///
/// Lets code be written once over [`Vector2`], [`Vector3`] and [`Vector4`].
pub trait Vector:
    Copy
    + PartialEq
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<f64, Output = Self>
    + Div<f64, Output = Self>
    + Neg<Output = Self>
{
    const DIMENSIONS: usize;

    /// Returns a vector with every component set to `value`.
    fn splat(value: f64) -> Self;

    fn dot(&self, other: &Self) -> f64;

    fn zero() -> Self {
        Self::splat(0.0)
    }

    fn magnitude_squared(&self) -> f64 {
        self.dot(self)
    }

    fn magnitude(&self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    fn is_zero_length(&self) -> bool {
        self.magnitude_squared().is_zero()
    }

    /// Two vectors are approximately equal when they are at most [`EPSILON`] apart.
    fn approx_eq(&self, other: &Self) -> bool {
        (*self - *other).magnitude().approx_eq(&0.0, EPSILON)
    }
}

macro_rules! struct_vec {
    ($name:ident : $display_fmt:literal, $dimensions:literal, ($($dim:ident : $TY:ty = $default:expr,)*)) => {
        #[must_use]
        #[derive(Clone, Copy, PartialEq, Debug)]
        #[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
        pub struct $name {
            $(pub $dim: $TY,)*
        }

        impl $name {
            pub const fn new($($dim: $TY),*) -> Self {
                Self {
                    $($dim),*
                }
            }

            /// Builds a vector, substituting the default only for absent components.
            ///
            /// An explicit `Some(0.0)` is kept as zero.
            pub fn from_options($($dim: Option<$TY>),*) -> Self {
                Self {
                    $($dim: $dim.unwrap_or($default)),*
                }
            }

            pub const fn splat(value: f64) -> Self {
                Self {
                    $($dim: value),*
                }
            }

            pub const fn zero() -> Self {
                Self::splat(0.0)
            }

            pub const fn one() -> Self {
                Self::splat(1.0)
            }

            pub const fn negative_infinity() -> Self {
                Self::splat(f64::NEG_INFINITY)
            }

            pub const fn positive_infinity() -> Self {
                Self::splat(f64::INFINITY)
            }

            pub fn magnitude(&self) -> f64 {
                self.magnitude_squared().sqrt()
            }

            /// Sum of the squared components.
            pub fn magnitude_squared(&self) -> f64 {
                self.dot(self)
            }

            /// Square root of [`Self::magnitude`], i.e. the fourth root of the sum of squares.
            ///
            /// This is not the squared magnitude, use [`Self::magnitude_squared`] for that.
            pub fn sqr_magnitude(&self) -> f64 {
                self.magnitude().sqrt()
            }

            /// Returns the unit vector with the same direction, or zero for a zero-length vector.
            pub fn normalized(&self) -> Self {
                let magnitude = self.magnitude();
                if magnitude > 0.0 {
                    *self / magnitude
                } else {
                    Self::zero()
                }
            }

            pub fn normalize(&mut self) {
                *self = self.normalized();
            }

            pub fn dot(&self, other: &Self) -> f64 {
                let mut dot = 0.0;
                $(dot += self.$dim * other.$dim;)*
                dot
            }

            pub fn distance(&self, other: &Self) -> f64 {
                (*self - *other).magnitude()
            }

            /// Unsigned angle in degrees between two vectors.
            ///
            /// NaN when either vector has zero length.
            pub fn angle(from: &Self, to: &Self) -> f64 {
                (from.dot(to) / (from.magnitude() * to.magnitude()))
                    .acos()
                    .to_degrees()
            }

            /// Componentwise maximum, ties resolve to `lhs`.
            pub fn max(lhs: &Self, rhs: &Self) -> Self {
                Self {
                    $($dim: if lhs.$dim >= rhs.$dim { lhs.$dim } else { rhs.$dim }),*
                }
            }

            /// Componentwise minimum, ties resolve to `lhs`.
            pub fn min(lhs: &Self, rhs: &Self) -> Self {
                Self {
                    $($dim: if lhs.$dim <= rhs.$dim { lhs.$dim } else { rhs.$dim }),*
                }
            }

            /// Interpolates between `a` and `b`.
            ///
            /// Returns `a` as-is for `t < 0` and `b` as-is for `t > 1`.
            pub fn lerp(a: &Self, b: &Self, t: f64) -> Self {
                if t < 0.0 {
                    *a
                } else if t > 1.0 {
                    *b
                } else {
                    Self::lerp_unclamped(a, b, t)
                }
            }

            pub fn lerp_unclamped(a: &Self, b: &Self, t: f64) -> Self {
                *a + (*b - *a) * t
            }

            /// Scales `vector` down so its magnitude does not exceed `max_length`.
            ///
            /// `max_length` is not validated: a negative value flips the vector.
            pub fn clamp_magnitude(vector: &Self, max_length: f64) -> Self {
                let magnitude = vector.magnitude();
                let multiplier = if magnitude > max_length {
                    max_length / magnitude
                } else {
                    1.0
                };
                *vector * multiplier
            }

            /// Moves `current` towards `target` by at most `max_distance_delta`.
            ///
            /// When both are equal the ratio divides by zero: a positive delta yields `target`,
            /// a negative one `current`, and a zero delta NaN components.
            pub fn move_towards(current: &Self, target: &Self, max_distance_delta: f64) -> Self {
                let distance = target.distance(current);
                Self::lerp(current, target, max_distance_delta / distance)
            }
        }

        impl Vector for $name {
            const DIMENSIONS: usize = $dimensions;

            fn splat(value: f64) -> Self {
                Self {
                    $($dim: value),*
                }
            }

            fn dot(&self, other: &Self) -> f64 {
                let mut dot = 0.0;
                $(dot += self.$dim * other.$dim;)*
                dot
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self {
                    $($dim: $default,)*
                }
            }
        }

        impl_componentwise_op!($name, ($($dim),*), Add::add, AddAssign::add_assign);
        impl_componentwise_op!($name, ($($dim),*), Sub::sub, SubAssign::sub_assign);
        impl_componentwise_op!($name, ($($dim),*), Mul::mul, MulAssign::mul_assign);
        impl_componentwise_op!($name, ($($dim),*), Div::div, DivAssign::div_assign);

        impl Mul<$name> for f64 {
            type Output = $name;

            fn mul(self, rhs: $name) -> Self::Output {
                rhs * self
            }
        }

        impl Neg for $name {
            type Output = Self;

            fn neg(self) -> Self::Output {
                Self {
                    $($dim: -self.$dim),*
                }
            }
        }

        impl Display for $name {
            fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
                write!(f, $display_fmt, $(self.$dim),*)
            }
        }

        impl From<($($TY),*)> for $name {
            fn from(tuple: ($($TY),*)) -> Self {
                let ($($dim),*) = tuple;
                Self {
                    $($dim),*
                }
            }
        }

        impl From<$name> for ($($TY),*) {
            fn from(vector: $name) -> Self {
                ($(vector.$dim),*)
            }
        }

        impl From<[f64; $dimensions]> for $name {
            fn from(value: [f64; $dimensions]) -> Self {
                let [$($dim),*] = value;
                Self {
                    $($dim),*
                }
            }
        }

        impl From<$name> for [f64; $dimensions] {
            fn from(vector: $name) -> Self {
                [$(vector.$dim),*]
            }
        }
    };
}

/// Implements an operator against both a same-type vector (componentwise) and an `f64` (broadcast).
macro_rules! impl_componentwise_op {
    ($name:ident, ($($dim:ident),*), $Op:ident :: $op:ident, $OpAssign:ident :: $op_assign:ident) => {
        impl $Op for $name {
            type Output = Self;

            fn $op(self, rhs: Self) -> Self::Output {
                Self {
                    $($dim: $Op::$op(self.$dim, rhs.$dim)),*
                }
            }
        }

        impl $Op<f64> for $name {
            type Output = Self;

            fn $op(self, rhs: f64) -> Self::Output {
                Self {
                    $($dim: $Op::$op(self.$dim, rhs)),*
                }
            }
        }

        impl $OpAssign for $name {
            fn $op_assign(&mut self, rhs: Self) {
                $($OpAssign::$op_assign(&mut self.$dim, rhs.$dim);)*
            }
        }

        impl $OpAssign<f64> for $name {
            fn $op_assign(&mut self, rhs: f64) {
                $($OpAssign::$op_assign(&mut self.$dim, rhs);)*
            }
        }
    };
}

struct_vec!(Vector2: "({}, {})", 2, (x: f64 = 0.0, y: f64 = 0.0,));
struct_vec!(Vector3: "({}, {}, {})", 3, (x: f64 = 0.0, y: f64 = 0.0, z: f64 = 0.0,));
struct_vec!(Vector4: "({}, {}, {}, {})", 4, (x: f64 = 0.0, y: f64 = 0.0, z: f64 = 0.0, w: f64 = 1.0,));

mod vector2;
mod vector3;
mod vector4;
