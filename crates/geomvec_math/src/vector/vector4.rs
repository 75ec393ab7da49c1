use super::{Vector3, Vector4};

/// Extends to homogeneous coordinates as a point (w = 1).
impl From<Vector3> for Vector4 {
    fn from(value: Vector3) -> Self {
        Self::new(value.x, value.y, value.z, 1.0)
    }
}

impl From<Vector4> for Vector3 {
    fn from(value: Vector4) -> Self {
        Self::new(value.x, value.y, value.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_float_eq::*;

    #[test]
    fn vector4_new() {
        let v = Vector4::new(1.0, 2.0, 3.0, 4.0);

        assert_eq!(v.x, 1.0);
        assert_eq!(v.y, 2.0);
        assert_eq!(v.z, 3.0);
        assert_eq!(v.w, 4.0);
    }

    #[test]
    fn default_w_is_one() {
        let vector = Vector4::default();

        assert_eq!(vector.x, 0.0);
        assert_eq!(vector.y, 0.0);
        assert_eq!(vector.z, 0.0);
        assert_eq!(vector.w, 1.0);
    }

    #[test]
    fn from_options() {
        let point = Vector4::from_options(Some(1.0), Some(2.0), Some(3.0), None);
        assert_eq!(point, Vector4::new(1.0, 2.0, 3.0, 1.0));

        let direction = Vector4::from_options(Some(1.0), None, None, Some(0.0));
        assert_eq!(direction, Vector4::new(1.0, 0.0, 0.0, 0.0));
    }

    #[test]
    fn constants() {
        assert_eq!(Vector4::zero(), Vector4::new(0.0, 0.0, 0.0, 0.0));
        assert_eq!(Vector4::one(), Vector4::new(1.0, 1.0, 1.0, 1.0));
        assert!(Vector4::positive_infinity().w.is_infinite());
        assert!(Vector4::negative_infinity().w < 0.0);
    }

    #[test]
    fn magnitude() {
        let v = Vector4::new(1.0, 1.0, 1.0, 1.0);

        assert_eq!(v.magnitude(), 2.0);
        assert_float_absolute_eq!(v.sqr_magnitude(), 2.0_f64.sqrt(), 1e-12);
    }

    #[test]
    fn normalized() {
        let normalized = Vector4::new(2.0, 0.0, 0.0, 2.0).normalized();

        assert_float_absolute_eq!(normalized.x, std::f64::consts::FRAC_1_SQRT_2, 1e-12);
        assert_float_absolute_eq!(normalized.w, std::f64::consts::FRAC_1_SQRT_2, 1e-12);
        assert_float_absolute_eq!(normalized.magnitude(), 1.0, 1e-12);
        assert_eq!(Vector4::zero().normalized(), Vector4::zero());
    }

    #[test]
    fn dot() {
        let a = Vector4::new(1.0, 2.0, 3.0, 4.0);
        let b = Vector4::new(-1.0, 0.5, 2.0, 0.25);

        assert_eq!(Vector4::dot(&a, &b), 7.0);
    }

    #[test]
    fn scalar_broadcast_includes_w() {
        let mut v = Vector4::new(1.0, 2.0, 3.0, 4.0);

        v *= 2.0;
        assert_eq!(v, Vector4::new(2.0, 4.0, 6.0, 8.0));

        v -= 2.0;
        assert_eq!(v, Vector4::new(0.0, 2.0, 4.0, 6.0));

        assert_eq!(v / 2.0, Vector4::new(0.0, 1.0, 2.0, 3.0));
        assert_eq!(v + 1.0, Vector4::new(1.0, 3.0, 5.0, 7.0));
    }

    #[test]
    fn lerp() {
        let a = Vector4::zero();
        let b = Vector4::new(4.0, 8.0, -4.0, 2.0);

        assert_eq!(Vector4::lerp(&a, &b, 0.25), Vector4::new(1.0, 2.0, -1.0, 0.5));
        assert_eq!(Vector4::lerp(&a, &b, 7.0), b);
        assert_eq!(Vector4::lerp(&a, &b, -7.0), a);
    }

    #[test]
    fn clamp_magnitude() {
        let v = Vector4::new(2.0, 2.0, 2.0, 2.0);

        let clamped = Vector4::clamp_magnitude(&v, 1.0);

        assert_eq!(clamped, Vector4::new(0.5, 0.5, 0.5, 0.5));
    }

    #[test]
    fn distance_and_move_towards() {
        let current = Vector4::new(0.0, 0.0, 0.0, 0.0);
        let target = Vector4::new(0.0, 0.0, 0.0, 4.0);

        assert_eq!(current.distance(&target), 4.0);
        assert_eq!(
            Vector4::move_towards(&current, &target, 1.0),
            Vector4::new(0.0, 0.0, 0.0, 1.0)
        );
    }

    #[test]
    fn max_and_min_resolve_ties_to_lhs() {
        let a = Vector4::new(0.0, 1.0, 2.0, 3.0);
        let b = Vector4::new(-0.0, 4.0, 1.0, 3.0);

        let max = Vector4::max(&a, &b);
        let min = Vector4::min(&a, &b);

        assert!(max.x.is_sign_positive());
        assert!(min.x.is_sign_positive());
        assert_eq!(max, Vector4::new(0.0, 4.0, 2.0, 3.0));
        assert_eq!(min, Vector4::new(0.0, 1.0, 1.0, 3.0));
    }

    #[test]
    fn display() {
        let result = format!("{}", Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!("(1, 2, 3, 1)", &result);
    }

    #[test]
    fn from_tuple() {
        let v = Vector4::from((0.0, 1.0, 2.0, 3.0));

        assert_eq!(v.x, 0.0);
        assert_eq!(v.y, 1.0);
        assert_eq!(v.z, 2.0);
        assert_eq!(v.w, 3.0);
    }

    #[test]
    fn vector3_becomes_point() {
        let v = Vector4::from(Vector3::new(1.0, 2.0, 3.0));
        assert_eq!(v, Vector4::new(1.0, 2.0, 3.0, 1.0));
        assert_eq!(Vector3::from(v), Vector3::new(1.0, 2.0, 3.0));
    }
}
