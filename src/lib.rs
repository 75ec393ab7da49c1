pub use geomvec_math as math;
pub use geomvec_math::{Vector, Vector2, Vector3, Vector4};
