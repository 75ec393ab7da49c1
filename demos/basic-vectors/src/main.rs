use std::error::Error;

use geomvec::{math::vector::Vector, Vector2, Vector3, Vector4};
use log::{debug, info, warn};

const MAX_SPEED: f64 = 1.5;
const STEP_COUNT: usize = 32;

fn parse_target(args: &[String]) -> Result<Vector3, Box<dyn Error>> {
    match args {
        [] => Ok(Vector3::new(10.0, 0.0, 5.0)),
        [x, y, z] => Ok(Vector3::new(x.parse()?, y.parse()?, z.parse()?)),
        _ => Err(format!("expected 0 or 3 coordinates, got {}", args.len()).into()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::init();
    let args: Vec<String> = std::env::args().skip(1).collect();
    let target = parse_target(&args)?;

    let mut position = Vector3::zero();
    for step in 0..STEP_COUNT {
        let next = Vector3::move_towards(&position, &target, MAX_SPEED);
        let velocity = Vector3::clamp_magnitude(&(next - position), MAX_SPEED);
        debug!("Step {step}: position {position}, velocity {velocity}");
        position += velocity;
        if position.approx_eq(&target) {
            info!("Reached {target} after {} steps", step + 1);
            break;
        }
    }

    let heading = target.normalized();
    if heading.is_zero_length() {
        warn!("Target is the origin, heading is undefined");
    } else {
        info!(
            "Heading {heading}, {:.2} degrees from forward",
            Vector3::angle(&heading, &Vector3::forward())
        );
        info!("Side axis {}", Vector3::cross(&Vector3::up(), &heading).normalized());
    }

    let planar = Vector2::from(target);
    info!(
        "Planar distance {:.3}, planar cross with right {}",
        planar.magnitude(),
        Vector2::cross(&planar, &Vector2::right()).x
    );

    let homogeneous = Vector4::from(target);
    info!("Homogeneous point {homogeneous}");

    Ok(())
}
