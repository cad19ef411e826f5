use clap::Parser;
use log::{info, warn};
use rotation3d::math::{
    error::QuaternionError,
    rotation::{Rotation, RotationAxisAngle, RotationQuaternion},
    vector::Vector3,
};

#[derive(Parser)]
#[command(name = "rotate-vector")]
#[command(about = "Rotates a vector with the axis-angle and the quaternion representations")]
#[command(version)]
struct Cli {
    /// Rotation axis, normalized before use
    #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [1.0, 0.0, 0.0])]
    axis: Vec<f64>,

    /// Rotation angle, in radians unless --degrees is set
    #[arg(long, allow_negative_numbers = true, default_value_t = std::f64::consts::FRAC_PI_4)]
    angle: f64,

    /// Interpret --angle in degrees
    #[arg(long)]
    degrees: bool,

    /// Vector to rotate
    #[arg(long, num_args = 3, allow_negative_numbers = true, default_values_t = [0.4, 5.0, 3.4])]
    vector: Vec<f64>,
}

#[derive(Debug)]
#[allow(dead_code)]
enum DemoError {
    ZeroAxis,
    InvalidRotation(QuaternionError),
}

fn main() -> Result<(), DemoError> {
    env_logger::init();
    let cli = Cli::parse();

    let axis = Vector3::from_slice(&cli.axis);
    if axis.l2_norm() == 0.0 {
        return Err(DemoError::ZeroAxis);
    }
    let axis = axis.normalized();
    let angle = if cli.degrees {
        cli.angle.to_radians()
    } else {
        cli.angle
    };
    let vector = Vector3::from_slice(&cli.vector);
    info!("Rotating {vector:?} by {angle} rad around {axis:?}");

    let axis_angle = RotationAxisAngle::new(&axis, angle);
    let quaternion =
        RotationQuaternion::from_axis_angle(&axis, angle).map_err(DemoError::InvalidRotation)?;

    let rotations: [(&str, &dyn Rotation<f64>); 2] =
        [("axis-angle", &axis_angle), ("quaternion", &quaternion)];
    let results: Vec<Vector3<f64>> = rotations
        .iter()
        .map(|(name, rotation)| {
            let rotated = rotation.rotate(&vector);
            println!("{name}:\n{rotated}");
            rotated
        })
        .collect();

    let distance = (&results[0] - &results[1]).l2_norm();
    if distance > 1e-9 {
        warn!("Representations disagree by {distance}");
    } else {
        info!("Representations agree within {distance}");
    }

    Ok(())
}
