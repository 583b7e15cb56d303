//! Smoke report
//!
//! Runs a fixed set of scenarios through the math library and renders the
//! results as text. The binary times and prints it; tests check the values.

use m4g_math::transform::{self, transform_point};
use m4g_math::{deg_to_rad, Matrix2, Matrix3, Matrix4, Quaternion, Vector2, Vector3};

use crate::config::SmokeConfig;

/// Results of one pass over the scenarios
#[derive(Debug, Clone, PartialEq)]
pub struct SmokeReport {
    /// Distance from (1, 2) to (4, 6)
    pub distance: f32,
    /// Determinant of `[[1, 2], [3, 4]]`
    pub det2: f32,
    /// Determinant of `[[1, 2, 3], [4, 5, 6], [7, 8, 9]]`
    pub det3: f32,
    /// Whether that singular 3x3 reported itself invertible
    pub singular_invertible: bool,
    /// Inverse of `[[1, 3, 3], [1, 4, 3], [1, 3, 4]]`
    pub inverse: Matrix3<f32>,
    /// The origin after translating by the configured point
    pub translated: Vector3<f32>,
    /// Composite transform of the configured position, rotation and scale
    pub transform: Matrix4<f32>,
    /// Where that transform sends the unit X vector
    pub transformed_right: Vector3<f32>,
    /// Largest difference between the Euler matrix and the quaternion built
    /// from the same angles
    pub quaternion_error: f32,
}

/// Run every scenario once
pub fn run(config: &SmokeConfig) -> SmokeReport {
    log::debug!("distance scenario");
    let distance = Vector2::new(1.0_f32, 2.0).distance(&Vector2::new(4.0, 6.0));

    log::debug!("determinant scenarios");
    let det2 = Matrix2::new([[1.0_f32, 2.0], [3.0, 4.0]]).determinant();
    let counting = Matrix3::from_row_major(&[1.0_f32, 2.0, 3.0, 4.0, 5.0, 6.0, 7.0, 8.0, 9.0]);
    let det3 = counting.determinant();
    let (_, singular_invertible) = counting.inverse();

    log::debug!("inverse scenario");
    let (inverse, _) = Matrix3::new([[1.0_f32, 3.0, 3.0], [1.0, 4.0, 3.0], [1.0, 3.0, 4.0]]).inverse();

    log::debug!("translation scenario");
    let translation: Matrix4<f32> = transform::translate(&config.point);
    let translated = transform_point(&translation, &Vector3::zeros());

    log::debug!("composite transform scenario");
    let rotation = config.rotation_degrees.map(deg_to_rad);
    let composite = transform::transform(&config.position, &rotation, &config.scale);
    let transformed_right = transform_point(&composite, &Vector3::right());

    let euler: Matrix3<f32> = transform::rotate_z::<f32, 3>(rotation.z())
        * transform::rotate_y::<f32, 3>(rotation.y())
        * transform::rotate_x::<f32, 3>(rotation.x());
    let quat = Quaternion::from_euler(rotation.x(), rotation.y(), rotation.z()).to_matrix::<3>();
    let quaternion_error = (euler - quat)
        .into_rows()
        .iter()
        .flatten()
        .fold(0.0_f32, |acc, c| acc.max(c.abs()));

    SmokeReport {
        distance,
        det2,
        det3,
        singular_invertible,
        inverse,
        translated,
        transform: composite,
        transformed_right,
        quaternion_error,
    }
}

impl SmokeReport {
    /// Human-readable report, one entry per scenario
    pub fn render(&self, precision: usize) -> Vec<String> {
        vec![
            format!("distance (1, 2) -> (4, 6): {:.*}", precision, self.distance),
            format!("det [[1, 2], [3, 4]]: {:.*}", precision, self.det2),
            format!(
                "det [[1, 2, 3], [4, 5, 6], [7, 8, 9]]: {:.*} (invertible: {})",
                precision, self.det3, self.singular_invertible
            ),
            format!("inverse of [[1, 3, 3], [1, 4, 3], [1, 3, 4]]:\n{:.*}", precision, self.inverse),
            format!("translated origin: {:.*}", precision, self.translated),
            format!("transform:\n{:.*}", precision, self.transform),
            format!("transform * right: {:.*}", precision, self.transformed_right),
            format!("quaternion vs euler max error: {:.*e}", precision, self.quaternion_error),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 0.0001;

    fn vec_approx_eq(a: Vector3<f32>, b: Vector3<f32>) -> bool {
        (0..3).all(|i| (a[i] - b[i]).abs() < EPSILON)
    }

    #[test]
    fn test_default_report_values() {
        let report = run(&SmokeConfig::default());
        assert_eq!(report.distance, 5.0);
        assert_eq!(report.det2, -2.0);
        assert_eq!(report.det3, 0.0);
        assert!(!report.singular_invertible);
        assert_eq!(
            report.inverse,
            Matrix3::new([[7.0, -3.0, -3.0], [-1.0, 1.0, 0.0], [-1.0, 0.0, 1.0]])
        );
        assert_eq!(report.translated, Vector3::new(1.0, 2.0, 3.0));
        assert!(report.quaternion_error < EPSILON);
    }

    #[test]
    fn test_composite_transform() {
        // Scale 2, quarter turn about Z, then move 10 along X
        let report = run(&SmokeConfig::default());
        assert!(vec_approx_eq(report.transformed_right, Vector3::new(10.0, 2.0, 0.0)));
    }

    #[test]
    fn test_render_uses_precision() {
        let lines = run(&SmokeConfig::default()).render(2);
        assert_eq!(lines[0], "distance (1, 2) -> (4, 6): 5.00");
        assert_eq!(lines[1], "det [[1, 2], [3, 4]]: -2.00");
        assert_eq!(lines[4], "translated origin: vector<3> 1.00 2.00 3.00");
        assert!(lines[3].contains("matrix 3x3\n7.00 -3.00 -3.00"), "got {}", lines[3]);
    }

    #[test]
    fn test_render_error_line_uses_precision() {
        let mut report = run(&SmokeConfig::default());
        report.quaternion_error = 0.000123456;
        let lines = report.render(2);
        assert_eq!(lines[7], "quaternion vs euler max error: 1.23e-4");
        assert_eq!(report.render(0)[7], "quaternion vs euler max error: 1e-4");
    }
}
