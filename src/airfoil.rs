use crate::errors::ValidationError;
use crate::serialize::point_list;
use ncollide2d::na::Point2;
use serde::Serialize;
use tracing::{debug, warn};

pub mod generate;
pub mod validate;

use validate::{validate, ValidationWarning};

/// Which side of the camber line a surface point is offset to.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    Upper,
    Lower,
}

/// A closed airfoil contour which has passed validation. The points start at the trailing edge,
/// run along the upper surface to the single leading edge point (x == 0), then back along the
/// lower surface to a final point which duplicates the first one.
#[derive(Clone, Debug, Serialize)]
pub struct Airfoil {
    #[serde(serialize_with = "point_list")]
    points: Vec<Point2<f64>>,
    leading_edge: usize,
    warnings: Vec<ValidationWarning>,
}

impl Airfoil {
    /// Validates the points and builds the airfoil. Non-fatal findings are logged and kept on the
    /// airfoil; any fatal one aborts construction.
    pub fn from_points(points: Vec<Point2<f64>>) -> Result<Airfoil, ValidationError> {
        let report = validate(&points)?;
        for w in report.warnings.iter() {
            warn!("{}", w);
        }
        debug!(
            points = points.len(),
            leading_edge = report.leading_edge + 1,
            "airfoil validated"
        );

        Ok(Airfoil {
            points,
            leading_edge: report.leading_edge,
            warnings: report.warnings,
        })
    }

    /// Builds the airfoil from raw numeric rows such as those read from a coordinate file.
    pub fn from_rows(rows: &[Vec<f64>]) -> Result<Airfoil, ValidationError> {
        Airfoil::from_points(validate::points_from_rows(rows)?)
    }

    pub fn points(&self) -> &[Point2<f64>] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Zero-based index of the leading edge point
    pub fn leading_edge(&self) -> usize {
        self.leading_edge
    }

    pub fn leading_edge_point(&self) -> Point2<f64> {
        self.points[self.leading_edge]
    }

    pub fn trailing_edge_point(&self) -> Point2<f64> {
        self.points[0]
    }

    /// The largest x coordinate on the contour, which is where the trailing edge sits
    pub fn max_x(&self) -> f64 {
        self.points
            .iter()
            .map(|p| p.x)
            .fold(f64::NEG_INFINITY, f64::max)
    }

    /// Points from the trailing edge to the leading edge along the upper surface
    pub fn upper(&self) -> &[Point2<f64>] {
        &self.points[..=self.leading_edge]
    }

    /// Points from the leading edge back to the trailing edge along the lower surface
    pub fn lower(&self) -> &[Point2<f64>] {
        &self.points[self.leading_edge..]
    }

    pub fn warnings(&self) -> &[ValidationWarning] {
        &self.warnings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::generate::generate;

    #[test]
    fn test_from_generated_points() {
        let airfoil = Airfoil::from_points(generate("0012", 100, 1.0).unwrap()).unwrap();
        assert_eq!(101, airfoil.len());
        assert_eq!(50, airfoil.leading_edge());
        assert_eq!(51, airfoil.upper().len());
        assert_eq!(51, airfoil.lower().len());
        assert_eq!(0.0, airfoil.leading_edge_point().x);
        assert_eq!(1.0, airfoil.max_x());
        assert!(airfoil.warnings().is_empty());
    }

    #[test]
    fn test_upper_side_comes_first() {
        let airfoil = Airfoil::from_points(generate("2412", 60, 1.0).unwrap()).unwrap();
        assert!(airfoil.upper().iter().skip(1).all(|p| p.y >= 0.0));
        assert!(airfoil.points()[1].y > airfoil.points()[airfoil.len() - 2].y);
    }

    #[test]
    fn test_serializes_points_as_pairs() {
        let rows = vec![vec![1.0, 0.0], vec![0.0, 0.0], vec![1.0, 0.0]];
        let airfoil = Airfoil::from_rows(&rows).unwrap();
        assert_eq!(
            r#"{"points":[[1.0,0.0],[0.0,0.0],[1.0,0.0]],"leading_edge":1,"warnings":[]}"#,
            serde_json::to_string(&airfoil).unwrap()
        );
    }

    #[test]
    fn test_from_rows_rejects_three_columns() {
        let rows = vec![vec![1.0, 0.0, 0.0], vec![0.0, 0.0, 0.0], vec![1.0, 0.0, 0.0]];
        assert!(matches!(
            Airfoil::from_rows(&rows),
            Err(ValidationError::MalformedInput(_))
        ));
    }
}
