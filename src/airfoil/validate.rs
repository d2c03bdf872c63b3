use crate::errors::ValidationError;
use ncollide2d::na::Point2;
use serde::Serialize;
use std::fmt::{Display, Formatter};

/// Non-fatal findings on an otherwise valid contour
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationWarning {
    /// The sample right after the first point lies below the sample right before the last one,
    /// which usually means the lower surface was given first.
    Ordering { second: f64, second_to_last: f64 },
}

impl Display for ValidationWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationWarning::Ordering { .. } => {
                write!(f, "The airfoil is probably not in Selig format.")
            }
        }
    }
}

/// Outcome of a successful validation
#[derive(Clone, Debug, PartialEq)]
pub struct Validated {
    /// Zero-based index of the single point with x == 0
    pub leading_edge: usize,
    pub warnings: Vec<ValidationWarning>,
}

/// Converts raw rows into points, checking that each row holds exactly two finite numbers and that
/// there are enough rows to describe a closed contour.
pub fn points_from_rows(rows: &[Vec<f64>]) -> Result<Vec<Point2<f64>>, ValidationError> {
    if let Some((i, row)) = rows.iter().enumerate().find(|(_, r)| r.len() != 2) {
        return Err(ValidationError::MalformedInput(format!(
            "the input must contain two columns, row {} has {}",
            i + 1,
            row.len()
        )));
    }

    if rows.len() < 3 {
        return Err(ValidationError::MalformedInput(format!(
            "a closed contour needs at least 3 points, got {}",
            rows.len()
        )));
    }

    if let Some(i) = rows.iter().position(|r| !r.iter().all(|v| v.is_finite())) {
        return Err(ValidationError::MalformedInput(format!(
            "row {} has a non-finite coordinate",
            i + 1
        )));
    }

    Ok(rows.iter().map(|r| Point2::new(r[0], r[1])).collect())
}

/// Checks a contour against the closed Selig-like convention. The checks run in a fixed order and
/// the first fatal one found is returned.
pub fn validate(points: &[Point2<f64>]) -> Result<Validated, ValidationError> {
    if points.len() < 3 {
        return Err(ValidationError::MalformedInput(format!(
            "a closed contour needs at least 3 points, got {}",
            points.len()
        )));
    }

    let first = points[0];
    let last = points[points.len() - 1];
    if first.x != last.x {
        return Err(ValidationError::NotClosedContour);
    }

    let leading: Vec<usize> = points
        .iter()
        .enumerate()
        .filter(|(_, p)| p.x == 0.0)
        .map(|(i, _)| i)
        .collect();
    if leading.is_empty() {
        return Err(ValidationError::MissingLeadingEdge);
    }

    if first.y != last.y {
        return Err(ValidationError::BluntTrailingEdge {
            first: first.y,
            last: last.y,
        });
    }

    if leading.len() > 1 {
        return Err(ValidationError::DuplicateLeadingEdge(leading.len()));
    }

    let mut warnings = Vec::new();
    let second = points[1].y;
    let second_to_last = points[points.len() - 2].y;
    if second_to_last > second {
        warnings.push(ValidationWarning::Ordering {
            second,
            second_to_last,
        });
    }

    Ok(Validated {
        leading_edge: leading[0],
        warnings,
    })
}
