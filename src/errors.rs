use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, GeoFoilError>;

/// Failures raised before any geometry is computed from a shape code.
#[derive(Debug, Error, PartialEq)]
pub enum GenerateError {
    #[error("the NACA code '{0}' does not have 4 digits")]
    InvalidShapeCode(String),

    #[error("the NACA code '{0}' must only contain digits")]
    NonNumericShapeCode(String),

    #[error("at least 4 samples are needed to build an airfoil, got {0}")]
    TooFewSamples(usize),

    #[error("the chord length must be a positive finite number, got {0}")]
    InvalidChord(f64),
}

/// Fatal violations of the closed, Selig-like surface convention.
#[derive(Debug, Error, PartialEq)]
pub enum ValidationError {
    #[error("malformed input: {0}")]
    MalformedInput(String),

    #[error("the airfoil must be in Selig format (first and last points differ)")]
    NotClosedContour,

    #[error("the airfoil has no point on the leading edge (x == 0)")]
    MissingLeadingEdge,

    #[error("the airfoil has a blunt trailing edge (y = {first} at the start, {last} at the end)")]
    BluntTrailingEdge { first: f64, last: f64 },

    #[error("the leading edge point is duplicated ({0} points with x == 0)")]
    DuplicateLeadingEdge(usize),
}

#[derive(Debug, Error)]
pub enum GeoFoilError {
    #[error(transparent)]
    Generate(#[from] GenerateError),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{}:{line}: {detail}", path.display())]
    Parse {
        path: PathBuf,
        line: usize,
        detail: String,
    },

    #[error("failed to load mesh profile from {}", path.display())]
    Config {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("I/O error on {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl GeoFoilError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        GeoFoilError::Io {
            path: path.into(),
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_converts_into_umbrella() {
        let e: GeoFoilError = ValidationError::NotClosedContour.into();
        assert!(matches!(
            e,
            GeoFoilError::Validation(ValidationError::NotClosedContour)
        ));
        assert!(e.to_string().contains("Selig format"));
    }

    #[test]
    fn test_blunt_message_names_both_ends() {
        let e = ValidationError::BluntTrailingEdge {
            first: 0.001,
            last: -0.001,
        };
        assert_eq!(
            "the airfoil has a blunt trailing edge (y = 0.001 at the start, -0.001 at the end)",
            e.to_string()
        );
    }
}
