//! Airfoil surface generation (NACA 4-digit sections), validation of closed Selig-like contours
//! and emission of parametric gmsh mesh descriptions around them.

pub mod airfoil;
pub mod algorithms;
pub mod errors;
pub mod geo;
pub mod io;
pub mod pipeline;
pub mod serialize;
pub mod workspace;

pub use airfoil::generate::{generate, AirfoilGenerator, Naca4Digit, ShapeCode};
pub use airfoil::Airfoil;
pub use errors::{GenerateError, GeoFoilError, Result, ValidationError};
pub use geo::profile::MeshProfile;
pub use geo::GeoDocument;
