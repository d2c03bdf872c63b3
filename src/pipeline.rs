use crate::airfoil::generate::generate;
use crate::airfoil::validate::ValidationWarning;
use crate::airfoil::Airfoil;
use crate::errors::{GeoFoilError, Result};
use crate::geo::profile::MeshProfile;
use crate::geo::GeoDocument;
use crate::io::{read_coordinates, save_coordinates};
use crate::serialize::Point2f64;
use crate::workspace::Workspace;
use chrono::Local;
use ncollide2d::na::Point2;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Where the airfoil points come from
#[derive(Clone, Debug)]
pub enum Source {
    Naca {
        code: String,
        sample_count: usize,
        chord: f64,
    },
    File(PathBuf),
}

impl Source {
    /// The output name used when none is given: `NACA<code>` or the file name up to its first dot
    pub fn default_name(&self) -> String {
        match self {
            Source::Naca { code, .. } => format!("NACA{}", code),
            Source::File(path) => path
                .file_name()
                .and_then(|n| n.to_str())
                .and_then(|n| n.split('.').next())
                .filter(|n| !n.is_empty())
                .unwrap_or("airfoil")
                .to_string(),
        }
    }
}

/// What a run produced, printed by the command line tool when asked for JSON
#[derive(Debug, Serialize)]
pub struct RunSummary {
    pub name: String,
    pub profile: &'static str,
    pub points: usize,
    pub leading_edge: usize,
    pub upper_points: usize,
    pub lower_points: usize,

    #[serde(with = "Point2f64")]
    pub leading_edge_point: Point2<f64>,

    #[serde(with = "Point2f64")]
    pub trailing_edge_point: Point2<f64>,

    pub warnings: Vec<ValidationWarning>,
    pub geo: PathBuf,
    pub dat: Option<PathBuf>,
}

/// Generates or reads an airfoil, validates it and writes its files into the workspace. Nothing
/// is written when the shape code or the points are rejected.
pub struct Pipeline {
    workspace: Workspace,
    profile: MeshProfile,
    timestamp: bool,
}

impl Pipeline {
    pub fn new(workspace: Workspace, profile: MeshProfile) -> Self {
        Pipeline {
            workspace,
            profile,
            timestamp: true,
        }
    }

    /// Leaves the generation date out of the written documents
    pub fn without_timestamp(mut self) -> Self {
        self.timestamp = false;
        self
    }

    pub fn profile(&self) -> &MeshProfile {
        &self.profile
    }

    pub fn run(&self, source: &Source, name: Option<&str>) -> Result<RunSummary> {
        let name = name.map(str::to_string).unwrap_or_else(|| source.default_name());

        let (airfoil, dat) = match source {
            Source::Naca {
                code,
                sample_count,
                chord,
            } => {
                let airfoil = Airfoil::from_points(generate(code, *sample_count, *chord)?)?;

                let dat_name = format!("NACA{}", code);
                self.workspace.prepare(&dat_name)?;
                let dat = self.workspace.dat_path(&dat_name);
                save_coordinates(airfoil.points(), &dat)?;
                (airfoil, Some(dat))
            }
            Source::File(path) => {
                let rows = read_coordinates(path)?;
                (Airfoil::from_rows(&rows)?, None)
            }
        };

        let geo = self.write_geo(&airfoil, &name)?;
        Ok(RunSummary {
            name,
            profile: self.profile.name(),
            points: airfoil.len(),
            leading_edge: airfoil.leading_edge() + 1,
            upper_points: airfoil.upper().len(),
            lower_points: airfoil.lower().len(),
            leading_edge_point: airfoil.leading_edge_point(),
            trailing_edge_point: airfoil.trailing_edge_point(),
            warnings: airfoil.warnings().to_vec(),
            geo,
            dat,
        })
    }

    fn write_geo(&self, airfoil: &Airfoil, name: &str) -> Result<PathBuf> {
        info!("Writing GEO file for airfoil: {}", name);
        let mut doc = GeoDocument::new(airfoil, &self.profile, name);
        if self.timestamp {
            doc = doc.with_timestamp(Local::now());
        }

        self.workspace.prepare(name)?;
        let path = self.workspace.geo_path(name);
        fs::write(&path, doc.to_string()).map_err(|e| GeoFoilError::io(&path, e))?;
        Ok(path)
    }
}

/// Loads a mesh profile, with its parameter overrides, from a JSON file
pub fn load_profile(path: &Path) -> Result<MeshProfile> {
    let text = fs::read_to_string(path).map_err(|e| GeoFoilError::io(path, e))?;
    MeshProfile::from_json(&text).map_err(|source| GeoFoilError::Config {
        path: path.to_path_buf(),
        source,
    })
}
