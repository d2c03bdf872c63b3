use crate::errors::{GeoFoilError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Output directory layout. Every airfoil gets its own folder under the root, named after the
/// output name, holding `<name>.geo` and, for generated airfoils, `<name>.dat`.
#[derive(Clone, Debug)]
pub struct Workspace {
    root: PathBuf,
}

impl Workspace {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Workspace { root: root.into() }
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    pub fn airfoil_dir(&self, name: &str) -> PathBuf {
        self.root.join(name)
    }

    pub fn geo_path(&self, name: &str) -> PathBuf {
        self.airfoil_dir(name).join(format!("{}.geo", name))
    }

    pub fn dat_path(&self, name: &str) -> PathBuf {
        self.airfoil_dir(name).join(format!("{}.dat", name))
    }

    /// Creates the folder of an airfoil if it does not exist yet
    pub fn prepare(&self, name: &str) -> Result<PathBuf> {
        let dir = self.airfoil_dir(name);
        fs::create_dir_all(&dir).map_err(|e| GeoFoilError::io(&dir, e))?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout() {
        let ws = Workspace::new("out");
        assert_eq!(Path::new("out/NACA0012/NACA0012.geo"), ws.geo_path("NACA0012"));
        assert_eq!(Path::new("out/NACA0012/NACA0012.dat"), ws.dat_path("NACA0012"));
    }

    #[test]
    fn test_prepare_is_idempotent() {
        let tmp = tempfile::tempdir().unwrap();
        let ws = Workspace::new(tmp.path());
        let dir = ws.prepare("foil").unwrap();
        assert!(dir.is_dir());
        assert_eq!(dir, ws.prepare("foil").unwrap());
    }
}
