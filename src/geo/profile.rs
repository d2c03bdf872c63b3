use serde::{Deserialize, Serialize};

/// Size of the rectangular farfield box, measured from the leading edge upstream, from the
/// trailing edge downstream, and from the chord line up and down.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxDomain {
    pub x_length: f64,
    pub y_length: f64,
}

impl Default for BoxDomain {
    fn default() -> Self {
        BoxDomain {
            x_length: 5.0,
            y_length: 5.0,
        }
    }
}

/// Pivot (on the chord line) and angle in degrees used to rotate the airfoil points
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Rotation {
    pub center: f64,
    pub angle_deg: f64,
}

impl Default for Rotation {
    fn default() -> Self {
        Rotation {
            center: 0.25,
            angle_deg: 0.0,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoxFarfield {
    pub domain: BoxDomain,
    pub farfield_size: f64,
    pub trailing_edge_size: f64,
    pub leading_edge_size: f64,
    pub rotation: Rotation,
}

impl Default for BoxFarfield {
    fn default() -> Self {
        BoxFarfield {
            domain: BoxDomain::default(),
            farfield_size: 1.0,
            trailing_edge_size: 0.01,
            leading_edge_size: 0.01,
            rotation: Rotation::default(),
        }
    }
}

/// Box farfield whose outer mesh size follows from a geometric growth of the trailing edge size
/// over the domain length.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GrowthFarfield {
    pub domain: BoxDomain,
    pub growth_ratio: f64,
    pub trailing_edge_size: f64,
    pub leading_edge_size: f64,
    pub rotation: Rotation,
}

impl Default for GrowthFarfield {
    fn default() -> Self {
        GrowthFarfield {
            domain: BoxDomain::default(),
            growth_ratio: 1.2,
            trailing_edge_size: 0.01,
            leading_edge_size: 0.01,
            rotation: Rotation::default(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoundaryLayer {
    pub thickness: f64,
    pub wall_size: f64,
    pub edge_size: f64,
    pub ratio: f64,
}

impl Default for BoundaryLayer {
    fn default() -> Self {
        BoundaryLayer {
            thickness: 0.040,
            wall_size: 0.0000040,
            edge_size: 0.001,
            ratio: 1.1,
        }
    }
}

/// Circular domain of radius `domain_size` centred at the trailing edge station, with a
/// boundary layer extruded from the airfoil.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ViscousDomain {
    pub domain_size: f64,
    pub farfield_size: f64,
    pub trailing_edge_size: f64,
    pub leading_edge_size: f64,
    pub boundary_layer: BoundaryLayer,
}

impl Default for ViscousDomain {
    fn default() -> Self {
        ViscousDomain {
            domain_size: 50.0,
            farfield_size: 5.0,
            trailing_edge_size: 0.005,
            leading_edge_size: 0.002,
            boundary_layer: BoundaryLayer::default(),
        }
    }
}

/// Selects the farfield topology of the mesh description and carries its parameters. Every
/// parameter ends up as an overridable constant in the written document.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "profile", rename_all = "snake_case")]
pub enum MeshProfile {
    PlainFarfield(BoxFarfield),
    GrowthRatioFarfield(GrowthFarfield),
    ViscousCircularDomain(ViscousDomain),
}

impl Default for MeshProfile {
    fn default() -> Self {
        MeshProfile::PlainFarfield(BoxFarfield::default())
    }
}

impl MeshProfile {
    pub fn plain() -> Self {
        MeshProfile::PlainFarfield(BoxFarfield::default())
    }

    pub fn growth_ratio() -> Self {
        MeshProfile::GrowthRatioFarfield(GrowthFarfield::default())
    }

    pub fn viscous() -> Self {
        MeshProfile::ViscousCircularDomain(ViscousDomain::default())
    }

    pub fn name(&self) -> &'static str {
        match self {
            MeshProfile::PlainFarfield(_) => "plain_farfield",
            MeshProfile::GrowthRatioFarfield(_) => "growth_ratio_farfield",
            MeshProfile::ViscousCircularDomain(_) => "viscous_circular_domain",
        }
    }

    pub fn from_json(text: &str) -> serde_json::Result<Self> {
        serde_json::from_str(text)
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
