//! Writes the parametric mesh description (a gmsh `.geo` document) of an airfoil. The airfoil
//! points and the two airfoil splines are shared by every profile; the constants, the farfield
//! closure, the boundary layer and the physical groups depend on the selected `MeshProfile`.
//!
//! Entity numbering is part of the contract with the downstream mesh tooling: airfoil points use
//! `1..N` and the synthetic farfield entities live at `10000` and above.

use crate::airfoil::Airfoil;
use chrono::{DateTime, Local};
use itertools::Itertools;
use std::fmt::{Display, Formatter, Result};

pub mod profile;

use profile::{BoundaryLayer, BoxDomain, MeshProfile, Rotation, ViscousDomain};

/// Direction in which the two airfoil splines are declared
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum SplineOrder {
    /// Upper spline from the trailing edge to the leading edge, lower spline back to the
    /// trailing edge. Needed by the line loops of the box farfield.
    FromTrailingEdge,

    /// Upper spline from the leading edge to the trailing edge, lower spline from the trailing
    /// edge round to the leading edge.
    FromLeadingEdge,
}

/// How the farfield mesh size of a box domain is obtained
enum FarfieldSize {
    Fixed(f64),
    Growth(f64),
}

/// A mesh description ready to be rendered with `to_string()`. Rendering is a pure function of
/// the airfoil, the profile, the name and the optional timestamp.
pub struct GeoDocument<'a> {
    airfoil: &'a Airfoil,
    profile: &'a MeshProfile,
    name: &'a str,
    timestamp: Option<DateTime<Local>>,
}

impl<'a> GeoDocument<'a> {
    pub fn new(airfoil: &'a Airfoil, profile: &'a MeshProfile, name: &'a str) -> Self {
        GeoDocument {
            airfoil,
            profile,
            name,
            timestamp: None,
        }
    }

    pub fn with_timestamp(mut self, timestamp: DateTime<Local>) -> Self {
        self.timestamp = Some(timestamp);
        self
    }

    /// 1-based identifier of the leading edge point
    pub fn leading_edge_id(&self) -> usize {
        self.airfoil.leading_edge() + 1
    }

    /// 1-based identifier of the last declared airfoil point. The closure point after it is only
    /// written as a comment.
    pub fn last_point_id(&self) -> usize {
        self.airfoil.len() - 1
    }

    fn header(&self, f: &mut Formatter<'_>) -> Result {
        match self.profile {
            MeshProfile::ViscousCircularDomain(_) => {
                writeln!(f, "/* Airfoil {}. RANS mesh */", self.name)?
            }
            _ => writeln!(f, "/* Airfoil {} */", self.name)?,
        }
        writeln!(
            f,
            "// This file was generated automatically using geofoils v{}",
            env!("CARGO_PKG_VERSION")
        )?;
        if let Some(ts) = self.timestamp {
            writeln!(f, "// @date: {}", ts.format("%Y-%m-%d %H:%M:%S"))?;
        }
        writeln!(f)
    }

    fn points(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "/**************\n Geometry\n **************/")?;
        writeln!(f, "Te = 1; // trailing edge")?;
        writeln!(f, "Le = {}; // leading edge", self.leading_edge_id())?;
        writeln!(f, "N = {}; // last airfoil point", self.last_point_id())?;
        writeln!(f)?;

        let max_x = self.airfoil.max_x();
        let count = self.airfoil.len();
        for (i, p) in self.airfoil.points().iter().enumerate() {
            let id = i + 1;
            if id == count {
                writeln!(f, "// Point( {} ) = {{ {:?}, {:?}, 0.0, msTe }};", id, p.x, p.y)?;
            } else if p.x == 0.0 {
                writeln!(f, "Point( {} ) = {{ {:?}, {:?}, 0.0, msLe }};", id, p.x, p.y)?;
            } else if p.x == max_x {
                writeln!(f, "Point( {} ) = {{ {:?}, {:?}, 0.0, msTe }};", id, p.x, p.y)?;
            } else {
                writeln!(f, "Point( {} ) = {{ {:?}, {:?}, 0.0}};", id, p.x, p.y)?;
            }
        }
        writeln!(f)
    }

    fn splines(&self, f: &mut Formatter<'_>, order: SplineOrder) -> Result {
        let le = self.leading_edge_id();
        let last = self.last_point_id();
        match order {
            SplineOrder::FromTrailingEdge => {
                writeln!(f, "Spline(1) = {{1:{}}}; // upper side", le)?;
                writeln!(f, "Spline(2) = {{{}:{}, 1}}; // lower side", le, last)?;
            }
            SplineOrder::FromLeadingEdge => {
                writeln!(f, "Spline(1) = {{Le:1}}; // upper side")?;
                writeln!(f, "Spline(2) = {{1, {}:Le}}; // lower side", last)?;
            }
        }
        writeln!(f)
    }

    fn box_constants(
        &self,
        f: &mut Formatter<'_>,
        domain: &BoxDomain,
        farfield: &FarfieldSize,
        te_size: f64,
        le_size: f64,
        rotation: &Rotation,
    ) -> Result {
        writeln!(f, "// Geometry")?;
        define(f, "xLgt", domain.x_length, "Domain length (x-dir)")?;
        define(f, "yLgt", domain.y_length, "Domain length (y-dir)")?;
        writeln!(f)?;

        writeln!(f, "// Mesh")?;
        match farfield {
            FarfieldSize::Fixed(size) => define(f, "msF", *size, "Farfield mesh size")?,
            FarfieldSize::Growth(ratio) => define(f, "gr", *ratio, "Farfield growth ratio")?,
        }
        define(f, "msTe", te_size, "Airfoil TE mesh size")?;
        define(f, "msLe", le_size, "Airfoil LE mesh size")?;
        if let FarfieldSize::Growth(_) = farfield {
            // Evaluated by gmsh, a ratio of exactly 1 is a uniform size
            writeln!(f, "If (gr == 1)")?;
            writeln!(f, "   msF = msTe;")?;
            writeln!(f, "Else")?;
            writeln!(
                f,
                "   nF = Log(1 - (1 - gr)*xLgt/msTe)/Log(gr); // cells from TE to farfield"
            )?;
            writeln!(f, "   msF = msTe*gr^(nF - 1);")?;
            writeln!(f, "EndIf")?;
        }
        writeln!(f)?;

        writeln!(f, "// Rotation")?;
        define(f, "xRot", rotation.center, "Center of rotation")?;
        writeln!(
            f,
            "DefineConstant[ angle = {{ {:?}*Pi/180, Name \"Angle of rotation\" }}  ];",
            rotation.angle_deg
        )?;
        writeln!(
            f,
            "Geometry.AutoCoherence = 0; // Needed so that gmsh does not remove duplicate"
        )?;
        writeln!(f)
    }

    fn rotation(&self, f: &mut Formatter<'_>) -> Result {
        writeln!(f, "// Rotation")?;
        writeln!(f, "If (angle != 0)")?;
        writeln!(f, "   For i In {{Te:N:1}}")?;
        writeln!(f, "       Rotate{{{{0, 0, 1}}, {{xRot, 0, 0}}, -angle}} {{Point{{i}};}}")?;
        writeln!(f, "   EndFor")?;
        writeln!(f, "EndIf")?;
        writeln!(f)
    }

    fn box_farfield(&self, f: &mut Formatter<'_>) -> Result {
        let te = station(self.airfoil.max_x());
        writeln!(f, "// Farfield")?;
        writeln!(f, "Point(10001) = {{{}+xLgt, 0, 0,msF}};", te)?;
        writeln!(f, "Point(10002) = {{{}+xLgt, yLgt, 0,msF}};", te)?;
        writeln!(f, "Point(10003) = {{-xLgt, yLgt, 0,msF}};")?;
        writeln!(f, "Point(10004) = {{-xLgt, 0, 0,msF}};")?;
        writeln!(f, "Point(10005) = {{-xLgt,-yLgt, 0,msF}};")?;
        writeln!(f, "Point(10006) = {{{}+xLgt, -yLgt, 0,msF}};", te)?;
        writeln!(f)?;

        for i in 10001..=10006 {
            let next = if i == 10006 { 10001 } else { i + 1 };
            writeln!(f, "Line({}) = {{{}, {}}};", i, i, next)?;
        }
        writeln!(f)?;

        writeln!(f, "// Front and wake")?;
        writeln!(f, "Line(10007) = {{Le, 10004}};")?;
        writeln!(f, "Line(10008) = {{Te, 10001}};")?;
        writeln!(f)?;

        writeln!(f, "// Internal field")?;
        writeln!(
            f,
            "Line Loop(20001) = {{{}}};",
            [10007, -10003, -10002, -10001, -10008, 1].iter().join(", ")
        )?;
        writeln!(
            f,
            "Line Loop(20002) = {{{}}};",
            [10007, 10004, 10005, 10006, -10008, -2].iter().join(", ")
        )?;
        writeln!(f, "Plane Surface(30001) = {{20001}};")?;
        writeln!(f, "Plane Surface(30002) = {{20002}};")?;
        writeln!(f)?;

        writeln!(f, "/************************* \n Mesh Options \n *************************/")?;
        writeln!(f)?;
        writeln!(f, "Mesh.Algorithm = 5; // Delaunay")?;
        writeln!(f)?;

        writeln!(f, "/************************* \n Physical Groups \n *************************/")?;
        writeln!(f)?;
        writeln!(f, "Physical Point(\"te\") = {{Te}};")?;
        writeln!(f, "Physical Line(\"upstream\") = {{10003, 10004}};")?;
        writeln!(f, "Physical Line(\"farfield\") = {{10002, 10005}};")?;
        writeln!(f, "Physical Line(\"downstream\") = {{10001}};")?;
        writeln!(f, "Physical Line(\"downstream\") += {{10006}};")?;
        writeln!(f, "Physical Line(\"airfoil\") = {{1}};")?;
        writeln!(f, "Physical Line(\"airfoil_\") = {{2}};")?;
        writeln!(f, "Physical Line(\"wake\") = {{10008}};")?;
        writeln!(f, "Physical Surface(\"field\") = {{30001}};")?;
        writeln!(f, "Physical Surface(\"field\") += {{30002}};")
    }

    fn viscous_constants(&self, f: &mut Formatter<'_>, params: &ViscousDomain) -> Result {
        writeln!(f, "// Geometry")?;
        define(f, "domainSize", params.domain_size, "Domain size")?;
        writeln!(f)?;

        writeln!(f, "// Mesh")?;
        define(f, "msF", params.farfield_size, "Farfield mesh size")?;
        define(f, "msTe", params.trailing_edge_size, "Trailing edge mesh size")?;
        define(f, "msLe", params.leading_edge_size, "Leading edge mesh size")?;
        writeln!(f)?;

        let bl: &BoundaryLayer = &params.boundary_layer;
        writeln!(f, "// Boundary layer")?;
        define(f, "blThick", bl.thickness, "Boundary layer thickness")?;
        define(f, "blSEleWall", bl.wall_size, "Wall cell size")?;
        define(f, "blSEleFar", bl.edge_size, "Boundary layer edge cell size")?;
        define(f, "blEleRatio", bl.ratio, "Boundary layer progression")?;
        writeln!(f)
    }

    fn circular_farfield(&self, f: &mut Formatter<'_>) -> Result {
        let te = station(self.airfoil.max_x());
        writeln!(f, "// Farfield")?;
        writeln!(f, "Point(10000) = {{{}, 0, 0}};", te)?;
        writeln!(f, "Point(10001) = {{{}+domainSize, 0, 0,msF}};", te)?;
        writeln!(f, "Point(10002) = {{{}, domainSize, 0,msF}};", te)?;
        writeln!(f, "Point(10003) = {{{}-domainSize, 0, 0,msF}};", te)?;
        writeln!(f, "Point(10004) = {{{}, -domainSize, 0,msF}};", te)?;
        writeln!(f)?;

        for i in 10001..=10004 {
            let next = if i == 10004 { 10001 } else { i + 1 };
            writeln!(f, "Circle({}) = {{{},10000,{}}};", i, i, next)?;
        }
        writeln!(f)?;

        writeln!(f, "Line Loop(10001) = {{{}}};", (10001..=10004).join(","))?;
        writeln!(f, "Line Loop(10002) = {{1,2}};")?;
        writeln!(f, "Plane Surface(10001) = {{10001, 10002}};")?;
        writeln!(f)?;

        writeln!(f, "// Boundary layer")?;
        writeln!(f, "Field[1] = BoundaryLayer;")?;
        writeln!(f, "Field[1].EdgesList = {{1,2}};")?;
        writeln!(f, "Field[1].hfar = blSEleFar;")?;
        writeln!(f, "Field[1].hwall_n = blSEleWall;")?;
        writeln!(f, "Field[1].thickness = blThick;")?;
        writeln!(f, "Field[1].ratio = blEleRatio;")?;
        writeln!(f, "Field[1].Quads = 1;")?;
        writeln!(f, "Field[1].FanNodesList = {{Te}};")?;
        writeln!(f, "BoundaryLayer Field = 1;")?;
        writeln!(f)?;

        writeln!(f, "// Physical groups")?;
        writeln!(f, "Physical Line(\"farfield\") = {{10001, 10002, 10003, 10004}};")?;
        writeln!(f, "Physical Line(\"airfoil\") = {{1, 2}};")?;
        writeln!(f, "Physical Surface(\"internalField\") = {{10001}};")
    }
}

impl Display for GeoDocument<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        self.header(f)?;
        match self.profile {
            MeshProfile::PlainFarfield(p) => {
                let size = FarfieldSize::Fixed(p.farfield_size);
                self.box_constants(
                    f,
                    &p.domain,
                    &size,
                    p.trailing_edge_size,
                    p.leading_edge_size,
                    &p.rotation,
                )?;
                self.points(f)?;
                self.splines(f, SplineOrder::FromTrailingEdge)?;
                self.rotation(f)?;
                self.box_farfield(f)
            }
            MeshProfile::GrowthRatioFarfield(p) => {
                let size = FarfieldSize::Growth(p.growth_ratio);
                self.box_constants(
                    f,
                    &p.domain,
                    &size,
                    p.trailing_edge_size,
                    p.leading_edge_size,
                    &p.rotation,
                )?;
                self.points(f)?;
                self.splines(f, SplineOrder::FromTrailingEdge)?;
                self.rotation(f)?;
                self.box_farfield(f)
            }
            MeshProfile::ViscousCircularDomain(p) => {
                self.viscous_constants(f, p)?;
                self.points(f)?;
                self.splines(f, SplineOrder::FromLeadingEdge)?;
                self.circular_farfield(f)
            }
        }
    }
}

/// Renders the mesh description of an airfoil, stamped with the current local time.
pub fn write(airfoil: &Airfoil, profile: &MeshProfile, name: &str) -> String {
    GeoDocument::new(airfoil, profile, name)
        .with_timestamp(Local::now())
        .to_string()
}

fn define(f: &mut Formatter<'_>, name: &str, value: f64, label: &str) -> Result {
    writeln!(
        f,
        "DefineConstant[ {} = {{ {:?}, Name \"{}\" }}  ];",
        name, value, label
    )
}

/// Formats a chord station as a literal, dropping the fraction when it is whole
fn station(x: f64) -> String {
    if x.fract() == 0.0 && x.abs() < 1e15 {
        format!("{}", x as i64)
    } else {
        format!("{:?}", x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::airfoil::generate::generate;
    use crate::geo::profile::GrowthFarfield;
    use chrono::TimeZone;
    use ncollide2d::na::Point2;
    use test_case::test_case;

    fn naca0012() -> Airfoil {
        Airfoil::from_points(generate("0012", 100, 1.0).unwrap()).unwrap()
    }

    fn diamond() -> Airfoil {
        Airfoil::from_points(vec![
            Point2::new(1.0, 0.0),
            Point2::new(0.5, 0.1),
            Point2::new(0.0, 0.0),
            Point2::new(0.5, -0.1),
            Point2::new(1.0, 0.0),
        ])
        .unwrap()
    }

    fn render(airfoil: &Airfoil, profile: &MeshProfile) -> String {
        GeoDocument::new(airfoil, profile, "X").to_string()
    }

    fn count_prefix(doc: &str, prefix: &str) -> usize {
        doc.lines().filter(|l| l.starts_with(prefix)).count()
    }

    #[test]
    fn test_plain_topology() {
        let doc = render(&naca0012(), &MeshProfile::plain());
        assert_eq!(2, count_prefix(&doc, "Spline("));
        assert_eq!(6, count_prefix(&doc, "Point(100"));
        assert_eq!(100, count_prefix(&doc, "Point( "));
        assert_eq!(8, count_prefix(&doc, "Line(100"));
        assert_eq!(2, count_prefix(&doc, "Plane Surface("));
        assert!(doc.contains("Le = 51; // leading edge\n"));
        assert!(doc.contains("Spline(1) = {1:51}; // upper side\n"));
        assert!(doc.contains("Spline(2) = {51:100, 1}; // lower side\n"));
        assert!(doc.contains("Physical Surface(\"field\") += {30002};"));
    }

    #[test]
    fn test_closure_point_is_commented() {
        let doc = render(&naca0012(), &MeshProfile::plain());
        assert!(doc.contains("// Point( 101 ) = { 1.0, 0.0, 0.0, msTe };\n"));
        assert!(doc.contains("Point( 1 ) = { 1.0, 0.0, 0.0, msTe };\n"));
        assert!(doc.contains("Point( 51 ) = { 0.0, 0.0, 0.0, msLe };\n"));
        assert_eq!(1, doc.matches("msLe }").count());
    }

    #[test]
    fn test_interior_points_have_no_size() {
        let doc = render(&diamond(), &MeshProfile::plain());
        assert!(doc.contains("Point( 2 ) = { 0.5, 0.1, 0.0};\n"));
        assert!(doc.contains("Point( 4 ) = { 0.5, -0.1, 0.0};\n"));
    }

    #[test]
    fn test_rotation_is_guarded() {
        let doc = render(&diamond(), &MeshProfile::plain());
        assert!(doc.contains("N = 4; // last airfoil point\n"));
        assert!(doc.contains("If (angle != 0)\n   For i In {Te:N:1}\n"));
        assert!(doc.contains("Rotate{{0, 0, 1}, {xRot, 0, 0}, -angle} {Point{i};}"));
        assert!(doc.contains(
            "DefineConstant[ angle = { 0.0*Pi/180, Name \"Angle of rotation\" }  ];"
        ));
    }

    #[test]
    fn test_box_loops() {
        let doc = render(&diamond(), &MeshProfile::plain());
        assert!(doc.contains("Line Loop(20001) = {10007, -10003, -10002, -10001, -10008, 1};"));
        assert!(doc.contains("Line Loop(20002) = {10007, 10004, 10005, 10006, -10008, -2};"));
        assert!(doc.contains("Line(10006) = {10006, 10001};"));
        assert!(doc.contains("Point(10001) = {1+xLgt, 0, 0,msF};"));
    }

    #[test]
    fn test_plain_has_fixed_farfield_size() {
        let doc = render(&diamond(), &MeshProfile::plain());
        assert!(doc.contains("DefineConstant[ msF = { 1.0, Name \"Farfield mesh size\" }  ];"));
        assert!(!doc.contains("DefineConstant[ gr"));
        assert!(!doc.contains("Log(gr)"));
    }

    #[test]
    fn test_growth_ratio_expression() {
        let doc = render(&naca0012(), &MeshProfile::growth_ratio());
        assert_eq!(2, count_prefix(&doc, "Spline("));
        assert_eq!(6, count_prefix(&doc, "Point(100"));
        assert!(doc.contains("DefineConstant[ gr = { 1.2, Name \"Farfield growth ratio\" }  ];"));
        assert!(doc.contains("If (gr == 1)\n   msF = msTe;\nElse\n"));
        assert!(doc.contains("nF = Log(1 - (1 - gr)*xLgt/msTe)/Log(gr);"));
        assert!(doc.contains("msF = msTe*gr^(nF - 1);"));
        assert!(!doc.contains("DefineConstant[ msF"));
    }

    #[test]
    fn test_growth_ratio_of_one_is_left_to_the_guard() {
        let profile = MeshProfile::GrowthRatioFarfield(GrowthFarfield {
            growth_ratio: 1.0,
            ..GrowthFarfield::default()
        });
        let doc = render(&diamond(), &profile);
        assert!(doc.contains("DefineConstant[ gr = { 1.0, Name \"Farfield growth ratio\" }  ];"));
        assert!(doc.contains("If (gr == 1)\n   msF = msTe;\n"));
    }

    #[test]
    fn test_viscous_topology() {
        let doc = render(&naca0012(), &MeshProfile::viscous());
        assert_eq!(4, count_prefix(&doc, "Circle("));
        assert_eq!(1, count_prefix(&doc, "Field[1] = BoundaryLayer;"));
        assert!(doc.contains("Field[1].EdgesList = {1,2};"));
        assert!(doc.contains("Field[1].FanNodesList = {Te};"));
        assert!(doc.contains("Spline(1) = {Le:1}; // upper side\n"));
        assert!(doc.contains("Spline(2) = {1, 100:Le}; // lower side\n"));
        assert!(doc.contains("Point(10000) = {1, 0, 0};"));
        assert!(doc.contains("Line Loop(10001) = {10001,10002,10003,10004};"));
        assert!(doc.contains("Physical Surface(\"internalField\") = {10001};"));
        assert!(doc.starts_with("/* Airfoil X. RANS mesh */\n"));
    }

    #[test]
    fn test_viscous_has_no_wake_or_rotation() {
        let doc = render(&naca0012(), &MeshProfile::viscous());
        assert!(!doc.contains("Rotate"));
        assert!(!doc.contains("wake"));
        assert!(!doc.contains("Line(10008)"));
    }

    #[test_case(MeshProfile::plain(), "// Rotation")]
    #[test_case(MeshProfile::growth_ratio(), "// Rotation")]
    #[test_case(MeshProfile::viscous(), "// Boundary layer")]
    fn test_constant_groups(profile: MeshProfile, group: &str) {
        let doc = render(&diamond(), &profile);
        assert!(doc.contains("// Geometry\n"));
        assert!(doc.contains("// Mesh\n"));
        assert!(doc.contains(group));
    }

    #[test]
    fn test_timestamp_line() {
        let airfoil = diamond();
        let profile = MeshProfile::viscous();
        let ts = Local.with_ymd_and_hms(2024, 3, 1, 12, 30, 0).unwrap();
        let doc = GeoDocument::new(&airfoil, &profile, "X").with_timestamp(ts).to_string();
        assert!(doc.contains("// @date: 2024-03-01 12:30:00\n"));
        assert!(!render(&airfoil, &profile).contains("@date"));
    }

    #[test]
    fn test_write_stamps_the_date() {
        let doc = write(&diamond(), &MeshProfile::growth_ratio(), "X");
        assert!(doc.starts_with("/* Airfoil X */\n"));
        assert_eq!(1, count_prefix(&doc, "// @date: "));
    }

    #[test]
    fn test_rendering_is_reproducible() {
        let airfoil = naca0012();
        let profile = MeshProfile::plain();
        assert_eq!(render(&airfoil, &profile), render(&airfoil, &profile));
    }

    #[test_case(1.0, "1")]
    #[test_case(2.0, "2")]
    #[test_case(0.9995, "0.9995")]
    fn test_station_literal(x: f64, e: &str) {
        assert_eq!(e, station(x));
    }
}
