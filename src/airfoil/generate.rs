use super::Side;
use crate::algorithms::{cosine_spacing, half_count, round_decimals};
use crate::errors::GenerateError;
use ncollide2d::na::Point2;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use tracing::{debug, info};

/// Decimal places kept on generated coordinates
const DECIMALS: i32 = 14;

/// Below this camber peak location the section is treated as symmetric
const MIN_CAMBER_PEAK: f64 = 1e-12;

/// An AirfoilGenerator is an entity which can evaluate the camber line, its slope and the airfoil
/// thickness at any station along the chord. This provides everything necessary to compute the
/// airfoil surfaces. Stations are absolute positions in `[0, chord]`.
pub trait AirfoilGenerator {
    fn chord(&self) -> f64;

    /// Height of the camber line above the chord at station x
    fn camber(&self, x: f64) -> f64;

    /// Slope of the camber line at station x
    fn camber_slope(&self, x: f64) -> f64;

    /// Return the full thickness of the airfoil with respect to the camber line at station x
    fn thickness(&self, x: f64) -> f64;

    /// Offsets half of the thickness perpendicular to the local camber line tangent, on the
    /// requested side.
    fn surface_point(&self, x: f64, side: Side) -> Point2<f64> {
        let theta = self.camber_slope(x).atan();
        let half = 0.5 * self.thickness(x);
        let yc = self.camber(x);
        match side {
            Side::Lower => Point2::new(x + half * theta.sin(), yc - half * theta.cos()),
            Side::Upper => Point2::new(x - half * theta.sin(), yc + half * theta.cos()),
        }
    }

    /// Generates the closed surface contour on cosine-spaced stations. The result starts at the
    /// trailing edge on the upper surface, reaches the leading edge at its middle and ends back
    /// at the trailing edge on the lower surface, with every coordinate rounded to 14 decimals.
    fn surface(&self, sample_count: usize) -> Result<Vec<Point2<f64>>, GenerateError> {
        if sample_count < 4 {
            return Err(GenerateError::TooFewSamples(sample_count));
        }

        let stations = cosine_spacing(self.chord(), sample_count);
        let half = half_count(sample_count);
        debug!(stations = stations.len(), "cosine stations generated");

        // Stations before the leading edge are on the lower side
        let points = stations
            .iter()
            .enumerate()
            .map(|(i, x)| {
                let side = if i + 1 < half { Side::Lower } else { Side::Upper };
                self.surface_point(*x, side)
            })
            .rev()
            .map(|p| Point2::new(round_decimals(p.x, DECIMALS), round_decimals(p.y, DECIMALS)))
            .collect();

        Ok(points)
    }
}

/// A NACA 4-digit designation of the form MPTT, where M is the maximum camber in percent of the
/// chord, P the location of the maximum camber in tenths of the chord, and TT the maximum
/// thickness in percent of the chord.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ShapeCode {
    digits: [u8; 4],
}

impl ShapeCode {
    /// Maximum camber as a fraction of the chord
    pub fn epsilon(&self) -> f64 {
        self.digits[0] as f64 / 100.0
    }

    /// Location of the maximum camber as a fraction of the chord
    pub fn p(&self) -> f64 {
        self.digits[1] as f64 / 10.0
    }

    /// Maximum thickness as a fraction of the chord
    pub fn tau(&self) -> f64 {
        (self.digits[2] * 10 + self.digits[3]) as f64 / 100.0
    }

    pub fn is_symmetric(&self) -> bool {
        self.digits[0] == 0 || self.digits[1] == 0
    }
}

impl FromStr for ShapeCode {
    type Err = GenerateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = s.as_bytes();
        if bytes.len() != 4 {
            return Err(GenerateError::InvalidShapeCode(s.to_string()));
        }
        if !bytes.iter().all(u8::is_ascii_digit) {
            return Err(GenerateError::NonNumericShapeCode(s.to_string()));
        }

        let mut digits = [0u8; 4];
        for (d, b) in digits.iter_mut().zip(bytes) {
            *d = b - b'0';
        }
        Ok(ShapeCode { digits })
    }
}

impl Display for ShapeCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        for d in self.digits.iter() {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

/// A generator for a NACA 4-digit airfoil. For example, a NACA 2412 airfoil has a 2% camber at
/// 40% of the chord and a max thickness which is 12% of the chord length.
pub struct Naca4Digit {
    tau: f64,
    chord_len: f64,
    epsilon: f64,
    p: f64,
}

impl Naca4Digit {
    /// Create a new NACA 4 digit generator.
    ///
    /// # Arguments
    ///
    /// * `tau` - the maximum thickness of the airfoil as a fraction of the chord length. For
    /// instance, on a NACA 2412 tau should be 0.12
    ///
    /// * `chord_len` - the actual length of the airfoil chord
    ///
    /// * `epsilon` - The max camber as a fraction, for example on a NACA 2412 this value should
    /// be set to 0.02
    ///
    /// * `p` - The location of the max camber as a fraction of chord length. For example on a
    /// NACA 2412 this values should be 0.4
    pub fn new(
        tau: f64,
        chord_len: f64,
        epsilon: f64,
        p: f64,
    ) -> Result<Naca4Digit, GenerateError> {
        if !chord_len.is_finite() || chord_len <= 0.0 {
            return Err(GenerateError::InvalidChord(chord_len));
        }

        Ok(Naca4Digit {
            tau,
            chord_len,
            epsilon,
            p,
        })
    }

    pub fn from_code(code: &ShapeCode, chord_len: f64) -> Result<Naca4Digit, GenerateError> {
        Naca4Digit::new(code.tau(), chord_len, code.epsilon(), code.p())
    }

    fn is_symmetric(&self) -> bool {
        self.epsilon == 0.0 || self.p < MIN_CAMBER_PEAK
    }
}

impl AirfoilGenerator for Naca4Digit {
    fn chord(&self) -> f64 {
        self.chord_len
    }

    fn camber(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            return 0.0;
        }

        let (c, e, p) = (self.chord_len, self.epsilon, self.p);
        let xc = x / c;
        if xc < p {
            (e * x / p.powi(2)) * (2.0 * p - xc)
        } else {
            (e * (c - x) / (1.0 - p).powi(2)) * (1.0 + xc - 2.0 * p)
        }
    }

    fn camber_slope(&self, x: f64) -> f64 {
        if self.is_symmetric() {
            return 0.0;
        }

        let (e, p) = (self.epsilon, self.p);
        let xc = x / self.chord_len;
        if xc < p {
            (2.0 * e / p.powi(2)) * (p - xc)
        } else {
            (2.0 * e / (1.0 - p).powi(2)) * (p - xc)
        }
    }

    /// The polynomial leaves a residue of about 1e-17 at the trailing edge which grows with the
    /// chord, so the trailing edge is closed explicitly.
    fn thickness(&self, x: f64) -> f64 {
        let xc = x / self.chord_len;
        if xc >= 1.0 {
            return 0.0;
        }

        10.0 * self.tau
            * self.chord_len
            * (0.2969 * xc.sqrt() - 0.1260 * xc - 0.3537 * xc.powi(2) + 0.2843 * xc.powi(3)
                - 0.1015 * xc.powi(4))
    }
}

/// Generates the closed surface of the NACA 4-digit airfoil named by `code`.
pub fn generate(
    code: &str,
    sample_count: usize,
    chord: f64,
) -> Result<Vec<Point2<f64>>, GenerateError> {
    let shape: ShapeCode = code.parse()?;
    info!(symmetric = shape.is_symmetric(), "Generating NACA{} airfoil", shape);
    let naca = Naca4Digit::from_code(&shape, chord)?;
    naca.surface(sample_count)
}
