/// Reference ellipsoid, described by its two semi-axes.
///
/// Everything else (eccentricity, flattening ratio) is derived on demand.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ellipsoid {
    /// Semi-major axis (metres)
    a: f64,
    /// Semi-minor axis (metres)
    b: f64,
}

impl Ellipsoid {
    /// Build an ellipsoid from its axes. Returns `None` unless `a > b > 0`.
    pub fn new(a: f64, b: f64) -> Option<Self> {
        (a > b && b > 0.0).then_some(Self { a, b })
    }

    const fn from_axes(a: f64, b: f64) -> Self {
        Self { a, b }
    }

    pub fn semi_major_axis(&self) -> f64 {
        self.a
    }

    pub fn semi_minor_axis(&self) -> f64 {
        self.b
    }

    /// Flattening: (a - b) / a
    pub fn flattening(&self) -> f64 {
        (self.a - self.b) / self.a
    }

    /// Second eccentricity squared: (a² - b²) / b²
    pub fn ep2(&self) -> f64 {
        (self.a * self.a - self.b * self.b) / (self.b * self.b)
    }

    /// Third flattening: (a - b) / (a + b)
    pub fn n(&self) -> f64 {
        (self.a - self.b) / (self.a + self.b)
    }

    /// Scale of the meridian arc series: (a + b)/2 · (1 + n²/4 + n⁴/64)
    pub fn rectifying_scale(&self) -> f64 {
        let n = self.n();
        let n2 = n * n;
        (self.a + self.b) / 2.0 * (1.0 + n2 / 4.0 + n2 * n2 / 64.0)
    }
}

pub const WGS84: Ellipsoid = Ellipsoid::from_axes(6_378_137.0, 6_356_752.314_245);

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_wgs84_constants() {
        assert_relative_eq!(WGS84.semi_major_axis(), 6_378_137.0);
        assert_relative_eq!(WGS84.flattening(), 1.0 / 298.257_223_563, epsilon = 1e-11);
        assert_relative_eq!(WGS84.n(), 0.001_679_220_386_383_705, epsilon = 1e-12);
        assert_relative_eq!(WGS84.ep2(), 0.006_739_496_742_3, epsilon = 1e-11);
    }

    #[test]
    fn test_rejects_invalid_axes() {
        assert!(Ellipsoid::new(6_356_752.0, 6_378_137.0).is_none());
        assert!(Ellipsoid::new(1.0, 0.0).is_none());
        assert!(Ellipsoid::new(2.0, 2.0).is_none());
        assert!(Ellipsoid::new(6_378_137.0, 6_356_752.314_245).is_some());
    }
}
