//! Analytic Hohmann transfer between coplanar circular orbits.
//!
//! Burns are expressed as a multiple of the circular speed at the initial orbit,
//! which keeps the formulas in the form used by the propellant tables:
//!
//! - `v1  = sqrt(mu / r1)`
//! - `dv1 = v1 * (sqrt(2 r2 / (r1 + r2)) - 1)`
//! - `dv2 = v1 * sqrt(r1 / r2) * (1 - sqrt(2 r1 / (r1 + r2)))`
//!
//! Both burns are signed; a lowering transfer yields negative values with the same
//! magnitudes as the matching raising transfer.

use hohmann_core::constants::earth_mu_m3_s2;
use serde::Serialize;

/// Whether a transfer raises or lowers the orbit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum OrbitDirection {
    /// Target radius above the initial radius; prograde burns.
    Raise,
    /// Target radius below the initial radius; retrograde burns.
    Lower,
}

/// Hohmann transfer between circular orbits of radii `r1_m` and `r2_m`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TransferPlan {
    pub r1_m: f64,
    pub r2_m: f64,
    pub v1_m_s: f64,  // circular speed at r1
    pub dv1_m_s: f64, // signed: negative for inward (retro) burn
    pub dv2_m_s: f64, // signed: negative for retro capture when arriving inward
    #[serde(skip)]
    mu_m3_s2: f64,
}

impl TransferPlan {
    /// Magnitude of the departure burn.
    pub fn dv1_magnitude_m_s(&self) -> f64 {
        self.dv1_m_s.abs()
    }

    /// Magnitude of the circularisation burn.
    pub fn dv2_magnitude_m_s(&self) -> f64 {
        self.dv2_m_s.abs()
    }

    /// `|dv1| + |dv2|`.
    pub fn total_delta_v_m_s(&self) -> f64 {
        self.dv1_magnitude_m_s() + self.dv2_magnitude_m_s()
    }

    /// Coast time along the transfer ellipse (half its period).
    pub fn transfer_time_s(&self) -> f64 {
        let a_t = 0.5 * (self.r1_m + self.r2_m);
        std::f64::consts::PI * (a_t.powi(3) / self.mu_m3_s2).sqrt()
    }

    /// `None` when both radii coincide and no manoeuvre is needed.
    pub fn direction(&self) -> Option<OrbitDirection> {
        if self.r2_m > self.r1_m {
            Some(OrbitDirection::Raise)
        } else if self.r2_m < self.r1_m {
            Some(OrbitDirection::Lower)
        } else {
            None
        }
    }
}

/// Compute the Hohmann transfer between two circular Earth orbits (radii in metres).
pub fn hohmann(r1_m: f64, r2_m: f64) -> TransferPlan {
    hohmann_with_mu(r1_m, r2_m, earth_mu_m3_s2())
}

fn hohmann_with_mu(r1_m: f64, r2_m: f64, mu_m3_s2: f64) -> TransferPlan {
    assert!(
        r1_m > 0.0 && r2_m > 0.0 && mu_m3_s2 > 0.0,
        "hohmann requires positive radii and mu (r1={r1_m}, r2={r2_m}, mu={mu_m3_s2})"
    );

    let v1 = (mu_m3_s2 / r1_m).sqrt();
    let sum = r1_m + r2_m;

    let dv1 = v1 * ((2.0 * r2_m / sum).sqrt() - 1.0);
    let dv2 = v1 * (r1_m / r2_m).sqrt() * (1.0 - (2.0 * r1_m / sum).sqrt());

    TransferPlan {
        r1_m,
        r2_m,
        v1_m_s: v1,
        dv1_m_s: dv1,
        dv2_m_s: dv2,
        mu_m3_s2,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEO_ISS_M: f64 = 6_771_000.0;
    const GEO_M: f64 = 42_164_000.0;

    #[test]
    fn iss_to_geo_matches_reference_burns() {
        let plan = hohmann(LEO_ISS_M, GEO_M);
        let v1 = plan.v1_m_s;
        let dv1 = plan.dv1_m_s;
        let dv2 = plan.dv2_m_s;
        assert!((v1 - 7_672.490_413_283_6).abs() < 1e-6, "v1 = {v1}");
        assert!((dv1 - 2_399.434_009_893_8).abs() < 1e-6, "dv1 = {dv1}");
        assert!((dv2 - 1_457.200_458_635_1).abs() < 1e-6, "dv2 = {dv2}");
        assert_eq!(plan.direction(), Some(OrbitDirection::Raise));
    }

    #[test]
    fn lowering_swaps_burn_magnitudes() {
        let up = hohmann(LEO_ISS_M, GEO_M);
        let down = hohmann(GEO_M, LEO_ISS_M);
        assert!(down.dv1_m_s < 0.0 && down.dv2_m_s < 0.0);
        let close = |a: f64, b: f64| (a - b).abs() < 1e-9;
        assert!(close(up.dv1_magnitude_m_s(), down.dv2_magnitude_m_s()));
        assert!(close(up.dv2_magnitude_m_s(), down.dv1_magnitude_m_s()));
        assert!(close(up.total_delta_v_m_s(), down.total_delta_v_m_s()));
        assert_eq!(down.direction(), Some(OrbitDirection::Lower));
    }

    #[test]
    fn equal_radii_need_no_burn() {
        let plan = hohmann(LEO_ISS_M, LEO_ISS_M);
        assert_eq!(plan.dv1_m_s, 0.0);
        assert_eq!(plan.dv2_m_s, 0.0);
        assert_eq!(plan.direction(), None);
    }

    #[test]
    fn geo_transfer_takes_about_five_hours() {
        let hours = hohmann(LEO_ISS_M, GEO_M).transfer_time_s() / 3_600.0;
        assert!((5.0..=5.5).contains(&hours), "transfer time = {hours} h");
    }

    #[test]
    #[should_panic]
    fn rejects_non_positive_radius() {
        hohmann(0.0, GEO_M);
    }
}
