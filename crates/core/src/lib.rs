//! Core constants and unit helpers shared across the Hohmann budget planner workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
pub mod constants {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
    pub const G: f64 = 6.674_30e-11;
    /// Mass of the Earth (kg).
    pub const EARTH_MASS_KG: f64 = 5.972e24;
    /// Standard gravity at Earth's surface (m/s²).
    pub const G0: f64 = 9.80665;
    /// Mean radius of the Earth (m). Lower bound for any orbit radius.
    pub const EARTH_RADIUS_M: f64 = 6_371_000.0;
    /// Upper bound accepted for an orbit radius (m), roughly four lunar distances.
    pub const MAX_ORBIT_RADIUS_M: f64 = 1_500_000_000.0;
    /// Five-digit approximation of Euler's number used by the burn model.
    ///
    /// Kept instead of `std::f64::consts::E` so propellant masses match the
    /// reference tables to the last printed digit.
    pub const EULER_APPROX: f64 = 2.71828;

    /// Earth's gravitational parameter (m³/s²), computed as `G * M`.
    #[inline]
    pub fn earth_mu_m3_s2() -> f64 {
        G * EARTH_MASS_KG
    }
}

/// Basic unit conversion helpers.
pub mod units {
    /// Convert kilometres to metres.
    #[inline]
    pub fn km_to_m(v: f64) -> f64 {
        v * 1_000.0
    }

    /// Convert metres to kilometres.
    #[inline]
    pub fn m_to_km(v: f64) -> f64 {
        v / 1_000.0
    }

    /// Altitude above the mean Earth radius to orbit radius, both in metres.
    #[inline]
    pub fn altitude_to_radius_m(altitude_m: f64) -> f64 {
        altitude_m + super::constants::EARTH_RADIUS_M
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    /// Convert seconds to hours.
    #[inline]
    pub fn seconds_to_hours(seconds: f64) -> f64 {
        seconds / 3_600.0
    }
}
