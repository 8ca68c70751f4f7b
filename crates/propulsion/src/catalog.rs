//! Propellant catalog entries. Position in a catalog is the identity shown to users.

use std::borrow::Cow;

use hohmann_core::constants::G0;
use serde::Serialize;

/// A propellant with a fixed specific impulse and unit price.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PropellantSpec {
    pub name: Cow<'static, str>,
    pub isp_seconds: f64,
    pub price_usd_per_kg: f64,
}

impl PropellantSpec {
    /// Catalog entry with a static name, usable in `const` context.
    pub const fn new(name: &'static str, isp_seconds: f64, price_usd_per_kg: f64) -> Self {
        Self {
            name: Cow::Borrowed(name),
            isp_seconds,
            price_usd_per_kg,
        }
    }

    /// Effective exhaust velocity (m/s): `Isp * g0`.
    pub fn exhaust_velocity_m_s(&self) -> f64 {
        self.isp_seconds * G0
    }
}

/// Built-in propellant catalog. Order is the user-facing index order.
pub static DEFAULT_CATALOG: [PropellantSpec; 7] = [
    PropellantSpec::new("RP-1/LOX", 330.0, 3.0),
    PropellantSpec::new("LH2/LOX", 450.0, 20.0),
    PropellantSpec::new("CH4/LOX", 360.0, 5.0),
    PropellantSpec::new("Hypergolic", 320.0, 300.0),
    PropellantSpec::new("Monopropellant", 220.0, 50.0),
    PropellantSpec::new("Solid propellant", 270.0, 6.0),
    PropellantSpec::new("Electric ion", 3000.0, 20_000.0),
];
