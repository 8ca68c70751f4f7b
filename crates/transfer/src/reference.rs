//! Reference values shown next to input prompts.

use hohmann_core::constants::{EARTH_RADIUS_M, MAX_ORBIT_RADIUS_M};

/// A named orbit radius from the Earth's centre.
#[derive(Debug, Clone, Copy)]
pub struct OrbitReference {
    pub label: &'static str,
    pub radius_m: f64,
}

/// A named launcher dry mass.
#[derive(Debug, Clone, Copy)]
pub struct DryMassReference {
    pub label: &'static str,
    pub dry_mass_kg: f64,
}

pub const ORBIT_REFERENCES: [OrbitReference; 7] = [
    OrbitReference {
        label: "Mean Earth radius",
        radius_m: EARTH_RADIUS_M,
    },
    OrbitReference {
        label: "LEO, 160 km altitude",
        radius_m: 6_531_000.0,
    },
    OrbitReference {
        label: "LEO, 400 km altitude (ISS)",
        radius_m: 6_771_000.0,
    },
    OrbitReference {
        label: "LEO, 2000 km altitude",
        radius_m: 8_371_000.0,
    },
    OrbitReference {
        label: "MEO, GPS (20 200 km altitude)",
        radius_m: 26_571_000.0,
    },
    OrbitReference {
        label: "GEO (35 786 km altitude)",
        radius_m: 42_164_000.0,
    },
    OrbitReference {
        label: "Upper input bound",
        radius_m: MAX_ORBIT_RADIUS_M,
    },
];

pub const DRY_MASS_REFERENCES: [DryMassReference; 5] = [
    DryMassReference {
        label: "Falcon 9",
        dry_mass_kg: 22_800.0,
    },
    DryMassReference {
        label: "Rocket Lab Electron",
        dry_mass_kg: 950.0,
    },
    DryMassReference {
        label: "Soyuz",
        dry_mass_kg: 6_545.0,
    },
    DryMassReference {
        label: "Ariane 5",
        dry_mass_kg: 14_700.0,
    },
    DryMassReference {
        label: "Starship",
        dry_mass_kg: 100_000.0,
    },
];
