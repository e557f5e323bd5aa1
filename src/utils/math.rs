use std::f64::consts::PI;

/// Convert degrees to radians
#[inline]
pub fn deg_to_rad(deg: f64) -> f64 {
    deg * PI / 180.0
}

/// Convert radians to degrees
#[inline]
pub fn rad_to_deg(rad: f64) -> f64 {
    rad * 180.0 / PI
}

/// Dynamic pressure q = 1/2 rho V^2 (Pa).
#[inline]
pub fn dynamic_pressure(density: f64, airspeed: f64) -> f64 {
    0.5 * density * airspeed.powi(2)
}

/// Longitudinal relative-density (mass) parameter mu = 2m / (rho S c).
#[inline]
pub fn mass_parameter(density: f64, wing_area: f64, mass: f64, mac: f64) -> f64 {
    2.0 * mass / (density * wing_area * mac)
}

/// True when `a` and `b` agree to within `tolerance` relative to the larger magnitude.
#[inline]
pub fn approx_eq_relative(a: f64, b: f64, tolerance: f64) -> bool {
    (a - b).abs() <= tolerance * a.abs().max(b.abs()).max(1.0)
}
