//! Reflection, refraction and Fresnel reflectance.
//!
//! The exterior medium always has index 1.0. Whether a ray is entering or
//! leaving a surface is read from the sign of `dot(incident, normal)`, with
//! normals pointing out of the object.
//!
//! The incident direction is used as given, not normalized. Only its dot
//! product with the normal is clamped to [-1, 1], so a long camera ray and a
//! unit ray in the same direction can get different results.

use lux_math::Vec3;

/// Index of refraction of the medium outside every object.
const EXTERIOR_INDEX: f64 = 1.0;

/// Mirror `incident` about `normal`: `I - 2 (N·I) N`.
#[inline]
pub fn reflect(incident: Vec3, normal: Vec3) -> Vec3 {
    incident - 2.0 * normal.dot(incident) * normal
}

/// Snell's law refraction of `incident` through a surface of index
/// `refractive_index`.
///
/// Returns `Vec3::ZERO` when no transmitted ray exists (total internal
/// reflection); a ray with that direction hits nothing.
pub fn refract(incident: Vec3, normal: Vec3, refractive_index: f64) -> Vec3 {
    let mut cosi = incident.dot(normal).clamp(-1.0, 1.0);
    let mut etai = EXTERIOR_INDEX;
    let mut etat = refractive_index;
    let mut n = normal;

    if cosi < 0.0 {
        // Entering
        cosi = -cosi;
    } else {
        // Leaving: flip the normal to the ray's side and swap media
        n = -normal;
        std::mem::swap(&mut etai, &mut etat);
    }

    let eta = etai / etat;
    let k = 1.0 - eta * eta * (1.0 - cosi * cosi);
    if k < 0.0 {
        Vec3::ZERO
    } else {
        eta * incident + (eta * cosi - k.sqrt()) * n
    }
}

/// Unpolarized Fresnel reflectance at a dielectric boundary.
///
/// Returns the fraction of light reflected, in [0, 1]. The transmitted
/// fraction is `1 - kr`. Total internal reflection yields exactly 1.0.
pub fn fresnel(incident: Vec3, normal: Vec3, refractive_index: f64) -> f64 {
    let cosi = incident.dot(normal).clamp(-1.0, 1.0);
    let mut etai = EXTERIOR_INDEX;
    let mut etat = refractive_index;

    if cosi > 0.0 {
        std::mem::swap(&mut etai, &mut etat);
    }

    // Sine of the transmitted angle
    let sint = etai / etat * (1.0 - cosi * cosi).max(0.0).sqrt();
    if sint >= 1.0 {
        return 1.0;
    }

    let cost = (1.0 - sint * sint).max(0.0).sqrt();
    let cosi = cosi.abs();
    let rs = ((etat * cosi) - (etai * cost)) / ((etat * cosi) + (etai * cost));
    let rp = ((etai * cosi) - (etat * cost)) / ((etai * cosi) + (etat * cost));
    let kr = (rs * rs + rp * rp) / 2.0;

    // 0/0 only happens for grazing rays with matching indices
    if kr.is_nan() {
        1.0
    } else {
        kr
    }
}
