//! Navigable-surface sampling seam.

use glam::Vec3;
use tracing::trace;

/// External navigable surface (precomputed mesh/graph), queried for the
/// nearest valid point.
pub trait NavigableSurface {
    /// Nearest point on the surface within `radius` of `point`, if any.
    fn sample(&self, point: Vec3, radius: f32) -> Option<Vec3>;
}

/// Resolves a clicked point against the surface.
///
/// Falls back to the raw (possibly off-mesh) point when no surface lies
/// within `radius`; the miss is a policy fallback, not an error.
#[must_use]
pub fn resolve_point<S: NavigableSurface + ?Sized>(surface: &S, point: Vec3, radius: f32) -> Vec3 {
    match surface.sample(point, radius) {
        Some(snapped) => snapped,
        None => {
            trace!(
                "no navigable surface within {} of {:?}, using raw point",
                radius,
                point
            );
            point
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::ScriptedSurface;

    #[test]
    fn test_resolve_snaps_to_surface_point_in_range() {
        let surface = ScriptedSurface::snapping_to(Vec3::new(1.0, 0.0, 1.0));
        let resolved = resolve_point(&surface, Vec3::new(1.5, 0.0, 1.0), 4.0);
        assert_eq!(resolved, Vec3::new(1.0, 0.0, 1.0));
    }

    #[test]
    fn test_resolve_falls_back_to_raw_point() {
        let surface = ScriptedSurface::empty();
        let clicked = Vec3::new(-3.0, 2.0, 9.0);
        assert_eq!(resolve_point(&surface, clicked, 4.0), clicked);
    }

    #[test]
    fn test_resolve_ignores_surface_outside_radius() {
        let surface = ScriptedSurface::snapping_to(Vec3::new(100.0, 0.0, 0.0));
        let clicked = Vec3::ZERO;
        assert_eq!(resolve_point(&surface, clicked, 4.0), clicked);
    }
}
