//! Geometry helpers and post-processing passes over a parsed file.
//!
//! The bulge conversion follows "Version 2" of "Bulge to Arc" from
//! <http://www.lee-mac.com/bulgeconversion.html>.

use crate::document::DxfFile;
use crate::entities::EntityType;
use crate::types::Vector2;
use std::f64::consts::FRAC_PI_2;

/// A circular arc produced by bulge conversion.
///
/// Angles are in radians, counter-clockwise from the positive X axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcSegment {
    /// Circle center
    pub center: Vector2,
    /// Circle radius
    pub radius: f64,
    /// Start angle in radians
    pub start_angle: f64,
    /// End angle in radians
    pub end_angle: f64,
}

/// Convert a polyline segment with a bulge into its arc parameters.
///
/// `p1` and `p2` are consecutive vertex positions and `bulge` the signed
/// curvature attached to the first of them.  A negative bulge reverses
/// the winding, which swaps the start and end angles.
///
/// `bulge == 0` describes a straight segment (infinite radius) and is a
/// caller precondition violation.
pub fn bulge_to_arc(p1: Vector2, p2: Vector2, bulge: f64) -> ArcSegment {
    debug_assert!(bulge != 0.0, "bulge of 0 describes a straight segment");

    let radius = p1.distance(&p2) * (1.0 + bulge * bulge) / (4.0 * bulge);
    let center = p1.polar_offset(p1.angle_to(&p2) + (FRAC_PI_2 - 2.0 * bulge.atan()), radius);

    let mut start_angle = center.angle_to(&p1);
    let mut end_angle = center.angle_to(&p2);
    if bulge < 0.0 {
        std::mem::swap(&mut start_angle, &mut end_angle);
    }

    ArcSegment {
        center,
        radius,
        start_angle,
        end_angle,
    }
}

/// Reverse the winding direction of every ARC entity in the file.
///
/// Useful when a file's `$ANGDIR` is clockwise but a consumer needs
/// counter-clockwise angles: an arc from 45 to 135 degrees becomes one
/// from 315 to 225.  This is a one-way transform, not a toggle; applying
/// it twice restores the original angles.
///
/// Only ARC entities carry angles today; as more angle-dependent
/// entities are added this pass must learn about them.
pub fn swap_arc_winding(file: &mut DxfFile) {
    if let Some(entities) = file.entities_mut() {
        for entity in entities.entities_mut() {
            if let EntityType::Arc(arc) = entity {
                arc.start_angle = (360.0 - arc.start_angle).rem_euclid(360.0);
                arc.end_angle = (360.0 - arc.end_angle).rem_euclid(360.0);
            }
        }
    }
}

/// Rotate the start and end angle of every ARC entity by `degrees`.
///
/// Useful when a file's `$ANGBASE` is non-zero and a consumer needs
/// angles measured from zero.  A zero offset leaves the file untouched.
pub fn rotate_arcs(file: &mut DxfFile, degrees: f64) {
    if degrees == 0.0 {
        return;
    }

    if let Some(entities) = file.entities_mut() {
        for entity in entities.entities_mut() {
            if let EntityType::Arc(arc) = entity {
                arc.start_angle = (arc.start_angle + degrees).rem_euclid(360.0);
                arc.end_angle = (arc.end_angle + degrees).rem_euclid(360.0);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::record::DxfRecord;

    const EPS: f64 = 1e-10;

    fn arc_file(start: f64, end: f64) -> DxfFile {
        let pairs = [
            (0, "SECTION".to_string()),
            (2, "ENTITIES".to_string()),
            (0, "ARC".to_string()),
            (40, "1.0".to_string()),
            (50, format!("{}", start)),
            (51, format!("{}", end)),
            (0, "ENDSEC".to_string()),
        ];
        let records: Vec<DxfRecord> = pairs
            .iter()
            .map(|(c, v)| DxfRecord::new(*c, v.clone()))
            .collect();
        DxfFile::make_file(records).unwrap()
    }

    fn arc_angles(file: &DxfFile) -> (f64, f64) {
        match &file.entities().unwrap().entities()[0] {
            EntityType::Arc(arc) => (arc.start_angle, arc.end_angle),
            other => panic!("expected arc, got {:?}", other),
        }
    }

    #[test]
    fn test_semicircle_bulge() {
        let arc = bulge_to_arc(Vector2::new(0.0, 0.0), Vector2::new(1.0, 0.0), 1.0);
        assert!((arc.radius - 0.5).abs() < EPS);
        assert!((arc.center.x - 0.5).abs() < EPS);
        assert!(arc.center.y.abs() < EPS);
    }

    #[test]
    fn test_negative_bulge_swaps_angles() {
        let p1 = Vector2::new(0.0, 0.0);
        let p2 = Vector2::new(1.0, 0.0);
        let pos = bulge_to_arc(p1, p2, 0.5);
        let neg = bulge_to_arc(p2, p1, -0.5);
        // Same chord traversed the other way with opposite curvature
        // sweeps the same circle.
        assert!((pos.radius.abs() - neg.radius.abs()).abs() < EPS);
    }

    #[test]
    fn test_quarter_bulge_geometry() {
        // Bulge of tan(22.5 deg) is a 90-degree arc.
        let bulge = (std::f64::consts::PI / 8.0).tan();
        let arc = bulge_to_arc(Vector2::new(0.0, 0.0), Vector2::new(1.0, 1.0), bulge);
        assert!(arc.center.x.abs() < 1e-9);
        assert!((arc.center.y - 1.0).abs() < 1e-9);
        assert!((arc.radius - 1.0).abs() < 1e-9);
        assert!((arc.start_angle - (-FRAC_PI_2)).abs() < 1e-9);
        assert!(arc.end_angle.abs() < 1e-9);
    }

    #[test]
    fn test_swap_arc_winding() {
        let mut file = arc_file(45.0, 135.0);
        swap_arc_winding(&mut file);
        assert_eq!(arc_angles(&file), (315.0, 225.0));

        // Applying the transform twice restores the original angles.
        swap_arc_winding(&mut file);
        assert_eq!(arc_angles(&file), (45.0, 135.0));
    }

    #[test]
    fn test_swap_arc_winding_zero_angle() {
        let mut file = arc_file(0.0, 180.0);
        swap_arc_winding(&mut file);
        assert_eq!(arc_angles(&file), (0.0, 180.0));
    }

    #[test]
    fn test_rotate_arcs() {
        let mut file = arc_file(300.0, 100.0);
        rotate_arcs(&mut file, 90.0);
        assert_eq!(arc_angles(&file), (30.0, 190.0));
    }

    #[test]
    fn test_rotate_arcs_zero_is_noop() {
        let mut file = arc_file(12.5, 200.0);
        rotate_arcs(&mut file, 0.0);
        assert_eq!(arc_angles(&file), (12.5, 200.0));
    }
}
