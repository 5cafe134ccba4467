// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Out-of-bounds detection and snap anchor resolution.
//!
//! The resolver works in a frame centered on the middle of the valid offset
//! range: with `h = max((content - viewport) / 2, 0)` per axis, an absolute
//! offset `p` maps to `p - h`, and the valid range becomes `[-h, h]`. The
//! anchor is the centered offset clamped into that box, shifted back into
//! absolute coordinates.

use kurbo::{Point, Vec2};

use crate::ScrollGeometry;

/// Outcome of resolving a position against the valid offset range.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum SnapResolution {
    /// The position is a valid resting offset; no snap is needed.
    InBounds,
    /// The position is out of bounds and should settle at `anchor`.
    Snap {
        /// Nearest valid resting offset, in absolute coordinates.
        anchor: Point,
    },
}

impl SnapResolution {
    /// Returns the anchor if a snap is needed.
    #[must_use]
    pub const fn anchor(self) -> Option<Point> {
        match self {
            Self::InBounds => None,
            Self::Snap { anchor } => Some(anchor),
        }
    }
}

/// Half of the valid offset range on each axis, never negative.
#[must_use]
pub fn half_bounds(geometry: &ScrollGeometry) -> Vec2 {
    geometry.max_offset() / 2.0
}

/// Resolves a position expressed relative to the center of the valid range.
///
/// Returns `None` when `centered` lies within `[-half.x, half.x] × [-half.y, half.y]`,
/// otherwise the nearest point of that box (still centered).
#[must_use]
pub fn resolve_centered(centered: Point, half: Vec2) -> Option<Point> {
    let in_x = -half.x <= centered.x && centered.x <= half.x;
    let in_y = -half.y <= centered.y && centered.y <= half.y;
    if in_x && in_y {
        return None;
    }
    Some(Point::new(
        centered.x.clamp(-half.x, half.x),
        centered.y.clamp(-half.y, half.y),
    ))
}

/// Decides whether `position` needs to snap back and where to.
#[must_use]
pub fn resolve_snap(position: Point, geometry: &ScrollGeometry) -> SnapResolution {
    let half = half_bounds(geometry);
    match resolve_centered(position - half, half) {
        None => SnapResolution::InBounds,
        Some(anchor) => SnapResolution::Snap {
            anchor: anchor + half,
        },
    }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::*;

    fn square_geometry() -> ScrollGeometry {
        ScrollGeometry::new(Size::new(1000.0, 1000.0), Size::new(300.0, 300.0))
    }

    #[test]
    fn half_bounds_match_range() {
        assert_eq!(half_bounds(&square_geometry()), Vec2::new(350.0, 350.0));
        let locked = ScrollGeometry::new(Size::new(100.0, 100.0), Size::new(300.0, 300.0));
        assert_eq!(half_bounds(&locked), Vec2::ZERO);
    }

    #[test]
    fn centered_origin_is_in_bounds() {
        let half = Vec2::new(350.0, 350.0);
        assert_eq!(resolve_centered(Point::ZERO, half), None);
        assert_eq!(resolve_centered(Point::new(-350.0, 350.0), half), None);
    }

    #[test]
    fn centered_overshoot_clamps_to_edge() {
        let half = Vec2::new(350.0, 350.0);
        assert_eq!(
            resolve_centered(Point::new(400.0, 0.0), half),
            Some(Point::new(350.0, 0.0))
        );
        assert_eq!(
            resolve_centered(Point::new(-400.0, 500.0), half),
            Some(Point::new(-350.0, 350.0))
        );
    }

    #[test]
    fn absolute_resolution_uses_top_left_offsets() {
        let geometry = square_geometry();
        assert_eq!(
            resolve_snap(Point::new(0.0, 0.0), &geometry),
            SnapResolution::InBounds
        );
        assert_eq!(
            resolve_snap(Point::new(700.0, 700.0), &geometry),
            SnapResolution::InBounds
        );
        // Centered (400, 0) is absolute (750, 350).
        assert_eq!(
            resolve_snap(Point::new(750.0, 350.0), &geometry).anchor(),
            Some(Point::new(700.0, 350.0))
        );
        assert_eq!(
            resolve_snap(Point::new(-30.0, 720.0), &geometry).anchor(),
            Some(Point::new(0.0, 700.0))
        );
    }

    #[test]
    fn locked_axis_anchors_at_zero() {
        let geometry = ScrollGeometry::new(Size::new(1000.0, 200.0), Size::new(300.0, 300.0));
        assert_eq!(
            resolve_snap(Point::new(100.0, 15.0), &geometry).anchor(),
            Some(Point::new(100.0, 0.0))
        );
    }
}
