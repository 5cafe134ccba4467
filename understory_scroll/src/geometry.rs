// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Clamping, rubber-banding, and axis masking.
//!
//! The valid scroll range on an axis is `[0, content - viewport]`. Offsets
//! outside that range are never resting positions, but they are legal while a
//! drag is in progress: [`rubber_band_axis`] maps them to a damped stretch past
//! the edge.

use kurbo::{Point, Rect, Size, Vec2};

bitflags::bitflags! {
    /// Axes along which content extends past the viewport.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct ScrollAxes: u8 {
        /// Content is wider than the viewport.
        const HORIZONTAL = 1 << 0;
        /// Content is taller than the viewport.
        const VERTICAL = 1 << 1;
    }
}

impl Default for ScrollAxes {
    fn default() -> Self {
        Self::empty()
    }
}

impl ScrollAxes {
    /// Derives the scrollable axes from content and viewport sizes.
    ///
    /// An axis is scrollable iff the content extent on it strictly exceeds the
    /// viewport extent.
    #[must_use]
    pub fn from_sizes(content: Size, viewport: Size) -> Self {
        let mut axes = Self::empty();
        if content.width > viewport.width {
            axes |= Self::HORIZONTAL;
        }
        if content.height > viewport.height {
            axes |= Self::VERTICAL;
        }
        axes
    }

    /// Zeroes the components of `v` that lie on non-scrollable axes.
    ///
    /// This is the only place drag translations and release velocities are
    /// filtered, so motion can never leak onto a locked axis.
    #[must_use]
    pub fn mask(self, v: Vec2) -> Vec2 {
        Vec2::new(
            if self.contains(Self::HORIZONTAL) { v.x } else { 0.0 },
            if self.contains(Self::VERTICAL) { v.y } else { 0.0 },
        )
    }
}

/// Clamps `value` into the valid scroll range `[0, content - viewport]`.
///
/// When the content is not larger than the viewport the range collapses to `0`.
#[must_use]
pub fn clamp_axis(value: f64, content: f64, viewport: f64) -> f64 {
    value.min(content - viewport).max(0.0)
}

/// Applies rubber-band resistance to the part of `value` outside the valid range.
///
/// Values inside `[0, content - viewport]` are returned unchanged. The excess
/// past either edge is scaled by `resistance`, so the result is monotonic in
/// `value` for any non-negative `resistance`.
#[must_use]
pub fn rubber_band_axis(value: f64, content: f64, viewport: f64, resistance: f64) -> f64 {
    let clamped = clamp_axis(value, content, viewport);
    let overshoot = value - clamped;
    clamped + overshoot * resistance
}

/// Content and viewport extents plus the scrollable axes derived from them.
///
/// Constructing a geometry is the only way to obtain a [`ScrollAxes`] value
/// paired with its sizes, which keeps the two in sync.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollGeometry {
    content: Size,
    viewport: Size,
    axes: ScrollAxes,
}

impl ScrollGeometry {
    /// Creates a geometry; non-finite or negative extents are treated as zero.
    #[must_use]
    pub fn new(content: Size, viewport: Size) -> Self {
        let content = sanitize_size(content);
        let viewport = sanitize_size(viewport);
        Self {
            content,
            viewport,
            axes: ScrollAxes::from_sizes(content, viewport),
        }
    }

    /// Returns the content size.
    #[must_use]
    pub const fn content(&self) -> Size {
        self.content
    }

    /// Returns the viewport size.
    #[must_use]
    pub const fn viewport(&self) -> Size {
        self.viewport
    }

    /// Returns the scrollable axes.
    #[must_use]
    pub const fn axes(&self) -> ScrollAxes {
        self.axes
    }

    /// Largest valid offset on each axis; zero on axes that do not scroll.
    #[must_use]
    pub fn max_offset(&self) -> Vec2 {
        Vec2::new(
            (self.content.width - self.viewport.width).max(0.0),
            (self.content.height - self.viewport.height).max(0.0),
        )
    }

    /// Clamps `point` into the valid offset range.
    #[must_use]
    pub fn clamp(&self, point: Point) -> Point {
        Point::new(
            clamp_axis(point.x, self.content.width, self.viewport.width),
            clamp_axis(point.y, self.content.height, self.viewport.height),
        )
    }

    /// Rubber-bands each axis of `point` independently.
    #[must_use]
    pub fn rubber_band(&self, point: Point, resistance: f64) -> Point {
        Point::new(
            rubber_band_axis(
                point.x,
                self.content.width,
                self.viewport.width,
                resistance,
            ),
            rubber_band_axis(
                point.y,
                self.content.height,
                self.viewport.height,
                resistance,
            ),
        )
    }

    /// Returns `true` if `point` is a valid resting offset.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        self.clamp(point) == point
    }

    /// The visible window in content coordinates for the given offset.
    #[must_use]
    pub fn visible_rect(&self, origin: Point) -> Rect {
        Rect::from_origin_size(origin, self.viewport)
    }
}

pub(crate) fn finite_or_zero(value: f64) -> f64 {
    if value.is_finite() { value } else { 0.0 }
}

pub(crate) fn sanitize_vec(v: Vec2) -> Vec2 {
    Vec2::new(finite_or_zero(v.x), finite_or_zero(v.y))
}

pub(crate) fn sanitize_point(p: Point) -> Point {
    Point::new(finite_or_zero(p.x), finite_or_zero(p.y))
}

fn sanitize_size(size: Size) -> Size {
    Size::new(
        finite_or_zero(size.width).max(0.0),
        finite_or_zero(size.height).max(0.0),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_stays_in_valid_range() {
        for value in [-1.0e9, -50.0, 0.0, 120.0, 700.0, 701.0, 1.0e9] {
            let clamped = clamp_axis(value, 1000.0, 300.0);
            assert!(
                (0.0..=700.0).contains(&clamped),
                "clamp({value}) escaped the range: {clamped}"
            );
        }
        // Content smaller than the viewport collapses the range to zero.
        assert_eq!(clamp_axis(-20.0, 100.0, 300.0), 0.0);
        assert_eq!(clamp_axis(40.0, 100.0, 300.0), 0.0);
    }

    #[test]
    fn rubber_band_is_identity_in_range() {
        for value in [0.0, 1.5, 350.0, 700.0] {
            assert_eq!(rubber_band_axis(value, 1000.0, 300.0, 0.3), value);
        }
    }

    #[test]
    fn rubber_band_damps_overshoot() {
        assert!((rubber_band_axis(-100.0, 1000.0, 300.0, 0.3) + 30.0).abs() < 1e-9);
        assert!((rubber_band_axis(800.0, 1000.0, 300.0, 0.3) - 730.0).abs() < 1e-9);
    }

    #[test]
    fn rubber_band_is_monotonic() {
        let mut previous = f64::NEG_INFINITY;
        let mut value = -500.0;
        while value <= 1500.0 {
            let banded = rubber_band_axis(value, 1000.0, 300.0, 0.3);
            assert!(
                banded >= previous,
                "rubber band decreased at {value}: {banded} < {previous}"
            );
            previous = banded;
            value += 7.5;
        }
    }

    #[test]
    fn axes_follow_sizes() {
        let viewport = Size::new(300.0, 300.0);
        assert_eq!(
            ScrollAxes::from_sizes(Size::new(1000.0, 1000.0), viewport),
            ScrollAxes::all()
        );
        assert_eq!(
            ScrollAxes::from_sizes(Size::new(1000.0, 300.0), viewport),
            ScrollAxes::HORIZONTAL
        );
        assert_eq!(
            ScrollAxes::from_sizes(Size::new(300.0, 301.0), viewport),
            ScrollAxes::VERTICAL
        );
        assert!(ScrollAxes::from_sizes(Size::new(200.0, 300.0), viewport).is_empty());
    }

    #[test]
    fn mask_zeroes_locked_axes() {
        let v = Vec2::new(12.0, -8.0);
        assert_eq!(ScrollAxes::all().mask(v), v);
        assert_eq!(ScrollAxes::HORIZONTAL.mask(v), Vec2::new(12.0, 0.0));
        assert_eq!(ScrollAxes::VERTICAL.mask(v), Vec2::new(0.0, -8.0));
        assert_eq!(ScrollAxes::empty().mask(v), Vec2::ZERO);
    }

    #[test]
    fn geometry_sanitizes_degenerate_sizes() {
        let geometry = ScrollGeometry::new(
            Size::new(f64::NAN, -40.0),
            Size::new(300.0, f64::INFINITY),
        );
        assert_eq!(geometry.content(), Size::ZERO);
        assert_eq!(geometry.viewport(), Size::new(300.0, 0.0));
        assert!(geometry.axes().is_empty());
        assert_eq!(geometry.max_offset(), Vec2::ZERO);
        assert_eq!(geometry.clamp(Point::new(50.0, -50.0)), Point::ZERO);
    }

    #[test]
    fn geometry_contains_only_valid_offsets() {
        let geometry = ScrollGeometry::new(Size::new(1000.0, 500.0), Size::new(300.0, 300.0));
        assert!(geometry.contains(Point::new(0.0, 0.0)));
        assert!(geometry.contains(Point::new(700.0, 200.0)));
        assert!(!geometry.contains(Point::new(701.0, 200.0)));
        assert!(!geometry.contains(Point::new(10.0, -0.5)));
        assert_eq!(
            geometry.visible_rect(Point::new(10.0, 20.0)),
            Rect::new(10.0, 20.0, 310.0, 320.0)
        );
    }
}
