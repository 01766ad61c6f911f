//! Affine transforms applied to path coordinates

use glam::{DAffine2, DVec2, dvec2};

use crate::errors::{GeomError, Result};
use crate::types::Point2D;

/// A 2D affine map backed by `glam::DAffine2`.
///
/// Path iterators treat this as an opaque capability: they hand it flat
/// `[x0, y0, x1, y1, ...]` coordinate buffers and get them back mapped.
#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub struct AffineTransform {
    inner: DAffine2,
}

impl AffineTransform {
    pub const IDENTITY: AffineTransform = AffineTransform {
        inner: DAffine2::IDENTITY,
    };

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    pub fn translation(tx: f64, ty: f64) -> Self {
        Self {
            inner: DAffine2::from_translation(dvec2(tx, ty)),
        }
    }

    pub fn scale(sx: f64, sy: f64) -> Self {
        Self {
            inner: DAffine2::from_scale(dvec2(sx, sy)),
        }
    }

    /// Rotation by `theta` radians about the origin.
    pub fn rotation(theta: f64) -> Self {
        Self {
            inner: DAffine2::from_angle(theta),
        }
    }

    /// Build from the six matrix entries:
    ///
    /// ```text
    /// [ x' ]   [ m00 m01 m02 ] [ x ]
    /// [ y' ] = [ m10 m11 m12 ] [ y ]
    /// ```
    pub fn from_matrix(m00: f64, m10: f64, m01: f64, m11: f64, m02: f64, m12: f64) -> Self {
        Self {
            inner: DAffine2::from_cols_array(&[m00, m10, m01, m11, m02, m12]),
        }
    }

    /// Apply `self` first, then `next`.
    pub fn then(&self, next: &AffineTransform) -> Self {
        Self {
            inner: next.inner * self.inner,
        }
    }

    pub fn is_identity(&self) -> bool {
        self.inner == DAffine2::IDENTITY
    }

    pub fn transform_point(&self, p: Point2D) -> Point2D {
        self.inner.transform_point2(p.to_dvec2()).into()
    }

    #[inline]
    pub(crate) fn apply(&self, p: DVec2) -> DVec2 {
        self.inner.transform_point2(p)
    }

    /// Map `num_points` coordinate pairs from `src[src_off..]` into `dst[dst_off..]`.
    pub fn transform(
        &self,
        src: &[f64],
        src_off: usize,
        dst: &mut [f64],
        dst_off: usize,
        num_points: usize,
    ) -> Result<()> {
        let too_short = || {
            GeomError::invalid_argument(format!(
                "coordinate buffer too short for {num_points} points"
            ))
        };
        let len = num_points.checked_mul(2).ok_or_else(too_short)?;
        let src_end = src_off.checked_add(len).ok_or_else(too_short)?;
        let dst_end = dst_off.checked_add(len).ok_or_else(too_short)?;
        if src.len() < src_end || dst.len() < dst_end {
            return Err(too_short());
        }
        for i in 0..num_points {
            let p = self.apply(dvec2(src[src_off + 2 * i], src[src_off + 2 * i + 1]));
            dst[dst_off + 2 * i] = p.x;
            dst[dst_off + 2 * i + 1] = p.y;
        }
        Ok(())
    }

    /// Map `num_points` leading coordinate pairs of `coords` in place.
    pub fn transform_in_place(&self, coords: &mut [f64], num_points: usize) -> Result<()> {
        match num_points.checked_mul(2) {
            Some(len) if len <= coords.len() => {}
            _ => {
                return Err(GeomError::invalid_argument(format!(
                    "coordinate buffer too short for {num_points} points"
                )));
            }
        }
        for pair in coords.chunks_exact_mut(2).take(num_points) {
            let p = self.apply(dvec2(pair[0], pair[1]));
            pair[0] = p.x;
            pair[1] = p.y;
        }
        Ok(())
    }
}

impl From<DAffine2> for AffineTransform {
    fn from(inner: DAffine2) -> Self {
        Self { inner }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: Point2D, expected: Point2D) {
        const EPSILON: f64 = 1e-10;
        assert!(
            (actual.x - expected.x).abs() < EPSILON && (actual.y - expected.y).abs() < EPSILON,
            "{actual} != {expected}"
        );
    }

    #[test]
    fn translation_and_scale() {
        let t = AffineTransform::translation(2.0, 3.0);
        assert_eq!(t.transform_point(Point2D::new(1.0, 1.0)), Point2D::new(3.0, 4.0));

        let s = AffineTransform::scale(2.0, 0.5);
        assert_eq!(s.transform_point(Point2D::new(4.0, 4.0)), Point2D::new(8.0, 2.0));
    }

    #[test]
    fn composition_order() {
        let t = AffineTransform::scale(2.0, 2.0).then(&AffineTransform::translation(1.0, 0.0));
        assert_eq!(t.transform_point(Point2D::new(1.0, 1.0)), Point2D::new(3.0, 2.0));
    }

    #[test]
    fn rotation_quarter_turn() {
        let r = AffineTransform::rotation(std::f64::consts::FRAC_PI_2);
        assert_close(r.transform_point(Point2D::new(1.0, 0.0)), Point2D::new(0.0, 1.0));
    }

    #[test]
    fn from_matrix_layout() {
        // shear x by y, then translate
        let m = AffineTransform::from_matrix(1.0, 0.0, 1.0, 1.0, 5.0, 6.0);
        assert_eq!(m.transform_point(Point2D::new(1.0, 2.0)), Point2D::new(8.0, 8.0));
    }

    #[test]
    fn buffer_transform() {
        let t = AffineTransform::translation(1.0, 1.0);
        let src = [0.0, 0.0, 1.0, 2.0, 9.0, 9.0];
        let mut dst = [0.0; 6];
        t.transform(&src, 0, &mut dst, 2, 2).unwrap();
        assert_eq!(dst, [0.0, 0.0, 1.0, 1.0, 2.0, 3.0]);

        assert!(matches!(
            t.transform(&src, 4, &mut dst, 0, 2),
            Err(GeomError::InvalidArgument { .. })
        ));
    }

    #[test]
    fn in_place_only_touches_requested_points() {
        let t = AffineTransform::scale(10.0, 10.0);
        let mut coords = [1.0, 2.0, 3.0, 4.0];
        t.transform_in_place(&mut coords, 1).unwrap();
        assert_eq!(coords, [10.0, 20.0, 3.0, 4.0]);
        assert!(AffineTransform::identity().is_identity());
    }

    #[test]
    fn huge_offsets_are_rejected() {
        let t = AffineTransform::identity();
        let src = [0.0; 4];
        let mut dst = [0.0; 4];
        for (src_off, dst_off, n) in [
            (usize::MAX, 0, 1),
            (0, usize::MAX, 1),
            (0, 0, usize::MAX),
            (usize::MAX - 1, 0, 1),
        ] {
            assert!(matches!(
                t.transform(&src, src_off, &mut dst, dst_off, n),
                Err(GeomError::InvalidArgument { .. })
            ));
        }
        assert!(matches!(
            t.transform_in_place(&mut dst, usize::MAX),
            Err(GeomError::InvalidArgument { .. })
        ));
        assert_eq!(dst, [0.0; 4]);
    }
}
