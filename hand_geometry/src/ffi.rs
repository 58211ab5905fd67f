//! Flat C ABI over the geometry kernel, gesture rules and batch evaluator.
//!
//! Callers own every buffer. Nothing here allocates or keeps a pointer past
//! the call. Status-returning functions use `0` for success and a negative
//! code on failure.

use std::slice;

use crate::batch::batch_distances_into;
use crate::geometry::{angle, distance, Point3};
use crate::gesture::{is_fist, is_palm_open, is_pinch};

pub const HG_OK: i32 = 0;
pub const HG_NULL_POINTER: i32 = -1;
pub const HG_DEGENERATE: i32 = -2;

/// C layout of a 3D point.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RawPoint3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl From<RawPoint3> for Point3 {
    fn from(p: RawPoint3) -> Self {
        Point3::new(p.x, p.y, p.z)
    }
}

impl From<Point3> for RawPoint3 {
    fn from(p: Point3) -> Self {
        RawPoint3 {
            x: p.x,
            y: p.y,
            z: p.z,
        }
    }
}

// RawPoint3 and Point3 must stay layout-compatible for the batch call.
const _: () = assert!(std::mem::size_of::<RawPoint3>() == std::mem::size_of::<Point3>());
const _: () = assert!(std::mem::align_of::<RawPoint3>() == std::mem::align_of::<Point3>());

#[no_mangle]
pub extern "C" fn hg_distance(a: RawPoint3, b: RawPoint3) -> f64 {
    distance(a.into(), b.into())
}

/// Writes the angle at `b` in degrees to `out`. `out` is left untouched when
/// a ray has zero length.
///
/// # Safety
/// `out` must be null or valid for a write of one `f64`.
#[no_mangle]
pub unsafe extern "C" fn hg_angle(a: RawPoint3, b: RawPoint3, c: RawPoint3, out: *mut f64) -> i32 {
    if out.is_null() {
        return HG_NULL_POINTER;
    }
    match angle(a.into(), b.into(), c.into()) {
        Ok(deg) => {
            *out = deg;
            HG_OK
        }
        Err(_) => HG_DEGENERATE,
    }
}

#[no_mangle]
pub extern "C" fn hg_is_pinch(thumb_tip: RawPoint3, index_tip: RawPoint3) -> i32 {
    is_pinch(thumb_tip.into(), index_tip.into()) as i32
}

/// Reinterprets a caller buffer of points. A zero count never dereferences.
///
/// # Safety
/// When `count > 0`, `ptr` must be valid for `count` reads.
unsafe fn points<'a>(ptr: *const RawPoint3, count: usize) -> Option<&'a [Point3]> {
    if count == 0 {
        return Some(&[]);
    }
    if ptr.is_null() {
        return None;
    }
    Some(slice::from_raw_parts(ptr.cast::<Point3>(), count))
}

/// Returns `1` for a fist, `0` otherwise, or [`HG_NULL_POINTER`].
///
/// # Safety
/// `fingers` must be valid for `count` reads when `count > 0`.
#[no_mangle]
pub unsafe extern "C" fn hg_is_fist(fingers: *const RawPoint3, count: usize) -> i32 {
    match points(fingers, count) {
        Some(pts) => is_fist(pts) as i32,
        None => HG_NULL_POINTER,
    }
}

/// Returns `1` for an open palm, `0` otherwise, or [`HG_NULL_POINTER`].
///
/// # Safety
/// `fingers` must be valid for `count` reads when `count > 0`.
#[no_mangle]
pub unsafe extern "C" fn hg_is_palm_open(fingers: *const RawPoint3, count: usize) -> i32 {
    match points(fingers, count) {
        Some(pts) => is_palm_open(pts) as i32,
        None => HG_NULL_POINTER,
    }
}

/// Fills `out[i]` with the distance between `a[i]` and `b[i]` for `i < n`.
///
/// # Safety
/// When `n > 0`, `a` and `b` must be valid for `n` reads and `out` for `n`
/// writes, and `out` must not overlap the inputs.
#[no_mangle]
pub unsafe extern "C" fn hg_batch_distances(
    a: *const RawPoint3,
    b: *const RawPoint3,
    out: *mut f64,
    n: usize,
) -> i32 {
    if n == 0 {
        return HG_OK;
    }
    if out.is_null() {
        return HG_NULL_POINTER;
    }
    let (Some(a), Some(b)) = (points(a, n), points(b, n)) else {
        return HG_NULL_POINTER;
    };
    let out = slice::from_raw_parts_mut(out, n);
    match batch_distances_into(a, b, out) {
        Ok(()) => HG_OK,
        Err(_) => HG_DEGENERATE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(x: f64, y: f64, z: f64) -> RawPoint3 {
        RawPoint3 { x, y, z }
    }

    #[test]
    fn batch_through_c_abi() {
        let a = [raw(0.0, 0.0, 0.0), raw(1.0, 1.0, 1.0)];
        let b = [raw(3.0, 4.0, 0.0), raw(1.0, 1.0, 1.0)];
        let mut out = [0.0; 2];
        let status = unsafe { hg_batch_distances(a.as_ptr(), b.as_ptr(), out.as_mut_ptr(), 2) };
        assert_eq!(status, HG_OK);
        assert_eq!(out, [5.0, 0.0]);
    }

    #[test]
    fn null_buffers_rejected() {
        let a = [raw(0.0, 0.0, 0.0)];
        let mut out = [0.0; 1];
        let status =
            unsafe { hg_batch_distances(a.as_ptr(), std::ptr::null(), out.as_mut_ptr(), 1) };
        assert_eq!(status, HG_NULL_POINTER);
        let status = unsafe {
            hg_batch_distances(std::ptr::null(), std::ptr::null(), std::ptr::null_mut(), 0)
        };
        assert_eq!(status, HG_OK);
        assert_eq!(unsafe { hg_is_fist(std::ptr::null(), 3) }, HG_NULL_POINTER);
    }

    #[test]
    fn angle_status() {
        let mut out = -7.0;
        let o = raw(0.0, 0.0, 0.0);
        let status = unsafe { hg_angle(raw(0.0, 1.0, 0.0), o, raw(1.0, 0.0, 0.0), &mut out) };
        assert_eq!(status, HG_OK);
        assert!((out - 90.0).abs() < 1e-9);

        let mut untouched = -7.0;
        let status = unsafe { hg_angle(o, o, raw(1.0, 0.0, 0.0), &mut untouched) };
        assert_eq!(status, HG_DEGENERATE);
        assert_eq!(untouched, -7.0);
    }

    #[test]
    fn gesture_predicates() {
        assert_eq!(hg_is_pinch(raw(0.0, 0.0, 0.0), raw(0.03, 0.0, 0.0)), 1);
        assert_eq!(hg_is_pinch(raw(0.0, 0.0, 0.0), raw(0.1, 0.0, 0.0)), 0);
        let curled = [raw(0.0, 0.6, 0.0), raw(0.0, 0.9, 0.0)];
        assert_eq!(unsafe { hg_is_fist(curled.as_ptr(), 2) }, 1);
        assert_eq!(unsafe { hg_is_palm_open(curled.as_ptr(), 2) }, 0);
        assert_eq!(hg_distance(raw(0.0, 0.0, 0.0), raw(3.0, 4.0, 0.0)), 5.0);
    }
}
