//! Threshold rules turning hand landmarks into gesture labels.
//!
//! Rules are evaluated independently on every call. The fist and open palm
//! predicates compare y coordinates against a curl line: larger y means the
//! fingertip sits lower in the frame, which the tracking convention treats
//! as curled.

pub mod landmarks;
pub use landmarks::{
    HandLandmark, LandmarkSet, FINGER_PIPS, FINGER_TIPS, LANDMARK_COUNT, PALM_BASE,
};

pub mod pose;
pub use pose::{classify_pose, HandPose};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::{distance, Point3};

/// Thumb-to-index distance under which the hand is pinching.
pub const PINCH_THRESHOLD: f64 = 0.05;

/// y coordinate separating curled from raised fingertips.
pub const CURL_Y: f64 = 0.5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GestureError {
    #[error("expected at least {expected} landmarks, found {found}")]
    TooFewLandmarks { expected: usize, found: usize },
}

/// Tunable thresholds used by [`classify`].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GestureThresholds {
    /// Maximum thumb-to-index distance (exclusive) counted as a pinch.
    pub pinch: f64,
    /// Curl line for the fist and open palm rules.
    pub curl_y: f64,
}

impl Default for GestureThresholds {
    fn default() -> Self {
        Self {
            pinch: PINCH_THRESHOLD,
            curl_y: CURL_Y,
        }
    }
}

/// Discrete gesture verdict for one frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Gesture {
    Pinch,
    Fist,
    OpenPalm,
    None,
}

impl std::fmt::Display for Gesture {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Gesture::Pinch => "pinch",
            Gesture::Fist => "fist",
            Gesture::OpenPalm => "open palm",
            Gesture::None => "none",
        };
        f.write_str(label)
    }
}

/// Returns `true` when the thumb and index tips are closer than
/// [`PINCH_THRESHOLD`].
pub fn is_pinch(thumb_tip: Point3, index_tip: Point3) -> bool {
    is_pinch_with(thumb_tip, index_tip, PINCH_THRESHOLD)
}

pub fn is_pinch_with(thumb_tip: Point3, index_tip: Point3, threshold: f64) -> bool {
    distance(thumb_tip, index_tip) < threshold
}

/// Returns `true` when every finger point has `y >= 0.5`.
///
/// An empty slice is vacuously a fist.
pub fn is_fist(fingers: &[Point3]) -> bool {
    is_fist_with(fingers, CURL_Y)
}

pub fn is_fist_with(fingers: &[Point3], curl_y: f64) -> bool {
    fingers.iter().all(|p| p.y >= curl_y)
}

/// Returns `true` when no finger point has `y > 0.5`.
///
/// Points exactly on the curl line satisfy both this and [`is_fist`], and an
/// empty slice is vacuously an open palm.
pub fn is_palm_open(fingers: &[Point3]) -> bool {
    is_palm_open_with(fingers, CURL_Y)
}

pub fn is_palm_open_with(fingers: &[Point3], curl_y: f64) -> bool {
    !fingers.iter().any(|p| p.y > curl_y)
}

/// Combines the individual rules into a single verdict.
///
/// Pinch takes precedence. Fist and open palm are judged on the five
/// fingertips and only reported when exactly one of the two holds, so a hand
/// resting on the curl line yields [`Gesture::None`].
pub fn classify(landmarks: &LandmarkSet, thresholds: &GestureThresholds) -> Gesture {
    let thumb = landmarks.get(HandLandmark::ThumbTip);
    let index = landmarks.get(HandLandmark::IndexTip);
    let verdict = if is_pinch_with(thumb, index, thresholds.pinch) {
        Gesture::Pinch
    } else {
        let tips = landmarks.fingertips();
        let fist = is_fist_with(&tips, thresholds.curl_y);
        let palm = is_palm_open_with(&tips, thresholds.curl_y);
        match (fist, palm) {
            (true, false) => Gesture::Fist,
            (false, true) => Gesture::OpenPalm,
            _ => Gesture::None,
        }
    };
    log::debug!("classified landmark set as {}", verdict);
    verdict
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_y(ys: &[f64]) -> Vec<Point3> {
        ys.iter().map(|&y| Point3::new(0.5, y, 0.0)).collect()
    }

    fn hand_with_tips(tip_y: f64) -> LandmarkSet {
        let mut pts = vec![Point3::new(0.5, 0.5, 0.0); LANDMARK_COUNT];
        for (n, &i) in FINGER_TIPS.iter().enumerate() {
            pts[i] = Point3::new(0.1 * n as f64, tip_y, 0.0);
        }
        LandmarkSet::new(pts).unwrap()
    }

    #[test]
    fn pinch_threshold() {
        let thumb = Point3::new(0.0, 0.0, 0.0);
        assert!(is_pinch(thumb, Point3::new(0.03, 0.0, 0.0)));
        assert!(!is_pinch(thumb, Point3::new(0.1, 0.0, 0.0)));
        assert!(is_pinch_with(thumb, Point3::new(0.1, 0.0, 0.0), 0.2));
    }

    #[test]
    fn fist_rule() {
        assert!(is_fist(&with_y(&[0.6, 0.7, 0.55, 0.9])));
        assert!(!is_palm_open(&with_y(&[0.6, 0.7, 0.55, 0.9])));
        assert!(!is_fist(&with_y(&[0.6, 0.4, 0.55, 0.9])));
    }

    #[test]
    fn open_palm_rule() {
        assert!(is_palm_open(&with_y(&[0.1, 0.2, 0.05, 0.3])));
        assert!(!is_fist(&with_y(&[0.1, 0.2, 0.05, 0.3])));
    }

    #[test]
    fn boundary_satisfies_both() {
        let on_line = with_y(&[0.5, 0.5]);
        assert!(is_fist(&on_line));
        assert!(is_palm_open(&on_line));
    }

    #[test]
    fn empty_set_satisfies_both() {
        assert!(is_fist(&[]));
        assert!(is_palm_open(&[]));
    }

    #[test]
    fn classify_resolves_boundary_to_none() {
        let t = GestureThresholds::default();
        assert_eq!(classify(&hand_with_tips(0.8), &t), Gesture::Fist);
        assert_eq!(classify(&hand_with_tips(0.2), &t), Gesture::OpenPalm);
        assert_eq!(classify(&hand_with_tips(0.5), &t), Gesture::None);
    }

    #[test]
    fn classify_prefers_pinch() {
        let mut pts = vec![Point3::new(0.5, 0.8, 0.0); LANDMARK_COUNT];
        pts[4] = Point3::new(0.40, 0.8, 0.0);
        pts[8] = Point3::new(0.42, 0.8, 0.0);
        let set = LandmarkSet::new(pts).unwrap();
        assert_eq!(classify(&set, &GestureThresholds::default()), Gesture::Pinch);
        let strict = GestureThresholds {
            pinch: 0.01,
            ..Default::default()
        };
        assert_eq!(classify(&set, &strict), Gesture::Fist);
    }

    #[test]
    fn display_labels() {
        assert_eq!(Gesture::OpenPalm.to_string(), "open palm");
        assert_eq!(Gesture::None.to_string(), "none");
    }

    #[test]
    fn gesture_serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&Gesture::OpenPalm).unwrap(),
            "\"open_palm\""
        );
    }
}
