//! Hand landmark indexing and measures derived from a full landmark set.
//!
//! Landmarks follow the 21-point MediaPipe hand convention: normalized image
//! coordinates with y growing downward, so a fingertip lower in the frame
//! has a larger y.

use serde::{Deserialize, Serialize};

use super::GestureError;
use crate::geometry::{distance, Point3};

/// Number of points in a complete hand landmark set.
pub const LANDMARK_COUNT: usize = 21;

/// Indices of the five fingertips, thumb first.
pub const FINGER_TIPS: [usize; 5] = [4, 8, 12, 16, 20];

/// Indices of the joint each fingertip is compared against, thumb first.
pub const FINGER_PIPS: [usize; 5] = [3, 6, 10, 14, 18];

/// Wrist and the four finger bases, averaged to find the palm center.
pub const PALM_BASE: [usize; 5] = [0, 5, 9, 13, 17];

/// Named anatomical points of a tracked hand.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

impl HandLandmark {
    /// Position of this landmark within a landmark set.
    pub fn index(self) -> usize {
        self as usize
    }
}

/// The landmark points of one hand in one frame.
///
/// Serialized as a plain array of points; deserializing goes through
/// [`LandmarkSet::new`], so short arrays are rejected there too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<Point3>", into = "Vec<Point3>")]
pub struct LandmarkSet {
    points: Vec<Point3>,
}

impl LandmarkSet {
    /// Wraps the points of a frame, rejecting sets with fewer than
    /// [`LANDMARK_COUNT`] points. Extra trailing points are kept but unused.
    pub fn new(points: Vec<Point3>) -> Result<Self, GestureError> {
        if points.len() < LANDMARK_COUNT {
            return Err(GestureError::TooFewLandmarks {
                expected: LANDMARK_COUNT,
                found: points.len(),
            });
        }
        Ok(Self { points })
    }

    pub fn points(&self) -> &[Point3] {
        &self.points
    }

    pub fn get(&self, landmark: HandLandmark) -> Point3 {
        self.points[landmark.index()]
    }

    /// The five fingertips, thumb first.
    pub fn fingertips(&self) -> [Point3; 5] {
        FINGER_TIPS.map(|i| self.points[i])
    }

    /// Distance between the thumb tip and the index tip.
    pub fn pinch_distance(&self) -> f64 {
        distance(
            self.get(HandLandmark::ThumbTip),
            self.get(HandLandmark::IndexTip),
        )
    }

    /// Which fingers are extended, thumb first.
    ///
    /// The thumb counts as extended when its tip is horizontally farther
    /// from the index MCP than its IP joint is, which holds for either hand.
    /// The other fingers count when the tip is above the PIP joint.
    pub fn fingers_extended(&self) -> [bool; 5] {
        let mut extended = [false; 5];
        let thumb_tip = self.points[FINGER_TIPS[0]];
        let thumb_ip = self.points[FINGER_PIPS[0]];
        let anchor = self.get(HandLandmark::IndexMcp).x;
        extended[0] = (thumb_tip.x - anchor).abs() > (thumb_ip.x - anchor).abs();
        for finger in 1..5 {
            let tip = self.points[FINGER_TIPS[finger]];
            let pip = self.points[FINGER_PIPS[finger]];
            extended[finger] = tip.y < pip.y;
        }
        extended
    }

    /// Mean of the wrist and the four finger bases.
    pub fn palm_center(&self) -> Point3 {
        let sum = PALM_BASE
            .iter()
            .fold(Point3::origin(), |acc, &i| acc + self.points[i]);
        sum * (1.0 / PALM_BASE.len() as f64)
    }
}

impl TryFrom<Vec<Point3>> for LandmarkSet {
    type Error = GestureError;

    fn try_from(points: Vec<Point3>) -> Result<Self, Self::Error> {
        Self::new(points)
    }
}

impl From<LandmarkSet> for Vec<Point3> {
    fn from(set: LandmarkSet) -> Self {
        set.points
    }
}
