//! Static hand poses recognized from the pattern of extended fingers.

use serde::Serialize;

use super::LandmarkSet;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HandPose {
    Palm,
    Fist,
    ThumbsUp,
    Pointing,
    Peace,
    Unknown,
}

impl std::fmt::Display for HandPose {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            HandPose::Palm => "palm",
            HandPose::Fist => "fist",
            HandPose::ThumbsUp => "thumbs up",
            HandPose::Pointing => "pointing",
            HandPose::Peace => "peace",
            HandPose::Unknown => "unknown",
        };
        f.write_str(label)
    }
}

/// Classifies the hand pose from [`LandmarkSet::fingers_extended`].
///
/// Rules are checked in order: all five extended is a palm; no finger other
/// than the thumb extended is a fist or a thumbs up depending on the thumb;
/// only the index is pointing; index and middle alone is peace.
pub fn classify_pose(landmarks: &LandmarkSet) -> HandPose {
    let [thumb, index, middle, ring, pinky] = landmarks.fingers_extended();
    if thumb && index && middle && ring && pinky {
        return HandPose::Palm;
    }
    if !(index || middle || ring || pinky) {
        return if thumb {
            HandPose::ThumbsUp
        } else {
            HandPose::Fist
        };
    }
    match (index, middle, ring, pinky) {
        (true, false, false, false) => HandPose::Pointing,
        (true, true, false, false) => HandPose::Peace,
        _ => HandPose::Unknown,
    }
}
