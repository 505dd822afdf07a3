// src/core/analyzer/grade.rs

use crate::core::models::Grade;

/// Points awarded for serving over HTTPS.
pub const HTTPS_POINTS: usize = 2;

/// 2 points for HTTPS plus 1 per present graded header.
pub fn score(https: bool, present_headers: usize) -> usize {
    let https_points = if https { HTTPS_POINTS } else { 0 };
    https_points + present_headers
}

/// Maps a score to a letter; thresholds are checked top-down.
pub fn grade_for_score(score: usize) -> Grade {
    match score {
        s if s >= 6 => Grade::APlus,
        5 => Grade::A,
        4 => Grade::B,
        3 => Grade::C,
        _ => Grade::D,
    }
}

pub fn grade(https: bool, present_headers: usize) -> Grade {
    grade_for_score(score(https, present_headers))
}
