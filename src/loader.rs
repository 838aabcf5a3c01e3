/// Start-up phases of the page: the loading overlay, then the performance
/// badge once a score has been measured.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoadPhase {
    Loading,
    Ready,
    Measured(u8),
}

impl LoadPhase {
    pub fn is_loading(self) -> bool {
        matches!(self, LoadPhase::Loading)
    }

    pub fn score(self) -> Option<u8> {
        match self {
            LoadPhase::Measured(score) => Some(score),
            _ => None,
        }
    }
}

pub const MIN_SCORE: u8 = 85;
const SCORE_SPREAD: f64 = 15.0;

/// Maps a uniform sample in [0, 1) onto a score in 85..=99.
pub fn performance_score(sample: f64) -> u8 {
    let sample = if sample.is_finite() { sample.clamp(0.0, 1.0) } else { 0.0 };
    let offset = (sample * SCORE_SPREAD).floor().min(SCORE_SPREAD - 1.0);
    MIN_SCORE + offset as u8
}

pub fn badge_class(score: u8) -> &'static str {
    if score > 90 {
        "perf-badge good"
    } else {
        "perf-badge fair"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scores_stay_within_range() {
        assert_eq!(performance_score(0.0), 85);
        assert_eq!(performance_score(0.5), 92);
        assert_eq!(performance_score(0.9999), 99);
        assert_eq!(performance_score(1.0), 99);
        assert_eq!(performance_score(-3.0), 85);
        assert_eq!(performance_score(f64::NAN), 85);
    }

    #[test]
    fn badge_turns_green_above_ninety() {
        assert_eq!(badge_class(90), "perf-badge fair");
        assert_eq!(badge_class(91), "perf-badge good");
    }

    #[test]
    fn phases() {
        assert!(LoadPhase::Loading.is_loading());
        assert_eq!(LoadPhase::Ready.score(), None);
        assert_eq!(LoadPhase::Measured(93).score(), Some(93));
    }
}
