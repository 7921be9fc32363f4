//! Scroll-overlay intensity calculation.
//!
//! The status area is covered by an opaque overlay as the recents list
//! scrolls up over it. The intensity is a pure function of the list
//! offset, so the rendering layer can evaluate it on every frame
//! without any shared state.

/// Opacity of the cover overlay for a given list offset.
///
/// Falls off linearly from 1.0 at offset 0 to 0.0 at `full_cover`.
/// The upper boundary is excluded: an offset at or past `full_cover`
/// yields 0, as does any negative offset.
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn overlay_alpha(offset: i32, full_cover: f32) -> f32 {
    if offset >= 0 && (offset as f32) < full_cover {
        1.0 - offset as f32 / full_cover
    } else {
        0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_offset_is_fully_opaque() {
        assert!((overlay_alpha(0, 100.0) - 1.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_threshold_offset_is_transparent() {
        assert!((overlay_alpha(100, 100.0) - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_midpoint_is_half() {
        assert!((overlay_alpha(50, 100.0) - 0.5).abs() < f32::EPSILON);
    }

    #[test]
    fn test_negative_offset_is_transparent() {
        assert!((overlay_alpha(-10, 100.0) - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_past_threshold_is_transparent() {
        assert!((overlay_alpha(250, 100.0) - 0.0).abs() < f32::EPSILON);
    }

    #[test]
    fn test_zero_threshold_is_transparent() {
        assert!((overlay_alpha(0, 0.0) - 0.0).abs() < f32::EPSILON);
    }
}
