//! The square outline uploaded once at startup.

use linebox_engine::render::LineVertex;

/// Four independent segments (eight endpoints) tracing a square of side
/// `length` centered on the origin, clockwise from the top-left corner.
pub fn square_outline(length: f32) -> [LineVertex; 8] {
    let h = length / 2.0;

    let top_left = LineVertex::new(-h, h, 0.0);
    let top_right = LineVertex::new(h, h, 0.0);
    let bottom_right = LineVertex::new(h, -h, 0.0);
    let bottom_left = LineVertex::new(-h, -h, 0.0);

    [
        top_left, top_right,
        top_right, bottom_right,
        bottom_right, bottom_left,
        bottom_left, top_left,
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn outline_has_eight_points_and_24_floats() {
        let v = square_outline(100.0);
        assert_eq!(v.len(), 8);
        assert_eq!(std::mem::size_of_val(&v), 24 * std::mem::size_of::<f32>());
    }

    #[test]
    fn segments_close_the_loop() {
        let v = square_outline(100.0);
        // Each segment starts where the previous one ended.
        for seg in 1..4 {
            assert_eq!(v[seg * 2], v[seg * 2 - 1]);
        }
        assert_eq!(v[7], v[0]);
    }

    #[test]
    fn centered_with_requested_side() {
        let v = square_outline(100.0);
        for p in v {
            assert_eq!(p.position[0].abs(), 50.0);
            assert_eq!(p.position[1].abs(), 50.0);
            assert_eq!(p.position[2], 0.0);
        }
        let sum: f32 = v.iter().map(|p| p.position[0] + p.position[1]).sum();
        assert_eq!(sum, 0.0);
    }
}
