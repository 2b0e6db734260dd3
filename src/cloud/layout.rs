//! Spiral placement of word boxes on the canvas.

/// Top-left pixel position chosen for a word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Placement {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct BoundingBox {
    x: i32,
    y: i32,
    width: i32,
    height: i32,
}

impl BoundingBox {
    fn intersects(&self, other: &BoundingBox) -> bool {
        self.x < other.x + other.width
            && other.x < self.x + self.width
            && self.y < other.y + other.height
            && other.y < self.y + self.height
    }
}

/// Angular step between probe positions, in radians.
const STEP: f32 = 0.35;
/// Radial growth per radian; one full turn moves roughly 13px outward.
const GROWTH: f32 = 2.0;
/// Blank margin kept around every placed word.
const PADDING: i32 = 4;

/// Places axis-aligned word boxes along an archimedean spiral from the
/// canvas center outward. Words placed earlier (the most frequent ones)
/// claim the center.
pub(crate) struct SpiralLayout {
    width: i32,
    height: i32,
    occupied: Vec<BoundingBox>,
}

impl SpiralLayout {
    pub(crate) fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as i32,
            height: height as i32,
            occupied: Vec::new(),
        }
    }

    /// Walks the spiral until a box of the given size fits entirely on
    /// the canvas without touching an occupied box. Returns `None` once
    /// the spiral has left the canvas.
    pub(crate) fn place(&mut self, word_width: u32, word_height: u32) -> Option<Placement> {
        let center_x = self.width as f32 / 2.0;
        let center_y = self.height as f32 / 2.0;
        let max_radius = (center_x * center_x + center_y * center_y).sqrt();

        let mut theta = 0.0f32;
        loop {
            let radius = GROWTH * theta;
            if radius > max_radius {
                return None;
            }

            let x = (center_x + radius * theta.cos() - word_width as f32 / 2.0) as i32;
            let y = (center_y + radius * theta.sin() - word_height as f32 / 2.0) as i32;
            let candidate = BoundingBox {
                x: x - PADDING,
                y: y - PADDING,
                width: word_width as i32 + 2 * PADDING,
                height: word_height as i32 + 2 * PADDING,
            };

            if self.fits(&candidate) {
                self.occupied.push(candidate);
                return Some(Placement { x, y });
            }

            theta += STEP;
        }
    }

    fn fits(&self, candidate: &BoundingBox) -> bool {
        candidate.x >= 0
            && candidate.y >= 0
            && candidate.x + candidate.width <= self.width
            && candidate.y + candidate.height <= self.height
            && !self
                .occupied
                .iter()
                .any(|placed| placed.intersects(candidate))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overlapping_boxes_intersect() {
        let a = BoundingBox { x: 0, y: 0, width: 10, height: 10 };
        let b = BoundingBox { x: 5, y: 5, width: 10, height: 10 };
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_disjoint_boxes_do_not_intersect() {
        let a = BoundingBox { x: 0, y: 0, width: 10, height: 10 };
        let b = BoundingBox { x: 20, y: 20, width: 10, height: 10 };
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_edge_touching_boxes_do_not_intersect() {
        let a = BoundingBox { x: 0, y: 0, width: 10, height: 10 };
        let b = BoundingBox { x: 10, y: 0, width: 10, height: 10 };
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_first_word_is_centered() {
        let mut layout = SpiralLayout::new(1000, 1000);
        let placement = layout.place(100, 50).unwrap();
        assert_eq!(placement, Placement { x: 450, y: 475 });
    }

    #[test]
    fn test_second_word_does_not_overlap_the_first() {
        let mut layout = SpiralLayout::new(1000, 1000);
        let first = layout.place(100, 50).unwrap();
        let second = layout.place(100, 50).unwrap();

        let a = BoundingBox { x: first.x, y: first.y, width: 100, height: 50 };
        let b = BoundingBox { x: second.x, y: second.y, width: 100, height: 50 };
        assert!(!a.intersects(&b));
    }

    #[test]
    fn test_placed_words_stay_on_canvas() {
        let mut layout = SpiralLayout::new(400, 400);
        for _ in 0..20 {
            if let Some(placement) = layout.place(80, 30) {
                assert!(placement.x >= 0);
                assert!(placement.y >= 0);
                assert!(placement.x + 80 <= 400);
                assert!(placement.y + 30 <= 400);
            }
        }
    }

    #[test]
    fn test_oversized_word_is_refused() {
        let mut layout = SpiralLayout::new(100, 100);
        assert!(layout.place(200, 200).is_none());
    }
}
