use maze_core::{Direction, Point};

/// Cached neighbor computation helper.
///
/// Enumerates the cardinal neighbors of a cell in the fixed expansion order
/// of [`Direction::ALL`] (left, right, up, down), filtered by a predicate.
#[derive(Debug)]
pub struct Neighbors {
    buf: Vec<Point>,
}

impl Default for Neighbors {
    fn default() -> Self {
        Self::new()
    }
}

impl Neighbors {
    /// Create a new `Neighbors` helper.
    pub fn new() -> Self {
        Self {
            buf: Vec::with_capacity(4),
        }
    }

    /// Return the cardinal neighbors of `p`, keeping only those for which
    /// `keep` returns `true`.
    pub fn cardinal(&mut self, p: Point, keep: impl Fn(Point) -> bool) -> &[Point] {
        self.buf.clear();
        for d in Direction::ALL {
            let n = p.step(d);
            if keep(n) {
                self.buf.push(n);
            }
        }
        &self.buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cardinal_order_is_left_right_up_down() {
        let mut nb = Neighbors::new();
        let p = Point::new(1, 1);
        assert_eq!(
            nb.cardinal(p, |_| true),
            &[
                Point::new(1, 0),
                Point::new(1, 2),
                Point::new(0, 1),
                Point::new(2, 1),
            ]
        );
    }

    #[test]
    fn cardinal_filters() {
        let mut nb = Neighbors::new();
        let kept = nb.cardinal(Point::new(0, 0), |q| q.y >= 0 && q.x >= 0);
        assert_eq!(kept, &[Point::new(0, 1), Point::new(1, 0)]);
    }
}
