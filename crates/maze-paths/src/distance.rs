use maze_core::Point;

/// Manhattan (L1) distance between two points.
#[inline]
pub fn manhattan(a: Point, b: Point) -> u32 {
    let d = a - b;
    d.y.unsigned_abs() + d.x.unsigned_abs()
}

/// Squared Euclidean distance between two points.
///
/// Widened to `u64` so any two cells of an `i32`-indexed grid fit.
#[inline]
pub fn squared_euclidean(a: Point, b: Point) -> u64 {
    let d = a - b;
    let dy = u64::from(d.y.unsigned_abs());
    let dx = u64::from(d.x.unsigned_abs());
    dy * dy + dx * dx
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn distances() {
        let a = Point::new(0, 0);
        let b = Point::new(3, -4);
        assert_eq!(manhattan(a, b), 7);
        assert_eq!(squared_euclidean(a, b), 25);
        assert_eq!(manhattan(b, a), 7);
        assert_eq!(squared_euclidean(a, a), 0);
    }

    #[test]
    fn squared_euclidean_spans_long_rows() {
        let a = Point::new(0, 0);
        let b = Point::new(69_999, 0);
        assert_eq!(squared_euclidean(a, b), 69_999u64 * 69_999);
        let far = Point::new(i32::MAX, i32::MAX);
        assert_eq!(
            squared_euclidean(a, far),
            2 * u64::from(i32::MAX.unsigned_abs()).pow(2)
        );
    }
}
