use ordered_float::OrderedFloat;

/// Heuristic estimates and path costs. Wrapped in [`OrderedFloat`] so that
/// they are totally ordered and can be used as priorities.
pub type HeuristicValue = OrderedFloat<f64>;

pub const ZERO_HEURISTIC: HeuristicValue = OrderedFloat(0.);

/// Manhattan distance between two grid cells. Computed in `i64`, which
/// holds the distance between any two `i32` cells.
pub fn manhattan_distance(a: (i32, i32), b: (i32, i32)) -> HeuristicValue {
    let dx = (i64::from(a.0) - i64::from(b.0)).abs();
    let dy = (i64::from(a.1) - i64::from(b.1)).abs();
    OrderedFloat((dx + dy) as f64)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn manhattan_distance_is_symmetric() {
        assert_eq!(manhattan_distance((0, 0), (2, 3)), OrderedFloat(5.));
        assert_eq!(manhattan_distance((2, 3), (0, 0)), OrderedFloat(5.));
        assert_eq!(manhattan_distance((1, 1), (1, 1)), ZERO_HEURISTIC);
    }

    #[test]
    fn manhattan_distance_across_the_whole_i32_range() {
        let corner = (i32::MAX, i32::MAX);
        let expected = 4. * f64::from(i32::MAX) + 2.;
        assert_eq!(manhattan_distance((i32::MIN, i32::MIN), corner), OrderedFloat(expected));
        assert_eq!(
            manhattan_distance((0, 0), corner),
            OrderedFloat(2. * f64::from(i32::MAX))
        );
    }
}
