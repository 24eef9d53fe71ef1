use stepstar_core::Location;

/// Euclidean (L2) distance between two cell centres.
///
/// This is both the step cost and the heuristic of the search, which keeps
/// the heuristic admissible on uniform-cost grids.
#[inline]
pub fn euclidean(a: Location, b: Location) -> f32 {
    let dx = (a.x - b.x) as i64;
    let dz = (a.z - b.z) as i64;
    ((dx * dx + dz * dz) as f64).sqrt() as f32
}

/// Manhattan (L1) distance between two locations.
#[inline]
pub fn manhattan(a: Location, b: Location) -> i32 {
    (a.x - b.x).abs() + (a.z - b.z).abs()
}

/// Chebyshev (L∞) distance between two locations.
#[inline]
pub fn chebyshev(a: Location, b: Location) -> i32 {
    (a.x - b.x).abs().max((a.z - b.z).abs())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn euclidean_matches_pythagoras() {
        let a = Location::new(1, 1);
        assert_eq!(euclidean(a, a), 0.0);
        assert_eq!(euclidean(a, Location::new(4, 5)), 5.0);
        assert!((euclidean(a, Location::new(2, 2)) - std::f32::consts::SQRT_2).abs() < 1e-6);
    }

    #[test]
    fn euclidean_never_exceeds_grid_metrics() {
        let a = Location::new(-2, 3);
        let b = Location::new(5, -1);
        assert!(euclidean(a, b) <= manhattan(a, b) as f32);
        assert!(euclidean(a, b) >= chebyshev(a, b) as f32);
        assert_eq!(manhattan(a, b), 11);
        assert_eq!(chebyshev(a, b), 7);
    }
}
