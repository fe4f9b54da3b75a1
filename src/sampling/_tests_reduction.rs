#[cfg(test)]
mod _tests_reduction {
    use crate::error::Error;

    use super::super::basis::make_basis;
    use super::super::reduction::lattice_reduction;
    use super::super::vec2i::IVec2;

    /// Sweep of independent bases taken straight from basis construction.
    fn basis_sweep() -> Vec<(IVec2, IVec2)> {
        let mut bases = Vec::new();
        for width in 2..=20 {
            for delta in 1..=80 {
                bases.push(make_basis(delta, width).unwrap());
            }
        }
        bases
    }

    fn assert_reduced(m1: IVec2, m2: IVec2) {
        assert!(
            m1.length_squared() <= m2.length_squared(),
            "not ordered: {m1:?}, {m2:?}"
        );
        assert!(
            m1.dot(m2).abs() <= m1.length_squared(),
            "not near-orthogonal: {m1:?}, {m2:?}"
        );
    }

    #[test]
    fn test_known_reduction() {
        let (m1, m2) = lattice_reduction(IVec2::new(1, 0), IVec2::new(5, 1)).unwrap();
        assert_eq!((m1, m2), (IVec2::new(1, 0), IVec2::new(0, 1)));
    }

    #[test]
    fn test_negative_dot_uses_floor_division() {
        // dot(u, v) < 0 here; a quotient truncated toward zero would leave
        // the long vector unreduced
        let (m1, m2) = lattice_reduction(IVec2::new(10, 0), IVec2::new(-7, 1)).unwrap();
        assert_eq!((m1, m2), (IVec2::new(3, 1), IVec2::new(-1, 3)));
        assert_reduced(m1, m2);
    }

    #[test]
    fn test_output_invariants() {
        for (b1, b2) in basis_sweep() {
            let (m1, m2) = lattice_reduction(b1, b2).unwrap();
            assert_reduced(m1, m2);
        }
    }

    #[test]
    fn test_preserves_cell_area() {
        for (b1, b2) in basis_sweep() {
            let (m1, m2) = lattice_reduction(b1, b2).unwrap();
            assert_eq!(
                m1.cross(m2).abs(),
                b1.cross(b2).abs(),
                "lattice changed for basis {b1:?}, {b2:?}"
            );
        }
    }

    #[test]
    fn test_idempotent() {
        for (b1, b2) in basis_sweep() {
            let reduced = lattice_reduction(b1, b2).unwrap();
            let again = lattice_reduction(reduced.0, reduced.1).unwrap();
            assert_eq!(reduced, again, "not a fixed point for {b1:?}, {b2:?}");
        }
    }

    #[test]
    fn test_already_reduced_is_untouched() {
        let u = IVec2::new(1, 0);
        let v = IVec2::new(0, 1);
        assert_eq!(lattice_reduction(u, v).unwrap(), (u, v));

        // equal lengths stop the loop immediately
        let u = IVec2::new(2, 1);
        let v = IVec2::new(1, 2);
        assert_eq!(lattice_reduction(u, v).unwrap(), (u, v));
    }

    #[test]
    fn test_parallel_input_rejected() {
        let u = IVec2::new(2, 4);
        let v = IVec2::new(1, 2);
        match lattice_reduction(u, v) {
            Err(Error::DegenerateLattice(_)) => {}
            other => panic!("expected degenerate lattice error, got {other:?}"),
        }
    }
}
