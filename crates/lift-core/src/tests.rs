//! Unit tests for lift-core primitives.

#[cfg(test)]
mod floors {
    use crate::{Direction, Floor};

    #[test]
    fn step_moves_one_floor() {
        assert_eq!(Floor(3).step(Direction::Up), Floor(4));
        assert_eq!(Floor(3).step(Direction::Down), Floor(2));
    }

    #[test]
    fn is_beyond_is_strict() {
        assert!(Floor(5).is_beyond(Floor(3), Direction::Up));
        assert!(!Floor(3).is_beyond(Floor(3), Direction::Up));
        assert!(!Floor(2).is_beyond(Floor(3), Direction::Up));

        assert!(Floor(1).is_beyond(Floor(3), Direction::Down));
        assert!(!Floor(3).is_beyond(Floor(3), Direction::Down));
        assert!(!Floor(4).is_beyond(Floor(3), Direction::Down));
    }

    #[test]
    fn ground_is_floor_one() {
        assert_eq!(Floor::GROUND, Floor(1));
    }

    #[test]
    fn display() {
        assert_eq!(Floor(7).to_string(), "F7");
    }
}

#[cfg(test)]
mod directions {
    use crate::Direction;

    #[test]
    fn opposite_flips() {
        assert_eq!(Direction::Up.opposite(), Direction::Down);
        assert_eq!(Direction::Down.opposite(), Direction::Up);
    }

    #[test]
    fn display() {
        assert_eq!(Direction::Up.to_string(), "up");
        assert_eq!(Direction::Down.to_string(), "down");
    }
}

#[cfg(test)]
mod ids {
    use crate::PassengerId;

    #[test]
    fn index_roundtrip() {
        let id = PassengerId(42);
        assert_eq!(id.index(), 42);
        assert_eq!(usize::from(id), 42);
        assert_eq!(PassengerId::try_from(42usize).unwrap(), id);
    }

    #[test]
    fn ordering() {
        assert!(PassengerId(0) < PassengerId(1));
    }

    #[test]
    fn display() {
        assert_eq!(PassengerId(7).to_string(), "P7");
    }
}

#[cfg(test)]
mod ticks {
    use crate::Tick;

    #[test]
    fn next_and_since() {
        let t = Tick(4);
        assert_eq!(t.next(), Tick(5));
        assert_eq!(t.next().since(t), 1);
        assert_eq!(t + 6, Tick(10));
    }

    #[test]
    fn display() {
        assert_eq!(Tick(12).to_string(), "T12");
    }
}

#[cfg(test)]
mod config {
    use crate::{CoreError, SimConfig};

    #[test]
    fn two_floors_is_the_minimum() {
        assert!(SimConfig::new(2, 0).is_ok());
        assert!(SimConfig::new(100, 0).is_ok());
    }

    #[test]
    fn rejects_degenerate_buildings() {
        for floors in [0, 1] {
            match SimConfig::new(floors, 0) {
                Err(CoreError::InvalidFloorCount(n)) => assert_eq!(n, floors),
                other => panic!("expected InvalidFloorCount, got {other:?}"),
            }
        }
    }

    #[test]
    fn max_ticks_defaults_to_none() {
        let config = SimConfig::new(5, 9).unwrap();
        assert!(config.max_ticks.is_none());
    }
}

#[cfg(test)]
mod rng {
    use crate::SimRng;

    #[test]
    fn same_seed_same_stream() {
        let mut a = SimRng::new(99);
        let mut b = SimRng::new(99);
        for _ in 0..32 {
            assert_eq!(a.gen_range(0u32..1000), b.gen_range(0u32..1000));
        }
    }

    #[test]
    fn different_seeds_diverge() {
        let mut a = SimRng::new(1);
        let mut b = SimRng::new(2);
        let draws_a: Vec<u32> = (0..16).map(|_| a.gen_range(0..u32::MAX)).collect();
        let draws_b: Vec<u32> = (0..16).map(|_| b.gen_range(0..u32::MAX)).collect();
        assert_ne!(draws_a, draws_b);
    }

    #[test]
    fn children_are_deterministic() {
        let mut root_a = SimRng::new(7);
        let mut root_b = SimRng::new(7);
        let mut child_a = root_a.child(3);
        let mut child_b = root_b.child(3);
        for _ in 0..16 {
            assert_eq!(child_a.gen_range(0u64..u64::MAX), child_b.gen_range(0u64..u64::MAX));
        }
    }

    #[test]
    fn sibling_children_diverge() {
        let mut root = SimRng::new(7);
        let mut c0 = root.child(0);
        let mut c1 = root.child(1);
        let draws0: Vec<u64> = (0..16).map(|_| c0.gen_range(0..u64::MAX)).collect();
        let draws1: Vec<u64> = (0..16).map(|_| c1.gen_range(0..u64::MAX)).collect();
        assert_ne!(draws0, draws1);
    }

    #[test]
    fn gen_bool_extremes() {
        let mut rng = SimRng::new(0);
        assert!(!rng.gen_bool(0.0));
        assert!(rng.gen_bool(1.0));
        // Out-of-range probabilities are clamped rather than panicking.
        assert!(rng.gen_bool(2.0));
    }
}
