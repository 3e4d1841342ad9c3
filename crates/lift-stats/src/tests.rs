//! Tests for aggregation and the comparison runner.

use lift_core::{Direction, Floor, SimConfig, SimRng, Tick};
use lift_model::{Passenger, generate_population};
use lift_sim::{RunOutcome, RunReport};

use crate::runner::{SweepConfig, compare_strategies, sweep};
use crate::stats::RunStats;

// ── Helpers ───────────────────────────────────────────────────────────────────

fn arrived_passenger(wait_time: u64, ride_time: u64) -> Passenger {
    let mut p = Passenger::new(Floor(1), Direction::Up, Floor(2));
    p.board();
    p.arrive();
    p.wait_time = wait_time;
    p.ride_time = ride_time;
    p
}

fn report_of(passengers: Vec<Passenger>, outcome: RunOutcome) -> RunReport {
    RunReport {
        floor_count: 5,
        population_size: passengers.len(),
        lifetime_steps: 12,
        ticks: Tick(20),
        outcome,
        passengers,
    }
}

// ── Aggregation ───────────────────────────────────────────────────────────────

#[cfg(test)]
mod aggregation {
    use super::*;

    #[test]
    fn sums_and_averages_over_arrivals() {
        let report = report_of(
            vec![
                arrived_passenger(4, 6),
                arrived_passenger(2, 2),
                arrived_passenger(0, 4),
            ],
            RunOutcome::Completed,
        );
        let stats = RunStats::from_report(&report);
        assert_eq!(stats.total_wait, 6);
        assert_eq!(stats.total_ride, 12);
        assert_eq!(stats.avg_wait, 2);
        assert_eq!(stats.avg_ride, 4);
        assert_eq!(stats.population_size, 3);
        assert_eq!(stats.floor_count, 5);
        assert_eq!(stats.lifetime_steps, 12);
    }

    #[test]
    fn averages_use_integer_division() {
        let report = report_of(
            vec![arrived_passenger(5, 3), arrived_passenger(2, 2)],
            RunOutcome::Completed,
        );
        let stats = RunStats::from_report(&report);
        assert_eq!(stats.avg_wait, 3, "7 / 2 truncates");
        assert_eq!(stats.avg_ride, 2, "5 / 2 truncates");
    }

    #[test]
    fn zero_totals_report_as_one() {
        let report = report_of(vec![arrived_passenger(0, 0)], RunOutcome::Completed);
        let stats = RunStats::from_report(&report);
        assert_eq!(stats.total_wait, 1);
        assert_eq!(stats.total_ride, 1);
        assert_eq!(stats.avg_wait, 1);
        assert_eq!(stats.avg_ride, 1);
    }

    #[test]
    fn unresolved_passengers_are_excluded() {
        let mut stranded = Passenger::new(Floor(3), Direction::Down, Floor(1));
        stranded.wait_time = 99;
        let report = report_of(
            vec![arrived_passenger(4, 2), stranded],
            RunOutcome::Stalled,
        );
        let stats = RunStats::from_report(&report);
        assert_eq!(stats.total_wait, 4, "stranded counters must not leak in");
        assert_eq!(stats.avg_wait, 4, "divisor is the arrived count, not the population");
        assert_eq!(stats.population_size, 2);
    }

    #[test]
    fn stall_with_no_arrivals_reports_all_ones() {
        let mut stranded = Passenger::new(Floor(7), Direction::Down, Floor(1));
        stranded.wait_time = 10;
        let report = report_of(vec![stranded], RunOutcome::Stalled);
        let stats = RunStats::from_report(&report);
        assert_eq!(
            (stats.total_wait, stats.total_ride, stats.avg_wait, stats.avg_ride),
            (1, 1, 1, 1),
        );
        assert_eq!(stats.population_size, 1);
    }
}

// ── Comparison runner ─────────────────────────────────────────────────────────

#[cfg(test)]
mod comparisons {
    use super::*;

    #[test]
    fn two_floor_shuttle_reports_clamped_wait() {
        // One rider 1 → 2: raw total wait is 0, reported as 1, for both
        // strategies; one step of car travel each.
        let config = SimConfig::new(2, 0).unwrap();
        let population = vec![Passenger::new(Floor(1), Direction::Up, Floor(2))];
        let comparison = compare_strategies(&config, &population).unwrap();

        for stats in [&comparison.naive, &comparison.look_ahead] {
            assert_eq!(stats.total_wait, 1);
            assert_eq!(stats.avg_wait, 1);
            assert_eq!(stats.lifetime_steps, 1);
            assert_eq!(stats.population_size, 1);
        }
        assert_eq!(comparison.naive_outcome, RunOutcome::Completed);
        assert_eq!(comparison.look_ahead_outcome, RunOutcome::Completed);
    }

    #[test]
    fn look_ahead_waits_no_longer_than_naive() {
        // Ten floors, thirty riders, same population for both sides.  The
        // look-ahead strategy skips dead floors and turns around early, so
        // its average wait can tie but not lose.
        let config = SimConfig::new(10, 42).unwrap();
        let mut rng = SimRng::new(42);
        let population = generate_population(10, 30, &mut rng).unwrap();
        let comparison = compare_strategies(&config, &population).unwrap();

        assert_eq!(comparison.naive_outcome, RunOutcome::Completed);
        assert_eq!(comparison.look_ahead_outcome, RunOutcome::Completed);
        assert!(
            comparison.look_ahead.avg_wait <= comparison.naive.avg_wait,
            "look-ahead avg wait {} exceeds naive {}",
            comparison.look_ahead.avg_wait,
            comparison.naive.avg_wait,
        );
    }

    #[test]
    fn comparison_is_deterministic() {
        let config = SimConfig::new(7, 9).unwrap();
        let mut rng = SimRng::new(9);
        let population = generate_population(7, 20, &mut rng).unwrap();
        let a = compare_strategies(&config, &population).unwrap();
        let b = compare_strategies(&config, &population).unwrap();
        assert_eq!(a, b);
    }
}

// ── Sweeps ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod sweeps {
    use super::*;

    fn sweep_config() -> SweepConfig {
        SweepConfig {
            floor_counts: vec![3, 5, 8],
            population_size: 12,
            seed: 1234,
            max_ticks: None,
        }
    }

    #[test]
    fn one_comparison_per_floor_count() {
        let results = sweep(&sweep_config()).unwrap();
        assert_eq!(results.len(), 3);
        for (comparison, floors) in results.iter().zip([3u32, 5, 8]) {
            assert_eq!(comparison.naive.floor_count, floors);
            assert_eq!(comparison.look_ahead.floor_count, floors);
            assert_eq!(comparison.naive.population_size, 12);
        }
    }

    #[test]
    fn sweeps_reproduce_from_the_root_seed() {
        let a = sweep(&sweep_config()).unwrap();
        let b = sweep(&sweep_config()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn invalid_floor_count_fails_the_sweep() {
        let mut bad = sweep_config();
        bad.floor_counts.push(1);
        assert!(sweep(&bad).is_err());
    }
}
