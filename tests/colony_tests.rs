#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use antseq::Error;
use antseq::assembly::colony::{self, Colony};
use antseq::assembly::generator::Instance;
use antseq::assembly::params::Params;
use antseq::assembly::random::seeded;

fn create_test_params() -> Params {
    Params {
        ant_count: 5,
        alpha: 12.0,
        evaporation_coefficient: 0.4,
        iterations: 3,
        sequence_length: 20,
        oligo_size: 4,
        percent: 0.0,
        inject_phantoms: false,
        seed: Some(42),
        ..Params::default()
    }
}

#[test]
fn test_exact_positions_reconstruct_exactly() {
    let mut colony = Colony::new(create_test_params()).unwrap();
    let best = colony.run().unwrap();

    assert_eq!(best.distance, 0);
    assert!(best.is_exact());
    assert_eq!(best.sequence, colony.instance().sequence);
    assert_eq!(best.route[0], colony.instance().starter);
    assert_eq!(best.error_percent(), 0.0);
    assert_eq!(colony.rounds_completed(), 3);
}

#[test]
fn test_phantoms_are_out_competed() {
    let params = Params {
        ant_count: 20,
        sequence_length: 40,
        oligo_size: 5,
        inject_phantoms: true,
        seed: Some(7),
        ..create_test_params()
    };
    let mut colony = Colony::new(params).unwrap();
    let best = colony.run().unwrap();

    assert_eq!(best.distance, 0);
    assert_eq!(colony.instance().phantoms_in(&best.route), 0);
}

#[test]
fn test_best_distance_never_regresses() {
    let params = Params {
        ant_count: 8,
        iterations: 6,
        sequence_length: 60,
        oligo_size: 6,
        percent: 0.05,
        seed: Some(3),
        ..create_test_params()
    };
    let mut colony = Colony::new(params).unwrap();
    let best = colony.run().unwrap();
    let history = colony.history();

    assert_eq!(history.len(), 6);
    assert!(history.is_non_increasing());
    assert!(history.improvements() >= 1);
    assert_eq!(history.last().unwrap().best_so_far, best.distance);
    for stats in history.rounds() {
        assert!(best.distance <= stats.best_in_round);
        assert!(stats.mean_distance >= stats.best_in_round as f64);
    }
}

#[test]
fn test_round_by_round_stepping() {
    let mut colony = Colony::new(create_test_params()).unwrap();
    assert!(colony.best().is_none());

    let mut previous = usize::MAX;
    for round in 0..4 {
        let stats = colony.run_round().unwrap();
        assert_eq!(stats.round, round);
        assert!(stats.best_so_far <= previous);
        previous = stats.best_so_far;
    }
    assert_eq!(colony.best().unwrap().distance, previous);
}

#[test]
fn test_solution_requires_a_completed_round() {
    let mut colony = Colony::new(create_test_params()).unwrap();
    assert!(matches!(colony.solution(), Err(Error::NoSolution)));

    colony.run_round().unwrap();
    let solution = colony.solution().unwrap();
    assert_eq!(Some(&solution), colony.best());
    assert_eq!(solution.round, 0);
}

#[test]
fn test_pheromone_stays_bounded() {
    let params = Params {
        alpha: 500.0,
        evaporation_coefficient: 0.0,
        pheromone_cap: 2.0,
        iterations: 5,
        percent: 0.1,
        ..create_test_params()
    };
    let mut colony = Colony::new(params).unwrap();
    colony.run().unwrap();

    assert!(colony.pheromone().max() <= 2.0);
    assert!(colony.pheromone().min() >= 0.0);
    assert_eq!(colony.pheromone().size(), colony.weight_index().len());
}

#[test]
fn test_single_window_instance() {
    let params = Params {
        sequence_length: 6,
        oligo_size: 6,
        iterations: 2,
        ant_count: 3,
        ..create_test_params()
    };
    let mut colony = Colony::new(params).unwrap();
    let best = colony.run().unwrap();

    assert_eq!(best.route.len(), 1);
    assert_eq!(best.distance, 0);
    for stats in colony.history().rounds() {
        assert!(!stats.reinforced);
    }
    // Nothing was deposited, so the trail only evaporated twice
    assert!((colony.pheromone().get(0, 0) - 0.1 * 0.6 * 0.6).abs() < 1e-12);
}

#[test]
fn test_parallel_and_sequential_runs_agree() {
    let params = Params {
        ant_count: 6,
        iterations: 4,
        sequence_length: 50,
        oligo_size: 5,
        percent: 0.04,
        seed: Some(11),
        ..create_test_params()
    };

    let mut parallel = Colony::new(Params {
        parallel: true,
        ..params.clone()
    })
    .unwrap();
    let mut sequential = Colony::new(Params {
        parallel: false,
        ..params
    })
    .unwrap();

    assert_eq!(parallel.run().unwrap(), sequential.run().unwrap());
    assert_eq!(parallel.history(), sequential.history());
    assert_eq!(parallel.pheromone(), sequential.pheromone());
}

#[test]
fn test_run_entry_point() {
    let best = colony::run(&create_test_params()).unwrap();
    assert_eq!(best.sequence_length, 20);
    assert_eq!(best.sequence.len(), best.sequence_length);
}

#[test]
fn test_invalid_configuration_fails_fast() {
    let zero_ants = Params {
        ant_count: 0,
        ..create_test_params()
    };
    assert!(matches!(
        Colony::new(zero_ants),
        Err(Error::InvalidParameter { name: "ant_count", .. })
    ));

    let long_oligo = Params {
        oligo_size: 21,
        ..create_test_params()
    };
    assert!(matches!(
        Colony::new(long_oligo),
        Err(Error::OligoLongerThanSequence { .. })
    ));
}

#[test]
fn test_instance_must_match_params() {
    let params = create_test_params();
    let instance = Instance::generate(&params, &mut seeded(Some(1))).unwrap();

    let other = Params {
        sequence_length: 30,
        ..params.clone()
    };
    assert!(matches!(
        Colony::with_instance(other, instance.clone(), seeded(Some(2))),
        Err(Error::InstanceMismatch(_))
    ));

    let mut broken = instance;
    broken.starter = "NNNN".to_string();
    assert!(matches!(
        Colony::with_instance(params, broken, seeded(Some(2))),
        Err(Error::StarterNotInSpectrum(_))
    ));
}
