#![allow(missing_docs)]
#![allow(clippy::float_cmp)]

use antseq::Error;
use antseq::assembly::pheromone::PheromoneField;
use antseq::assembly::weights::WeightIndex;

fn spectrum(fragments: &[&str]) -> Vec<String> {
    fragments.iter().map(|f| (*f).to_string()).collect()
}

#[test]
fn test_weight_matrix() {
    let index = WeightIndex::build(&spectrum(&["ACGT", "CGTA", "GTAC"])).unwrap();

    assert_eq!(index.len(), 3);
    assert_eq!(index.weight(0, 1), 1);
    assert_eq!(index.weight(1, 2), 1);
    assert_eq!(index.weight(2, 0), 2);
    // Self-pairs without repeats cost the full length
    assert_eq!(index.weight(0, 0), 4);
    assert_eq!(index.matrix().dim(), (3, 3));
}

#[test]
fn test_translation_follows_spectrum_order() {
    let index = WeightIndex::build(&spectrum(&["TTGC", "ACGT", "CGTT"])).unwrap();

    assert_eq!(index.index_of("TTGC"), Some(0));
    assert_eq!(index.index_of("ACGT"), Some(1));
    assert_eq!(index.index_of("CGTT"), Some(2));
    assert_eq!(index.index_of("AAAA"), None);
    assert_eq!(index.fragment(2), "CGTT");
}

#[test]
fn test_weight_index_rejects_mixed_lengths() {
    let result = WeightIndex::build(&spectrum(&["ACGT", "CGT"]));
    assert!(matches!(result, Err(Error::LengthMismatch { .. })));
}

#[test]
fn test_uniform_initial_field() {
    let field = PheromoneField::new(4, 0.1);
    assert_eq!(field.size(), 4);
    assert_eq!(field.max(), 0.1);
    assert_eq!(field.min(), 0.1);
}

#[test]
fn test_merge_without_deposits_only_evaporates() {
    let mut field = PheromoneField::new(3, 0.1);
    let untouched = field.clone();

    let outcome = field.merge(&[untouched], 0.4, 100.0);

    assert!(!outcome.reinforced);
    assert_eq!(outcome.divide, 0.0);
    for &value in field.trail() {
        assert!((value - 0.06).abs() < 1e-12);
    }
}

#[test]
fn test_merge_with_no_copies() {
    let mut field = PheromoneField::new(2, 0.5);
    let outcome = field.merge(&[], 0.5, 100.0);

    assert!(!outcome.reinforced);
    assert!((field.get(1, 1) - 0.25).abs() < 1e-12);
}

#[test]
fn test_merge_normalizes_by_largest_deposit() {
    let mut field = PheromoneField::new(3, 0.1);

    let mut first = field.clone();
    first.deposit(0, 1, 12.0);
    let mut second = field.clone();
    second.deposit(0, 1, 12.0);
    second.deposit(1, 2, 24.0);

    let outcome = field.merge(&[first, second], 0.4, 100.0);

    assert!(outcome.reinforced);
    assert!((outcome.divide - 24.0).abs() < 1e-12);
    // Two half-strength deposits on 0 -> 1, one full deposit on 1 -> 2
    assert!((field.get(0, 1) - (0.1 + 1.0) * 0.6).abs() < 1e-12);
    assert!((field.get(1, 2) - (0.1 + 1.0) * 0.6).abs() < 1e-12);
    assert!((field.get(2, 0) - 0.06).abs() < 1e-12);
}

#[test]
fn test_merge_clamps_to_cap() {
    let mut field = PheromoneField::new(2, 99.5);
    let mut copy = field.clone();
    copy.deposit(0, 0, 5.0);
    copy.deposit(0, 1, 1.0);

    field.merge(&[copy], 0.0, 100.0);

    assert_eq!(field.get(0, 0), 100.0);
    assert!((field.get(0, 1) - 99.7).abs() < 1e-9);
    assert!(field.max() <= 100.0);
}

#[test]
fn test_field_never_goes_negative() {
    let mut field = PheromoneField::new(3, 0.1);
    for _ in 0..50 {
        let mut copy = field.clone();
        copy.deposit(2, 1, 3.0);
        field.merge(&[copy], 0.9, 100.0);
    }
    assert!(field.min() >= 0.0);
    assert!(field.max() <= 100.0);
}
