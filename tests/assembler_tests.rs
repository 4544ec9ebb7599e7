#![allow(missing_docs)]

use antseq::Error;
use antseq::assembly::assembler::assemble;
use antseq::assembly::distance::levenshtein;
use antseq::assembly::overlap::overlap;

#[test]
fn test_single_fragment_is_returned_unchanged() {
    assert_eq!(assemble(&["GATTACA"]).unwrap(), "GATTACA");
}

#[test]
fn test_adjacent_fragments_share_their_overlap() {
    let (first, second) = ("ACGT", "CGTA");
    let shift = overlap(first, second).unwrap();
    let merged = assemble(&[first, second]).unwrap();

    assert_eq!(merged, "ACGTA");
    // k - shift characters are shared between the two fragments
    assert_eq!(merged.len(), first.len() + second.len() - (first.len() - shift));
}

#[test]
fn test_partial_and_missing_overlaps() {
    assert_eq!(assemble(&["ACGT", "GTAA"]).unwrap(), "ACGTAA");
    assert_eq!(assemble(&["ACGT", "GGGG"]).unwrap(), "ACGTGGGG");
}

#[test]
fn test_consecutive_windows_rebuild_the_sequence() {
    let sequence = "ACGTTGCAACGGT";
    let k = 4;
    let windows: Vec<&str> = (0..=sequence.len() - k)
        .map(|offset| &sequence[offset..offset + k])
        .collect();

    assert_eq!(assemble(&windows).unwrap(), sequence);
}

#[test]
fn test_owned_routes_are_accepted() {
    let route = vec!["TTGC".to_string(), "TGCA".to_string()];
    assert_eq!(assemble(&route).unwrap(), "TTGCA");
}

#[test]
fn test_empty_route_is_rejected() {
    let route: Vec<String> = Vec::new();
    assert!(matches!(assemble(&route), Err(Error::EmptyRoute)));
}

#[test]
fn test_mixed_lengths_are_rejected() {
    assert!(matches!(
        assemble(&["ACGT", "CGT"]),
        Err(Error::LengthMismatch { .. })
    ));
}

#[test]
fn test_levenshtein_known_values() {
    assert_eq!(levenshtein("kitten", "sitting"), 3);
    assert_eq!(levenshtein("ACGT", "AGT"), 1);
    assert_eq!(levenshtein("ACGT", "TGCA"), 4);
    assert_eq!(levenshtein("GATTACA", "GATTACA"), 0);
}

#[test]
fn test_levenshtein_against_empty() {
    assert_eq!(levenshtein("", "ACGTA"), 5);
    assert_eq!(levenshtein("ACGTA", ""), 5);
    assert_eq!(levenshtein("", ""), 0);
}

#[test]
fn test_levenshtein_is_a_metric() {
    let words = ["ACGT", "AGT", "TTGCA", "ACGTACGT", "", "GATTACA"];

    for a in words {
        assert_eq!(levenshtein(a, a), 0);
        for b in words {
            let ab = levenshtein(a, b);
            assert_eq!(ab, levenshtein(b, a));
            if a != b {
                assert!(ab > 0);
            }
            for c in words {
                assert!(levenshtein(a, c) <= ab + levenshtein(b, c));
            }
        }
    }
}
