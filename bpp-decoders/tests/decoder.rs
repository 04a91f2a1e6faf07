use bpp_core::{Problem, Violation};
use bpp_decoders::{decode, Strategy};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn example_problem() -> Problem {
    Problem::from_records(&[(10, 10), (6, 3), (5, 5), (4, 2), (2, 8)]).unwrap()
}

#[test]
fn test_decode_is_deterministic_for_a_seed() {
    let problem = example_problem();
    let permutation = [0, 1, 2, 3];

    let mut rng = SmallRng::from_seed([7u8; 32]);
    let (first, violations) = decode(1, &permutation, &problem, &mut rng).unwrap();
    assert_eq!(violations, Vec::new());

    let mut rng = SmallRng::from_seed([7u8; 32]);
    let (second, _) = decode(1, &permutation, &problem, &mut rng).unwrap();
    assert_eq!(first, second);
}

#[test]
fn test_decode_reports_instead_of_failing() {
    let problem = Problem::from_records(&[(10, 10), (12, 1)]).unwrap();
    let mut rng = SmallRng::from_seed([1u8; 32]);
    let (assignment, violations) = decode(9, &[0], &problem, &mut rng).unwrap();
    assert_eq!(assignment.bin_items(0), vec![0]);
    assert_eq!(
        violations,
        vec![Violation::OverWeight {
            solution: 9,
            bin: 0,
            weight: 12
        }]
    );
}

#[test]
fn test_decode_rejects_bad_permutations() {
    let problem = example_problem();
    let mut rng = SmallRng::from_seed([0u8; 32]);
    assert!(decode(1, &[0, 1], &problem, &mut rng).is_err());
    assert!(decode(1, &[0, 1, 2, 9], &problem, &mut rng).is_err());
}

#[test]
fn test_sampling_reaches_every_strategy() {
    let mut rng = SmallRng::from_seed([3u8; 32]);
    let mut seen = [false; 3];
    for _ in 0..64 {
        match Strategy::sample(&mut rng) {
            Strategy::LeastLoaded => seen[0] = true,
            Strategy::DotProduct => seen[1] = true,
            Strategy::Combo => seen[2] = true,
        }
    }
    assert_eq!(seen, [true; 3]);
}

#[test]
fn test_strategy_display() {
    assert_eq!(Strategy::LeastLoaded.to_string(), "least-loaded");
    assert_eq!(Strategy::DotProduct.to_string(), "dot-product");
    assert_eq!(Strategy::Combo.to_string(), "combo");
}
