use bpp_core::{check, open_bin_consistency, Assignment, Problem};
use bpp_decoders::{repack, strategies::least_loaded};
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn example_problem() -> Problem {
    Problem::from_records(&[(10, 10), (6, 3), (5, 5), (4, 2), (2, 8)]).unwrap()
}

#[test]
fn test_repack_preserves_bins_outside_range() {
    let problem = Problem::from_records(&[
        (10, 10),
        (2, 2),
        (2, 2),
        (2, 2),
        (2, 2),
        (2, 2),
        (2, 2),
    ])
    .unwrap();
    let mut assignment = Assignment::empty(6);
    for (bin, item) in [(0, 0), (1, 1), (1, 2), (2, 3), (3, 4), (3, 5)] {
        assignment.x[bin][item] = 1;
    }
    for bin in 0..4 {
        assignment.y[bin] = 1;
    }

    let mut rng = SmallRng::from_seed([5u8; 32]);
    let repacked = repack(assignment, 1, 3, &problem, &mut rng).unwrap();

    // bins outside [1, 3) are untouched, and the open marker on bin 3 seeds
    // the bin count instead of the lower bound
    assert_eq!(repacked.bin_items(0), vec![0]);
    assert_eq!(repacked.bin_items(3), vec![4, 5]);
    assert_eq!(repacked.bin_items(1), vec![1, 3]);
    assert_eq!(repacked.bin_items(2), vec![2]);
    assert_eq!(repacked.y, vec![1, 1, 1, 1, 0, 0]);
    assert_eq!(check(0, &repacked.x, &problem).unwrap(), Vec::new());
    assert_eq!(
        open_bin_consistency(&repacked.x, &repacked.y).unwrap(),
        Vec::new()
    );
}

#[test]
fn test_repack_full_range_falls_back_to_lower_bound() {
    let problem = example_problem();
    let assignment = least_loaded::solve(&[0, 1, 2, 3], &problem).unwrap();
    let mut rng = SmallRng::from_seed([2u8; 32]);
    let repacked = repack(assignment, 0, 4, &problem, &mut rng).unwrap();
    assert_eq!(check(0, &repacked.x, &problem).unwrap(), Vec::new());
    assert_eq!(
        open_bin_consistency(&repacked.x, &repacked.y).unwrap(),
        Vec::new()
    );
}

#[test]
fn test_repack_is_deterministic_and_stable() {
    let problem = example_problem();
    let assignment = least_loaded::solve(&[0, 1, 2, 3], &problem).unwrap();

    let mut rng = SmallRng::from_seed([9u8; 32]);
    let first = repack(assignment.clone(), 0, 3, &problem, &mut rng).unwrap();
    let mut rng = SmallRng::from_seed([9u8; 32]);
    let second = repack(assignment, 0, 3, &problem, &mut rng).unwrap();
    assert_eq!(first, second);

    // repacking the already-repacked range again with the same draw changes
    // nothing
    let mut rng = SmallRng::from_seed([9u8; 32]);
    let third = repack(first.clone(), 0, 3, &problem, &mut rng).unwrap();
    assert_eq!(first, third);
}

#[test]
fn test_repack_empty_range_is_a_no_op() {
    let problem = example_problem();
    let assignment = least_loaded::solve(&[0, 1, 2, 3], &problem).unwrap();
    let mut rng = SmallRng::from_seed([4u8; 32]);
    let repacked = repack(assignment.clone(), 2, 2, &problem, &mut rng).unwrap();
    assert_eq!(repacked, assignment);
}

#[test]
fn test_repack_rejects_bad_input() {
    let problem = example_problem();
    let assignment = Assignment::empty(4);
    let mut rng = SmallRng::from_seed([0u8; 32]);
    assert!(repack(assignment.clone(), 3, 1, &problem, &mut rng).is_err());
    assert!(repack(assignment, 0, 7, &problem, &mut rng).is_err());
    assert!(repack(Assignment::empty(3), 0, 2, &problem, &mut rng).is_err());
}
