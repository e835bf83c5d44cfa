use super::*;
use crate::testing::assert_slice_f64_relative;
use assert_float_eq::*;

#[test]
fn ten_choose_four_with_three_defective() {
    let lot = Lot { n: 10, k: 3, r: 4 };
    let dist = lot.distribution().unwrap();
    assert_eq!(&[0, 1, 2, 3], dist.support());
    assert_slice_f64_relative(
        &[1.0 / 6.0, 0.5, 0.3, 1.0 / 30.0],
        dist.masses(),
        1e-12,
    );
    assert_float_relative_eq!(1.0, dist.total(), 1e-12);
    assert_float_relative_eq!(0.3, dist.mass(2), 1e-12);
}

#[test]
fn single_probability() {
    let lot = Lot { n: 10, k: 3, r: 4 };
    assert_float_relative_eq!(0.5, lot.probability(1).unwrap(), 1e-12);
    assert_float_relative_eq!(1.0 / 30.0, lot.probability(3).unwrap(), 1e-12);
}

#[test]
fn masses_sum_to_one() {
    for n in 0..=30 {
        for k in 0..=n {
            for r in 0..=n {
                let lot = Lot { n, k, r };
                let dist = lot.distribution().unwrap();
                assert_eq!(usize::min(k, r) + 1, dist.len(), "{lot}");
                assert_float_relative_eq!(1.0, dist.total(), 1e-9);
                for (_, mass) in dist.iter() {
                    assert!((0.0..=1.0).contains(&mass), "{lot}: {mass}");
                }
            }
        }
    }
}

#[test]
fn large_lot_stays_finite() {
    let lot = Lot {
        n: 1_000,
        k: 50,
        r: 200,
    };
    let dist = lot.distribution().unwrap();
    assert_eq!(51, dist.len());
    assert!(dist.masses().iter().all(|mass| mass.is_finite()));
    assert_float_relative_eq!(1.0, dist.total(), 1e-9);
}

#[test]
fn deterministic() {
    let lot = Lot { n: 40, k: 12, r: 15 };
    assert_eq!(lot.distribution().unwrap(), lot.distribution().unwrap());
}

#[test]
fn sample_larger_than_good_items() {
    let lot = Lot { n: 10, k: 8, r: 5 };
    assert_eq!(3, lot.min_defectives());
    assert_eq!(5, lot.max_defectives());

    let dist = lot.distribution().unwrap();
    assert_eq!(&[0, 1, 2, 3, 4, 5], dist.support());
    assert_eq!(&[0.0, 0.0, 0.0], &dist.masses()[..3]);
    assert!(dist.mass(3) > 0.0);
    assert_float_relative_eq!(1.0, dist.total(), 1e-12);

    // not guarded when queried directly
    assert!(matches!(
        lot.probability(0),
        Err(DistributionError::InvalidCombination(InvalidCombination { n: 2, r: 5 }))
    ));
}

#[test]
fn certain_outcome() {
    let lot = Lot { n: 7, k: 0, r: 3 };
    let dist = lot.distribution().unwrap();
    assert_eq!(&[0], dist.support());
    assert_eq!(&[1.0], dist.masses());

    let lot = Lot { n: 7, k: 7, r: 7 };
    let dist = lot.distribution().unwrap();
    assert_eq!(1.0, dist.mass(7));
}

#[test]
fn invalid_lot() {
    let err = Lot { n: 5, k: 6, r: 2 }.distribution().unwrap_err();
    assert!(matches!(
        err,
        DistributionError::InvalidCombination(InvalidCombination { n: 5, r: 6 })
    ));
    assert_eq!("cannot choose 6 from 5", err.to_string());

    let err = Lot { n: 5, k: 2, r: 6 }.distribution().unwrap_err();
    assert!(matches!(
        err,
        DistributionError::InvalidCombination(InvalidCombination { n: 5, r: 6 })
    ));
}

#[test]
fn probability_outside_support() {
    let lot = Lot { n: 10, k: 3, r: 4 };
    assert!(matches!(
        lot.probability(4),
        Err(DistributionError::InvalidCombination(InvalidCombination { n: 3, r: 4 }))
    ));

    let lot = Lot { n: 10, k: 3, r: 2 };
    assert!(matches!(
        lot.probability(3),
        Err(DistributionError::InvalidCombination(InvalidCombination { n: 2, r: 3 }))
    ));
}

#[test]
fn probability_above_one_is_rejected() {
    assert_eq!(1.0, check_probability(0, 1.0).unwrap());
    let err = check_probability(2, 1.5).unwrap_err();
    assert!(matches!(
        err,
        DistributionError::ArithmeticInconsistency { m: 2, probability } if probability == 1.5
    ));
    assert_eq!(
        "probability 1.5 of 2 defectives exceeds 1",
        err.to_string()
    );
}

#[test]
fn display() {
    assert_eq!("n=10, k=3, r=4", format!("{}", Lot { n: 10, k: 3, r: 4 }));
}
