#![no_main]

use hamilton::{Hamilton, HamiltonError};
use libfuzzer_sys::fuzz_target;

fn bits(z: &Hamilton) -> [u64; 4] {
    let (a, b, c, d) = z.cartesian();
    [a.to_bits(), b.to_bits(), c.to_bits(), d.to_bits()]
}

fuzz_target!(|operands: (Hamilton, Hamilton)| {
    let (x, y) = operands;

    assert!(!(x.is_inf() && x.is_nan()));
    assert_eq!(bits(&x.conjugate().conjugate()), bits(&x));

    let quad = x.quad();
    assert!(quad >= 0.0 || quad.is_nan());

    let _ = x * y;
    let _ = x.commutator(&y);

    match x.quotient(&y) {
        Err(HamiltonError::DivideByZero { .. }) => assert_eq!(y, Hamilton::ZERO),
        Ok(_) => assert_ne!(y, Hamilton::ZERO),
    }
    match y.inverse() {
        Err(HamiltonError::DivideByZero { .. }) => assert_eq!(y, Hamilton::ZERO),
        Ok(_) => assert_ne!(y, Hamilton::ZERO),
    }
});
