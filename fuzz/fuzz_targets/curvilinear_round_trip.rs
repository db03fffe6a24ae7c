#![no_main]

use hamilton::{Curvilinear, Hamilton};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|coords: Curvilinear| {
    let z = Hamilton::from(coords);
    if coords.r == 0.0 {
        assert_eq!(z, Hamilton::ZERO);
    }

    let recovered = z.curvilinear();
    if z == Hamilton::ZERO {
        assert_eq!(recovered.r, 0.0);
        assert!(recovered.theta1.is_nan());
    } else {
        assert!(recovered.r >= 0.0 || recovered.r.is_nan());
    }
});
