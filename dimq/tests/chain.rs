/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use dimq::{Measure, QuantitySystem, UnitError, UnitSystem};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

#[test]
fn linear_chain() {
    let qs = QuantitySystem::new("mechanics", ["L", "T"]).unwrap();
    let us = UnitSystem::new("metric", qs.clone());
    let meter = us.unit(&qs.base("L").unwrap()).unwrap();
    let second = us.unit(&qs.base("T").unwrap()).unwrap();
    let kmh = us
        .unit(&qs.factory([("L", 1), ("T", -1)]).unwrap())
        .unwrap()
        .scaled(1000.0 / 3600.0);

    let speed = meter
        .of(400.0)
        .chain()
        .plus(&meter.of(100.0))
        .unwrap()
        .minus(&meter.of(50.0))
        .unwrap()
        .scale(2.0)
        .div(&second.of(50.0))
        .unwrap();
    assert!(approx(speed.value_in(&kmh).unwrap(), 64.8));

    let area = meter.of(3.0).chain().times(&meter.of(4.0)).unwrap();
    assert_eq!(area.get().dimensions().formula(), "L²");
    assert_eq!(area.into_inner().value(), 12.0);

    assert!(matches!(
        meter.of(1.0).chain().plus(&second.of(1.0)),
        Err(UnitError::IncompatibleDimension(_, _))
    ));
}

#[test]
fn affine_chain() {
    let qs = QuantitySystem::new("thermo", ["Θ"]).unwrap();
    let us = UnitSystem::new("si", qs.clone());
    let kelvin = us.unit(&qs.base("Θ").unwrap()).unwrap();
    let celsius = kelvin.offset(273.15);

    /* linear + affine switches to the affine chain */
    let point = kelvin
        .of(5.0)
        .chain()
        .plus(&celsius.of(20.0))
        .unwrap()
        .plus(&celsius.delta().of(5.0))
        .unwrap();
    assert!(approx(point.value_in(&celsius).unwrap(), 30.0));
    assert!(approx(point.value_in(&kelvin).unwrap(), 303.15));

    /* affine - linear stays affine */
    let lower = point.clone().minus(&kelvin.of(10.0)).unwrap();
    assert!(lower.get().is_affine());
    assert!(approx(lower.value_in(&celsius).unwrap(), 20.0));

    /* affine - affine is linear again */
    let delta = point
        .minus(&celsius.of(10.0))
        .unwrap()
        .scale(3.0)
        .value_in(&celsius.delta())
        .unwrap();
    assert!(approx(delta, 60.0));
}
