/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

use dimq::{
    AffineUnit, LinearUnit, Measure, Measurement, QuantitySystem, Unit,
    UnitError, UnitSystem,
};

fn approx(a: f64, b: f64) -> bool {
    (a - b).abs() <= 1e-9 * a.abs().max(b.abs()).max(1.0)
}

fn thermo(name: &str) -> (LinearUnit, AffineUnit) {
    let qs = QuantitySystem::new("thermo", ["L", "Θ"]).unwrap();
    let temperature = qs.base("Θ").unwrap();
    let us = UnitSystem::new(name, qs);
    let kelvin = us.unit(&temperature).unwrap();
    let celsius = kelvin.offset(273.15);
    (kelvin, celsius)
}

#[test]
fn celsius_is_offset_kelvin() {
    let (kelvin, celsius) = thermo("si");
    assert_eq!(celsius.of(0.0).value(), 273.15);
    assert!(approx(celsius.of(100.0).value_in(&kelvin).unwrap(), 373.15));
    assert!(celsius.is_affine());
    assert_eq!(celsius.offset(), 273.15);
}

#[test]
fn difference_of_points_is_linear() {
    let (kelvin, celsius) = thermo("si");
    let diff = (&celsius.of(100.0) - &celsius.of(0.0)).unwrap();
    assert!(!diff.is_affine());
    assert!(approx(diff.value(), 100.0));
    assert!(approx(diff.value_in(&kelvin).unwrap(), 100.0));
    assert!(approx(diff.value_in(&celsius.delta()).unwrap(), 100.0));
}

#[test]
fn point_plus_delta_is_affine() {
    let (_, celsius) = thermo("si");
    let warmer = (&celsius.of(20.0) + &celsius.delta().of(10.0)).unwrap();
    assert!(warmer.is_affine());
    assert!(approx(warmer.value_in(&celsius).unwrap(), 30.0));

    let commuted = (&celsius.delta().of(10.0) + &celsius.of(20.0)).unwrap();
    assert_eq!(commuted, warmer);

    let cooler = (&celsius.of(20.0) - &celsius.delta().of(25.0)).unwrap();
    assert!(approx(cooler.value_in(&celsius).unwrap(), -5.0));
}

#[test]
fn state_transition_law() {
    let (kelvin, _) = thermo("si");
    let unit = kelvin.scaled(2.5).offset(40.0);
    for (x, y, d) in [(1.0, 2.0, 3.0), (-7.5, 12.0, 0.25), (100.0, 0.0, -3.0)] {
        let diff = (&unit.of(x) - &unit.of(y)).unwrap();
        assert!(approx(diff.value(), (x - y) * 2.5));
        let moved = (&unit.of(x) + &unit.delta().of(d)).unwrap();
        assert!(approx(moved.value_in(&unit).unwrap(), x + d));
    }
}

#[test]
fn fahrenheit() {
    let (kelvin, _) = thermo("si");
    let fahrenheit = kelvin.scaled(5.0 / 9.0).offset(459.67 * 5.0 / 9.0);
    assert!(approx(fahrenheit.of(32.0).value_in(&kelvin).unwrap(), 273.15));
    assert!(approx(fahrenheit.of(212.0).value_in(&kelvin).unwrap(), 373.15));
    assert!(approx(fahrenheit.of(-459.67).value(), 0.0));
    assert!(approx(fahrenheit.delta().scale(), 5.0 / 9.0));
}

#[test]
fn delta_units_scale() {
    let (kelvin, celsius) = thermo("si");
    let millidelta = celsius.delta().scaled(1e-3);
    assert!(approx(millidelta.scale(), 1e-3));
    assert!(approx(millidelta.of(1500.0).value_in(&kelvin).unwrap(), 1.5));
}

#[test]
fn measurement_rules() {
    let (kelvin, celsius) = thermo("si");
    let point = Measurement::from(celsius.of(20.0));
    let vector = Measurement::from(kelvin.of(5.0));

    assert!(point.add(&vector).unwrap().is_affine());
    assert!(vector.add(&point).unwrap().is_affine());
    assert!(!vector.add(&vector).unwrap().is_affine());
    assert!(point.subtract(&vector).unwrap().is_affine());
    assert!(!point.subtract(&point).unwrap().is_affine());
    assert!(!vector.multiply(&vector).unwrap().is_affine());
    assert!(approx(vector.scale(2.0).unwrap().value(), 10.0));

    for result in [
        point.add(&point),
        vector.subtract(&point),
        point.multiply(&vector),
        vector.multiply(&point),
        point.divide(&vector),
        point.scale(2.0),
    ] {
        assert!(matches!(
            result,
            Err(UnitError::InvalidAffineCombination(_))
        ));
    }
}

#[test]
fn measurement_value_in() {
    let (kelvin, celsius) = thermo("si");
    let point = Measurement::from(celsius.of(20.0));
    let vector = Measurement::from(kelvin.of(5.0));
    assert!(approx(point.value_in(&celsius).unwrap(), 20.0));
    assert!(approx(point.value_in(&kelvin).unwrap(), 293.15));
    assert!(approx(vector.value_in(&kelvin).unwrap(), 5.0));
    assert!(matches!(
        vector.value_in(&celsius),
        Err(UnitError::InvalidAffineCombination(_))
    ));
}

#[test]
fn measurement_checks_system_first() {
    let (_, celsius) = thermo("si");
    let (_, other) = thermo("other");
    let a = Measurement::from(celsius.of(1.0));
    let b = Measurement::from(other.of(1.0));
    assert_eq!(
        a.add(&b),
        Err(UnitError::IncompatibleSystem(
            "si".to_string(),
            "other".to_string()
        ))
    );
    assert!(matches!(
        a.value_in(&other),
        Err(UnitError::IncompatibleSystem(_, _))
    ));
}
