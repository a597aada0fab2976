//! Formula results against published reference values.

use pf_core::units::{ev, k, mps, tesla};
use pf_core::{PhysicalQuantity, Tolerances, Unit, Value, nearly_equal};
use pf_formulary::*;

fn close(a: f64, b: f64, rel: f64) -> bool {
    nearly_equal(a, b, Tolerances::relative(rel))
}

fn per_m3(n: f64) -> PhysicalQuantity {
    PhysicalQuantity::new(n, Unit::PER_CUBIC_METER)
}

fn scalar(out: &Evaluation) -> f64 {
    out.scalar().expect("scalar result")
}

#[test]
fn mass_density_of_ions() {
    let d = MassDensityOptions {
        particle: Some("D+"),
        z_mean: None,
    };
    let rho = mass_density(per_m3(4.0), d).unwrap();
    let expected = 4.0 * pf_core::constants::M_D + 4.0 * pf_core::constants::M_E;
    assert!(close(scalar(&rho), expected, 1e-14));

    let p = MassDensityOptions {
        particle: Some("p"),
        z_mean: None,
    };
    assert!(close(scalar(&mass_density(per_m3(1.0), p).unwrap()), 1.673_532_862_06e-27, 1e-10));
}

#[test]
fn alfven_speed_of_protons() {
    let v = alfven_speed(tesla(0.014), per_m3(5e19), AlfvenSpeedOptions::default()).unwrap();
    assert!(close(scalar(&v), 43_173.869_952, 1e-9));
    assert!(v.warnings().is_empty());

    let bare = alfven_speed(tesla(0.014), 5e19, AlfvenSpeedOptions::default()).unwrap();
    assert!(close(scalar(&bare), 43_173.869_952, 1e-9));
    assert!(bare.has_warning(|w| matches!(
        w,
        PlasmaWarning::UnitsAssumed { param: "density", .. }
    )));
}

#[test]
fn debye_number_in_cgs_density() {
    let n = PhysicalQuantity::new(5e9, Unit::PER_CUBIC_CENTIMETER);
    let nd = debye_number(k(5e6), n).unwrap();
    assert!(close(scalar(&nd), 2.176_584e8, 1e-6));
}

#[test]
fn ion_sound_speed_variants() {
    let base = ion_sound_speed(
        k(5e6),
        k(0.0),
        IonSoundSpeedOptions {
            ion: "p",
            ..Default::default()
        },
    )
    .unwrap();
    assert!(close(scalar(&base), 203_155.110_159, 1e-9));
    assert!(base.warnings().is_empty());

    let dispersive = |k_value: f64| {
        ion_sound_speed(
            k(5e6),
            k(0.0),
            IonSoundSpeedOptions {
                n_e: Some(per_m3(5e19).into()),
                k: Some(PhysicalQuantity::new(k_value, Unit::PER_METER).into()),
                ion: "p",
                ..Default::default()
            },
        )
        .unwrap()
    };
    assert!(close(scalar(&dispersive(30.0)), 203_155.066_622, 1e-9));
    assert!(close(scalar(&dispersive(3e7)), 310.313_290_94, 1e-8));

    let deuterium = ion_sound_speed(
        ev(500.0),
        ev(200.0),
        IonSoundSpeedOptions {
            ion: "D+",
            ..Default::default()
        },
    )
    .unwrap();
    assert!(close(scalar(&deuterium), 229_585.96, 1e-6));
}

#[test]
fn ion_sound_speed_warns_with_only_density() {
    let v = ion_sound_speed(
        k(5e6),
        k(0.0),
        IonSoundSpeedOptions {
            n_e: Some(per_m3(5e19).into()),
            ..Default::default()
        },
    )
    .unwrap();
    assert!(v.has_warning(|w| *w == PlasmaWarning::NonDispersiveLimit));
    assert!(close(scalar(&v), 203_155.110_159, 1e-9));
}

#[test]
fn thermal_speed_methods() {
    let proton = ThermalSpeedOptions {
        particle: "p",
        ..Default::default()
    };
    assert!(close(scalar(&thermal_speed(k(1e6), proton).unwrap()), 128_486.573_281, 1e-9));

    let expected = [
        (ThermalSpeedMethod::MostProbable, 5_505_694.902_7),
        (ThermalSpeedMethod::Rms, 6_743_071.595_6),
        (ThermalSpeedMethod::MeanMagnitude, 6_212_511.428_6),
    ];
    for (method, v) in expected {
        let options = ThermalSpeedOptions {
            method,
            ..Default::default()
        };
        let got = thermal_speed(k(1e6), options).unwrap();
        assert!(close(scalar(&got), v, 1e-9), "{method}");
        // 0.018c to 0.023c: below the warning threshold
        assert!(got.warnings().is_empty());
    }
}

#[test]
fn kappa_thermal_speed_methods() {
    let expected = [
        (ThermalSpeedMethod::MostProbable, 24_467.878_376),
        (ThermalSpeedMethod::Rms, 37_905.474_188),
        (ThermalSpeedMethod::MeanMagnitude, 34_922.985_506),
    ];
    for (method, v) in expected {
        let options = KappaThermalSpeedOptions {
            particle: "p",
            method,
        };
        let got = kappa_thermal_speed(ev(5.0), 4.0, options).unwrap();
        assert!(close(scalar(&got), v, 1e-8), "{method}");
    }
}

#[test]
fn gyrofrequencies_of_ions() {
    let p = GyrofrequencyOptions {
        particle: "p",
        ..Default::default()
    };
    assert!(close(scalar(&gyrofrequency(tesla(0.01), p).unwrap()), 957_883.315_59, 1e-9));

    let t = GyrofrequencyOptions {
        particle: "T+",
        ..Default::default()
    };
    assert!(close(scalar(&gyrofrequency(tesla(0.01), t).unwrap()), 319_964.547_31, 1e-9));
}

#[test]
fn gyroradius_of_iron_in_gauss() {
    let b = PhysicalQuantity::new(400.0, Unit::GAUSS);
    let options = GyroradiusOptions {
        particle: "Fe+++",
        vperp: Some(mps(1e7).into()),
        t_i: None,
    };
    let r = gyroradius(b, options).unwrap();
    assert!(close(scalar(&r), 48.231_298_5, 1e-7));
    assert_eq!(r.unit(), &Unit::METER);
}

#[test]
fn gyroradius_electron_temperature() {
    let options = GyroradiusOptions {
        t_i: Some(k(1e6).into()),
        ..Default::default()
    };
    let r = gyroradius(tesla(0.01), options).unwrap();
    assert!(close(scalar(&r), 0.003_130_334_5, 1e-7));
}

#[test]
fn gyroradius_array_field_with_scalar_speed() {
    let b = PhysicalQuantity::new(vec![0.01, 0.02], Unit::TESLA);
    let options = GyroradiusOptions {
        vperp: Some(mps(1e6).into()),
        ..Default::default()
    };
    let r = gyroradius(b, options).unwrap();
    let r = r.value().as_slice();
    assert!(close(r[0], 2.0 * r[1], 1e-12));
}

#[test]
fn plasma_frequencies() {
    let p = PlasmaFrequencyOptions {
        particle: "p",
        ..Default::default()
    };
    let w = plasma_frequency(per_m3(1e19), p).unwrap();
    assert!(close(scalar(&w), 4.163_294_534e9, 1e-9));
    let f = plasma_frequency(per_m3(1e19), PlasmaFrequencyOptions { to_hz: true, ..p }).unwrap();
    assert!(close(scalar(&f), 6.626_089_046e8, 1e-9));

    let d = PlasmaFrequencyOptions {
        particle: "D+",
        ..Default::default()
    };
    assert!(close(scalar(&plasma_frequency(per_m3(1e19), d).unwrap()), 2.944_624_522e9, 1e-9));
    let e = plasma_frequency(per_m3(1e19), PlasmaFrequencyOptions::default()).unwrap();
    assert!(close(scalar(&e), 1.783_986_366e11, 1e-9));
}

#[test]
fn inertial_length_of_helium_ions() {
    let d = inertial_length(per_m3(5.0), "He+").unwrap();
    assert!(close(scalar(&d), 2.029_858e8, 1e-5));
}

#[test]
fn bare_numbers_assume_si() {
    let d = debye_length(5e6, 5e15).unwrap();
    assert!(close(scalar(&d), 0.002_182_255_58, 1e-8));
    let params: Vec<_> = d
        .warnings()
        .iter()
        .filter_map(|w| match w {
            PlasmaWarning::UnitsAssumed { param, .. } => Some(*param),
            _ => None,
        })
        .collect();
    assert_eq!(params, vec!["T_e", "n_e"]);
}

#[test]
fn array_inputs_broadcast() {
    let n = PhysicalQuantity::new(vec![1e19, 4e19], Unit::PER_CUBIC_METER);
    let w = plasma_frequency(n, PlasmaFrequencyOptions::default()).unwrap();
    let Value::Array(w) = w.value() else {
        panic!("expected array result")
    };
    assert!(close(w[1], 2.0 * w[0], 1e-12));
}

#[test]
fn errors_by_kind() {
    assert!(matches!(
        debye_length(PhysicalQuantity::new(1.0, Unit::METER), per_m3(1.0)),
        Err(FormularyError::Dimension { param: "T_e", .. })
    ));
    assert!(matches!(
        thermal_pressure(k(-1.0), per_m3(1.0)),
        Err(FormularyError::NegativeValue { param: "T" })
    ));
    assert!(matches!(
        magnetic_pressure(f64::NAN),
        Err(FormularyError::InvalidValue { param: "B" })
    ));
    let shapes = thermal_pressure(
        PhysicalQuantity::new(vec![1.0, 2.0], Unit::KELVIN),
        PhysicalQuantity::new(vec![1.0, 2.0, 3.0], Unit::PER_CUBIC_METER),
    );
    assert!(matches!(shapes, Err(FormularyError::Quantity(_))));
}
