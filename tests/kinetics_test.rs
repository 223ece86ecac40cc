use anyhow::Result;
use gcmemo::{AntibodyKinetics, Parameters};

fn default_kinetics() -> Result<AntibodyKinetics> {
    Parameters::default().antibody_kinetics()
}

#[test]
fn single_dose() -> Result<()> {
    let k = default_kinetics()?;
    for t in [0, 1, 17, 360] {
        assert!(k.serum_concentration(t, t) == k.secretion_rate() / k.blood_volume());
    }
    assert!(k.serum_concentration(0, 0) == 2.1e-17 * 2. / 5.);
    Ok(())
}

#[test]
fn accumulation_is_non_decreasing() -> Result<()> {
    let k = default_kinetics()?;
    let values: Vec<f64> = [0, 1, 5, 20]
        .iter()
        .map(|&t1| k.serum_concentration(0, t1))
        .collect();
    for w in values.windows(2) {
        assert!(w[0] <= w[1]);
    }
    for t1 in 0..200 {
        assert!(k.serum_concentration(0, t1) <= k.serum_concentration(0, t1 + 1));
    }
    Ok(())
}

#[test]
fn decay_of_the_doses() -> Result<()> {
    let k = AntibodyKinetics::new(1., 10., 1.)?;
    // second dose is one timestep old
    let expected = 1. + 0.5f64.powf(0.1);
    assert!((k.serum_concentration(3, 4) - expected).abs() < 1e-12);
    // long time limit: geometric series 1 / (1 - 0.5^(1/h))
    let limit = 1. / (1. - 0.5f64.powf(0.1));
    assert!((k.serum_concentration(0, 5000) - limit).abs() < 1e-9);
    // only the elapsed time matters
    assert!(k.serum_concentration(10, 30) == k.serum_concentration(0, 20));
    Ok(())
}

#[test]
fn not_started_yet() -> Result<()> {
    let k = default_kinetics()?;
    assert!(k.serum_concentration(10, 9) == 0.);
    assert!(k.serum_concentration(10, 0) == 0.);
    Ok(())
}

#[test]
fn titer_of_a_population() -> Result<()> {
    let k = default_kinetics()?;
    let starts = vec![0, 3, 3, 10, 50];
    let tnow = 40;
    let sequential: f64 = starts
        .iter()
        .map(|&s| k.serum_concentration(s, tnow))
        .sum();
    let titer = k.serum_titer(&starts, tnow);
    assert!((titer - sequential).abs() <= 1e-12 * sequential);
    assert!(k.serum_titer(&[], tnow) == 0.);
    Ok(())
}

#[test]
fn invalid_kinetics() {
    assert!(AntibodyKinetics::new(1., 0., 5.).is_err());
    assert!(AntibodyKinetics::new(1., 10., 0.).is_err());
    assert!(AntibodyKinetics::new(-1., 10., 5.).is_err());
    assert!(AntibodyKinetics::new(f64::NAN, 10., 5.).is_err());
}

#[test]
fn deserialization_is_validated() -> Result<()> {
    let bad = [
        r#"{"secretion_rate": 1.0, "half_life": -1.0, "blood_volume": 5.0}"#,
        r#"{"secretion_rate": 1.0, "half_life": 0.0, "blood_volume": 5.0}"#,
        r#"{"secretion_rate": 1.0, "half_life": 10.0, "blood_volume": 0.0}"#,
        r#"{"secretion_rate": -1.0, "half_life": 10.0, "blood_volume": 5.0}"#,
    ];
    for json in bad {
        assert!(serde_json::from_str::<AntibodyKinetics>(json).is_err());
    }

    let k: AntibodyKinetics =
        serde_json::from_str(r#"{"secretion_rate": 1.0, "half_life": 10.0, "blood_volume": 5.0}"#)?;
    assert!(k == AntibodyKinetics::new(1., 10., 5.)?);
    assert!(k.serum_concentration(0, 0) == 0.2);

    // serialized values load back through the same checks
    let default = default_kinetics()?;
    let reloaded: AntibodyKinetics = serde_json::from_str(&serde_json::to_string(&default)?)?;
    assert!(reloaded == default);
    Ok(())
}
