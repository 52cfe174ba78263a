//! Range and consistency properties of the individual pipeline stages.

use solar_irradiance::air_mass::air_mass;
use solar_irradiance::azimuth::solar_azimuth;
use solar_irradiance::constants::ASTRONOMICAL_UNIT_KM;
use solar_irradiance::distance::{absolute_earth_sun_distance, relative_earth_sun_distance};
use solar_irradiance::zenith::{solar_altitude, solar_zenith_angle};
use solar_irradiance::{Error, Timestamp};

fn steps(start: f64, end: f64, step: f64) -> impl Iterator<Item = f64> {
    let n = ((end - start) / step).round() as i64;
    (0..=n).map(move |i| start + step * i as f64)
}

#[test]
fn air_mass_is_at_least_one_and_increasing_per_branch() {
    let mut previous = 0.0;
    for zenith in steps(0.0, 60.0, 0.25) {
        let am = air_mass(zenith).unwrap();
        assert!(am >= 1.0);
        assert!(am > previous, "zenith {zenith}");
        previous = am;
    }

    let mut previous = 0.0;
    for zenith in steps(60.25, 90.0, 0.25) {
        let am = air_mass(zenith).unwrap();
        assert!(am >= 1.0);
        assert!(am > previous, "zenith {zenith}");
        previous = am;
    }
}

#[test]
fn air_mass_branches_meet_closely_at_sixty_degrees() {
    let simple = air_mass(60.0).unwrap();
    for epsilon in [1e-3, 1e-6, 1e-9] {
        let kasten_young = air_mass(60.0 + epsilon).unwrap();
        // the two models differ by ~0.3% at the switch
        assert!((simple - kasten_young).abs() / simple < 0.005);
    }
}

#[test]
fn zenith_is_clamped_for_all_inputs() {
    for latitude in steps(-90.0, 90.0, 10.0) {
        for declination in steps(-23.5, 23.5, 4.7) {
            for hour_angle in steps(-540.0, 540.0, 15.0) {
                let z = solar_zenith_angle(latitude, declination, hour_angle);
                assert!(
                    (0.0..=90.0).contains(&z),
                    "{latitude} {declination} {hour_angle}: {z}"
                );
            }
        }
    }
}

#[test]
fn altitude_plus_zenith_is_ninety() {
    for zenith in steps(0.0, 180.0, 0.5) {
        let altitude = solar_altitude(zenith).unwrap();
        assert!((altitude + zenith - 90.0).abs() < 1e-12);
    }
}

#[test]
fn altitude_rejects_zenith_just_outside_range() {
    assert!(matches!(
        solar_altitude(-0.0001),
        Err(Error::InvalidZenithAngle { .. })
    ));
    assert!(matches!(
        solar_altitude(180.0001),
        Err(Error::InvalidZenithAngle { .. })
    ));
    assert_eq!(solar_altitude(0.0).unwrap(), 90.0);
    assert_eq!(solar_altitude(180.0).unwrap(), -90.0);
}

#[test]
fn azimuth_is_in_range_for_non_degenerate_inputs() {
    for latitude in steps(-89.0, 89.0, 8.9) {
        for altitude in steps(-89.0, 89.0, 8.9) {
            for declination in [-23.44, 0.0, 23.44] {
                for hour_angle in steps(-180.0, 180.0, 30.0) {
                    let az = solar_azimuth(latitude, altitude, declination, hour_angle).unwrap();
                    assert!(
                        (0.0..360.0).contains(&az),
                        "{latitude} {altitude} {declination} {hour_angle}: {az}"
                    );
                }
            }
        }
    }
}

#[test]
fn relative_distance_is_absolute_over_au() {
    for day in 1..=365 {
        let ts = Timestamp::from_day_of_year(2023, day, 0, 0, 0.0).unwrap();
        let relative = relative_earth_sun_distance(ts);
        let absolute = absolute_earth_sun_distance(ts);
        assert!((relative - absolute / ASTRONOMICAL_UNIT_KM).abs() < 1e-15);
        assert!((absolute / 149_597_870.7 - relative).abs() < 1e-12);
    }
}
