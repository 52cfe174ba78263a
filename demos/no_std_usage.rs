//! Example using only the numeric API.
//!
//! Nothing here needs `std` math or `chrono`: callers build timestamps from UTC
//! components themselves.

use solar_irradiance::{air_mass, declination, distance, hour_angle, time, zenith};

fn main() {
    // 2024-06-21 12:00:00 UTC, Vienna: 48.21°N, 16.37°E
    let ts = time::Timestamp::new(2024, 6, 21, 12, 0, 0.0).expect("valid date");
    let (latitude, longitude) = (48.21, 16.37);

    let jd = time::julian_day(ts);
    println!("Julian Day: {jd:.6}");
    println!("Centuries since J2000.0: {:.9}", time::centuries_since_j2000(jd));

    let dec = declination::solar_declination(ts);
    let h = hour_angle::hour_angle(ts, longitude);
    let z = zenith::solar_zenith_angle(latitude, dec, h);
    let alt = zenith::solar_altitude(z).expect("zenith is clamped to [0, 90]");

    println!("Declination: {dec:.4}°");
    println!("Hour angle: {h:.4}°");
    println!("Zenith: {z:.4}°, altitude: {alt:.4}°");
    println!(
        "Air mass: {:.4}",
        air_mass::air_mass(z).expect("zenith is clamped to [0, 90]")
    );
    println!(
        "Earth-Sun distance: {:.0} km ({:.6} AU)",
        distance::absolute_earth_sun_distance(ts),
        distance::relative_earth_sun_distance(ts)
    );
}
