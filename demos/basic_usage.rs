//! Basic solar position and irradiance example.

use chrono::{DateTime, FixedOffset, TimeZone, Utc};
use solar_irradiance::{SkyCondition, Timestamp, position, radiation};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // The same instant expressed with a fixed offset and in UTC
    let datetime_fixed = "2023-06-21T12:00:00-07:00".parse::<DateTime<FixedOffset>>()?;
    let datetime_utc = Utc.with_ymd_and_hms(2023, 6, 21, 19, 0, 0).unwrap(); // 19:00 UTC = 12:00 PDT
    let latitude = 37.7749; // San Francisco
    let longitude = -122.4194;

    let ts_fixed = Timestamp::from(datetime_fixed);
    let ts_utc = Timestamp::from(datetime_utc);

    let position_fixed = position::solar_position(latitude, longitude, ts_fixed)?;
    let position_utc = position::solar_position(latitude, longitude, ts_utc)?;

    println!("Solar position for San Francisco on June 21, 2023 at noon Pacific Time:");
    println!("  Declination: {:.3}°", position_fixed.declination());
    println!("  Hour angle: {:.3}°", position_fixed.hour_angle());
    println!("  Zenith angle: {:.3}°", position_fixed.zenith_angle());
    println!("  Altitude: {:.3}°", position_fixed.altitude_angle());
    println!("  Azimuth: {:.3}°", position_fixed.azimuth());

    println!(
        "\nFixed offset and UTC inputs produce identical results: {}",
        position_fixed == position_utc
    );

    println!("\nIrradiance by sky condition:");
    for sky in [
        SkyCondition::ClearSky,
        SkyCondition::ThinCloud,
        SkyCondition::ThickCloud,
    ] {
        let (min_tau, max_tau) = sky.optical_depth_range();
        let high = radiation::solar_radiation(latitude, longitude, ts_utc, min_tau)?;
        let low = radiation::solar_radiation(latitude, longitude, ts_utc, max_tau)?;
        println!("  {sky:?} (τ {min_tau}-{max_tau}): {low:.1} - {high:.1} W/m²");
    }

    println!(
        "\nTop of atmosphere: {:.1} W/m²",
        radiation::extraterrestrial_radiation(ts_utc)
    );

    Ok(())
}
