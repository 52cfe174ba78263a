//! Noon irradiance through the year for latitudes 0° to 90°.
//!
//! Prints one column per latitude and one row per week, the same grid a
//! charting front end would plot as one line per latitude.

use solar_irradiance::series::noon_radiation_by_latitude;

const TAU: f64 = 1.0;
const LATITUDES: [f64; 10] = [0.0, 10.0, 20.0, 30.0, 40.0, 50.0, 60.0, 70.0, 80.0, 90.0];

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let series = noon_radiation_by_latitude(2024, &LATITUDES, 0.0, TAU)?;

    print!("{:>5}", "day");
    for s in &series {
        print!("{:>8}", format!("{}°", s.latitude()));
    }
    println!();

    for row in (0..series[0].points().len()).step_by(7) {
        print!("{:>5}", series[0].points()[row].0);
        for s in &series {
            print!("{:>8.1}", s.points()[row].1);
        }
        println!();
    }

    println!("\nPeak noon irradiance (τ = {TAU}):");
    for s in &series {
        if let Some((day, value)) = s.peak() {
            println!("  {:>4}°: {value:.1} W/m² on day {day}", s.latitude());
        }
    }

    Ok(())
}
