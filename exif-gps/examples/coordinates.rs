//! Parses coordinates given on the command line and prints them in all supported formats.
//!
//! ```sh
//! RUST_LOG=debug cargo run --example coordinates -- "40°41'21.2\"N" 74.0445W
//! ```

use exif_gps::{CoordinateFormat, GeoCoordinate};

fn main() {
    env_logger::init();

    let inputs: Vec<String> = std::env::args().skip(1).collect();
    if inputs.is_empty() {
        eprintln!("Usage: coordinates <coordinate>...");
        std::process::exit(2);
    }

    for input in inputs {
        match GeoCoordinate::parse(&input) {
            Ok(coordinate) => {
                let [degrees, minutes, seconds] = coordinate.to_rational_triple();
                println!("{input}");
                println!("  rationals: {degrees} {minutes} {seconds}");
                for format in [
                    CoordinateFormat::Decimal,
                    CoordinateFormat::Xmp,
                    CoordinateFormat::Dms,
                ] {
                    println!("  {format:?}: {}", coordinate.format(format));
                }
            }
            Err(err) => eprintln!("{input}: {err}"),
        }
    }
}
