//! CLI for trying out the Hue color helpers.
//!
//! Prints the xy a light would be sent for a temperature or color, and the
//! state body that carries it.
//!
//! Run with: cargo run --example hue_color -- --help

use clap::{Parser, Subcommand};
use hue_color_rs::{
    GamutType, Light, Mired, Point, StateUpdate, WIDE_GAMUT, ct_to_xy, light_xy,
};

#[derive(Parser)]
#[command(name = "hue-color")]
#[command(about = "Convert and clip colors for Philips Hue lights", long_about = None)]
struct Cli {
    /// Gamut to clip into: A, B, C or other (default: wide gamut)
    #[arg(short, long, global = true)]
    gamut: Option<GamutType>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a color temperature in mired
    Ct {
        /// Mired value (e.g. 153-500)
        mired: f64,
    },

    /// Convert a color temperature in Kelvin
    Kelvin {
        /// Temperature in Kelvin (e.g. 2000-6500)
        kelvin: u32,
    },

    /// Clip an xy color into the gamut
    Xy {
        /// CIE x coordinate
        x: f64,
        /// CIE y coordinate
        y: f64,
    },

    /// Read a light description (bridge JSON) and show its current color
    Light {
        /// Path to the JSON file
        path: std::path::PathBuf,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let gamut = cli.gamut.map(|t| t.gamut()).unwrap_or(WIDE_GAMUT);

    match cli.command {
        Commands::Ct { mired } => show(ct_to_xy(mired), gamut.nearest_from_ct(mired))?,

        Commands::Kelvin { kelvin } => {
            let mired = Mired::from_kelvin(kelvin).ok_or("Kelvin value out of range")?;
            println!("{}K is {} mired", kelvin, mired.value());
            show(mired.to_xy(), gamut.nearest(mired.to_xy()))?;
        }

        Commands::Xy { x, y } => {
            let point = Point::new(x, y);
            show(point, gamut.nearest(point))?;
        }

        Commands::Light { path } => {
            let light = Light::from_json(&std::fs::read_to_string(path)?)?;
            println!("Light: {}", light.name().unwrap_or("<unnamed>"));
            println!("  Gamut: {:?}", light.gamut());
            match light_xy(&light) {
                Some(xy) => println!("  Current xy: ({:.4}, {:.4})", xy.x(), xy.y()),
                None => println!("  Current xy: unknown (not in xy or ct mode)"),
            }
        }
    }

    Ok(())
}

fn show(raw: Point, clipped: Point) -> Result<(), Box<dyn std::error::Error>> {
    println!("  Raw xy:     ({:.4}, {:.4})", raw.x(), raw.y());
    println!("  Clipped xy: ({:.4}, {:.4})", clipped.x(), clipped.y());
    println!("  Body:       {}", StateUpdate::from(clipped).to_json()?);
    Ok(())
}
