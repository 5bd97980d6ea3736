use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use env_logger::Env;
use log::info;

use euler_frames::{
    control::AngleControlPanel, Handedness, TaitBryanAnglesDefinition, WorldSystem,
};

/// Prints the camera-to-world rotation matrix for three Euler angles
#[derive(Parser)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Built-in angle convention
    #[clap(short, long, value_enum, default_value_t = Convention::Ypr)]
    convention: Convention,

    /// YAML file with a custom convention (a list of three elemental rotations)
    #[clap(long, conflicts_with = "convention")]
    definition: Option<PathBuf>,

    /// Built-in world system
    #[clap(short, long, value_enum, default_value_t = World::Ned)]
    world: World,

    /// YAML file with a custom world system (`x_axis`, `y_axis`, `z_axis`)
    #[clap(long, conflicts_with = "world")]
    world_file: Option<PathBuf>,

    /// Coarse angles in degrees, in the order they are applied
    #[clap(num_args = 3, required = true, allow_negative_numbers = true)]
    angles: Vec<i32>,

    /// Fine adjustments in degrees, each within [-50, 50]
    #[clap(short, long, num_args = 3, allow_negative_numbers = true)]
    fine: Option<Vec<i32>>,
}

#[derive(ValueEnum, Clone, Copy)]
enum Convention {
    /// Roll, then pitch, then yaw
    Ypr,
    /// Pix4D kappa, then phi, then omega
    Opk,
}

#[derive(ValueEnum, Clone, Copy)]
enum World {
    Ned,
    Enu,
    /// No world-axis sign correction
    None,
}

fn load_yaml<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("could not read {}", path.display()))?;
    let value = serde_yaml::from_str(&text)
        .with_context(|| format!("could not parse {}", path.display()))?;
    info!("Loaded {}", path.display());
    Ok(value)
}

fn triple(values: &[i32]) -> Result<[i32; 3]> {
    values
        .try_into()
        .map_err(|_| anyhow::anyhow!("expected 3 angles, got {}", values.len()))
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let definition = match &args.definition {
        Some(path) => load_yaml::<TaitBryanAnglesDefinition>(path)?,
        None => match args.convention {
            Convention::Ypr => TaitBryanAnglesDefinition::yaw_pitch_roll(),
            Convention::Opk => TaitBryanAnglesDefinition::pix4d_omega_phi_kappa(),
        },
    };
    let world = match &args.world_file {
        Some(path) => Some(load_yaml::<WorldSystem>(path)?),
        None => match args.world {
            World::Ned => Some(WorldSystem::ned()),
            World::Enu => Some(WorldSystem::enu()),
            World::None => None,
        },
    };

    info!("Convention: {definition}");
    match &world {
        Some(world) => {
            let handedness = match world.handedness() {
                Handedness::Right => "right-handed",
                Handedness::Left => "left-handed",
            };
            info!("World: {world} ({handedness})");
        }
        None => info!("World: none"),
    }

    let mut panel = AngleControlPanel::new(&definition);
    panel.set_initial(triple(&args.angles)?);
    if let Some(fine) = &args.fine {
        panel.set_add_diff(triple(fine)?)?;
    }

    for (i, control) in panel.controls().into_iter().enumerate() {
        println!(
            "{}. {}{} + {} = {}",
            i + 1,
            control.label(),
            control.initial(),
            control.add_diff(),
            control.final_degrees()
        );
    }

    let rotation = panel.camera_to_world(world.as_ref());
    println!();
    println!("camera to world:");
    for row in rotation.to_rows() {
        println!("  [{:>9.6} {:>9.6} {:>9.6}]", row[0], row[1], row[2]);
    }

    println!();
    println!("camera axes in world:");
    for (name, axis) in ["x", "y", "z"].into_iter().zip(rotation.camera_axes_in_world()) {
        println!("  {name}: [{:>9.6} {:>9.6} {:>9.6}]", axis[0], axis[1], axis[2]);
    }

    Ok(())
}
