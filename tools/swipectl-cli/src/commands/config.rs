//! Show the effective configuration.

use swipectl_common::config::{config_file_path, SwipeControlsConfig};

pub fn run(config: SwipeControlsConfig, save: bool) -> anyhow::Result<()> {
    config.validate()?;

    println!("{}", serde_json::to_string_pretty(&config)?);
    println!();

    println!("Unit distances (px @ {}x density):", config.display_density);
    for (name, px) in config.unit_distances_px().entries() {
        println!("  {name:<10} {px:.2}");
    }

    if save {
        config.save()?;
        println!();
        println!("Saved to {}", config_file_path().display());
    }

    Ok(())
}
