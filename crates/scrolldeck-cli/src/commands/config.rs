use anyhow::Result;

use scrolldeck_core::DeckConfig;

pub fn run(config: &DeckConfig, init: bool) -> Result<()> {
    let path = DeckConfig::config_path();

    if init {
        if path.exists() {
            println!("Config already exists at {}", path.display());
            return Ok(());
        }
        config.save()?;
        println!("Wrote default config to {}", path.display());
        return Ok(());
    }

    if path.exists() {
        println!("# {}", path.display());
    } else {
        println!("# {} (not present, showing defaults)", path.display());
    }
    print!("{}", toml::to_string_pretty(config)?);
    Ok(())
}
