use anyhow::Result;
use family_health_icons::{generate_icons, OUTPUT_DIR};
use std::path::Path;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    generate_icons(Path::new(OUTPUT_DIR))
}
