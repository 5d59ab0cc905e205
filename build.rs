use std::{
    fs::{self, File},
    io::{self, Write},
    path::{Path, PathBuf},
};

use serde::Deserialize;

fn main() {
    let out_dir = std::env::var("OUT_DIR").expect("OUT_DIR not set");
    let manifest_dir = std::env::var("CARGO_MANIFEST_DIR").expect("CARGO_MANIFEST_DIR not set");
    let repo_root = PathBuf::from(manifest_dir);

    let config = load_config(&repo_root).unwrap_or_else(|err| {
        panic!("failed to load config.toml: {err}");
    });

    if config.name.trim().is_empty() {
        panic!("config.toml name must not be empty");
    }

    if let Err(err) = write_config_rs(Path::new(&out_dir), &config) {
        panic!("failed to write config: {err}");
    }
}

#[derive(Debug, Deserialize)]
struct Config {
    name: String,
    product_name: String,
    version: String,
    #[serde(default)]
    cleanup_script: String,
}

fn load_config(repo_root: &Path) -> io::Result<Config> {
    let config_path = repo_root.join("config.toml");
    println!("cargo:rerun-if-changed={}", config_path.display());
    let contents = fs::read_to_string(&config_path)?;
    let cfg: Config = toml::from_str(&contents)
        .map_err(|err| io::Error::new(io::ErrorKind::InvalidData, err))?;
    Ok(cfg)
}

fn write_config_rs(out_dir: &Path, config: &Config) -> io::Result<()> {
    let out_path = out_dir.join("installer_config.rs");
    let mut file = File::create(&out_path)?;
    writeln!(file, "pub const NAME: &str = {:?};", config.name)?;
    writeln!(
        file,
        "pub const PRODUCT_NAME: &str = {:?};",
        config.product_name
    )?;
    writeln!(file, "pub const VERSION: &str = {:?};", config.version)?;
    writeln!(
        file,
        "pub const CLEANUP_SCRIPT: &str = {:?};",
        config.cleanup_script
    )?;
    Ok(())
}
