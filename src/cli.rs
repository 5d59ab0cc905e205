use std::path::PathBuf;

use clap::Parser;

#[derive(Parser, Debug)]
#[command(
    name = "install-urdf-exporter",
    version = crate::config::VERSION,
    about = "Installs the URDF Exporter add-in into the Fusion 360 Scripts directory",
    long_about = None
)]
pub struct Cli {
    /// Overwrite an existing installation without prompting.
    #[arg(short, long)]
    pub force: bool,

    /// Custom target Scripts directory (defaults to the Fusion 360 API Scripts path).
    #[arg(long, value_name = "DIR")]
    pub target: Option<PathBuf>,

    /// Custom payload directory (defaults to the folder shipped next to the installer).
    #[arg(long, value_name = "DIR")]
    pub source: Option<PathBuf>,
}
