use anyhow::Result;
use std::{
    io::{self, Write},
    path::{Path, PathBuf},
};
use thiserror::Error;

use crate::{cli, config, fs_ops, logging, paths};

#[derive(Debug, Error)]
pub enum InstallError {
    #[error("payload directory not found at '{path}'")]
    MissingSource { path: PathBuf },

    #[error("Fusion 360 API Scripts directory not found at '{path}'")]
    MissingHostDirectory { path: PathBuf },

    #[error("failed to copy '{source}' to '{destination}': {error}")]
    CopyFailed {
        source: PathBuf,
        destination: PathBuf,
        #[source]
        error: io::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Installed,
    Cancelled,
}

pub struct InstallOptions {
    pub source_dir: PathBuf,
    pub target_base: PathBuf,
    pub force: bool,
}

pub fn run(args: &cli::Cli) -> Result<Outcome> {
    let source_dir = match &args.source {
        Some(dir) => dir.clone(),
        None => paths::default_source_dir()?,
    };
    let target_base = match &args.target {
        Some(dir) => dir.clone(),
        None => paths::default_target_base()?,
    };

    let log_path = match logging::init() {
        Ok(path) => Some(path),
        Err(err) => {
            eprintln!("warning: could not create install log: {err}");
            None
        }
    };

    let opts = InstallOptions {
        source_dir,
        target_base,
        force: args.force,
    };
    let outcome = install_with_deps(&opts, prompt_overwrite, log_path.as_deref())?;

    if outcome == Outcome::Installed {
        print_usage_notes();
    }
    Ok(outcome)
}

pub fn install_with_deps(
    opts: &InstallOptions,
    mut confirm: impl FnMut(&Path) -> io::Result<bool>,
    log_path: Option<&Path>,
) -> Result<Outcome, InstallError> {
    if !opts.source_dir.is_dir() {
        return Err(InstallError::MissingSource {
            path: opts.source_dir.clone(),
        });
    }
    if !opts.target_base.is_dir() {
        return Err(InstallError::MissingHostDirectory {
            path: opts.target_base.clone(),
        });
    }

    let target_dir = paths::target_dir(&opts.target_base);
    if target_dir.exists() {
        if !opts.force {
            // A failed or closed stdin counts as a decline.
            let confirmed = confirm(&target_dir).unwrap_or(false);
            if !confirmed {
                report(log_path, "Installation canceled.");
                return Ok(Outcome::Cancelled);
            }
        }
        match fs_ops::remove_dir_all_with_retry(&target_dir, 3) {
            Ok(()) => report(log_path, "Previous version removed."),
            Err(err) => {
                warn(log_path, &format!("could not fully remove old version: {err}"));
                report(log_path, "Will attempt to overwrite.");
            }
        }
    }

    report(log_path, &format!("Installing {}...", config::NAME));
    if let Err(error) = fs_ops::copy_dir_all(&opts.source_dir, &target_dir) {
        return Err(InstallError::CopyFailed {
            source: opts.source_dir.clone(),
            destination: target_dir,
            error,
        });
    }

    report(log_path, &format!("Source: {}", opts.source_dir.display()));
    report(log_path, &format!("Target: {}", target_dir.display()));

    if !config::CLEANUP_SCRIPT.trim().is_empty()
        && target_dir.join(config::CLEANUP_SCRIPT).exists()
    {
        report(
            log_path,
            "Automatic component cleanup is included; run it from Scripts and Add-Ins after an export.",
        );
    }

    report(
        log_path,
        &format!("{} installation complete!", config::PRODUCT_NAME),
    );
    Ok(Outcome::Installed)
}

fn prompt_overwrite(target_dir: &Path) -> io::Result<bool> {
    let mut out = io::stdout();
    write!(
        out,
        "Detected an existing {} at {}. Remove and reinstall? (y/N): ",
        config::NAME,
        target_dir.display()
    )?;
    out.flush()?;

    let mut answer = String::new();
    io::stdin().read_line(&mut answer)?;
    Ok(affirmative(&answer))
}

fn affirmative(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

fn report(log_path: Option<&Path>, line: &str) {
    println!("{line}");
    let _ = logging::log_line(log_path, line);
}

fn warn(log_path: Option<&Path>, line: &str) {
    eprintln!("warning: {line}");
    let _ = logging::log_line(log_path, &format!("warning: {line}"));
}

fn print_usage_notes() {
    println!();
    println!("Usage:");
    println!("1. Open Fusion 360");
    println!("2. Go to Scripts and Add-Ins (Shift+S)");
    println!("3. Select {} and run it", config::NAME);
    println!();
    println!("Restart Fusion 360 to load the new version.");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn affirmative_accepts_y_and_yes() {
        assert!(affirmative("y\n"));
        assert!(affirmative("Y\n"));
        assert!(affirmative("  yes \n"));
    }

    #[test]
    fn affirmative_rejects_everything_else() {
        assert!(!affirmative(""));
        assert!(!affirmative("\n"));
        assert!(!affirmative("n\n"));
        assert!(!affirmative("no\n"));
        assert!(!affirmative("yep\n"));
    }

    #[test]
    fn missing_source_error_names_the_path() {
        let err = InstallError::MissingSource {
            path: PathBuf::from("/nowhere/payload"),
        };
        assert!(err.to_string().contains("/nowhere/payload"));
    }
}
