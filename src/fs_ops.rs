use anyhow::{Context, Result};
use std::{fs, io, path::Path, time::Duration};

fn with_retry<F>(mut op: F, attempts: usize) -> Result<()>
where
    F: FnMut() -> Result<()>,
{
    let mut delay = Duration::from_millis(200);
    for i in 0..attempts {
        match op() {
            Ok(()) => return Ok(()),
            Err(err) => {
                if i + 1 == attempts {
                    return Err(err);
                }
            }
        }
        std::thread::sleep(delay);
        delay = std::cmp::min(delay * 2, Duration::from_secs(2));
    }
    Ok(())
}

// The host application can hold handles on installed scripts for a moment
// after closing; retry transient removal failures before giving up.
pub fn remove_dir_all_with_retry(path: &Path, attempts: usize) -> Result<()> {
    with_retry(
        || fs::remove_dir_all(path).with_context(|| format!("remove {}", path.display())),
        attempts,
    )
}

pub fn copy_dir_all(src: &Path, dest: &Path) -> io::Result<()> {
    fs::create_dir_all(dest)?;
    for entry in fs::read_dir(src)? {
        let entry = entry?;
        let file_type = entry.file_type()?;
        let from = entry.path();
        let to = dest.join(entry.file_name());
        if file_type.is_dir() {
            copy_dir_all(&from, &to)?;
        } else if file_type.is_file() {
            fs::copy(&from, &to)?;
        }
    }
    Ok(())
}
