#[path = "../src/config.rs"]
mod config;
#[path = "../src/paths.rs"]
mod paths;

use std::path::{Path, PathBuf};

#[test]
fn scripts_dir_is_rooted_in_data_dir() {
    let data_dir = PathBuf::from("/data");
    assert_eq!(
        paths::scripts_dir(&data_dir),
        data_dir
            .join("Autodesk")
            .join("Autodesk Fusion 360")
            .join("API")
            .join("Scripts")
    );
}

#[test]
fn target_dir_appends_payload_name() {
    let base = Path::new("/data/Scripts");
    assert_eq!(paths::target_dir(base), base.join(config::NAME));
}
