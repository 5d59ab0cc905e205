#[path = "../src/fs_ops.rs"]
mod fs_ops;

use std::fs;

#[test]
fn copy_dir_all_creates_destination() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src");
    let dest = tmp.path().join("deep").join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::write(src.join("script.py"), "pass").unwrap();

    fs_ops::copy_dir_all(&src, &dest).unwrap();

    assert_eq!(fs::read_to_string(dest.join("script.py")).unwrap(), "pass");
}

#[test]
fn copy_dir_all_overwrites_existing_files() {
    let tmp = tempfile::tempdir().unwrap();
    let src = tmp.path().join("src");
    let dest = tmp.path().join("dest");
    fs::create_dir_all(&src).unwrap();
    fs::create_dir_all(&dest).unwrap();
    fs::write(src.join("script.py"), "new").unwrap();
    fs::write(dest.join("script.py"), "old").unwrap();
    fs::write(dest.join("leftover.py"), "old").unwrap();

    fs_ops::copy_dir_all(&src, &dest).unwrap();

    assert_eq!(fs::read_to_string(dest.join("script.py")).unwrap(), "new");
    // Merge semantics: files not present in the source are left alone.
    assert!(dest.join("leftover.py").exists());
}

#[test]
fn remove_dir_all_with_retry_fails_on_missing_path() {
    let tmp = tempfile::tempdir().unwrap();
    let err = fs_ops::remove_dir_all_with_retry(&tmp.path().join("absent"), 2).unwrap_err();
    assert!(err.to_string().contains("remove"));
}
