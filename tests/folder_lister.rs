use std::fs;

use galerie::media::lister::{FolderLister, FsFolderLister, MemoryFolderLister};
use galerie::media::MediaError;

fn touch(path: &std::path::Path) {
    fs::write(path, b"").unwrap();
}

#[test]
fn fs_lists_files_sorted_by_name() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("2024").join("fete");
    fs::create_dir_all(&dir).unwrap();
    for name in ["c.jpg", "a.jpg", "b.txt"] {
        touch(&dir.join(name));
    }

    let lister = FsFolderLister::new(tmp.path());
    assert_eq!(lister.list_files("2024/fete").unwrap(), ["a.jpg", "b.txt", "c.jpg"]);
}

#[test]
fn fs_does_not_recurse_or_list_directories() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("album");
    fs::create_dir_all(dir.join("nested")).unwrap();
    touch(&dir.join("top.jpg"));
    touch(&dir.join("nested").join("deep.jpg"));

    let lister = FsFolderLister::new(tmp.path());
    assert_eq!(lister.list_files("album").unwrap(), ["top.jpg"]);
}

#[test]
fn fs_missing_folder_is_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    let lister = FsFolderLister::new(tmp.path());
    let err = lister.list_files("nope").unwrap_err();
    assert!(matches!(err, MediaError::FolderUnavailable { ref path, .. } if path == "nope"));
}

#[test]
fn fs_file_instead_of_folder_is_unavailable() {
    let tmp = tempfile::tempdir().unwrap();
    touch(&tmp.path().join("photo.jpg"));
    let lister = FsFolderLister::new(tmp.path());
    assert!(lister.list_files("photo.jpg").is_err());
}

#[test]
fn fs_refuses_to_escape_root() {
    let tmp = tempfile::tempdir().unwrap();
    let root = tmp.path().join("root");
    fs::create_dir_all(&root).unwrap();
    fs::create_dir_all(tmp.path().join("private")).unwrap();
    touch(&tmp.path().join("private").join("secret.jpg"));

    let lister = FsFolderLister::new(&root);
    assert!(lister.list_files("../private").is_err());
}

#[test]
fn fs_leading_slash_stays_under_root() {
    let tmp = tempfile::tempdir().unwrap();
    fs::create_dir_all(tmp.path().join("album")).unwrap();
    touch(&tmp.path().join("album").join("a.png"));

    let lister = FsFolderLister::new(tmp.path());
    assert_eq!(lister.list_files("/album").unwrap(), ["a.png"]);
}

#[test]
fn memory_returns_inserted_order() {
    let lister = MemoryFolderLister::new().with_folder("f", ["z.jpg", "a.jpg"]);
    assert_eq!(lister.list_files("f").unwrap(), ["z.jpg", "a.jpg"]);
}

#[test]
fn memory_unknown_folder_is_unavailable() {
    let lister = MemoryFolderLister::new();
    assert!(matches!(
        lister.list_files("f"),
        Err(MediaError::FolderUnavailable { .. })
    ));
}

#[cfg(unix)]
#[test]
fn fs_broken_symlink_is_skipped_not_fatal() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("album");
    fs::create_dir_all(&dir).unwrap();
    touch(&dir.join("a.jpg"));
    std::os::unix::fs::symlink(tmp.path().join("gone.jpg"), dir.join("b.jpg")).unwrap();
    touch(&dir.join("c.jpg"));

    let lister = FsFolderLister::new(tmp.path());
    assert_eq!(lister.list_files("album").unwrap(), ["a.jpg", "c.jpg"]);
}

#[cfg(unix)]
#[test]
fn fs_symlinked_image_is_listed() {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().join("album");
    fs::create_dir_all(&dir).unwrap();
    touch(&tmp.path().join("original.jpg"));
    std::os::unix::fs::symlink(tmp.path().join("original.jpg"), dir.join("link.jpg")).unwrap();

    let lister = FsFolderLister::new(tmp.path());
    assert_eq!(lister.list_files("album").unwrap(), ["link.jpg"]);
}
