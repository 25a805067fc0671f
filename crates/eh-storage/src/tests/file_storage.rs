use crate::{FileStorage, KeyValueStore};

use googletest::assert_that;
use googletest::prelude::{eq, none, some};
use tempfile::TempDir;

#[test]
fn given_missing_directory_when_open_then_created() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/dir/storage.json");

    let storage = FileStorage::open(&path).unwrap();

    assert!(path.parent().unwrap().exists());
    assert_that!(storage.get_item("theme").unwrap(), none());
}

#[test]
fn given_items_when_reopened_then_values_survive() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");

    {
        let storage = FileStorage::open(&path).unwrap();
        storage.set_item("theme", "dark").unwrap();
        storage.set_item("lowDataMode", "true").unwrap();
        storage.remove_item("lowDataMode").unwrap();
    }

    let storage = FileStorage::open(&path).unwrap();
    assert_that!(storage.get_item("theme").unwrap(), some(eq("dark")));
    assert_that!(storage.get_item("lowDataMode").unwrap(), none());
}

#[test]
fn given_write_when_done_then_no_temp_file_left() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    let storage = FileStorage::open(&path).unwrap();

    storage.set_item("theme", "light").unwrap();

    let names: Vec<String> = std::fs::read_dir(temp.path())
        .unwrap()
        .map(|entry| entry.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names, vec!["storage.json".to_string()]);
}

#[test]
fn given_corrupted_file_when_open_then_backed_up_and_empty() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    std::fs::write(&path, "{not json").unwrap();

    let storage = FileStorage::open(&path).unwrap();

    assert_that!(storage.get_item("engihub_user").unwrap(), none());
    assert!(!path.exists());
    let backups = std::fs::read_dir(temp.path())
        .unwrap()
        .filter(|entry| {
            entry
                .as_ref()
                .unwrap()
                .file_name()
                .to_string_lossy()
                .starts_with("storage.json.corrupted.")
        })
        .count();
    assert_eq!(backups, 1);
}

#[test]
fn given_remove_of_missing_key_when_called_then_ok_and_file_not_created() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("storage.json");
    let storage = FileStorage::open(&path).unwrap();

    storage.remove_item("engihub_user").unwrap();

    assert!(!path.exists());
}
