mod common;

use hemolink::domain::{sample, Center, CenterDirectory};
use hemolink::errors::HemolinkError;
use hemolink::utils::persistence::{load_directory_from_file, save_directory_to_file};

#[test]
fn saved_directory_loads_back() {
    let path = common::temp_base().join("centers.json");
    let directory = sample::centers();
    save_directory_to_file(&directory, &path).unwrap();

    let loaded = load_directory_from_file(&path).unwrap();
    assert_eq!(loaded, directory);
    let raw = std::fs::read_to_string(&path).unwrap();
    assert!(raw.contains("\"availableSlots\""));
}

#[test]
fn empty_directory_is_rejected() {
    let path = common::temp_base().join("centers.json");
    std::fs::write(&path, "[]").unwrap();
    assert!(matches!(
        load_directory_from_file(&path),
        Err(HemolinkError::InvalidDirectory(_))
    ));
}

#[test]
fn duplicate_ids_are_rejected() {
    let path = common::temp_base().join("centers.json");
    let directory = CenterDirectory::new(vec![
        Center::new("1", "First").with_slots(["09:00"]),
        Center::new("1", "Second").with_slots(["10:00"]),
    ]);
    save_directory_to_file(&directory, &path).unwrap();

    let err = load_directory_from_file(&path).unwrap_err();
    assert!(err.to_string().contains("duplicate center id `1`"));
}

#[test]
fn missing_file_is_an_io_error() {
    let path = common::temp_base().join("absent.json");
    assert!(matches!(
        load_directory_from_file(&path),
        Err(HemolinkError::Io(_))
    ));
}
