use rolodex::directory::Directory;
use rolodex::error::RolodexError;
use rolodex::store::fs::FileStore;
use rolodex::store::DataStore;
use std::fs;
use tempfile::TempDir;

fn setup() -> (TempDir, std::path::PathBuf) {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("contacts.json");
    (temp, path)
}

#[test]
fn load_missing_file_gives_empty_directory() {
    let (_temp, path) = setup();
    let dir = Directory::open(FileStore::new(&path)).unwrap();
    assert_eq!(dir.count(), 0);
    assert!(!path.exists());
}

#[test]
fn save_then_load_reproduces_the_mapping() {
    let (_temp, path) = setup();
    let mut dir = Directory::new(FileStore::new(&path));
    dir.add("Dupont", "Jean", "0123456789").unwrap();
    dir.add("Martin", "Pierre", "0987654321").unwrap();
    dir.add("Durand", "Marie", "0555123456").unwrap();
    dir.save().unwrap();

    let reloaded = Directory::open(FileStore::new(&path)).unwrap();
    assert_eq!(reloaded.count(), 3);
    assert_eq!(reloaded.list(), dir.list());
    let martin = reloaded.get("Martin", "Pierre").unwrap();
    assert_eq!(martin.phone, "0987654321");
}

#[test]
fn saved_file_is_indented_json_keyed_by_identity() {
    let (_temp, path) = setup();
    let mut dir = Directory::new(FileStore::new(&path));
    dir.add("Dupont", "Jean", "0123456789").unwrap();
    dir.save().unwrap();

    let content = fs::read_to_string(&path).unwrap();
    assert_eq!(
        content,
        r#"{
  "jean_dupont": {
    "lastName": "Dupont",
    "firstName": "Jean",
    "phone": "0123456789"
  }
}"#
    );
}

#[test]
fn save_overwrites_previous_content() {
    let (_temp, path) = setup();
    fs::write(&path, "stale content").unwrap();

    let mut dir = Directory::new(FileStore::new(&path));
    dir.add("Dupont", "Jean", "0123456789").unwrap();
    dir.save().unwrap();

    let reloaded = Directory::open(FileStore::new(&path)).unwrap();
    assert_eq!(reloaded.count(), 1);
}

#[test]
fn save_creates_missing_parent_directories() {
    let temp = TempDir::new().unwrap();
    let path = temp.path().join("nested/deeper/contacts.json");
    let mut dir = Directory::new(FileStore::new(&path));
    dir.save().unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "{}");
}

#[test]
fn malformed_file_is_a_parse_error() {
    let (_temp, path) = setup();
    fs::write(&path, "{ \"jean_dupont\": 42 }").unwrap();

    let err = Directory::open(FileStore::new(&path)).err().unwrap();
    assert!(matches!(err, RolodexError::Parse(_)));
}

#[test]
fn unreadable_path_is_an_io_error() {
    let temp = TempDir::new().unwrap();
    // A directory exists at the path but cannot be read as a file
    let err = FileStore::new(temp.path()).load().unwrap_err();
    assert!(matches!(err, RolodexError::Io(_)));
}

#[test]
fn loading_below_a_regular_file_is_an_io_error() {
    let (_temp, path) = setup();
    fs::write(&path, "{}").unwrap();
    // The existence check fails with ENOTDIR instead of reporting "missing"
    let err = FileStore::new(path.join("child.json")).load().unwrap_err();
    assert!(matches!(err, RolodexError::Io(_)));
}

#[test]
fn writing_into_a_file_as_directory_is_an_io_error() {
    let (_temp, path) = setup();
    fs::write(&path, "{}").unwrap();
    let mut dir = Directory::new(FileStore::new(path.join("child.json")));
    assert!(matches!(dir.save(), Err(RolodexError::Io(_))));
}

#[test]
fn legacy_french_files_load() {
    let (_temp, path) = setup();
    let legacy = r#"{
  "jean_dupont": {
    "nom": "Dupont",
    "prenom": "Jean",
    "telephone": "0123456789"
  }
}"#;
    fs::write(&path, legacy).unwrap();

    let mut dir = Directory::open(FileStore::new(&path)).unwrap();
    assert_eq!(dir.get("Dupont", "Jean").unwrap().phone, "0123456789");

    dir.save().unwrap();
    let content = fs::read_to_string(&path).unwrap();
    assert!(content.contains("\"lastName\": \"Dupont\""));
    assert!(!content.contains("nom"));
}
