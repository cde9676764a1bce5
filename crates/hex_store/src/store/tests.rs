use std::fs;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use pretty_assertions::assert_eq;
use tempfile::TempDir;

use crate::fixture::{num, pat, registry};
use crate::{
    PatternStore, StoreError, StoreSettings, DEFAULT_FOLDER, HISTORY_FOLDER, ORDER_FILE,
    FAVORITES_FILE, TRASH_FOLDER,
};

fn open(dir: &TempDir) -> PatternStore {
    PatternStore::open(StoreSettings::new(dir.path()), registry()).unwrap()
}

fn save_all(store: &mut PatternStore, folder: &str, names: &[&str]) {
    for name in names {
        store.save(name, &[pat("qaq,NORTH_EAST")], folder).unwrap();
    }
}

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| (*s).to_string()).collect()
}

fn listed(store: &mut PatternStore, folder: &str) -> Vec<String> {
    store
        .list(folder)
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect()
}

#[test]
fn test_save_then_list_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    let patterns = vec![pat("qaq,NORTH_EAST"), num(5.0), pat("wqwqwqeee,EAST")];
    store.save("combo", &patterns, DEFAULT_FOLDER).unwrap();

    let text = fs::read_to_string(dir.path().join("default/combo.hexpattern")).unwrap();
    assert_eq!(
        text,
        "Mind's Reflection\nNumerical Reflection: 5\nwqwqwqeee,EAST\n"
    );

    let listed = store.list(DEFAULT_FOLDER).unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].name, "combo");
    assert_eq!(listed[0].folder, DEFAULT_FOLDER);
    assert_eq!(listed[0].patterns, patterns);
    assert_eq!(listed[0].last_modified, None);
}

#[test]
fn test_number_sequence_saved_as_one_line() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    let seq = [
        num(2.0),
        num(3.0),
        num(4.0),
        pat("wdedw,NORTH_EAST"),
        pat("waaw,NORTH_EAST"),
    ];
    store.save("frac", &seq, DEFAULT_FOLDER).unwrap();
    let text = fs::read_to_string(dir.path().join("default/frac.hexpattern")).unwrap();
    assert_eq!(text, "Numerical Reflection: 2.75\n");

    let loaded = store.load(DEFAULT_FOLDER, "frac").unwrap();
    assert_eq!(loaded.patterns, vec![num(2.75)]);
}

#[test]
fn test_delete_removes_file_and_favorite() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["doomed"]);
    store.set_favorite(DEFAULT_FOLDER, "doomed", true).unwrap();

    store.delete(DEFAULT_FOLDER, "doomed").unwrap();
    assert!(listed(&mut store, DEFAULT_FOLDER).is_empty());
    assert!(!store.is_favorite(DEFAULT_FOLDER, "doomed"));
    assert!(matches!(
        store.delete(DEFAULT_FOLDER, "doomed"),
        Err(StoreError::SequenceNotFound { .. })
    ));
}

#[test]
fn test_invalid_names_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    assert!(matches!(
        store.save("a/b", &[], DEFAULT_FOLDER),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.save("ok", &[], ".secret"),
        Err(StoreError::InvalidName(_))
    ));
}

#[test]
fn test_paths_outside_the_root_rejected() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("precious.txt"), "keep").unwrap();
    let mut store =
        PatternStore::open(StoreSettings::new(dir.path().join("book")), registry()).unwrap();
    save_all(&mut store, DEFAULT_FOLDER, &["x"]);

    assert!(matches!(
        store.delete_folder("default/../.."),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.rename_folder("default/..", "elsewhere"),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.delete("default/..", "x"),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.load(DEFAULT_FOLDER, "../default/x"),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.copy("../../precious", "stolen", DEFAULT_FOLDER),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.move_to("..", "book", TRASH_FOLDER, None),
        Err(StoreError::InvalidName(_))
    ));
    assert!(matches!(
        store.set_favorite("..", "precious", true),
        Err(StoreError::InvalidName(_))
    ));

    assert_eq!(fs::read_to_string(dir.path().join("precious.txt")).unwrap(), "keep");
    assert!(store.exists(DEFAULT_FOLDER, "x"));
}

#[test]
fn test_large_integer_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    let big = 18_014_398_509_481_984.0;
    store.save("big", &[num(big)], DEFAULT_FOLDER).unwrap();

    let text = fs::read_to_string(dir.path().join("default/big.hexpattern")).unwrap();
    assert_eq!(text, "Numerical Reflection: 18014398509481984\n");
    let loaded = store.load(DEFAULT_FOLDER, "big").unwrap();
    assert_eq!(loaded.patterns, vec![num(big)]);
    assert!(store.reports().is_empty());
}

#[test]
fn test_list_sorts_favorites_first_then_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["b", "A", "c"]);
    store.set_favorite(DEFAULT_FOLDER, "c", true).unwrap();

    assert_eq!(listed(&mut store, DEFAULT_FOLDER), names(&["c", "A", "b"]));
    let ordered: Vec<String> = store
        .list_ordered(DEFAULT_FOLDER)
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(ordered, names(&["b", "A", "c"]));
}

#[test]
fn test_rename_to_taken_name_keeps_position() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["a", "b", "c"]);
    store.set_favorite(DEFAULT_FOLDER, "b", true).unwrap();

    let renamed = store.rename(DEFAULT_FOLDER, "b", "a").unwrap();
    assert_eq!(renamed, "a_2");
    assert_eq!(store.display_order(DEFAULT_FOLDER), names(&["a", "a_2", "c"]));
    assert!(!store.exists(DEFAULT_FOLDER, "b"));
    assert!(store.is_favorite(DEFAULT_FOLDER, "a_2"));
    assert!(!store.is_favorite(DEFAULT_FOLDER, "b"));

    assert_eq!(store.rename(DEFAULT_FOLDER, "c", "c").unwrap(), "c");
}

#[test]
fn test_case_only_rename_keeps_timestamps() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["blink", "other"]);
    let old = UNIX_EPOCH + Duration::from_secs(1_000_000);
    fs::File::options()
        .write(true)
        .open(dir.path().join("default/blink.hexpattern"))
        .unwrap()
        .set_modified(old)
        .unwrap();

    let renamed = store.rename(DEFAULT_FOLDER, "blink", "Blink").unwrap();
    assert_eq!(renamed, "Blink");
    let path = dir.path().join("default/Blink.hexpattern");
    assert_eq!(fs::metadata(&path).unwrap().modified().unwrap(), old);
    assert_eq!(fs::read_to_string(&path).unwrap(), "Mind's Reflection\n");
    assert_eq!(store.display_order(DEFAULT_FOLDER), names(&["Blink", "other"]));
}

#[test]
fn test_case_rename_onto_distinct_file_picks_free_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    store.save("Foo", &[pat("qaq,NORTH_EAST")], DEFAULT_FOLDER).unwrap();
    store.save("foo", &[num(7.0)], DEFAULT_FOLDER).unwrap();
    // Case-insensitive filesystems hold only one of the two.
    if fs::read_dir(dir.path().join(DEFAULT_FOLDER)).unwrap().count() < 2 {
        return;
    }
    let first = fs::read_to_string(dir.path().join("default/Foo.hexpattern")).unwrap();

    let renamed = store.rename(DEFAULT_FOLDER, "foo", "Foo").unwrap();
    assert_eq!(renamed, "Foo_2");
    assert_eq!(
        fs::read_to_string(dir.path().join("default/Foo.hexpattern")).unwrap(),
        first
    );
    assert_eq!(
        fs::read_to_string(dir.path().join("default/Foo_2.hexpattern")).unwrap(),
        "Numerical Reflection: 7\n"
    );
    assert!(!store.exists(DEFAULT_FOLDER, "foo"));
}

#[test]
fn test_move_within_folder_requires_existing_sequence() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["a"]);
    assert!(matches!(
        store.move_to(DEFAULT_FOLDER, "ghost", DEFAULT_FOLDER, None),
        Err(StoreError::SequenceNotFound { .. })
    ));
    assert_eq!(
        store.move_to(DEFAULT_FOLDER, "a", DEFAULT_FOLDER, None).unwrap(),
        "a"
    );
}

#[test]
fn test_ensure_unique_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["spell", "spell_2"]);

    assert_eq!(
        store.ensure_unique_name("fresh", DEFAULT_FOLDER, None).unwrap(),
        "fresh"
    );
    assert_eq!(
        store.ensure_unique_name("SPELL", DEFAULT_FOLDER, None).unwrap(),
        "SPELL_3"
    );
    assert_eq!(
        store
            .ensure_unique_name("Spell", DEFAULT_FOLDER, Some("spell"))
            .unwrap(),
        "Spell"
    );
}

#[test]
fn test_copy_is_byte_identical_and_unfavorited() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    let path = dir.path().join("default/src.hexpattern");
    save_all(&mut store, DEFAULT_FOLDER, &["src"]);
    fs::write(&path, "// my notes\nMind's Reflection   // caster\n").unwrap();
    store.set_favorite(DEFAULT_FOLDER, "src", true).unwrap();

    let copy = store.copy("src", "dup", DEFAULT_FOLDER).unwrap();
    assert_eq!(copy, "dup");
    assert_eq!(
        fs::read(dir.path().join("default/dup.hexpattern")).unwrap(),
        fs::read(&path).unwrap()
    );
    assert!(!store.is_favorite(DEFAULT_FOLDER, "dup"));
    assert_eq!(store.copy("src", "dup", DEFAULT_FOLDER).unwrap(), "dup_2");
    assert_eq!(
        store.display_order(DEFAULT_FOLDER),
        names(&["src", "dup", "dup_2"])
    );
}

#[test]
fn test_move_into_history_lands_after_favorites() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["one", "two", "three"]);

    store.move_to(DEFAULT_FOLDER, "one", HISTORY_FOLDER, None).unwrap();
    store.set_favorite(HISTORY_FOLDER, "one", true).unwrap();
    store.move_to(DEFAULT_FOLDER, "two", HISTORY_FOLDER, None).unwrap();
    store.move_to(DEFAULT_FOLDER, "three", HISTORY_FOLDER, None).unwrap();

    assert_eq!(
        store.display_order(HISTORY_FOLDER),
        names(&["one", "three", "two"])
    );
    assert!(store.display_order(DEFAULT_FOLDER).is_empty());
    let history = store.list(HISTORY_FOLDER).unwrap();
    assert!(history.iter().all(|s| s.last_modified.is_some()));
}

#[test]
fn test_move_remaps_favorite_and_picks_free_name() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    store.create_folder("spells").unwrap();
    save_all(&mut store, DEFAULT_FOLDER, &["x"]);
    save_all(&mut store, "spells", &["x", "y"]);
    store.set_favorite(DEFAULT_FOLDER, "x", true).unwrap();

    let moved = store.move_to(DEFAULT_FOLDER, "x", "spells", Some(0)).unwrap();
    assert_eq!(moved, "x_2");
    assert!(store.is_favorite("spells", "x_2"));
    assert!(!store.is_favorite(DEFAULT_FOLDER, "x"));
    assert_eq!(store.display_order("spells"), names(&["x_2", "x", "y"]));
    assert_eq!(store.last_folder(), "spells");

    assert!(matches!(
        store.move_to("spells", "y", "nowhere", None),
        Err(StoreError::FolderNotFound(_))
    ));
}

#[test]
fn test_restore_clamps_below_target_favorites() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["f", "n", "m"]);
    store.trash(DEFAULT_FOLDER, "f").unwrap();
    store.set_favorite(TRASH_FOLDER, "f", true).unwrap();
    store.trash(DEFAULT_FOLDER, "n").unwrap();
    store.move_to(DEFAULT_FOLDER, "m", HISTORY_FOLDER, None).unwrap();

    store.restore(HISTORY_FOLDER, "m", TRASH_FOLDER, Some(0)).unwrap();
    assert_eq!(store.display_order(TRASH_FOLDER), names(&["f", "m", "n"]));
}

#[test]
fn test_restore_favorite_may_go_first() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["f", "g"]);
    store.trash(DEFAULT_FOLDER, "f").unwrap();
    store.set_favorite(TRASH_FOLDER, "f", true).unwrap();
    store.move_to(DEFAULT_FOLDER, "g", HISTORY_FOLDER, None).unwrap();
    store.set_favorite(HISTORY_FOLDER, "g", true).unwrap();

    store.move_to(HISTORY_FOLDER, "g", TRASH_FOLDER, Some(0)).unwrap();
    assert_eq!(store.display_order(TRASH_FOLDER), names(&["g", "f"]));
    assert!(store.is_favorite(TRASH_FOLDER, "g"));
}

#[test]
fn test_restore_from_trash_to_folder() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["a", "b"]);
    store.trash(DEFAULT_FOLDER, "a").unwrap();

    let restored = store.move_to(TRASH_FOLDER, "a", DEFAULT_FOLDER, None).unwrap();
    assert_eq!(restored, "a");
    assert_eq!(store.display_order(DEFAULT_FOLDER), names(&["b", "a"]));
    assert!(store.display_order(TRASH_FOLDER).is_empty());
}

#[test]
fn test_favorite_toggle_in_trash_keeps_favorites_on_top() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["a", "b", "c"]);
    for name in ["a", "b", "c"] {
        store.trash(DEFAULT_FOLDER, name).unwrap();
    }
    assert_eq!(store.display_order(TRASH_FOLDER), names(&["c", "b", "a"]));

    store.set_favorite(TRASH_FOLDER, "a", true).unwrap();
    assert_eq!(store.display_order(TRASH_FOLDER), names(&["a", "c", "b"]));
    store.set_favorite(TRASH_FOLDER, "b", true).unwrap();
    assert_eq!(store.display_order(TRASH_FOLDER), names(&["a", "b", "c"]));
    store.set_favorite(TRASH_FOLDER, "a", false).unwrap();
    assert_eq!(store.display_order(TRASH_FOLDER), names(&["b", "a", "c"]));
}

#[test]
fn test_reorder() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["a", "b", "c"]);
    store.reorder(DEFAULT_FOLDER, "c", 0).unwrap();
    assert_eq!(store.display_order(DEFAULT_FOLDER), names(&["c", "a", "b"]));

    for name in ["a", "b"] {
        store.trash(DEFAULT_FOLDER, name).unwrap();
    }
    store.set_favorite(TRASH_FOLDER, "a", true).unwrap();
    store.reorder(TRASH_FOLDER, "b", 0).unwrap();
    assert_eq!(store.display_order(TRASH_FOLDER), names(&["a", "b"]));
}

#[test]
fn test_record_history_trims_oldest_non_favorites() {
    let dir = tempfile::tempdir().unwrap();
    let settings = StoreSettings {
        history_limit: 2,
        ..StoreSettings::new(dir.path())
    };
    let mut store = PatternStore::open(settings, registry()).unwrap();

    let first = store.record_history(&[num(1.0)]).unwrap();
    store.set_favorite(HISTORY_FOLDER, &first.name, true).unwrap();
    store.record_history(&[num(2.0)]).unwrap();
    let third = store.record_history(&[num(3.0)]).unwrap();
    let fourth = store.record_history(&[num(4.0)]).unwrap();

    assert_eq!(
        store.display_order(HISTORY_FOLDER),
        names(&[first.name.as_str(), fourth.name.as_str()])
    );
    assert!(!store.exists(HISTORY_FOLDER, &third.name));
    assert_eq!(store.list(HISTORY_FOLDER).unwrap().len(), 2);
}

#[test]
fn test_empty_trash_spares_favorites() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["keep", "drop"]);
    store.trash(DEFAULT_FOLDER, "keep").unwrap();
    store.trash(DEFAULT_FOLDER, "drop").unwrap();
    store.set_favorite(TRASH_FOLDER, "keep", true).unwrap();

    assert_eq!(store.empty_trash().unwrap(), 1);
    assert_eq!(listed(&mut store, TRASH_FOLDER), names(&["keep"]));
}

#[test]
fn test_list_heals_and_prunes_order() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = open(&dir);
        save_all(&mut store, DEFAULT_FOLDER, &["gone", "kept"]);
        store.set_favorite(DEFAULT_FOLDER, "gone", true).unwrap();
    }
    fs::remove_file(dir.path().join("default/gone.hexpattern")).unwrap();
    fs::write(dir.path().join("default/manual.hexpattern"), "Mind's Reflection\n").unwrap();

    let mut store = open(&dir);
    assert_eq!(listed(&mut store, DEFAULT_FOLDER), names(&["kept", "manual"]));
    assert_eq!(store.display_order(DEFAULT_FOLDER), names(&["kept", "manual"]));
    assert!(!store.is_favorite(DEFAULT_FOLDER, "gone"));

    let reopened = open(&dir);
    assert_eq!(reopened.display_order(DEFAULT_FOLDER), names(&["kept", "manual"]));
}

#[test]
fn test_bad_lines_skipped_and_reported_once_per_context() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    fs::write(
        dir.path().join("default/broken.hexpattern"),
        "Not A Pattern\nMind's Reflection\nNot A Pattern\n",
    )
    .unwrap();

    let listed = store.list(DEFAULT_FOLDER).unwrap();
    assert_eq!(listed[0].patterns, vec![pat("qaq,NORTH_EAST")]);
    assert_eq!(store.reports().len(), 1);
    assert_eq!(store.reports()[0].file, "default/broken");

    store.list(DEFAULT_FOLDER).unwrap();
    assert_eq!(store.take_reports().len(), 2);
    assert!(store.reports().is_empty());
}

#[test]
fn test_first_list_migrates_legacy_files() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    let path = dir.path().join("default/legacy.hexpattern");
    fs::write(&path, "qaq,NORTH_EAST\nwqwqwqeee,EAST\n").unwrap();

    store.list(DEFAULT_FOLDER).unwrap();
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        "Mind's Reflection\nwqwqwqeee,EAST\n"
    );
    assert_eq!(store.migrate().rewritten, 0);
}

#[test]
fn test_folders() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    store.create_folder("zeta").unwrap();
    store.create_folder("Alpha").unwrap();
    save_all(&mut store, TRASH_FOLDER, &["junk"]);

    assert_eq!(
        store.list_folders().unwrap(),
        names(&[DEFAULT_FOLDER, "Alpha", "zeta"])
    );
    assert!(matches!(
        store.create_folder("zeta"),
        Err(StoreError::FolderExists(_))
    ));
    assert!(matches!(
        store.create_folder(".hidden"),
        Err(StoreError::ReservedFolder(_))
    ));
    assert!(matches!(
        store.delete_folder(DEFAULT_FOLDER),
        Err(StoreError::ReservedFolder(_))
    ));
    assert!(matches!(
        store.rename_folder(TRASH_FOLDER, "bin"),
        Err(StoreError::ReservedFolder(_))
    ));
}

#[test]
fn test_rename_folder_remaps_indexes() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    store.create_folder("A").unwrap();
    save_all(&mut store, "A", &["x", "y"]);
    store.set_favorite("A", "x", true).unwrap();
    store.set_favorite("A", "y", true).unwrap();

    store.rename_folder("A", "B").unwrap();
    assert!(store.is_favorite("B", "x"));
    assert!(store.is_favorite("B", "y"));
    assert_eq!(store.favorites().names_in("A").count(), 0);
    assert_eq!(store.display_order("B"), names(&["x", "y"]));
    assert!(store.display_order("A").is_empty());
    assert!(!dir.path().join("A").exists());
    assert_eq!(store.last_folder(), "B");
}

#[test]
fn test_rename_folder_rolls_back_on_failure() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    store.create_folder("A").unwrap();
    save_all(&mut store, "A", &["x"]);
    store.set_favorite("A", "x", true).unwrap();

    let order_before = fs::read(dir.path().join(ORDER_FILE)).unwrap();
    let favorites_before = store.favorites().clone();
    let favorites_path = dir.path().join(FAVORITES_FILE);
    fs::remove_file(&favorites_path).unwrap();
    fs::create_dir(&favorites_path).unwrap();

    assert!(matches!(
        store.rename_folder("A", "B"),
        Err(StoreError::Io { .. })
    ));
    assert!(dir.path().join("A/x.hexpattern").is_file());
    assert!(!dir.path().join("B").exists());
    assert_eq!(store.favorites(), &favorites_before);
    assert_eq!(fs::read(dir.path().join(ORDER_FILE)).unwrap(), order_before);
    assert_eq!(store.display_order("A"), names(&["x"]));
}

#[test]
fn test_delete_folder_moves_contents_to_trash() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    store.create_folder("A").unwrap();
    save_all(&mut store, "A", &["x", "y"]);
    save_all(&mut store, TRASH_FOLDER, &["x"]);

    store.delete_folder("A").unwrap();
    assert!(!dir.path().join("A").exists());
    assert_eq!(listed(&mut store, TRASH_FOLDER), names(&["x", "x_2", "y"]));
    assert_eq!(store.last_folder(), DEFAULT_FOLDER);
    assert_eq!(store.list_folders().unwrap(), names(&[DEFAULT_FOLDER]));
}

#[test]
fn test_config_persists_last_folder() {
    let dir = tempfile::tempdir().unwrap();
    {
        let mut store = open(&dir);
        store.create_folder("mine").unwrap();
        save_all(&mut store, "mine", &["x"]);
        save_all(&mut store, TRASH_FOLDER, &["y"]);
    }
    let store = open(&dir);
    assert_eq!(store.last_folder(), "mine");
}

#[test]
fn test_trash_sets_modification_time() {
    let dir = tempfile::tempdir().unwrap();
    let mut store = open(&dir);
    save_all(&mut store, DEFAULT_FOLDER, &["old"]);
    let path = dir.path().join("default/old.hexpattern");
    fs::File::options()
        .write(true)
        .open(&path)
        .unwrap()
        .set_modified(UNIX_EPOCH + Duration::from_secs(10))
        .unwrap();

    let before = SystemTime::now() - Duration::from_secs(60);
    store.trash(DEFAULT_FOLDER, "old").unwrap();
    let trashed = store.load(TRASH_FOLDER, "old").unwrap();
    assert!(trashed.last_modified.is_some_and(|t| t > before));
}
