use assert_fs::prelude::*;
use folder_ops::{
    compile_pattern, delete_folder, list_files, list_files_in_folder, make_directory, ListOptions,
};
use std::fs;
use std::sync::{Arc, Barrier};
use std::thread;

fn sorted(mut v: Vec<String>) -> Vec<String> {
    v.sort();
    v
}

#[test]
fn make_directory_creates_ancestors_and_is_idempotent() {
    let temp = assert_fs::TempDir::new().unwrap();
    let deep = temp.child("one/two/three");

    assert!(make_directory(deep.path(), None));
    deep.assert(predicates::path::is_dir());
    temp.child("one/two").assert(predicates::path::is_dir());

    // Second call on an existing directory is a no-op success.
    assert!(make_directory(deep.path(), None));
}

#[test]
fn concurrent_creators_all_succeed() {
    const THREADS: usize = 8;
    for round in 0..20 {
        let temp = assert_fs::TempDir::new().unwrap();
        let target = temp.child(format!("r{round}/a/b/c/d")).path().to_path_buf();
        let barrier = Arc::new(Barrier::new(THREADS));

        let handles: Vec<_> = (0..THREADS)
            .map(|_| {
                let barrier = Arc::clone(&barrier);
                let target = target.clone();
                thread::spawn(move || {
                    barrier.wait();
                    make_directory(&target, Some(0o755))
                })
            })
            .collect();

        for h in handles {
            assert!(h.join().unwrap(), "round {round}: a racing creator reported failure");
        }
        assert!(target.is_dir());
    }
}

#[test]
fn make_directory_fails_below_a_file() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("blocker").write_str("x").unwrap();

    assert!(!make_directory(temp.child("blocker/sub").path(), None));
    temp.child("blocker").assert(predicates::path::is_file());
}

#[test]
fn delete_folder_counts_files_across_levels() {
    let temp = assert_fs::TempDir::new().unwrap();
    let root = temp.child("root");
    root.child("a.txt").write_str("a").unwrap();
    root.child("sub/b.txt").write_str("b").unwrap();
    root.child("sub/deeper/c.txt").write_str("c").unwrap();
    root.child("empty").create_dir_all().unwrap();

    assert_eq!(delete_folder(root.path()), 3);
    root.assert(predicates::path::missing());
}

#[test]
fn delete_folder_on_single_file_and_missing_path() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("lonely.txt");
    file.write_str("x").unwrap();

    assert_eq!(delete_folder(file.path()), 1);
    file.assert(predicates::path::missing());
    assert_eq!(delete_folder(temp.child("never-existed").path()), 0);
}

#[test]
fn listing_matches_documented_tree() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("x.txt").write_str("x").unwrap();
    temp.child("sub/y.txt").write_str("y").unwrap();
    temp.child("sub/inner/z.txt").write_str("z").unwrap();

    let files = sorted(list_files(temp.path(), &ListOptions::default()));
    assert_eq!(files, vec!["sub/inner/z.txt", "sub/y.txt", "x.txt"]);

    let with_dirs = sorted(list_files_in_folder(temp.path(), false, None));
    assert_eq!(with_dirs, vec!["sub", "sub/inner/z.txt", "sub/y.txt", "x.txt"]);
}

#[test]
fn delimited_pattern_filters_top_level_names() {
    let temp = assert_fs::TempDir::new().unwrap();
    temp.child("A.LOG").write_str("").unwrap();
    temp.child("b.txt").write_str("").unwrap();
    temp.child("logs/c.txt").write_str("").unwrap();

    let re = compile_pattern(r"/\.log$/i").unwrap();
    let got = sorted(list_files(temp.path(), &ListOptions::default().with_pattern(re)));
    // Nested contents bypass the filter.
    assert_eq!(got, vec!["A.LOG", "logs/c.txt"]);
}

#[test]
fn full_lifecycle() {
    let temp = assert_fs::TempDir::new().unwrap();
    let base = temp.child("work");

    assert!(make_directory(base.child("a/b").path(), Some(0o755)));
    fs::write(base.child("a/b/f1").path(), b"1").unwrap();
    fs::write(base.child("a/f2").path(), b"2").unwrap();

    assert_eq!(
        sorted(list_files(base.path(), &ListOptions::default())),
        vec!["a/b/f1", "a/f2"]
    );
    assert_eq!(delete_folder(base.path()), 2);
    assert!(list_files(base.path(), &ListOptions::default()).is_empty());
}
