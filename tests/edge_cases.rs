//! Edge case and error handling tests for twig


use harness::{TestDir, body_lines, run_twig, twig_command};
use std::fs;
use std::process::Stdio;
use std::os::unix::fs::{PermissionsExt, symlink};

// ============================================================================
// Symlink Edge Cases
// ============================================================================

#[test]
fn test_symlink_to_directory_not_followed_by_default() {
    let dir = TestDir::new();
    dir.add_file("realdir/file.rs", "");
    symlink(dir.path().join("realdir"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec![
            "├── linkdir",
            "└── realdir",
            "    └── file.rs",
            "",
            "1 directory, 2 files",
        ]
    );
}

#[test]
fn test_symlink_to_directory_followed() {
    let dir = TestDir::new();
    dir.add_file("realdir/file.rs", "");
    symlink(dir.path().join("realdir"), dir.path().join("linkdir"))
        .expect("Failed to create dir symlink");

    let (stdout, stderr, success) = run_twig(dir.path(), &["-l"]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec![
            "├── linkdir",
            "│   └── file.rs",
            "└── realdir",
            "    └── file.rs",
            "",
            "2 directories, 2 files",
        ]
    );
    assert!(stderr.is_empty(), "no cycle to report: {}", stderr);
}

#[test]
fn test_symlink_to_parent_no_infinite_loop() {
    let dir = TestDir::new();
    dir.add_file("subdir/file.rs", "");
    symlink("..", dir.path().join("subdir").join("parent"))
        .expect("Failed to create parent symlink");

    let (stdout, stderr, success) = run_twig(dir.path(), &["-l"]);
    assert!(success, "a link cycle is not a root failure");
    assert_eq!(
        body_lines(&stdout),
        vec![
            "└── subdir",
            "    ├── file.rs",
            "    └── parent",
            "",
            "2 directories, 1 file",
        ]
    );
    assert!(
        stderr.contains("recursive directory link"),
        "cycle should be reported: {}",
        stderr
    );
}

#[test]
fn test_broken_symlink() {
    let dir = TestDir::new();
    dir.add_file("real.rs", "");
    symlink("nonexistent.rs", dir.path().join("broken_link.rs"))
        .expect("Failed to create broken symlink");

    for args in [&[][..], &["-l"][..]] {
        let (stdout, _stderr, success) = run_twig(dir.path(), args);
        assert!(success, "twig should handle broken symlinks");
        assert_eq!(
            body_lines(&stdout),
            vec!["├── broken_link.rs", "└── real.rs", "", "0 directories, 2 files"]
        );
    }
}

#[test]
fn test_self_referential_symlink() {
    let dir = TestDir::new();
    dir.add_file("file.rs", "");
    symlink("selfref", dir.path().join("selfref"))
        .expect("Failed to create self-referential symlink");

    let (stdout, _stderr, success) = run_twig(dir.path(), &["-l"]);
    assert!(success, "twig should handle self-referential symlinks");
    assert!(stdout.contains("file.rs"));
    assert!(stdout.contains("selfref"));
}

// ============================================================================
// Permission Error Handling
// ============================================================================

#[test]
fn test_unreadable_directory() {
    let dir = TestDir::new();
    dir.add_file("readable/file.rs", "");
    let unreadable = dir.add_dir("unreadable");
    fs::write(unreadable.join("secret.rs"), "").expect("Failed to write file");
    dir.add_file("zzz/last.rs", "");

    fs::set_permissions(&unreadable, fs::Permissions::from_mode(0o000))
        .expect("Failed to set permissions");
    // Privileged users can read it anyway
    let denied = fs::read_dir(&unreadable).is_err();

    let (stdout, stderr, success) = run_twig(dir.path(), &[]);

    fs::set_permissions(&unreadable, fs::Permissions::from_mode(0o755))
        .expect("Failed to restore permissions");

    assert!(success, "nested read failures do not fail the run");
    assert!(stdout.contains("readable"));
    assert!(stdout.contains("file.rs"));
    assert!(stdout.contains("unreadable"), "directory itself is still listed");
    assert!(stdout.contains("└── zzz"), "later siblings still render");
    assert!(stdout.contains("    └── last.rs"));

    if denied {
        assert!(!stdout.contains("secret.rs"));
        assert!(
            stderr.contains("cannot read") && stderr.contains("unreadable"),
            "failure should be reported: {}",
            stderr
        );
        assert!(stdout.contains("3 directories, 2 files"), "{}", stdout);
    }
}

// ============================================================================
// Special Filenames
// ============================================================================

#[test]
fn test_filename_with_spaces() {
    let dir = TestDir::new();
    dir.add_file("file with spaces.rs", "");
    dir.add_file("dir with spaces/nested.rs", "");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("├── file with spaces.rs"), "{}", stdout);
    assert!(stdout.contains("└── dir with spaces"));
}

#[test]
fn test_filename_with_unicode() {
    let dir = TestDir::new();
    dir.add_file("日本語.rs", "");
    dir.add_file("émoji_🎉.rs", "");
    dir.add_file("中文目录/文件.rs", "");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("日本語.rs"));
    assert!(stdout.contains("émoji_🎉.rs"));
    assert!(stdout.contains("└── 中文目录"));
    assert!(stdout.contains("    └── 文件.rs"));
}

#[test]
fn test_filename_with_special_chars() {
    let dir = TestDir::new();
    dir.add_file("file-with-dashes.rs", "");
    dir.add_file("file_with_underscores.rs", "");
    dir.add_file("file.multiple.dots.rs", "");
    dir.add_file("UPPERCASE.RS", "");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec![
            "├── UPPERCASE.RS",
            "├── file-with-dashes.rs",
            "├── file.multiple.dots.rs",
            "└── file_with_underscores.rs",
            "",
            "0 directories, 4 files",
        ]
    );
}

// ============================================================================
// Output Edge Cases
// ============================================================================

#[test]
fn test_empty_directory() {
    let dir = TestDir::new();

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert_eq!(body_lines(&stdout), vec!["", "0 directories, 0 files"]);
}

#[test]
fn test_very_deep_nesting() {
    let dir = TestDir::new();
    dir.add_file("a/b/c/d/e/f/g/h/deep.rs", "");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    let expected = format!("{}└── deep.rs", " ".repeat(8 * 4));
    assert!(
        stdout.lines().any(|l| l == expected),
        "deep file should be indented 8 levels: {}",
        stdout
    );
    assert!(stdout.contains("8 directories, 1 file"));
}

#[test]
fn test_many_files_in_directory() {
    let dir = TestDir::new();
    for i in 0..100 {
        dir.add_file(&format!("file_{:03}.rs", i), "");
    }

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert!(stdout.contains("100 files"), "should count all files: {}", stdout);
    assert_eq!(
        stdout.lines().filter(|l| l.starts_with("└── ")).count(),
        1,
        "only one last connector"
    );
}

#[test]
fn test_files_sorted_before_directories() {
    let dir = TestDir::new();
    dir.add_file("zebra.rs", "");
    dir.add_file("apple/inner.rs", "");
    dir.add_file("middle.rs", "");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);

    let middle_pos = stdout.find("middle.rs").expect("should have middle");
    let zebra_pos = stdout.find("zebra.rs").expect("should have zebra");
    let apple_pos = stdout.find("apple").expect("should have apple");

    assert!(middle_pos < zebra_pos, "files in name order");
    assert!(zebra_pos < apple_pos, "directories after files");
}

#[test]
fn test_vertical_bars_only_under_non_last_ancestors() {
    let dir = TestDir::new();
    dir.add_file("a/one/x.txt", "");
    dir.add_file("a/two.txt", "");
    dir.add_file("b/three.txt", "");

    let (stdout, _stderr, success) = run_twig(dir.path(), &[]);
    assert!(success);
    assert_eq!(
        body_lines(&stdout),
        vec![
            "├── a",
            "│   ├── two.txt",
            "│   └── one",
            "│       └── x.txt",
            "└── b",
            "    └── three.txt",
            "",
            "3 directories, 3 files",
        ]
    );
}

// ============================================================================
// Output Failures
// ============================================================================

#[test]
#[cfg(target_os = "linux")]
fn test_full_stdout_fails_the_run() {
    let dir = TestDir::new();
    dir.add_file("file.rs", "");

    let Ok(full) = fs::File::create("/dev/full") else {
        return;
    };
    let output = twig_command(dir.path())
        .stdout(Stdio::from(full))
        .output()
        .expect("Failed to run twig");

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(!output.status.success(), "write failure must fail the run");
    assert!(
        stderr.contains("error writing output"),
        "write failure should be reported: {}",
        stderr
    );
}
