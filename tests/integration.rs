//! Integration tests for truffula


use harness::{Expected, PURPLE, TestTree, WHITE, YELLOW, print_tree, run_truffula};
use truffula::test_utils::nested_folder_tree;

// ============================================================================
// folder/ with a nested folder holding hidden entries
// ============================================================================

#[test]
fn test_color_with_hidden() {
    let tree = nested_folder_tree();
    let expected = Expected::new()
        .dir(WHITE, 0, "folder")
        .file(PURPLE, 1, "image.png")
        .dir(PURPLE, 1, "nested-folder")
        .dir(YELLOW, 2, ".hidden-folder")
        .file(WHITE, 3, "42.png")
        .file(YELLOW, 2, ".hidden.txt")
        .file(YELLOW, 2, "not-hidden.txt")
        .file(PURPLE, 1, "text.txt")
        .build();

    assert_eq!(print_tree(tree.root(), true, true), expected);
}

#[test]
fn test_no_color_with_hidden() {
    let tree = nested_folder_tree();
    let expected = Expected::new()
        .dir(WHITE, 0, "folder")
        .file(WHITE, 1, "image.png")
        .dir(WHITE, 1, "nested-folder")
        .dir(WHITE, 2, ".hidden-folder")
        .file(WHITE, 3, "42.png")
        .file(WHITE, 2, ".hidden.txt")
        .file(WHITE, 2, "not-hidden.txt")
        .file(WHITE, 1, "text.txt")
        .build();

    assert_eq!(print_tree(tree.root(), true, false), expected);
}

#[test]
fn test_color_without_hidden() {
    let tree = nested_folder_tree();
    let expected = Expected::new()
        .dir(WHITE, 0, "folder")
        .file(PURPLE, 1, "image.png")
        .dir(PURPLE, 1, "nested-folder")
        .file(YELLOW, 2, "not-hidden.txt")
        .file(PURPLE, 1, "text.txt")
        .build();

    assert_eq!(print_tree(tree.root(), false, true), expected);
}

#[test]
fn test_no_color_without_hidden() {
    let tree = nested_folder_tree();
    let expected = Expected::new()
        .dir(WHITE, 0, "folder")
        .file(WHITE, 1, "image.png")
        .dir(WHITE, 1, "nested-folder")
        .file(WHITE, 2, "not-hidden.txt")
        .file(WHITE, 1, "text.txt")
        .build();

    assert_eq!(print_tree(tree.root(), false, false), expected);
}

// ============================================================================
// Case-insensitive ordering
// ============================================================================

fn my_folder_tree() -> TestTree {
    let tree = TestTree::new("myFolder");
    tree.add_file("Apple.txt");
    tree.add_file("banana.txt");
    tree.add_file("zebra.txt");
    tree.add_file("Documents/README.md");
    tree.add_file("Documents/notes.txt");
    tree.add_file("Documents/images/cat.png");
    tree.add_file("Documents/images/Dog.png");
    tree
}

#[test]
fn test_mixed_case_order_with_color() {
    let tree = my_folder_tree();
    tree.add_file(".hidden.txt");
    tree.mark_hidden(".hidden.txt");

    let expected = Expected::new()
        .dir(WHITE, 0, "myFolder")
        .file(PURPLE, 1, "Apple.txt")
        .file(PURPLE, 1, "banana.txt")
        .dir(PURPLE, 1, "Documents")
        .dir(YELLOW, 2, "images")
        .file(WHITE, 3, "cat.png")
        .file(WHITE, 3, "Dog.png")
        .file(YELLOW, 2, "notes.txt")
        .file(YELLOW, 2, "README.md")
        .file(PURPLE, 1, "zebra.txt")
        .build();

    assert_eq!(print_tree(tree.root(), false, true), expected);
}

#[test]
fn test_mixed_case_order_without_color() {
    let tree = TestTree::new("myFolder");
    tree.add_file("Apple.txt");
    tree.add_file("banana.txt");
    tree.add_file("zebra.txt");
    tree.add_file("Documents/images/cat.png");
    tree.add_file("Documents/images/Dog.png");

    let expected = Expected::new()
        .dir(WHITE, 0, "myFolder")
        .file(WHITE, 1, "Apple.txt")
        .file(WHITE, 1, "banana.txt")
        .dir(WHITE, 1, "Documents")
        .dir(WHITE, 2, "images")
        .file(WHITE, 3, "cat.png")
        .file(WHITE, 3, "Dog.png")
        .file(WHITE, 1, "zebra.txt")
        .build();

    assert_eq!(print_tree(tree.root(), false, false), expected);
}

#[test]
fn test_alphabetical_without_color() {
    let tree = TestTree::new("Alphabet");
    tree.add_file("zebra.txt");
    tree.add_file("b.txt");
    tree.add_file("a.txt");
    tree.add_file("c/e.txt");
    tree.add_file("c/d.txt");

    let expected = Expected::new()
        .dir(WHITE, 0, "Alphabet")
        .file(WHITE, 1, "a.txt")
        .file(WHITE, 1, "b.txt")
        .dir(WHITE, 1, "c")
        .file(WHITE, 2, "d.txt")
        .file(WHITE, 2, "e.txt")
        .file(WHITE, 1, "zebra.txt")
        .build();

    assert_eq!(print_tree(tree.root(), false, false), expected);
}

#[test]
fn test_only_hidden_children_prints_root_alone() {
    let tree = TestTree::new("myFolder");
    tree.add_file(".hidden.txt");
    tree.mark_hidden(".hidden.txt");

    let expected = Expected::new().dir(WHITE, 0, "myFolder").build();
    assert_eq!(print_tree(tree.root(), false, false), expected);
}

// ============================================================================
// Properties
// ============================================================================

#[test]
fn test_palette_repeats_past_depth_three() {
    let tree = TestTree::new("deep");
    tree.add_file("a/b/c/d/leaf.txt");

    let expected = Expected::new()
        .dir(WHITE, 0, "deep")
        .dir(PURPLE, 1, "a")
        .dir(YELLOW, 2, "b")
        .dir(WHITE, 3, "c")
        .dir(PURPLE, 4, "d")
        .file(YELLOW, 5, "leaf.txt")
        .build();

    assert_eq!(print_tree(tree.root(), false, true), expected);
}

#[test]
fn test_idempotent_output() {
    let tree = nested_folder_tree();
    let first = print_tree(tree.root(), true, true);
    let second = print_tree(tree.root(), true, true);
    assert_eq!(first, second);
}

#[test]
fn test_directories_and_files_interleaved() {
    let tree = TestTree::new("mix");
    tree.add_file("b_file.txt");
    tree.add_dir("a_dir");
    tree.add_dir("c_dir");

    let expected = Expected::new()
        .dir(WHITE, 0, "mix")
        .dir(WHITE, 1, "a_dir")
        .file(WHITE, 1, "b_file.txt")
        .dir(WHITE, 1, "c_dir")
        .build();

    assert_eq!(print_tree(tree.root(), false, false), expected);
}

// ============================================================================
// CLI
// ============================================================================

#[test]
fn test_cli_plain_output() {
    let tree = nested_folder_tree();
    let (stdout, _stderr, success) = run_truffula(tree.parent(), &["folder", "--color", "never"]);
    assert!(success, "truffula should succeed");
    assert!(!stdout.contains('\x1b'), "never should not emit escapes: {:?}", stdout);

    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 5, "unexpected output: {}", stdout);
    assert!(lines[0].starts_with("folder"));
    assert_eq!(lines[1], "   image.png");
    assert_eq!(lines[3], "      not-hidden.txt");
    assert_eq!(lines[4], "   text.txt");
}

#[test]
fn test_cli_all_flag_shows_hidden() {
    let tree = nested_folder_tree();
    let (stdout, _stderr, success) =
        run_truffula(tree.parent(), &["folder", "--all", "--color", "never"]);
    assert!(success);
    assert!(stdout.contains("      .hidden.txt"), "{}", stdout);
    assert!(stdout.contains("         42.png"), "{}", stdout);
}

#[test]
fn test_cli_color_always_matches_library() {
    let tree = nested_folder_tree();
    let (stdout, _stderr, success) =
        run_truffula(tree.parent(), &["folder", "-a", "--color", "always"]);
    assert!(success);
    assert_eq!(stdout, print_tree(tree.root(), true, true));
}

#[test]
fn test_cli_defaults_to_current_dir() {
    let tree = TestTree::new("here");
    tree.add_file("only.txt");
    let (stdout, _stderr, success) = run_truffula(tree.root(), &["--color", "never"]);
    assert!(success);
    assert!(stdout.starts_with("here"), "{}", stdout);
    assert!(stdout.contains("   only.txt"));
}

#[test]
fn test_cli_missing_path_fails() {
    let tree = TestTree::new("root");
    let (stdout, stderr, success) = run_truffula(tree.parent(), &["does-not-exist"]);
    assert!(!success);
    assert!(stdout.is_empty());
    assert!(stderr.contains("truffula:"), "{}", stderr);
    assert!(stderr.contains("does-not-exist"), "{}", stderr);
}
