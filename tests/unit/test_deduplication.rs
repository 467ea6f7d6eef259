use llmwl::wordlist::{deduplicate, WordlistWriter};
use tempfile::tempdir;

fn sample_inputs() -> Vec<Vec<&'static str>> {
    vec![
        vec![],
        vec!["only"],
        vec!["b", "a", "c", "a", "b"],
        vec!["Zeta", "alpha", "Alpha", "zeta", "alpha"],
        vec!["pass123", "pass!", "pass", "123pass", "pass123"],
        vec!["ñandu", "nandu", "zebra", "ñandu"],
    ]
}

#[test]
fn deduplication_is_idempotent() {
    for input in sample_inputs() {
        let once = deduplicate(input.clone());
        let twice = deduplicate(once.clone());
        assert_eq!(once, twice);
    }
}

#[test]
fn output_is_sorted_and_unique() {
    for input in sample_inputs() {
        let result = deduplicate(input.clone());
        assert!(result.windows(2).all(|pair| pair[0] < pair[1]));
        for word in &input {
            assert!(result.iter().any(|r| r == word));
        }
    }
}

#[test]
fn case_variants_are_distinct() {
    assert_eq!(
        deduplicate(vec!["Admin", "admin", "ADMIN", "admin"]),
        vec!["ADMIN", "Admin", "admin"]
    );
}

#[test]
fn written_file_matches_dedup() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("list.txt");
    let input: Vec<String> = ["b", "a", "b", "c"].iter().map(|s| s.to_string()).collect();

    let count = WordlistWriter::new(&path).write(input.clone()).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();

    assert_eq!(count, 3);
    assert_eq!(content, deduplicate(input).join("\n"));
    assert!(!content.ends_with('\n'));
}

#[test]
fn empty_list_writes_empty_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("empty.txt");

    let count = WordlistWriter::new(&path).write(Vec::new()).unwrap();

    assert_eq!(count, 0);
    assert_eq!(std::fs::read_to_string(&path).unwrap(), "");
}
