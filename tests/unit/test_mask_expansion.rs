use llmwl::wordlist::{MaskCatalog, MaskExpander, MaskTemplate, PLACEHOLDER};

fn words(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

#[test]
fn expansion_of_single_word() {
    let masks = vec![
        MaskTemplate::parse("{word}123").unwrap(),
        MaskTemplate::parse("{word}!").unwrap(),
    ];
    assert_eq!(
        MaskExpander::expand(&words(&["cat"]), &masks),
        vec!["cat123", "cat!"]
    );
}

#[test]
fn expansion_count_is_words_times_masks() {
    let catalog = MaskCatalog::default();
    let input = words(&["alice", "bob", "alice", "{word}", "émilie"]);

    for take in 1..=catalog.len() {
        let masks = &catalog.templates()[..take];
        let derived = MaskExpander::expand(&input, masks);
        assert_eq!(derived.len(), input.len() * take);

        for (i, entry) in derived.iter().enumerate() {
            let word = &input[i / take];
            let mask = &masks[i % take];
            let template = mask.to_string();
            let (prefix, suffix) = template.split_once(PLACEHOLDER).unwrap();
            assert_eq!(entry, &format!("{}{}{}", prefix, word, suffix));
        }
    }
}

#[test]
fn extend_appends_after_originals() {
    let mut working = words(&["dog", "cat"]);
    let masks = vec![MaskTemplate::parse("!{word}").unwrap()];

    let added = MaskExpander::extend(&mut working, &masks);

    assert_eq!(added, 2);
    assert_eq!(working, vec!["dog", "cat", "!dog", "!cat"]);
}

#[test]
fn empty_word_list_yields_nothing() {
    let masks = MaskCatalog::default().templates().to_vec();
    assert!(MaskExpander::expand(&[], &masks).is_empty());
}

#[test]
fn templates_need_exactly_one_placeholder() {
    for bad in ["", "word", "{word", "{word}{word}", "a{word}b{word}c"] {
        assert!(MaskTemplate::parse(bad).is_err(), "accepted {:?}", bad);
    }
    for good in ["{word}", "x{word}", "{word}y", "{{word}}"] {
        assert!(MaskTemplate::parse(good).is_ok(), "rejected {:?}", good);
    }
}

#[test]
fn custom_catalog_rejects_bad_template() {
    assert!(MaskCatalog::new(&["{word}1", "oops"]).is_err());
    let catalog = MaskCatalog::new(&["{word}1", "2{word}"]).unwrap();
    assert_eq!(catalog.len(), 2);
    assert!(catalog.select(&["{word}123"]).is_err());
}
