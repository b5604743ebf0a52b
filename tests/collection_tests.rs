use gifdeck::collection::{LinkCollection, LinkEditor, STARTER_LINKS};

#[test]
fn test_pending_input_equals_last_update() {
    let mut editor = LinkEditor::new();

    editor.update_input("a");
    editor.update_input("bb");
    editor.update_input("");
    editor.update_input("http://final.gif");

    assert_eq!(editor.pending_input(), "http://final.gif");
}

#[test]
fn test_submit_appends_exactly_one_element() {
    let mut editor = LinkEditor::new();
    editor.seed_starters();
    let before = editor.collection().len();

    editor.update_input("http://x.gif");
    let link = editor.submit().expect("submit should append");

    assert_eq!(editor.collection().len(), before + 1);
    assert_eq!(link.url, "http://x.gif");
    assert_eq!(
        editor.collection().get(before).map(|l| l.url.as_str()),
        Some("http://x.gif")
    );
    assert_eq!(editor.pending_input(), "");
}

#[test]
fn test_submit_empty_input_changes_nothing() {
    let mut editor = LinkEditor::new();
    editor.seed_starters();

    assert!(editor.submit().is_none());
    assert_eq!(editor.collection().len(), STARTER_LINKS.len());
    assert_eq!(editor.pending_input(), "");
}

#[test]
fn test_seed_starters_preserves_order() {
    let mut editor = LinkEditor::new();
    editor.seed_starters();

    let urls: Vec<&str> = editor
        .collection()
        .links()
        .iter()
        .map(|link| link.url.as_str())
        .collect();
    assert_eq!(urls, STARTER_LINKS);
}

#[test]
fn test_insertion_order_and_duplicates() {
    let mut collection = LinkCollection::new();
    collection.append("http://one.gif");
    collection.append("http://two.gif");
    collection.append("http://one.gif");

    assert_eq!(collection.len(), 3);
    assert_eq!(collection.get(0).unwrap().url, "http://one.gif");
    assert_eq!(collection.get(2).unwrap().url, "http://one.gif");
    assert_ne!(collection.get(0).unwrap().id, collection.get(2).unwrap().id);
}

#[test]
fn test_character_editing_builds_pending_input() {
    let mut editor = LinkEditor::new();

    for c in "http://x.gif".chars() {
        editor.push_char(c);
    }
    assert_eq!(editor.pending_input(), "http://x.gif");

    editor.pop_char();
    assert_eq!(editor.pending_input(), "http://x.gi");

    // pop on empty input is a no-op
    editor.update_input("");
    editor.pop_char();
    assert_eq!(editor.pending_input(), "");
}
