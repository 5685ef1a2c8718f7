use super::*;

fn item(display: &str, insert: &str) -> CompletionItem {
    (display.to_string(), insert.to_string())
}

#[test]
fn test_fs_completion_after_file_commands() {
    let parser = ExParser::new();
    assert!(parser.wants_fs_completions(":e "));
    assert!(parser.wants_fs_completions(":edit src/"));
    assert!(parser.wants_fs_completions(":w! out.txt"));
    assert!(parser.wants_fs_completions(":vs "));
    assert!(parser.wants_fs_completions(":cd ~"));
}

#[test]
fn test_no_fs_completion_without_whitespace() {
    let parser = ExParser::new();
    assert!(!parser.wants_fs_completions(":e"));
    assert!(!parser.wants_fs_completions(":edit"));
    assert!(!parser.wants_fs_completions(":e!"));
}

#[test]
fn test_no_fs_completion_for_other_commands() {
    let parser = ExParser::new();
    assert!(!parser.wants_fs_completions(":tabnext "));
    assert!(!parser.wants_fs_completions(":set "));
    assert!(!parser.wants_fs_completions(":bogus "));
    assert!(!parser.wants_fs_completions(""));
}

#[test]
fn test_setting_completion() {
    let parser = ExParser::new();
    assert!(parser.wants_setting_completions(":set "));
    assert!(parser.wants_setting_completions(":se hls"));
    assert!(parser.wants_setting_completions(":setl "));
    assert!(!parser.wants_setting_completions(":set"));
    assert!(!parser.wants_setting_completions(":e "));
}

#[test]
fn test_complete_cycles_through_matches() {
    let mut cache = CompletionCache::new();
    let items = cache.complete_from("ta", ["tabnext", "tabonly", "write"]);

    assert_eq!(
        items,
        vec![
            item("ta", "tabnext"),
            item("tabnext", "tabonly"),
            item("tabonly", "ta"),
        ]
    );
}

#[test]
fn test_complete_excludes_exact_prefix() {
    let mut cache = CompletionCache::new();
    let items = cache.complete_from("wq", ["wq", "wqall"]);
    assert_eq!(items, vec![item("wq", "wqall"), item("wqall", "wq")]);
}

#[test]
fn test_repeated_prefix_returns_cached_answer() {
    let mut cache = CompletionCache::new();
    let first = cache.complete_from("ta", ["tabnext", "tabonly"]);

    // Any entry of the last answer hits the cache, even with different candidates
    assert_eq!(cache.complete_from("tabnext", ["tabnextmore"]), first);
    assert_eq!(cache.complete_from("ta", Vec::<&str>::new()), first);
}

#[test]
fn test_empty_prefix_is_never_cached() {
    let mut cache = CompletionCache::new();
    cache.complete_from("", ["a"]);
    let items = cache.complete_from("", ["b"]);
    assert_eq!(items, vec![item("", "b"), item("b", "")]);
}

#[test]
fn test_complete_uses_builtin_names() {
    let mut cache = CompletionCache::new();
    let items = cache.complete("tabp");
    assert_eq!(items, vec![item("tabp", "tabprevious"), item("tabprevious", "tabp")]);

    // Recursive mappings are never offered
    let items = cache.complete("vm");
    assert_eq!(items, vec![item("vm", "vm")]);
}
