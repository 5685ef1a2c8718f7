use crate::ex::registry::{CommandDef, CommandRegistry, MatchResult};

#[test]
fn test_empty_registry() {
    let registry = CommandRegistry::new();
    assert!(registry.is_empty());
    assert!(matches!(
        registry.match_command("tabnext"),
        MatchResult::Unknown(_)
    ));
}

#[test]
fn test_exact_match_command_name() {
    let registry = CommandRegistry::new().register(CommandDef::new("tabnext"));

    match registry.match_command("tabnext") {
        MatchResult::Exact(name) => assert_eq!(name, "tabnext"),
        other => panic!("Expected exact match, got {other:?}"),
    }
}

#[test]
fn test_match_is_case_sensitive() {
    let registry = CommandRegistry::new().register(CommandDef::new("quit"));

    assert!(matches!(registry.match_command("QUIT"), MatchResult::Unknown(_)));
    assert!(matches!(registry.match_command("Quit"), MatchResult::Unknown(_)));
}

#[test]
fn test_exact_match_abbreviation() {
    let registry = CommandRegistry::new().register(CommandDef::new("tabnext").with_alias("tabn"));

    match registry.match_command("tabn") {
        MatchResult::Exact(name) => assert_eq!(name, "tabnext"),
        other => panic!("Expected exact match via abbreviation, got {other:?}"),
    }
}

#[test]
fn test_abbreviation_beats_ambiguous_prefix() {
    let registry = CommandRegistry::new()
        .register(CommandDef::new("substitute").with_alias("s"))
        .register(CommandDef::new("split").with_alias("sp"))
        .register(CommandDef::new("set").with_alias("se"));

    match registry.match_command("s") {
        MatchResult::Exact(name) => assert_eq!(name, "substitute"),
        other => panic!("Expected exact match, got {other:?}"),
    }
    match registry.match_command("sp") {
        MatchResult::Exact(name) => assert_eq!(name, "split"),
        other => panic!("Expected exact match, got {other:?}"),
    }
}

#[test]
fn test_unique_prefix() {
    let registry = CommandRegistry::new()
        .register(CommandDef::new("tabnext").with_alias("tabn"))
        .register(CommandDef::new("tabprevious").with_alias("tabp"));

    match registry.match_command("tabne") {
        MatchResult::Prefix(name) => assert_eq!(name, "tabnext"),
        other => panic!("Expected prefix match for 'tabne', got {other:?}"),
    }
    match registry.match_command("tabprev") {
        MatchResult::Prefix(name) => assert_eq!(name, "tabprevious"),
        other => panic!("Expected prefix match for 'tabprev', got {other:?}"),
    }
}

#[test]
fn test_ambiguous_prefix() {
    let registry = CommandRegistry::new()
        .register(CommandDef::new("tabnext").with_alias("tabn"))
        .register(CommandDef::new("tabprevious").with_alias("tabp"));

    match registry.match_command("tab") {
        MatchResult::Ambiguous { prefix, matches } => {
            assert_eq!(prefix, "tab");
            assert_eq!(matches, vec!["tabnext".to_string(), "tabprevious".to_string()]);
        }
        other => panic!("Expected ambiguous match, got {other:?}"),
    }
}

#[test]
fn test_prefix_through_abbreviation_counts_once() {
    let registry = CommandRegistry::new()
        .register(CommandDef::new("nnoremap").with_aliases(["nn", "nno"]));

    match registry.match_command("n") {
        MatchResult::Prefix(name) => assert_eq!(name, "nnoremap"),
        other => panic!("Expected prefix match, got {other:?}"),
    }
}

#[test]
fn test_unknown_command() {
    let registry = CommandRegistry::new().register(CommandDef::new("quit"));

    match registry.match_command("nonexistent") {
        MatchResult::Unknown(input) => assert_eq!(input, "nonexistent"),
        other => panic!("Expected unknown command, got {other:?}"),
    }
}

#[test]
fn test_empty_input() {
    let registry = CommandRegistry::new().register(CommandDef::new("quit"));

    assert_eq!(registry.match_command(""), MatchResult::Unknown(String::new()));
    assert_eq!(registry.match_command("   "), MatchResult::Unknown(String::new()));
}

#[test]
fn test_command_names() {
    let registry = CommandRegistry::new()
        .register(CommandDef::new("quit"))
        .register(CommandDef::new("write"));

    assert_eq!(registry.len(), 2);
    assert_eq!(registry.command_names(), vec!["quit", "write"]);
}
