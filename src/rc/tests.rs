use super::*;
use crate::test_utils::{MessageLog, MockWindow};
use tempfile::TempDir;

fn load(content: &str) -> (LoadReport, MockWindow, MessageLog) {
    crate::logging::test();
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(RC_FILE_NAME);
    fs::write(&path, content).unwrap();

    let rc = RunControl::new(&path);
    let mut window = MockWindow::default();
    let mut log = MessageLog::default();
    let report = rc
        .load(&ExExecutor::default(), &mut window, &mut log)
        .unwrap();
    (report, window, log)
}

#[test]
fn test_parse_line_accepts_non_recursive_mappings() {
    assert_eq!(
        parse_line("nnoremap x y").unwrap().as_deref(),
        Some("nnoremap x y")
    );
    assert_eq!(
        parse_line(":vnoremap <leader>y \"+y  \n").unwrap().as_deref(),
        Some("vnoremap <leader>y \"+y")
    );
    assert_eq!(
        parse_line("let mapleader=,").unwrap().as_deref(),
        Some("let mapleader=,")
    );
}

#[test]
fn test_parse_line_ignores_other_lines() {
    for line in [
        "",
        "   ",
        "\" Type :h vintageousrc for help.",
        "set hlsearch",
        "nnoremap",
        "nnoremap\tx y",
        " nnoremap x y",
    ] {
        assert_eq!(parse_line(line).unwrap(), None, "line: {line:?}");
    }
}

#[test]
fn test_parse_line_rejects_recursive_mappings() {
    let err = parse_line("map x y").unwrap_err();
    assert_eq!(err.code, "RECURSIVE_MAPPING");
    assert!(err.contains_msg("use the \"nnoremap\" command instead"));

    for (line, alt) in [
        ("nmap x y", "nnoremap"),
        ("smap x y", "snoremap"),
        ("vmap x y", "vnoremap"),
        (":omap x y", "onoremap"),
    ] {
        let err = parse_line(line).unwrap_err();
        assert!(err.contains_msg(&format!("\"{alt}\"")), "line: {line}");
    }
}

#[test]
fn test_parse_line_bar_rule() {
    assert_eq!(
        parse_line("nnoremap x \\|").unwrap().as_deref(),
        Some("nnoremap x |")
    );

    let err = parse_line("nnoremap x|y").unwrap_err();
    assert_eq!(err.code, "E488");
    assert_eq!(err.message, "E488: Trailing characters: nnoremap x|y");

    // The reported line keeps its colon
    let err = parse_line(":nnoremap x | y").unwrap_err();
    assert_eq!(err.message, "E488: Trailing characters: :nnoremap x | y");
}

#[test]
fn test_load_runs_accepted_lines() {
    let (report, window, log) = load(
        "\" Type :h vintageousrc for help.\n\
         nnoremap j gj\n\
         \n\
         :let mapleader=,\n\
         vnoremap x \\|\n",
    );

    assert_eq!(report, LoadReport { executed: 3, failed: 0 });
    let targets: Vec<_> = window.commands.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(targets, vec!["ex_nnoremap", "ex_let", "ex_vnoremap"]);
    assert_eq!(window.commands[0].1.args, "j gj");
    assert_eq!(window.commands[2].1.args, "x |");
    assert!(log.status.is_empty());
}

#[test]
fn test_load_reports_bad_lines_and_continues() {
    let (report, window, log) = load("map x y\nnnoremap a|b\nnnoremap q :q<CR>\n");

    assert_eq!(report, LoadReport { executed: 1, failed: 2 });
    assert_eq!(window.commands.len(), 1);
    assert_eq!(log.status.len(), 2);
    assert!(log.status[0].contains("error detected while processing"));
    assert!(log.status[0].contains("at line map x y"));
    assert!(log.status[1].contains("E488"));
    assert_eq!(log.console, log.status);
}

#[test]
fn test_load_missing_file_loads_nothing() {
    let dir = TempDir::new().unwrap();
    let rc = RunControl::new(dir.path().join("missing").join(RC_FILE_NAME));
    let mut window = MockWindow::default();
    let mut log = MessageLog::default();

    let report = rc
        .reload(&ExExecutor::default(), &mut window, &mut log)
        .unwrap();
    assert_eq!(report, LoadReport::default());
    assert!(window.commands.is_empty());
    assert!(log.status.is_empty());
}

#[test]
fn test_open_creates_file_with_header() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("User").join(RC_FILE_NAME);
    let rc = RunControl::new(&path);
    let mut window = MockWindow::default();

    rc.open(&mut window).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), RC_HEADER);
    assert_eq!(window.opened, vec![path.clone()]);

    // Existing content is left alone
    fs::write(&path, "nnoremap x y\n").unwrap();
    rc.open(&mut window).unwrap();
    assert_eq!(fs::read_to_string(&path).unwrap(), "nnoremap x y\n");
    assert_eq!(window.opened.len(), 2);
}

#[test]
fn test_load_skips_line_with_invalid_utf8() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join(RC_FILE_NAME);
    fs::write(&path, b"nnoremap x y\n\xff\xfe\r\nvnoremap a b\r\n").unwrap();

    let mut window = MockWindow::default();
    let mut log = MessageLog::default();
    let report = RunControl::new(&path)
        .load(&ExExecutor::default(), &mut window, &mut log)
        .unwrap();

    assert_eq!(report, LoadReport { executed: 2, failed: 1 });
    let targets: Vec<_> = window.commands.iter().map(|(t, _)| t.as_str()).collect();
    assert_eq!(targets, vec!["ex_nnoremap", "ex_vnoremap"]);
    assert_eq!(window.commands[1].1.args, "a b");
    assert_eq!(log.status.len(), 1);
    assert!(log.status[0].contains("error detected while processing"));
    assert!(log.status[0].contains("invalid UTF-8"));
}
