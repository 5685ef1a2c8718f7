use super::*;
use crate::test_utils::{MessageLog, MockWindow};

fn run(line: &str) -> (ExecutionResult, MockWindow, MessageLog) {
    crate::logging::test();
    let executor = ExExecutor::default();
    let mut window = MockWindow::default();
    let mut log = MessageLog::default();
    let result = {
        let mut errors = ErrorManager::new(&mut log);
        executor.execute(line, &mut window, &mut errors)
    };
    (result, window, log)
}

#[test]
fn test_execute_runs_target() {
    let (result, window, log) = run(":tabn!");

    assert_eq!(result, ExecutionResult::Success { target: "ex_tabnext" });
    assert_eq!(
        window.commands,
        vec![(
            "ex_tabnext".to_string(),
            CommandArgs {
                forced: true,
                args: String::new()
            }
        )]
    );
    assert!(log.status.is_empty());
}

#[test]
fn test_execute_passes_arguments() {
    let (_, window, _) = run(":nnoremap <leader>w :w<CR>");
    assert_eq!(window.commands[0].1.args, "<leader>w :w<CR>");
}

#[test]
fn test_execute_empty_line() {
    let (result, window, log) = run(":");
    assert_eq!(result, ExecutionResult::Empty);
    assert!(window.commands.is_empty());
    assert!(log.status.is_empty());
}

#[test]
fn test_execute_unknown_reports_and_skips() {
    let (result, window, log) = run(":bogus");
    assert_eq!(result, ExecutionResult::Failure);
    assert!(window.commands.is_empty());
    assert_eq!(log.status, vec!["E492: Not an editor command: bogus"]);
    assert_eq!(log.console, vec!["E492: Not an editor command: bogus"]);
}

#[test]
fn test_execute_rejects_recursive_mapping() {
    let (result, window, log) = run(":vmap x y");
    assert_eq!(result, ExecutionResult::Failure);
    assert!(window.commands.is_empty());
    assert!(log.status[0].contains("use the \"vnoremap\" command instead"));
}

#[test]
fn test_execute_bar_rules() {
    let (result, window, _) = run(":nnoremap x|y");
    assert_eq!(result, ExecutionResult::Failure);
    assert!(window.commands.is_empty());

    let executor = ExExecutor::default();
    let mut window = MockWindow::default();
    let mut log = MessageLog::default();
    let mut errors = ErrorManager::new(&mut log);
    let result = executor.execute_verbatim(":nnoremap x |", &mut window, &mut errors);
    assert_eq!(result, ExecutionResult::Success { target: "ex_nnoremap" });
    assert_eq!(window.commands[0].1.args, "x |");
}
