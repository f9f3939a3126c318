//! Interactive mode: paste a stack trace, get learner frames back

use crate::error::{CliError, CliResult};
use crate::runner::TraceRunner;
use rustyline::error::ReadlineError;
use rustyline::DefaultEditor;

/// Run the interactive loop
///
/// Lines are collected until an empty line, then the block is parsed as one
/// stack trace.
///
/// # Returns
/// `Ok(())` when the loop exits normally
pub fn run_repl(runner: &TraceRunner) -> CliResult<()> {
    let mut editor = DefaultEditor::new()
        .map_err(|e| CliError::Repl(format!("Failed to initialize editor: {}", e)))?;

    println!("Playground trace resolver");
    println!("Paste a stack trace and finish it with an empty line; '.help' for commands.");
    println!();

    let mut block = StackBlock::default();

    loop {
        let prompt = if block.is_empty() { "> " } else { "... " };

        match editor.readline(prompt) {
            Ok(line) => {
                let trimmed = line.trim();

                if block.is_empty() && matches!(trimmed, "exit" | ".exit" | "quit") {
                    println!("Goodbye!");
                    break;
                }

                if block.is_empty() && trimmed.starts_with('.') {
                    handle_repl_command(trimmed, runner);
                    continue;
                }

                if let Some(stack) = block.push(&line) {
                    let _ = editor.add_history_entry(stack.as_str());
                    print_frames(runner, &stack);
                }
            }
            Err(ReadlineError::Interrupted) => {
                if block.is_empty() {
                    println!("Press Ctrl-D or type 'exit' to quit");
                } else {
                    println!("^C");
                    block.clear();
                }
            }
            Err(ReadlineError::Eof) => {
                if let Some(stack) = block.take() {
                    print_frames(runner, &stack);
                }
                println!("\nGoodbye!");
                break;
            }
            Err(err) => {
                return Err(CliError::Repl(format!("Readline error: {}", err)));
            }
        }
    }

    Ok(())
}

fn print_frames(runner: &TraceRunner, stack: &str) {
    match runner.frames_output(stack) {
        Ok(text) if text.is_empty() => println!("(no learner frames)"),
        Ok(text) => print!("{}", text),
        Err(e) => eprintln!("Error: {}", e),
    }
}

/// Handle special commands
fn handle_repl_command(command: &str, runner: &TraceRunner) {
    match command {
        ".help" => {
            println!("Commands:");
            println!("  .help     - Show this help message");
            println!("  .config   - Show the resolver config");
            println!("  .clear    - Clear the screen");
            println!("  .exit     - Exit");
            println!("  exit      - Exit");
            println!("  quit      - Exit");
        }
        ".config" => match serde_json::to_string_pretty(runner.resolver().config()) {
            Ok(json) => println!("{}", json),
            Err(e) => eprintln!("Error: {}", e),
        },
        ".clear" => {
            print!("\x1B[2J\x1B[1;1H");
        }
        _ => {
            println!("Unknown command: {}", command);
            println!("Type .help for available commands");
        }
    }
}

/// Lines of one pasted stack trace
#[derive(Debug, Default)]
struct StackBlock {
    lines: Vec<String>,
}

impl StackBlock {
    fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Add a line; an empty line completes the block and returns it
    fn push(&mut self, line: &str) -> Option<String> {
        if line.trim().is_empty() {
            return self.take();
        }
        self.lines.push(line.to_string());
        None
    }

    fn take(&mut self) -> Option<String> {
        if self.lines.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.lines).join("\n"))
    }

    fn clear(&mut self) {
        self.lines.clear();
    }
}
