use std::io::{self, BufRead, Write};

use crate::state::AppState;

const EXIT_COMMANDS: &[&str] = &["exit", "quit", "q", "kraj", "izlaz"];

fn is_exit_command(line: &str) -> bool {
    EXIT_COMMANDS.contains(&line.to_lowercase().as_str())
}

fn print_welcome() {
    println!("{}", "=".repeat(50));
    println!("Dobrodošli u vašeg personalnog asistenta!");
    println!("Napišite 'exit' ili 'kraj' za izlaz.");
    println!("{}", "=".repeat(50));
    println!("\nKako vam mogu pomoći danas?");
}

/// The read-eval-print loop: prompt, read a line, run it through the
/// pipeline, print the reply. Empty lines re-prompt; exit tokens and EOF end
/// the session. An I/O failure propagates and takes the process down.
pub fn run(state: &AppState) -> anyhow::Result<()> {
    print_welcome();

    let stdin = io::stdin();
    let mut input = String::new();

    loop {
        print!("\n> ");
        io::stdout().flush()?;

        input.clear();
        if stdin.lock().read_line(&mut input)? == 0 {
            break;
        }

        let line = input.trim();
        if line.is_empty() {
            continue;
        }
        if is_exit_command(line) {
            break;
        }

        let reply = state.process_command(line);
        println!("\n{reply}");
    }

    println!("\nDoviđenja! Hvala što ste koristili vašeg personalnog asistenta.");
    Ok(())
}
