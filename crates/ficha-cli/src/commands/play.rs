use std::io::{self, BufRead, Write};

use colored::Colorize;

use super::{Session, ask};

pub fn run(session: &mut Session) -> Result<(), String> {
    println!("  {} Adventure Sheet", "Opening".bold());
    println!("  Type 'help' for commands, 'quit' to exit.\n");

    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut line = String::new();

    loop {
        print!("> ");
        io::stdout().flush().map_err(|e| e.to_string())?;

        line.clear();
        match reader.read_line(&mut line) {
            Ok(0) => break, // EOF
            Err(e) => return Err(e.to_string()),
            _ => {}
        }

        let input = line.trim();
        if input.is_empty() {
            continue;
        }

        if input.eq_ignore_ascii_case("reset") {
            let done = session.reset(&mut |prompt: &str| ask(&mut reader, prompt));
            if done {
                println!("Adventure sheet reset.\n");
            } else {
                println!("Reset cancelled.\n");
            }
            continue;
        }

        match session.process(input) {
            Ok(output) => {
                if !output.is_empty() {
                    println!("{output}\n");
                }
                if input.eq_ignore_ascii_case("quit") || input.eq_ignore_ascii_case("q") {
                    break;
                }
            }
            Err(e) => {
                println!("{}\n", e.to_string().yellow());
            }
        }
    }

    Ok(())
}
