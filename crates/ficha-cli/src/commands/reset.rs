use std::io;

use super::{Session, ask};

pub fn run(session: &mut Session, yes: bool) -> Result<(), String> {
    let stdin = io::stdin();
    let mut reader = stdin.lock();
    let mut confirm = |prompt: &str| yes || ask(&mut reader, prompt);

    if session.reset(&mut confirm) {
        println!("Adventure sheet reset.");
    } else {
        println!("Reset cancelled.");
    }
    Ok(())
}
