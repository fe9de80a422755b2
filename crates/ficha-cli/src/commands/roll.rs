use colored::Colorize;

use ficha_session::MAX_DICE;

use super::Session;

pub fn run(session: &mut Session, count: usize) -> Result<(), String> {
    if !(1..=MAX_DICE).contains(&count) {
        return Err(format!("roll between 1 and {MAX_DICE} dice"));
    }
    let roll = session.roll(count);
    let faces: Vec<String> = roll.faces.iter().map(|f| f.to_string()).collect();
    println!("{}d6: [{}]", roll.count(), faces.join(", "));
    println!("Total: {}", roll.total().to_string().bold());
    Ok(())
}
