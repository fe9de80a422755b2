use ficha_core::{ArrowType, Stat};

use super::Session;

pub fn stat(
    session: &mut Session,
    stat: Stat,
    value: Option<&str>,
    add: Option<i32>,
) -> Result<(), String> {
    let current = match (value, add) {
        (Some(text), _) => session.enter_stat(stat, text),
        (None, Some(delta)) => session.adjust_stat(stat, delta),
        (None, None) => session.record().stats.get(stat),
    };
    println!("{}: {current}", stat.label());
    Ok(())
}

pub fn honor(session: &mut Session, value: Option<&str>, add: Option<i32>) -> Result<(), String> {
    let current = match (value, add) {
        (Some(text), _) => session.enter_honor(text),
        (None, Some(delta)) => session.adjust_honor(delta),
        (None, None) => session.record().honor,
    };
    println!("Honor: {current}");
    Ok(())
}

pub fn supplies(session: &mut Session, delta: Option<i32>) -> Result<(), String> {
    let current = match delta {
        Some(delta) => session.adjust_supplies(delta),
        None => session.record().supplies,
    };
    println!("Supplies: {current}");
    Ok(())
}

pub fn ammo(
    session: &mut Session,
    arrow: Option<ArrowType>,
    value: Option<&str>,
    add: Option<i32>,
) -> Result<(), String> {
    let Some(arrow) = arrow else {
        for arrow in ArrowType::ALL {
            println!(
                "{:<15} {}",
                arrow.label(),
                session.record().ammunition.get(arrow)
            );
        }
        return Ok(());
    };

    let current = match (value, add) {
        (Some(text), _) => session.enter_ammunition(arrow, text),
        (None, Some(delta)) => session.adjust_ammunition(arrow, delta),
        (None, None) => session.record().ammunition.get(arrow),
    };
    println!("{} arrows: {current}", arrow.label());
    Ok(())
}

pub fn skill_name(session: &mut Session, text: &str) -> Result<(), String> {
    session.set_skill_name(text);
    println!("Skill name: {text}");
    Ok(())
}

pub fn notes(session: &mut Session, text: Option<&str>, append: bool) -> Result<(), String> {
    match text {
        Some(text) if append => session.append_note(text),
        Some(text) => session.set_notes(text),
        None => {
            let notes = &session.record().notes;
            if notes.is_empty() {
                println!("No notes.");
            } else {
                println!("{notes}");
            }
            return Ok(());
        }
    }
    println!("Notes saved.");
    Ok(())
}
