use ficha_core::{MonsterPatch, parse_int_or_zero};

use super::Session;

pub fn run(
    session: &mut Session,
    slot: &str,
    name: Option<String>,
    skill: Option<&str>,
    stamina: Option<&str>,
) -> Result<(), String> {
    let id = session
        .roster()
        .resolve(slot)
        .map(|m| m.id.clone())
        .ok_or_else(|| format!("no monster slot '{slot}' (use 0-11 or monster-N)"))?;

    let patch = MonsterPatch {
        name,
        skill: skill.map(parse_int_or_zero),
        stamina: stamina.map(parse_int_or_zero),
    };
    if !patch.is_empty() {
        session.update_monster(&id, &patch);
    }

    if let Some(entry) = session.roster().get(&id) {
        let name = if entry.name.is_empty() {
            "(empty)"
        } else {
            entry.name.as_str()
        };
        println!(
            "{}: {name}  skill {}  stamina {}",
            entry.id, entry.skill, entry.stamina
        );
    }
    Ok(())
}
