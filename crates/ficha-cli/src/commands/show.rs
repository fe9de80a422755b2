use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use ficha_core::{ArrowType, ROSTER_SIZE, Stat};

use super::Session;

pub fn run(session: &Session) -> Result<(), String> {
    let record = session.record();

    println!("  {}", "Adventure Sheet".bold());
    println!();

    let mut stats = Table::new();
    stats.set_content_arrangement(ContentArrangement::Dynamic);
    stats.set_header(vec!["", "Current", "Initial"]);
    for (current, initial) in [
        (Stat::Skill, Stat::SkillInitial),
        (Stat::Stamina, Stat::StaminaInitial),
        (Stat::Luck, Stat::LuckInitial),
    ] {
        stats.add_row(vec![
            current.label().to_string(),
            record.stats.get(current).to_string(),
            record.stats.get(initial).to_string(),
        ]);
    }
    println!("{stats}");
    println!();

    let skill_name = if record.skill_name.is_empty() {
        "—".dimmed().to_string()
    } else {
        record.skill_name.clone()
    };
    println!("  skill name: {skill_name}");
    println!("  honor:      {}", record.honor);
    println!("  supplies:   {}", record.supplies);
    println!();

    println!("  {}", "Arrows".bold());
    for arrow in ArrowType::ALL {
        println!("    {:<15} {}", arrow.label(), record.ammunition.get(arrow));
    }
    println!();

    if !record.notes.is_empty() {
        println!("  {}", "Notes".bold());
        for line in record.notes.lines() {
            println!("    {line}");
        }
        println!();
    }

    println!("  {}", "Encounters".bold());
    let used: Vec<_> = session.roster().iter().filter(|m| m.is_used()).collect();
    if used.is_empty() {
        println!("    No monsters recorded.");
        return Ok(());
    }

    let mut roster = Table::new();
    roster.set_content_arrangement(ContentArrangement::Dynamic);
    roster.set_header(vec!["Slot", "Name", "Skill", "Stamina"]);
    for m in &used {
        roster.add_row(vec![
            m.id.clone(),
            m.name.clone(),
            m.skill.to_string(),
            m.stamina.to_string(),
        ]);
    }
    println!("{roster}");
    println!();
    println!("  {}/{ROSTER_SIZE} slots used", used.len());

    Ok(())
}
