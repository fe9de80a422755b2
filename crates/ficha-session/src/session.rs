//! Adventure session management.
//!
//! `AdventureSession` holds the current record and roster, applies pure
//! mutations from `ficha-core`, and writes the changed aggregate back to the
//! store after every change.

use rand::SeedableRng;
use rand::rngs::StdRng;
use tracing::{debug, info};

use ficha_core::{
    AdventureRecord, ArrowType, MonsterEntry, MonsterField, MonsterPatch, Roster, Stat, mutate,
    parse_int_or_zero,
};
use ficha_dice::{DiceRoll, DiceTray};
use ficha_store::{KeyValueStore, RecordStore};

use crate::config::SessionConfig;
use crate::confirm::{Confirm, RESET_PROMPT};
use crate::error::{SessionError, SessionResult};

/// Most dice a frontend will put in the tray at once.
pub const MAX_DICE: usize = 100;

/// How a typed argument changes a numeric field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Change {
    /// Replace the value.
    Set(i32),
    /// Add to the value.
    Adjust(i32),
}

/// An interactive adventure-sheet session.
pub struct AdventureSession<S> {
    store: RecordStore<S>,
    record: AdventureRecord,
    roster: Roster,
    dice: DiceTray,
    rng: StdRng,
}

impl<S: KeyValueStore> AdventureSession<S> {
    /// Load both aggregates from `store` and start a session.
    pub fn open(store: RecordStore<S>, config: SessionConfig) -> Self {
        let record = store.load();
        let roster = store.load_roster();
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        debug!(
            monsters = roster.used(),
            seeded = config.seed.is_some(),
            "session opened"
        );

        Self {
            store,
            record,
            roster,
            dice: DiceTray::new(),
            rng,
        }
    }

    /// The current adventure record.
    pub fn record(&self) -> &AdventureRecord {
        &self.record
    }

    /// The current monster roster.
    pub fn roster(&self) -> &Roster {
        &self.roster
    }

    /// The dice tray.
    pub fn dice(&self) -> &DiceTray {
        &self.dice
    }

    fn commit_record(&mut self, next: AdventureRecord) {
        self.record = next;
        self.store.save(&self.record);
    }

    fn commit_roster(&mut self, next: Roster) {
        self.roster = next;
        self.store.save_roster(&self.roster);
    }

    /// Replace a stat. Returns the new value.
    pub fn set_stat(&mut self, stat: Stat, value: i32) -> i32 {
        self.commit_record(mutate::set_stat(&self.record, stat, value));
        self.record.stats.get(stat)
    }

    /// Set a stat from typed text; unparsable text stores 0.
    pub fn enter_stat(&mut self, stat: Stat, text: &str) -> i32 {
        self.set_stat(stat, parse_int_or_zero(text))
    }

    /// Add to a stat. Returns the new value.
    pub fn adjust_stat(&mut self, stat: Stat, delta: i32) -> i32 {
        self.commit_record(mutate::adjust_stat(&self.record, stat, delta));
        self.record.stats.get(stat)
    }

    /// Replace an arrow count, clamped to zero. Returns the new value.
    pub fn set_ammunition(&mut self, arrow: ArrowType, value: i32) -> i32 {
        self.commit_record(mutate::set_ammunition(&self.record, arrow, value));
        self.record.ammunition.get(arrow)
    }

    /// Set an arrow count from typed text; unparsable text stores 0.
    pub fn enter_ammunition(&mut self, arrow: ArrowType, text: &str) -> i32 {
        self.set_ammunition(arrow, parse_int_or_zero(text))
    }

    /// Add to an arrow count, clamped to zero. Returns the new value.
    pub fn adjust_ammunition(&mut self, arrow: ArrowType, delta: i32) -> i32 {
        self.commit_record(mutate::adjust_ammunition(&self.record, arrow, delta));
        self.record.ammunition.get(arrow)
    }

    /// Replace the honor score.
    pub fn set_honor(&mut self, value: i32) -> i32 {
        self.commit_record(mutate::set_honor(&self.record, value));
        self.record.honor
    }

    /// Set honor from typed text; unparsable text stores 0.
    pub fn enter_honor(&mut self, text: &str) -> i32 {
        self.set_honor(parse_int_or_zero(text))
    }

    /// Add to the honor score.
    pub fn adjust_honor(&mut self, delta: i32) -> i32 {
        self.commit_record(mutate::adjust_honor(&self.record, delta));
        self.record.honor
    }

    /// Add to supplies, never below zero.
    pub fn adjust_supplies(&mut self, delta: i32) -> i32 {
        self.commit_record(mutate::adjust_supplies(&self.record, delta));
        self.record.supplies
    }

    /// Replace the skill name.
    pub fn set_skill_name(&mut self, text: impl Into<String>) {
        self.commit_record(mutate::set_skill_name(&self.record, text));
    }

    /// Replace the notes.
    pub fn set_notes(&mut self, text: impl Into<String>) {
        self.commit_record(mutate::set_notes(&self.record, text));
    }

    /// Append a line to the notes.
    pub fn append_note(&mut self, line: &str) {
        let mut notes = self.record.notes.clone();
        if !notes.is_empty() && !notes.ends_with('\n') {
            notes.push('\n');
        }
        notes.push_str(line);
        self.set_notes(notes);
    }

    /// Merge `patch` into the slot with identifier `id`. Returns false if no
    /// slot matched; the roster is then left as it was.
    pub fn update_monster(&mut self, id: &str, patch: &MonsterPatch) -> bool {
        let found = self.roster.get(id).is_some();
        self.commit_roster(mutate::update_monster(&self.roster, id, patch));
        found
    }

    /// Add to a monster's skill or stamina. Returns the new value, or `None`
    /// if no slot matched.
    pub fn adjust_monster(&mut self, id: &str, field: MonsterField, delta: i32) -> Option<i32> {
        self.commit_roster(mutate::adjust_monster(&self.roster, id, field, delta));
        self.roster.get(id).map(|m| m.get(field))
    }

    /// Roll `count` dice and show them in the tray. Nothing is persisted.
    pub fn roll(&mut self, count: usize) -> &DiceRoll {
        self.dice.roll(count, &mut self.rng)
    }

    /// Dismiss the current roll.
    pub fn clear_dice(&mut self) {
        self.dice.clear();
    }

    /// Ask `confirm` and, if the player agrees, restore and persist the
    /// default record and roster. Returns whether the reset happened.
    pub fn reset<C: Confirm + ?Sized>(&mut self, confirm: &mut C) -> bool {
        if !confirm.confirm(RESET_PROMPT) {
            debug!("reset declined");
            return false;
        }
        let (record, roster) = mutate::reset();
        self.commit_record(record);
        self.commit_roster(roster);
        info!("adventure sheet reset to defaults");
        true
    }

    /// Process a line of user input and return a response.
    pub fn process(&mut self, input: &str) -> SessionResult<String> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Ok(String::new());
        }

        let parts: Vec<&str> = trimmed.splitn(2, ' ').collect();
        let cmd = parts[0].to_lowercase();
        let rest = parts.get(1).map(|s| s.trim()).unwrap_or("");

        match cmd.as_str() {
            "show" | "sheet" | "status" => Ok(self.summary()),
            "stat" => self.do_stat(rest),
            "honor" | "honra" => self.do_honor(rest),
            "supplies" | "provisoes" => self.do_supplies(rest),
            "ammo" | "arrows" => self.do_ammo(rest),
            "skillname" | "pericia" => self.do_skill_name(rest),
            "notes" => self.do_notes(rest),
            "note" => self.do_note(rest),
            "monster" => self.do_monster(rest),
            "monsters" => Ok(self.do_monster_list()),
            "roll" => self.do_roll(rest),
            "clear" => {
                self.clear_dice();
                Ok("Dice cleared.".to_string())
            }
            "reset" => Err(SessionError::ConfirmationRequired),
            "help" => Ok(help_text(rest)),
            "quit" | "q" => Ok("Goodbye!".to_string()),
            _ => {
                // A bare stat name is shorthand for `stat <name> ...`
                if let Ok(stat) = cmd.parse::<Stat>() {
                    return self.apply_stat(stat, rest);
                }
                Err(SessionError::UnknownCommand(cmd))
            }
        }
    }

    fn do_stat(&mut self, rest: &str) -> SessionResult<String> {
        let (name, arg) = split_word(rest);
        if name.is_empty() {
            return Err(SessionError::Usage(
                "usage: stat <name> <value|up|down> [amount]".to_string(),
            ));
        }
        let stat: Stat = name.parse()?;
        self.apply_stat(stat, arg)
    }

    fn apply_stat(&mut self, stat: Stat, arg: &str) -> SessionResult<String> {
        let value = match parse_change(arg)? {
            Change::Set(v) => self.set_stat(stat, v),
            Change::Adjust(d) => self.adjust_stat(stat, d),
        };
        Ok(format!("{}: {value}", stat.label()))
    }

    fn do_honor(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Ok(format!("Honor: {}", self.record.honor));
        }
        let value = match parse_change(rest)? {
            Change::Set(_) => self.enter_honor(rest),
            Change::Adjust(d) => self.adjust_honor(d),
        };
        Ok(format!("Honor: {value}"))
    }

    fn do_supplies(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Ok(format!("Supplies: {}", self.record.supplies));
        }
        match parse_change(rest)? {
            Change::Adjust(d) => Ok(format!("Supplies: {}", self.adjust_supplies(d))),
            Change::Set(_) => Err(SessionError::Usage(
                "usage: supplies up|down [amount]".to_string(),
            )),
        }
    }

    fn do_ammo(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            let ammo = &self.record.ammunition;
            let mut out = String::from("Arrows:");
            for arrow in ArrowType::ALL {
                out.push_str(&format!("\n  {:<15} {}", arrow.label(), ammo.get(arrow)));
            }
            return Ok(out);
        }
        let (name, arg) = split_word(rest);
        let arrow: ArrowType = name.parse()?;
        let value = match parse_change(arg)? {
            Change::Set(v) => self.set_ammunition(arrow, v),
            Change::Adjust(d) => self.adjust_ammunition(arrow, d),
        };
        Ok(format!("{} arrows: {value}", arrow.label()))
    }

    fn do_skill_name(&mut self, rest: &str) -> SessionResult<String> {
        self.set_skill_name(rest);
        if rest.is_empty() {
            Ok("Skill name cleared.".to_string())
        } else {
            Ok(format!("Skill name: {rest}"))
        }
    }

    fn do_notes(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            if self.record.notes.is_empty() {
                return Ok("No notes.".to_string());
            }
            return Ok(self.record.notes.clone());
        }
        self.set_notes(rest);
        Ok("Notes replaced.".to_string())
    }

    fn do_note(&mut self, rest: &str) -> SessionResult<String> {
        if rest.is_empty() {
            return Err(SessionError::Usage("usage: note <text>".to_string()));
        }
        self.append_note(rest);
        Ok(format!("Noted: {rest}"))
    }

    fn do_monster(&mut self, rest: &str) -> SessionResult<String> {
        let (slot, rest) = split_word(rest);
        if slot.is_empty() {
            return Err(SessionError::Usage(
                "usage: monster <slot> [name <text> | skill|stamina <value|up|down>]".to_string(),
            ));
        }
        let id = self
            .roster
            .resolve(slot)
            .map(|m| m.id.clone())
            .ok_or_else(|| SessionError::UnknownMonster(slot.to_string()))?;

        let (field, arg) = split_word(rest);
        if field.is_empty() {
            let entry = self.roster.get(&id).cloned();
            return Ok(entry.map(|m| describe_monster(&m)).unwrap_or_default());
        }

        if field.eq_ignore_ascii_case("name") || field.eq_ignore_ascii_case("nome") {
            self.update_monster(&id, &MonsterPatch::new().with_name(arg));
        } else {
            let field: MonsterField = field.parse()?;
            match parse_change(arg)? {
                Change::Set(v) => {
                    let patch = match field {
                        MonsterField::Skill => MonsterPatch::new().with_skill(v),
                        MonsterField::Stamina => MonsterPatch::new().with_stamina(v),
                    };
                    self.update_monster(&id, &patch);
                }
                Change::Adjust(d) => {
                    self.adjust_monster(&id, field, d);
                }
            }
        }

        let entry = self.roster.get(&id).cloned();
        Ok(entry.map(|m| describe_monster(&m)).unwrap_or_default())
    }

    fn do_monster_list(&self) -> String {
        let used: Vec<&MonsterEntry> = self.roster.iter().filter(|m| m.is_used()).collect();
        if used.is_empty() {
            return "No monsters recorded.".to_string();
        }
        let mut out = format!("Monsters ({}/{}):", used.len(), ficha_core::ROSTER_SIZE);
        for m in used {
            out.push_str(&format!("\n  {}", describe_monster(m)));
        }
        out
    }

    fn do_roll(&mut self, rest: &str) -> SessionResult<String> {
        let count = if rest.is_empty() {
            1
        } else {
            let n = parse_int_or_zero(rest);
            usize::try_from(n)
                .ok()
                .filter(|n| (1..=MAX_DICE).contains(n))
                .ok_or_else(|| {
                    SessionError::Usage(format!("usage: roll [count], count from 1 to {MAX_DICE}"))
                })?
        };
        let roll = self.roll(count);
        Ok(format!("Rolled {}d6: {roll}", roll.count()))
    }

    /// A plain-text rendering of the sheet.
    pub fn summary(&self) -> String {
        let r = &self.record;
        let skill_name = if r.skill_name.is_empty() {
            "-"
        } else {
            r.skill_name.as_str()
        };
        let arrows: Vec<String> = ArrowType::ALL
            .iter()
            .map(|a| format!("{} {}", a, r.ammunition.get(*a)))
            .collect();

        let mut out = String::new();
        out.push_str(&format!(
            "Skill    {:>4} / {}\n",
            r.stats.skill, r.stats.skill_initial
        ));
        out.push_str(&format!(
            "Stamina  {:>4} / {}\n",
            r.stats.stamina, r.stats.stamina_initial
        ));
        out.push_str(&format!(
            "Luck     {:>4} / {}\n",
            r.stats.luck, r.stats.luck_initial
        ));
        out.push_str(&format!("Skill name: {skill_name}\n"));
        out.push_str(&format!("Honor: {}\n", r.honor));
        out.push_str(&format!("Supplies: {}\n", r.supplies));
        out.push_str(&format!("Arrows: {}\n", arrows.join(", ")));
        out.push_str(&format!(
            "Monsters: {}/{} slots used",
            self.roster.used(),
            ficha_core::ROSTER_SIZE
        ));
        if let Some(roll) = self.dice.last() {
            out.push_str(&format!("\nDice: {roll}"));
        }
        if !r.notes.is_empty() {
            out.push_str("\nNotes:");
            for line in r.notes.lines() {
                out.push_str(&format!("\n  {line}"));
            }
        }
        out
    }
}

/// Split off the first word of `input`.
fn split_word(input: &str) -> (&str, &str) {
    let input = input.trim();
    match input.split_once(char::is_whitespace) {
        Some((word, rest)) => (word, rest.trim_start()),
        None => (input, ""),
    }
}

/// Parse `up [n]`, `down [n]`, or a value to set.
fn parse_change(arg: &str) -> SessionResult<Change> {
    let (word, rest) = split_word(arg);
    let amount = || {
        if rest.is_empty() {
            1
        } else {
            parse_int_or_zero(rest)
        }
    };
    match word.to_lowercase().as_str() {
        "" => Err(SessionError::Usage(
            "expected a value, or up/down [amount]".to_string(),
        )),
        "up" | "+" => Ok(Change::Adjust(amount())),
        "down" | "-" => Ok(Change::Adjust(amount().saturating_neg())),
        _ => Ok(Change::Set(parse_int_or_zero(arg))),
    }
}

fn describe_monster(m: &MonsterEntry) -> String {
    let name = if m.name.is_empty() { "(empty)" } else { m.name.as_str() };
    format!(
        "[{}] {name}  skill {}  stamina {}",
        m.id, m.skill, m.stamina
    )
}

fn help_text(topic: &str) -> String {
    match topic.to_lowercase().as_str() {
        "monster" | "monsters" => "\
Monster Commands:
  monsters                          List recorded monsters
  monster <slot>                    Show one slot (0-11 or monster-N)
  monster <slot> name <text>        Name the opponent
  monster <slot> skill <value>      Set skill (text that is not a number sets 0)
  monster <slot> stamina up|down [n]  Adjust stamina"
            .to_string(),
        "ammo" | "arrows" => "\
Arrow Commands:
  ammo                              List arrows
  ammo <type> <value>               Set a count (never below 0)
  ammo <type> up|down [n]           Adjust a count

Types: willow-leaf, bowel-raker, armour-piercer, humming-bulb"
            .to_string(),
        _ => "\
Adventure Sheet Commands:
  show                              Show the whole sheet
  stat <name> <value|up|down> [n]   Change a stat (skill, stamina-initial, ...)
  honor <value|up|down> [n]         Change honor
  supplies up|down [n]              Eat or gain provisions
  ammo [type] [value|up|down]       Arrows (see: help ammo)
  skillname <text>                  Set your skill name
  notes [text]                      Show or replace notes
  note <text>                       Append a line to notes
  monster <slot> ...                Encounter roster (see: help monster)
  monsters                          List recorded monsters
  roll [n]                          Roll n six-sided dice (default 1)
  clear                             Dismiss the dice result
  reset                             Wipe the sheet (asks first)
  help [topic]                      Show help (monster, ammo)
  quit                              Exit"
            .to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use ficha_store::{FileStore, MemoryStore};
    use std::fs;
    use std::path::Path;
    use tempfile::TempDir;

    fn test_session() -> AdventureSession<MemoryStore> {
        AdventureSession::open(
            RecordStore::new(MemoryStore::new()),
            SessionConfig::default().with_seed(42),
        )
    }

    fn file_session(dir: &Path) -> AdventureSession<FileStore> {
        AdventureSession::open(
            RecordStore::new(FileStore::new(dir)),
            SessionConfig::default().with_seed(42),
        )
    }

    #[test]
    fn fresh_session_has_defaults() {
        let s = test_session();
        assert_eq!(s.record(), &AdventureRecord::default());
        assert_eq!(s.roster(), &Roster::default());
        assert!(s.dice().last().is_none());
    }

    #[test]
    fn every_mutation_is_persisted() {
        let dir = TempDir::new().unwrap();
        let mut s = file_session(dir.path());
        s.set_stat(Stat::Skill, 9);
        s.adjust_honor(2);
        s.adjust_supplies(-1);
        s.set_ammunition(ArrowType::BowelRaker, 5);
        s.set_skill_name("Iaijutsu");
        s.update_monster("monster-0", &MonsterPatch::new().with_name("Ninja"));

        let expected_record = s.record().clone();
        let expected_roster = s.roster().clone();
        let s = file_session(dir.path());
        assert_eq!(s.record(), &expected_record);
        assert_eq!(s.roster(), &expected_roster);
        assert_eq!(s.record().supplies, 9);
        assert_eq!(s.record().ammunition.bowel_raker, 5);
    }

    #[test]
    fn text_entry_resets_to_zero() {
        let mut s = test_session();
        s.set_honor(5);
        assert_eq!(s.enter_honor("lots"), 0);
        s.set_stat(Stat::Luck, 9);
        assert_eq!(s.enter_stat(Stat::Luck, ""), 0);
        assert_eq!(s.enter_ammunition(ArrowType::WillowLeaf, "-4"), 0);
    }

    #[test]
    fn update_unknown_monster_reports_false() {
        let mut s = test_session();
        assert!(!s.update_monster("nonexistent-id", &MonsterPatch::new().with_name("X")));
        assert_eq!(s.roster(), &Roster::default());
        assert_eq!(s.adjust_monster("nobody", MonsterField::Skill, 1), None);
    }

    #[test]
    fn dice_are_not_persisted() {
        let dir = TempDir::new().unwrap();
        let mut s = file_session(dir.path());
        let faces = s.roll(2).faces.clone();
        assert_eq!(faces.len(), 2);
        assert!(fs::read_dir(dir.path()).unwrap().next().is_none());
        s.clear_dice();
        assert!(s.dice().last().is_none());
    }

    #[test]
    fn reset_declined_changes_nothing() {
        let mut s = test_session();
        s.set_honor(4);
        let mut asked = Vec::new();
        let done = s.reset(&mut |prompt: &str| {
            asked.push(prompt.to_string());
            false
        });
        assert!(!done);
        assert_eq!(asked, vec![RESET_PROMPT.to_string()]);
        assert_eq!(s.record().honor, 4);
    }

    #[test]
    fn reset_confirmed_restores_and_persists_defaults() {
        let dir = TempDir::new().unwrap();
        let mut s = file_session(dir.path());
        s.set_honor(4);
        s.update_monster("monster-3", &MonsterPatch::new().with_name("Oni"));
        assert!(s.reset(&mut |_: &str| true));
        assert_eq!(s.record(), &AdventureRecord::default());
        assert_eq!(s.roster(), &Roster::default());

        let s = file_session(dir.path());
        assert_eq!(s.record(), &AdventureRecord::default());
        assert_eq!(s.roster(), &Roster::default());
    }

    #[test]
    fn append_note_adds_lines() {
        let mut s = test_session();
        s.append_note("Found a jade key");
        s.append_note("Code: 212");
        assert_eq!(s.record().notes, "Found a jade key\nCode: 212");
    }

    #[test]
    fn process_stat_commands() {
        let mut s = test_session();
        assert_eq!(s.process("stat skill 11").unwrap(), "Skill: 11");
        assert_eq!(s.process("stat skill down 2").unwrap(), "Skill: 9");
        assert_eq!(s.process("stamina-initial 20").unwrap(), "Initial Stamina: 20");
        assert_eq!(s.process("luck up").unwrap(), "Luck: 1");
        assert_eq!(s.process("stat luck abc").unwrap(), "Luck: 0");
        assert!(s.process("stat charisma 3").is_err());
        assert!(s.process("stat").is_err());
    }

    #[test]
    fn process_honor_and_supplies() {
        let mut s = test_session();
        assert_eq!(s.process("honor up").unwrap(), "Honor: 1");
        assert_eq!(s.process("honor down 3").unwrap(), "Honor: -2");
        assert_eq!(s.process("honor 7").unwrap(), "Honor: 7");
        assert_eq!(s.process("honor dishonored").unwrap(), "Honor: 0");
        assert_eq!(s.process("supplies down").unwrap(), "Supplies: 9");
        assert_eq!(s.process("supplies down 50").unwrap(), "Supplies: 0");
        assert_eq!(s.process("supplies up 2").unwrap(), "Supplies: 2");
        assert!(s.process("supplies 5").is_err());
    }

    #[test]
    fn process_ammo() {
        let mut s = test_session();
        assert_eq!(s.process("ammo salgueiro -5").unwrap(), "Willow-leaf arrows: 0");
        assert_eq!(s.process("ammo willow-leaf 7").unwrap(), "Willow-leaf arrows: 7");
        assert_eq!(
            s.process("ammo humming-bulb down").unwrap(),
            "Humming-bulb arrows: 2"
        );
        assert!(s.process("ammo").unwrap().contains("Armour-piercer"));
        assert!(s.process("ammo fire 2").is_err());
    }

    #[test]
    fn process_monster() {
        let mut s = test_session();
        let out = s.process("monster 3 name Oni").unwrap();
        assert!(out.contains("Oni"));
        assert_eq!(s.roster().slot(3).unwrap().name, "Oni");
        s.process("monster monster-3 skill 9").unwrap();
        s.process("monster 3 stamina 12").unwrap();
        s.process("monster 3 stamina down 4").unwrap();
        let oni = s.roster().slot(3).unwrap();
        assert_eq!((oni.skill, oni.stamina), (9, 8));
        assert!(s.process("monsters").unwrap().contains("Oni"));
        assert!(matches!(
            s.process("monster 12 name X"),
            Err(SessionError::UnknownMonster(_))
        ));
        assert!(s.process("monster 3 luck 1").is_err());
    }

    #[test]
    fn process_roll_and_clear() {
        let mut s = test_session();
        assert!(s.process("roll 2").unwrap().starts_with("Rolled 2d6: ["));
        assert_eq!(s.dice().last().map(DiceRoll::count), Some(2));
        assert!(s.process("roll").unwrap().starts_with("Rolled 1d6"));
        assert!(s.process("roll 0").is_err());
        assert!(s.process("roll -2").is_err());
        assert!(s.process("roll 100").unwrap().starts_with("Rolled 100d6"));
        assert!(matches!(
            s.process("roll 2000000000"),
            Err(SessionError::Usage(_))
        ));
        s.process("clear").unwrap();
        assert!(s.dice().last().is_none());
    }

    #[test]
    fn process_text_fields() {
        let mut s = test_session();
        s.process("skillname Kyujutsu").unwrap();
        assert_eq!(s.record().skill_name, "Kyujutsu");
        assert_eq!(s.process("notes").unwrap(), "No notes.");
        s.process("notes Lost my horse").unwrap();
        s.process("note Gained a fan").unwrap();
        assert_eq!(s.record().notes, "Lost my horse\nGained a fan");
    }

    #[test]
    fn process_misc() {
        let mut s = test_session();
        assert_eq!(s.process("").unwrap(), "");
        assert_eq!(s.process("quit").unwrap(), "Goodbye!");
        assert!(s.process("help").unwrap().contains("Adventure Sheet Commands"));
        assert!(s.process("help monster").unwrap().contains("Monster Commands"));
        assert!(matches!(
            s.process("reset"),
            Err(SessionError::ConfirmationRequired)
        ));
        assert!(matches!(
            s.process("dance"),
            Err(SessionError::UnknownCommand(_))
        ));
    }

    #[test]
    fn summary_lists_sheet() {
        let mut s = test_session();
        s.set_stat(Stat::Skill, 9);
        s.set_stat(Stat::SkillInitial, 11);
        s.set_notes("Jade key");
        let text = s.summary();
        assert!(text.contains("Skill       9 / 11"));
        assert!(text.contains("Supplies: 10"));
        assert!(text.contains("willow-leaf 3"));
        assert!(text.contains("Monsters: 0/12 slots used"));
        assert!(text.contains("  Jade key"));
    }

    #[test]
    fn parse_change_forms() {
        assert_eq!(parse_change("up").unwrap(), Change::Adjust(1));
        assert_eq!(parse_change("- 3").unwrap(), Change::Adjust(-3));
        assert_eq!(parse_change("12").unwrap(), Change::Set(12));
        assert_eq!(parse_change("-4").unwrap(), Change::Set(-4));
        assert_eq!(parse_change("abc").unwrap(), Change::Set(0));
        assert!(parse_change("").is_err());
    }
}
