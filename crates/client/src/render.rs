//! Terminal rendering for generator output.

use console::style;

use forge_core::{
    CharacterKind, CharacterRecord, DiceRoll, Inspiration, OracleAnswer, OracleEntry, QuestDetail,
    QuestRecord, RandomEvent,
};
use forge_runtime::{DiceLogEntry, OracleLogEntry, SavedQuest, WildernessState};

/// Print `value` as pretty JSON.
pub fn print_json<T: serde::Serialize>(value: &T) -> anyhow::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn heading(text: &str) {
    println!("{}", style(text).bold().yellow());
}

fn field(label: &str, value: impl std::fmt::Display) {
    println!("  {} {}", style(format!("{label}:")).bold().cyan(), value);
}

fn signed(value: i32) -> String {
    format!("{value:+}")
}

pub fn print_character(record: &CharacterRecord) {
    let sheet = &record.sheet;
    let derived = &record.derived;
    let kind = match &sheet.kind {
        CharacterKind::Player => "Player Character",
        CharacterKind::Npc(_) => "NPC",
    };

    println!(
        "{} {}",
        style(&sheet.name).bold().green(),
        style(format!("({kind})")).dim()
    );
    field("Occupation", sheet.occupations.join(" / "));
    field("Alignment", &sheet.alignment);
    field("Level", sheet.level);
    println!();

    heading("Attributes");
    for line in &derived.attributes {
        let marker = if line.primary { style("*").bold().magenta() } else { style(" ") };
        println!(
            "  {}{} {:>2}  mod {:>3}  check {:>3}",
            line.attribute.abbreviation(),
            marker,
            line.score,
            signed(line.modifier),
            signed(line.check_bonus),
        );
    }
    println!();

    let ac = &derived.armour_class;
    let hp = &derived.hit_points;
    heading("Defence");
    field(
        "Armour Class",
        format!("{} (base {}, shield {}, dex {})", ac.total, ac.base, signed(ac.shield), signed(ac.dex)),
    );
    let take_four = if hp.take_four_available {
        style(" take four available").italic().to_string()
    } else {
        String::new()
    };
    field("Hit Points", format!("{} ({}){take_four}", hp.max, hp.hit_die));
    field("Weapon", format!("{} {}", sheet.weapon.name, sheet.weapon.damage.label()));
    println!();

    if let (CharacterKind::Npc(profile), Some(standing)) = (&sheet.kind, &derived.npc) {
        heading("Hireling");
        field("Competence", &standing.competence);
        field("Morale", standing.morale);
        field("Wage", &standing.wage);
        field("Equipment", &profile.equipment);
        if let Some(personality) = &profile.personality {
            field("Personality", personality);
        }
        if let Some(interest) = &profile.interest {
            field("Interest", interest);
        }
        println!();
    }

    let slots = &derived.slots;
    let usage = format!("{}/{}", slots.used, slots.capacity);
    heading("Inventory");
    for item in &derived.inventory {
        println!("  {} {}", item.name, style(format!("[{}]", item.slots)).dim());
    }
    if slots.over_capacity {
        field("Slots", style(format!("{usage} over capacity")).red().bold());
    } else {
        field("Slots", usage);
    }
    field("Gold", sheet.gold);
    println!();

    heading("Details");
    field("Appearance", &sheet.flavor.appearance);
    field("Detail", &sheet.flavor.detail);
    field("Clothing", &sheet.flavor.clothing);
    field("Quirk", &sheet.flavor.quirk);
}

pub fn print_quest(quest: &QuestRecord) {
    heading(&format!("{} Quest", quest.quest_type()));
    field("Action", quest.detail.action());
    field("Subject", quest.detail.subject());
    if let QuestDetail::Location { location, .. } = &quest.detail {
        field(
            "Location",
            format!("{} hex(es) {}", location.distance, location.direction),
        );
    }
    field("Reward", &quest.reward.text);
    if let Some(npc) = &quest.npc {
        field("NPC", format!("{} ({})", npc.sheet.name, npc.sheet.occupations.join(" / ")));
    }
}

pub fn print_quest_history(history: &[&SavedQuest]) {
    if history.is_empty() {
        println!("{}", style("No saved quests").dim());
        return;
    }
    for (index, saved) in history.iter().enumerate() {
        let quest = &saved.entry;
        println!(
            "{} {} {}: {} {}. {}",
            style(format!("{:>2}.", index + 1)).dim(),
            style(saved.at.format("%Y-%m-%d %H:%M")).dim(),
            style(quest.quest_type()).bold(),
            quest.detail.action(),
            quest.detail.subject(),
            quest.reward.text,
        );
    }
}

pub fn print_wilderness(state: &WildernessState) {
    let record = &state.record;
    heading("Wilderness");
    field("Season", record.season);
    field("Current hex", record.current);
    match &record.weather {
        Some(weather) => field("Weather", format!("{} (rolled {})", weather.weather, weather.roll)),
        None => field("Weather", style("not rolled").dim()),
    }
    match &record.next_hex {
        Some(next) => field("Next hex", format!("{} (rolled {} from {})", next.terrain, next.roll, next.from)),
        None => field("Next hex", style("not rolled").dim()),
    }
}

pub fn print_answer(answer: &OracleAnswer) {
    let text = if answer.yes {
        style(&answer.answer).bold().green()
    } else {
        style(&answer.answer).bold().red()
    };
    println!("{} {}", text, style(format!("({}: {}, {})", answer.likelihood, answer.roll, answer.modifier_roll)).dim());
    if answer.random_event_due {
        println!("{}", style("Doubles! A random event occurs.").yellow());
    }
}

pub fn print_event(event: &RandomEvent) {
    println!("{}", style(event.text()).bold());
}

pub fn print_inspiration(inspiration: &Inspiration) {
    let note = if inspiration.rerolled {
        style(" (Re-rolled)").dim().to_string()
    } else {
        String::new()
    };
    println!(
        "{} {}{note}",
        style(&inspiration.verb).bold().cyan(),
        style(&inspiration.noun).bold()
    );
}

pub fn print_oracle_history(history: &[&OracleLogEntry]) {
    if history.is_empty() {
        println!("{}", style("No oracle results").dim());
        return;
    }
    for logged in history {
        let label = match &logged.entry {
            OracleEntry::Answer(_) => "ask",
            OracleEntry::Event(_) => "event",
            OracleEntry::Inspiration(_) => "inspire",
        };
        println!(
            "{} {:<8} {}",
            style(logged.at.format("%H:%M:%S")).dim(),
            style(label).cyan(),
            logged.entry.summary()
        );
    }
}

pub fn print_roll(roll: &DiceRoll) {
    let faces: Vec<String> = roll.results.iter().map(u32::to_string).collect();
    println!(
        "{} {} {}",
        style(roll.expr.label()).bold().cyan(),
        style(format!("[{}]", faces.join(", "))).dim(),
        style(roll.total).bold()
    );
}

pub fn print_dice_history(history: &[&DiceLogEntry]) {
    if history.is_empty() {
        println!("{}", style("No dice rolls").dim());
        return;
    }
    for logged in history {
        print!("{} ", style(logged.at.format("%H:%M:%S")).dim());
        print_roll(&logged.entry);
    }
}
