//! Session flows over a temp-dir file store.

use std::path::Path;

use forge_content::Content;
use forge_core::{
    CompetenceTier, DiceExpr, InspirationPart, Likelihood, OracleEntry, PcgRng, QuestError,
    QuestField, QuestType, Terrain,
};
use forge_runtime::{
    CharacterRepository, FileRepository, SaveKind, Screen, Session, SessionError,
};

fn open(dir: &Path, seed: u64) -> Session<FileRepository> {
    let store = FileRepository::new(dir).unwrap();
    Session::open(Content::builtin().unwrap(), store, Box::new(PcgRng::new(seed))).unwrap()
}

#[test]
fn oracle_history_is_bounded_and_survives_reopening() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 1);
    let mut answers = Vec::new();
    for _ in 0..7 {
        answers.push(session.ask_oracle(Likelihood::EvenOdds).unwrap());
    }
    assert_eq!(session.oracle_history().len(), 5);

    let reopened = open(dir.path(), 2);
    let history: Vec<_> = reopened.oracle_history().iter().map(|e| e.entry.clone()).collect();
    assert_eq!(history.len(), 5);
    assert_eq!(history[0], OracleEntry::Answer(answers[6].clone()));
    assert_eq!(history[4], OracleEntry::Answer(answers[2].clone()));
}

#[test]
fn dice_rolls_are_recorded_then_cleared() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 9);
    let exprs = ["2d6", "d20", "4d4"].map(|text| text.parse::<DiceExpr>().unwrap());
    let rolls = session.roll_dice(&exprs).unwrap();
    assert_eq!(rolls.len(), 3);
    for roll in &rolls {
        assert_eq!(roll.results.len() as u32, roll.expr.count());
        assert_eq!(roll.total, roll.results.iter().sum::<u32>());
    }
    assert_eq!(session.dice_history().latest().unwrap().entry, rolls[2]);

    session.clear_dice_history().unwrap();
    assert!(session.dice_history().is_empty());
    assert!(open(dir.path(), 9).dice_history().is_empty());
}

#[test]
fn quest_needs_rolling_before_rerolls() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 4);
    assert!(matches!(
        session.reroll_quest(QuestField::Reward),
        Err(SessionError::NoCurrentQuest)
    ));

    let quest = session.roll_quest().unwrap();
    let rerolled = session.reroll_quest(QuestField::Reward).unwrap();
    assert_eq!(rerolled.detail, quest.detail);
    assert_eq!(session.current_quest().unwrap(), Some(rerolled));

    session.save_current_quest().unwrap();
    assert_eq!(open(dir.path(), 4).quest_history().len(), 1);
}

#[test]
fn character_quests_are_rolled_with_an_npc() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 3);
    let mut character_quests = 0;
    for _ in 0..40 {
        let quest = session.roll_quest().unwrap();
        let is_character = quest.quest_type() == QuestType::CharacterBased;
        assert_eq!(quest.npc.is_some(), is_character, "{:?}", quest.detail);
        if is_character {
            character_quests += 1;
        }
        assert_eq!(session.current_quest().unwrap(), Some(quest));
    }
    assert!(character_quests > 0);
}

#[test]
fn type_changes_detach_and_reattach_the_npc() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 13);
    session.roll_quest().unwrap();

    let item = session.set_quest_type(QuestType::ItemBased).unwrap();
    assert!(item.npc.is_none());

    let character = session.set_quest_type(QuestType::CharacterBased).unwrap();
    let first = character.npc.clone().expect("npc attached on type change");
    let rewarded = session.reroll_quest(QuestField::Reward).unwrap();
    assert_eq!(rewarded.npc.as_ref(), Some(&first));

    let again = session.set_quest_type(QuestType::CharacterBased).unwrap();
    let second = again.npc.expect("fresh npc");
    assert_ne!(second, first);

    let replaced = session.reroll_quest_npc().unwrap();
    assert_ne!(replaced.npc.as_ref(), Some(&second));
    assert_eq!(replaced.detail, again.detail);

    let mut left = session.reroll_quest(QuestField::Type).unwrap();
    while left.quest_type() == QuestType::CharacterBased {
        left = session.reroll_quest(QuestField::Type).unwrap();
    }
    assert!(left.npc.is_none());
    let mut back = session.reroll_quest(QuestField::Type).unwrap();
    while back.quest_type() != QuestType::CharacterBased {
        back = session.reroll_quest(QuestField::Type).unwrap();
    }
    assert!(back.npc.is_some());
}

#[test]
fn handed_npc_is_the_one_on_the_quest() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 11);
    session.roll_quest().unwrap();
    let quest = session.set_quest_type(QuestType::CharacterBased).unwrap();
    let stored = quest.npc.expect("npc attached");

    assert_eq!(session.open_quest_npc().unwrap(), stored);
    assert_eq!(session.navigator().current(), Screen::Npc);
    assert_eq!(session.take_handed_npc(), Some(stored.clone()));
    assert_eq!(session.take_handed_npc(), None);

    let mut reopened = open(dir.path(), 50);
    assert_eq!(reopened.open_quest_npc().unwrap(), stored);
    assert_eq!(reopened.current_quest().unwrap().unwrap().npc, Some(stored));
}

#[test]
fn only_character_quests_carry_an_npc() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 12);
    session.roll_quest().unwrap();
    session.set_quest_type(QuestType::ItemBased).unwrap();
    assert!(matches!(
        session.open_quest_npc(),
        Err(SessionError::Quest(QuestError::NpcNotApplicable(QuestType::ItemBased)))
    ));
    assert_eq!(session.take_handed_npc(), None);
    assert!(matches!(
        session.reroll_quest_npc(),
        Err(SessionError::Quest(QuestError::NpcNotApplicable(QuestType::ItemBased)))
    ));
}

#[test]
fn inspiration_halves_reroll_and_oracle_history_clears() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 17);
    assert!(matches!(
        session.reroll_inspiration(InspirationPart::Verb),
        Err(SessionError::NoInspiration)
    ));

    let first = session.inspiration().unwrap();
    let noun = session.reroll_inspiration(InspirationPart::Noun).unwrap();
    assert_eq!(noun.verb, first.verb);
    assert!(noun.rerolled);
    assert_eq!(session.oracle_history().len(), 2);

    session.ask_oracle(Likelihood::Likely).unwrap();
    let verb = session.reroll_inspiration(InspirationPart::Verb).unwrap();
    assert_eq!(verb.noun, noun.noun);
    assert_eq!(
        session.oracle_history().latest().unwrap().entry,
        OracleEntry::Inspiration(verb)
    );

    session.clear_oracle_history().unwrap();
    assert!(session.oracle_history().is_empty());
    let mut reopened = open(dir.path(), 18);
    assert!(reopened.oracle_history().is_empty());
    assert!(matches!(
        reopened.reroll_inspiration(InspirationPart::Noun),
        Err(SessionError::NoInspiration)
    ));
}

#[test]
fn first_wilderness_visit_rolls_weather_and_next_hex() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 21);
    let first = session.wilderness().unwrap();
    assert!(first.first_run_complete);
    assert!(first.record.weather.is_some());
    let next = first.record.next_hex.expect("next hex rolled on first run");
    assert_eq!(next.from, Terrain::Plains);

    assert_eq!(open(dir.path(), 99).wilderness().unwrap(), first);

    let moved = session.move_to_next_hex().unwrap();
    assert_eq!(moved.record.current, next.terrain);
    assert!(moved.record.next_hex.is_none());
    assert!(matches!(
        session.move_to_next_hex(),
        Err(SessionError::Wilderness(_))
    ));

    let rolled = session.roll_next_hex().unwrap();
    assert_eq!(rolled.record.next_hex.unwrap().from, next.terrain);
    let relocated = session.set_terrain(Terrain::Desert).unwrap();
    assert!(relocated.record.next_hex.is_none());
}

#[test]
fn stale_derived_block_is_recomputed_on_load() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 31);
    let character = session.roll_character(Some(3)).unwrap();
    assert_eq!(character.sheet.level, 3);

    let mut tampered = character.clone();
    tampered.derived.armour_class.total += 5;
    tampered.derived.hit_points.max = 999;
    session
        .store()
        .save(SaveKind::Character, "hero", &tampered)
        .unwrap();

    let loaded = session.load_character(SaveKind::Character, "hero").unwrap();
    assert_eq!(loaded, character);
}

#[test]
fn saves_land_in_the_folder_for_their_kind() {
    let dir = tempfile::tempdir().unwrap();
    let mut session = open(dir.path(), 41);
    let npc = session.roll_npc(Some(CompetenceTier::Exceptional)).unwrap();
    assert_eq!(npc.sheet.level, 3);

    assert_eq!(session.save_character("smith", &npc).unwrap(), SaveKind::Npc);
    assert_eq!(session.list_slots(SaveKind::Npc).unwrap(), vec!["smith".to_string()]);
    assert!(matches!(
        session.load_character(SaveKind::Character, "smith"),
        Err(SessionError::SlotNotFound { .. })
    ));
}
