//! Save/load behaviour shared by the file and in-memory repositories.

use forge_content::builtin;
use forge_core::{
    CharacterRecord, DiceExpr, Likelihood, OracleEntry, PcgRng, Season, Terrain, WildernessRecord,
    ask_oracle, recompute_derived, roll_new_character, roll_new_npc, roll_quest,
};
use forge_runtime::{
    CharacterRepository, FileRepository, HistoryRepository, InMemoryRepository, RepositoryError,
    SaveKind, SaveStore, Stamped, WildernessRepository, WildernessState,
};

fn rolled_pair() -> (CharacterRecord, CharacterRecord) {
    let catalog = builtin::catalog().unwrap();
    let mut dice = PcgRng::new(77);
    let character = roll_new_character(&catalog, &mut dice).unwrap();
    let npc = roll_new_npc(&catalog, &mut dice).unwrap();
    (character, npc)
}

fn exercise_slots(store: &impl SaveStore) {
    let (character, npc) = rolled_pair();

    store.save(SaveKind::Character, "hero", &character).unwrap();
    store.save(SaveKind::Character, "alt", &character).unwrap();
    store.save(SaveKind::Npc, "innkeeper", &npc).unwrap();

    assert_eq!(store.load(SaveKind::Character, "hero").unwrap(), Some(character.clone()));
    assert_eq!(store.load(SaveKind::Npc, "innkeeper").unwrap(), Some(npc));
    assert_eq!(store.load(SaveKind::Npc, "hero").unwrap(), None);
    assert_eq!(
        store.list_slots(SaveKind::Character).unwrap(),
        vec!["alt".to_string(), "hero".to_string()]
    );

    store.delete(SaveKind::Character, "alt").unwrap();
    assert!(!store.exists(SaveKind::Character, "alt"));
    assert!(store.exists(SaveKind::Character, "hero"));

    assert!(matches!(
        store.save(SaveKind::Character, "../outside", &character),
        Err(RepositoryError::InvalidSlot(_))
    ));
}

fn exercise_histories(store: &impl SaveStore) {
    assert!(store.load_quests().unwrap().is_empty());
    assert!(store.load_oracle().unwrap().is_empty());
    assert!(store.load_dice().unwrap().is_empty());
    assert_eq!(store.load_current_quest().unwrap(), None);

    let tables = builtin::tables().unwrap();
    let mut dice = PcgRng::new(3);
    let quest = roll_quest(&tables.quest, &mut dice).unwrap();
    store.save_current_quest(&quest).unwrap();
    store.save_quests(&[Stamped::now(quest.clone())]).unwrap();

    let answer = ask_oracle(Likelihood::Likely, &mut dice);
    let oracle = vec![Stamped::now(OracleEntry::Answer(answer))];
    store.save_oracle(&oracle).unwrap();

    let roll = DiceExpr::new(3, 6).unwrap().roll(&mut dice);
    let rolls = vec![Stamped::now(roll)];
    store.save_dice(&rolls).unwrap();

    assert_eq!(store.load_current_quest().unwrap(), Some(quest.clone()));
    assert_eq!(store.load_quests().unwrap()[0].entry, quest);
    assert_eq!(store.load_oracle().unwrap(), oracle);
    assert_eq!(store.load_dice().unwrap(), rolls);
}

fn exercise_wilderness(store: &impl SaveStore) {
    assert_eq!(store.load_wilderness().unwrap(), None);
    let state = WildernessState {
        first_run_complete: true,
        record: WildernessRecord::new(Season::Cold, Terrain::Hills),
    };
    store.save_wilderness(&state).unwrap();
    assert_eq!(store.load_wilderness().unwrap(), Some(state));
}

#[test]
fn file_repository_slots() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRepository::new(dir.path()).unwrap();
    exercise_slots(&store);
    assert!(dir.path().join("characters/hero.json").is_file());
    assert!(dir.path().join("npcs/innkeeper.json").is_file());
    assert!(!dir.path().join("characters/hero.json.tmp").exists());
}

#[test]
fn file_repository_histories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRepository::new(dir.path()).unwrap();
    exercise_histories(&store);
    for file in ["quests.json", "oracle.json", "dice.json", "current_quest.json"] {
        assert!(dir.path().join(file).is_file(), "{file}");
    }
}

#[test]
fn file_repository_wilderness() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRepository::new(dir.path()).unwrap();
    exercise_wilderness(&store);
    assert!(dir.path().join("wilderness.json").is_file());
}

#[test]
fn memory_repository_behaves_the_same() {
    let store = InMemoryRepository::new();
    exercise_slots(&store);
    exercise_histories(&store);
    exercise_wilderness(&store);
}

#[test]
fn json_save_round_trips_canonical_and_derived_fields() {
    let (character, npc) = rolled_pair();
    for record in [character, npc] {
        let json = serde_json::to_string(&record).unwrap();
        let loaded: CharacterRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(loaded.sheet, record.sheet);
        assert_eq!(recompute_derived(&loaded).unwrap().derived, record.derived);
    }
}

#[test]
fn corrupt_file_reports_its_path() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileRepository::new(dir.path()).unwrap();
    std::fs::write(dir.path().join("dice.json"), "{ not json").unwrap();
    match store.load_dice() {
        Err(RepositoryError::Json { path, .. }) => assert!(path.ends_with("dice.json")),
        other => panic!("expected a JSON error, got {other:?}"),
    }
}
