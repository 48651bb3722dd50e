use racing_suits_engine::deck::ScriptedDraws;
use racing_suits_engine::engine::RaceEngine;
use racing_suits_engine::race::{CheckpointEvent, RaceConfig};
use racing_suits_engine::replay::{
    build_replay_from_seed, from_ghost_payload, to_ghost_payload, GhostPayload,
};
use racing_suits_engine::suits::Suit;

#[test]
fn lone_runner_walks_to_the_finish() {
    let cfg = RaceConfig {
        track_length: 3,
        competitors: vec![Suit::Hearts],
        copies_per_suit: 1,
        checkpoints_enabled: false,
    };
    let engine = RaceEngine::with_sources(
        "lone",
        cfg,
        ScriptedDraws::new([Suit::Hearts]).unwrap(),
        ScriptedDraws::new([Suit::Hearts]).unwrap(),
    )
    .unwrap();
    let result = engine.simulate().unwrap();

    let walk: Vec<u32> = result
        .frames
        .iter()
        .map(|f| f.positions[&Suit::Hearts])
        .collect();
    assert_eq!(walk, vec![0, 1, 2, 3]);
    assert_eq!(result.winner, Suit::Hearts);
    assert_eq!(result.turn_count, 3);
}

#[test]
fn sitting_on_a_checkpoint_does_not_pass_it() {
    let cfg = RaceConfig {
        track_length: 3,
        competitors: vec![Suit::Hearts, Suit::Clubs],
        copies_per_suit: 1,
        checkpoints_enabled: true,
    };
    let mut engine = RaceEngine::with_sources(
        "strict",
        cfg,
        ScriptedDraws::new([Suit::Hearts, Suit::Hearts, Suit::Clubs, Suit::Clubs, Suit::Hearts]).unwrap(),
        ScriptedDraws::new([Suit::Clubs, Suit::Hearts]).unwrap(),
    )
    .unwrap();

    let mut state = engine.initial_state();
    assert_eq!(state.checkpoints[0].competitor, Suit::Clubs);
    assert_eq!(state.checkpoints[1].competitor, Suit::Hearts);

    for _ in 0..3 {
        let (next, event) = engine.play_turn(&state);
        assert!(event.checkpoint_events.is_empty());
        state = next;
    }
    assert_eq!(state.positions[&Suit::Hearts], 2);
    assert_eq!(state.positions[&Suit::Clubs], 1);
    assert!(!state.checkpoints[0].revealed, "Clubs at 1 has not passed length 1");

    // Clubs steps past length 1, revealing its own setback card.
    let (next, event) = engine.play_turn(&state);
    assert_eq!(
        event.checkpoint_events,
        vec![CheckpointEvent { length: 1, competitor: Suit::Clubs, from: 2, to: 1 }]
    );
    assert!(next.checkpoints[0].revealed);
    assert!(!next.checkpoints[1].revealed);
    state = next;

    let (_, event) = engine.play_turn(&state);
    assert_eq!(event.winner, Some(Suit::Hearts));
}

#[test]
fn ghost_payload_regenerates_the_race() {
    let original = build_replay_from_seed("ghost-scenario", RaceConfig::default()).unwrap();
    let payload = to_ghost_payload(&original);
    let json = payload.to_json().unwrap();
    let parsed = GhostPayload::from_json(&json).unwrap();
    assert_eq!(parsed, payload);

    let rebuilt = from_ghost_payload(&parsed).unwrap();
    assert_eq!(rebuilt.frames(), original.frames());
    assert_eq!(rebuilt.events(), original.events());
    assert_eq!(rebuilt.winner(), original.winner());
    assert_eq!(rebuilt.id(), original.id());
}
