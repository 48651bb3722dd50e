use racing_suits_cli::run;

fn run_capture(args: &[&str]) -> (i32, String, String) {
    let mut out: Vec<u8> = Vec::new();
    let mut err: Vec<u8> = Vec::new();
    let code = run(args, &mut out, &mut err);
    (
        code,
        String::from_utf8(out).unwrap(),
        String::from_utf8(err).unwrap(),
    )
}

#[test]
fn verify_passes_across_track_lengths() {
    for len in ["1", "2", "10", "40"] {
        let (code, out, err) = run_capture(&[
            "racing-suits", "verify", "--races", "15", "--seed", "batch", "--track-length", len,
        ]);
        assert_eq!(code, 0, "track {len}: {err}");
        assert!(out.starts_with("Verify: OK (15 races"));
    }
}

#[test]
fn verify_without_checkpoints() {
    let (code, out, _) = run_capture(&[
        "racing-suits", "verify", "--races", "20", "--no-checkpoints", "--seed", "plain",
    ]);
    assert_eq!(code, 0);
    assert!(out.contains("seed base plain"));
}

#[test]
fn verify_rejects_zero_races() {
    let (code, out, err) = run_capture(&["racing-suits", "verify", "--races", "0"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    assert!(err.contains("races must be >= 1"));
}

#[test]
fn rng_is_deterministic_per_seed_and_fork() {
    let (_, a, _) = run_capture(&["racing-suits", "rng", "--seed", "7", "--count", "3"]);
    let (_, b, _) = run_capture(&["racing-suits", "rng", "--seed", "7", "--count", "3"]);
    let (_, forked, _) = run_capture(&[
        "racing-suits", "rng", "--seed", "7", "--fork", "checkpoint-deck", "--count", "3",
    ]);
    assert_eq!(a, b);
    assert_ne!(a, forked);
    assert!(a.starts_with("RNG stream: 7\n"));
    assert!(forked.starts_with("RNG stream: 7:checkpoint-deck\n"));
}

#[test]
fn unknown_command_lists_commands() {
    let (code, out, err) = run_capture(&["racing-suits", "gallop"]);
    assert_eq!(code, 2);
    assert!(out.is_empty());
    for name in ["race", "replay", "play", "verify", "rng", "cfg"] {
        assert!(err.contains(&format!("  {}\n", name)));
    }
}
