use chrono::{DateTime, Duration, Utc};
use litgrid_core::*;

fn at(millis: i64) -> DateTime<Utc> {
    DateTime::<Utc>::from_timestamp_millis(millis).unwrap()
}

/// Drives a machine the way the browser timers would, advancing a fake clock by each scheduled delay.
fn play_to_completion(machine: &mut GameMachine, seed: u64, mut now: DateTime<Utc>) -> (GameSession, usize) {
    let mut picker = RandomCellPicker::new(seed);
    let mut ticks = 0;

    while let Some(schedule) = machine.schedule() {
        match schedule {
            Schedule::Repeating { token, interval_ms } => {
                now += Duration::milliseconds(interval_ms.into());
                let before = machine.grid().unwrap().revealed_count();
                machine.tick(token, &mut picker).unwrap();
                assert_eq!(machine.grid().unwrap().revealed_count(), before + 1);
                ticks += 1;
            }
            Schedule::Once { token, delay_ms } => {
                now += Duration::milliseconds(delay_ms.into());
                return (machine.complete(token, now).unwrap(), ticks);
            }
        }
    }

    panic!("machine went idle without completing");
}

#[test]
fn easy_game_for_ada() {
    let mut machine = GameMachine::new(Mode::Easy);
    machine.set_player_name("Ada");
    let start = at(1_700_000_000_000);
    machine.start(start).unwrap();

    let (summary, ticks) = play_to_completion(&mut machine, 11, start);

    assert_eq!(ticks, 25);
    assert_eq!(summary.player_name, "Ada");
    assert_eq!(summary.mode, Mode::Easy);
    let ended_at = summary.ended_at.unwrap();
    assert!(ended_at >= summary.started_at);
    assert_eq!(ended_at - start, Duration::milliseconds(26_000));
    assert_eq!(machine.phase(), Phase::Idle);
    assert!(machine.grid().unwrap().iter().all(|revealed| !revealed));
}

#[test]
fn every_mode_fills_its_whole_board() {
    for mode in Mode::ALL {
        let mut machine = GameMachine::new(mode);
        machine.set_player_name("Grace");
        machine.start(at(0)).unwrap();

        let (summary, ticks) = play_to_completion(&mut machine, mode.grid_size() as u64, at(0));

        assert_eq!(ticks, mode.grid_size());
        let expected = mode.grid_size() as i64 * i64::from(mode.reveal_interval_ms())
            + i64::from(COMPLETION_DELAY_MS);
        assert_eq!(
            summary.ended_at.unwrap() - summary.started_at,
            Duration::milliseconds(expected)
        );
    }
}

#[test]
fn back_to_back_sessions_use_fresh_tokens() {
    let mut machine = GameMachine::new(Mode::Easy);
    machine.set_player_name("Ada");

    let first = machine.start(at(0)).unwrap();
    play_to_completion(&mut machine, 1, at(0));
    machine.set_player_name("Grace");
    let second = machine.start(at(60_000)).unwrap();

    assert_ne!(first, second);
    assert_eq!(machine.session().unwrap().player_name, "Grace");
    assert_eq!(machine.schedule().map(Schedule::token), Some(second));
}

#[test]
fn finished_session_serializes_for_logging() {
    let mut machine = GameMachine::new(Mode::Hard);
    machine.set_player_name("Ada");
    machine.start(at(0)).unwrap();
    let (summary, _) = play_to_completion(&mut machine, 5, at(0));

    let json = serde_json::to_value(&summary).unwrap();

    assert_eq!(json["mode"], "hard");
    assert_eq!(json["player_name"], "Ada");
    assert!(json["ended_at"].is_string());
}
