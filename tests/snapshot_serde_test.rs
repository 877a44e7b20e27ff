//! JSON shape of the values presentation layers consume.

use serde_json::{json, Value};

use blockdrop::core::{GameConfig, GameEvent, GameState};
use blockdrop::types::{Command, PieceKind};

#[test]
fn commands_serialize_in_camel_case() {
    let names: Vec<Value> = Command::ALL
        .iter()
        .map(|c| serde_json::to_value(c).unwrap())
        .collect();
    assert_eq!(
        names,
        vec![
            json!("moveLeft"),
            json!("moveRight"),
            json!("rotateClockwise"),
            json!("softDrop"),
            json!("hardDrop"),
        ]
    );
    for command in Command::ALL {
        assert_eq!(serde_json::to_value(command).unwrap(), json!(command.as_str()));
    }
}

#[test]
fn events_are_tagged_by_type() {
    assert_eq!(
        serde_json::to_value(GameEvent::Locked { lines_cleared: 2 }).unwrap(),
        json!({"type": "locked", "lines_cleared": 2})
    );
    assert_eq!(
        serde_json::to_value(GameEvent::ScoreChanged { score: 800, level: 2 }).unwrap(),
        json!({"type": "score_changed", "score": 800, "level": 2})
    );
    assert_eq!(
        serde_json::to_value(GameEvent::GameOver { final_score: 40 }).unwrap(),
        json!({"type": "game_over", "final_score": 40})
    );
}

#[test]
fn snapshot_serializes_board_and_counters() {
    let mut game = GameState::new(GameConfig::default());
    game.hard_drop();
    let snap = game.snapshot();

    let v = serde_json::to_value(snap).unwrap();
    let board = v["board"].as_array().unwrap();
    assert_eq!(board.len(), 20);
    assert!(board.iter().all(|row| row.as_array().map(Vec::len) == Some(10)));

    let filled = board
        .iter()
        .flat_map(|row| row.as_array().unwrap().iter())
        .filter(|cell| cell.as_u64() != Some(0))
        .count();
    assert_eq!(filled, 4);

    assert_eq!(v["score"], json!(0));
    assert_eq!(v["level"], json!(1));
    assert_eq!(v["pieces_locked"], json!(1));
    assert_eq!(v["drop_interval_ms"], json!(600));
    assert_eq!(v["game_over"], json!(false));
    assert_eq!(v["next"], json!(snap.next));
    assert_eq!(v["active"]["kind"], json!(snap.active.kind));
}

#[test]
fn piece_kinds_serialize_as_letters() {
    let letters: Vec<Value> = PieceKind::ALL
        .iter()
        .map(|k| serde_json::to_value(k).unwrap())
        .collect();
    assert_eq!(letters, ["I", "J", "L", "O", "S", "T", "Z"].map(|s| json!(s)).to_vec());
}
