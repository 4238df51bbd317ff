//! TrainingResult persistence

use matchbox::{LearningAgent, TrainingConfig, TrainingPipeline, TrainingResult};

#[test]
fn training_result_round_trips_through_json() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("result.json");

    let result = TrainingResult::new(100, 55, 30, 15);
    result.save(&path).unwrap();

    let loaded = TrainingResult::load(&path).unwrap();
    assert_eq!(loaded.total_games, 100);
    assert_eq!(loaded.wins, 55);
    assert_eq!(loaded.draws, 30);
    assert_eq!(loaded.losses, 15);
    assert!((loaded.win_rate - 0.55).abs() < 1e-9);
}

#[test]
fn pipeline_result_survives_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("run.json");

    let config = TrainingConfig {
        num_games: 50,
        seed: Some(42),
    };
    let mut pipeline = TrainingPipeline::new(config);
    let mut first = LearningAgent::new("Player 1", None);
    let mut second = LearningAgent::new("Player 2", None);
    let result = pipeline.run(&mut first, &mut second).unwrap();

    result.save(&path).unwrap();
    let loaded = TrainingResult::load(&path).unwrap();

    assert_eq!(loaded.total_games, result.total_games);
    assert_eq!(loaded.wins, result.wins);
    assert_eq!(loaded.draws, result.draws);
    assert_eq!(loaded.losses, result.losses);
}

#[test]
fn load_from_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.json");
    assert!(TrainingResult::load(&path).is_err());
}
