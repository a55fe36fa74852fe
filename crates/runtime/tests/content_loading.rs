//! Loading a level and tuning file from disk into a running session.

use std::io::Write;

use glam::Vec2;
use umbra_content::{ConfigLoader, LevelLoader};
use umbra_core::TargetState;
use umbra_runtime::Session;

fn write_temp(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write");
    file
}

#[test]
fn authored_files_drive_a_session() {
    let level_file = write_temp(
        r#"(
            dimensions: (16, 10),
            tile_size: 16.0,
            tiles: [
                (2, 2, Spawn),
                (12, 7, Spawn),
                (1, 8, Patrol(0)),
                (14, 8, Patrol(1)),
                (8, 4, Wall),
                (8, 5, Wall),
            ],
        )"#,
    );
    let config_file = write_temp("capture_radius = 10.0\nlost_timeout = 1.0\n");

    let level = LevelLoader::load(level_file.path()).expect("level");
    let config = ConfigLoader::load(config_file.path()).expect("config");
    assert_eq!(config.capture_radius, 10.0);

    let mut session = Session::new(level, config, 5).expect("session");
    assert_eq!(session.state().len(), 2);
    // both agents picked up the shared two-point route
    for agent in session.state().agents() {
        assert_eq!(agent.patrol.len(), 2);
        assert_eq!(agent.patrol.current(), Some(Vec2::new(24.0, 136.0)));
    }

    let frame = session.advance(&TargetState::new(Vec2::new(500.0, 500.0), 0.0), 0.05);
    assert_eq!(frame.agents.len(), 2);
    assert_eq!(frame.darkness.len(), 16 * 10);
    assert!(!frame.captured);
}
