use std::fs;

use quantamental::adapter::outbound::file::kill_switch::FileKillSwitch;
use quantamental::port::outbound::shutdown::StopSignal;

#[test]
fn detection_is_one_shot() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("STOP.txt");
    let switch = FileKillSwitch::new(&path);

    assert!(!switch.stop_requested());

    fs::write(&path, "").unwrap();
    assert!(switch.stop_requested());
    assert!(!path.exists());
    assert!(!switch.stop_requested());

    fs::write(&path, "again").unwrap();
    assert!(switch.stop_requested());
    assert!(!switch.stop_requested());
}

#[test]
fn engage_arms_the_switch_for_a_single_poll() {
    let dir = tempfile::tempdir().unwrap();
    let switch = FileKillSwitch::new(dir.path().join("run").join("STOP.txt"));

    switch.engage().unwrap();
    assert!(switch.is_armed());
    assert!(switch.is_armed(), "is_armed must not consume the sentinel");

    assert!(switch.stop_requested());
    assert!(!switch.is_armed());
}
