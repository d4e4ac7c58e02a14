mod common;

use std::collections::HashMap;
use std::path::PathBuf;

use common::{FakePlayer, FakeScreen, FakeVolume, Notice, RecordingOverlay};
use swipectl_control_core::{Controls, DispatcherSettings, ScrollDispatcher};
use swipectl_gesture_model::{parse_samples, Channel, GestureSample};

fn load_fixture_samples() -> Vec<GestureSample> {
    let path = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join("session.jsonl");

    let content = std::fs::read_to_string(path).expect("fixture samples should be readable");
    parse_samples(&content).expect("fixture samples should parse")
}

#[test]
fn session_fixture_drives_devices_to_stable_state() {
    let samples = load_fixture_samples();
    assert_eq!(samples.len(), 11);

    let mut overlay = RecordingOverlay::default();
    let mut volume = FakeVolume {
        level: 7,
        max: 15,
        reject: false,
    };
    let mut screen = FakeScreen {
        level: 1.0,
        auto_at_lowest: true,
        restores: 0,
    };
    let mut player = FakePlayer {
        speed: 1.0,
        ..Default::default()
    };

    let mut ticks: HashMap<Channel, usize> = HashMap::new();
    let mut releases = 0;
    {
        let controls = Controls::new(&mut overlay)
            .with_volume(&mut volume)
            .with_brightness(&mut screen)
            .with_playback(&mut player);
        let mut dispatcher =
            ScrollDispatcher::new(DispatcherSettings::default(), controls).unwrap();

        for sample in samples {
            match sample {
                GestureSample::Scroll { channel, distance } => {
                    *ticks.entry(channel).or_default() +=
                        dispatcher.scroll(channel, distance).unwrap();
                }
                GestureSample::Release => {
                    dispatcher.reset_all();
                    releases += 1;
                }
            }
        }
        for channel in Channel::ALL {
            assert_eq!(dispatcher.remainder(channel), 0.0);
        }
    }

    assert_eq!(releases, 4);
    assert_eq!(ticks[&Channel::Volume], 2);
    assert_eq!(ticks[&Channel::Brightness], 3);
    assert_eq!(ticks[&Channel::Speed], 4);
    assert_eq!(ticks[&Channel::Seek], 2);

    assert_eq!(volume.level, 9);
    // 1 -> 0, then two downward ticks at the auto boundary.
    assert_eq!(screen.level, -1.0);
    assert_eq!(screen.restores, 2);
    assert_eq!((player.speed * 100.0).round() as i32, 120);
    assert_eq!(player.user_speed, Some(player.speed));
    assert_eq!(player.seeks, vec![500, 500]);

    assert_eq!(overlay.notices.len(), 11);
    assert_eq!(overlay.notices[0], Notice::Volume(8, 15));
    assert_eq!(overlay.notices[10], Notice::Seek(500));
}
