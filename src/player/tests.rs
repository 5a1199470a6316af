use std::time::Duration;

use super::*;
use crate::audio::{AudioEvent, Session};
use crate::audio::mock::{Call, MockResource};
use crate::playlist::{Playlist, Track, builtin};

fn playlist_of(n: usize) -> Playlist {
    let tracks = (0..n)
        .map(|i| Track::new(format!("Song {i}"), "Artist", "3:20", format!("{i}.mp3")))
        .collect();
    Playlist::new(tracks).unwrap()
}

fn controller(n: usize) -> PlaybackController<MockResource> {
    PlaybackController::new(playlist_of(n), MockResource::default(), 30)
}

fn secs(s: u64) -> Duration {
    Duration::from_secs(s)
}

#[test]
fn mount_applies_defaults_and_preloads_first_track() {
    let c = controller(4);
    let s = c.state();
    assert_eq!(s.current_index, 0);
    assert!(!s.is_playing);
    assert_eq!(s.transport(), Transport::Paused);
    assert_eq!(s.volume_percent, 30);
    assert_eq!(s.progress_percent, 0.0);
    assert_eq!(s.elapsed_label, "0:00");

    let r = c.resource();
    assert!(r.is_subscribed());
    assert_eq!(r.calls[0], Call::Subscribe);
    assert!(r.calls.contains(&Call::SetVolume(0.3)));
    assert_eq!(r.loaded_sources(), vec!["0.mp3"]);
    assert_eq!(r.count(&Call::Play), 0);
}

#[test]
fn toggle_play_flips_between_playing_and_paused() {
    let mut c = controller(2);

    c.toggle_play();
    assert!(c.state().is_playing);
    assert_eq!(c.resource().last(), Some(&Call::Play));

    c.toggle_play();
    assert!(!c.state().is_playing);
    assert_eq!(c.resource().last(), Some(&Call::Pause));
    // Same track throughout.
    assert_eq!(c.state().current_index, 0);
    assert_eq!(c.resource().loaded_sources().len(), 1);
}

#[test]
fn failed_play_reverts_to_paused() {
    let mut c = controller(2);
    c.resource_mut().fail_play = true;

    c.toggle_play();
    assert!(!c.state().is_playing);

    // Not retried on its own; the user toggles again.
    c.resource_mut().fail_play = false;
    c.toggle_play();
    assert!(c.state().is_playing);
    assert_eq!(c.resource().count(&Call::Play), 2);
}

#[test]
fn next_track_wraps_after_n_skips_for_any_start() {
    for n in 1..=5 {
        for start in 0..n {
            let mut c = controller(n);
            for _ in 0..start {
                c.next_track();
            }
            assert_eq!(c.state().current_index, start);

            for _ in 0..n {
                c.next_track();
                assert!(c.state().current_index < n);
            }
            assert_eq!(c.state().current_index, start, "n={n} start={start}");
        }
    }
}

#[test]
fn previous_track_undoes_next_track() {
    let mut c = controller(4);
    for start in 0..4 {
        while c.state().current_index != start {
            c.next_track();
        }
        c.next_track();
        c.previous_track();
        assert_eq!(c.state().current_index, start);

        c.previous_track();
        c.next_track();
        assert_eq!(c.state().current_index, start);
    }
}

#[test]
fn previous_track_from_first_wraps_to_last() {
    let mut c = controller(4);
    c.previous_track();
    assert_eq!(c.state().current_index, 3);
    assert!(c.state().is_playing);
    assert_eq!(c.resource().loaded_sources().last(), Some(&"3.mp3"));
}

#[test]
fn skipping_forces_playing_and_resets_progress() {
    let mut c = controller(3);
    let session = c.session();
    c.on_time_update(session, secs(50), secs(100));
    assert_eq!(c.state().progress_percent, 50.0);
    assert!(!c.state().is_playing);

    c.next_track();
    assert!(c.state().is_playing);
    assert_eq!(c.state().progress_percent, 0.0);
    assert_eq!(c.state().elapsed_label, "0:00");
    assert_ne!(c.session(), session);
}

#[test]
fn skipping_while_playing_keeps_playing() {
    let mut c = controller(3);
    c.toggle_play();
    c.previous_track();
    assert!(c.state().is_playing);
    assert_eq!(c.resource().last(), Some(&Call::Play));
}

#[test]
fn failed_load_on_skip_leaves_player_paused() {
    let mut c = controller(3);
    c.resource_mut().fail_load = true;
    c.next_track();
    assert_eq!(c.state().current_index, 1);
    assert!(!c.state().is_playing);
    assert_eq!(c.resource().count(&Call::Play), 0);
}

#[test]
fn track_ended_on_last_track_wraps_to_first_and_plays() {
    let mut c = controller(4);
    for _ in 0..3 {
        c.next_track();
    }
    c.toggle_play();
    assert_eq!(c.state().current_index, 3);
    assert!(!c.state().is_playing);

    c.on_track_ended();
    assert_eq!(c.state().current_index, 0);
    assert!(c.state().is_playing);
}

#[test]
fn ended_event_advances_like_next_track() {
    let mut c = controller(2);
    c.toggle_play();
    let session = c.session();
    assert!(c.resource().emit(AudioEvent::Ended { session }));

    assert!(c.pump());
    assert_eq!(c.state().current_index, 1);
    assert!(c.state().is_playing);
    assert_eq!(c.resource().loaded_sources(), vec!["0.mp3", "1.mp3"]);
}

#[test]
fn seek_to_half_of_known_length() {
    let mut c = PlaybackController::new(playlist_of(2), MockResource::with_total(200), 30);
    c.seek_to(50.0);
    assert_eq!(c.resource().last(), Some(&Call::Seek(secs(100))));
    assert_eq!(c.state().progress_percent, 50.0);
    // Paused, so no time update will follow; the label moves with the gauge.
    assert_eq!(c.state().elapsed_label, "1:40");
}

#[test]
fn seek_to_is_noop_while_length_unknown() {
    let mut c = controller(2);
    c.seek_to(50.0);
    assert!(
        !c.resource()
            .calls
            .iter()
            .any(|call| matches!(call, Call::Seek(_)))
    );
    assert_eq!(c.state().progress_percent, 0.0);

    c.resource_mut().total = Some(Duration::ZERO);
    c.seek_to(50.0);
    assert_eq!(c.state().progress_percent, 0.0);
}

#[test]
fn seek_to_clamps_target_percent() {
    let mut c = PlaybackController::new(playlist_of(1), MockResource::with_total(60), 30);
    c.seek_to(150.0);
    assert_eq!(c.resource().last(), Some(&Call::Seek(secs(60))));
    assert_eq!(c.state().progress_percent, 100.0);

    c.seek_to(-5.0);
    assert_eq!(c.resource().last(), Some(&Call::Seek(Duration::ZERO)));

    let before = c.resource().calls.len();
    c.seek_to(f64::NAN);
    assert_eq!(c.resource().calls.len(), before);
}

#[test]
fn set_volume_clamps_and_forwards_normalized_level() {
    let mut c = controller(1);

    c.set_volume(150);
    assert_eq!(c.state().volume_percent, 100);
    assert_eq!(c.resource().last(), Some(&Call::SetVolume(1.0)));

    c.set_volume(-10);
    assert_eq!(c.state().volume_percent, 0);
    assert_eq!(c.resource().last(), Some(&Call::SetVolume(0.0)));

    c.set_volume(50);
    assert_eq!(c.state().volume_percent, 50);
    assert_eq!(c.resource().last(), Some(&Call::SetVolume(0.5)));
}

#[test]
fn change_volume_steps_within_range() {
    let mut c = controller(1);
    c.change_volume(5);
    assert_eq!(c.state().volume_percent, 35);
    c.change_volume(-100);
    assert_eq!(c.state().volume_percent, 0);
    c.change_volume(i32::MAX / 2);
    assert_eq!(c.state().volume_percent, 100);
}

#[test]
fn time_update_with_zero_total_reports_zero_progress() {
    let mut c = controller(1);
    let session = c.session();
    c.on_time_update(session, secs(42), Duration::ZERO);
    assert_eq!(c.state().progress_percent, 0.0);
    assert_eq!(c.state().elapsed_label, "0:42");
}

#[test]
fn time_update_computes_progress_and_label() {
    let mut c = controller(1);
    let session = c.session();
    c.on_time_update(session, secs(135), secs(270));
    assert_eq!(c.state().progress_percent, 50.0);
    assert_eq!(c.state().elapsed_label, "2:15");
}

#[test]
fn stale_time_updates_are_ignored_after_skip() {
    let mut c = controller(3);
    c.toggle_play();
    let old = c.session();
    c.next_track();

    assert!(c.resource().emit(AudioEvent::TimeUpdate {
        session: old,
        elapsed: secs(90),
        total: secs(100),
    }));
    c.pump();
    assert_eq!(c.state().progress_percent, 0.0);
    assert_eq!(c.state().elapsed_label, "0:00");

    c.on_time_update(old, secs(90), secs(100));
    assert_eq!(c.state().progress_percent, 0.0);
}

#[test]
fn stale_end_does_not_skip_twice() {
    let mut c = controller(4);
    c.toggle_play();
    let old = c.session();
    c.next_track();

    c.resource().emit(AudioEvent::Ended { session: old });
    c.pump();
    assert_eq!(c.state().current_index, 1);
}

#[test]
fn single_track_playlist_still_drops_stale_updates() {
    let mut c = controller(1);
    let old = c.session();
    c.next_track();
    assert_eq!(c.state().current_index, 0);

    c.on_time_update(old, secs(30), secs(60));
    assert_eq!(c.state().progress_percent, 0.0);
}

#[test]
fn failed_event_for_current_track_pauses() {
    let mut c = controller(2);
    c.toggle_play();
    let session = c.session();
    c.resource().emit(AudioEvent::Failed {
        session,
        message: "no such file".into(),
    });
    c.pump();
    assert!(!c.state().is_playing);
    assert_eq!(c.state().current_index, 0);
}

#[test]
fn pump_applies_events_in_order() {
    let mut c = controller(2);
    let session = c.session();
    for s in [10, 20, 30] {
        c.resource().emit(AudioEvent::TimeUpdate {
            session,
            elapsed: secs(s),
            total: secs(100),
        });
    }
    assert!(c.pump());
    assert_eq!(c.state().elapsed_label, "0:30");
    assert_eq!(c.state().progress_percent, 30.0);
    assert!(!c.pump());
}

#[test]
fn dropping_controller_unsubscribes() {
    let mut mock = MockResource::default();
    let c = PlaybackController::new(playlist_of(2), &mut mock, 30);
    drop(c);

    assert_eq!(mock.last(), Some(&Call::Unsubscribe));
    assert!(!mock.is_subscribed());
    assert!(!mock.emit(AudioEvent::Ended {
        session: Session::default().next(),
    }));
    // Dropping does not pause; the resource stops its own output.
    assert_eq!(mock.count(&Call::Pause), 0);
}

#[test]
fn four_track_scenario() {
    let mut c = PlaybackController::new(builtin(), MockResource::default(), 30);
    c.toggle_play();
    assert!(c.state().is_playing);
    assert_eq!(c.resource().last(), Some(&Call::Play));
    assert_eq!(c.resource().loaded_sources(), vec!["tumhiho.mp3"]);

    for expected in 1..=3 {
        c.next_track();
        assert_eq!(c.state().current_index, expected);
        assert!(c.state().is_playing);
        assert_eq!(
            c.resource().loaded_sources().last().copied(),
            Some(c.playlist().get(expected).source.as_str())
        );
        assert_eq!(c.resource().last(), Some(&Call::Play));
    }

    c.next_track();
    assert_eq!(c.state().current_index, 0);
    assert_eq!(
        c.resource().loaded_sources(),
        vec!["tumhiho.mp3", "kesariya.mp3", "tu.mp3", "tum.mp3", "tumhiho.mp3"]
    );
}

#[test]
fn format_clock_pads_seconds_only() {
    assert_eq!(format_clock(Duration::ZERO), "0:00");
    assert_eq!(format_clock(secs(9)), "0:09");
    assert_eq!(format_clock(secs(135)), "2:15");
    assert_eq!(format_clock(Duration::from_millis(59_999)), "0:59");
    assert_eq!(format_clock(secs(3_725)), "62:05");
}

#[test]
fn progress_is_capped_at_full() {
    assert_eq!(progress_of(secs(300), secs(270)), 100.0);
    assert_eq!(progress_of(Duration::ZERO, secs(270)), 0.0);
}
