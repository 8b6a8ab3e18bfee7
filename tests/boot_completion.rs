use std::sync::{
    atomic::{AtomicUsize, Ordering},
    Arc,
};
use std::time::{Duration, Instant};

use pretty_assertions::assert_eq;

use neonkit::model::boot_sequence::{BootMessage, BootSequence, Message};

fn sequence(calls: &Arc<AtomicUsize>) -> BootSequence {
    let counter = Arc::clone(calls);
    BootSequence::new(vec![
        BootMessage::new("[ OK ] Mounting /dev/cortex", Duration::ZERO),
        BootMessage::new("[WARN] Firewall detected", Duration::from_millis(200)),
        BootMessage::new(">> SYSTEM ONLINE", Duration::from_millis(400)),
    ])
    .with_typing_speed(Duration::from_millis(5))
    .with_grace_period(Duration::from_millis(300))
    .on_complete(move || {
        counter.fetch_add(1, Ordering::SeqCst);
    })
}

#[test]
fn test_completion_fires_once_across_ticks_and_skip() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut boot = sequence(&calls);
    let start = Instant::now();
    boot.update(Message::Started { now: Some(start) });

    for millis in (0..=2_000).step_by(50) {
        boot.update(Message::Ticked {
            now: Some(start + Duration::from_millis(millis)),
        });
    }
    boot.update(Message::Skipped);

    assert!(boot.is_complete());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_completion_waits_for_grace_period() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut boot = sequence(&calls);
    let start = Instant::now();
    boot.update(Message::Started { now: Some(start) });

    boot.update(Message::Ticked {
        now: Some(start + Duration::from_millis(699)),
    });
    assert!(!boot.is_complete());
    boot.update(Message::Ticked {
        now: Some(start + Duration::from_millis(700)),
    });
    assert!(boot.is_complete());
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_skip_reveals_everything() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut boot = sequence(&calls);
    boot.update(Message::Skipped);

    assert!(boot.all_revealed());
    assert_eq!(boot.visible_lines().len(), 3);
    assert_eq!(boot.progress(), 1.0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn test_lines_type_in_after_their_delay() {
    let calls = Arc::new(AtomicUsize::new(0));
    let mut boot = sequence(&calls);
    let start = Instant::now();
    boot.update(Message::Started { now: Some(start) });
    boot.update(Message::Ticked {
        now: Some(start + Duration::from_millis(210)),
    });

    let lines = boot.visible_lines();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0], "[ OK ] Mounting /dev/cortex");
    assert_eq!(lines[1], "[W");
}
