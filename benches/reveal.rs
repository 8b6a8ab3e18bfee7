use std::hint::black_box;
use std::time::{Duration, Instant};

use criterion::{criterion_group, criterion_main, Criterion};
use crossterm::event::{KeyCode, KeyEvent};
use neonkit::model::{
    boot_sequence::{self, BootMessage, BootSequence},
    terminal::{self, Terminal},
};

const OUTPUT: &str = "ICE breached on node 7. Rerouting traffic through the orbital relay.";

fn boot_script(count: u64) -> Vec<BootMessage> {
    (0..count)
        .map(|i| {
            BootMessage::new(
                format!("[ OK ] Subsystem {i:03} online, checksum verified"),
                Duration::from_millis(i * 50),
            )
        })
        .collect()
}

fn benchmark(c: &mut Criterion) {
    let start = Instant::now();
    let mut sequence =
        BootSequence::new(boot_script(200)).with_typing_speed(Duration::from_millis(4));
    sequence.update(boot_sequence::Message::Started { now: Some(start) });
    sequence.update(boot_sequence::Message::Ticked {
        now: Some(start + Duration::from_millis(5_000)),
    });

    c.bench_function("boot visible_lines", |b| {
        b.iter(|| black_box(sequence.visible_lines()))
    });

    c.bench_function("terminal typing advance", |b| {
        b.iter(|| {
            let start = Instant::now();
            let mut terminal = Terminal::default()
                .with_typing_speed(Duration::from_millis(10))
                .with_handler(|_| vec![OUTPUT.to_owned(); 8]);
            for c in "scan".chars() {
                terminal.update(terminal::Message::KeyEventReceived {
                    event: KeyEvent::from(KeyCode::Char(c)),
                });
            }
            terminal.update(terminal::Message::Submitted);
            for step in 0..600 {
                terminal.update(terminal::Message::Ticked {
                    now: Some(start + Duration::from_millis(step * 10)),
                });
            }
            black_box(terminal.lines().len())
        })
    });
}

criterion_group!(benches, benchmark);
criterion_main!(benches);
