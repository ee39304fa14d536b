use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use snooker_scoreboard::balls::{Ball, COLOR_SEQUENCE};
use snooker_scoreboard::config::{FoulAwardPolicy, FrameConfig};
use snooker_scoreboard::frame::Frame;

fn seated(cfg: FrameConfig) -> Frame {
    let mut f = Frame::new(cfg);
    f.add_player("John").unwrap();
    f.add_player("Anna").unwrap();
    f
}

/// Reds and blacks, a few fouls and misses, then the colors.
fn play_frame(f: &mut Frame) {
    f.start().unwrap();
    for i in 0..15 {
        f.pot(Ball::Red).unwrap();
        if f.reds_remaining() == 0 {
            break;
        }
        if i % 4 == 3 {
            f.apply_foul(-4).unwrap();
            continue;
        }
        f.pot(Ball::Black).unwrap();
        f.advance_turn().unwrap();
    }
    for ball in COLOR_SEQUENCE {
        if f.game_over() {
            break;
        }
        f.pot(ball).unwrap();
    }
}

fn bench_full_frame(c: &mut Criterion) {
    let mut g = c.benchmark_group("full_frame");
    for policy in FoulAwardPolicy::ALL {
        let cfg = FrameConfig { foul_award_policy: policy, enforce_rules: true };
        g.bench_with_input(BenchmarkId::new("enforced", policy.title()), &cfg, |b, cfg| {
            b.iter(|| {
                let mut f = seated(*cfg);
                play_frame(&mut f);
                black_box(f.snapshot())
            })
        });
    }
    g.finish();
}

fn bench_undo_all(c: &mut Criterion) {
    let cfg = FrameConfig { enforce_rules: true, ..FrameConfig::default() };
    c.bench_function("undo_full_frame", |b| {
        b.iter(|| {
            let mut f = seated(cfg);
            play_frame(&mut f);
            while f.undo_last_action().is_ok() {}
            black_box(f.history_len())
        })
    });
}

criterion_group!(benches, bench_full_frame, bench_undo_all);
criterion_main!(benches);
