//! Log benchmark: Measure producer-side latency of the mutators.
//!
//! Target: well under 1µs per call with no repaint contention.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use std::io;
use std::time::Duration;
use tailboard::{DisplayConfig, StatusDisplay};

fn idle_display() -> StatusDisplay {
    let config = DisplayConfig {
        tick_interval: Duration::from_secs(3600),
        ..DisplayConfig::default()
    };
    StatusDisplay::with_writer(config, io::sink(), "----", &["a", "b", "c"])
        .expect("Failed to create display")
}

fn log_message(c: &mut Criterion) {
    let display = idle_display();

    c.bench_function("log_full_tail", |b| {
        b.iter(|| display.log(black_box("request completed in 12ms")));
    });

    display.stop();
}

fn update_line(c: &mut Criterion) {
    let display = idle_display();

    c.bench_function("update_line_in_range", |b| {
        b.iter(|| display.update_line(black_box(2), black_box("jobs: 42")));
    });

    c.bench_function("update_line_out_of_range", |b| {
        b.iter(|| display.update_line(black_box(9), black_box("ignored")));
    });

    display.stop();
}

fn log_under_repaint(c: &mut Criterion) {
    let config = DisplayConfig {
        tick_interval: Duration::from_millis(1),
        ..DisplayConfig::default()
    };
    let display = StatusDisplay::with_writer(config, io::sink(), "----", &["a", "b", "c"])
        .expect("Failed to create display");

    c.bench_function("log_with_1ms_repaint", |b| {
        b.iter(|| display.log(black_box("request completed in 12ms")));
    });

    display.stop();
}

criterion_group!(benches, log_message, update_line, log_under_repaint);
criterion_main!(benches);
