//! Status demo: Simulated download workers reporting into one display.
//!
//! Run with `cargo run --example status_demo`.

use std::sync::Arc;
use std::thread;
use std::time::Duration;
use tailboard::StatusDisplay;

const WORKERS: usize = 3;
const FILES_PER_WORKER: usize = 12;

fn main() -> std::io::Result<()> {
    let display = Arc::new(StatusDisplay::new(
        "─────────────── recent ───────────────",
        &["Tailboard demo", "completed: 0", "in flight: 0"],
    )?);

    let handles: Vec<_> = (0..WORKERS)
        .map(|worker| {
            let display = display.clone();
            thread::spawn(move || {
                for file in 0..FILES_PER_WORKER {
                    display.log(format!("worker {worker}: fetching file-{file:02}.tar"));
                    thread::sleep(Duration::from_millis(150 + 40 * worker as u64));
                    display.log(format!("worker {worker}: done file-{file:02}.tar"));
                }
            })
        })
        .collect();

    for tick in 0u32.. {
        let finished = handles.iter().filter(|h| h.is_finished()).count();
        display.update_line(2, format!("completed workers: {finished}/{WORKERS}"));
        display.update_line(3, format!("elapsed: {:.1}s", f64::from(tick) * 0.25));
        if finished == WORKERS {
            break;
        }
        thread::sleep(Duration::from_millis(250));
    }

    for handle in handles {
        let _ = handle.join();
    }

    // Let the final state reach the screen before restoring the cursor.
    thread::sleep(Duration::from_millis(600));
    display.stop();
    println!();
    Ok(())
}
