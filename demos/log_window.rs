//! # Frame Log Demo
//!
//! This example demonstrates how a log window is fed from background threads.
//! It simulates a render loop at ~60 FPS while worker threads log through the
//! `log` facade, and prints what the window would draw.
//!
//! Run with: `cargo run --example log_window`

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use frame_log::generator::{LogEvent, LogGenerator};
use frame_log::{Config, FrameInput, LineStyle, LogWindow, ScrollState, WindowAction};

fn main() -> anyhow::Result<()> {
    println!("╔════════════════════════════════════════════════════════════╗");
    println!("║           Frame Log Demo                                   ║");
    println!("╠════════════════════════════════════════════════════════════╣");
    println!("║ Worker threads log for ~2 seconds while a simulated render ║");
    println!("║ loop drains them into a 20-entry log window.               ║");
    println!("╚════════════════════════════════════════════════════════════╝");
    println!();

    let config = Config {
        max_entry_count: 20,
        max_drain_per_frame: Some(8),
        show_timestamps: true,
        ..Config::default()
    };

    // The window captures the program's own logging, so no env_logger here
    let (mut window, logger) = LogWindow::with_logger(config)?;

    println!("📋 Configuration:");
    println!("   History size: {} entries", window.config().max_entry_count);
    println!("   Drain limit: {:?} per frame", window.config().max_drain_per_frame);
    println!();

    // Spawn producers
    let running = Arc::new(AtomicBool::new(true));
    let generator = Arc::new(LogGenerator::new());
    let workers: Vec<_> = (0..3)
        .map(|worker| {
            let running = Arc::clone(&running);
            let generator = Arc::clone(&generator);
            thread::spawn(move || {
                let mut tick = worker;
                while running.load(Ordering::Relaxed) {
                    let event = LogEvent::ALL[tick % LogEvent::ALL.len()];
                    generator.emit(event);
                    tick += 3;
                    thread::sleep(Duration::from_millis(15 + 10 * worker as u64));
                }
            })
        })
        .collect();

    // Simulated render loop
    println!("🎮 Running frame loop...");
    let frame_duration = Duration::from_micros(16_667); // ~60fps
    for frame_number in 0..120u32 {
        let mut input = FrameInput {
            scroll: ScrollState { y: 0.0, max_y: 0.0 },
            ..FrameInput::idle()
        };

        // Pretend the user typed into the filter box half way through
        if frame_number == 60 {
            input
                .actions
                .push(WindowAction::SetFilter("warn,error".to_string()));
        }

        let frame = window.update(input);

        if frame_number % 30 == 29 {
            println!();
            println!("   ⏱️  frame {} | drained {} this frame", frame_number + 1, frame.drain.drained);
            if let Some(header) = frame.header {
                println!("   {}", header);
            }
            for line in frame.lines.iter().rev().take(5).rev() {
                match line.style {
                    LineStyle::Plain => println!("     {}", line.text),
                    LineStyle::Bullet => println!("   • {}", line.text),
                }
            }
        }

        thread::sleep(frame_duration);
    }

    running.store(false, Ordering::Relaxed);
    for worker in workers {
        let _ = worker.join();
    }

    // Grab a copy of what's visible, then stop capturing
    let frame = window.update(FrameInput::with_actions([WindowAction::CopyToClipboard]));
    logger.detach();

    println!();
    println!("📊 Final Statistics:");
    let stats = window.stats();
    println!("   Frames: {}", stats.frames);
    println!("   Messages received: {}", stats.messages_received);
    println!("   Entries evicted: {}", stats.entries_evicted);
    println!("   Capped frames: {}", stats.capped_frames);
    println!("   Generated: {}", generator.emitted());
    println!(
        "   Clipboard: {} bytes",
        frame.clipboard.map(|text| text.len()).unwrap_or(0)
    );
    println!();
    println!("👋 Demo complete!");

    Ok(())
}
