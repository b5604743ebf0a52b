//! Panic handler module
//!
//! The TUI owns the terminal, so a raw panic dump would land on a broken
//! screen. The hook writes full details to crash.log and prints a short
//! message instead.

use std::fs::OpenOptions;
use std::io::Write;
use std::panic;

use chrono::Utc;

/// Install custom panic hook
pub fn install_panic_hook() {
    let _default_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        let payload = panic_info.payload();
        let message = if let Some(s) = payload.downcast_ref::<&str>() {
            s.to_string()
        } else if let Some(s) = payload.downcast_ref::<String>() {
            s.clone()
        } else {
            "Unknown panic".to_string()
        };

        let location = panic_info
            .location()
            .map(|loc| format!("{}:{}:{}", loc.file(), loc.line(), loc.column()))
            .unwrap_or_else(|| "Unknown location".to_string());

        let backtrace = std::backtrace::Backtrace::force_capture();
        let timestamp = Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string();

        if let Err(e) = write_crash_log(&timestamp, &message, &location, &backtrace) {
            eprintln!("Failed to write crash log: {}", e);
        }

        eprintln!();
        eprintln!("GifDeck crashed: {}", message);
        eprintln!("Details have been written to crash.log");
    }));
}

fn write_crash_log(
    timestamp: &str,
    message: &str,
    location: &str,
    backtrace: &std::backtrace::Backtrace,
) -> std::io::Result<()> {
    let mut file = OpenOptions::new()
        .create(true)
        .append(true)
        .open("crash.log")?;

    writeln!(file, "==== Panic at {} ====", timestamp)?;
    writeln!(file, "Message:  {}", message)?;
    writeln!(file, "Location: {}", location)?;
    writeln!(file, "Backtrace:\n{}", backtrace)?;
    writeln!(file)?;

    Ok(())
}
