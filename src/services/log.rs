use chrono::Utc;

#[derive(Debug, Clone, Copy)]
pub enum LogLevel {
    Info,
    Error,
}

/// Print a per-item console notice.
///
/// Called by the writer thread right after the matching CSV append, so
/// notices come out in the same order as rows.
pub fn notice(level: LogLevel, url: &str, detail: &str) {
    let symbol = match level {
        LogLevel::Info => "✅",
        LogLevel::Error => "❌",
    };
    println!(
        "{} {} {} {}",
        Utc::now().format("%Y-%m-%d %H:%M:%S UTC"),
        symbol,
        url,
        detail
    );
}
