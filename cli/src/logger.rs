use ansi_term::{Color, Style};
use log::{Level, LevelFilter, Log, Metadata, Record};

/// Writes rustc-style `level: message` lines to stderr, coloring the level
/// tag when enabled.
struct StderrLogger {
    colors_enabled: bool,
}

fn level_tag(level: Level) -> &'static str {
    match level {
        Level::Error => "error",
        Level::Warn => "warning",
        Level::Info => "info",
        Level::Debug => "debug",
        Level::Trace => "trace",
    }
}

impl StderrLogger {
    fn tag_style(&self, level: Level) -> Style {
        if !self.colors_enabled {
            return Style::new();
        }
        match level {
            Level::Error => Color::Red.bold(),
            Level::Warn => Color::Yellow.bold(),
            Level::Info => Color::Cyan.normal(),
            Level::Debug | Level::Trace => Style::new().dimmed(),
        }
    }
}

impl Log for StderrLogger {
    fn enabled(&self, _: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        let level = record.level();
        let tag = self.tag_style(level).paint(level_tag(level));
        eprintln!("{}: {}", tag, record.args());
    }

    fn flush(&self) {}
}

pub fn init(max_level: LevelFilter, colors_enabled: bool) {
    log::set_boxed_logger(Box::new(StderrLogger { colors_enabled }))
        .expect("logger initialized twice");
    log::set_max_level(max_level);
}
