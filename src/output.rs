//! User-facing messages for the CLI.
//! Status lines carry a coloured prefix when the stream is a TTY; results (listings,
//! counts) are printed bare so they stay script-friendly.

use owo_colors::OwoColorize;

#[derive(Clone, Copy)]
enum Tone {
    Info,
    Ok,
    Warn,
    Error,
}

impl Tone {
    fn label(self) -> &'static str {
        match self {
            Tone::Info => "info:",
            Tone::Ok => "ok:",
            Tone::Warn => "warn:",
            Tone::Error => "error:",
        }
    }

    fn to_stderr(self) -> bool {
        matches!(self, Tone::Warn | Tone::Error)
    }
}

fn is_tty(stderr: bool) -> bool {
    if stderr {
        atty::is(atty::Stream::Stderr)
    } else {
        atty::is(atty::Stream::Stdout)
    }
}

fn prefix(tone: Tone) -> String {
    let label = tone.label();
    if !is_tty(tone.to_stderr()) {
        return label.to_string();
    }
    match tone {
        Tone::Info => label.cyan().bold().to_string(),
        Tone::Ok => label.green().bold().to_string(),
        Tone::Warn => label.yellow().bold().to_string(),
        Tone::Error => label.red().bold().to_string(),
    }
}

fn emit(tone: Tone, msg: &str) {
    if tone.to_stderr() {
        eprintln!("{} {}", prefix(tone), msg);
    } else {
        println!("{} {}", prefix(tone), msg);
    }
}

pub fn print_info(msg: &str) {
    emit(Tone::Info, msg);
}

pub fn print_success(msg: &str) {
    emit(Tone::Ok, msg);
}

pub fn print_warn(msg: &str) {
    emit(Tone::Warn, msg);
}

pub fn print_error(msg: &str) {
    emit(Tone::Error, msg);
}

/// Print a result line with no prefix.
pub fn print_user(msg: &str) {
    println!("{}", msg);
}
