use owo_colors::OwoColorize;

pub fn success(msg: &str) {
    println!("{} {msg}", "✓".green().bold());
}

pub fn info(msg: &str) {
    eprintln!("{} {msg}", "info:".cyan().bold());
}

pub fn warn(msg: &str) {
    eprintln!("{} {msg}", "warning:".yellow().bold());
}

pub fn error(msg: &str) {
    eprintln!("{} {msg}", "error:".red().bold());
}
