use colored::Colorize;

/// Console reporter handed explicitly to every command.
///
/// There is no process-wide logger; commands that want to "log and continue"
/// (duplicate-method skips, already-existing files) call [`Reporter::warn`]
/// and keep going. `--quiet` suppresses everything except the final success
/// line — errors are printed by `main` either way.
pub struct Reporter {
    quiet: bool,
}

impl Reporter {
    pub fn new() -> Self {
        Reporter { quiet: false }
    }

    pub fn quiet() -> Self {
        Reporter { quiet: true }
    }

    /// A completed step inside a pipeline.
    pub fn step(&self, msg: &str) {
        if !self.quiet {
            println!("{} {}", "✓".green(), msg);
        }
    }

    /// A skipped or suspicious condition that does not abort the pipeline.
    pub fn warn(&self, msg: &str) {
        if !self.quiet {
            println!("{} {}", "!".yellow(), msg.yellow());
        }
    }

    /// The single terminal success line of a command.
    pub fn success(&self, msg: &str) {
        println!("{} {}", "✓".green(), msg.green());
    }
}

impl Default for Reporter {
    fn default() -> Self {
        Reporter::new()
    }
}
