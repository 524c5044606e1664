use tracing::Level;

/// Runtime settings for one session, built from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Render listings as a table instead of one line per task.
    pub table: bool,
    pub log_level: Level,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            table: false,
            log_level: Level::WARN,
        }
    }
}

impl Config {
    pub fn new(table: bool, verbose: u8) -> Self {
        Self {
            table,
            log_level: level_for(verbose),
        }
    }
}

fn level_for(verbose: u8) -> Level {
    match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(Config::new(false, 0).log_level, Level::WARN);
        assert_eq!(Config::new(false, 1).log_level, Level::INFO);
        assert_eq!(Config::new(true, 2).log_level, Level::DEBUG);
        assert_eq!(Config::new(true, 9).log_level, Level::TRACE);
        assert_eq!(Config::default(), Config::new(false, 0));
    }
}
