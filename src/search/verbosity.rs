use tracing::level_filters::LevelFilter;

/// How much search logging goes to stderr. The report itself is printed to
/// stdout regardless.
#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// No logging at all
    #[default]
    Silent,
    /// Final statistics of every search
    Normal,
    /// Search start, goal and meeting events
    Verbose,
    /// Every expansion
    Trace,
}

impl From<Verbosity> for LevelFilter {
    fn from(value: Verbosity) -> Self {
        match value {
            Verbosity::Silent => LevelFilter::OFF,
            Verbosity::Normal => LevelFilter::INFO,
            Verbosity::Verbose => LevelFilter::DEBUG,
            Verbosity::Trace => LevelFilter::TRACE,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn silent_turns_logging_off() {
        assert_eq!(LevelFilter::from(Verbosity::default()), LevelFilter::OFF);
        assert_eq!(LevelFilter::from(Verbosity::Trace), LevelFilter::TRACE);
    }
}
