use log::LevelFilter;

/// Verbosity 0..=3 to a level filter: Off, Info, Debug, Trace.
pub fn level_filter(verbosity: u8) -> LevelFilter { 
    match verbosity {
        0 => LevelFilter::Off,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

/// Logs to stderr, so that stdout only carries results.
pub fn init_simple_logger(l: LevelFilter) -> Result<(), log::SetLoggerError> { 
    use simplelog::*;

    let config = ConfigBuilder::new()
        .set_location_level(LevelFilter::Off)
        .set_target_level(LevelFilter::Off)
        .set_thread_level(LevelFilter::Off)
        .set_level_color(Level::Trace, Some(Color::Green))
        .build();

    TermLogger::init(l, config, TerminalMode::Stderr, ColorChoice::Auto)
}

#[cfg(test)]
mod tests { 
    use super::*;

    #[test]
    fn verbosity() { 
        assert_eq!(level_filter(0), LevelFilter::Off);
        assert_eq!(level_filter(1), LevelFilter::Info);
        assert_eq!(level_filter(2), LevelFilter::Debug);
        assert_eq!(level_filter(3), LevelFilter::Trace);
        assert_eq!(level_filter(9), LevelFilter::Trace);
    }
}
