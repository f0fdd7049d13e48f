use fern::colors::{Color, ColoredLevelConfig};
use log::LevelFilter;
use termcolor::ColorChoice;

/// `-v` count to log level. Warnings are always shown.
pub fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    }
}

pub fn init(verbosity: u8) -> Result<(), fern::InitError> {
    let colors = ColoredLevelConfig::new()
        .error(Color::Red)
        .warn(Color::Yellow)
        .info(Color::Green)
        .debug(Color::Blue)
        .trace(Color::Magenta);

    let use_colors = crate::cli::color_choice() != ColorChoice::Never;

    fern::Dispatch::new()
        .format(move |out, message, record| {
            if use_colors {
                out.finish(format_args!("[{:<5}] [{}] {}", colors.color(record.level()), record.target(), message))
            } else {
                out.finish(format_args!("[{:<5}] [{}] {}", record.level(), record.target(), message))
            }
        })
        .level(level_for(verbosity))
        .chain(std::io::stderr())
        .apply()?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use log::LevelFilter;

    use super::level_for;

    #[test]
    fn test_verbosity_levels() {
        assert_eq!(level_for(0), LevelFilter::Warn);
        assert_eq!(level_for(1), LevelFilter::Info);
        assert_eq!(level_for(2), LevelFilter::Debug);
        assert_eq!(level_for(3), LevelFilter::Trace);
        assert_eq!(level_for(200), LevelFilter::Trace);
    }
}
