// std imports
use std::io::{self, Write};
use std::process;

// third-party imports
use env_logger::{self as logger};

// local imports
use wildfilter::{
    app::{self, App},
    cli,
    error::*,
    settings::Settings,
};

const WILDFILTER_DEBUG_LOG: &str = "WILDFILTER_DEBUG_LOG";
const WILDFILTER_DEBUG_LOG_STYLE: &str = "WILDFILTER_DEBUG_LOG_STYLE";

// ---

fn bootstrap() {
    if std::env::var(WILDFILTER_DEBUG_LOG).is_ok() {
        logger::Builder::from_env(
            logger::Env::new()
                .filter(WILDFILTER_DEBUG_LOG)
                .write_style(WILDFILTER_DEBUG_LOG_STYLE),
        )
        .format_timestamp_micros()
        .init();
        log::debug!("logging initialized");
    } else {
        logger::Builder::new()
            .filter_level(log::LevelFilter::Error)
            .format_timestamp_millis()
            .init()
    }
}

fn run() -> Result<bool> {
    let opt = cli::Opt::parse_ordered_from(wild::args()).unwrap_or_else(|err| err.exit());

    let mut settings = Settings::load(&opt.config)?;
    opt.apply(&mut settings);
    log::debug!("settings: {:?}", settings);

    let matcher = settings.matcher();
    let rules = settings
        .rules
        .iter()
        .map(|rule| (rule.pattern().to_owned(), rule.disposition()))
        .chain(opt.rules.iter().cloned());
    let set = matcher.compile_set(rules)?;

    let app = App::new(app::Options {
        set,
        verbose: opt.verbose,
        invert: opt.invert,
    });

    let stdout = io::stdout();
    let mut output = stdout.lock();
    let printed = if opt.texts.is_empty() {
        app.run(io::stdin().lock(), &mut output)?
    } else {
        app.run_texts(&opt.texts, &mut output)?
    };
    output.flush()?;

    log::debug!("{} texts printed", printed);
    Ok(printed != 0)
}

fn main() {
    bootstrap();

    match run() {
        Ok(true) => {}
        Ok(false) => process::exit(1),
        Err(err) => {
            err.log();
            process::exit(2);
        }
    }
}
