extern crate almanac as lib;

use flexi_logger::{FileSpec, Logger};
use lib::ui::App;
use std::io::{stdin, stdout};
use std::path::PathBuf;
use structopt::StructOpt;

#[derive(Debug, StructOpt)]
#[structopt(
    name = "alm",
    about = "Almanac - A perpetual calendar for the years 2019 to 2068."
)]
pub struct Args {
    #[structopt(
        name = "CONFIG",
        short = "c",
        long = "config",
        help = "path to config file",
        parse(from_os_str)
    )]
    pub configfile: Option<PathBuf>,

    #[structopt(
        short = "s",
        long = "show",
        help = "only show calendar non-interactively"
    )]
    pub show: bool,

    #[structopt(short = "y", long = "year", help = "year to show (2019-2068)")]
    pub year: Option<String>,

    #[structopt(short = "m", long = "month", help = "month to show, by name or number")]
    pub month: Option<String>,

    #[structopt(short = "d", long = "day", help = "day of the shown month to look up")]
    pub day: Option<String>,

    #[structopt(long = "log-file", help = "path to log file", parse(from_os_str))]
    pub log_file: Option<PathBuf>,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::from_args();

    const DEFAULT_LOG_LEVEL: &'static str = if cfg!(debug_assertions) {
        "info"
    } else {
        "warn"
    };

    let mut logger = Logger::try_with_env_or_str(DEFAULT_LOG_LEVEL)?;

    if let Some(log_file) = &args.log_file {
        logger = logger
            .log_to_file(FileSpec::try_from(log_file)?)
            .print_message();
    }

    let _logger = logger.start()?;

    std::panic::set_hook(Box::new(move |info| {
        println!("Almanac ran into a fatal error!");
        println!("Consider filing an issue with a log file and the backtrace below.");

        println!("{}", info);
        println!("{:?}", backtrace::Backtrace::new());
    }));

    let config = lib::config::load_suitable_config(args.configfile.as_deref())?;

    let stdout = stdout();
    let styled = termion::is_tty(&stdout);

    let mut app = App::new(&config);
    app.context_mut().styled = styled;

    let selected = app.select_initial(
        args.year.as_deref(),
        args.month.as_deref(),
        args.day.as_deref(),
    );

    if args.show {
        if let Err(e) = selected.and_then(|_| app.show(stdout.lock())) {
            log::error!("{}", e);
            eprintln!("{}: {}", e.title(), e.user_message());
            std::process::exit(1);
        }
        return Ok(());
    }

    if let Err(e) = selected {
        app.context_mut().report_error(&e);
    }

    let stdin = stdin();
    app.run(stdin.lock(), stdout.lock())?;

    Ok(())
}
