mod report;
use crate::report::write_report;
use anyhow::{bail, Context};
use lexopt::{Arg, Parser, ValueExt};
use rangepick::{DateBounds, DateRange, PageConfig, PickerInput, RangePicker, WeekStart};
use std::ffi::OsString;
use std::io::{self, Write};
use time::{format_description::FormatItem, macros::format_description, Date, OffsetDateTime};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

static YMD_FMT: &[FormatItem<'_>] = format_description!("[year]-[month]-[day]");

#[derive(Clone, Debug, Eq, PartialEq)]
enum Command {
    Run(Session),
    Help,
    Version,
}

impl Command {
    fn from_parser(mut parser: Parser) -> Result<Command, lexopt::Error> {
        let mut session = Session::default();
        while let Some(arg) = parser.next()? {
            match arg {
                Arg::Short('h') | Arg::Long("help") => return Ok(Command::Help),
                Arg::Short('V') | Arg::Long("version") => return Ok(Command::Version),
                Arg::Long("start") => session.start = Some(parse_date(parser.value()?)?),
                Arg::Long("end") => session.end = Some(parse_date(parser.value()?)?),
                Arg::Long("min") => session.min = Some(parse_date(parser.value()?)?),
                Arg::Long("max") => session.max = Some(parse_date(parser.value()?)?),
                Arg::Long("monday") => session.week_start = WeekStart::Monday,
                Arg::Long("days-on-page") => {
                    session.days_on_page = Some(parser.value()?.parse()?);
                }
                Arg::Long("next") => session.actions.push(Action::NextPage),
                Arg::Long("prev") => session.actions.push(Action::PrevPage),
                Arg::Long("click") => {
                    session.actions.push(Action::Click(parser.value()?.parse()?));
                }
                Arg::Value(value) if session.date.is_none() => {
                    session.date = Some(parse_date(value)?);
                }
                _ => return Err(arg.unexpected()),
            }
        }
        Ok(Command::Run(session))
    }

    fn run(self) -> anyhow::Result<()> {
        match self {
            Command::Run(session) => {
                init_logging();
                let mut stdout = io::stdout().lock();
                session.run(&mut stdout)
            }
            Command::Help => {
                println!("Usage: rangepick [OPTIONS] [YYYY-MM-DD]");
                println!();
                println!("Pick a date range on a month calendar page");
                println!();
                println!("Options:");
                println!("  --start DATE          Start of the current range");
                println!("  --end DATE            End of the current range");
                println!("  --min DATE            Earliest date that can be picked");
                println!("  --max DATE            Latest date that can be picked");
                println!("  --monday              Start weeks on Monday");
                println!("  --days-on-page N      Cells per page, 37 to 84 [default: 42]");
                println!("  --next                Show the next month");
                println!("  --prev                Show the previous month");
                println!("  --click N             Click the cell at position N");
                println!("  -h, --help            Display this help message and exit");
                println!("  -V, --version         Show the program version and exit");
                Ok(())
            }
            Command::Version => {
                println!("{} {}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
                Ok(())
            }
        }
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Action {
    NextPage,
    PrevPage,
    Click(usize),
}

/// A scripted run of the picker.  The session owns the range, as the owner of
/// a real picker widget would, and feeds it back in on every click.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
struct Session {
    date: Option<Date>,
    start: Option<Date>,
    end: Option<Date>,
    min: Option<Date>,
    max: Option<Date>,
    week_start: WeekStart,
    days_on_page: Option<usize>,
    actions: Vec<Action>,
}

impl Session {
    fn run<W: Write>(self, out: &mut W) -> anyhow::Result<()> {
        let date = match self.date {
            Some(d) => d,
            None => OffsetDateTime::now_local()
                .context("failed to determine local date")?
                .date(),
        };
        let config = match self.days_on_page {
            Some(n) => PageConfig::new(n)?,
            None => PageConfig::default(),
        }
        .with_week_start(self.week_start);
        let mut input = PickerInput {
            range: DateRange::new(self.start, self.end).context("invalid initial range")?,
            bounds: DateBounds::new(self.min, self.max).context("invalid bounds")?,
        };
        let mut picker = RangePicker::new(date).with_config(config);
        for action in self.actions {
            match action {
                Action::NextPage => {
                    if !picker.has_next_page(&input) {
                        bail!("cannot page past {}", picker.current_date());
                    }
                    picker.switch_to_next_page()?;
                }
                Action::PrevPage => {
                    if !picker.has_prev_page(&input) {
                        bail!("cannot page before {}", picker.current_date());
                    }
                    picker.switch_to_prev_page()?;
                }
                Action::Click(position) => {
                    let mut latest = input.range;
                    picker
                        .click(&input, position, &mut |range: DateRange| latest = range)
                        .with_context(|| format!("failed to click position {position}"))?;
                    input.range = latest;
                    writeln!(out, "click {position}: {}", input.range)?;
                }
            }
        }
        let view = picker.view(&input)?;
        write_report(out, &view, config.week_start())?;
        Ok(())
    }
}

fn parse_date(value: OsString) -> Result<Date, lexopt::Error> {
    let value = value.string()?;
    match Date::parse(&value, &YMD_FMT) {
        Ok(d) => Ok(d),
        Err(e) => Err(lexopt::Error::ParsingFailed {
            value,
            error: Box::new(e),
        }),
    }
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

fn main() -> anyhow::Result<()> {
    Command::from_parser(Parser::from_env())?.run()
}
