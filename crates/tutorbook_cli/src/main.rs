//! Interactive TutorBook shell.
//!
//! Reads one command per line from stdin, prints feedback and the refreshed
//! list, and stops on `exit` or end of input.

mod config;

use clap::Parser;
use config::CliArgs;
use log::{error, info};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;
use tutorbook_core::{init_logging, DisplayedList, RecordStorage, Session, SqliteRecordStorage};

const WELCOME: &str = "Welcome to TutorBook! Type `help` to see all commands.";

fn main() -> ExitCode {
    let config = match CliArgs::parse().resolve() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("error: cannot resolve the working directory: {err}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(err) = init_logging(&config.log_level, &config.log_dir) {
        eprintln!("warning: file logging is disabled: {err}");
    }

    let storage = match SqliteRecordStorage::open(&config.data_file) {
        Ok(storage) => storage,
        Err(err) => {
            error!(
                "event=cli_start module=cli status=error error_code={}",
                err.code()
            );
            eprintln!(
                "error: cannot open data file `{}`: {err}",
                config.data_file.display()
            );
            return ExitCode::FAILURE;
        }
    };

    let mut session = Session::start(storage);
    let stdin = io::stdin();
    let stdout = io::stdout();
    match run(&mut session, stdin.lock(), stdout.lock()) {
        Ok(()) => {
            info!("event=cli_exit module=cli status=ok");
            ExitCode::SUCCESS
        }
        Err(err) => {
            error!("event=cli_exit module=cli status=error error={err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run<S: RecordStorage>(
    session: &mut Session<S>,
    mut input: impl BufRead,
    mut output: impl Write,
) -> io::Result<()> {
    writeln!(output, "{WELCOME}")?;
    if let Some(warning) = session.load_warning() {
        writeln!(output, "Warning: {warning}")?;
    }
    render(session, DisplayedList::Students, &mut output)?;

    let mut line = String::new();
    loop {
        write!(output, "> ")?;
        output.flush()?;

        line.clear();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        match session.execute(&line) {
            Ok(reply) => {
                writeln!(output, "{}", reply.result.feedback)?;
                if let Some(warning) = &reply.storage_warning {
                    writeln!(output, "Warning: {warning}")?;
                }
                if let Some(list) = reply.result.refresh {
                    render(session, list, &mut output)?;
                }
                if reply.result.exit {
                    return Ok(());
                }
            }
            Err(err) => writeln!(output, "{err}")?,
        }
    }
}

fn render<S: RecordStorage>(
    session: &Session<S>,
    list: DisplayedList,
    output: &mut impl Write,
) -> io::Result<()> {
    match list {
        DisplayedList::Students => {
            for (position, student) in (1..).zip(session.store().filtered_students()) {
                writeln!(output, "{position}. {student}")?;
                for assignment in student.assignments().iter() {
                    writeln!(output, "    {assignment}")?;
                }
            }
        }
        DisplayedList::Lessons => {
            for (position, lesson) in (1..).zip(session.store().filtered_lessons()) {
                writeln!(output, "{position}. {lesson}")?;
            }
        }
    }
    Ok(())
}
