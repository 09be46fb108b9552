//! The prompt loop: read two dates, report on each, then on the difference.

use std::io::{BufRead, Write};
use tracing::{debug, info};
use biguint::BigUint;
use crate::calendar::Weekday;
use crate::error::{InputError, SessionError};
use crate::input::{self, Clock, Command, Timestamp};

const WELCOME: &str =
  "Welcome to this proleptic Gregorian calendar date calculator!";
const PROMPT_FIRST: &str =
  "Enter first date and time (YYYY/MM/DD/HH/MM/SS or YYYY/MM/DD or 'x' to exit): ";
const PROMPT_SECOND: &str =
  "Enter second date and time (YYYY/MM/DD/HH/MM/SS or YYYY/MM/DD): ";

/// A point in time, counted from 0001-01-01T00:00:00.
pub struct Moment {
  pub days:    u64,
  pub seconds: BigUint
}

impl Moment {
  pub fn at(t: &Timestamp) -> Result<Moment, SessionError> {
    Ok(Moment { days: t.days(), seconds: t.seconds()? })
  }
}

/// What happened when asking for one date.
enum Reply {
  Moment(Moment),
  Retry,
  Exit
}

pub struct Session<R, W, C> {
  input:  R,
  output: W,
  clock:  C,
  once:   bool
}

impl<R: BufRead, W: Write, C: Clock> Session<R, W, C> {

  pub fn new(input: R, output: W, clock: C) -> Self {
    Session { input, output, clock, once: false }
  }

  /// Stop after the first pair of dates.
  pub fn once(mut self, once: bool) -> Self {
    self.once = once;
    self
  }

  pub fn into_output(self) -> W { self.output }

  /// Run until `x` is entered or the input ends.
  pub fn run(&mut self) -> Result<(), SessionError> {
    writeln!(self.output, "{WELCOME}\n")?;

    loop {
      let first = match self.ask(PROMPT_FIRST, true)? {
        Reply::Moment(m) => m,
        Reply::Retry     => continue,
        Reply::Exit      => break
      };

      writeln!(self.output)?;
      let second = match self.ask(PROMPT_SECOND, false)? {
        Reply::Moment(m) => m,
        Reply::Retry     => continue,
        Reply::Exit      => break
      };

      writeln!(self.output)?;
      self.report_difference(&first, &second)?;
      writeln!(self.output, "\n")?;

      if self.once { break }
    }

    info!("session finished");
    Ok(())
  }

  fn read_line(&mut self) -> Result<Option<String>, SessionError> {
    let mut line = String::new();
    if self.input.read_line(&mut line)? == 0 { return Ok(None) }
    Ok(Some(line))
  }

  fn ask(&mut self, prompt: &str, can_exit: bool) -> Result<Reply, SessionError> {
    write!(self.output, "{prompt}")?;
    self.output.flush()?;

    let Some(line) = self.read_line()? else {
      debug!("input closed");
      return Ok(Reply::Exit)
    };

    let stamp = match input::parse_line(&line, &self.clock) {
      Ok(Command::At(t))             => t,
      Ok(Command::Exit) if can_exit  => return Ok(Reply::Exit),
      Ok(Command::Exit)              => {
        writeln!(self.output, "{}", InputError::Shape)?;
        return Ok(Reply::Retry)
      }
      Err(err) => {
        debug!(%err, line = line.trim(), "rejected input");
        writeln!(self.output, "{err}")?;
        return Ok(Reply::Retry)
      }
    };

    let moment = Moment::at(&stamp)?;
    writeln!(self.output, "Full days since year 1: {}", moment.days)?;
    writeln!(self.output, "Day of the week: {}", Weekday::from_days(moment.days))?;
    writeln!(self.output, "Seconds since year 1: {}", moment.seconds)?;
    Ok(Reply::Moment(moment))
  }

  fn report_difference(&mut self, a: &Moment, b: &Moment)
    -> Result<(), SessionError> {
    let days = a.days.abs_diff(b.days);
    let secs =
      if a.seconds.greater_than(&b.seconds) {
        a.seconds.try_sub(&b.seconds)?
      } else {
        b.seconds.try_sub(&a.seconds)?
      };

    writeln!(self.output, "Difference in days: {days}")?;
    writeln!(self.output, "Difference in years (estimate): {:.6}",
             days as f64 / 365.0)?;
    writeln!(self.output, "Difference in seconds: {secs}")?;
    Ok(())
  }
}
