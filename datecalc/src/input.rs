use chrono::{Datelike, NaiveDateTime, Timelike};
use biguint::BigUint;
use biguint::error::Result;
use crate::calendar;
use crate::error::InputError;

/// A calendar date and wall clock time.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub struct Timestamp {
  pub year:   u32,
  pub month:  u32,
  pub day:    u32,
  pub hour:   u32,
  pub minute: u32,
  pub second: u32
}

/// Where "now" comes from.
pub trait Clock {
  fn now(&self) -> NaiveDateTime;
}

/// The local time of the machine.
pub struct LocalClock;

impl Clock for LocalClock {
  fn now(&self) -> NaiveDateTime { chrono::Local::now().naive_local() }
}

/// What a line typed at a prompt asks for.
#[derive(Clone,Copy,Debug,PartialEq,Eq)]
pub enum Command {
  Exit,
  At(Timestamp)
}

fn is_letter(line: &str, c: char) -> bool {
  let mut it = line.chars();
  matches!((it.next(), it.next()), (Some(x), None) if x.eq_ignore_ascii_case(&c))
}

/// Interpret a line: `x` to exit, `t` for the current time,
/// or `YYYY/MM/DD` with an optional `/HH/MM/SS`.
pub fn parse_line(line: &str, clock: &impl Clock) -> Result<Command, InputError> {
  let line = line.trim();
  if is_letter(line, 'x') { return Ok(Command::Exit) }
  if is_letter(line, 't') { return Timestamp::from_naive(clock.now()).map(Command::At) }
  Timestamp::parse(line).map(Command::At)
}

static MIDNIGHT: [i64; 3] = [0, 0, 0];

impl Timestamp {

  pub fn parse(text: &str) -> Result<Timestamp, InputError> {
    let fields = text.split('/')
                     .map(|f| f.trim().parse::<i64>())
                     .collect::<Result<Vec<_>, _>>()
                     .map_err(|_| InputError::Shape)?;

    let (date, time) = match fields.len() {
      3 => (&fields[..], &MIDNIGHT[..]),
      6 => fields.split_at(3),
      _ => return Err(InputError::Shape)
    };

    let field = |x: i64, lo: i64, hi: i64| {
      if x < lo || x > hi { Err(InputError::Range) } else { Ok(x as u32) }
    };

    Ok(Timestamp {
      year:   field(date[0], 1, u32::MAX as i64)?,
      month:  field(date[1], 1, 12)?,
      day:    field(date[2], 1, 31)?,
      hour:   field(time[0], 0, 23)?,
      minute: field(time[1], 0, 59)?,
      second: field(time[2], 0, 59)?
    })
  }

  pub fn from_naive(t: NaiveDateTime) -> Result<Timestamp, InputError> {
    let year = u32::try_from(t.year()).ok()
                                      .filter(|&y| y > 0)
                                      .ok_or(InputError::Range)?;
    Ok(Timestamp {
      year,
      month:  t.month(),
      day:    t.day(),
      hour:   t.hour(),
      minute: t.minute(),
      second: t.second()
    })
  }

  /// Full days since 0001-01-01.
  pub fn days(&self) -> u64 {
    let yday = calendar::day_of_year(self.year, self.month - 1, self.day);
    calendar::days_since_epoch(self.year, yday)
  }

  /// Seconds since 0001-01-01T00:00:00.
  pub fn seconds(&self) -> Result<BigUint> {
    calendar::seconds_since_epoch(self.days(), self.hour, self.minute, self.second)
  }
}


#[cfg(test)]
mod test {
  use super::*;
  use chrono::NaiveDate;

  struct Fixed(NaiveDateTime);

  impl Clock for Fixed {
    fn now(&self) -> NaiveDateTime { self.0 }
  }

  fn fixed() -> Fixed {
    Fixed(NaiveDate::from_ymd_opt(2024, 3, 1).unwrap()
            .and_hms_opt(12, 30, 15).unwrap())
  }

  #[test]
  fn date_only() {
    let t = Timestamp::parse("2024/03/01").unwrap();
    assert_eq!(t, Timestamp { year: 2024, month: 3, day: 1,
                              hour: 0, minute: 0, second: 0 });
    assert_eq!(t.days(), 738945);
  }

  #[test]
  fn date_and_time() {
    let t = Timestamp::parse("2024/3/1/12/30/15").unwrap();
    assert_eq!(t.seconds().unwrap().to_string(), "63844893015");
  }

  #[test]
  fn bad_shapes() {
    assert_eq!(Timestamp::parse(""), Err(InputError::Shape));
    assert_eq!(Timestamp::parse("2024/03"), Err(InputError::Shape));
    assert_eq!(Timestamp::parse("2024/03/01/10"), Err(InputError::Shape));
    assert_eq!(Timestamp::parse("2024/xx/01"), Err(InputError::Shape));
  }

  #[test]
  fn out_of_range() {
    assert_eq!(Timestamp::parse("2024/13/01"), Err(InputError::Range));
    assert_eq!(Timestamp::parse("2024/00/01"), Err(InputError::Range));
    assert_eq!(Timestamp::parse("2024/01/32"), Err(InputError::Range));
    assert_eq!(Timestamp::parse("2024/01/01/24/00/00"), Err(InputError::Range));
    assert_eq!(Timestamp::parse("2024/01/01/00/60/00"), Err(InputError::Range));
    assert_eq!(Timestamp::parse("0/01/01"), Err(InputError::Range));
  }

  #[test]
  fn commands() {
    let clock = fixed();
    assert_eq!(parse_line("x", &clock), Ok(Command::Exit));
    assert_eq!(parse_line(" X \n", &clock), Ok(Command::Exit));
    assert_eq!(parse_line("t", &clock),
               Ok(Command::At(Timestamp::parse("2024/03/01/12/30/15").unwrap())));
    assert_eq!(parse_line("xx", &clock), Err(InputError::Shape));
  }
}
