use std::{
    fmt::Display,
    ops::{Add, AddAssign, Sub},
};

use chrono::{Local, Timelike};

const SECONDS_PER_DAY: u32 = 24 * 60 * 60;

/// Seconds since midnight of the planned day. Values past 24:00:00 are kept
/// as-is so a late schedule reads as "25:10:00" rather than wrapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Time(u32);

impl From<u32> for Time {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Sub<Time> for Time {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Self::Output {
        Duration(self.0.saturating_sub(rhs.0))
    }
}

impl Add<Duration> for Time {
    type Output = Self;

    fn add(self, rhs: Duration) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign<Duration> for Time {
    fn add_assign(&mut self, rhs: Duration) {
        self.0 += rhs.0
    }
}

impl Display for Time {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_hms_string())
    }
}

impl Time {
    pub fn now() -> Self {
        let now = Local::now();
        Self(now.num_seconds_from_midnight())
    }

    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    /// `None` when the time does not fit in a `u32` of seconds.
    pub const fn from_hm(hours: u32, minutes: u32) -> Option<Self> {
        let Some(hours) = hours.checked_mul(3600) else {
            return None;
        };
        let Some(minutes) = minutes.checked_mul(60) else {
            return None;
        };
        match hours.checked_add(minutes) {
            Some(secs) => Some(Self(secs)),
            None => None,
        }
    }

    pub const fn checked_add(self, rhs: Duration) -> Option<Self> {
        match self.0.checked_add(rhs.0) {
            Some(secs) => Some(Self(secs)),
            None => None,
        }
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    /// True once the time has rolled past midnight of the planned day.
    pub const fn is_next_day(&self) -> bool {
        self.0 >= SECONDS_PER_DAY
    }

    pub fn to_hms_string(&self) -> String {
        let h = self.0 / 3600;
        let m = (self.0 % 3600) / 60;
        let s = self.0 % 60;
        format!("{:02}:{:02}:{:02}", h, m, s)
    }

    pub fn from_hms(time: &str) -> Option<Self> {
        const HOUR_TO_SEC: u32 = 60 * 60;
        const MINUTE_TO_SEC: u32 = 60;
        let mut split = time.split(':');
        let hours: u32 = split.next()?.parse().ok()?;
        let minutes: u32 = split.next()?.parse().ok()?;
        let seconds: u32 = split.next()?.parse().ok()?;
        if split.next().is_some() || minutes >= 60 || seconds >= 60 {
            return None;
        }
        let seconds = hours
            .checked_mul(HOUR_TO_SEC)?
            .checked_add(minutes * MINUTE_TO_SEC)?
            .checked_add(seconds)?;
        Some(Self(seconds))
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Duration(u32);

impl From<u32> for Duration {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl Duration {
    pub const fn from_seconds(secs: u32) -> Self {
        Self(secs)
    }

    pub const fn from_minutes(minutes: u32) -> Option<Self> {
        match minutes.checked_mul(60) {
            Some(secs) => Some(Self(secs)),
            None => None,
        }
    }

    pub const fn from_hours(hours: u32) -> Option<Self> {
        match hours.checked_mul(60 * 60) {
            Some(secs) => Some(Self(secs)),
            None => None,
        }
    }

    pub const fn as_seconds(&self) -> u32 {
        self.0
    }

    pub const fn as_minutes(&self) -> u32 {
        self.0 / 60
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self(self.0 + rhs.0)
    }
}

impl AddAssign for Duration {
    fn add_assign(&mut self, rhs: Self) {
        self.0 += rhs.0
    }
}

#[test]
fn parse_unparse_1() {
    let time = "00:00:00";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_unparse_2() {
    let time = "09:30:00";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string())
}

#[test]
fn parse_unparse_3() {
    let time = "25:10:05";
    let stime = Time::from_hms(time).unwrap();
    assert_eq!(time, stime.to_hms_string());
    assert!(stime.is_next_day())
}

#[test]
fn valid_time_test() {
    assert_eq!(Time::from_hms("01:01:30").unwrap().as_seconds(), 3690);
    assert_eq!(Time::from_hm(9, 0), Time::from_hms("09:00:00"));
}

#[test]
fn invalid_time_test_1() {
    assert!(Time::from_hms("00:00:0a").is_none())
}

#[test]
fn invalid_time_test_2() {
    assert!(Time::from_hms("00:00").is_none())
}

#[test]
fn invalid_time_test_3() {
    assert!(Time::from_hms("10:75:00").is_none());
    assert!(Time::from_hms("10:00:00:00").is_none())
}

#[test]
fn time_arithmetic_test() {
    let start = Time::from_hm(9, 0).unwrap();
    let end = start + Duration::from_minutes(90).unwrap();
    assert_eq!(end.to_hms_string(), "10:30:00");
    assert_eq!((end - start).as_minutes(), 90);
    assert_eq!((start - end).as_seconds(), 0);
}

#[test]
fn overflowing_time_test() {
    assert!(Time::from_hms("4000000:00:00").is_none());
    assert!(Time::from_hms("1193046:28:16").is_none());
    assert_eq!(
        Time::from_hms("1193046:28:15").map(|t| t.as_seconds()),
        Some(u32::MAX)
    );
    assert!(Time::from_hm(u32::MAX, 0).is_none());
    assert!(Time::from_hm(1_193_046, 60).is_none());
}

#[test]
fn overflowing_duration_test() {
    assert!(Duration::from_minutes(4_000_000_000).is_none());
    assert!(Duration::from_hours(1_193_047).is_none());
    assert_eq!(Duration::from_hours(2), Duration::from_minutes(120));
    let late = Time::from_seconds(u32::MAX - 30);
    assert!(late.checked_add(Duration::from_seconds(31)).is_none());
    assert_eq!(
        late.checked_add(Duration::from_seconds(30)),
        Some(Time::from_seconds(u32::MAX))
    );
}
