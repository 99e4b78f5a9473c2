use crate::cycle::duration::format_sleep_duration;
use crate::error::ScheduleError;
use chrono::{Duration, NaiveTime};
use clap::ValueEnum;

/// Length of one sleep cycle.
pub const CYCLE_MINUTES: u32 = 90;

/// Wind-down lead time before the bedtime proper.
pub const WIND_DOWN_MINUTES: i64 = 15;

/// Which end of the night is derived. `Bedtime` means the input is a
/// wake-up time; `WakeUp` means the input is a bedtime.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Mode {
    Bedtime,
    WakeUp,
}

/// Number of sleep cycles for a night. Only the three recommended counts
/// are representable; anything else is rejected at the boundary.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Cycles {
    #[value(name = "4")]
    Four,
    #[value(name = "5")]
    Five,
    #[value(name = "6")]
    Six,
}

impl Cycles {
    pub fn count(self) -> u32 {
        match self {
            Cycles::Four => 4,
            Cycles::Five => 5,
            Cycles::Six => 6,
        }
    }

    pub fn total_minutes(self) -> u32 {
        self.count() * CYCLE_MINUTES
    }

    pub fn from_count(count: u8) -> Result<Self, ScheduleError> {
        match count {
            4 => Ok(Cycles::Four),
            5 => Ok(Cycles::Five),
            6 => Ok(Cycles::Six),
            other => Err(ScheduleError::InvalidCycles(other)),
        }
    }

    /// Menu label, e.g. "5 cycles (7h 30min)".
    pub fn label(self) -> String {
        format!(
            "{} cycles ({})",
            self.count(),
            format_sleep_duration(self.total_minutes())
        )
    }

    pub fn description(self) -> &'static str {
        match self {
            Cycles::Four => "minimum recommended",
            Cycles::Five => "ideal for most adults",
            Cycles::Six => "extended sleep",
        }
    }
}

/// A computed night of sleep. Derived on demand, never stored.
#[derive(Clone, Copy, Debug)]
pub struct SleepPlan {
    pub bedtime: NaiveTime,
    pub wakeup: NaiveTime,
    pub wind_down: NaiveTime,
    pub total_minutes: u32,
}

impl SleepPlan {
    /// Derive the full schedule from one fixed time. Wall-clock arithmetic
    /// wraps around midnight; a result earlier on the clock than the input
    /// simply lands on the other side of it.
    pub fn compute(mode: Mode, input: NaiveTime, cycles: Cycles) -> Self {
        let asleep = Duration::minutes(cycles.total_minutes() as i64);

        let (bedtime, wakeup) = match mode {
            Mode::Bedtime => (input - asleep, input),
            Mode::WakeUp => (input, input + asleep),
        };

        SleepPlan {
            bedtime,
            wakeup,
            wind_down: bedtime - Duration::minutes(WIND_DOWN_MINUTES),
            total_minutes: cycles.total_minutes(),
        }
    }

    pub fn total_sleep(&self) -> String {
        format_sleep_duration(self.total_minutes)
    }
}
