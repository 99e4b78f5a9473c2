use crate::OutputFormat;
use crate::config::Config;
use crate::cycle::clock::{format_wall_clock, parse_wall_clock};
use crate::cycle::schedule::{Cycles, Mode, SleepPlan};
use anyhow::{Context, Result};
use serde::Serialize;

/// Compute the bedtime for a target wake-up time
pub fn bedtime(
    config: &Config,
    wake: &str,
    cycles: Option<Cycles>,
    format: OutputFormat,
) -> Result<()> {
    let wake = parse_wall_clock(wake)?;
    let cycles = resolve_cycles(config, cycles)?;

    let plan = SleepPlan::compute(Mode::Bedtime, wake, cycles);
    render(&plan, cycles, format)
}

/// Compute the wake-up time for a target bedtime
pub fn wakeup(
    config: &Config,
    bed: &str,
    cycles: Option<Cycles>,
    format: OutputFormat,
) -> Result<()> {
    let bed = parse_wall_clock(bed)?;
    let cycles = resolve_cycles(config, cycles)?;

    let plan = SleepPlan::compute(Mode::WakeUp, bed, cycles);
    render(&plan, cycles, format)
}

fn resolve_cycles(config: &Config, cycles: Option<Cycles>) -> Result<Cycles> {
    match cycles {
        Some(cycles) => Ok(cycles),
        None => config.defaults.cycles(),
    }
}

#[derive(Serialize)]
struct PlanReport {
    bedtime: String,
    wakeup: String,
    wind_down: String,
    total_sleep: String,
    cycles: u32,
}

impl PlanReport {
    fn new(plan: &SleepPlan, cycles: Cycles) -> Self {
        Self {
            bedtime: format_wall_clock(plan.bedtime),
            wakeup: format_wall_clock(plan.wakeup),
            wind_down: format_wall_clock(plan.wind_down),
            total_sleep: plan.total_sleep(),
            cycles: cycles.count(),
        }
    }
}

pub(crate) fn render(plan: &SleepPlan, cycles: Cycles, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Text => {
            render_text(plan, cycles);
            Ok(())
        }
        OutputFormat::Json => {
            let report = PlanReport::new(plan, cycles);
            let json =
                serde_json::to_string_pretty(&report).context("Failed to serialize plan")?;
            println!("{}", json);
            Ok(())
        }
    }
}

pub(crate) fn render_text(plan: &SleepPlan, cycles: Cycles) {
    let bedtime = format_wall_clock(plan.bedtime);
    let wakeup = format_wall_clock(plan.wakeup);
    let wind_down = format_wall_clock(plan.wind_down);

    println!("\n🌙 Your Ideal Sleep Schedule");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  Go to bed:    {}", bedtime);
    println!("  Wake up:      {}", wakeup);
    println!(
        "  Total sleep:  {} ({} cycles)",
        plan.total_sleep(),
        cycles.count()
    );
    println!();
    println!(
        "💡 Head to bed at {} to wind down and fall asleep naturally by {}.",
        wind_down, bedtime
    );
}
