use crate::config::Config;
use crate::cycle::clock::parse_wall_clock;
use crate::cycle::schedule::{Cycles, Mode, SleepPlan};
use anyhow::Result;
use std::io::{self, Write};

/// Interactive planner: mode, time and cycle count are asked one after the
/// other, then the schedule is printed. 'q' at any prompt goes back to the
/// shell without computing anything.
pub fn plan(config: &Config) -> Result<()> {
    println!("\n🌙 Sleep Cycle Planner");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Sleep happens in cycles of roughly 90 minutes. Waking up at the");
    println!("end of a cycle, rather than in the middle of one, is what leaves");
    println!("you feeling rested.");

    println!();
    println!("What do you want to calculate?");
    println!("  [1] Bedtime (I know when I have to wake up)");
    println!("  [2] Wake-up time (I know when I go to bed)");
    println!("  [q] Back");
    println!();

    let choice = prompt("Your choice: ")?;
    let mode = match choice.as_str() {
        "1" => Mode::Bedtime,
        "2" => Mode::WakeUp,
        "q" | "Q" => {
            println!("\nCancelled.");
            return Ok(());
        }
        _ => {
            println!("\n❌ Invalid choice. Cancelled.");
            return Ok(());
        }
    };

    let question = match mode {
        Mode::Bedtime => "What time do you need to wake up?",
        Mode::WakeUp => "What time are you going to bed?",
    };
    let answer = prompt(&format!("{} [{}]: ", question, config.defaults.time))?;
    if answer == "q" || answer == "Q" {
        println!("\nCancelled.");
        return Ok(());
    }
    let raw_time = if answer.is_empty() {
        config.defaults.time.clone()
    } else {
        answer
    };
    let time = match parse_wall_clock(&raw_time) {
        Ok(time) => time,
        Err(err) => {
            println!("\n❌ {}. Cancelled.", err);
            return Ok(());
        }
    };

    println!();
    println!("How many sleep cycles?");
    for (i, option) in [Cycles::Four, Cycles::Five, Cycles::Six].iter().enumerate() {
        println!("  [{}] {:<22} {}", i + 1, option.label(), option.description());
    }
    println!();

    let default_cycles = config.defaults.cycles()?;
    let choice = prompt(&format!("Your choice [{}]: ", default_cycles.count()))?;
    let cycles = match choice.as_str() {
        "" => default_cycles,
        "1" => Cycles::Four,
        "2" => Cycles::Five,
        "3" => Cycles::Six,
        "q" | "Q" => {
            println!("\nCancelled.");
            return Ok(());
        }
        _ => {
            println!("\n❌ Invalid choice. Cancelled.");
            return Ok(());
        }
    };

    let plan = SleepPlan::compute(mode, time, cycles);
    super::plan::render_text(&plan, cycles);

    Ok(())
}

fn prompt(label: &str) -> Result<String> {
    print!("{}", label);
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;
    Ok(input.trim().to_string())
}
