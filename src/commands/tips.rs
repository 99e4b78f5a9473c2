use anyhow::Result;

/// Print the sleep hygiene primer shown alongside the planner.
pub fn tips() -> Result<()> {
    println!("\n💤 How It Works");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("Sleep happens in cycles of roughly 90 minutes. Waking up at the");
    println!("end of a cycle, rather than in the middle of one, is what leaves");
    println!("you feeling rested.");
    println!();
    println!("💡 Tips for Better Sleep");
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("  • Keep a consistent schedule, weekends included");
    println!("  • Avoid screens for an hour before bed");
    println!("  • Keep the bedroom dark, quiet and cool");
    println!("  • Practice a relaxation routine before sleeping");

    Ok(())
}
