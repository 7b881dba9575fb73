//! Basic leveled logger usage
//!
//! Demonstrates thresholds, per-slot prefixes and flags on the primary and
//! error loggers.
//!
//! Run with: cargo run --example basic_usage

use leveled_logger::emit;
use leveled_logger::prelude::*;

fn main() -> Result<()> {
    println!("=== Leveled Logger - Basic Usage Example ===\n");

    let mut ctx = LoggerContext::stdio();

    // Slot 0 carries the conventional date/time decoration
    ctx.out.set_flags(0, Flags::STD)?;
    ctx.out.set_prefix(2, "[verbose] ")?;
    ctx.out.set_flags(2, Flags::TIME | Flags::SHORT_FILE)?;

    println!("1. Default threshold (1): only slot 0 is written");
    ctx.out.emit(0, &[&"This is a slot 0 message"])?;
    ctx.out.emit(2, &[&"This slot 2 message is hidden"])?;

    println!("\n2. Threshold raised to 3: slots 0, 1 and 2 are written");
    ctx.out.set_threshold(3);
    ctx.out.emit_line(1, &[&"answer", &42])?;
    emit!(ctx.out, 2, "cache hit ratio {:.2}", 0.973)?;

    println!("\n3. Error stream");
    ctx.err.set_prefix(0, "error: ")?;
    ctx.err.emit_formatted(0, "cannot open {}", &[&"/tmp/missing.conf"])?;

    println!("\n4. Out-of-range slot");
    if let Err(e) = ctx.out.emit(10, &[&"never written"]) {
        println!("   {}", e);
    }

    println!("\n=== Example completed successfully! ===");

    Ok(())
}
