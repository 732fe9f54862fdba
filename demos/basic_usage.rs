// ============================================================================
// Basic Usage Example
// ============================================================================

use numwords_rw::prelude::*;
use rust_decimal::Decimal;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=numwords_rw=trace shows every decomposition
    tracing_subscriber::fmt::init();

    println!("=== Kinyarwanda Number Words ===\n");

    let speller = NumberSpellerBuilder::new().build()?;
    println!(
        "Created speller ({} decomposer, {} table words)\n",
        speller.decomposer_name(),
        speller.word_table().len()
    );

    println!("Cardinals:");
    for value in [0i64, 7, 28, 203, 2385, 4_300_000, -3] {
        println!("  {:>10} -> {}", value, speller.to_cardinal(value)?);
    }
    for value in [Decimal::new(1742, 2), Decimal::new(105, 2)] {
        println!("  {:>10} -> {}", value, speller.to_cardinal(value)?);
    }

    println!("\nOrdinals:");
    for value in [1i64, 8, 12, 35, 100] {
        println!(
            "  {:>10} -> {} ({})",
            value,
            speller.to_ordinal(value)?,
            speller.to_ordinal_num(value)?
        );
    }

    println!("\nYears:");
    for value in [1066i64, 1900, 1905, 1990, 2000, 2021] {
        println!("  {:>10} -> {}", value, speller.to_year(value, None)?);
    }
    println!("  {:>10} -> {}", -500, speller.to_year(-500, None)?);

    println!("\nCurrency:");
    for (amount, code) in [
        (Decimal::new(100, 2), "EUR"),
        (Decimal::new(201, 2), "USD"),
        (Decimal::new(1226, 2), "RWF"),
    ] {
        println!("  {:>6} {} -> {}", amount, code, speller.to_currency(amount, code)?);
    }

    match speller.to_currency(5, "XYZ") {
        Ok(text) => println!("  unexpected: {}", text),
        Err(e) => println!("  XYZ -> error: {}", e),
    }

    println!("\nTitle case:");
    let text = speller.spell(Decimal::new(55, 1), Representation::Cardinal)?;
    println!("  {} -> {}", text, speller.title(&text));

    Ok(())
}
