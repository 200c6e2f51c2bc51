use anyhow::Result;

use scrolldeck_core::{Deck, Direction, SectionId};

pub fn run() -> Result<()> {
    let deck = Deck::standard();

    println!("Sections ({}):\n", SectionId::ALL.len());

    for id in SectionId::ALL {
        let spec = deck.spec(id);
        let steps = match spec.sub_progress {
            Some(sub) => format!(
                ", steps {}..={} (overflow {})",
                sub.min, sub.max, sub.overflow_threshold
            ),
            None => String::new(),
        };
        println!(
            "  {:2}. {} (debounce {}ms{})",
            id.ordinal() + 1,
            id.name(),
            spec.debounce.as_millis(),
            steps
        );
        if let Some(next) = deck.neighbor(id, Direction::Forward) {
            println!("        -> {} via {}", next.name(), deck.strategy(id, next));
        }
    }

    println!("\nStart anywhere with:");
    println!("  scrolldeck run --start <name>");

    Ok(())
}
