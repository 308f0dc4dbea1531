//! Map link example for wisata-rs
//!
//! Shows which embed URL, external link and caption each kind of card
//! resolves to, and how a card list is split into columns with overview
//! maps.

use wisata_rs::prelude::*;

fn main() -> Result<()> {
    println!("=== wisata-rs Map Links Example ===\n");

    let config = EnhancerConfig::default();
    let maps = &config.maps;

    let index = SearchIndex::build([
        (
            "kuta",
            CardSource::new("Pantai Kuta", "Bali").with_coordinates("-8.7184", "115.1686"),
        ),
        (
            "toba",
            CardSource::new("Danau Toba", "Sumatera Utara").with_place_id("ChIJ-toba"),
        ),
        ("borobudur", CardSource::new("Candi Borobudur", "Jawa Tengah")),
        ("lone-lat", CardSource {
            lat: Some("-2.5".into()),
            ..CardSource::new("Pulau Misterius", "")
        }),
    ]);

    // Example 1: one modal target per card
    println!("--- Example 1: modal targets ---");
    for card in index.records() {
        let target = maps.target_for(card, &config.messages);
        println!("{} ({:?})", card.element, card.location);
        println!("  embed:   {}", target.embed_url);
        println!("  open:    {}", target.external_url);
        println!("  caption: {}", target.caption);
    }
    println!("  no card: {}", maps.fallback_embed());
    println!();

    // Example 2: round-robin columns with overview maps
    println!("--- Example 2: three columns ---");
    let layout = plan_columns(index.records(), 3, maps, &config.messages)?;
    for column in &layout.columns {
        println!(
            "column {}: {:?} | {} -> {}",
            column.index, column.cards, column.map.caption, column.map.embed_url
        );
    }
    println!();

    // Example 3: zero columns is a caller error
    println!("--- Example 3: invalid column count ---");
    match plan_columns(index.records(), 0, maps, &config.messages) {
        Ok(_) => println!("  unexpectedly accepted"),
        Err(e) => println!("  rejected: {e}"),
    }

    Ok(())
}
