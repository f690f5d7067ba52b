//! Search cards by name against the live TCGdex API.
//!
//! Run with: cargo run --example search_cards -- pikachu
//!
//! Set `RUST_LOG=tcgdex=debug` to see every request.

use tcgdex::{CardQueryOptions, TcgdexClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> tcgdex::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let name = std::env::args().nth(1).unwrap_or_else(|| "pikachu".to_string());
    let client = TcgdexClient::new()?;

    let first_page = CardQueryOptions::new()
        .name(name.as_str())
        .page(1)
        .items_per_page(10);
    let briefs = client.cards().search(&first_page).await?;
    println!("First {} results for {:?}:", briefs.len(), name);

    for brief in &briefs {
        println!("  {:<16} {}", brief.id, brief.name);
    }

    if let Some(brief) = briefs.first() {
        let card = client.cards().get(&brief.id).await?;
        println!(
            "\n{} ({}) from {} - {} HP, rarity {}",
            card.name,
            card.category,
            card.set.name,
            card.hp.map_or("-".to_string(), |hp| hp.to_string()),
            card.rarity
        );
        for attack in &card.attacks {
            println!("  {} {:?}", attack.name, attack.damage);
        }
    }

    Ok(())
}
