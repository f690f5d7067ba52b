//! Walk a serie, its sets and the value lists against the live TCGdex API.
//!
//! Run with: cargo run --example browse_set -- swsh

use tcgdex::{Language, TcgdexClient};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> tcgdex::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let serie_id = std::env::args().nth(1).unwrap_or_else(|| "swsh".to_string());
    let client = TcgdexClient::builder().language(Language::En).build()?;

    println!("=== Serie {serie_id} ===");
    let serie = client.series().get(&serie_id).await?;
    println!("{} - {} sets", serie.name, serie.sets.len());
    for set in &serie.sets {
        println!(
            "  {:<10} {:<28} {:>4} cards",
            set.id, set.name, set.card_count.total
        );
    }

    if let Some(brief) = serie.sets.first() {
        let set = client.sets().get(&brief.id).await?;
        println!(
            "\n{} released {}, standard legal: {}",
            set.name, set.release_date, set.legal.standard
        );
        if let Some(card) = set.cards.first() {
            let card = client.sets().card(&set.id, &card.local_id).await?;
            println!("First card: {} ({})", card.name, card.id);
        }
    }

    println!("\n=== Value lists ===");
    println!("Types:      {:?}", client.lists().types().await?);
    println!("Rarities:   {:?}", client.lists().rarities().await?);
    println!("Retreats:   {:?}", client.lists().retreats().await?);
    println!("Categories: {:?}", client.lists().categories().await?);
    println!("Stages:     {:?}", client.lists().stages().await?);
    println!("Suffixes:   {:?}", client.lists().suffixes().await?);
    println!("Variants:   {:?}", client.lists().variants().await?);
    println!("Illustrators: {}", client.lists().illustrators().await?.len());

    Ok(())
}
