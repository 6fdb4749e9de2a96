use std::collections::BTreeMap;

use rswiki_api::prelude::*;

fn main() -> anyhow::Result<()> {
    let client = Client::new(ClientConfig::new("rswiki-api latest prices demo"));

    let query = realtime::latest(&client, Game::Osrs, None)?;
    let prices = query.content_as::<BTreeMap<String, LatestPrice>>()?;

    for (id, price) in &prices {
        println!(
            "ID: {id}, high: {}, low: {}",
            price.high.map(|high| high.to_string()).unwrap_or_else(|| String::from("-")),
            price.low.map(|low| low.to_string()).unwrap_or_else(|| String::from("-"))
        );
    }

    println!("Total items: {}", prices.len());

    Ok(())
}
