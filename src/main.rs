use std::{
    env,
    process,
    time::Instant,
};

use flashdeck::{
    CardLoader,
    FileFetcher,
    FlashdeckError,
    HttpFetcher,
    ResourceFetcher,
};

#[tokio::main]
async fn main() {
    let source = match env::args().nth(1) {
        Some(source) => source,
        None => {
            eprintln!("Usage: flashdeck <base-url | deck-directory>");
            process::exit(2);
        }
    };

    let result = if source.starts_with("http://") || source.starts_with("https://") {
        match HttpFetcher::new(&source) {
            Ok(fetcher) => print_deck(CardLoader::new(fetcher)).await,
            Err(e) => Err(e),
        }
    } else {
        print_deck(CardLoader::new(FileFetcher::new(source))).await
    };

    if let Err(e) = result {
        eprintln!("Failed to load deck: {}", e);
        process::exit(1);
    }
}

async fn print_deck<F: ResourceFetcher>(loader: CardLoader<F>) -> Result<(), FlashdeckError> {
    let start = Instant::now();
    let cards = loader.load().await?;
    println!("Loaded {} cards ({:.2}s)", cards.len(), start.elapsed().as_secs_f32());

    for card in &cards {
        println!("{} -> {}", card.question, card.answer);
        if let Some(example) = &card.example {
            match &card.example_translation {
                Some(translation) => println!("    {} ({})", example, translation),
                None => println!("    {}", example),
            }
        }
    }

    Ok(())
}
