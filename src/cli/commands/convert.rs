//! One-shot link conversion.

use tokio::runtime::Runtime;

use crate::convert::{Conversion, ConversionService};
use crate::item::Item;
use crate::resolver::MatchStrategy;

/// Convert one link and print the result
pub fn cmd_convert(
    rt: &Runtime,
    service: &ConversionService,
    url: &str,
    json: bool,
) -> anyhow::Result<()> {
    if json {
        let response = rt.block_on(service.respond(Some(url)));
        println!("{}", serde_json::to_string_pretty(&response)?);
        if !response.is_success() {
            std::process::exit(1);
        }
        return Ok(());
    }

    match rt.block_on(service.convert(url)) {
        Ok(conversion) => {
            print!("{}", summary(&conversion));
            Ok(())
        }
        Err(e) if e.is_not_found() => {
            eprintln!("✗ Could not find a match: {}", e);
            std::process::exit(1);
        }
        Err(e) => Err(e.into()),
    }
}

fn summary(conversion: &Conversion) -> String {
    let how = match conversion.strategy {
        MatchStrategy::Isrc => "matched by ISRC".to_string(),
        MatchStrategy::Trial(0) => "matched by search".to_string(),
        MatchStrategy::Trial(n) => format!("matched by search, fallback {}", n),
    };

    format!(
        "✓ Converted {} ({})\n\n{}\n{}",
        conversion.init.entity_type(),
        how,
        describe(&conversion.init),
        describe(&conversion.result),
    )
}

fn describe(item: &Item) -> String {
    let display = item.display();
    let label = if display.artists.is_empty() || display.artists == display.title {
        display.title.clone()
    } else {
        format!("{} - {}", display.title, display.artists)
    };
    format!("  {:<8} {}\n           {}\n", item.platform().as_str(), label, item.url())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::traits::mocks::{FixtureCatalog, FixtureEntry};
    use crate::catalog::{EntityType, ItemId, Platform};

    fn item(catalog: &FixtureCatalog, entity: EntityType, id: ItemId) -> Item {
        let raw = catalog.raw_for(&id);
        Item::from_lookup(catalog, entity, id, raw, "unused").unwrap()
    }

    #[test]
    fn test_summary_lists_both_items() {
        let deezer = FixtureCatalog::new(
            Platform::Deezer,
            vec![FixtureEntry::track(ItemId::Numeric(1), "One More Time", "Daft Punk", "Discovery", 320)],
        );
        let spotify = FixtureCatalog::text_only(
            Platform::Spotify,
            vec![FixtureEntry::track(ItemId::Opaque("s".into()), "One More Time", "Daft Punk", "Discovery", 320)],
        );

        let conversion = Conversion {
            init: item(&deezer, EntityType::Track, ItemId::Numeric(1)),
            result: item(&spotify, EntityType::Track, ItemId::Opaque("s".into())),
            strategy: MatchStrategy::Trial(2),
        };

        let text = summary(&conversion);
        assert!(text.starts_with("✓ Converted track (matched by search, fallback 2)"));
        assert!(text.contains("deezer   One More Time - Daft Punk"));
        assert!(text.contains("https://spotify.test/track/s"));
    }

    #[test]
    fn test_artist_label_is_not_repeated() {
        let deezer = FixtureCatalog::new(
            Platform::Deezer,
            vec![FixtureEntry::artist(ItemId::Numeric(27), "Daft Punk")],
        );
        let text = describe(&item(&deezer, EntityType::Artist, ItemId::Numeric(27)));
        assert!(text.contains("deezer   Daft Punk\n"));
    }
}
