//! Recommendation command handlers.
//!
//! A failed feed load is not fatal: the message is printed once, the
//! result list renders empty, and nothing is retried — the feed is fetched
//! exactly once per invocation.

use gemfind_core::{types::vocabularies, AppConfig, FilterState, Venue};
use gemfind_feed::{resolve_image_url, FeedClient};
use gemfind_rank::{encode, map_url, rank, RankParams};

/// Vocabulary shown when the feed carries no vibe tags at all.
const FALLBACK_VIBES: &[&str] = &[
    "cozy",
    "indie",
    "quiet",
    "vibrant",
    "romantic",
    "retro",
    "artsy",
    "hidden",
    "minimalist",
    "aesthetic",
    "late-night",
    "views",
    "casual",
];

/// Vocabulary shown when the feed carries no categories at all.
const FALLBACK_TYPES: &[&str] = &["Cafe", "Bar", "Restaurant"];

/// Fetch the feed once and normalize it into the working set.
async fn load_venues(config: &AppConfig) -> Result<Vec<Venue>, gemfind_feed::FeedError> {
    let client = FeedClient::new(config.request_timeout_secs, &config.user_agent)?;
    let rows = client.load(&config.feed_url).await?;
    Ok(gemfind_feed::normalize(&rows))
}

/// Rank venues against the given filters and print the top picks.
pub(crate) async fn run_recommend(
    config: &AppConfig,
    vibes: Vec<String>,
    types: Vec<String>,
    budget: Option<u32>,
    cap: Option<usize>,
    share: bool,
) -> anyhow::Result<()> {
    let mut filters = FilterState::default();
    for vibe in vibes {
        filters.selected_vibes.insert(vibe.trim().to_lowercase());
    }
    for venue_type in types {
        filters.selected_types.insert(venue_type.trim().to_string());
    }
    if let Some(budget) = budget {
        filters.budget_ceiling = budget;
    }
    // Running the command is the "go" trigger.
    filters.submitted = true;

    let venues = match load_venues(config).await {
        Ok(venues) => venues,
        Err(err) => {
            tracing::warn!(error = %err, "feed load failed");
            println!("{err}");
            println!("0 picks");
            return Ok(());
        }
    };

    let params = RankParams {
        cap: cap.unwrap_or(config.result_cap),
        threshold: config.score_threshold,
    };
    let ranked = rank(&venues, &filters, &params);

    if ranked.is_empty() {
        println!("no picks matched; loosen a filter or raise the budget");
    } else {
        let header = format!("{:<30}{:<14}{:>7}  {:>5}  MAP", "NAME", "TYPE", "PRICE", "SCORE");
        println!("{header}");
        for entry in &ranked {
            let price = entry
                .venue
                .price_avg
                .map_or_else(|| "\u{2014}".to_string(), |p| format!("${p:.0}"));
            println!(
                "{:<30}{:<14}{:>7}  {:>5.2}  {}",
                clip(&entry.venue.name, 28),
                clip(&entry.venue.venue_type, 12),
                price,
                entry.score,
                map_url(entry.venue)
            );
        }
    }
    println!("{} picks", ranked.len());

    if share {
        let query = encode(&filters);
        if query.is_empty() {
            println!("share: (default filters, nothing to encode)");
        } else {
            println!("share: ?{query}");
        }
    }

    Ok(())
}

/// List the normalized working set and its derived vocabularies.
pub(crate) async fn run_venues(config: &AppConfig) -> anyhow::Result<()> {
    let venues = match load_venues(config).await {
        Ok(venues) => venues,
        Err(err) => {
            tracing::warn!(error = %err, "feed load failed");
            println!("{err}");
            return Ok(());
        }
    };

    if venues.is_empty() {
        println!("feed yielded no usable venues");
        return Ok(());
    }

    let header = format!("{:<30}{:<14}{:<6}VIBES", "NAME", "TYPE", "IMG");
    println!("{header}");
    for venue in &venues {
        let has_image = venue
            .image_url
            .as_deref()
            .is_some_and(|raw| !resolve_image_url(raw).is_empty());
        println!(
            "{:<30}{:<14}{:<6}{}",
            clip(&venue.name, 28),
            clip(&venue.venue_type, 12),
            if has_image { "yes" } else { "\u{2014}" },
            venue.vibes.join(", ")
        );
    }

    let (mut all_vibes, mut all_types) = vocabularies(&venues);
    if all_vibes.is_empty() {
        all_vibes = FALLBACK_VIBES.iter().map(|v| (*v).to_string()).collect();
    }
    if all_types.is_empty() {
        all_types = FALLBACK_TYPES.iter().map(|t| (*t).to_string()).collect();
    }
    println!();
    println!("vibes: {}", all_vibes.join(", "));
    println!("types: {}", all_types.join(", "));

    Ok(())
}

fn clip(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        format!("{}...", text.chars().take(max - 3).collect::<String>())
    } else {
        text.to_string()
    }
}
