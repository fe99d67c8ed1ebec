use lenscout::config::Settings;
use lenscout::models::{CriteriaChange, SortMode};
use lenscout::services::{DirectoryClient, ProfileCache};
use lenscout::views::{ListingView, Navigator, ProfileState, ProfileView, Screen};
use std::time::Duration;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::time::Instant;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Everything one browsing session owns
struct Session {
    client: DirectoryClient,
    cache: ProfileCache,
    listing: ListingView,
    profile: ProfileView,
    navigator: Navigator,
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    // Load .env file if present
    dotenv::dotenv().ok();

    // Initialize logging
    let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| "info".to_string());
    let log_format = std::env::var("LOG_FORMAT").unwrap_or_else(|_| "pretty".to_string());

    let subscriber = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level))
        .with_target(false)
        .with_level(true);

    if log_format == "pretty" {
        subscriber.pretty().init();
    } else {
        subscriber.init();
    }

    info!("Starting Lenscout directory browser...");

    // Load configuration
    let settings = Settings::load().unwrap_or_else(|e| {
        error!("Failed to load configuration: {}", e);
        panic!("Configuration error: {}", e);
    });

    info!("Configuration loaded successfully");

    let client = DirectoryClient::new(
        settings.api.base_url.clone(),
        Duration::from_secs(settings.api.timeout_secs),
    );
    let cache = ProfileCache::new(settings.cache.capacity, settings.cache.ttl_secs);

    info!("Directory client initialized for {}", settings.api.base_url);

    let mut session = Session {
        client,
        cache,
        listing: ListingView::new(
            settings.browse.page_size,
            Duration::from_millis(settings.browse.debounce_ms),
        ),
        profile: ProfileView::new(),
        navigator: Navigator::new(),
    };

    session.listing.refresh(&session.client).await;
    render_listing(&session.listing);
    print_help();

    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    loop {
        let deadline = session.listing.search_deadline();

        tokio::select! {
            line = lines.next_line() => {
                match line? {
                    Some(input) => {
                        if !dispatch(&mut session, &input).await {
                            break;
                        }
                    }
                    None => break,
                }
            }
            _ = wait_until(deadline), if deadline.is_some() => {
                if session.listing.tick_search(Instant::now())
                    && session.navigator.current() == Screen::Listing
                {
                    render_listing(&session.listing);
                }
            }
        }
    }

    info!(
        "Session ended with {} cached profiles",
        session.cache.entry_count().await
    );

    Ok(())
}

async fn wait_until(deadline: Option<Instant>) {
    if let Some(deadline) = deadline {
        tokio::time::sleep_until(deadline).await;
    }
}

/// Handle one line of input. Returns false when the session should end.
async fn dispatch(session: &mut Session, input: &str) -> bool {
    let input = input.trim();
    let (command, rest) = match input.split_once(' ') {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    };

    match command {
        "" => {}
        "help" => print_help(),
        "quit" | "exit" => return false,
        "search" => {
            // Staged only; committed once the quiet window elapses
            session.listing.search_input(rest, Instant::now());
        }
        "style" => {
            if rest.is_empty() {
                println!("usage: style <name>");
            } else {
                session
                    .listing
                    .apply(CriteriaChange::StyleToggled(rest.to_string()));
                render_listing(&session.listing);
            }
        }
        "city" => {
            let city = if rest.is_empty() || rest.eq_ignore_ascii_case("all") {
                None
            } else {
                Some(rest.to_string())
            };
            session.listing.apply(CriteriaChange::CitySelected(city));
            render_listing(&session.listing);
        }
        "rating" => match rest.parse::<f64>() {
            Ok(rating) => {
                session.listing.apply(CriteriaChange::MinRatingSet(rating));
                render_listing(&session.listing);
            }
            Err(_) => println!("usage: rating <number>"),
        },
        "price" => {
            let mut parts = rest.split_whitespace();
            let min = parts.next().and_then(|p| p.parse::<f64>().ok());
            let max = parts.next().and_then(|p| p.parse::<f64>().ok());
            match (min, max) {
                (Some(min), Some(max)) => {
                    session
                        .listing
                        .apply(CriteriaChange::PriceRangeSet { min, max });
                    render_listing(&session.listing);
                }
                _ => println!("usage: price <min> <max>"),
            }
        }
        "sort" => {
            let mode = match rest {
                "none" => Some(SortMode::None),
                "price" => Some(SortMode::PriceAscending),
                "rating" => Some(SortMode::RatingDescending),
                "recent" => Some(SortMode::RecentlyAdded),
                _ => None,
            };
            match mode {
                Some(mode) => {
                    session.listing.set_sort(mode);
                    render_listing(&session.listing);
                }
                None => println!("usage: sort price|rating|recent|none"),
            }
        }
        "more" => {
            session.listing.load_more();
            render_listing(&session.listing);
        }
        "facets" => {
            let facets = session.listing.facets();
            println!("Cities: {}", facets.cities.join(", "));
            println!("Styles: {}", facets.styles.join(", "));
        }
        "open" => match rest.parse::<u64>() {
            Ok(id) => {
                session.navigator.open_profile(id);
                session
                    .profile
                    .load(&session.client, &session.cache, id)
                    .await;
                render_profile(&session.profile);
            }
            Err(_) => println!("usage: open <id>"),
        },
        "next" => {
            session.profile.gallery_next();
            render_slide(&session.profile);
        }
        "prev" => {
            session.profile.gallery_prev();
            render_slide(&session.profile);
        }
        "inquire" => {
            let mut fields = rest.splitn(3, '|').map(str::trim);
            session.profile.open_inquiry();
            if let Some(name) = fields.next() {
                session.profile.set_inquiry_name(name);
            }
            if let Some(email) = fields.next() {
                session.profile.set_inquiry_email(email);
            }
            if let Some(message) = fields.next() {
                session.profile.set_inquiry_message(message);
            }
            session.profile.submit_inquiry();

            let form = session.profile.inquiry();
            if let Some(err) = form.error() {
                println!("{}", err);
            } else if let Some(receipt) = form.confirmation() {
                println!(
                    "Inquiry sent to {} (ref {})",
                    receipt.photographer, receipt.inquiry_id
                );
            } else {
                println!("Open a profile before sending an inquiry.");
            }
        }
        "back" => {
            if session.navigator.back() == Screen::Listing {
                render_listing(&session.listing);
            }
        }
        "show" => match session.navigator.current() {
            Screen::Listing => render_listing(&session.listing),
            Screen::Profile(_) => render_profile(&session.profile),
        },
        _ => println!("Unknown command '{}'; type 'help'", command),
    }

    true
}

fn render_listing(listing: &ListingView) {
    if listing.is_loading() {
        println!("Loading photographers...");
        return;
    }
    if let Some(err) = listing.load_error() {
        println!("Could not load photographers: {}", err);
        return;
    }

    let visible = listing.visible();
    let total = listing.filtered().len();

    println!();
    println!("Photographers ({} of {} matching)", visible.len(), total);
    for record in &visible {
        println!(
            "  [{}] {} - {} | ${:.0} | {:.1}/5 ({} reviews) | {}",
            record.id,
            record.name,
            record.location,
            record.price,
            record.rating,
            record.review_count(),
            record.styles.join(", ")
        );
    }
    if visible.is_empty() {
        println!("  No photographers match the current filters.");
    }
    if listing.can_load_more() {
        println!("  ('more' reveals further results)");
    }
}

fn render_profile(profile: &ProfileView) {
    match profile.state() {
        ProfileState::Loading => println!("Loading profile..."),
        ProfileState::NotFound => println!("Photographer not found."),
        ProfileState::Loaded(record) => {
            println!();
            println!("{} - {}", record.name, record.location);
            println!(
                "  ${:.0} | {:.1}/5 ({} reviews)",
                record.price,
                record.rating,
                record.review_count()
            );
            if !record.styles.is_empty() {
                println!("  Styles: {}", record.styles.join(", "));
            }
            if !record.bio.is_empty() {
                println!("  {}", record.bio);
            }
            render_slide(profile);
            for review in &record.reviews {
                println!(
                    "  > {:.1}/5 {} ({}): {}",
                    review.rating, review.name, review.date, review.comment
                );
            }
        }
    }
}

fn render_slide(profile: &ProfileView) {
    let total = profile.record().map(|r| r.portfolio.len()).unwrap_or(0);
    match profile.current_slide() {
        Some(slide) => println!(
            "  Portfolio {}/{}: {}",
            profile.gallery_index() + 1,
            total,
            slide
        ),
        None => println!("  Portfolio: empty"),
    }
}

fn print_help() {
    println!();
    println!("Commands:");
    println!("  search <text>                 debounced name/city/tag search");
    println!("  style <name>                  toggle a style filter");
    println!("  city <name|all>               filter by city");
    println!("  rating <n>                    minimum rating");
    println!("  price <min> <max>             price range");
    println!("  sort price|rating|recent|none result ordering");
    println!("  more                          reveal more results");
    println!("  facets                        list cities and styles");
    println!("  open <id>                     open a profile");
    println!("  next | prev                   portfolio gallery");
    println!("  inquire <name>|<email>|<msg>  send a booking inquiry");
    println!("  back                          return to the listing");
    println!("  show | help | quit");
}
