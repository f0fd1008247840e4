mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use propyto::media::{MediaFile, MediaSource};
use propyto::models::{ListingDraft, SessionUser, StoredListing};
use propyto::store::{
    InMemoryRepository, JsonFileRepository, JsonFileSession, ListingQuery, ListingRepository,
    SessionStore,
};
use propyto::wizard::{check_intake, IntakeRequest, ListingWizard, LAST_STEP};
use propyto::AppConfig;
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let dotenv_loaded = dotenv::dotenv().is_ok();
    let mut config = AppConfig::from_env().context("Failed to load configuration")?;
    if let Some(dir) = &cli.data_dir {
        config.data_dir = dir.clone();
    }

    // Initialize logging
    let default_filter = if cli.verbose { "debug" } else { config.log_filter.as_str() };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .init();

    info!("🏠 Propyto - property posting");
    if !dotenv_loaded {
        debug!("No .env file loaded, using process environment");
    }
    info!("Data directory: {}", config.data_dir.display());

    let session = JsonFileSession::new(config.session_path());
    let mut repo = JsonFileRepository::new(config.listings_path());
    if let Some(quota) = config.storage_quota_bytes {
        repo = repo.with_quota(quota);
    }

    match cli.command {
        Commands::Login { name, email, phone } => {
            session
                .login(SessionUser { name, email, phone })
                .await
                .context("Failed to write session")?;
        }
        Commands::Logout => {
            session.logout().await.context("Failed to clear session")?;
        }
        Commands::Whoami => match session.current_user().await? {
            Some(user) => println!("{} <{}>", user.name, user.email),
            None => println!("Not logged in"),
        },
        Commands::Start {
            looking_to,
            category,
            subtype,
            phone,
        } => {
            let user = session.current_user().await?;
            let request = IntakeRequest {
                looking_to,
                category,
                subtype,
                phone,
            };
            match check_intake(&request, user.as_ref()) {
                Ok(classification) => println!(
                    "✅ Ready to post: {} / {} / {}",
                    classification.looking_to,
                    classification.category.label(),
                    classification.subtype.map(|s| s.label()).unwrap_or("-")
                ),
                Err(e) => bail!("{}", e),
            }
        }
        Commands::Post {
            draft,
            photos,
            video,
            dry_run,
        } => {
            if dry_run {
                let existing = repo.get_all().await.context("Failed to read listings")?;
                let scratch = InMemoryRepository::with_listings(existing);
                post(&draft, &photos, video.as_deref(), &session, &scratch).await?;
                info!("Dry run: nothing written to {}", config.listings_path().display());
            } else {
                post(&draft, &photos, video.as_deref(), &session, &repo).await?;
            }
        }
        Commands::List {
            looking_to,
            property_type,
            min_price,
            max_price,
            bedrooms,
            sort,
            order,
            json,
        } => {
            let query = ListingQuery {
                looking_to,
                property_type,
                min_price,
                max_price,
                bedrooms,
                sort_by: sort,
                sort_order: order,
            };
            let listings = query.apply(repo.get_all().await.context("Failed to read listings")?);

            if json {
                println!("{}", serde_json::to_string_pretty(&listings)?);
            } else {
                info!("Found {} listing(s) in {}", listings.len(), repo.backend_name());
                print_listings(&listings);
            }
        }
        Commands::Show { id } => match repo.find_by_id(&id).await? {
            Some(listing) => println!("{}", serde_json::to_string_pretty(&listing)?),
            None => bail!("No listing with id {}", id),
        },
    }

    Ok(())
}

async fn post(
    draft_path: &Path,
    photos: &[PathBuf],
    video: Option<&Path>,
    session: &dyn SessionStore,
    repo: &dyn ListingRepository,
) -> Result<()> {
    let json = tokio::fs::read_to_string(draft_path)
        .await
        .with_context(|| format!("Failed to read draft {}", draft_path.display()))?;
    let draft = ListingDraft::from_json(&json).context("Draft is not valid JSON")?;

    let mut wizard = ListingWizard::from_draft(draft).mount(session).await;
    if wizard.user().is_none() {
        warn!("Not logged in; the listing will carry no owner email");
    }

    let mut files = Vec::new();
    for path in photos {
        let file = MediaFile::from_path(path)
            .await
            .with_context(|| format!("Failed to open photo {}", path.display()))?;
        files.push(file);
    }
    if !files.is_empty() {
        let outcome = wizard.media_mut().add_images(files, MediaSource::Picker);
        for rejection in &outcome.rejected {
            println!("⚠️  {}", rejection);
        }
    }

    if let Some(path) = video {
        let file = MediaFile::from_path(path)
            .await
            .with_context(|| format!("Failed to open video {}", path.display()))?;
        if let Err(e) = wizard.media_mut().set_video(file, MediaSource::Picker) {
            println!("⚠️  {}", e);
        }
    }

    while wizard.current_step() < LAST_STEP {
        let step = wizard.current_step();
        if let Err(e) = wizard.advance() {
            print_steps(&wizard);
            bail!("Cannot continue past step {}: {}", step, e);
        }
    }
    print_steps(&wizard);
    println!("Property score: {}%", wizard.score());

    let submission = wizard.submit(repo).await?;
    println!();
    println!("✅ Posted \"{}\" (id {})", submission.listing.title, submission.listing.id);
    println!("   Continue at {}", submission.redirect.path());
    Ok(())
}

fn print_steps(wizard: &ListingWizard) {
    for step in wizard.steps() {
        let mark = if step.completed {
            "✓"
        } else if step.current {
            "●"
        } else {
            " "
        };
        println!("[{}] {} - {}", mark, step.subtitle, step.title);
    }
}

fn print_listings(listings: &[StoredListing]) {
    for (i, listing) in listings.iter().enumerate() {
        let price = match listing.price() {
            Some(p) => format!("₹{:.0}", p),
            None => "Price on request".to_string(),
        };
        println!("{}. {} ({})", i + 1, listing.title, price);
        println!(
            "   {} bed, {} bath, {} {}",
            listing.bedrooms_count,
            listing.bathrooms_count,
            listing.profile.carpet_area().value,
            listing.profile.carpet_area().unit.label()
        );
        if !listing.location.is_empty() {
            println!("   Location: {}", listing.location);
        }
        println!("   ID: {}", listing.id);
        println!(
            "   Photos: {}, Video: {}",
            listing.images.len(),
            if listing.has_videos { "yes" } else { "no" }
        );
        println!();
    }
}
