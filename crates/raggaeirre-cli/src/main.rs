//! Raggaeirre site CLI
//!
//! Walks the website's donation and volunteer flows from a terminal, using
//! the same state machines as the desktop app.
//!
//! ## Usage
//!
//! ```bash
//! # Donate KES 1,000 via PayPal
//! raggaeirre donate --amount 1000 --method paypal --name "Amina" --email amina@example.org
//!
//! # M-Pesa needs a phone number
//! raggaeirre donate --amount 500 --method mpesa --name "Amina" --email amina@example.org --phone 0712345678
//!
//! # Apply as a volunteer
//! raggaeirre volunteer --name "Otieno" --email otieno@example.org --interest mentoring
//!
//! # Browse the gallery
//! raggaeirre gallery
//! raggaeirre gallery --open 2 --next 1
//!
//! # Show the catalog
//! raggaeirre catalog --json
//!
//! # Check an input the way the forms do
//! raggaeirre validate phone "+254712345678"
//! ```

use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use raggaeirre_core::logging::LoggingBuilder;
use raggaeirre_core::validation;
use raggaeirre_core::{
    ApplicationOutcome, Catalog, DonationRequest, DonorDetails, LightboxMedia, NoClipboard,
    NoopPage, PaymentAdvance, PaymentMethod, SimulatedOutcome, SiteConfig, SiteContext,
    SubmissionOutcome, Timings, VolunteerApplication,
};

/// Raggaeirre Support Foundation - site flows from the terminal
#[derive(Parser)]
#[command(name = "raggaeirre")]
#[command(version = "0.1.0")]
#[command(about = "Raggaeirre Support Foundation - site flows from the terminal")]
#[command(
    long_about = "Donate, apply as a volunteer and browse the gallery of the Raggaeirre Support Foundation website without a browser."
)]
struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Site config JSON (default: <config dir>/raggaeirre/site.json if present)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Also write a JSONL log journal under this directory
    #[arg(long, global = true)]
    journal: Option<PathBuf>,

    /// Skip every delay (backend round trip, auto-close)
    #[arg(long, global = true)]
    fast: bool,

    /// Make the simulated backend reject submissions
    #[arg(long, global = true)]
    fail: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Make a donation
    Donate {
        /// Amount in KES (a preset or any whole number)
        #[arg(short, long)]
        amount: String,
        /// mpesa, paypal or bank
        #[arg(short, long)]
        method: PaymentMethod,
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        /// Required for M-Pesa
        #[arg(long, default_value = "")]
        phone: String,
        #[arg(long, default_value = "")]
        message: String,
    },

    /// Apply as a volunteer
    Volunteer {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        phone: String,
        /// Area of interest (teaching, mentoring, ...)
        #[arg(long, default_value = "")]
        interest: String,
        #[arg(long, default_value = "")]
        availability: String,
        #[arg(long, default_value = "")]
        message: String,
    },

    /// List gallery items or show one in the lightbox
    Gallery {
        /// Open this item (0-based)
        #[arg(long)]
        open: Option<usize>,
        /// Step forward this many times after opening
        #[arg(long, default_value_t = 0)]
        next: usize,
        /// Step back this many times after opening
        #[arg(long, default_value_t = 0)]
        previous: usize,
    },

    /// Show the site catalog
    Catalog {
        /// Print the full catalog as JSON
        #[arg(long)]
        json: bool,
    },

    /// Check a value or file the way the site does
    Validate {
        #[command(subcommand)]
        what: ValidateTarget,
    },
}

#[derive(Subcommand)]
enum ValidateTarget {
    /// An email address
    Email { value: String },
    /// A Kenyan mobile number
    Phone { value: String },
    /// A custom donation amount
    Amount { value: String },
    /// A catalog JSON file
    Catalog { path: PathBuf },
    /// A site config JSON file
    Config { path: PathBuf },
}

fn setup_logging(verbosity: u8, journal: Option<&Path>) -> Result<()> {
    let filter = match verbosity {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };

    let mut builder = LoggingBuilder::new("cli").with_filter(filter);
    if let Some(dir) = journal {
        builder = builder.journal(dir);
    }
    builder.init()?;
    Ok(())
}

/// `<config dir>/raggaeirre/site.json`
fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("raggaeirre").join("site.json"))
}

fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let path = cli
        .config
        .clone()
        .or_else(|| default_config_path().filter(|p| p.exists()));

    let mut config = SiteConfig::load(path.as_deref())
        .with_context(|| format!("Failed to load config {:?}", path))?;
    if cli.fast {
        config.timings = Timings::instant();
    }
    if cli.fail {
        config.simulated_outcome = SimulatedOutcome::Fail;
    }
    tracing::debug!(
        path = ?path,
        outcome = ?config.simulated_outcome,
        fast = cli.fast,
        "Loaded site config"
    );
    Ok(config)
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.journal.as_deref())?;

    let config = load_config(&cli)?;
    let site = SiteContext::from_config(&config, Arc::new(NoopPage), Arc::new(NoClipboard))?;

    match cli.command {
        Commands::Donate {
            amount,
            method,
            name,
            email,
            phone,
            message,
        } => {
            let donor = DonorDetails {
                name,
                email,
                phone,
                message,
            };
            donate(&site, &amount, method, donor).await?;
        }

        Commands::Volunteer {
            name,
            email,
            phone,
            interest,
            availability,
            message,
        } => {
            let application = VolunteerApplication {
                name,
                email,
                phone,
                interest,
                availability,
                message,
            };

            site.with_volunteer(|flow| flow.open());
            println!("{}", raggaeirre_core::volunteer::SUBMITTING_TEXT);
            let texts = &site.catalog().messages.volunteer;
            match site.submit_application(application).await? {
                ApplicationOutcome::Succeeded(_) => {
                    println!("{}", texts.success);
                }
                ApplicationOutcome::Failed(_) => {
                    anyhow::bail!("{}", texts.error);
                }
                ApplicationOutcome::Stale => {}
            }
        }

        Commands::Gallery {
            open,
            next,
            previous,
        } => {
            let Some(index) = open else {
                let gallery = site.gallery();
                println!("Gallery ({} items):", gallery.len());
                for tile in gallery.tiles() {
                    let kind = if tile.play_overlay { "video" } else { "image" };
                    println!("  [{}] {} ({})", tile.index, tile.title, kind);
                }
                return Ok(());
            };

            site.with_gallery(|gallery| -> Result<()> {
                gallery.open(index)?;
                for _ in 0..next {
                    gallery.next();
                }
                for _ in 0..previous {
                    gallery.previous();
                }
                Ok(())
            })?;

            let gallery = site.gallery();
            if let Some(view) = gallery.view() {
                println!("Item {}/{}: {}", view.index + 1, gallery.len(), view.title);
                match view.media {
                    LightboxMedia::Image { src, .. } => println!("  Image: {}", src),
                    LightboxMedia::Video { src } => println!("  Video: {}", src),
                }
                if !view.description.is_empty() {
                    println!("  {}", view.description);
                }
            }
        }

        Commands::Catalog { json } => {
            let catalog = site.catalog();
            if json {
                println!("{}", serde_json::to_string_pretty(catalog)?);
            } else {
                print_catalog(catalog);
            }
        }

        Commands::Validate { what } => validate(what)?,
    }

    Ok(())
}

async fn donate(
    site: &Arc<SiteContext>,
    amount: &str,
    method: PaymentMethod,
    donor: DonorDetails,
) -> Result<()> {
    let advance = site.with_donation(|flow| -> Result<PaymentAdvance> {
        flow.open();
        flow.set_custom_amount(amount);
        flow.proceed_to_payment()?;
        if let Some(label) = &flow.session().amount_label {
            println!("{}", label);
        }

        flow.select_payment_method(method);
        Ok(flow.proceed_to_details()?)
    })?;

    if advance == PaymentAdvance::BankInfo {
        println!("Bank transfer details:");
        for (label, value) in site.catalog().bank.rows() {
            println!("  {}: {}", label, value);
        }
        site.with_donation(|flow| flow.close());
        return Ok(());
    }

    let request = {
        let flow = site.donation();
        if let Some(summary) = &flow.session().payment_summary {
            println!("Paying {}", summary);
        }
        DonationRequest {
            amount: flow.session().selected_amount,
            method,
            donor: donor.clone(),
        }
    };

    let texts = &site.catalog().messages.donation;
    println!("{}", raggaeirre_core::donation::PROCESSING_TEXT);
    match site.submit_donation(donor).await? {
        SubmissionOutcome::Succeeded(_) => println!("{}", request.render(&texts.success)),
        SubmissionOutcome::Failed(_) => anyhow::bail!("{}", texts.error),
        SubmissionOutcome::Stale => {}
    }
    Ok(())
}

fn print_catalog(catalog: &Catalog) {
    println!("Raggaeirre Support Foundation");
    println!();
    println!("Donation amounts:");
    for amount in &catalog.donation.amounts {
        println!("  {}", raggaeirre_core::format_kes(*amount));
    }
    println!();
    println!("Payment methods:");
    for (method, info) in &catalog.donation.payment_methods {
        println!("  {} ({}): {}", info.name, method, info.description);
    }
    println!();
    println!("Impact:");
    for (label, text) in catalog.stats.counter_texts() {
        println!("  {}: {}", label, text);
    }
    println!();
    println!("Contact:");
    for email in &catalog.contact.emails {
        println!("  Email: {}", email);
    }
    for phone in &catalog.contact.phones {
        println!("  Phone: {}", phone);
    }
    println!("  Address: {}", catalog.contact.address);
    println!();
    println!("Media items: {}", catalog.media.len());
}

fn validate(what: ValidateTarget) -> Result<()> {
    match what {
        ValidateTarget::Email { value } => {
            anyhow::ensure!(validation::is_valid_email(&value), "Invalid email: {}", value);
            println!("Valid email: {}", value);
        }
        ValidateTarget::Phone { value } => {
            anyhow::ensure!(validation::is_valid_phone(&value), "Invalid phone: {}", value);
            println!("Valid phone: {}", value);
        }
        ValidateTarget::Amount { value } => {
            anyhow::ensure!(validation::is_valid_amount(&value), "Invalid amount: {}", value);
            println!("Valid amount: {}", value);
        }
        ValidateTarget::Catalog { path } => {
            let catalog = Catalog::from_json_file(&path)
                .with_context(|| format!("Invalid catalog {}", path.display()))?;
            println!(
                "Valid catalog: {} media items, {} preset amounts",
                catalog.media.len(),
                catalog.donation.amounts.len()
            );
        }
        ValidateTarget::Config { path } => {
            let config = SiteConfig::from_json_file(&path)
                .with_context(|| format!("Invalid config {}", path.display()))?;
            config.catalog()?;
            println!("Valid config: {}", path.display());
        }
    }
    Ok(())
}
