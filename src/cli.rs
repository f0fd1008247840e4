use clap::{Parser, Subcommand};
use propyto::models::{LookingTo, PropertyCategory, PropertySubtype};
use propyto::store::{SortBy, SortOrder};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "propyto")]
#[command(about = "Post and browse property listings", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding the listings and session files
    #[arg(long, global = true)]
    pub data_dir: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store a user in the session slot
    Login {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: Option<String>,
    },

    /// Clear the session slot
    Logout,

    /// Show the logged-in user
    Whoami,

    /// Check the start-posting panel (login, property type, phone)
    Start {
        /// sell, rent or pg
        #[arg(long, default_value = "sell")]
        looking_to: LookingTo,

        /// residential or commercial
        #[arg(long, default_value = "residential")]
        category: PropertyCategory,

        /// flat, villa, office, hostel, ...
        #[arg(long)]
        subtype: Option<PropertySubtype>,

        /// 10-digit contact number
        #[arg(long, default_value = "")]
        phone: String,
    },

    /// Walk a draft through the wizard and post it
    Post {
        /// Draft JSON file
        #[arg(required = true)]
        draft: PathBuf,

        /// Photo to attach (repeatable)
        #[arg(short, long = "photo")]
        photos: Vec<PathBuf>,

        /// Video to attach
        #[arg(long)]
        video: Option<PathBuf>,

        /// Run the whole flow without writing the listings file
        #[arg(long)]
        dry_run: bool,
    },

    /// Browse stored listings
    List {
        /// Only active listings for sell, rent or pg
        #[arg(long)]
        looking_to: Option<LookingTo>,

        #[arg(long)]
        property_type: Option<PropertySubtype>,

        #[arg(long)]
        min_price: Option<f64>,

        #[arg(long)]
        max_price: Option<f64>,

        #[arg(long)]
        bedrooms: Option<u32>,

        /// price or date
        #[arg(long)]
        sort: Option<SortBy>,

        /// asc or desc
        #[arg(long, default_value = "asc")]
        order: SortOrder,

        /// Print JSON instead of a summary
        #[arg(long)]
        json: bool,
    },

    /// Show one listing as JSON
    Show {
        id: String,
    },
}
