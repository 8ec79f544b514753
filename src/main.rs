// SPDX-License-Identifier: MIT
// Copyright 2026 Roland Dreier <roland@rolandd.dev>

//! Activities command-line client
//!
//! Lists, shows, creates and edits activities through the same store and
//! form workflow a browser view would use.

use std::sync::Arc;

use activities_client::{
    config::ClientConfig,
    gateway::{ActivityGateway, HttpActivityGateway, InMemoryGateway},
    logging::init_logging,
    models::{Activity, ActivityFormValues},
    services::UuidGenerator,
    AppState,
};
use anyhow::Context;
use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "activities", about = "Browse and edit activities")]
struct Cli {
    /// Override ACTIVITIES_API_URL
    #[arg(long, global = true)]
    api_url: Option<String>,

    /// Work against an empty in-process store instead of the service
    #[arg(long, global = true)]
    offline: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List all activities grouped by day
    List,
    /// Show one activity
    Show { id: String },
    /// Create a new activity
    Create(FieldArgs),
    /// Edit an existing activity; omitted fields keep their value
    Edit {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
}

#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    description: Option<String>,
    /// YYYY-MM-DD
    #[arg(long)]
    date: Option<String>,
    /// HH:MM[:SS]
    #[arg(long)]
    time: Option<String>,
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    venue: Option<String>,
}

impl FieldArgs {
    fn apply(self, values: &mut ActivityFormValues) {
        let FieldArgs {
            title,
            category,
            description,
            date,
            time,
            city,
            venue,
        } = self;
        let targets = [
            (title, &mut values.title),
            (category, &mut values.category),
            (description, &mut values.description),
            (date, &mut values.date),
            (time, &mut values.time),
            (city, &mut values.city),
            (venue, &mut values.venue),
        ];
        for (value, target) in targets {
            if let Some(value) = value {
                *target = value;
            }
        }
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut config = ClientConfig::from_env().context("Failed to load configuration")?;
    if let Some(api_url) = cli.api_url {
        config.api_url = api_url;
    }

    init_logging(config.log_format);
    tracing::debug!(api_url = %config.api_url, offline = cli.offline, "Starting activities client");

    let gateway: Arc<dyn ActivityGateway> = if cli.offline {
        Arc::new(InMemoryGateway::new())
    } else {
        Arc::new(HttpActivityGateway::from_config(&config))
    };
    let app = AppState::new(config, gateway, Arc::new(UuidGenerator));

    match cli.command {
        Command::List => {
            app.store.load_activities().await?;
            let state = app.store.snapshot();
            if state.is_empty() {
                println!("No activities.");
            }
            for (day, activities) in state.grouped_by_date() {
                println!("{}", day.format("%A %-d %B %Y"));
                for activity in activities {
                    println!(
                        "  {}  {:<30} {:<8} {}, {}  [{}]",
                        activity.date.format("%H:%M"),
                        activity.title,
                        activity.category,
                        activity.venue,
                        activity.city,
                        activity.id
                    );
                }
            }
        }
        Command::Show { id } => {
            let activity = app.store.load_activity(&id).await?;
            print_activity(&activity);
        }
        Command::Create(fields) => {
            let mut values = app.form.initial_values(None).await?;
            fields.apply(&mut values);
            let id = app.form.submit(values).await?;
            println!("Created activity {}", id);
        }
        Command::Edit { id, fields } => {
            let mut values = app.form.initial_values(Some(id.as_str())).await?;
            fields.apply(&mut values);
            let id = app.form.submit(values).await?;
            println!("Updated activity {}", id);
        }
    }

    app.form.leave();
    Ok(())
}

fn print_activity(activity: &Activity) {
    println!("{}", activity.title);
    println!("  id:          {}", activity.id);
    println!("  category:    {}", activity.category);
    println!("  when:        {}", activity.date.format("%Y-%m-%d %H:%M"));
    println!("  where:       {}, {}", activity.venue, activity.city);
    println!("  description: {}", activity.description);
}
