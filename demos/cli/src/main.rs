use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};
use heritage_core::{ContactSubmission, PanelContent, TimelineData, TimelineItem};
use heritage_data::{default_timeline, load_timeline_str};

#[derive(Parser, Debug)]
#[command(
    name = "heritage-cli",
    about = "Preview the heritage page timeline and contact rules from the terminal."
)]
struct Args {
    /// Timeline table to use instead of the bundled one.
    #[arg(short, long, global = true)]
    table: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the years present in the table.
    Years,
    /// Print the detail panel shown for a year.
    Panel {
        year: String,
        /// Label carried by the item's data-title attribute.
        #[arg(long)]
        title: Option<String>,
        /// Emit JSON instead of plain text.
        #[arg(long)]
        json: bool,
    },
    /// Run the contact form checks on the given values.
    Contact {
        #[arg(long, default_value = "")]
        name: String,
        #[arg(long, default_value = "")]
        email: String,
        #[arg(long, default_value = "")]
        message: String,
    },
}

fn load_table(path: Option<&PathBuf>) -> anyhow::Result<TimelineData> {
    match path {
        Some(path) => {
            let data = std::fs::read_to_string(path)
                .with_context(|| format!("Could not read file {path:?}"))?;
            Ok(load_timeline_str(&data)?)
        }
        None => Ok(default_timeline()?),
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    match args.command {
        Command::Years => {
            let data = load_table(args.table.as_ref())?;
            for year in data.years() {
                println!("{year}");
            }
        }
        Command::Panel { year, title, json } => {
            let data = load_table(args.table.as_ref())?;
            let panel = PanelContent::for_item(&TimelineItem::new(year, title), &data);
            if json {
                println!("{}", serde_json::to_string_pretty(&panel)?);
            } else {
                println!("{}\n\n{}", panel.title, panel.description);
            }
        }
        Command::Contact {
            name,
            email,
            message,
        } => match ContactSubmission::new(name, email, message).validate() {
            Ok(valid) => println!("{}", valid.notice()),
            Err(err) => {
                eprintln!("{}", err.notice());
                anyhow::bail!("submission rejected: {err}");
            }
        },
    }

    Ok(())
}
