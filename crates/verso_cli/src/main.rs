//! verso CLI - command-line front end for the poetry collection core.
//!
//! The graphical front end is out of scope for the core; this binary keeps
//! the full store surface (add/edit/remove/show/list/categories) reachable
//! from a terminal against the same JSON slot.

use std::path::PathBuf;

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use verso_core::{
    default_log_level, filter_poems, init_logging, list_categories, CollectionStore,
    JsonFileSnapshot, Poem, PoemDraft, PoemFilter, PoemId,
};

#[derive(Parser, Debug)]
#[command(
    name = "verso",
    version,
    about = "Single-user poetry collection manager backed by one JSON file"
)]
struct Cli {
    /// Path of the JSON slot holding the collection.
    /// Defaults to ~/.verso/poems.json.
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Absolute directory for rolling log files. Logging is off when unset.
    #[arg(long, global = true)]
    log_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Add a poem to the collection
    Add {
        title: String,
        content: String,
        /// Category label; repeat for multiple labels
        #[arg(short = 'c', long = "category")]
        categories: Vec<String>,
    },
    /// Replace a poem's title, content and categories
    Edit {
        id: PoemId,
        title: String,
        content: String,
        /// Category label; repeat for multiple labels
        #[arg(short = 'c', long = "category")]
        categories: Vec<String>,
    },
    /// Remove a poem from the collection
    Remove { id: PoemId },
    /// Print one poem in full
    Show { id: PoemId },
    /// List poems, optionally filtered
    List {
        /// Case-insensitive text search over title, content and categories
        #[arg(long)]
        query: Option<String>,
        /// Exact category membership filter
        #[arg(long)]
        category: Option<String>,
    },
    /// List all category labels in use
    Categories,
}

fn default_data_file() -> Result<PathBuf> {
    let home = dirs::home_dir().context("could not determine home directory")?;
    Ok(home.join(".verso").join("poems.json"))
}

fn print_summary(poem: &Poem) {
    let labels = poem.category_labels();
    if labels.is_empty() {
        println!("{}  {}  {}", poem.id, poem.date, poem.title);
    } else {
        println!(
            "{}  {}  {}  [{}]",
            poem.id,
            poem.date,
            poem.title,
            labels.join(", ")
        );
    }
}

fn print_full(poem: &Poem) {
    print_summary(poem);
    println!();
    println!("{}", poem.content);
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    if let Some(log_dir) = &cli.log_dir {
        let log_dir = log_dir
            .to_str()
            .context("log directory path must be valid UTF-8")?;
        init_logging(default_log_level(), log_dir).map_err(|err| anyhow!(err))?;
    }

    let data_file = match cli.data_file {
        Some(path) => path,
        None => default_data_file()?,
    };
    let mut store = CollectionStore::open(JsonFileSnapshot::new(data_file));

    match cli.command {
        Commands::Add {
            title,
            content,
            categories,
        } => {
            let draft = PoemDraft::new(title, content).with_categories(categories);
            let created = store.create(draft)?;
            print_summary(&created);
        }
        Commands::Edit {
            id,
            title,
            content,
            categories,
        } => {
            let draft = PoemDraft::new(title, content).with_categories(categories);
            let updated = store.update(id, draft)?;
            print_summary(&updated);
        }
        Commands::Remove { id } => {
            if store.delete(id) {
                println!("removed {id}");
            } else {
                println!("no poem with id {id}");
            }
        }
        Commands::Show { id } => match store.get(id) {
            Some(poem) => print_full(poem),
            None => println!("no poem with id {id}"),
        },
        Commands::List { query, category } => {
            let filter = PoemFilter {
                query,
                category,
            };
            for poem in filter_poems(store.poems(), &filter) {
                print_summary(poem);
            }
        }
        Commands::Categories => {
            for label in list_categories(store.poems()) {
                println!("{label}");
            }
        }
    }

    Ok(())
}
