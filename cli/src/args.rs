use baconpath_core::{AttributeFilter, GraphError};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "baconpath")]
#[command(about = "Bacon numbers between actors and cast-based movie recommendations")]
pub struct Args {
    /// Path to the actor/movie CSV dataset
    #[arg(short, long, value_name = "PATH", global = true)]
    pub data: Option<String>,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Output results as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Bacon number and connecting path between two actors
    Path {
        /// First actor name
        actor1: String,

        /// Second actor name
        actor2: String,

        #[command(flatten)]
        filter: FilterArgs,

        /// Quiet mode - only show the path flow
        #[arg(short, long)]
        quiet: bool,
    },

    /// Average Bacon number of one actor
    Average {
        /// Actor name
        actor: String,
    },

    /// Actors with the lowest average Bacon numbers
    Ranking {
        /// Number of actors to list
        #[arg(short = 'n', long, value_name = "COUNT", default_value = "10")]
        limit: usize,
    },

    /// Movies that share the most cast with a given movie
    Recommend {
        /// Movie title
        movie: String,

        /// Number of recommendations
        #[arg(short = 'n', long, value_name = "COUNT", default_value = "10")]
        limit: usize,

        #[command(flatten)]
        filter: FilterArgs,
    },
}

#[derive(clap::Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// Only use movies whose attribute lies in range ("year" or "rating")
    #[arg(short = 'f', long = "filter", value_name = "ATTRIBUTE")]
    pub attribute: Option<String>,

    /// Lower bound for the filter (inclusive)
    #[arg(long, value_name = "VALUE", requires = "attribute")]
    pub lower: Option<f64>,

    /// Upper bound for the filter (inclusive)
    #[arg(long, value_name = "VALUE", requires = "attribute")]
    pub upper: Option<f64>,
}

impl FilterArgs {
    /// Missing bounds leave that side of the range open.
    pub fn to_filter(&self) -> Result<Option<AttributeFilter>, GraphError> {
        match &self.attribute {
            None => Ok(None),
            Some(attribute) => AttributeFilter::new(
                attribute,
                self.lower.unwrap_or(f64::NEG_INFINITY),
                self.upper.unwrap_or(f64::INFINITY),
            )
            .map(Some),
        }
    }
}
