mod cmd;
mod logging;

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    name = "mdsplice",
    version,
    about = "Inspect markdown sections and splice in images"
)]
struct Cli {
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Validate configuration and print resolved settings
    Doctor,

    /// Print the first level-1 heading of a markdown file
    Title(TitleArgs),

    /// Convert text into a URL-safe slug
    Slug(SlugArgs),

    /// List the ##/### sections of a markdown file
    Sections(SectionsArgs),

    /// Insert an image reference into a markdown file
    InsertImage(InsertImageArgs),
}

#[derive(Debug, Args)]
pub struct TitleArgs {
    /// Markdown file to read
    pub file: PathBuf,

    /// Also print the slug derived from the title
    #[arg(long)]
    pub slug: bool,
}

#[derive(Debug, Args)]
pub struct SlugArgs {
    /// Text to slugify (multiple words are joined with spaces)
    #[arg(required = true)]
    pub text: Vec<String>,
}

#[derive(Debug, Args)]
pub struct SectionsArgs {
    /// Markdown file to parse
    pub file: PathBuf,

    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Debug, Args)]
pub struct InsertImageArgs {
    /// Markdown file to update
    pub input: PathBuf,

    /// Image path or URL to reference
    #[arg(long)]
    pub image: String,

    /// Where to write the result (defaults to the input file)
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Zero-based target line (defaults to the middle of the document)
    #[arg(long, conflicts_with = "section")]
    pub line: Option<usize>,

    /// Anchor on the heading of this section instead of a line number
    #[arg(long)]
    pub section: Option<String>,

    /// Alt text for the image
    #[arg(long)]
    pub alt: Option<String>,

    /// Width attribute for an HTML <img> tag
    #[arg(long, conflicts_with = "no_width")]
    pub width: Option<String>,

    /// Emit markdown ![alt](path) syntax instead of an <img> tag
    #[arg(long)]
    pub no_width: bool,

    /// Placement strategy: at_line, before_section, after_section, after_intro
    #[arg(long)]
    pub placement: Option<String>,

    /// Print the updated document instead of writing it
    #[arg(long)]
    pub dry_run: bool,
}

fn main() {
    let cli = Cli::parse();

    let cfg = cmd::load_config(cli.config.as_deref());
    logging::init(&cfg);

    match cli.command {
        Commands::Doctor => cmd::doctor::run(&cfg),
        Commands::Title(args) => cmd::title::run(&args),
        Commands::Slug(args) => cmd::slug::run(&args),
        Commands::Sections(args) => cmd::sections::run(&args),
        Commands::InsertImage(args) => cmd::insert_image::run(&cfg, &args),
    }

    logging::flush();
}
