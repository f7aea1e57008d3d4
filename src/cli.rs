use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "printdirtree", version)]
#[command(
    about = "Print the directory tree structure with customizable exclusions.",
    long_about = None
)]
pub struct Cli {
    /// The directory path to print the structure of. Defaults to the current directory.
    #[arg(long, value_name = "PATH", default_value = ".")]
    pub dir: PathBuf,

    /// Directories or path patterns to exclude from the printout.
    #[arg(long, value_name = "PATTERN", num_args = 0..)]
    pub exclude_dir: Vec<String>,

    /// Files or file patterns to exclude from the printout.
    #[arg(long, value_name = "PATTERN", num_args = 0..)]
    pub exclude_file: Vec<String>,

    /// Directories to include back into the printout.
    #[arg(long, value_name = "NAME", num_args = 0..)]
    pub include_dir: Vec<String>,

    /// Files or file patterns to include back into the printout.
    #[arg(long, value_name = "NAME", num_args = 0..)]
    pub include_file: Vec<String>,

    /// Save the specified exclusions for future runs.
    #[arg(long)]
    pub save: bool,

    /// View the current excluded directories and files.
    #[arg(long)]
    pub view_exclusions: bool,

    /// Print only directories, excluding files
    #[arg(long)]
    pub dirs_only: bool,

    /// Copy the output to clipboard
    #[arg(short = 'c', long)]
    pub copy_to_clipboard: bool,

    /// Show the contents of each file after the tree structure
    #[arg(short = 'p', long)]
    pub show_contents: bool,

    /// Preferences file to load and save exclusions
    #[arg(long, value_name = "PATH", env = "PRINTDIRTREE_PREFS")]
    pub prefs_file: Option<PathBuf>,

    /// Descend at most this many directory levels
    #[arg(short = 'L', long, value_name = "LEVEL")]
    pub max_depth: Option<usize>,

    /// Give up once this many entries have been listed
    #[arg(long, value_name = "COUNT")]
    pub max_entries: Option<usize>,

    /// Abort on the first unreadable directory instead of marking it and continuing
    #[arg(long)]
    pub fail_fast: bool,
}
