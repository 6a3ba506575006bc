use clap::Parser;
use std::path::PathBuf;

/// Returns the version string, including the git hash for builds outside a release tag.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "cmdref", version = get_version())]
#[command(about = "Keep a reference of named shell commands", long_about = None)]
pub struct Cli {
    /// Use this commands file instead of the one in the user config directory
    #[arg(short, long, value_name = "PATH")]
    pub file: Option<PathBuf>,

    /// JSON file read by the Import action
    #[arg(short, long, value_name = "PATH")]
    pub import: Option<PathBuf>,

    /// Merge imported commands into the existing ones instead of replacing them
    #[arg(short, long, requires = "import")]
    pub merge: bool,

    /// Print the commands file path and exit
    #[arg(long)]
    pub path: bool,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}
