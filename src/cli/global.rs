use clap::Args;

/// Global arguments that apply to all subcommands
#[derive(Args, Debug)]
pub struct GlobalArgs {
    /// Suppress warnings
    #[arg(short = 'q', long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Maximum input size in bytes (0 = unlimited, default from settings)
    #[arg(long, global = true)]
    pub max_size: Option<usize>,

    /// Process inputs exceeding --max-size
    #[arg(long, global = true)]
    pub force: bool,

    /// Extra settings file, applied after the standard locations
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<String>,
}
