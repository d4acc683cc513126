use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "wellorder")]
#[command(author, version, about)]
#[command(long_about = "Visitation orders and well names for 96- and 384-well microplates.\n\n\
    Examples:\n  \
    wellorder order                      Spiral order of a 96-well plate\n  \
    wellorder map --size 384             Plate map with order labels\n  \
    wellorder order -p serpentine -f json\n  \
    wellorder filter A01,B02,D04         Filtered wells in traversal order\n  \
    wellorder name 7 11                  0-based coordinate to well name")]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Increase output verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// Plate selection shared by the ordering commands.
#[derive(Args, Debug, Clone, Default)]
pub struct PlateArgs {
    /// Plate size in wells (96 or 384); defaults to the configured size, then 96
    #[arg(short, long)]
    pub size: Option<u32>,

    /// Traversal pattern (spiral or serpentine); defaults to the configured pattern, then spiral
    #[arg(short, long)]
    pub pattern: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the visitation order of every well
    Order {
        #[command(flatten)]
        plate: PlateArgs,

        /// Output format
        #[arg(short, long, value_enum, default_value = "text")]
        format: OutputFormat,
    },

    /// Print a plate map labelled with each well's position in the order
    Map {
        #[command(flatten)]
        plate: PlateArgs,
    },

    /// Convert a 0-based (row, column) coordinate to a well name
    Name {
        /// 0-based row (0 is A)
        row: usize,

        /// 0-based column (0 is 01)
        col: usize,

        /// Plate size in wells (96 or 384)
        #[arg(short, long)]
        size: Option<u32>,
    },

    /// Decode a well name into its row and column
    Parse {
        /// Well name, e.g. B07
        well: String,
    },

    /// Print a comma-separated well list in traversal order
    Filter {
        /// Wells to keep, e.g. "A01,B02,D04"
        wells: String,

        #[command(flatten)]
        plate: PlateArgs,
    },

    /// Verify every supported plate size and pattern
    Check,

    /// View and modify configuration
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },

    /// Generate shell completions
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Show version information
    Version,
}

#[derive(Subcommand)]
pub enum ConfigCommands {
    /// Display current configuration
    Show,

    /// Set a configuration value
    Set {
        /// Configuration key (defaults.plate_size, defaults.pattern)
        key: String,

        /// Value to set
        value: String,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
    Yaml,
}

#[derive(Clone, ValueEnum)]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        match self.command {
            Some(Commands::Order { plate, format }) => crate::commands::order::run(&plate, format),
            Some(Commands::Map { plate }) => crate::commands::map::run(&plate, !self.no_color),
            Some(Commands::Name { row, col, size }) => {
                crate::commands::codec::name(row, col, size)
            }
            Some(Commands::Parse { well }) => crate::commands::codec::parse(&well),
            Some(Commands::Filter { wells, plate }) => {
                crate::commands::filter::run(&wells, &plate)
            }
            Some(Commands::Check) => crate::commands::check::run(self.quiet),
            Some(Commands::Config { command }) => crate::commands::config::run(command),
            Some(Commands::Completion { shell }) => {
                crate::commands::completion::run(shell);
                Ok(())
            }
            Some(Commands::Version) => {
                println!("wellorder {}", env!("CARGO_PKG_VERSION"));
                Ok(())
            }
            None => {
                use clap::CommandFactory;
                let mut cmd = Self::command();
                cmd.print_help()?;
                println!();
                Ok(())
            }
        }
    }
}
