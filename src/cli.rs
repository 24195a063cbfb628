use crate::platform::PlatformKey;
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    version,
    name = "protoc-fetch",
    about = "Install prebuilt protoc binaries from official protobuf releases"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the package manifest (defaults to ./protoc.toml)
    #[arg(short, long)]
    pub manifest: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Download and install the protoc binary for this host.
    /// Examples:
    ///   protoc-fetch install                      # version from protoc.toml, into ./bin
    ///   protoc-fetch install --dest ~/.local/bin
    ///   protoc-fetch install --version latest
    Install {
        /// Destination directory (defaults to bin/ next to the manifest)
        #[arg(long)]
        dest: Option<String>,
        /// Override the manifest version; `latest` resolves the newest release
        #[arg(long)]
        version: Option<String>,
    },
    /// Show what would be downloaded (no changes)
    Plan,
    /// Download the binary into resources/ for bundling into a distributable
    Vendor {
        /// Target platform (defaults to the host platform)
        #[arg(long, value_enum)]
        platform: Option<PlatformKey>,
        /// Output directory (defaults to resources/ next to the manifest)
        #[arg(long)]
        dir: Option<String>,
    },
    /// Print the distributable compatibility tag
    Tag {
        /// Target platform (defaults to the host platform)
        #[arg(long, value_enum)]
        platform: Option<PlatformKey>,
    },
}
