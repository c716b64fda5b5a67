//! apicache - Entry Point
//!
//! | Mode | Command | Description |
//! |------|---------|-------------|
//! | **Worker** | `apicache --start` | Consume the Redis refresh queue |
//! | **Refresh** | `apicache --refresh=<key>` | Refresh one key and exit |
//! | **Fetch** | `apicache --fetch <key>` | Print the payload for a key |
//! | **Post** | `apicache --post <path> --body <json>` | Uncached POST to the remote API |
//! | **Inspect** | `apicache --inspect <key>` | Print verdict and write time |

use apicache::cli::Cli;
use clap::Parser;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mode = cli.mode()?;
    apicache::run(cli.config.as_deref(), mode).await
}
