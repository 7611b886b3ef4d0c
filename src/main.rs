use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use feature_table::{data, report, server};

#[derive(Parser)]
#[command(name = "ftab")]
#[command(about = "Partner feedback feature tables and prototype preview server")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate the feature spreadsheet and markdown report
    Report {
        /// Directory to write the report files into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Serve a prototype directory for local preview
    Serve {
        /// Port to listen on
        #[arg(short, long, default_value = "8000")]
        port: u16,

        /// Directory to serve
        #[arg(short, long, default_value = ".")]
        root: PathBuf,
    },
}

fn init_tracing() {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| "feature_table=debug,tower_http=debug".into()),
    );

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Report { out_dir }) => {
            let records = data::feature_records();
            let paths = report::generate(&records, &out_dir, chrono::Local::now())?;

            tracing::info!("Documented {} features", records.len());
            let groups = report::prototype_groups(&records);
            for (label, count) in report::prototype_counts(&groups) {
                tracing::info!("  {}: {} features", label, count);
            }

            println!("Created {}", paths.workbook.display());
            println!("Created {}", paths.markdown.display());
        }
        Some(Commands::Serve { port, root }) => {
            server::serve(root, port).await?;
        }
        None => {
            // Default: preview the current directory
            server::serve(PathBuf::from("."), server::DEFAULT_PORT).await?;
        }
    }

    Ok(())
}
