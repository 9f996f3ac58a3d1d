use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::EnvFilter;

use edubot_rag::{IndexBuilder, RagChain, Retriever, load_pdf_dir, strip_page_metadata};

mod startup;

use startup::AppContext;

#[derive(Parser)]
#[command(name = "edubot")]
#[command(about = "Retrieval-augmented educational chatbot over a PDF knowledge base", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Index the PDF corpus into the vector store and exit
    Ingest {
        /// Directory containing the PDF files
        #[arg(long, default_value = "data")]
        data_dir: PathBuf,
    },
    /// Serve the chat endpoint
    Serve {
        #[arg(long, default_value_t = 8080)]
        port: u16,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let ctx = AppContext::from_env()?;

    match cli.command {
        Commands::Ingest { data_dir } => ingest(ctx, &data_dir).await,
        Commands::Serve { port } => serve(ctx, port).await,
    }
}

async fn ingest(ctx: AppContext, data_dir: &std::path::Path) -> Result<()> {
    let pages = load_pdf_dir(data_dir)?;
    let documents = strip_page_metadata(pages);
    println!(
        "{} Loaded {} pages from {}",
        "📄".cyan(),
        documents.len(),
        data_dir.display()
    );

    let builder = IndexBuilder::new(ctx.embeddings, ctx.index);
    let report = builder.build(&documents).await?;

    println!(
        "{} Indexed {} chunks from {} documents",
        "✅".green(),
        report.chunks_indexed,
        report.documents
    );
    Ok(())
}

async fn serve(ctx: AppContext, port: u16) -> Result<()> {
    let retriever = Retriever::new(ctx.embeddings, ctx.index);
    let chain = Arc::new(RagChain::new(retriever, ctx.llm));

    println!(
        "{} Serving on {}",
        "🚀".green(),
        format!("http://0.0.0.0:{port}/").bold()
    );

    let router = edubot_web::router(chain);
    edubot_web::serve(router, port).await?;
    Ok(())
}
