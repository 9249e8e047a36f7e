use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use bytes::Bytes;
use clap::{Parser, Subcommand};
use tokio_util::sync::CancellationToken;
use tracing::Instrument as _;

use longrun::application::ports::HttpTransport;
use longrun::infrastructure::http::ReqwestTransport;
use longrun::infrastructure::observability::{init_tracing, RequestId, TracingConfig};
use longrun::infrastructure::services::{
    searchable_pdf_filename, ContentUnderstandingService, DocumentIntelligenceService,
    DocumentSource,
};
use longrun::presentation::Settings;

#[derive(Parser)]
#[command(
    name = "longrun",
    about = "Drive remote long-running document-analysis operations"
)]
struct Cli {
    /// Emit logs as JSON
    #[arg(long, global = true)]
    json_logs: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Run the configured Content Understanding analyzer over a document
    /// given as an http(s) URL or a local file path
    Analyze { source: String },
    /// Produce a searchable PDF from a local document via Document
    /// Intelligence prebuilt-read
    SearchablePdf { file: PathBuf },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    let settings = Settings::from_env()?;

    let tracing_config = TracingConfig {
        environment: settings.environment.to_string(),
        json_format: settings.logging.json_format || cli.json_logs,
    };
    init_tracing(&tracing_config);

    let transport: Arc<dyn HttpTransport> = Arc::new(ReqwestTransport::new());
    let policy = settings.poll_policy();

    // Ctrl-c aborts at the next poll boundary instead of leaving the
    // process stuck waiting on a remote operation.
    let cancel = CancellationToken::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::warn!("Interrupt received, cancelling");
                cancel.cancel();
            }
        });
    }

    let request_id = RequestId::generate();
    let span = tracing::info_span!("operation", request_id = %request_id);

    async {
        match cli.command {
            Command::Analyze { source } => {
                let cfg = settings
                    .content_understanding
                    .context("AZURE_CU_ENDPOINT is not set")?;
                let service = ContentUnderstandingService::new(
                    transport,
                    &cfg.endpoint,
                    &cfg.key,
                    &cfg.analyzer,
                );

                let document = if Path::new(&source).exists() {
                    let data = tokio::fs::read(&source)
                        .await
                        .with_context(|| format!("reading {source}"))?;
                    DocumentSource::Bytes(Bytes::from(data))
                } else if source.starts_with("https://") || source.starts_with("http://") {
                    DocumentSource::Url(source)
                } else {
                    anyhow::bail!("source must be an existing file path or an http(s) URL");
                };

                tracing::info!("Analyzing document");
                let result = service.analyze(&document, &policy, &cancel).await?;
                println!("{}", serde_json::to_string_pretty(&result)?);
            }
            Command::SearchablePdf { file } => {
                let cfg = settings
                    .document_intelligence
                    .context("AZURE_DOCUMENT_INTELLIGENCE_ENDPOINT is not set")?;
                let service =
                    DocumentIntelligenceService::new(transport, &cfg.endpoint, &cfg.key);

                let data = tokio::fs::read(&file)
                    .await
                    .with_context(|| format!("reading {}", file.display()))?;

                tracing::info!("Submitting document for searchable PDF rendering");
                let pdf = service.make_searchable(&data, &policy, &cancel).await?;

                let output = searchable_pdf_filename(&file);
                tokio::fs::write(&output, &pdf)
                    .await
                    .with_context(|| format!("writing {output}"))?;
                tracing::info!(output = %output, bytes = pdf.len(), "Searchable PDF written");
                println!("File downloaded successfully as {output}");
            }
        }
        Ok(())
    }
    .instrument(span)
    .await
}
