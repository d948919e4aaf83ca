use akhenaten_client::{
    ArtifactService, ClientBuilder, ConfigSource, DownloadOutcome, MetadataRecord, Slug,
    StorageBackend, ViewerUrlStyle,
};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use serde_json::json;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::{debug, info};
use tracing_subscriber::{filter::LevelFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser, Debug)]
#[command(name = "akhenaten")]
#[command(about = "Upload, fetch and manage hosted plotly figures", long_about = None)]
struct Cli {
    /// Access key (the bucket is derived from it unless --bucket is given)
    #[arg(long, env = "AKHENATEN_ID")]
    access_key: Option<String>,

    /// Secret key
    #[arg(long, env = "AKHENATEN_KEY", hide_env_values = true)]
    secret_key: Option<String>,

    /// Bucket name
    #[arg(long, env = "AKHENATEN_BUCKET")]
    bucket: Option<String>,

    /// Storage endpoint host, optionally with scheme
    #[arg(long, env = "AKHENATEN_ENDPOINT")]
    endpoint: Option<String>,

    /// Storage region
    #[arg(long, env = "AKHENATEN_REGION")]
    region: Option<String>,

    /// Viewer URL style: query or path
    #[arg(long, env = "AKHENATEN_VIEWER_STYLE")]
    viewer_style: Option<ViewerUrlStyle>,

    /// Use plain HTTP towards the store
    #[arg(long, env = "AKHENATEN_INSECURE")]
    insecure: bool,

    /// Run against a throwaway in-memory store
    #[arg(long, hide = true)]
    in_memory: bool,

    /// Log level
    #[arg(long, env = "LOG_LEVEL", default_value = "warn")]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// List stored figures
    List,

    /// Upload a figure JSON file
    Upload {
        /// Figure file (plotly JSON)
        file: PathBuf,
        /// Slug to store under; a UUID is generated when omitted
        #[arg(short, long)]
        slug: Option<String>,
        /// Metadata title
        #[arg(long, requires = "author")]
        title: Option<String>,
        /// Metadata author
        #[arg(long, requires = "title")]
        author: Option<String>,
        /// Metadata description
        #[arg(long, requires = "title")]
        description: Option<String>,
        /// Metadata author email
        #[arg(long, requires = "title")]
        email: Option<String>,
        /// Metadata avatar URL
        #[arg(long, requires = "title")]
        avatar: Option<String>,
    },

    /// Download a figure
    Download {
        /// Figure slug
        slug: String,
        /// Write the figure here instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Delete a figure and its metadata
    Delete {
        /// Figure slug
        slug: String,
    },

    /// Print the public URLs of a figure
    Urls {
        /// Figure slug
        slug: String,
    },
}

impl Cli {
    fn config_source(&self) -> ConfigSource {
        ConfigSource {
            access_key: self.access_key.clone(),
            secret_key: self.secret_key.clone(),
            bucket: self.bucket.clone(),
            endpoint: self.endpoint.clone(),
            region: self.region.clone(),
            viewer_style: self.viewer_style,
            insecure: self.insecure.then_some(true),
        }
    }

    fn init_logging(&self) -> Result<()> {
        let level = LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::WARN);

        tracing_subscriber::registry()
            .with(level)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();

        Ok(())
    }
}

fn metadata_from_args(
    title: Option<String>,
    author: Option<String>,
    description: Option<String>,
    email: Option<String>,
    avatar: Option<String>,
) -> Result<Option<MetadataRecord>> {
    let (Some(title), Some(author)) = (title, author) else {
        return Ok(None);
    };

    let mut record = MetadataRecord::new(title, author)?;
    record.set_description(description);
    record.set_author_email(email)?;
    record.set_avatar(avatar);
    Ok(Some(record))
}

fn print_json(value: &impl serde::Serialize) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    cli.init_logging()?;

    let config = cli
        .config_source()
        .resolve()
        .context("Failed to resolve client configuration")?;
    debug!(?config, "Resolved configuration");

    let backend = if cli.in_memory {
        StorageBackend::InMemory
    } else {
        StorageBackend::S3
    };
    let client = ClientBuilder::new(config)
        .with_storage_backend(backend)
        .build()
        .context("Failed to build client")?;

    match cli.command {
        Commands::List => {
            let slugs = client.list_artifacts().await?;
            print_json(&slugs)?;
        }
        Commands::Upload {
            file,
            slug,
            title,
            author,
            description,
            email,
            avatar,
        } => {
            let raw = tokio::fs::read(&file)
                .await
                .with_context(|| format!("Failed to read {}", file.display()))?;
            let figure: serde_json::Value = serde_json::from_slice(&raw)
                .with_context(|| format!("{} is not valid JSON", file.display()))?;

            let slug = slug.map(Slug::new).transpose()?;
            let metadata = metadata_from_args(title, author, description, email, avatar)?;

            let result = client.upload_artifact(&figure, slug, metadata).await?;
            info!(slug = %result.slug, "Upload complete");
            print_json(&result)?;
        }
        Commands::Download { slug, output } => {
            let slug = Slug::new(slug)?;
            match client.download_artifact(&slug).await? {
                DownloadOutcome::Found { artifact, metadata } => match output {
                    Some(path) => {
                        tokio::fs::write(&path, serde_json::to_vec_pretty(&artifact)?)
                            .await
                            .with_context(|| format!("Failed to write {}", path.display()))?;
                        print_json(&json!({ "metadata": metadata }))?;
                    }
                    None => print_json(&json!({ "figure": artifact, "metadata": metadata }))?,
                },
                DownloadOutcome::NotFound => anyhow::bail!("Figure '{}' not found", slug),
            }
        }
        Commands::Delete { slug } => {
            let slug = Slug::new(slug)?;
            client.delete_artifact(&slug).await?;
            print_json(&json!({ "deleted": slug }))?;
        }
        Commands::Urls { slug } => {
            let slug = Slug::new(slug)?;
            print_json(&client.artifact_urls(&slug))?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parsing() {
        let cli = Cli::parse_from([
            "akhenaten",
            "--access-key",
            "Xabc123",
            "--secret-key",
            "secret",
            "--viewer-style",
            "path",
            "upload",
            "figure.json",
            "--slug",
            "testplot",
            "--title",
            "Test Plot",
            "--author",
            "Tester",
        ]);

        assert_eq!(cli.access_key.as_deref(), Some("Xabc123"));
        assert_eq!(cli.viewer_style, Some(ViewerUrlStyle::Path));
        match cli.command {
            Commands::Upload { slug, title, .. } => {
                assert_eq!(slug.as_deref(), Some("testplot"));
                assert_eq!(title.as_deref(), Some("Test Plot"));
            }
            other => panic!("Expected upload command, got {:?}", other),
        }
    }

    #[test]
    fn test_title_requires_author() {
        let result = Cli::try_parse_from(["akhenaten", "upload", "figure.json", "--title", "Only"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_metadata_from_args() {
        assert!(metadata_from_args(None, None, None, None, None)
            .unwrap()
            .is_none());

        let record = metadata_from_args(
            Some("Test Plot".to_string()),
            Some("Tester".to_string()),
            None,
            Some("tester@example.com".to_string()),
            None,
        )
        .unwrap()
        .unwrap();
        assert_eq!(record.author_email(), Some("tester@example.com"));

        assert!(metadata_from_args(
            Some("Test Plot".to_string()),
            Some("Tester".to_string()),
            None,
            Some("nope".to_string()),
            None,
        )
        .is_err());
    }
}
