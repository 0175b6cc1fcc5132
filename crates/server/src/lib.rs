use anyhow::{Context as AnyhowContext, Result};
use clap::{Args, Parser, Subcommand};
use shaderforge_protocol::{DESCRIPTION_REQUIRED, GENERATE_SHADER_ROUTE, HEALTH_ROUTE};
use shaderforge_provider::{GeminiClient, ProviderConfig, ProviderOverrides, ShaderCompletion};
use std::fs;
use std::io::{self, Read};
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

pub mod http_api;
mod server_security;

fn print_stdout(text: &str) -> Result<()> {
    use std::io::Write;

    let mut stdout = io::stdout().lock();
    if let Err(err) = stdout
        .write_all(text.as_bytes())
        .and_then(|_| stdout.write_all(b"\n"))
        .and_then(|_| stdout.flush())
    {
        if err.kind() == io::ErrorKind::BrokenPipe {
            return Ok(());
        }
        return Err(err.into());
    }
    Ok(())
}

#[derive(Parser)]
#[command(name = "shaderforge")]
#[command(about = "Generate WebGL fragment shaders from text and repair them for the renderer", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Quiet mode: log only warnings/errors
    #[arg(long, global = true)]
    quiet: bool,

    /// Upstream model id (env: SHADERFORGE_MODEL)
    #[arg(long, global = true)]
    model: Option<String>,

    /// Upstream API base URL (env: SHADERFORGE_UPSTREAM_URL)
    #[arg(long, global = true)]
    upstream_url: Option<String>,

    /// Upstream request timeout in seconds
    #[arg(long, global = true, default_value_t = 60)]
    timeout_secs: u64,
}

#[derive(Subcommand)]
enum Commands {
    /// Serve the shader API over HTTP (POST /api/generate_shader, GET /health)
    ServeHttp(ServeArgs),

    /// Repair shader text from a file (or stdin) and print the result
    Repair(RepairArgs),

    /// Ask the upstream provider once and print the repaired shader
    Generate(GenerateArgs),
}

#[derive(Args)]
struct ServeArgs {
    /// Bind address, e.g. 127.0.0.1:5000
    #[arg(long, default_value = "127.0.0.1:5000")]
    bind: String,

    /// Allow binding to non-loopback addresses
    #[arg(long)]
    public: bool,
}

#[derive(Args)]
struct RepairArgs {
    /// Shader file to repair; stdin when omitted
    path: Option<PathBuf>,
}

#[derive(Args)]
struct GenerateArgs {
    /// Natural-language description of the effect
    description: String,
}

pub async fn main_entry() -> Result<()> {
    let cli = Cli::parse();

    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"));
    if cli.quiet {
        builder.filter_level(log::LevelFilter::Warn);
    } else if cli.verbose {
        builder.filter_level(log::LevelFilter::Debug);
    }
    // hyper's connection logs drown out request outcomes
    if !cli.verbose {
        builder.filter_module("hyper_util", log::LevelFilter::Warn);
    }
    builder.target(env_logger::Target::Stderr).init();

    let overrides = ProviderOverrides {
        model: cli.model.clone(),
        base_url: cli.upstream_url.clone(),
        timeout: Some(Duration::from_secs(cli.timeout_secs)),
    };

    match cli.command {
        Commands::ServeHttp(args) => serve_http(args, overrides).await?,
        Commands::Repair(args) => run_repair(args)?,
        Commands::Generate(args) => run_generate(args, overrides).await?,
    }

    Ok(())
}

fn build_provider(overrides: ProviderOverrides) -> Result<Arc<dyn ShaderCompletion>> {
    let config =
        ProviderConfig::from_env(overrides).context("Invalid upstream provider configuration")?;
    log::info!("Upstream provider: model={} base_url={}", config.model, config.base_url);
    let client = GeminiClient::new(config).context("Failed to build upstream HTTP client")?;
    Ok(Arc::new(client))
}

async fn serve_http(args: ServeArgs, overrides: ProviderOverrides) -> Result<()> {
    let provider = build_provider(overrides)?;
    let plan = server_security::BindPlan::resolve(&args.bind, args.public).await?;

    let app = http_api::router(http_api::AppState::new(provider));
    let listener = tokio::net::TcpListener::bind(&args.bind)
        .await
        .with_context(|| format!("Failed to bind {}", args.bind))?;
    let local_addr = listener.local_addr()?;
    let base_url = format!("http://{local_addr}");

    print_stdout(&format!("Serving shader API: {base_url}{GENERATE_SHADER_ROUTE}"))?;
    print_stdout(&format!("Health endpoint: {base_url}{HEALTH_ROUTE}"))?;
    if plan.public {
        print_stdout(&format!(
            "Public bind enabled (--public). Resolved addresses: {}",
            plan.describe()
        ))?;
    }
    print_stdout(&format!(
        "Try: curl -X POST {base_url}{GENERATE_SHADER_ROUTE} -H 'Content-Type: application/json' -d '{{\"description\":\"plasma waves\"}}'"
    ))?;

    axum::serve(listener, app).await?;
    Ok(())
}

fn run_repair(args: RepairArgs) -> Result<()> {
    let raw = match &args.path {
        Some(path) => fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?,
        None => {
            let mut buf = String::new();
            io::stdin()
                .read_to_string(&mut buf)
                .context("Failed to read shader from stdin")?;
            buf
        }
    };
    print_stdout(&shaderforge_repair::repair(&raw))
}

async fn run_generate(args: GenerateArgs, overrides: ProviderOverrides) -> Result<()> {
    let description = args.description.trim();
    if description.is_empty() {
        anyhow::bail!(DESCRIPTION_REQUIRED);
    }
    let provider = build_provider(overrides)?;
    let raw = provider
        .complete(description)
        .await
        .context("Upstream completion failed")?;
    print_stdout(&shaderforge_repair::repair(&raw))
}
