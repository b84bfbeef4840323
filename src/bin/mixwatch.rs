use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use mixwatch::builtin_registry;
use mixwatch::config::{expand_path, Config};
use mixwatch::runtime::block_on_detached;
use mixwatch::statusbar::{protocol, AppletDescriptor, Header, Statusbar};
use tokio::signal::unix::{signal, SignalKind};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "mixwatch")]
#[command(about = "Status bar applets that refresh when the sound mixer changes", long_about = None)]
struct Cli {
    #[arg(short, long)]
    verbose: bool,
    #[arg(long, env = "MIXWATCH_CONFIG")]
    config: Option<String>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run applets and stream updates in the i3bar protocol
    Bar(BarOpts),
    /// Print the current master volume
    Volume,
    /// Block until a mixer control changes
    Wait(WaitOpts),
    /// Print the effective configuration
    Config,
    /// Generate shell completions
    Completions(CompletionsOpts),
}

#[derive(clap::Args, Debug)]
struct BarOpts {
    /// Applets to run, as `name` or `name:key=value,...`
    #[arg(required = true)]
    applets: Vec<AppletDescriptor>,
}

#[derive(clap::Args, Debug)]
struct WaitOpts {
    /// Card index; negative picks the first available card
    #[arg(long, allow_negative_numbers = true)]
    card: Option<i32>,
}

#[derive(clap::Args, Debug)]
struct CompletionsOpts {
    shell: Shell,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)))
        .with_writer(std::io::stderr)
        .init();

    block_on_detached(run(cli)).context("Failed to start async runtime")?
}

async fn run(cli: Cli) -> Result<()> {
    let config = load_config(cli.config.as_deref())?;

    match cli.command {
        Commands::Bar(opts) => run_bar(opts, &config).await?,
        Commands::Volume => run_volume().await?,
        Commands::Wait(opts) => run_wait(opts, &config).await?,
        Commands::Config => print!("{}", toml::to_string_pretty(&config)?),
        Commands::Completions(opts) => {
            clap_complete::generate(opts.shell, &mut Cli::command(), "mixwatch", &mut std::io::stdout())
        }
    }

    Ok(())
}

fn load_config(path: Option<&str>) -> Result<Config> {
    match path {
        Some(path) => Config::load_from_path(expand_path(path))
            .with_context(|| format!("Failed to load configuration from {}", path)),
        None => Config::load().context("Failed to load configuration"),
    }
}

async fn run_bar(opts: BarOpts, config: &Config) -> Result<()> {
    let registry = builtin_registry();
    tracing::debug!("Available applets: {:?}", registry.names());

    let applets = registry.build_all(&opts.applets, config)?;
    let bar = Statusbar::new(applets).await?;
    tracing::info!("Running {} applet(s)", bar.applet_count());

    let mut updates = bar.listen();
    let mut sigterm = signal(SignalKind::terminate())?;
    let ctrl_c = tokio::signal::ctrl_c();
    tokio::pin!(ctrl_c);

    protocol::write_header(&mut std::io::stdout(), &Header::default())?;

    loop {
        tokio::select! {
            update = updates.recv() => match update {
                Some(segments) => protocol::write_update(&mut std::io::stdout(), &segments)?,
                None => break,
            },
            _ = &mut ctrl_c => {
                tracing::info!("Interrupted, exiting");
                break;
            }
            _ = sigterm.recv() => {
                tracing::info!("Terminated, exiting");
                break;
            }
        }
    }

    Ok(())
}

#[cfg(feature = "alsa")]
async fn run_volume() -> Result<()> {
    use mixwatch::{read_master_volume, AlsaBackend};

    let percent = tokio::task::spawn_blocking(|| read_master_volume(&AlsaBackend)).await??;
    println!("{}%", percent);
    Ok(())
}

#[cfg(feature = "alsa")]
async fn run_wait(opts: WaitOpts, config: &Config) -> Result<()> {
    use mixwatch::{wait_for_change, AlsaBackend, Card};

    let card = Card::from(opts.card.unwrap_or(config.volume.card));
    tracing::debug!("Waiting for control changes on {:?}", card);

    tokio::task::spawn_blocking(move || wait_for_change(&AlsaBackend, card)).await??;
    tracing::info!("Mixer controls changed");
    Ok(())
}

#[cfg(not(feature = "alsa"))]
async fn run_volume() -> Result<()> {
    anyhow::bail!("mixwatch was built without ALSA support")
}

#[cfg(not(feature = "alsa"))]
async fn run_wait(_opts: WaitOpts, _config: &Config) -> Result<()> {
    anyhow::bail!("mixwatch was built without ALSA support")
}
