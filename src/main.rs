//! Coinwatch CLI
//!
//! Terminal crypto dashboard:
//! - `watch`: live page refreshed on the poll interval (default)
//! - `snapshot`: fetch once and print the page
//! - `config`: print or write the default config file

use anyhow::Context;
use clap::{Parser, Subcommand};
use coinwatch::*;
use std::future::Future;
use std::path::PathBuf;
use std::sync::Arc;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader, Lines};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Clear screen and move the cursor home
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[H";

#[derive(Parser)]
#[command(name = "coinwatch")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Top cryptocurrencies with live prices, in your terminal")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Config file (default: search the standard locations)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Asset listing endpoint
    #[arg(long, global = true)]
    pub endpoint: Option<String>,

    /// Refresh interval in seconds
    #[arg(long, global = true)]
    pub interval: Option<u64>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Live dashboard. Type an entry number, id or symbol and press Enter to select; q quits.
    Watch,

    /// Fetch once and print the page
    Snapshot {
        /// Asset to show in the detail panel (id or symbol)
        #[arg(short, long)]
        select: Option<String>,
        /// Print the fetched asset list as JSON instead
        #[arg(long)]
        json: bool,
    },

    /// Generate default config file
    Config {
        /// Output path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    if let Some(Commands::Config { output }) = &cli.command {
        return write_default_config(output.as_deref());
    }

    let DefaultLoad {
        mut config,
        source,
        errors,
    } = match &cli.config {
        Some(path) => DefaultLoad {
            config: Config::load_with_env(path)
                .with_context(|| format!("loading config from {}", path.display()))?,
            source: Some(path.clone()),
            errors: Vec::new(),
        },
        None => Config::load_default(),
    };
    if let Some(endpoint) = cli.endpoint {
        config.api.endpoint = endpoint;
    }
    if let Some(interval) = cli.interval {
        config.polling.interval_secs = interval;
    }

    init_logging(&config.logging);
    tracing::info!("Coinwatch v{}", env!("CARGO_PKG_VERSION"));

    for error in &errors {
        tracing::warn!("Skipped config file: {}", error);
    }
    match &source {
        Some(path) => tracing::info!("Loaded config from {}", path.display()),
        None => tracing::info!("Using default config with environment overrides"),
    }

    let client = PriceApiClient::new(config.client_config()).context("creating HTTP client")?;

    match cli.command {
        Some(Commands::Snapshot { select, json }) => snapshot(&config, client, select, json).await,
        _ => watch(&config, client).await,
    }
}

fn init_logging(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::new(
        std::env::var("RUST_LOG").unwrap_or_else(|_| format!("coinwatch={}", logging.level)),
    );

    // Logs go to stderr so the page on stdout stays readable
    if logging.format == "json" {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}

fn write_default_config(output: Option<&std::path::Path>) -> anyhow::Result<()> {
    let content = generate_default_config();
    match output {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("writing config to {}", path.display()))?;
            println!("Config written to {}", path.display());
        }
        None => print!("{}", content),
    }
    Ok(())
}

async fn snapshot(
    config: &Config,
    client: PriceApiClient,
    select: Option<String>,
    json: bool,
) -> anyhow::Result<()> {
    let assets = client
        .fetch_assets()
        .await
        .with_context(|| format!("fetching {}", config.api.endpoint))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&assets)?);
        return Ok(());
    }

    let mut state = QueryState::new();
    state.succeed(assets, chrono::Utc::now());

    let mut dashboard = Dashboard::new(config.display_options());
    dashboard.apply(state);
    if let Some(needle) = select {
        if !dashboard.select_matching(&needle) {
            anyhow::bail!("no listed asset matches '{}'", needle);
        }
    }

    print!("{}", render_page(&dashboard.view(), &config.render_options()));
    Ok(())
}

async fn watch(config: &Config, client: PriceApiClient) -> anyhow::Result<()> {
    let mut poller = AssetPoller::new(Arc::new(client), config.poll_interval()).start();
    let mut dashboard = Dashboard::new(config.display_options());
    let render_options = config.render_options();
    let input = BufReader::new(tokio::io::stdin()).lines();
    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
    };

    run_page(&mut poller, &mut dashboard, input, shutdown, |dashboard, hint| {
        draw(dashboard, &render_options, hint)
    })
    .await?;

    poller.shutdown();
    tracing::info!("Coinwatch stopped");
    Ok(())
}

/// Drive the page until `q`, `shutdown` or the poller ends.
///
/// Closed input only stops reading; the page keeps polling.
async fn run_page<R>(
    poller: &mut PollerHandle,
    dashboard: &mut Dashboard,
    mut input: Lines<R>,
    shutdown: impl Future<Output = ()>,
    mut redraw: impl FnMut(&Dashboard, Option<&str>),
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
{
    tokio::pin!(shutdown);
    let mut stdin_open = true;
    let mut hint: Option<String> = None;

    redraw(dashboard, hint.as_deref());

    loop {
        tokio::select! {
            state = poller.changed() => {
                let Some(state) = state else { break };
                dashboard.apply(state);
            }
            line = input.next_line(), if stdin_open => {
                let line = line.context("reading stdin")?;
                match handle_input(dashboard, line.as_deref()) {
                    InputAction::Quit => break,
                    InputAction::Closed => {
                        tracing::debug!("stdin closed, polling until interrupted");
                        stdin_open = false;
                        continue;
                    }
                    InputAction::Hint(next) => hint = next,
                }
            }
            _ = &mut shutdown => break,
        }

        redraw(dashboard, hint.as_deref());
    }

    Ok(())
}

#[derive(Debug, PartialEq)]
enum InputAction {
    Quit,
    /// End of input
    Closed,
    /// Keep going, showing this hint under the page
    Hint(Option<String>),
}

fn handle_input(dashboard: &mut Dashboard, line: Option<&str>) -> InputAction {
    let Some(line) = line else {
        return InputAction::Closed;
    };

    let command = line.trim();
    if command.eq_ignore_ascii_case("q") || command.eq_ignore_ascii_case("quit") {
        return InputAction::Quit;
    }
    InputAction::Hint(handle_selection(dashboard, command))
}

/// Apply one line of user input; returns a hint to show under the page.
///
/// A number is a 1-based list position; anything else, or a number with no
/// entry at that position, is matched against ids and symbols.
fn handle_selection(dashboard: &mut Dashboard, command: &str) -> Option<String> {
    if command.is_empty() {
        return None;
    }

    let by_position = match command.parse::<usize>() {
        Ok(n) if n >= 1 => dashboard.select_index(n - 1),
        _ => false,
    };

    if by_position || dashboard.select_matching(command) {
        tracing::debug!("Selected {:?}", dashboard.selection().selected_id());
        None
    } else {
        Some(format!("No entry matches '{}'", command))
    }
}

fn draw(dashboard: &Dashboard, options: &RenderOptions, hint: Option<&str>) {
    let mut page = render_page(&dashboard.view(), options);
    page.push('\n');
    if let Some(hint) = hint {
        page.push_str(hint);
        page.push('\n');
    }
    page.push_str("Select: number, id or symbol + Enter. q to quit.\n");
    print!("{}{}", CLEAR_SCREEN, page);
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    struct FixedSource {
        calls: AtomicUsize,
    }

    #[async_trait]
    impl AssetSource for FixedSource {
        fn name(&self) -> &str {
            "fixed"
        }

        async fn fetch_assets(&self) -> FetchResult<AssetList> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            Ok(listed())
        }
    }

    fn listed() -> AssetList {
        vec![
            AssetRecord::new("bitcoin", "Bitcoin", "BTC").price("50000"),
            AssetRecord::new("ethereum", "Ethereum", "ETH").price("3000"),
            AssetRecord::new("answer", "Answer", "42").price("1"),
        ]
    }

    fn loaded_dashboard() -> Dashboard {
        let mut state = QueryState::new();
        state.succeed(listed(), chrono::Utc::now());
        let mut dashboard = Dashboard::default();
        dashboard.apply(state);
        dashboard
    }

    #[test]
    fn test_selection_by_position() {
        let mut dashboard = loaded_dashboard();
        assert_eq!(handle_selection(&mut dashboard, "2"), None);
        assert_eq!(dashboard.selection().selected_id(), Some("ethereum"));
    }

    #[test]
    fn test_selection_zero_is_not_a_position() {
        let mut dashboard = loaded_dashboard();
        let hint = handle_selection(&mut dashboard, "0");
        assert_eq!(hint.as_deref(), Some("No entry matches '0'"));
        assert_eq!(dashboard.selection().selected_id(), Some("bitcoin"));
    }

    #[test]
    fn test_selection_by_symbol_or_id() {
        let mut dashboard = loaded_dashboard();
        assert_eq!(handle_selection(&mut dashboard, "eth"), None);
        assert_eq!(dashboard.selection().selected_id(), Some("ethereum"));

        assert_eq!(handle_selection(&mut dashboard, "bitcoin"), None);
        assert_eq!(dashboard.selection().selected_id(), Some("bitcoin"));
    }

    #[test]
    fn test_numeric_symbol_falls_back_to_match() {
        let mut dashboard = loaded_dashboard();
        assert_eq!(handle_selection(&mut dashboard, "42"), None);
        assert_eq!(dashboard.selection().selected_id(), Some("answer"));
    }

    #[test]
    fn test_selection_unknown_and_empty() {
        let mut dashboard = loaded_dashboard();
        assert!(handle_selection(&mut dashboard, "doge").is_some());
        assert_eq!(handle_selection(&mut dashboard, ""), None);
        assert_eq!(dashboard.selection().selected_id(), Some("bitcoin"));
    }

    #[test]
    fn test_input_actions() {
        let mut dashboard = loaded_dashboard();
        assert_eq!(handle_input(&mut dashboard, None), InputAction::Closed);
        assert_eq!(handle_input(&mut dashboard, Some(" Q ")), InputAction::Quit);
        assert_eq!(handle_input(&mut dashboard, Some("quit")), InputAction::Quit);
        assert_eq!(handle_input(&mut dashboard, Some("3")), InputAction::Hint(None));
    }

    #[tokio::test(start_paused = true)]
    async fn test_closed_input_keeps_polling() {
        let source = Arc::new(FixedSource {
            calls: AtomicUsize::new(0),
        });
        let mut poller = AssetPoller::new(source.clone(), Duration::from_secs(60)).start();
        let mut dashboard = Dashboard::default();
        let input = BufReader::new(tokio::io::empty()).lines();
        let mut redraws = 0;

        run_page(
            &mut poller,
            &mut dashboard,
            input,
            tokio::time::sleep(Duration::from_secs(150)),
            |_, _| redraws += 1,
        )
        .await
        .unwrap();

        // Fetches at 0s, 60s and 120s all landed after input closed
        assert_eq!(source.calls.load(Ordering::SeqCst), 3);
        assert_eq!(dashboard.assets().len(), 3);
        assert!(redraws > 1);
        poller.shutdown();
    }

    #[tokio::test(start_paused = true)]
    async fn test_quit_ends_page() {
        let source = Arc::new(FixedSource {
            calls: AtomicUsize::new(0),
        });
        let mut poller = AssetPoller::new(source, Duration::from_secs(60)).start();
        let mut dashboard = Dashboard::default();
        let input = BufReader::new(&b"q\n"[..]).lines();

        let finished = tokio::time::timeout(
            Duration::from_secs(5),
            run_page(
                &mut poller,
                &mut dashboard,
                input,
                std::future::pending::<()>(),
                |_, _| {},
            ),
        )
        .await;

        assert!(matches!(finished, Ok(Ok(()))));
        poller.shutdown();
    }
}
