use clap::Parser;
use log::info;
use miette::{IntoDiagnostic, Result};
use payments_console::application::dispatcher::Dispatcher;
use payments_console::domain::menu::MenuVariant;
use payments_console::domain::ports::TransportBox;
use payments_console::infrastructure::config::{ClientConfig, DEFAULT_BASE_URL, DEFAULT_SERVICE_ID};
use payments_console::infrastructure::http::ReqwestTransport;
use payments_console::interfaces::console::session::ConsoleSession;
use std::io;
use std::time::Duration;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Base URL of the payments endpoint. Request paths are appended to it as-is.
    #[arg(long, env = "PAYMENTS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Value sent in the `service_id` header.
    #[arg(long, env = "PAYMENTS_SERVICE_ID", default_value = DEFAULT_SERVICE_ID)]
    service_id: String,

    /// Menu layout and payload shape.
    #[arg(long, env = "PAYMENTS_API_VARIANT", value_enum, ignore_case = true, default_value_t = MenuVariant::Current)]
    variant: MenuVariant,

    /// Request timeout in seconds. No timeout when omitted.
    #[arg(long)]
    timeout_secs: Option<u64>,
}

#[tokio::main]
async fn main() -> Result<()> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    let config = ClientConfig::new(
        cli.base_url,
        cli.service_id,
        cli.timeout_secs.map(Duration::from_secs),
    )
    .into_diagnostic()?;
    let transport = ReqwestTransport::new(config).into_diagnostic()?;
    info!(
        "sending to {} as service '{}'",
        transport.config().base_url(),
        transport.config().service_id()
    );

    let transport: TransportBox = Box::new(transport);
    let dispatcher = Dispatcher::new(transport, cli.variant);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut session = ConsoleSession::new(stdin.lock(), stdout.lock());
    session.run(&dispatcher).await.into_diagnostic()?;

    Ok(())
}
