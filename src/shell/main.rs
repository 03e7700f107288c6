use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use invoicing::modules::invoicing::adapters::outbound::document_sink_pdf::PdfDocumentSink;
use invoicing::modules::invoicing::adapters::outbound::entry_store::EntryStore;
use invoicing::modules::invoicing::adapters::outbound::entry_store_in_memory::InMemoryEntryStore;
use invoicing::modules::invoicing::adapters::outbound::entry_store_supabase::SupabaseEntryStore;
use invoicing::shared::config::AppConfig;
use invoicing::shared::infrastructure::identity::IdentityProvider;
use invoicing::shared::infrastructure::identity::in_memory::InMemoryIdentityProvider;
use invoicing::shared::infrastructure::identity::supabase::SupabaseIdentityProvider;
use invoicing::shared::infrastructure::supabase::SupabaseClient;
use invoicing::shell::http::router;
use invoicing::shell::sessions::SessionRegistry;
use invoicing::shell::state::AppState;
use tracing_subscriber::{EnvFilter, fmt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    fmt().with_env_filter(EnvFilter::from_default_env()).init();

    let config = AppConfig::load().context("loading configuration")?;

    let (identity, store): (Arc<dyn IdentityProvider>, Arc<dyn EntryStore>) =
        match &config.supabase {
            Some(supabase) => {
                let client = SupabaseClient::new(&supabase.url, &supabase.key);
                (
                    Arc::new(SupabaseIdentityProvider::new(client.clone())),
                    Arc::new(SupabaseEntryStore::new(client)),
                )
            }
            None => {
                tracing::warn!("no hosted project configured, using in-memory auth and entries");
                (
                    Arc::new(InMemoryIdentityProvider::new()),
                    Arc::new(InMemoryEntryStore::new()),
                )
            }
        };
    let documents = Arc::new(PdfDocumentSink::new(&config.invoices.output_dir));

    let idle_timeout = Duration::from_secs(config.server.session_idle_minutes * 60);
    let state = AppState::new(identity, store, documents, &config.invoices.currency)
        .with_sessions(SessionRegistry::with_idle_timeout(idle_timeout));
    let app = router(state);

    let addr: SocketAddr = format!("{}:{}", config.server.host, config.server.port)
        .parse()
        .context("parsing server address")?;
    tracing::info!(
        output_dir = %config.invoices.output_dir.display(),
        "invoicing endpoint: http://{}",
        addr
    );
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .with_context(|| format!("binding {addr}"))?;
    axum::serve(listener, app).await?;
    Ok(())
}
