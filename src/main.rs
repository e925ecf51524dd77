use codelingo::adapters::FileSessionStore;
use codelingo::api::LessonApiClient;
use codelingo::app::{App, AppMessage};
use codelingo::cli::{parse_args, run_cli_command};
use codelingo::input::{handle_key, handle_paste, CommandRegistry};
use codelingo::startup::{init_logging, AppConfig};
use codelingo::terminal::{setup_panic_hook, TerminalManager};
use codelingo::ui;

use color_eyre::eyre::eyre;
use color_eyre::Result;
use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use std::sync::Arc;
use tokio::sync::mpsc;

fn main() -> Result<()> {
    let args = parse_args(std::env::args()).map_err(|e| eyre!(e))?;

    let mut config = AppConfig::from_env();
    if let Some(url) = args.api_url.clone() {
        config = config.with_api_url(url);
    }

    if let Some(result) = run_cli_command(&args.command, &config) {
        return result;
    }

    color_eyre::install()?;
    init_logging(&config.log_path()?, &config.log_filter)?;
    tracing::info!(
        "Starting codelingo {} against {}",
        codelingo::cli::VERSION,
        config.api_url
    );

    // Setup panic hook to ensure terminal cleanup on panic
    setup_panic_hook();

    let runtime = tokio::runtime::Runtime::new()?;

    let api = LessonApiClient::new(config.api_url.clone());
    let store = Arc::new(FileSessionStore::in_dir(config.data_dir()?));
    let mut app = App::with_timings(api, store, config.notification_timings);

    let mut manager = TerminalManager::new()?;
    let result = runtime.block_on(async {
        app.start().await;
        run_app(manager.terminal(), &mut app).await
    });
    manager.restore()?;

    if let Err(ref e) = result {
        tracing::error!("Exited with error: {:?}", e);
    }
    tracing::info!("Shutting down");
    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()>
where
    B::Error: Send + Sync + 'static,
{
    let registry = CommandRegistry::new();
    let mut event_stream = EventStream::new();

    // Take the message receiver from the app (we need ownership for select!)
    let mut message_rx: Option<mpsc::UnboundedReceiver<AppMessage>> = app.message_rx.take();

    loop {
        if app.needs_redraw {
            terminal.draw(|f| ui::render(f, app))?;
            app.needs_redraw = false;
        }

        // 16ms tick drives the busy spinner
        let timeout = tokio::time::sleep(std::time::Duration::from_millis(16));

        tokio::select! {
            _ = timeout => {
                app.tick();
            }

            event_result = event_stream.next() => {
                match event_result {
                    Some(Ok(Event::Key(key))) if key.kind == KeyEventKind::Press => {
                        handle_key(app, &registry, key);
                    }
                    Some(Ok(Event::Paste(text))) => {
                        handle_paste(app, text);
                    }
                    Some(Ok(Event::Resize(_, _))) => app.mark_dirty(),
                    Some(Ok(_)) => {}
                    Some(Err(e)) => {
                        tracing::error!("Terminal event stream failed: {}", e);
                        return Err(e.into());
                    }
                    None => return Ok(()),
                }
            }

            // Outcomes of spawned requests and notification expiry
            msg = async {
                match &mut message_rx {
                    Some(rx) => rx.recv().await,
                    None => std::future::pending().await,
                }
            } => {
                if let Some(msg) = msg {
                    app.handle_message(msg);
                }
            }
        }

        if app.should_quit {
            return Ok(());
        }
    }
}
