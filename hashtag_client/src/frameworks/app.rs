// Framework bootstrap for the terminal client.

use crate::frameworks::config::{self, OutputFormat};
use crate::frameworks::logging;
use crate::interface_adapters::clients::hashtags::HashtagApiClient;
use crate::interface_adapters::html::render_html;
use crate::interface_adapters::region::MemoryRegion;
use crate::interface_adapters::terminal::{StderrNotifier, TextField, render_text};
use crate::use_cases::{CycleOutcome, HashtagFetchHandler};

use std::io::IsTerminal;
use std::process::ExitCode;

pub async fn run() -> ExitCode {
    // Load .env locally; missing is fine.
    let _ = dotenvy::dotenv();
    logging::init(config::log_format());

    let input = match TextField::from_args_or_stdin(std::env::args().skip(1)) {
        Ok(input) => input,
        Err(e) => {
            tracing::error!(error = %e, "failed to read topic");
            return ExitCode::FAILURE;
        }
    };

    let endpoint = config::hashtag_api_url();
    let timeout = config::client_timeout();
    let source = match HashtagApiClient::new(&endpoint, timeout) {
        Ok(client) => client,
        Err(e) => {
            tracing::error!(error = %e, "failed to initialize hashtag client");
            return ExitCode::FAILURE;
        }
    };
    tracing::debug!(
        endpoint = %source.endpoint(),
        timeout = ?timeout,
        "hashtag client configured"
    );

    let results = MemoryRegion::new();
    let handler = HashtagFetchHandler {
        input,
        results: results.clone(),
        notifier: StderrNotifier,
        source,
    };

    let outcome = handler.fetch_and_render().await;

    let elements = results.elements();
    if !elements.is_empty() {
        let rendered = match config::output_format() {
            OutputFormat::Html => render_html(&elements),
            OutputFormat::Text => render_text(&elements, std::io::stdout().is_terminal()),
        };
        println!("{rendered}");
    }

    match outcome {
        CycleOutcome::Rendered { .. } => ExitCode::SUCCESS,
        CycleOutcome::InputEmpty => ExitCode::from(2),
        CycleOutcome::RemoteError | CycleOutcome::RequestFailed => ExitCode::FAILURE,
    }
}
