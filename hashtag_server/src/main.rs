use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    match hashtag_server::run_with_config().await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "hashtag server stopped");
            ExitCode::FAILURE
        }
    }
}
