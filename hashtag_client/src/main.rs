use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    hashtag_client::run().await
}
