use jira_sync::config::Config;
use jira_sync::schemas::Response;
use jira_sync::{error, handler, init_logger};
use std::process::ExitCode;

#[tokio::main]
async fn main() -> ExitCode {
    init_logger();

    let response = match Config::from_env() {
        Ok(config) => handler::run(&config).await,
        Err(e) => {
            error!("aborting: {e}");
            Response { status_code: 500 }
        }
    };

    println!("{}", serde_json::json!({ "statusCode": response.status_code }));

    if response.status_code == 200 {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
