// Lambda bootstrap entry point for the email worker function

use lambda_runtime::{Error, run, service_fn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    email_provider::setup_logging();

    run(service_fn(email_provider::worker::handler)).await
}
