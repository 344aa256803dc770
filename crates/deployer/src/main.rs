use clap::Parser;

#[tokio::main]
async fn main() {
    let args = deployer::arguments::Arguments::parse();
    observe::tracing::initialize(&args.log_filter, args.log_stderr_threshold);
    tracing::info!("running deployer with validated arguments:\n{}", args);

    // The only place the outcome is mapped to a process exit code.
    if let Err(err) = deployer::run(args).await {
        tracing::error!(?err, "deployment failed");
        std::process::exit(1);
    }
}
