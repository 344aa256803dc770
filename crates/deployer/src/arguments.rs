use {clap::Parser, std::path::PathBuf, tracing::level_filters::LevelFilter, url::Url};

#[derive(Parser)]
pub struct Arguments {
    #[clap(long, env, default_value = "warn,deployer=debug,contracts=debug")]
    pub log_filter: String,

    #[clap(long, env, default_value = "error")]
    pub log_stderr_threshold: LevelFilter,

    /// The Ethereum node URL to connect to.
    #[clap(long, env, default_value = "http://localhost:8545")]
    pub node_url: Url,

    /// Hex encoded private keys authorized to send transactions. The first
    /// key signs and pays for the deployment.
    #[clap(long, env, use_value_delimiter = true, hide_env_values = true)]
    pub private_keys: Vec<String>,

    /// Path to a Hardhat build-artifact file or artifacts directory.
    #[clap(long, env, default_value = "./artifacts")]
    pub artifacts: PathBuf,

    /// Name of the contract to deploy.
    #[clap(long, env, default_value = "AgentIDProviderNetwork")]
    pub contract_name: String,
}

impl std::fmt::Display for Arguments {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Self {
            log_filter,
            log_stderr_threshold,
            node_url,
            private_keys: _,
            artifacts,
            contract_name,
        } = self;

        writeln!(f, "log_filter: {log_filter}")?;
        writeln!(f, "log_stderr_threshold: {log_stderr_threshold}")?;
        writeln!(f, "node_url: {node_url}")?;
        writeln!(f, "private_keys: SECRET")?;
        writeln!(f, "artifacts: {}", artifacts.display())?;
        writeln!(f, "contract_name: {contract_name}")?;
        Ok(())
    }
}
