use anyhow::Result;
use soroban_sdk::Env;
use tracing::info;
use tracing_subscriber::EnvFilter;

use deploy::accounts::{strkey, Signers};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let env = Env::default();
    env.mock_all_auths();
    let signers = Signers::generate(&env);
    info!(
        buyer = %strkey(&signers.buyer),
        seller = %strkey(&signers.seller),
        inspector = %strkey(&signers.inspector),
        lender = %strkey(&signers.lender),
        "provisioned signers"
    );

    let deployment = deploy::guarded(|| deploy::run(&env, &signers))?;
    info!(titles = ?deployment.titles, "deployment complete");
    Ok(())
}
