//! Deployment sequence for the title registry and the escrow.
//!
//! Runs against a soroban-sdk sandbox ledger: contracts are registered in
//! process and every signer's authorization is mocked, standing in for a
//! network RPC and key store.

pub mod accounts;
pub mod plan;

use std::fmt::Debug;
use std::panic::{self, AssertUnwindSafe};

use anyhow::{anyhow, Context, Result};
use escrow::{EscrowClient, RelistPolicy};
use real_estate::{RealEstate, RealEstateClient};
use soroban_sdk::{testutils::Address as _, Address, Env, InvokeError, String};
use tracing::{debug, info};

use crate::accounts::{strkey, Signers};
use crate::plan::{metadata_uri, APPROVAL_LEDGERS, LISTINGS};

/// Addresses produced by [`run`].
#[derive(Clone, Debug)]
pub struct Deployment {
    pub real_estate: Address,
    pub payment_token: Address,
    pub escrow: Address,
    pub titles: Vec<u32>,
}

/// Deploys the registry, mints one title per planned listing, deploys the
/// escrow and lists every title with the buyer.
pub fn run(env: &Env, signers: &Signers) -> Result<Deployment> {
    let real_estate = env.register(RealEstate, ());
    let registry = RealEstateClient::new(env, &real_estate);
    println!("Deployed Real Estate Contract at: {}", strkey(&real_estate));
    println!("Minting {} properties...\n", LISTINGS.len());

    let mut titles = Vec::with_capacity(LISTINGS.len());
    for index in 0..LISTINGS.len() {
        let uri = String::from_str(env, &metadata_uri(index));
        let title = settle(registry.try_mint(&signers.seller, &uri))
            .with_context(|| format!("minting property {}", index + 1))?;
        debug!(title, "minted");
        titles.push(title);
    }

    let issuer = Address::generate(env);
    let payment_token = env.register_stellar_asset_contract_v2(issuer).address();
    info!(address = %strkey(&payment_token), "deployed payment token");

    let escrow = env.register(
        escrow::Escrow,
        (
            real_estate.clone(),
            payment_token.clone(),
            signers.seller.clone(),
            signers.inspector.clone(),
            signers.lender.clone(),
            RelistPolicy::Reject,
        ),
    );
    let coordinator = EscrowClient::new(env, &escrow);
    println!("Deployed Escrow Contract at: {}", strkey(&escrow));
    println!("Listing {} properties...\n", titles.len());

    let live_until = env.ledger().sequence() + APPROVAL_LEDGERS;
    for &title in &titles {
        settle(registry.try_approve(&signers.seller, &escrow, &title, &live_until))
            .with_context(|| format!("approving escrow for title {title}"))?;
    }

    for (&title, terms) in titles.iter().zip(LISTINGS.iter()) {
        settle(coordinator.try_list(
            &signers.seller,
            &title,
            &signers.buyer,
            &terms.purchase_price,
            &terms.escrow_amount,
        ))
        .with_context(|| format!("listing title {title}"))?;
        debug!(title, price = %terms.purchase_price, "listed");
    }

    println!("Finished.");
    Ok(Deployment {
        real_estate,
        payment_token,
        escrow,
        titles,
    })
}

/// Runs `f`, turning a panic inside the sandbox (a failing constructor, a
/// host trap during registration) into an error so the caller exits through
/// the normal error path instead of with the panic status.
pub fn guarded<T>(f: impl FnOnce() -> Result<T>) -> Result<T> {
    panic::catch_unwind(AssertUnwindSafe(f)).unwrap_or_else(|payload| {
        let message = payload
            .downcast_ref::<&str>()
            .map(|s| s.to_string())
            .or_else(|| payload.downcast_ref::<std::string::String>().cloned())
            .unwrap_or_else(|| "unknown panic".to_string());
        Err(anyhow!("deployment aborted: {message}"))
    })
}

/// Flattens a `try_*` client result into an error naming what went wrong.
fn settle<T, C, E>(result: Result<Result<T, C>, Result<E, InvokeError>>) -> Result<T>
where
    C: Debug,
    E: Debug,
{
    match result {
        Ok(Ok(value)) => Ok(value),
        Ok(Err(conversion)) => Err(anyhow!("unexpected return value: {conversion:?}")),
        Err(Ok(error)) => Err(anyhow!("contract error: {error:?}")),
        Err(Err(error)) => Err(anyhow!("invocation failed: {error:?}")),
    }
}
