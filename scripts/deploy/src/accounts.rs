use soroban_sdk::{testutils::Address as _, Address, Env};

/// The four identities taking part in a sale.
#[derive(Clone, Debug)]
pub struct Signers {
    pub buyer: Address,
    pub seller: Address,
    pub inspector: Address,
    pub lender: Address,
}

impl Signers {
    pub fn generate(env: &Env) -> Self {
        Signers {
            buyer: Address::generate(env),
            seller: Address::generate(env),
            inspector: Address::generate(env),
            lender: Address::generate(env),
        }
    }
}

/// Strkey form of an address, e.g. `C...` for contracts.
pub fn strkey(address: &Address) -> String {
    let encoded = address.to_string();
    let mut buf = vec![0u8; encoded.len() as usize];
    encoded.copy_into_slice(&mut buf);
    String::from_utf8_lossy(&buf).into_owned()
}
