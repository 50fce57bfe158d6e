//! Fixed deployment plan: which properties get minted and the terms they are
//! listed at.

/// Decimals of Stellar asset amounts.
pub const TOKEN_DECIMALS: u32 = 7;

pub const METADATA_BASE: &str =
    "https://ipfs.io/ipfs/QmQVcpsjrA6cr1iJjZAodYwmPekYgbnXGo4DFubJiLc2EB";

/// Registry approvals handed to the escrow stay valid this many ledgers.
pub const APPROVAL_LEDGERS: u32 = 1000;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct ListingTerms {
    pub purchase_price: i128,
    pub escrow_amount: i128,
}

/// One entry per property, in mint order.
pub const LISTINGS: [ListingTerms; 3] = [
    ListingTerms {
        purchase_price: tokens(20),
        escrow_amount: tokens(10),
    },
    ListingTerms {
        purchase_price: tokens(15),
        escrow_amount: tokens(5),
    },
    ListingTerms {
        purchase_price: tokens(10),
        escrow_amount: tokens(5),
    },
];

/// Whole token units to the asset's smallest unit.
pub const fn tokens(n: i128) -> i128 {
    n * 10i128.pow(TOKEN_DECIMALS)
}

/// Metadata URI of the `index`-th property (zero based).
pub fn metadata_uri(index: usize) -> String {
    format!("{METADATA_BASE}/{}.json", index + 1)
}
