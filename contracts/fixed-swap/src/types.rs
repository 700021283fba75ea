use soroban_sdk::contracttype;

/// Storage keys for the contract
#[derive(Clone)]
#[contracttype]
pub enum DataKey {
    /// Ledger contract address of the native asset
    Native,
    /// Ledger contract address of token A
    TokenA,
    /// Ledger contract address of token B
    TokenB,
    /// Unit prices fixed at construction
    Rates,
    /// Tracked custody balances
    Reserves,
    /// Set while a settlement is in flight
    Lock,
}

/// The three assets the engine can hold.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
#[contracttype]
pub enum Asset {
    Native,
    TokenA,
    TokenB,
}

impl Asset {
    /// Label used inside pair identifier preimages.
    pub fn label(&self) -> &'static str {
        match self {
            Asset::Native => "Native",
            Asset::TokenA => "TokenA",
            Asset::TokenB => "TokenB",
        }
    }
}

/// Unit price of each token in smallest native units.
/// The native asset is priced at 1 implicitly.
#[derive(Clone, Debug, PartialEq, Eq)]
#[contracttype]
pub struct RateTable {
    pub price_a: i128,
    pub price_b: i128,
}

/// Balances held in the engine's custody.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[contracttype]
pub struct Reserves {
    pub native: i128,
    pub token_a: i128,
    pub token_b: i128,
}

impl Reserves {
    pub fn of(&self, asset: Asset) -> i128 {
        match asset {
            Asset::Native => self.native,
            Asset::TokenA => self.token_a,
            Asset::TokenB => self.token_b,
        }
    }

    pub fn slot_mut(&mut self, asset: Asset) -> &mut i128 {
        match asset {
            Asset::Native => &mut self.native,
            Asset::TokenA => &mut self.token_a,
            Asset::TokenB => &mut self.token_b,
        }
    }
}
