use soroban_sdk::contracterror;

/// Errors surfaced by the swap contract.
///
/// Codes are part of the contract interface and must not be renumbered.
#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    /// Pair identifier is not one of the six supported directions
    UnsupportedPair = 1,
    /// Computed output differs from the caller's expectation, or no input reaches it
    AmountMismatch = 2,
    /// Engine cannot cover the requested output
    InsufficientReserve = 3,
    /// A ledger transfer was refused
    TransferFailed = 4,
    /// Amount must be positive
    InvalidAmount = 5,
    /// Unit price must be positive
    InvalidPrice = 6,
    /// Arithmetic overflow
    Overflow = 7,
    /// A settlement is already in progress
    Reentrant = 8,
    /// The same ledger address was bound to two assets
    DuplicateAsset = 9,
}
