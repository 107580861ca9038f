use codec::{Decode, Encode, MaxEncodedLen};
use scale_info::TypeInfo;
use sp_runtime::RuntimeDebug;

/// Sequential token sale identifier. `0` means no sale has been held yet.
pub type SaleId = u32;

/// Intent tag for an issuance. Both kinds have the same accounting effect and
/// differ only in the event they emit.
#[derive(Encode, Decode, Clone, Copy, PartialEq, Eq, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub enum IssuanceKind {
    /// Tokens sold during a sale.
    Mint,
    /// Tokens distributed outside of the sale proceeds (rewards, bounties).
    Assign,
}

/// Per-holder lock state.
#[derive(Encode, Decode, Clone, PartialEq, Eq, Default, RuntimeDebug, TypeInfo, MaxEncodedLen)]
pub struct LockRecord {
    /// Outgoing transfers are refused while set.
    pub locked: bool,
    /// Sale that was current when the holder first received issued tokens.
    /// Written once on first issuance and never changed afterwards.
    pub funding_sale: Option<SaleId>,
}

impl LockRecord {
    /// Whether the holder was first funded during `sale`.
    pub fn funded_in(&self, sale: SaleId) -> bool {
        self.funding_sale == Some(sale)
    }
}
