pub mod ledger;

pub use ledger::{RevotePolicy, Vote, VoteLedger};
