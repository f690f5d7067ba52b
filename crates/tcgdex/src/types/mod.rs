//! Data types returned by the TCGdex API.
//!
//! Full records ([`Card`], [`Set`], [`Serie`]) come from single-item
//! endpoints; brief records ([`CardBrief`], [`SetBrief`], [`SerieBrief`])
//! come from searches. TCGdex returns genuinely different shapes for the
//! two, so they are kept as separate types.

mod card;
mod serie;
mod set;

pub use card::{
    Card, CardAbility, CardAttack, CardBrief, CardItem, CardVariants, CardWeakness, Damage, Level,
};
pub use serie::{Serie, SerieBrief};
pub use set::{Abbreviation, CardCount, Legal, Set, SetBrief};
