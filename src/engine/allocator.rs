//! Rounding allocation
//!
//! Distributes a total across weighted members in whole minor units. Each
//! share is rounded on its own; whatever the roundings miss or overshoot is
//! booked in full on the member with the largest weight (first in roster
//! order on ties), so the shares always add up to the total exactly.

use serde::Serialize;
use tracing::debug;

use super::error::SplitError;
use super::weights::MemberWeight;
use crate::models::{MemberId, Money};

/// One member's share of an allocated amount
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MemberAmount {
    pub id: MemberId,
    pub name: String,
    pub amount: Money,
}

/// Split `total` across `weighted` so the shares sum to `total`
///
/// Output follows the order of `weighted`. An empty weight list yields an
/// empty allocation. Shares are summed in 128-bit arithmetic; the only
/// failure is an adjusted share that no longer fits in [`Money`].
pub fn allocate(total: Money, weighted: &[MemberWeight]) -> Result<Vec<MemberAmount>, SplitError> {
    let mut shares: Vec<MemberAmount> = weighted
        .iter()
        .map(|w| MemberAmount {
            id: w.member_id,
            name: w.name.clone(),
            amount: total.share(w.weight),
        })
        .collect();

    let allocated: i128 = shares
        .iter()
        .map(|s| i128::from(s.amount.minor_units()))
        .sum();
    let diff = i128::from(total.minor_units()) - allocated;

    if diff != 0 {
        if let Some(index) = largest_weight_index(weighted) {
            debug!(
                total = total.minor_units(),
                diff = %diff,
                absorber = %weighted[index].member_id,
                "rounding remainder absorbed"
            );
            let adjusted = i128::from(shares[index].amount.minor_units()) + diff;
            let adjusted = i64::try_from(adjusted).map_err(|_| SplitError::AmountOverflow)?;
            shares[index].amount = Money::from_minor(adjusted);
        }
    }

    Ok(shares)
}

/// Index of the first member holding the maximum weight
fn largest_weight_index(weighted: &[MemberWeight]) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, w) in weighted.iter().enumerate() {
        match best {
            Some((_, weight)) if w.weight <= weight => {}
            _ => best = Some((index, w.weight)),
        }
    }
    best.map(|(index, _)| index)
}
