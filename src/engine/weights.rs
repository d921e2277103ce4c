//! Weight calculation
//!
//! Turns a split policy and a roster into each member's fraction of the
//! shared costs. Weights come back in roster order and sum to 1 whenever
//! at least two members are present.

use serde::Serialize;
use tracing::debug;

use crate::models::{Member, MemberId, Money, SplitPolicy};

/// A member's fraction of the household's shared costs
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct MemberWeight {
    pub member_id: MemberId,
    pub name: String,
    pub income: Money,
    pub weight: f64,
}

/// Compute every member's weight under `policy`
///
/// Returns an empty list for fewer than two members; the split is undefined
/// and callers must reject that case themselves.
pub fn compute_weights(policy: &SplitPolicy, members: &[Member]) -> Vec<MemberWeight> {
    if members.len() < 2 {
        return Vec::new();
    }

    let weights = match policy {
        SplitPolicy::Equal => equal_weights(members.len()),
        SplitPolicy::Income => income_weights(members),
        SplitPolicy::TopEarnsMore { percent_more } => top_earner_weights(members, *percent_more),
    };

    members
        .iter()
        .zip(weights)
        .map(|(member, weight)| MemberWeight {
            member_id: member.id,
            name: member.name.clone(),
            income: member.monthly_income,
            weight,
        })
        .collect()
}

fn equal_weights(n: usize) -> Vec<f64> {
    vec![1.0 / n as f64; n]
}

fn income_weights(members: &[Member]) -> Vec<f64> {
    let total: f64 = members
        .iter()
        .map(|m| m.monthly_income.minor_units() as f64)
        .sum();

    if total <= 0.0 {
        debug!(members = members.len(), "total income is zero, splitting equally");
        return equal_weights(members.len());
    }

    members
        .iter()
        .map(|m| m.monthly_income.minor_units() as f64 / total)
        .collect()
}

/// Only the two highest earners pay; everyone else gets weight 0
fn top_earner_weights(members: &[Member], percent_more: f64) -> Vec<f64> {
    let ratio = 1.0 + percent_more / 100.0;

    // Stable sort: equal incomes keep roster order
    let mut ranked: Vec<usize> = (0..members.len()).collect();
    ranked.sort_by(|&a, &b| members[b].monthly_income.cmp(&members[a].monthly_income));

    let mut weights = vec![0.0; members.len()];
    weights[ranked[0]] = ratio / (ratio + 1.0);
    weights[ranked[1]] = 1.0 / (ratio + 1.0);
    weights
}
