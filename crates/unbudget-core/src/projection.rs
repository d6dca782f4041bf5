//! Future value of money not spent.
//!
//! Treats a monthly amount as a recurring contribution compounded monthly
//! and paid at the start of each month (annuity due).

use serde::{Deserialize, Serialize};

use crate::error::ProjectionError;
use crate::validation::{MAX_AGE, MIN_AGE};

/// Annual return assumed when none is configured.
pub const DEFAULT_ANNUAL_RATE: f64 = 0.08;

/// Age used for the "by retirement" horizon.
pub const DEFAULT_RETIREMENT_AGE: u32 = 65;

/// Future value of `monthly_amount` contributed every month from
/// `current_age` until `target_age`, rounded to whole currency units.
///
/// Both ages must lie in 1-120 with `target_age` strictly after
/// `current_age`. A zero rate degenerates to the plain sum of contributions.
pub fn project(
    monthly_amount: f64,
    current_age: u32,
    target_age: u32,
    annual_rate: f64,
) -> Result<i64, ProjectionError> {
    let ages = u32::from(MIN_AGE)..=u32::from(MAX_AGE);
    let months = if ages.contains(&current_age) && ages.contains(&target_age) {
        target_age
            .checked_sub(current_age)
            .filter(|&years| years > 0)
            .and_then(|years| years.checked_mul(12))
    } else {
        None
    };
    let Some(n) = months else {
        return Err(ProjectionError::InvalidRange {
            current: current_age,
            target: target_age,
        });
    };
    if !annual_rate.is_finite() || annual_rate <= -1.0 {
        return Err(ProjectionError::InvalidRate(annual_rate));
    }

    let future_value = if annual_rate == 0.0 {
        monthly_amount * f64::from(n)
    } else {
        let r = annual_rate / 12.0;
        // n is at most 119 * 12
        let growth = (1.0 + r).powi(n as i32);
        monthly_amount * ((growth - 1.0) / r) * (1.0 + r)
    };

    Ok(future_value.round() as i64)
}

/// One cell of the comparison grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Horizon {
    /// e.g. "In 5 Years" or "By Age 65"
    pub label: String,
    pub target_age: u32,
    pub value: i64,
}

/// Project `monthly_amount` over +1, +5 and +10 years and up to
/// `retirement_age`.
///
/// Horizons that do not lie after `current_age` are left out.
pub fn projection_grid(
    monthly_amount: f64,
    current_age: u32,
    retirement_age: u32,
    annual_rate: f64,
) -> Result<Vec<Horizon>, ProjectionError> {
    let mut targets: Vec<(String, u32)> = [1u32, 5, 10]
        .into_iter()
        .filter_map(|years| {
            let label = if years == 1 {
                "In 1 Year".to_string()
            } else {
                format!("In {years} Years")
            };
            Some((label, current_age.checked_add(years)?))
        })
        .collect();
    targets.push((format!("By Age {retirement_age}"), retirement_age));

    let mut grid = Vec::with_capacity(targets.len());
    for (label, target_age) in targets {
        match project(monthly_amount, current_age, target_age, annual_rate) {
            Ok(value) => grid.push(Horizon {
                label,
                target_age,
                value,
            }),
            Err(ProjectionError::InvalidRange { .. }) => {
                tracing::debug!(current_age, target_age, "skipping horizon already passed");
            }
            Err(e) => return Err(e),
        }
    }
    Ok(grid)
}
