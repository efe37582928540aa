//! Share-link codec: plan inputs as a URL query string with short keys.
//!
//! Decoding is deliberately lenient, mirroring a form-driven caller:
//! missing or unparseable values fall back to the field defaults rather
//! than failing the whole link.

use crate::plan::PlanInputs;
use std::str::FromStr;
use url::form_urlencoded;

const KEY_DAILY: &str = "daily";
const KEY_PRICE: &str = "price";
const KEY_DAYS: &str = "days";
const KEY_TARGET: &str = "target";
const KEY_SAVINGS: &str = "savings";
const KEY_PERIOD: &str = "period";
const KEY_EXPENSES: &str = "expenses";

/// Encode inputs as a query string, e.g.
/// `daily=3&price=12000&days=15&target=500000&savings=3000000&period=12&expenses=200000`.
pub fn encode(inputs: &PlanInputs) -> String {
    form_urlencoded::Serializer::new(String::new())
        .append_pair(KEY_DAILY, &inputs.daily_count.to_string())
        .append_pair(KEY_PRICE, &inputs.price_per_service.to_string())
        .append_pair(KEY_DAYS, &inputs.work_days.to_string())
        .append_pair(KEY_TARGET, &inputs.monthly_target.to_string())
        .append_pair(KEY_SAVINGS, &inputs.savings_target.to_string())
        .append_pair(KEY_PERIOD, &inputs.target_period.to_string())
        .append_pair(KEY_EXPENSES, &inputs.living_expenses.to_string())
        .finish()
}

/// Decode a query string (or a full URL containing one) into inputs.
pub fn decode(link: &str) -> PlanInputs {
    let query = link.rsplit_once('?').map_or(link, |(_, q)| q);
    let mut inputs = PlanInputs::default();

    for (key, value) in form_urlencoded::parse(query.as_bytes()) {
        match key.as_ref() {
            KEY_DAILY => inputs.daily_count = lenient(&value, inputs.daily_count),
            KEY_PRICE => inputs.price_per_service = lenient(&value, inputs.price_per_service),
            KEY_DAYS => inputs.work_days = lenient(&value, inputs.work_days),
            KEY_TARGET => inputs.monthly_target = lenient(&value, inputs.monthly_target),
            KEY_SAVINGS => inputs.savings_target = lenient(&value, inputs.savings_target),
            KEY_PERIOD => inputs.target_period = lenient(&value, inputs.target_period),
            KEY_EXPENSES => inputs.living_expenses = lenient(&value, inputs.living_expenses),
            other => log::debug!("ignoring unknown link parameter {}", other),
        }
    }

    inputs
}

fn lenient<T: FromStr>(value: &str, fallback: T) -> T {
    value.trim().parse().unwrap_or(fallback)
}
