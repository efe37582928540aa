use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;

pub fn write_csv<I, R, W>(records: I, writer: W) -> anyhow::Result<()>
where
    I: IntoIterator<Item = R>,
    R: serde::Serialize,
    W: std::io::Write,
{
    let mut wtr = csv::Writer::from_writer(writer);
    for record in records.into_iter() {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Whole-yen display with thousands separators, e.g. `¥540,000`.
pub fn format_yen(amount: Decimal) -> String {
    let whole = amount.abs().round_dp(0).to_i128().unwrap_or(0);
    let sign = if amount < Decimal::ZERO { "-" } else { "" };
    format!("{}¥{}", sign, group_thousands(whole))
}

/// Like [`format_yen`] but with an explicit `+` for non-negative amounts,
/// used for target differences.
pub fn format_yen_signed(amount: Decimal) -> String {
    if amount < Decimal::ZERO {
        format_yen(amount)
    } else {
        format!("+{}", format_yen(amount))
    }
}

fn group_thousands(mut value: i128) -> String {
    let mut groups = Vec::new();
    loop {
        let (rest, group) = (value / 1000, value % 1000);
        if rest == 0 {
            groups.push(format!("{}", group));
            break;
        }
        groups.push(format!("{:03}", group));
        value = rest;
    }
    groups.reverse();
    groups.join(",")
}
