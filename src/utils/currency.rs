//! Price display helpers.
//!
//! Listing prices are stored as plain numbers in the dataset's currency;
//! these helpers only deal with presentation.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Currency {
    Usd,
    Dzd,
}

/// Insert `separator` between every group of three digits.
pub fn group_thousands(value: u64, separator: char) -> String {
    let digits = value.to_string();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);

    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(separator);
        }
        grouped.push(c);
    }

    grouped
}

/// Format a listing price, e.g. `$2,500,000` or `85 000 000 DA`.
pub fn format_price(price: f64, currency: Currency) -> String {
    if !price.is_finite() || price < 0.0 {
        return price.to_string();
    }

    let whole = price.round() as u64;
    match currency {
        Currency::Usd => format!("${}", group_thousands(whole, ',')),
        Currency::Dzd => format!("{} DA", group_thousands(whole, ' ')),
    }
}
