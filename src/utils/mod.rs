use base64::{engine::general_purpose, Engine as _};
use chrono::{Local, NaiveDate, Utc};
use uuid::Uuid;

/// Fresh record id, collision-free across rapid successive calls.
pub fn new_id() -> String {
    Uuid::new_v4().to_string()
}

pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// `INV-` plus the last six digits of the current epoch milliseconds, the
/// number prefilled into new drafts and assigned to duplicates.
pub fn next_invoice_number() -> String {
    let millis = Utc::now().timestamp_millis();
    format!("INV-{:06}", millis % 1_000_000)
}

/// US-style currency string with thousands separators, e.g. `$5,170.00`.
pub fn format_currency(value: f64) -> String {
    let negative = value < 0.0;
    let cents = (value.abs() * 100.0).round() as u64;
    let dollars = cents / 100;
    let fraction = cents % 100;

    let mut grouped = String::new();
    for (index, digit) in dollars.to_string().chars().rev().enumerate() {
        if index > 0 && index % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    let grouped: String = grouped.chars().rev().collect();

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{fraction:02}")
}

/// Encode dropped or browsed image bytes as a `data:` URL for the `logo`
/// field. The core otherwise treats logos as opaque strings.
pub fn logo_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, general_purpose::STANDARD.encode(bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invoice_numbers_keep_the_six_digit_shape() {
        let number = next_invoice_number();
        assert!(number.starts_with("INV-"));
        assert_eq!(number.len(), 10);
        assert!(number[4..].chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn ids_do_not_collide_across_rapid_calls() {
        let ids: Vec<String> = (0..100).map(|_| new_id()).collect();
        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        assert_eq!(unique.len(), ids.len());
    }

    #[test]
    fn currency_formatting_groups_thousands() {
        assert_eq!(format_currency(5170.0), "$5,170.00");
        assert_eq!(format_currency(0.0), "$0.00");
        assert_eq!(format_currency(999.5), "$999.50");
        assert_eq!(format_currency(1234567.891), "$1,234,567.89");
        assert_eq!(format_currency(-42.0), "-$42.00");
    }

    #[test]
    fn logo_data_url_embeds_base64_payload() {
        let url = logo_data_url("image/png", b"\x89PNG");
        assert!(url.starts_with("data:image/png;base64,"));
        assert_eq!(url, "data:image/png;base64,iVBORw==");
    }
}
