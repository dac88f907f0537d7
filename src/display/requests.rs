//! Payment-request display formatting

use crate::models::PaymentRequest;

/// Format one payment request as a table row
pub fn format_request_row(request: &PaymentRequest) -> String {
    let status = if request.filled { "filled" } else { "open" };
    format!(
        "{:20} {:10} {:>12} {:>8} {:>6}",
        truncate(&request.description, 20),
        status,
        request.amount.to_string(),
        format!("{}/{}", request.transactions.len(), request.number_of_requests),
        request.due_date.format("%Y-%m-%d").to_string(),
    )
}

/// Format a list of reconciled payment requests as a table
pub fn format_requests_table(requests: &[PaymentRequest]) -> String {
    if requests.is_empty() {
        return "No payment requests.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:20} {:10} {:>12} {:>8} {:>10}\n",
        "Description", "Status", "Amount", "Matched", "Due"
    ));
    output.push_str(&"-".repeat(66));
    output.push('\n');

    for request in requests {
        output.push_str(&format_request_row(request));
        output.push('\n');
    }

    output
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max.saturating_sub(1)).collect();
        format!("{}…", truncated)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Money;
    use chrono::{TimeZone, Utc};

    #[test]
    fn test_row_shows_match_progress() {
        let request = PaymentRequest::new(
            "Dinner",
            Utc.with_ymd_and_hms(2018, 4, 1, 0, 0, 0).unwrap(),
            Money::from_minor(2500),
            2,
        );
        let row = format_request_row(&request);
        assert!(row.contains("open"));
        assert!(row.contains("0/2"));
    }
}
