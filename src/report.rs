// 🖨️ Plain-text output for the non-interactive commands (`list`, `stats`)
//
// Same rows and the same masking as the table view, so piping the list somewhere never
// exposes a full registration number.

use crate::recipient::Recipient;
use crate::store::RecipientStore;

const NAME_WIDTH: usize = 28;

/// Numbered, masked rows. Row numbers follow display position, not record id.
pub fn listing_lines(rows: &[&Recipient]) -> Vec<String> {
    if rows.is_empty() {
        return vec!["Data tidak ditemukan".to_string()];
    }

    let mut lines = vec![format!(
        "{:>4}  {:<width$}  {:<16}  {}",
        "No",
        "Nama Penerima",
        "Nomor KK",
        "Alamat",
        width = NAME_WIDTH
    )];

    for (index, recipient) in rows.iter().enumerate() {
        lines.push(format!(
            "{:>4}  {:<width$}  {:<16}  {}",
            index + 1,
            truncate(&recipient.full_name, NAME_WIDTH),
            recipient.masked_registration_number(),
            recipient.region,
            width = NAME_WIDTH
        ));
    }

    lines.push(format!("Menampilkan {} data", rows.len()));
    lines
}

/// Per-region partition plus the total.
pub fn stats_lines(store: &RecipientStore) -> Vec<String> {
    let mut lines: Vec<String> = store
        .region_counts()
        .into_iter()
        .map(|(region, count)| format!("{:<16} {:>5}", region.as_str(), count))
        .collect();
    lines.push(format!("{:<16} {:>5}", "TOTAL", store.len()));
    lines
}

fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
