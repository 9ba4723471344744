// ✅ Validation Dialog - self-service KK check for one recipient
//
// A visitor types the full registration number; the dialog only answers match / mismatch.
// This is a convenience check, not authentication: the comparison is a plain local equality
// test with no logging, no persistence and no attempt limit.

use crate::recipient::{Recipient, RegistrationNumber, REGISTRATION_NUMBER_LEN};

pub const MATCH_MESSAGE: &str = "Data Valid! Nomor KK sesuai dengan database.";
pub const MISMATCH_MESSAGE: &str = "Nomor KK tidak sesuai. Silakan periksa kembali.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerificationStatus {
    /// Nothing submitted since the dialog opened or the input last changed
    Idle,
    Match,
    Mismatch,
}

impl VerificationStatus {
    pub fn message(&self) -> Option<&'static str> {
        match self {
            VerificationStatus::Idle => None,
            VerificationStatus::Match => Some(MATCH_MESSAGE),
            VerificationStatus::Mismatch => Some(MISMATCH_MESSAGE),
        }
    }
}

/// Pure comparison of a typed candidate against the stored number.
pub fn verify(stored: &RegistrationNumber, candidate: &str) -> VerificationStatus {
    if stored.matches(candidate.trim()) {
        VerificationStatus::Match
    } else {
        VerificationStatus::Mismatch
    }
}

#[derive(Debug, Clone)]
struct DialogSession {
    target: Recipient,
    input: String,
    status: VerificationStatus,
}

/// Modal state. `None` session means closed; closing drops everything.
#[derive(Debug, Clone, Default)]
pub struct ValidationDialog {
    session: Option<DialogSession>,
}

impl ValidationDialog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open for `recipient` with an empty buffer, whatever was open before.
    pub fn open(&mut self, recipient: &Recipient) {
        self.session = Some(DialogSession {
            target: recipient.clone(),
            input: String::new(),
            status: VerificationStatus::Idle,
        });
    }

    pub fn close(&mut self) {
        self.session = None;
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn target(&self) -> Option<&Recipient> {
        self.session.as_ref().map(|s| &s.target)
    }

    pub fn input(&self) -> &str {
        self.session.as_ref().map_or("", |s| s.input.as_str())
    }

    pub fn status(&self) -> VerificationStatus {
        self.session
            .as_ref()
            .map_or(VerificationStatus::Idle, |s| s.status)
    }

    /// Replace the buffer (paste). Non-digits are dropped, then the rest is capped at 16.
    pub fn set_input(&mut self, raw: &str) {
        let filtered: String = raw
            .chars()
            .filter(|c| c.is_ascii_digit())
            .take(REGISTRATION_NUMBER_LEN)
            .collect();
        self.edit(|input| *input = filtered);
    }

    /// Single keystroke. Non-digits and keystrokes past the cap are ignored.
    pub fn push_char(&mut self, c: char) {
        if !c.is_ascii_digit() || self.input().len() >= REGISTRATION_NUMBER_LEN {
            return;
        }
        self.edit(|input| input.push(c));
    }

    pub fn backspace(&mut self) {
        self.edit(|input| {
            input.pop();
        });
    }

    /// Applies `change` and resets the verdict if the buffer actually changed.
    fn edit(&mut self, change: impl FnOnce(&mut String)) {
        if let Some(session) = self.session.as_mut() {
            let before = session.input.clone();
            change(&mut session.input);
            if session.input != before {
                session.status = VerificationStatus::Idle;
            }
        }
    }

    /// True once exactly 16 digits are in the buffer.
    pub fn can_submit(&self) -> bool {
        self.is_open() && self.input().len() == REGISTRATION_NUMBER_LEN
    }

    /// Check the buffer against the target. Returns `None` while submission is disabled.
    pub fn submit(&mut self) -> Option<VerificationStatus> {
        if !self.can_submit() {
            return None;
        }
        let session = self.session.as_mut()?;
        session.status = verify(&session.target.registration_number, &session.input);
        Some(session.status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipient::Region;

    fn recipient(id: u32, kk: &str, name: &str) -> Recipient {
        Recipient::new(id, RegistrationNumber::parse(kk).unwrap(), name, Region::Komis)
    }

    fn siti() -> Recipient {
        recipient(1, "3527123400011234", "Siti Aminah")
    }

    fn hasan() -> Recipient {
        recipient(2, "3527123400029999", "Moh. Hasan")
    }

    fn type_all(dialog: &mut ValidationDialog, text: &str) {
        for c in text.chars() {
            dialog.push_char(c);
        }
    }

    #[test]
    fn test_closed_dialog_has_no_state() {
        let mut dialog = ValidationDialog::new();
        assert!(!dialog.is_open());
        assert!(dialog.target().is_none());
        assert_eq!(dialog.input(), "");
        assert_eq!(dialog.status(), VerificationStatus::Idle);

        dialog.push_char('3');
        assert_eq!(dialog.input(), "");
        assert!(!dialog.can_submit());
        assert_eq!(dialog.submit(), None);
    }

    #[test]
    fn test_correct_number_matches() {
        let mut dialog = ValidationDialog::new();
        dialog.open(&siti());
        type_all(&mut dialog, "3527123400011234");

        assert!(dialog.can_submit());
        assert_eq!(dialog.submit(), Some(VerificationStatus::Match));
        assert_eq!(dialog.status(), VerificationStatus::Match);
        assert_eq!(dialog.status().message(), Some(MATCH_MESSAGE));
    }

    #[test]
    fn test_wrong_number_mismatches() {
        let mut dialog = ValidationDialog::new();
        dialog.open(&siti());
        type_all(&mut dialog, "3527123400011235");

        assert_eq!(dialog.submit(), Some(VerificationStatus::Mismatch));
        assert_eq!(dialog.status().message(), Some(MISMATCH_MESSAGE));
        // The verdict never carries the stored number
        assert!(!MISMATCH_MESSAGE.contains("3527123400011234"));
    }

    #[test]
    fn test_short_input_cannot_be_submitted() {
        let mut dialog = ValidationDialog::new();
        dialog.open(&siti());
        type_all(&mut dialog, "352712340001123");

        assert_eq!(dialog.input().len(), 15);
        assert!(!dialog.can_submit());
        assert_eq!(dialog.submit(), None);
        assert_eq!(dialog.status(), VerificationStatus::Idle);
    }

    #[test]
    fn test_non_digits_are_dropped() {
        let mut dialog = ValidationDialog::new();
        dialog.open(&siti());
        type_all(&mut dialog, "35a27 -12x");
        assert_eq!(dialog.input(), "352712");

        dialog.set_input("3527-1234-0001-1234");
        assert_eq!(dialog.input(), "3527123400011234");
        assert!(dialog.input().chars().all(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_input_is_capped_at_sixteen_digits() {
        let mut dialog = ValidationDialog::new();
        dialog.open(&siti());
        type_all(&mut dialog, "35271234000112345678");
        assert_eq!(dialog.input(), "3527123400011234");

        dialog.set_input("99999999999999999999");
        assert_eq!(dialog.input().len(), 16);
    }

    #[test]
    fn test_edit_after_submit_resets_status() {
        let mut dialog = ValidationDialog::new();
        dialog.open(&siti());
        type_all(&mut dialog, "3527123400011234");
        dialog.submit();
        assert_eq!(dialog.status(), VerificationStatus::Match);

        dialog.backspace();
        assert_eq!(dialog.status(), VerificationStatus::Idle);
        assert!(!dialog.can_submit());

        dialog.push_char('5');
        dialog.submit();
        assert_eq!(dialog.status(), VerificationStatus::Mismatch);

        dialog.set_input("3527123400011234");
        assert_eq!(dialog.status(), VerificationStatus::Idle);
    }

    #[test]
    fn test_ignored_keystroke_keeps_verdict() {
        let mut dialog = ValidationDialog::new();
        dialog.open(&siti());
        type_all(&mut dialog, "3527123400011234");
        dialog.submit();

        dialog.push_char('x');
        dialog.push_char('7');
        assert_eq!(dialog.input(), "3527123400011234");
        assert_eq!(dialog.status(), VerificationStatus::Match);
    }

    #[test]
    fn test_reopen_on_other_recipient_starts_fresh() {
        let mut dialog = ValidationDialog::new();
        dialog.open(&siti());
        type_all(&mut dialog, "3527123400011234");
        dialog.submit();
        assert_eq!(dialog.status(), VerificationStatus::Match);

        dialog.close();
        assert!(!dialog.is_open());
        assert_eq!(dialog.status(), VerificationStatus::Idle);

        dialog.open(&hasan());
        assert_eq!(dialog.target().unwrap().id, 2);
        assert_eq!(dialog.input(), "");
        assert_eq!(dialog.status(), VerificationStatus::Idle);

        // Siti's number is not Hasan's
        type_all(&mut dialog, "3527123400011234");
        assert_eq!(dialog.submit(), Some(VerificationStatus::Mismatch));
    }

    #[test]
    fn test_open_while_open_resets() {
        let mut dialog = ValidationDialog::new();
        dialog.open(&siti());
        type_all(&mut dialog, "35271234");

        dialog.open(&siti());
        assert_eq!(dialog.input(), "");
        assert_eq!(dialog.status(), VerificationStatus::Idle);
    }

    #[test]
    fn test_verify_trims_candidate() {
        let stored = RegistrationNumber::parse("3527123400011234").unwrap();
        assert_eq!(verify(&stored, " 3527123400011234 "), VerificationStatus::Match);
        assert_eq!(verify(&stored, "3527123400011233"), VerificationStatus::Mismatch);
        assert_eq!(verify(&stored, ""), VerificationStatus::Mismatch);
    }
}
