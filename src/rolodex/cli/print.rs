use colored::Colorize;
use rolodex::api::{CmdMessage, MessageLevel};
use rolodex::model::Contact;
use unicode_width::UnicodeWidthStr;

const COLUMN_GAP: usize = 2;

pub(super) fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

pub(super) fn print_contacts(contacts: &[Contact]) {
    for line in format_contacts(contacts) {
        println!("{}", line);
    }
}

/// One aligned row per contact: last name, first name, phone.
fn format_contacts(contacts: &[Contact]) -> Vec<String> {
    let last_width = column_width(contacts, |c| c.last_name.as_str());
    let first_width = column_width(contacts, |c| c.first_name.as_str());

    contacts
        .iter()
        .map(|c| {
            format!(
                "  {}{}{}",
                pad_to_width(&c.last_name, last_width + COLUMN_GAP).bold(),
                pad_to_width(&c.first_name, first_width + COLUMN_GAP),
                c.phone
            )
        })
        .collect()
}

fn column_width(contacts: &[Contact], field: impl Fn(&Contact) -> &str) -> usize {
    contacts.iter().map(|c| field(c).width()).max().unwrap_or(0)
}

fn pad_to_width(s: &str, width: usize) -> String {
    let padding = width.saturating_sub(s.width());
    format!("{}{}", s, " ".repeat(padding))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn columns_are_aligned_by_display_width() {
        colored::control::set_override(false);
        let contacts = vec![
            Contact::new("Dupont", "Jean", "0123456789"),
            Contact::new("Lefèvre", "Hélène", "0555123456"),
        ];
        let lines = format_contacts(&contacts);
        assert_eq!(lines[0], "  Dupont   Jean    0123456789");
        assert_eq!(lines[1], "  Lefèvre  Hélène  0555123456");
    }

    #[test]
    fn empty_list_prints_nothing() {
        assert!(format_contacts(&[]).is_empty());
    }

    #[test]
    fn pad_handles_wide_characters() {
        assert_eq!(pad_to_width("日本", 6), "日本  ");
        assert_eq!(pad_to_width("toolong", 3), "toolong");
    }
}
