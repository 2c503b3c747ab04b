use crate::commands::{CmdMessage, CmdResult};
use crate::directory::Directory;
use crate::error::Result;
use crate::model::Contact;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    directory: &mut Directory<S>,
    last_name: &str,
    first_name: &str,
    phone: &str,
) -> Result<CmdResult> {
    directory.add(last_name, first_name, phone)?;
    let contact = Contact::new(last_name, first_name, phone);

    Ok(CmdResult::default()
        .with_message(CmdMessage::success(format!("Contact added: {}", contact)))
        .with_affected_contacts(vec![contact]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn reports_the_normalized_contact() {
        let mut dir = Directory::new(InMemoryStore::new());
        let result = run(&mut dir, " Dupont ", "Jean", "0123456789").unwrap();

        assert_eq!(dir.count(), 1);
        assert_eq!(result.affected_contacts[0].last_name, "Dupont");
        assert_eq!(
            result.messages[0].content,
            "Contact added: Jean Dupont (0123456789)"
        );
    }

    #[test]
    fn propagates_duplicate_error() {
        let mut dir = Directory::new(InMemoryStore::new());
        run(&mut dir, "Dupont", "Jean", "0123456789").unwrap();
        assert!(run(&mut dir, "Dupont", "Jean", "1")
            .unwrap_err()
            .is_duplicate());
    }
}
