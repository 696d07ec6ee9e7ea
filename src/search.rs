//! Search Helpers
//!
//! Suggestion filtering over fetched results and contact-link formatting
//! for result cards.

use percent_encoding::{utf8_percent_encode, NON_ALPHANUMERIC};

use crate::models::Consultancy;

/// Validation message when both search inputs are empty
pub const EMPTY_SEARCH_MESSAGE: &str = "Please enter a course or select a country.";

/// `None` when the search may run; otherwise the message to show.
pub fn validate_search(query: &str, country: &str) -> Option<&'static str> {
    if query.trim().is_empty() && country.is_empty() {
        Some(EMPTY_SEARCH_MESSAGE)
    } else {
        None
    }
}

/// Unique course names across all results, in first-seen order.
pub fn collect_course_names(results: &[Consultancy]) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for course in results.iter().flat_map(|c| c.courses.iter()) {
        if !names.iter().any(|n| n == &course.name) {
            names.push(course.name.clone());
        }
    }
    names
}

/// Names containing `query`, case-insensitively. Empty query matches none.
pub fn filter_suggestions(names: &[String], query: &str) -> Vec<String> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return Vec::new();
    }
    names
        .iter()
        .filter(|name| name.to_lowercase().contains(&needle))
        .cloned()
        .collect()
}

/// "Found 1 consultancy" / "Found 3 consultancies"
pub fn result_summary(count: usize) -> String {
    let noun = if count == 1 { "consultancy" } else { "consultancies" };
    format!("Found {} {} matching your search", count, noun)
}

/// Google Maps search link for a street address
pub fn maps_link(address: &str) -> String {
    format!(
        "https://www.google.com/maps/search/?api=1&query={}",
        utf8_percent_encode(address, NON_ALPHANUMERIC)
    )
}

/// WhatsApp chat link; everything but digits is dropped from the number.
pub fn whatsapp_link(phone: &str) -> String {
    let digits: String = phone.chars().filter(char::is_ascii_digit).collect();
    format!("https://wa.me/{}", digits)
}

pub fn mailto_link(email: &str) -> String {
    format!("mailto:{}", email)
}

/// "name (tag1, tag2)", or just the name when untagged
pub fn course_label(name: &str, tags: &[String]) -> String {
    if tags.is_empty() {
        name.to_string()
    } else {
        format!("{} ({})", name, tags.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Course;

    fn make_consultancy(id: u32, courses: &[&str]) -> Consultancy {
        Consultancy {
            id,
            name: format!("Consultancy {}", id),
            courses: courses
                .iter()
                .enumerate()
                .map(|(i, name)| Course { id: id * 100 + i as u32, name: name.to_string(), ..Default::default() })
                .collect(),
            ..Default::default()
        }
    }

    #[test]
    fn test_validate_search() {
        assert_eq!(validate_search("", ""), Some(EMPTY_SEARCH_MESSAGE));
        assert_eq!(validate_search("   ", ""), Some(EMPTY_SEARCH_MESSAGE));
        assert_eq!(validate_search("nursing", ""), None);
        assert_eq!(validate_search("", "UK"), None);
    }

    #[test]
    fn test_collect_course_names_dedups_in_order() {
        let results = vec![
            make_consultancy(1, &["Nursing", "MBA"]),
            make_consultancy(2, &["Computer Science", "Nursing"]),
        ];
        assert_eq!(collect_course_names(&results), vec!["Nursing", "MBA", "Computer Science"]);
        assert!(collect_course_names(&[]).is_empty());
    }

    #[test]
    fn test_filter_suggestions() {
        let names = vec!["Nursing".to_string(), "MBA".to_string(), "Business Analytics".to_string()];
        assert_eq!(filter_suggestions(&names, "bus"), vec!["Business Analytics"]);
        assert_eq!(filter_suggestions(&names, "N"), vec!["Nursing", "Business Analytics"]);
        assert_eq!(filter_suggestions(&names, "mba"), vec!["MBA"]);
        assert!(filter_suggestions(&names, "").is_empty());
        assert!(filter_suggestions(&names, "law").is_empty());
    }

    #[test]
    fn test_result_summary_pluralises() {
        assert_eq!(result_summary(1), "Found 1 consultancy matching your search");
        assert_eq!(result_summary(4), "Found 4 consultancies matching your search");
    }

    #[test]
    fn test_links() {
        assert_eq!(
            maps_link("Putalisadak, Kathmandu"),
            "https://www.google.com/maps/search/?api=1&query=Putalisadak%2C%20Kathmandu"
        );
        assert_eq!(whatsapp_link("+977 (980) 123-4567"), "https://wa.me/9779801234567");
        assert_eq!(mailto_link("a@b.co"), "mailto:a@b.co");
    }

    #[test]
    fn test_course_label() {
        assert_eq!(course_label("Nursing", &["health".into(), "bsc".into()]), "Nursing (health, bsc)");
        assert_eq!(course_label("MBA", &[]), "MBA");
    }
}
