//! Listing query engine: filter, sort, paginate.

use serde::Deserialize;
use utoipa::IntoParams;

use crate::models::User;

/// Query parameters for listing users
///
/// GET /users?name=jo&email=example&sortBy=age&page=2&pageSize=5
#[derive(Debug, Clone, Deserialize, IntoParams)]
pub struct ListQuery {
    /// Case-insensitive substring filter on name
    pub name: Option<String>,
    /// Case-insensitive substring filter on email
    pub email: Option<String>,
    /// "name" or "age"; anything else leaves insertion order
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(default = "default_page")]
    pub page: usize,
    #[serde(rename = "pageSize", default = "default_page_size")]
    pub page_size: usize,
}

fn default_page() -> usize {
    1
}

fn default_page_size() -> usize {
    10
}

impl Default for ListQuery {
    fn default() -> Self {
        Self {
            name: None,
            email: None,
            sort_by: None,
            page: default_page(),
            page_size: default_page_size(),
        }
    }
}

impl ListQuery {
    /// The effective 1-indexed page (values below 1 clamp to 1).
    pub fn page(&self) -> usize {
        self.page.max(1)
    }
}

/// Apply filters, sorting, and pagination to the full user set.
///
/// Returns the filtered (pre-pagination) total and the requested page
/// slice. Filters are conjunctive. Sorting is stable, so equal keys keep
/// insertion order; without `sortBy` the insertion order is untouched.
/// Out-of-range pages yield an empty slice, not an error.
pub fn apply(users: Vec<User>, query: &ListQuery) -> (usize, Vec<User>) {
    let mut filtered: Vec<User> = users
        .into_iter()
        .filter(|user| {
            if let Some(ref name) = query.name {
                if !user.name.to_lowercase().contains(&name.to_lowercase()) {
                    return false;
                }
            }
            if let Some(ref email) = query.email {
                if !user.email.to_lowercase().contains(&email.to_lowercase()) {
                    return false;
                }
            }
            true
        })
        .collect();

    match query.sort_by.as_deref() {
        Some("name") => {
            filtered.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase()));
        }
        Some("age") => filtered.sort_by(|a, b| a.age.cmp(&b.age)),
        _ => {}
    }

    let total = filtered.len();
    let slice: Vec<User> = filtered
        .into_iter()
        .skip((query.page() - 1) * query.page_size)
        .take(query.page_size)
        .collect();

    (total, slice)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(name: &str, email: &str, age: u32) -> User {
        User::new(name.to_string(), email.to_string(), age, "hash".to_string())
    }

    fn twelve_users() -> Vec<User> {
        (1..=12)
            .map(|i| user(&format!("User{}", i), &format!("user{}@example.com", i), 20 + i))
            .collect()
    }

    #[test]
    fn test_no_query_keeps_insertion_order_first_page() {
        let users = twelve_users();
        let (total, slice) = apply(users, &ListQuery::default());

        assert_eq!(total, 12);
        assert_eq!(slice.len(), 10);
        assert_eq!(slice[0].name, "User1");
        assert_eq!(slice[9].name, "User10");
    }

    #[test]
    fn test_name_filter_case_insensitive() {
        let users = vec![
            user("Alice", "alice@example.com", 30),
            user("Bob", "bob@example.com", 40),
            user("alice cooper", "cooper@example.com", 50),
        ];

        let query = ListQuery {
            name: Some("ALICE".to_string()),
            ..Default::default()
        };
        let (total, slice) = apply(users, &query);

        assert_eq!(total, 2);
        assert!(slice.iter().all(|u| u.name.to_lowercase().contains("alice")));
    }

    #[test]
    fn test_filters_are_conjunctive() {
        let users = vec![
            user("Alice", "alice@first.com", 30),
            user("Alice", "alice@second.com", 31),
            user("Bob", "bob@first.com", 40),
        ];

        let query = ListQuery {
            name: Some("alice".to_string()),
            email: Some("first".to_string()),
            ..Default::default()
        };
        let (total, slice) = apply(users, &query);

        assert_eq!(total, 1);
        assert_eq!(slice[0].email, "alice@first.com");
    }

    #[test]
    fn test_sort_by_age_page_two_of_twelve() {
        // Insert out of age order so sorting actually does something.
        let mut users = twelve_users();
        users.reverse();

        let query = ListQuery {
            sort_by: Some("age".to_string()),
            page: 2,
            page_size: 5,
            ..Default::default()
        };
        let (total, slice) = apply(users, &query);

        assert_eq!(total, 12);
        // Ages 21..=32 ascending; page 2 of 5 holds ranks 6..=10.
        let ages: Vec<u32> = slice.iter().map(|u| u.age).collect();
        assert_eq!(ages, vec![26, 27, 28, 29, 30]);
    }

    #[test]
    fn test_sort_by_name_is_lexicographic() {
        let users = vec![
            user("charlie", "c@example.com", 1),
            user("Alice", "a@example.com", 2),
            user("bob", "b@example.com", 3),
        ];

        let query = ListQuery {
            sort_by: Some("name".to_string()),
            ..Default::default()
        };
        let (_, slice) = apply(users, &query);

        let names: Vec<&str> = slice.iter().map(|u| u.name.as_str()).collect();
        assert_eq!(names, vec!["Alice", "bob", "charlie"]);
    }

    #[test]
    fn test_unknown_sort_key_keeps_insertion_order() {
        let users = vec![
            user("Zed", "z@example.com", 50),
            user("Amy", "a@example.com", 20),
        ];

        let query = ListQuery {
            sort_by: Some("email".to_string()),
            ..Default::default()
        };
        let (_, slice) = apply(users, &query);

        assert_eq!(slice[0].name, "Zed");
        assert_eq!(slice[1].name, "Amy");
    }

    #[test]
    fn test_out_of_range_page_is_empty() {
        let (total, slice) = apply(
            twelve_users(),
            &ListQuery {
                page: 5,
                ..Default::default()
            },
        );

        assert_eq!(total, 12);
        assert!(slice.is_empty());
    }

    #[test]
    fn test_page_zero_clamps_to_first_page() {
        let (_, slice) = apply(
            twelve_users(),
            &ListQuery {
                page: 0,
                page_size: 3,
                ..Default::default()
            },
        );

        assert_eq!(slice.len(), 3);
        assert_eq!(slice[0].name, "User1");
    }

    #[test]
    fn test_pagination_is_idempotent() {
        let users = twelve_users();
        let query = ListQuery {
            sort_by: Some("age".to_string()),
            page: 2,
            page_size: 4,
            ..Default::default()
        };

        let (total_a, slice_a) = apply(users.clone(), &query);
        let (total_b, slice_b) = apply(users, &query);

        assert_eq!(total_a, total_b);
        let ids_a: Vec<_> = slice_a.iter().map(|u| u.id).collect();
        let ids_b: Vec<_> = slice_b.iter().map(|u| u.id).collect();
        assert_eq!(ids_a, ids_b);
    }

    #[test]
    fn test_filter_then_paginate_counts_filtered_total() {
        let mut users = twelve_users();
        users.push(user("Special", "special@other.org", 99));

        let query = ListQuery {
            email: Some("example.com".to_string()),
            page: 2,
            page_size: 10,
            ..Default::default()
        };
        let (total, slice) = apply(users, &query);

        assert_eq!(total, 12);
        assert_eq!(slice.len(), 2);
    }
}
