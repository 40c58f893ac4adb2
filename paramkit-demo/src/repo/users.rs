//! Fixture-backed user repository

use paramkit_core::SortOption;
use serde::Deserialize;
use std::cmp::Ordering;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct User {
    pub id: u64,
    pub age: u32,
    pub name: String,
    pub is_active: bool,
}

/// Optional equality filters, absent means "don't filter"
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UserFilters {
    pub age: Option<u32>,
    pub is_active: Option<bool>,
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum RepoError {
    #[error("Cannot sort users by '{0}'")]
    UnknownSortField(String),
}

const FIXTURE: &[(u64, u32, &str, bool)] = &[
    (1, 22, "Elliot", true),
    (2, 44, "Mr. Robot", true),
    (3, 44, "Angela", false),
    (4, 22, "Darlene", true),
    (5, 33, "Tyrell", false),
    (6, 33, "Joanna", false),
    (7, 22, "Gideon", false),
    (8, 44, "Irving", true),
    (9, 22, "Trenton", false),
    (10, 22, "Mobley", false),
    (11, 44, "Whiterose", false),
    (12, 44, "Dom", true),
    (13, 33, "Krista", true),
    (14, 22, "Shayla", false),
    (15, 33, "Vera", false),
    (16, 22, "Leon", true),
    (17, 22, "Phillip", false),
    (18, 33, "Janice", false),
    (19, 33, "Santiago", false),
    (20, 44, "Susan", false),
    (21, 44, "Olivia", false),
    (22, 33, "Freddie", false),
    (23, 22, "Magda", true),
    (24, 44, "Fernando", false),
    (25, 22, "Isaac", false),
    (26, 22, "Colby", false),
    (27, 22, "Angela Moss", false),
    (28, 22, "Frank Cody", false),
    (29, 22, "Lloyd", false),
    (30, 22, "Cisco", false),
    (31, 33, "Norma", false),
    (32, 33, "Sun", false),
    (33, 33, "Grant", false),
    (34, 22, "Hamburger Man", false),
    (35, 44, "Young Elliot", true),
    (36, 22, "Marv", true),
    (37, 22, "Bill Harper", true),
    (38, 44, "Frankie", false),
    (39, 33, "Julio", false),
    (40, 22, "Berenice", false),
    (41, 33, "Jack", false),
    (42, 33, "Bo", false),
    (43, 44, "Frank", false),
    (44, 44, "Tyra", false),
    (45, 33, "Jamie", false),
    (46, 33, "Crystal", false),
    (47, 22, "Norman", false),
    (48, 44, "Lorenzo", false),
    (49, 22, "Ray", false),
    (50, 22, "Everett", false),
];

/// Read-only user store
#[derive(Debug, Clone)]
pub struct UserRepo {
    users: Vec<User>,
}

impl Default for UserRepo {
    fn default() -> Self {
        Self::fixture()
    }
}

impl UserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// The fifty demo users
    pub fn fixture() -> Self {
        Self::new(
            FIXTURE
                .iter()
                .map(|&(id, age, name, is_active)| User {
                    id,
                    age,
                    name: name.to_string(),
                    is_active,
                })
                .collect(),
        )
    }

    pub fn get_user(&self, id: u64) -> Option<User> {
        self.users.iter().find(|user| user.id == id).cloned()
    }

    /// Filter, sort and slice the users.
    ///
    /// Returns the number of users matching the filters before slicing
    /// together with the requested window.
    pub fn get_users(
        &self,
        filters: &UserFilters,
        limit: u64,
        offset: u64,
        sort: &[SortOption],
    ) -> Result<(u64, Vec<User>), RepoError> {
        if let Some(option) = sort.iter().find(|option| !is_sortable(&option.field)) {
            return Err(RepoError::UnknownSortField(option.field.clone()));
        }

        let mut users: Vec<User> = self
            .users
            .iter()
            .filter(|user| filters.age.is_none_or(|age| user.age == age))
            .filter(|user| filters.is_active.is_none_or(|active| user.is_active == active))
            .cloned()
            .collect();

        let total = users.len() as u64;

        // Stable, so ties keep fixture order
        users.sort_by(|a, b| {
            sort.iter()
                .map(|option| compare(a, b, option))
                .fold(Ordering::Equal, Ordering::then)
        });

        let offset = usize::try_from(offset).unwrap_or(usize::MAX);
        let limit = usize::try_from(limit).unwrap_or(usize::MAX);
        let page = users.into_iter().skip(offset).take(limit).collect();

        Ok((total, page))
    }
}

fn is_sortable(field: &str) -> bool {
    matches!(field, "id" | "age" | "name" | "is_active")
}

fn compare(a: &User, b: &User, option: &SortOption) -> Ordering {
    let ordering = match option.field.as_str() {
        "id" => a.id.cmp(&b.id),
        "age" => a.age.cmp(&b.age),
        "name" => a.name.cmp(&b.name),
        "is_active" => a.is_active.cmp(&b.is_active),
        _ => Ordering::Equal,
    };

    if option.is_desc() {
        ordering.reverse()
    } else {
        ordering
    }
}
