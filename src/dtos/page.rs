// src/dtos/page.rs
use serde::{Deserialize, Serialize};

use crate::dtos::user::UserResponse;
use crate::error::AppError;
use crate::models::user::User;

const DEFAULT_PAGE_SIZE: u32 = 20;

/// Query parameters of GET /users as they arrive on the wire.
#[derive(Debug, Default, Deserialize)]
pub struct PageQuery {
    pub page: Option<u32>,
    pub size: Option<u32>,
    /// `field` or `field,ASC|DESC`
    pub sort: Option<String>,
}

/// Validated paging window: 0-based page, positive size, optional sort.
#[derive(Debug, Clone)]
pub struct PageRequest {
    pub page: u32,
    pub size: u32,
    pub sort: Option<Sort>,
}

#[derive(Debug, Clone)]
pub struct Sort {
    pub field: SortField,
    pub direction: SortDirection,
}

/// Closed set of sortable columns. Anything outside it is a client error,
/// which also keeps the column name out of reach of the SQL text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortField {
    Id,
    Username,
    Password,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

impl SortField {
    pub fn column(self) -> &'static str {
        match self {
            SortField::Id => "id",
            SortField::Username => "username",
            SortField::Password => "password",
        }
    }

    fn parse(s: &str) -> Result<Self, AppError> {
        match s {
            "id" => Ok(SortField::Id),
            "username" => Ok(SortField::Username),
            "password" => Ok(SortField::Password),
            other => Err(AppError::validation(format!("unknown sort field: {other}"))),
        }
    }
}

impl SortDirection {
    pub fn keyword(self) -> &'static str {
        match self {
            SortDirection::Asc => "ASC",
            SortDirection::Desc => "DESC",
        }
    }
}

impl PageQuery {
    pub fn into_request(self) -> Result<PageRequest, AppError> {
        let size = self.size.unwrap_or(DEFAULT_PAGE_SIZE);
        if size == 0 {
            return Err(AppError::validation("size must be greater than zero"));
        }

        let sort = match self.sort.as_deref() {
            None | Some("") => None,
            Some(raw) => Some(parse_sort(raw)?),
        };

        Ok(PageRequest {
            page: self.page.unwrap_or(0),
            size,
            sort,
        })
    }
}

fn parse_sort(raw: &str) -> Result<Sort, AppError> {
    let (field, direction) = match raw.split_once(',') {
        None => (SortField::parse(raw)?, SortDirection::Asc),
        Some((field, dir)) => {
            let direction = match dir.to_ascii_uppercase().as_str() {
                "ASC" => SortDirection::Asc,
                "DESC" => SortDirection::Desc,
                other => {
                    return Err(AppError::validation(format!(
                        "unknown sort direction: {other}"
                    )))
                }
            };
            (SortField::parse(field)?, direction)
        }
    };

    Ok(Sort { field, direction })
}

/// List response envelope: page of users plus pagination metadata.
#[derive(Debug, Serialize)]
pub struct UserPage {
    pub content: Vec<UserResponse>,
    pub page: u32,
    pub size: u32,
    pub total_elements: i64,
    pub total_pages: i64,
}

impl UserPage {
    pub fn new(users: Vec<User>, request: &PageRequest, total_elements: i64) -> Self {
        let size = i64::from(request.size);
        let total_pages = (total_elements + size - 1) / size;

        Self {
            content: users.into_iter().map(UserResponse::from).collect(),
            page: request.page,
            size: request.size,
            total_elements,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_apply_when_unset() {
        let request = PageQuery::default().into_request().unwrap();
        assert_eq!(request.page, 0);
        assert_eq!(request.size, DEFAULT_PAGE_SIZE);
        assert!(request.sort.is_none());
    }

    #[test]
    fn parses_field_and_direction() {
        let query = PageQuery {
            page: Some(1),
            size: Some(2),
            sort: Some("username,DESC".into()),
        };
        let request = query.into_request().unwrap();
        let sort = request.sort.unwrap();
        assert_eq!(sort.field, SortField::Username);
        assert_eq!(sort.direction, SortDirection::Desc);
    }

    #[test]
    fn bare_field_defaults_to_ascending() {
        let query = PageQuery {
            sort: Some("id".into()),
            ..Default::default()
        };
        let sort = query.into_request().unwrap().sort.unwrap();
        assert_eq!(sort.field, SortField::Id);
        assert_eq!(sort.direction, SortDirection::Asc);
    }

    #[test]
    fn rejects_zero_size() {
        let query = PageQuery {
            size: Some(0),
            ..Default::default()
        };
        assert!(matches!(
            query.into_request(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_unknown_sort_field() {
        let query = PageQuery {
            sort: Some("created_at,ASC".into()),
            ..Default::default()
        };
        assert!(matches!(
            query.into_request(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_unknown_sort_direction() {
        let query = PageQuery {
            sort: Some("username,SIDEWAYS".into()),
            ..Default::default()
        };
        assert!(matches!(
            query.into_request(),
            Err(AppError::ValidationError(_))
        ));
    }

    #[test]
    fn total_pages_rounds_up() {
        let request = PageRequest {
            page: 0,
            size: 2,
            sort: None,
        };
        let page = UserPage::new(vec![], &request, 5);
        assert_eq!(page.total_pages, 3);
    }
}
