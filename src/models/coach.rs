//! Coach models for database operations.

use chrono::NaiveDateTime;
use diesel::AsExpression;
use diesel::FromSqlRow;
use diesel::deserialize::{self, FromSql};
use diesel::pg::Pg;
use diesel::prelude::*;
use diesel::serialize::{self, Output, ToSql};
use diesel::sql_types::Text;
use serde::{Deserialize, Serialize};
use std::io::Write;

/// Lifecycle status of a coach account.
///
/// Only `approved` coaches appear in public listings. Status transitions are
/// driven by the account-approval flow, not by this subsystem.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    utoipa::ToSchema,
    AsExpression,
    FromSqlRow,
)]
#[diesel(sql_type = Text)]
#[serde(rename_all = "lowercase")]
pub enum CoachStatus {
    Pending,
    Approved,
    Suspended,
}

impl diesel::query_builder::QueryId for CoachStatus {
    type QueryId = CoachStatus;
    const HAS_STATIC_QUERY_ID: bool = false;
}

impl CoachStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            CoachStatus::Pending => "pending",
            CoachStatus::Approved => "approved",
            CoachStatus::Suspended => "suspended",
        }
    }
}

impl ToSql<Text, Pg> for CoachStatus {
    fn to_sql<'b>(&'b self, out: &mut Output<'b, '_, Pg>) -> serialize::Result {
        out.write_all(self.as_str().as_bytes())?;
        Ok(serialize::IsNull::No)
    }
}

impl FromSql<Text, Pg> for CoachStatus {
    fn from_sql(
        bytes: <Pg as diesel::backend::Backend>::RawValue<'_>,
    ) -> deserialize::Result<Self> {
        let s = <String as FromSql<Text, Pg>>::from_sql(bytes)?;
        match s.as_str() {
            "pending" => Ok(CoachStatus::Pending),
            "approved" => Ok(CoachStatus::Approved),
            "suspended" => Ok(CoachStatus::Suspended),
            _ => Err(format!("Unrecognized coach status: {}", s).into()),
        }
    }
}

/// Coach query model for SELECT operations
#[derive(Debug, Queryable, Selectable, Serialize, Clone)]
#[diesel(table_name = crate::schema::coaches)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct Coach {
    pub id: i32,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: CoachStatus,
    pub hometown: Option<String>,
    pub position: Option<String>,
    pub created_at: NaiveDateTime,
}

/// NewCoach insert model for INSERT operations
#[derive(Debug, Insertable, Deserialize, Clone)]
#[diesel(table_name = crate::schema::coaches)]
pub struct NewCoach {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub status: CoachStatus,
    pub hometown: Option<String>,
    pub position: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_coach_status_serde_roundtrip() {
        let json = serde_json::to_string(&CoachStatus::Approved).unwrap();
        assert_eq!(json, "\"approved\"");
        let back: CoachStatus = serde_json::from_str(&json).unwrap();
        assert_eq!(back, CoachStatus::Approved);
    }

    #[test]
    fn test_coach_status_as_str() {
        assert_eq!(CoachStatus::Pending.as_str(), "pending");
        assert_eq!(CoachStatus::Suspended.as_str(), "suspended");
    }
}
