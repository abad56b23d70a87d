//! Shared domain enums

use serde::{Deserialize, Serialize};
use sqlx::{Decode, Encode, Postgres};
use utoipa::ToSchema;

/// Animal sex classification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum Sex {
    Female,
    Male,
    Unknown,
}

impl Sex {
    pub fn as_str(&self) -> &'static str {
        match self {
            Sex::Female => "female",
            Sex::Male => "male",
            Sex::Unknown => "unknown",
        }
    }
}

impl std::fmt::Display for Sex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Sex {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "female" | "f" => Ok(Sex::Female),
            "male" | "m" => Ok(Sex::Male),
            "unknown" => Ok(Sex::Unknown),
            _ => Err(format!("Invalid sex value: {}", s)),
        }
    }
}

impl From<String> for Sex {
    fn from(s: String) -> Self {
        s.parse().unwrap_or(Sex::Unknown)
    }
}

// SQLx conversion for Sex (stored as text)
impl sqlx::Type<Postgres> for Sex {
    fn type_info() -> sqlx::postgres::PgTypeInfo {
        <String as sqlx::Type<Postgres>>::type_info()
    }
}

impl<'r> Decode<'r, Postgres> for Sex {
    fn decode(value: sqlx::postgres::PgValueRef<'r>) -> Result<Self, sqlx::error::BoxDynError> {
        let s: String = Decode::<Postgres>::decode(value)?;
        Ok(s.into())
    }
}

impl Encode<'_, Postgres> for Sex {
    fn encode_by_ref(&self, buf: &mut sqlx::postgres::PgArgumentBuffer) -> sqlx::encode::IsNull {
        let s: String = self.as_str().to_string();
        <String as Encode<Postgres>>::encode(s, buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_parses_short_and_long_codes() {
        assert_eq!("F".parse::<Sex>().unwrap(), Sex::Female);
        assert_eq!("male".parse::<Sex>().unwrap(), Sex::Male);
        assert!("bovine".parse::<Sex>().is_err());
    }

    #[test]
    fn sex_from_string_falls_back_to_unknown() {
        assert_eq!(Sex::from("??".to_string()), Sex::Unknown);
    }
}
