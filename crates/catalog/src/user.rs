use serde::{Deserialize, Serialize};

use storefront_core::{Entity, UserId};

/// Sex of a user, as recorded in the reference data.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Sex {
    #[serde(rename = "m")]
    Male,
    #[serde(rename = "f")]
    Female,
}

/// A user owning one or more categories.
///
/// Immutable reference data: loaded once, never created or destroyed at
/// runtime.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub sex: Sex,
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> UserId {
        self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sex_uses_single_letter_wire_form() {
        let user: User = serde_json::from_str(r#"{"id":5,"name":"Max","sex":"m"}"#).unwrap();
        assert_eq!(user.sex, Sex::Male);
        assert_eq!(user.id, UserId::new(5));

        let json = serde_json::to_string(&user).unwrap();
        assert!(json.contains(r#""sex":"m""#));
    }
}
