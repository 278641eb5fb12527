use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::validation::{Field, FieldValue, Rule, Validate};

#[derive(Debug, Deserialize, ToSchema)]
pub struct LoginPayload {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Debug, Clone)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Validate for LoginPayload {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field {
                key: "email",
                value: FieldValue::Text(self.email.as_deref()),
                rules: &[Rule::Required],
            },
            Field {
                key: "password",
                value: FieldValue::Text(self.password.as_deref()),
                rules: &[Rule::Required],
            },
        ]
    }
}

impl LoginPayload {
    pub fn into_credentials(self) -> Option<Credentials> {
        Some(Credentials {
            email: self.email?,
            password: self.password?,
        })
    }
}

#[derive(Debug, Serialize, ToSchema)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct Claims {
    pub sub: String,
    pub exp: usize,
}
