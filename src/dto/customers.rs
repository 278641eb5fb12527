use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::{Field, FieldValue, Rule, Validate};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CustomerPayload {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Validated customer attributes, ready to insert or to replace a row with.
#[derive(Debug, Clone)]
pub struct NewCustomer {
    pub name: String,
    pub phone: String,
}

impl Validate for CustomerPayload {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field {
                key: "name",
                value: FieldValue::Text(self.name.as_deref()),
                rules: &[Rule::Required, Rule::MinLen(2), Rule::MaxLen(40)],
            },
            Field {
                key: "phone",
                value: FieldValue::Text(self.phone.as_deref()),
                rules: &[Rule::Required, Rule::MinLen(8), Rule::MaxLen(11)],
            },
        ]
    }
}

impl CustomerPayload {
    pub fn into_new(self) -> Option<NewCustomer> {
        Some(NewCustomer {
            name: self.name?,
            phone: self.phone?,
        })
    }
}
