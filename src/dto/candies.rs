use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::{Field, FieldValue, Rule, Validate};

#[derive(Debug, Deserialize, ToSchema)]
pub struct CandyPayload {
    pub name: Option<String>,
    pub price: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewCandy {
    pub name: String,
    pub price: i32,
}

impl Validate for CandyPayload {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field {
                key: "name",
                value: FieldValue::Text(self.name.as_deref()),
                rules: &[Rule::Required, Rule::MinLen(3), Rule::MaxLen(40)],
            },
            Field {
                key: "price",
                value: FieldValue::Number(self.price.map(i64::from)),
                rules: &[Rule::Required, Rule::Min(2)],
            },
        ]
    }
}

impl CandyPayload {
    pub fn into_new(self) -> Option<NewCandy> {
        Some(NewCandy {
            name: self.name?,
            price: self.price?,
        })
    }
}
