use serde::Deserialize;
use utoipa::ToSchema;

use crate::validation::{Field, FieldValue, Rule, Validate};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct DutyPayload {
    pub date: Option<String>,
    pub candy_quantity: Option<i32>,
}

#[derive(Debug, Clone)]
pub struct NewDuty {
    pub date: String,
    pub candy_quantity: i32,
}

impl Validate for DutyPayload {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field {
                key: "date",
                value: FieldValue::Text(self.date.as_deref()),
                rules: &[Rule::Required],
            },
            Field {
                key: "candyQuantity",
                value: FieldValue::Number(self.candy_quantity.map(i64::from)),
                rules: &[Rule::Required, Rule::Min(1)],
            },
        ]
    }
}

impl DutyPayload {
    pub fn into_new(self) -> Option<NewDuty> {
        Some(NewDuty {
            date: self.date?,
            candy_quantity: self.candy_quantity?,
        })
    }
}
