use serde::Deserialize;
use utoipa::ToSchema;

use crate::models::{PAYMENT_METHODS, PaymentMethod, SALE_STATUSES, SaleStatus};
use crate::validation::{Field, FieldValue, Rule, Validate};

#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SalePayload {
    pub customer_id: Option<i32>,
    pub duty_id: Option<i32>,
    pub candy_id: Option<i32>,
    pub status: Option<String>,
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone)]
pub struct NewSale {
    pub customer_id: i32,
    pub duty_id: i32,
    pub candy_id: i32,
    pub status: SaleStatus,
    pub payment_method: PaymentMethod,
}

impl Validate for SalePayload {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field {
                key: "customerId",
                value: FieldValue::Number(self.customer_id.map(i64::from)),
                rules: &[Rule::Required, Rule::Min(1)],
            },
            Field {
                key: "dutyId",
                value: FieldValue::Number(self.duty_id.map(i64::from)),
                rules: &[Rule::Required, Rule::Min(1)],
            },
            Field {
                key: "candyId",
                value: FieldValue::Number(self.candy_id.map(i64::from)),
                rules: &[Rule::Required, Rule::Min(1)],
            },
            Field {
                key: "status",
                value: FieldValue::Text(self.status.as_deref()),
                rules: &[Rule::Required, Rule::OneOf(SALE_STATUSES)],
            },
            Field {
                key: "paymentMethod",
                value: FieldValue::Text(self.payment_method.as_deref()),
                rules: &[Rule::Required, Rule::OneOf(PAYMENT_METHODS)],
            },
        ]
    }
}

impl SalePayload {
    pub fn into_new(self) -> Option<NewSale> {
        Some(NewSale {
            customer_id: self.customer_id?,
            duty_id: self.duty_id?,
            candy_id: self.candy_id?,
            status: self.status.as_deref().and_then(SaleStatus::parse)?,
            payment_method: self.payment_method.as_deref().and_then(PaymentMethod::parse)?,
        })
    }
}

/// Update payload: only the payment fields are mutable on a recorded sale.
#[derive(Debug, Deserialize, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct SaleUpdatePayload {
    pub status: Option<String>,
    pub payment_method: Option<String>,
}

#[derive(Debug, Clone)]
pub struct SalePatch {
    pub status: SaleStatus,
    pub payment_method: PaymentMethod,
}

impl Validate for SaleUpdatePayload {
    fn fields(&self) -> Vec<Field<'_>> {
        vec![
            Field {
                key: "status",
                value: FieldValue::Text(self.status.as_deref()),
                rules: &[Rule::Required, Rule::OneOf(SALE_STATUSES)],
            },
            Field {
                key: "paymentMethod",
                value: FieldValue::Text(self.payment_method.as_deref()),
                rules: &[Rule::Required, Rule::OneOf(PAYMENT_METHODS)],
            },
        ]
    }
}

impl SaleUpdatePayload {
    pub fn into_patch(self) -> Option<SalePatch> {
        Some(SalePatch {
            status: self.status.as_deref().and_then(SaleStatus::parse)?,
            payment_method: self.payment_method.as_deref().and_then(PaymentMethod::parse)?,
        })
    }
}
