use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Customer {
    pub id: i32,
    pub name: String,
    pub phone: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Duty {
    pub id: i32,
    pub date: String,
    pub candy_quantity: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
pub struct Candy {
    pub id: i32,
    pub name: String,
    pub price: i32,
}

pub const SALE_STATUSES: &[&str] = &["paid", "not_paid"];

/// Closed status set. Rows store the plain text value; the validation layer
/// rejects anything outside SALE_STATUSES before it reaches the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaleStatus {
    Paid,
    NotPaid,
}

impl SaleStatus {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "paid" => Some(Self::Paid),
            "not_paid" => Some(Self::NotPaid),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Paid => "paid",
            Self::NotPaid => "not_paid",
        }
    }
}

pub const PAYMENT_METHODS: &[&str] = &["money", "transfer", "scheduled"];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentMethod {
    Money,
    Transfer,
    Scheduled,
}

impl PaymentMethod {
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "money" => Some(Self::Money),
            "transfer" => Some(Self::Transfer),
            "scheduled" => Some(Self::Scheduled),
            _ => None,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Money => "money",
            Self::Transfer => "transfer",
            Self::Scheduled => "scheduled",
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow, ToSchema)]
#[serde(rename_all = "camelCase")]
pub struct Sale {
    pub id: i32,
    pub customer_id: i32,
    pub duty_id: i32,
    pub candy_id: i32,
    pub status: String,
    pub payment_method: String,
}

#[derive(Debug, Clone, FromRow)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password: String,
}

/// One flat row of the duty sales join, denormalized with the customer and
/// the candy that was sold.
#[derive(Debug, Clone, Serialize, FromRow, ToSchema)]
pub struct DutySale {
    pub id: i32,
    pub candy_id: i32,
    pub candy_name: String,
    pub candy_price: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
    pub payment_method: String,
    pub status: String,
}

/// Per-duty sales report: the duty, its sale rows in join order, and the
/// running amounts accumulated by payment status.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct DutySales {
    pub id: i32,
    pub date: String,
    pub quantity: i32,
    pub subtotal: i64,
    pub paid_amount: i64,
    pub scheduled_amount: i64,
    pub sales: Vec<DutySale>,
}

/// Month report: every duty with sales in the month, keyed by duty id.
pub type ConsolidatedDuties = BTreeMap<i32, DutySales>;

/// Flat row of the full sales join, carrying the duty columns needed to
/// group by duty when consolidating a month.
#[derive(Debug, Clone, FromRow)]
pub struct SaleRow {
    pub duty_id: i32,
    pub duty_date: String,
    pub duty_quantity: i32,
    pub id: i32,
    pub status: String,
    pub payment_method: String,
    pub candy_id: i32,
    pub candy_name: String,
    pub candy_price: i32,
    pub customer_id: i32,
    pub customer_name: String,
    pub customer_phone: String,
}

impl From<SaleRow> for DutySale {
    fn from(row: SaleRow) -> Self {
        Self {
            id: row.id,
            candy_id: row.candy_id,
            candy_name: row.candy_name,
            candy_price: row.candy_price,
            customer_id: row.customer_id,
            customer_name: row.customer_name,
            customer_phone: row.customer_phone,
            payment_method: row.payment_method,
            status: row.status,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Month {
    pub name: String,
    pub number: u32,
    pub year: i32,
}
