use utoipa::{
    Modify, OpenApi,
    openapi::{
        self,
        OpenApi as OpenApiSpec,
        security::{HttpAuthScheme, HttpBuilder, SecurityScheme},
    },
};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        auth::{LoginPayload, LoginResponse},
        candies::CandyPayload,
        customers::CustomerPayload,
        duties::DutyPayload,
        sales::{SalePayload, SaleUpdatePayload},
    },
    models::{Candy, Customer, Duty, DutySale, DutySales, Month, Sale},
    routes::{auth, candies, customers, duties, ping, sales},
};

struct SecurityAddon;

impl Modify for SecurityAddon {
    fn modify(&self, openapi: &mut openapi::OpenApi) {
        let components = openapi.components.get_or_insert_with(Default::default);
        components.add_security_scheme(
            "bearer_auth",
            SecurityScheme::Http(
                HttpBuilder::new()
                    .scheme(HttpAuthScheme::Bearer)
                    .bearer_format("JWT")
                    .build(),
            ),
        );
    }
}

#[derive(OpenApi)]
#[openapi(
    paths(
        ping::ping,
        auth::login,
        customers::list_customers,
        customers::register_customer,
        customers::update_customer,
        customers::delete_customer,
        duties::list_duties,
        duties::register_duty,
        duties::update_duty,
        duties::duty_sales,
        candies::list_candies,
        candies::register_candy,
        candies::update_candy,
        candies::delete_candy,
        sales::register_sale,
        sales::update_sale,
        sales::delete_sale,
        sales::list_months,
        sales::month_sales
    ),
    components(
        schemas(
            Customer,
            Duty,
            Candy,
            Sale,
            DutySale,
            DutySales,
            Month,
            CustomerPayload,
            DutyPayload,
            CandyPayload,
            SalePayload,
            SaleUpdatePayload,
            LoginPayload,
            LoginResponse
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Auth", description = "Authentication endpoints"),
        (name = "Customers", description = "Customer endpoints"),
        (name = "Duties", description = "Duty endpoints"),
        (name = "Candies", description = "Candy endpoints"),
        (name = "Sales", description = "Sale endpoints"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
