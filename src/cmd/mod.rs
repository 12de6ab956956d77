pub mod average_cost;
pub mod dividend;
pub mod ex_price;
pub mod interactive;
pub mod page;
pub mod render;
pub mod schema;
