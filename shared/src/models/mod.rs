//! Data models
//!
//! Domain entities shared between the server and its clients. Each module
//! holds one entity plus its `Create`/`Update` payload types.

pub mod api_connection;
pub mod category;
pub mod customer;
pub mod dining_table;
pub mod inventory;
pub mod menu_item;
pub mod order;
pub mod reservation;
pub mod staff;

pub use api_connection::*;
pub use category::*;
pub use customer::*;
pub use dining_table::*;
pub use inventory::*;
pub use menu_item::*;
pub use order::*;
pub use reservation::*;
pub use staff::*;
