#[allow(unused_imports)]
pub mod book_catalog;
#[allow(unused_imports)]
pub mod stock_provider;

#[allow(unused_imports)]
pub use book_catalog::*;
#[allow(unused_imports)]
pub use stock_provider::*;
