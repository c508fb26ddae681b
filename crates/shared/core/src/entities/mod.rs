mod side;
mod stock;
mod stock_symbol;
mod stock_type;
mod trade;

pub use side::Side;
pub use stock::Stock;
pub use stock_symbol::{StockSymbol, UnknownSymbol};
pub use stock_type::StockType;
pub use trade::{Trade, TradeId};
