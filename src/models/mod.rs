pub mod de;
pub mod order;
pub mod order_kind;
pub mod balance;

pub use order::{HistoryRow, Order, RowClass};
pub use order_kind::OrderKind;
pub use balance::Balance;
