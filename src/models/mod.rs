pub mod monthly_plan;
pub mod plan;
pub mod session;
pub mod trade;

pub use monthly_plan::*;
pub use plan::*;
pub use session::*;
pub use trade::*;
