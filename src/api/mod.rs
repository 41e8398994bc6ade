pub mod reveal;
pub mod session;

pub use reveal::CurveReveal;
pub use session::{ChartSession, RedrawToken};
