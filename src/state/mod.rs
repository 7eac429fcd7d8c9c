pub mod fingers;
pub mod session;

pub use fingers::FingerMap;
pub use session::Session;
