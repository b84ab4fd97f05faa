pub mod list;
pub mod run;
pub mod verify;

pub use list::*;
pub use run::*;
pub use verify::*;
