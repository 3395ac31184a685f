mod envelope;
mod error;
mod handle;
mod module;
mod opcode;
mod operand;
mod params;
mod width;

pub use envelope::*;
pub use error::*;
pub use handle::*;
pub use module::*;
pub use opcode::*;
pub use operand::*;
pub use params::*;
pub use width::*;
