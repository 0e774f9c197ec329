pub mod encoder;
pub mod error;
pub mod format;
pub mod value;

pub use encoder::{Encoder, decode, encode};
pub use error::{FormatError, ValueError};
pub use format::{Format, FormatExt, FormatOptions};
pub use value::{GenericArray, GenericObject, GenericValue, Tag};
