#[macro_use]
pub mod test_util;

mod test_loader;
mod test_undo;
