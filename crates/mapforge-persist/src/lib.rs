pub mod error;
pub mod format;
pub mod legacy;
pub mod load;
pub mod save;

mod reader;

pub use error::PersistError;
pub use format::PackedVersion;
pub use legacy::{convert_file, upgrade_legacy, UpgradeSummary};
pub use load::{load_world, read_world};
pub use save::{save_world, write_world};
