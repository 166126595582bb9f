mod directory_scanner;
mod file_mover;
mod path_validator;

pub use directory_scanner::{DirectoryEntry, list_direct_entries};
pub use file_mover::move_file;
pub use path_validator::{FolderStatus, ensure_folder, validate_directory_exists};
