pub mod loader;
pub mod processor;
pub mod translator;


pub use loader::MarathiLoader;
pub use processor::{DEVANAGARI, MarathiProcessor};
pub use translator::MarathiTranslator;
