mod creative_content;

pub use creative_content::*;
