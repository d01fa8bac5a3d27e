mod google;

pub use google::{GoogleTranslateClient, DEFAULT_ENDPOINT, DEFAULT_TIMEOUT};
