mod normalizer;

pub use normalizer::WhitespaceNormalizer;
