/// Turns raw clipboard text into comparable text.
///
/// Must be pure and total: the same input always yields the same output and
/// it never fails.
pub trait TextNormalizerPort: Send + Sync {
    fn normalize(&self, raw: &str) -> String;
}
